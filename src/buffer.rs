use std::mem::{ManuallyDrop, MaybeUninit};

/// A heap-allocated run of slots with a fixed capacity.
///
/// Slots `[0, len)` are initialized, slots `[len, capacity)` are filler.
pub(crate) struct Buffer<T> {
    len: usize,
    data: Box<[MaybeUninit<T>]>,
}

impl<T> Buffer<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "buffer capacity must be non-zero");

        Self {
            len: 0,
            data: Box::new_uninit_slice(capacity),
        }
    }

    /// Moves every element, in order, into a fresh allocation of `capacity` slots.
    pub fn reallocate(&mut self, capacity: usize) {
        assert!(
            capacity >= self.len,
            "cannot reallocate {} elements into {} slots",
            self.len,
            capacity
        );
        assert!(capacity > 0, "buffer capacity must be non-zero");

        let mut data: Box<[MaybeUninit<T>]> = Box::new_uninit_slice(capacity);

        unsafe {
            // Elements are moved bitwise, the old allocation is freed without dropping them
            std::ptr::copy_nonoverlapping(self.data.as_ptr(), data.as_mut_ptr(), self.len);
        }

        self.data = data;
    }

    #[inline]
    pub fn push_back(&mut self, value: T) {
        self.insert(self.len(), value);
    }

    pub fn insert(&mut self, index: usize, value: T) {
        if index > self.len() {
            panic!("Index out of bounds: cannot insert at index {}", index);
        }

        if self.is_full() {
            panic!("Buffer is full: cannot insert more elements");
        }

        unsafe {
            let data_ptr = self.data.as_mut_ptr();

            // Open a hole at `index`, the tail moves up one slot
            std::ptr::copy(
                data_ptr.add(index),
                data_ptr.add(index + 1),
                self.len() - index,
            );
            data_ptr.add(index).write(MaybeUninit::new(value));
        }

        self.len += 1;
    }

    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        Some(self.remove(self.len() - 1))
    }

    pub fn remove(&mut self, index: usize) -> T {
        if index >= self.len() {
            panic!("Index out of bounds: cannot remove at index {}", index);
        }

        let value = unsafe { self.data[index].assume_init_read() };

        // The slot at `index` is now logically uninit, the tail closes over it
        unsafe {
            let data_ptr = self.data.as_mut_ptr();
            std::ptr::copy(
                data_ptr.add(index + 1),
                data_ptr.add(index),
                self.len() - index - 1,
            );
        }

        self.len -= 1;
        value
    }

    /// Drops every element, keeping the allocation.
    pub fn clear(&mut self) {
        let len = self.len;

        // Forget the elements first, a panicking destructor then leaks instead of double dropping
        self.len = 0;
        for slot in &mut self.data[..len] {
            unsafe { slot.assume_init_drop() };
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { std::slice::from_raw_parts(self.data.as_ptr().cast::<T>(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.data.as_mut_ptr().cast::<T>(), self.len) }
    }

    /// Gives up ownership of the slots, returning them with the number of initialized ones.
    pub fn into_raw_parts(self) -> (Box<[MaybeUninit<T>]>, usize) {
        let mut this = ManuallyDrop::new(self);
        let data = std::mem::take(&mut this.data);
        (data, this.len)
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::buffer::Buffer;
    use crate::test_utils::DropCounter;

    #[test]
    fn buffer_insert_puts_elements_in_the_correct_positions() {
        let mut sut: Buffer<i64> = Buffer::with_capacity(6);
        assert_eq!(sut.len(), 0);
        assert!(sut.is_empty());

        sut.insert(0, 10);
        assert_eq!(sut.as_slice(), &[10]);

        sut.insert(1, 15);
        assert_eq!(sut.as_slice(), &[10, 15]);

        sut.insert(0, 5);
        assert_eq!(sut.as_slice(), &[5, 10, 15]);

        sut.insert(3, 20);
        assert_eq!(sut.as_slice(), &[5, 10, 15, 20]);

        sut.insert(2, 13);
        assert_eq!(sut.as_slice(), &[5, 10, 13, 15, 20]);

        sut.insert(4, 17);
        assert_eq!(sut.as_slice(), &[5, 10, 13, 15, 17, 20]);
        assert_eq!(sut.len(), 6);
        assert!(sut.is_full());

        let result = std::panic::catch_unwind(move || sut.insert(6, 100));
        assert!(result.is_err());
    }

    #[test]
    fn buffer_insert_panics_on_index_out_of_bounds() {
        let mut sut: Buffer<i64> = Buffer::with_capacity(6);
        let result = std::panic::catch_unwind(move || sut.insert(usize::MAX, 100));
        assert!(result.is_err());
    }

    #[test]
    fn buffer_with_zero_capacity_panics() {
        let result = std::panic::catch_unwind(|| Buffer::<i64>::with_capacity(0));
        assert!(result.is_err());
    }

    #[test]
    fn buffer_remove_removes_correct_elements() {
        let mut sut: Buffer<i64> = Buffer::with_capacity(6);
        for i in 0..6 {
            sut.push_back(i);
        }
        assert_eq!(sut.as_slice(), &[0, 1, 2, 3, 4, 5]);

        assert_eq!(sut.remove(2), 2);
        assert_eq!(sut.as_slice(), &[0, 1, 3, 4, 5]);

        assert_eq!(sut.remove(3), 4);
        assert_eq!(sut.as_slice(), &[0, 1, 3, 5]);

        assert_eq!(sut.remove(0), 0);
        assert_eq!(sut.as_slice(), &[1, 3, 5]);

        assert_eq!(sut.remove(2), 5);
        assert_eq!(sut.as_slice(), &[1, 3]);

        assert_eq!(sut.pop_back(), Some(3));
        assert_eq!(sut.pop_back(), Some(1));
        assert_eq!(sut.pop_back(), None);
        assert_eq!(sut.capacity(), 6);

        let result = std::panic::catch_unwind(move || sut.remove(0));
        assert!(result.is_err());
    }

    #[test]
    fn buffer_reallocate_preserves_elements() {
        let mut sut: Buffer<String> = Buffer::with_capacity(2);
        sut.push_back("a".to_owned());
        sut.push_back("b".to_owned());
        assert!(sut.is_full());

        sut.reallocate(4);
        assert_eq!(sut.capacity(), 4);
        assert!(!sut.is_full());
        assert_eq!(sut.as_slice(), &["a", "b"]);

        sut.push_back("c".to_owned());
        assert_eq!(sut.as_slice(), &["a", "b", "c"]);
    }

    #[test]
    fn buffer_reallocate_below_len_panics() {
        let mut sut: Buffer<i64> = Buffer::with_capacity(4);
        sut.push_back(1);
        sut.push_back(2);
        let result = std::panic::catch_unwind(move || sut.reallocate(1));
        assert!(result.is_err());
    }

    #[test]
    fn buffer_drops_every_element_exactly_once() {
        let drops = Rc::new(Cell::new(0));

        let mut sut = Buffer::with_capacity(2);
        sut.push_back(DropCounter(drops.clone()));
        sut.push_back(DropCounter(drops.clone()));
        sut.reallocate(8);
        sut.push_back(DropCounter(drops.clone()));
        assert_eq!(drops.get(), 0);

        drop(sut.remove(1));
        assert_eq!(drops.get(), 1);

        drop(sut);
        assert_eq!(drops.get(), 3);
    }

    #[test]
    fn buffer_clear_keeps_capacity() {
        let drops = Rc::new(Cell::new(0));

        let mut sut = Buffer::with_capacity(4);
        sut.push_back(DropCounter(drops.clone()));
        sut.push_back(DropCounter(drops.clone()));

        sut.clear();
        assert_eq!(drops.get(), 2);
        assert!(sut.is_empty());
        assert_eq!(sut.capacity(), 4);
    }

    #[test]
    fn buffer_into_raw_parts_does_not_drop_elements() {
        let drops = Rc::new(Cell::new(0));

        let mut sut = Buffer::with_capacity(4);
        sut.push_back(DropCounter(drops.clone()));

        let (mut data, len) = sut.into_raw_parts();
        assert_eq!(len, 1);
        assert_eq!(data.len(), 4);
        assert_eq!(drops.get(), 0);

        unsafe { data[0].assume_init_drop() };
        assert_eq!(drops.get(), 1);
    }
}
