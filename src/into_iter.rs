use std::iter::FusedIterator;
use std::mem::MaybeUninit;

use crate::ArrayList;

/// An owning iterator over the elements of a ArrayList.
///
/// This struct is created by ArrayList::into_iter().
pub struct IntoIter<T> {
    data: Box<[MaybeUninit<T>]>,
    front: usize,
    back: usize,
}

impl<T> Default for IntoIter<T> {
    fn default() -> Self {
        Self {
            data: Box::default(),
            front: 0,
            back: 0,
        }
    }
}

impl<T> IntoIter<T> {
    pub(crate) fn from_list(list: ArrayList<T>) -> Self {
        let (data, len) = list.buf.into_raw_parts();

        Self {
            data,
            front: 0,
            back: len,
        }
    }

    fn as_slice(&self) -> &[T] {
        let remaining = &self.data[self.front..self.back];
        unsafe { std::slice::from_raw_parts(remaining.as_ptr().cast::<T>(), remaining.len()) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        let value = unsafe { self.data[self.front].assume_init_read() };
        self.front += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        self.back -= 1;
        Some(unsafe { self.data[self.back].assume_init_read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: Clone> Clone for IntoIter<T> {
    fn clone(&self) -> Self {
        let list: ArrayList<T> = self.as_slice().iter().cloned().collect();
        Self::from_list(list)
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let (front, back) = (self.front, self.back);

        // Mark everything as consumed first, a panicking destructor then leaks the rest
        self.front = back;
        for slot in &mut self.data[front..back] {
            unsafe { slot.assume_init_drop() };
        }
    }
}

impl<T> core::fmt::Debug for IntoIter<T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter")
            .field(&self.as_slice())
            .field(&self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::ArrayList;
    use crate::test_utils::DropCounter;

    use super::IntoIter;

    #[test]
    fn default_iterator_yelds_nothing() {
        let mut sut: IntoIter<i32> = Default::default();
        assert_eq!(sut.len(), 0);
        assert_eq!(sut.next(), None);
        assert_eq!(sut.next_back(), None);
    }

    #[test]
    fn into_iter_forward() {
        let list = ArrayList::<String>::from(["a".to_owned(), "b".to_owned(), "c".to_owned()]);
        let sut = list.into_iter();
        assert_eq!(sut.collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn into_iter_backward() {
        let list = ArrayList::<usize>::from([0, 1, 2, 3, 4]);
        let sut = list.into_iter().rev();
        assert_eq!(sut.collect::<Vec<_>>(), vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn double_ended_iterator_works_correctly() {
        let list = ArrayList::<usize>::from([0, 1, 2, 3, 4]);

        let mut sut = list.into_iter();
        assert_eq!(sut.len(), 5);
        assert_eq!(sut.next(), Some(0));
        assert_eq!(sut.next_back(), Some(4));
        assert_eq!(sut.next(), Some(1));
        assert_eq!(sut.next_back(), Some(3));
        assert_eq!(sut.len(), 1);
        assert_eq!(sut.next(), Some(2));
        assert_eq!(sut.next_back(), None);
        assert_eq!(sut.next(), None);
        assert_eq!(sut.len(), 0);
    }

    #[test]
    fn partially_consumed_iterator_drops_the_rest() {
        let drops = Rc::new(Cell::new(0));

        let list: ArrayList<_> = (0..5).map(|_| DropCounter(drops.clone())).collect();
        let mut sut = list.into_iter();

        drop(sut.next());
        drop(sut.next_back());
        assert_eq!(drops.get(), 2);

        drop(sut);
        assert_eq!(drops.get(), 5);
    }

    #[test]
    fn clone_works_correctly() {
        let list = ArrayList::<usize>::from([0, 1, 2, 3, 4]);

        let mut base = list.into_iter();
        base.next();
        base.next_back();

        let sut = base.clone();
        assert_eq!(sut.collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(base.collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn debug_works_correctly() {
        let list = ArrayList::<usize>::from([0, 1, 2]);
        let mut sut = list.into_iter();
        sut.next();
        assert_eq!(format!("{sut:?}"), "IntoIter([1, 2], 2)");
    }
}
