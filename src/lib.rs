//! # growable_list
//!
//! `growable_list` implements a contiguous **array list**: a single heap buffer
//! that is reallocated to twice its size whenever it runs out of slots.
//!
//! ## Features
//! - Ordered sequence with O(1) index based access.
//! - Amortized O(1) appends, the backing store doubles on overflow and never shrinks.
//! - Signed positions: negative indices count from the end of the list.
//! - Fallible positional and search operations returning [`Result`] instead of panicking.
//!
//! ## Use Cases
//! `growable_list` is ideal for scenarios where:
//! - You need random access plus dynamic growth.
//! - You want out of range positions reported as values rather than panics.
//! - You want value based `remove`, `count` and ranged `index_of` searches.
//!
//! ## Example
//! ```rust
//! use growable_list::ArrayList;
//!
//! let mut list = ArrayList::new();
//! list.push(1);
//! list.push(2);
//! list.push(3);
//! assert_eq!(list.to_string(), "[1, 2, 3]");
//!
//! list.insert(1, 99).unwrap();
//! assert_eq!(list.to_string(), "[1, 99, 2, 3]");
//!
//! assert_eq!(list.get(-1), Ok(&3));
//! assert_eq!(list.remove(&2), Ok(2));
//! assert_eq!(list.pop(), Ok(3));
//! assert_eq!(list, [1, 99]);
//! ```

mod buffer;
mod error;
mod index;
mod into_iter;
mod iter;
mod iter_mut;
#[cfg(test)]
mod test_utils;

pub use error::{Error, Result};
pub use into_iter::IntoIter;
pub use iter::Iter;
pub use iter_mut::IterMut;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;

use crate::buffer::Buffer;

/// Factor by which the backing store grows when it runs out of slots.
pub const GROWTH_FACTOR: usize = 2;

/// Capacity of the backing store after one growth step.
///
/// Panics with `capacity overflow` past `usize::MAX`.
fn grown_capacity(capacity: usize) -> usize {
    capacity
        .checked_mul(GROWTH_FACTOR)
        .expect("capacity overflow")
}

/// A growable, contiguous sequence container.
///
/// # Features
/// - **Doubling storage**: elements live in a single buffer whose capacity is
///   multiplied by [`GROWTH_FACTOR`] whenever an insertion would overflow it.
/// - **Signed positions**: every position taking operation accepts negative
///   indices, `-1` being the last element.
///
/// # Type Parameters
/// - `T`: The type of elements stored in the list.
///
/// # Example
/// ```rust
/// use growable_list::ArrayList;
///
/// let mut list = ArrayList::new();
/// list.push(3);
/// list.insert(0, 1).unwrap();
/// list.insert(1, 2).unwrap();
///
/// assert!(!list.is_empty());
/// assert_eq!(list.len(), 3);
///
/// assert_eq!(list.pop_at(0), Ok(1));
/// assert_eq!(list.pop_at(0), Ok(2));
/// assert_eq!(list.pop_at(0), Ok(3));
/// ```
pub struct ArrayList<T> {
    buf: Buffer<T>,
}

impl<T, const M: usize> From<[T; M]> for ArrayList<T> {
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push(value));
    }
}

impl<'a, T> Extend<&'a T> for ArrayList<T>
where
    T: Clone,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayList<T> {
    /// Creates a new, empty `ArrayList` with room for a single element.
    ///
    /// # Example
    /// ```rust
    /// use growable_list::ArrayList;
    ///
    /// let list: ArrayList<i64> = ArrayList::new();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 1);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Creates a new, empty `ArrayList` with room for `capacity` elements.
    ///
    /// A `capacity` of zero is raised to one, the backing store is never empty.
    ///
    /// # Example
    /// ```rust
    /// use growable_list::ArrayList;
    ///
    /// let list: ArrayList<i64> = ArrayList::with_capacity(16);
    /// assert_eq!(list.capacity(), 16);
    ///
    /// let list: ArrayList<i64> = ArrayList::with_capacity(0);
    /// assert_eq!(list.capacity(), 1);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Buffer::with_capacity(capacity.max(1)),
        }
    }

    /// Adds an element to the back of the `ArrayList`.
    ///
    /// If the backing store is full it is reallocated with twice the capacity first.
    ///
    /// # Panics
    /// Panics if the doubled capacity overflows `usize`.
    ///
    /// # Example
    /// ```rust
    /// use growable_list::ArrayList;
    ///
    /// let mut list = ArrayList::new();
    /// list.push(10);
    /// list.push(20);
    ///
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.capacity(), 2);
    /// assert_eq!(list, [10, 20]);
    /// ```
    pub fn push(&mut self, value: T) {
        self.reserve_one();
        self.buf.push_back(value);
    }

    /// Inserts an element at position `index`, shifting subsequent elements to the right.
    ///
    /// Any position in `[0, len]` is accepted, inserting at `len` is the same as [`push`].
    /// Negative positions wrap around `len + 1` slots, so `-1` also appends.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `index` addresses none of the `len + 1` slots.
    /// The list is left untouched in that case.
    ///
    /// # Panics
    /// Panics if the backing store is full and its doubled capacity overflows `usize`.
    ///
    /// # Examples
    /// ```
    /// use growable_list::{ArrayList, Error};
    ///
    /// let mut list = ArrayList::from([10, 30]);
    /// list.insert(1, 20).unwrap();
    /// list.insert(3, 40).unwrap();
    /// list.insert(-1, 50).unwrap();
    /// assert_eq!(list, [10, 20, 30, 40, 50]);
    ///
    /// assert_eq!(
    ///     list.insert(6, 60),
    ///     Err(Error::IndexOutOfRange { index: 6, len: 5 })
    /// );
    /// ```
    ///
    /// [`push`]: ArrayList::push
    pub fn insert(&mut self, index: isize, value: T) -> Result<()> {
        let index = index::normalize_insert(index, self.len())?;

        self.reserve_one();
        self.buf.insert(index, value);
        Ok(())
    }

    /// Moves all elements from the `other` list to the end of this one.
    ///
    /// After this operation, other becomes empty.
    ///
    /// # Example
    /// ```rust
    /// use growable_list::ArrayList;
    ///
    /// let mut list1 = ArrayList::from([1, 2]);
    /// let mut list2 = ArrayList::from([3, 4]);
    ///
    /// list1.append(&mut list2);
    ///
    /// assert_eq!(list1, [1, 2, 3, 4]);
    /// assert!(list2.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        self.extend(std::mem::take(other));
    }

    /// Removes and returns the last element of the `ArrayList`.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if the list is empty.
    ///
    /// # Examples
    /// ```
    /// use growable_list::ArrayList;
    ///
    /// let mut list = ArrayList::from([10, 20]);
    ///
    /// assert_eq!(list.pop(), Ok(20));
    /// assert_eq!(list.pop(), Ok(10));
    /// assert!(list.pop().is_err());
    /// ```
    pub fn pop(&mut self) -> Result<T> {
        self.buf
            .pop_back()
            .ok_or(Error::IndexOutOfRange { index: -1, len: 0 })
    }

    /// Removes and returns the element at position `index`, shifting subsequent elements left.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `index` does not address an element.
    ///
    /// # Examples
    /// ```
    /// use growable_list::{ArrayList, Error};
    ///
    /// let mut list = ArrayList::from([10, 20, 30, 40, 50]);
    ///
    /// assert_eq!(list.pop_at(1), Ok(20));
    /// assert_eq!(list.pop_at(-2), Ok(40));
    /// assert_eq!(list, [10, 30, 50]);
    ///
    /// assert_eq!(
    ///     list.pop_at(10),
    ///     Err(Error::IndexOutOfRange { index: 10, len: 3 })
    /// );
    /// ```
    pub fn pop_at(&mut self, index: isize) -> Result<T> {
        let index = index::normalize(index, self.len())?;
        Ok(self.buf.remove(index))
    }

    /// Removes and drops the element at position `index`, shifting subsequent elements left.
    ///
    /// The capacity of the backing store is left unchanged.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `index` does not address an element.
    pub fn delete(&mut self, index: isize) -> Result<()> {
        self.pop_at(index).map(drop)
    }

    /// Removes all elements and resets the backing store to a single slot.
    ///
    /// # Example
    /// ```rust
    /// use growable_list::ArrayList;
    ///
    /// let mut list = ArrayList::from([1, 2, 3]);
    /// assert_eq!(list.capacity(), 4);
    ///
    /// list.clear();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 1);
    /// ```
    pub fn clear(&mut self) {
        log::trace!(
            "clearing {} elements, releasing {} slots",
            self.len(),
            self.capacity()
        );

        self.buf = Buffer::with_capacity(1);
    }

    /// Returns a reference to the element at position `index`.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `index` does not address an element.
    ///
    /// # Examples
    /// ```
    /// use growable_list::ArrayList;
    ///
    /// let list = ArrayList::from([10, 20]);
    ///
    /// assert_eq!(list.get(0), Ok(&10));
    /// assert_eq!(list.get(-1), Ok(&20));
    /// assert!(list.get(2).is_err()); // Out of bounds
    /// ```
    pub fn get(&self, index: isize) -> Result<&T> {
        let index = index::normalize(index, self.len())?;
        Ok(&self.buf.as_slice()[index])
    }

    /// Returns a mutable reference to the element at position `index`.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `index` does not address an element.
    ///
    /// # Examples
    /// ```
    /// use growable_list::ArrayList;
    ///
    /// let mut list = ArrayList::from([10, 20]);
    ///
    /// *list.get_mut(-1).unwrap() += 1;
    /// assert_eq!(list, [10, 21]);
    /// assert!(list.get_mut(-3).is_err()); // Out of bounds
    /// ```
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T> {
        let index = index::normalize(index, self.len())?;
        Ok(&mut self.buf.as_mut_slice()[index])
    }

    /// Overwrites the element at position `index`, returning the previous one.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `index` does not address an element.
    ///
    /// # Examples
    /// ```
    /// use growable_list::ArrayList;
    ///
    /// let mut list = ArrayList::from([10, 20]);
    ///
    /// assert_eq!(list.set(0, 15), Ok(10));
    /// assert_eq!(list, [15, 20]);
    /// ```
    pub fn set(&mut self, index: isize, value: T) -> Result<T> {
        self.get_mut(index).map(|slot| std::mem::replace(slot, value))
    }

    /// Returns a reference to the first element of the `ArrayList`, if any.
    pub fn first(&self) -> Option<&T> {
        self.buf.as_slice().first()
    }

    /// Returns a reference to the last element of the `ArrayList`, if any.
    pub fn last(&self) -> Option<&T> {
        self.buf.as_slice().last()
    }

    /// Returns the number of elements currently stored in the `ArrayList`.
    ///
    /// # Example
    /// ```rust
    /// use growable_list::ArrayList;
    ///
    /// let mut list = ArrayList::new();
    /// list.push(1);
    /// list.push(2);
    ///
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub const fn len(&self) -> usize {
        self.buf.len()
    }

    /// Checks if the `ArrayList` is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of slots of the backing store.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Provides an iterator over list's elements.
    ///
    /// # Examples
    /// ```
    /// use growable_list::ArrayList;
    ///
    /// let list = ArrayList::from([0, 1, 2]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::from_list(self)
    }

    /// Provides a mutable iterator over list's elements.
    ///
    /// # Examples
    /// ```
    /// use growable_list::ArrayList;
    ///
    /// let mut list = ArrayList::from([0, 1, 2]);
    ///
    /// for value in list.iter_mut() {
    ///     *value *= 2;
    /// }
    /// assert_eq!(list, [0, 2, 4]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::from_list(self)
    }

    fn reserve_one(&mut self) {
        if !self.buf.is_full() {
            return;
        }

        let capacity = self.capacity();
        let new_capacity = grown_capacity(capacity);

        log::trace!("growing backing store from {capacity} to {new_capacity} slots");
        self.buf.reallocate(new_capacity);
    }
}

impl<T> ArrayList<T>
where
    T: PartialEq,
{
    /// Removes and returns the first element equal to `value`.
    ///
    /// # Errors
    /// [`Error::ValueNotFound`] if no element equals `value`.
    ///
    /// # Examples
    /// ```
    /// use growable_list::{ArrayList, Error};
    ///
    /// let mut list = ArrayList::from([1, 99, 2, 3, 2]);
    ///
    /// assert_eq!(list.remove(&2), Ok(2));
    /// assert_eq!(list, [1, 99, 3, 2]);
    /// assert_eq!(list.remove(&42), Err(Error::ValueNotFound));
    /// ```
    pub fn remove(&mut self, value: &T) -> Result<T> {
        let index = self
            .iter()
            .position(|v| v == value)
            .ok_or(Error::ValueNotFound)?;

        Ok(self.buf.remove(index))
    }

    /// Returns `true` if any element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }

    /// Returns the number of elements equal to `value`.
    ///
    /// # Example
    /// ```rust
    /// use growable_list::ArrayList;
    ///
    /// let list = ArrayList::from([1, 2, 1, 3, 1]);
    /// assert_eq!(list.count(&1), 3);
    /// assert_eq!(list.count(&4), 0);
    /// ```
    pub fn count(&self, value: &T) -> usize {
        self.iter().filter(|&v| v == value).count()
    }

    /// Returns the position of the first element equal to `value` within `[start, end)`.
    ///
    /// Both `start` and an explicit `end` are normalized like any other position,
    /// so they must address existing elements. Without `end` the search runs
    /// to the end of the list.
    ///
    /// # Errors
    /// [`Error::ValueNotFound`] if no element in range equals `value`, or if
    /// `start` or `end` is out of range.
    ///
    /// # Examples
    /// ```
    /// use growable_list::{ArrayList, Error};
    ///
    /// let list = ArrayList::from([5, 1, 5, 2]);
    ///
    /// assert_eq!(list.index_of(&5, 0, None), Ok(0));
    /// assert_eq!(list.index_of(&5, 1, None), Ok(2));
    /// assert_eq!(list.index_of(&2, 0, Some(2)), Err(Error::ValueNotFound));
    /// assert_eq!(list.index_of(&2, -1, None), Ok(3));
    /// assert_eq!(list.index_of(&2, 0, Some(4)), Err(Error::ValueNotFound));
    /// ```
    pub fn index_of(&self, value: &T, start: isize, end: Option<isize>) -> Result<usize> {
        let len = self.len();
        let end = match end {
            Some(end) => index::normalize(end, len).map_err(|_| Error::ValueNotFound)?,
            None => len,
        };
        let start = index::normalize(start, len).map_err(|_| Error::ValueNotFound)?;

        let slice = self.buf.as_slice();
        (start..end)
            .find(|&i| slice[i] == *value)
            .ok_or(Error::ValueNotFound)
    }
}

impl<T> ArrayList<T>
where
    T: Ord,
{
    /// Returns the smallest element, the first one among equals.
    ///
    /// # Errors
    /// [`Error::Empty`] if the list has no elements.
    ///
    /// # Example
    /// ```rust
    /// use growable_list::{ArrayList, Error};
    ///
    /// let list = ArrayList::from([3, 1, 2]);
    /// assert_eq!(list.min(), Ok(&1));
    ///
    /// let list: ArrayList<i32> = ArrayList::new();
    /// assert_eq!(list.min(), Err(Error::Empty));
    /// ```
    pub fn min(&self) -> Result<&T> {
        let mut iter = self.iter();
        let first = iter.next().ok_or(Error::Empty)?;
        Ok(iter.fold(first, |min, v| if v < min { v } else { min }))
    }

    /// Returns the largest element, the first one among equals.
    ///
    /// # Errors
    /// [`Error::Empty`] if the list has no elements.
    ///
    /// # Example
    /// ```rust
    /// use growable_list::{ArrayList, Error};
    ///
    /// let list = ArrayList::from([3, 1, 2]);
    /// assert_eq!(list.max(), Ok(&3));
    ///
    /// let list: ArrayList<i32> = ArrayList::new();
    /// assert_eq!(list.max(), Err(Error::Empty));
    /// ```
    pub fn max(&self) -> Result<&T> {
        let mut iter = self.iter();
        let first = iter.next().ok_or(Error::Empty)?;
        Ok(iter.fold(first, |max, v| if v > max { v } else { max }))
    }
}

impl<T> ArrayList<T>
where
    T: Clone,
{
    /// Returns a new list with the elements of this one followed by those of `other`.
    ///
    /// Neither input is modified. The same operation is available as `&a + &b`.
    ///
    /// # Example
    /// ```rust
    /// use growable_list::ArrayList;
    ///
    /// let a = ArrayList::from([1, 2]);
    /// let b = ArrayList::from([3]);
    ///
    /// assert_eq!(a.concat(&b), [1, 2, 3]);
    /// assert_eq!(&a + &b, [1, 2, 3]);
    /// assert_eq!(a, [1, 2]);
    /// ```
    pub fn concat(&self, other: &Self) -> Self {
        let mut this = Self::new();
        this.extend(self);
        this.extend(other);
        this
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Clone> Add for &ArrayList<T> {
    type Output = ArrayList<T>;

    fn add(self, other: Self) -> Self::Output {
        self.concat(other)
    }
}

impl<T> Add for ArrayList<T> {
    type Output = ArrayList<T>;

    fn add(mut self, other: Self) -> Self::Output {
        self.extend(other);
        self
    }
}

impl<T, const M: usize> PartialEq<[T; M]> for ArrayList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> PartialEq<&[T]> for ArrayList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> PartialEq<[T]> for ArrayList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> PartialEq for ArrayList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> Eq for ArrayList<T> where T: Eq {}

impl<T> Hash for ArrayList<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|v| v.hash(state));
    }
}

impl<T> fmt::Display for ArrayList<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<T> fmt::Debug for ArrayList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_list(self)
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::from_list(self)
    }
}

impl<'a, T> IntoIterator for &'a mut ArrayList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut::from_list(self)
    }
}
