use std::iter::FusedIterator;
use std::slice;

use crate::ArrayList;

/// A mutable iterator over the elements of a ArrayList.
///
/// This struct is created by ArrayList::iter_mut().
pub struct IterMut<'a, T> {
    delegate: slice::IterMut<'a, T>,
}

impl<T> Default for IterMut<'_, T> {
    fn default() -> Self {
        Self {
            delegate: Default::default(),
        }
    }
}

const _: [(); core::mem::size_of::<usize>() * 2] = [(); core::mem::size_of::<IterMut<usize>>()];

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn from_list(list: &'a mut ArrayList<T>) -> Self {
        Self {
            delegate: list.buf.as_mut_slice().iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.delegate.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.delegate.size_hint()
    }

    #[inline]
    fn count(self) -> usize {
        self.delegate.count()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.delegate.nth(n)
    }

    #[inline]
    fn last(self) -> Option<Self::Item> {
        self.delegate.last()
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.delegate.fold(init, f)
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.delegate.next_back()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.delegate.len()
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> core::fmt::Debug for IterMut<'_, T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IterMut")
            .field(&self.delegate.as_slice())
            .field(&self.len())
            .finish()
    }
}
