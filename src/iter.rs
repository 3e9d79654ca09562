use std::iter::FusedIterator;
use std::slice;

use crate::ArrayList;

/// An iterator over the elements of a ArrayList.
///
/// This struct is created by ArrayList::iter().
pub struct Iter<'a, T> {
    delegate: slice::Iter<'a, T>,
}

const _: [(); core::mem::size_of::<usize>() * 2] = [(); core::mem::size_of::<Iter<usize>>()];

impl<T> Default for Iter<'_, T> {
    fn default() -> Self {
        Self {
            delegate: Default::default(),
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn from_list(list: &'a ArrayList<T>) -> Self {
        Self {
            delegate: list.buf.as_slice().iter(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            delegate: self.delegate.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

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
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.delegate.fold(init, f)
    }

    fn position<P>(&mut self, predicate: P) -> Option<usize>
    where
        P: FnMut(Self::Item) -> bool,
    {
        self.delegate.position(predicate)
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.delegate.next_back()
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.delegate.nth_back(n)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.delegate.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> core::fmt::Debug for Iter<'_, T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.delegate.as_slice())
            .field(&self.len())
            .finish()
    }
}
