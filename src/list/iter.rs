use std::iter::FusedIterator;

use super::CircularList;

/// `CircularList` iterator, head to tail.
///
/// Yields exactly `len()` items; the cycle itself never ends.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    list: &'a CircularList<T>,
    next: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(super) fn new(list: &'a CircularList<T>, head: Option<usize>, len: usize) -> Self {
        Iter {
            list,
            next: head,
            remaining: len,
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            list: self.list,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.next?;
        self.remaining -= 1;
        self.next = Some(self.list.next_of(handle));
        Some(self.list.value_of(handle))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}
