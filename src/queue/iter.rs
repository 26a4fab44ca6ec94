use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::utils::wrap_add;

/// `RingQueue` iterator, front to rear.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    ring: *const T,
    capacity: usize,
    front: usize,
    len: usize,
    marker: PhantomData<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    /// `ring` must point at `capacity` slots of which the `len` slots
    /// starting at `front` (cyclically) are live for `'a`.
    #[inline]
    pub(super) fn new(ring: *const T, capacity: usize, front: usize, len: usize) -> Self {
        debug_assert!(len <= capacity);
        Iter {
            ring,
            capacity,
            front,
            len,
            marker: PhantomData,
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter::new(self.ring, self.capacity, self.front, self.len)
    }
}

unsafe impl<'a, T: Sync> Send for Iter<'a, T> {}
unsafe impl<'a, T: Sync> Sync for Iter<'a, T> {}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        let front = self.front;
        self.front = wrap_add(self.front, 1, self.capacity);
        self.len -= 1;
        unsafe { Some(&*self.ring.add(front)) }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let rear = wrap_add(self.front, self.len, self.capacity);
        unsafe { Some(&*self.ring.add(rear)) }
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}
