use std::fmt;
use std::hash::{Hash, Hasher};

use super::{Iter, RingQueue};
use crate::array::Array;

impl<A: Array> Clone for RingQueue<A>
where
    A::Item: Clone,
{
    fn clone(&self) -> RingQueue<A> {
        let mut queue = RingQueue::new();
        for element in self.iter() {
            let enqueued = queue.enqueue(element.clone());
            debug_assert!(enqueued.is_ok());
        }
        queue
    }
}

impl<A: Array> Drop for RingQueue<A> {
    fn drop(&mut self) {
        self.clear();

        // MaybeUninit never drops the array itself, so only the live
        // elements removed above are dropped.
    }
}

impl<A: Array> Default for RingQueue<A> {
    #[inline]
    fn default() -> RingQueue<A> {
        RingQueue::new()
    }
}

impl<A: Array> PartialEq for RingQueue<A>
where
    A::Item: PartialEq,
{
    fn eq(&self, other: &RingQueue<A>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<A: Array> Eq for RingQueue<A> where A::Item: Eq {}

impl<A: Array> Hash for RingQueue<A>
where
    A::Item: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self.iter() {
            element.hash(state);
        }
    }
}

impl<'a, A: Array> IntoIterator for &'a RingQueue<A> {
    type Item = &'a A::Item;
    type IntoIter = Iter<'a, A::Item>;

    fn into_iter(self) -> Iter<'a, A::Item> {
        self.iter()
    }
}

impl<A: Array> fmt::Debug for RingQueue<A>
where
    A::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}
