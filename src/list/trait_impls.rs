use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use super::{CircularList, Iter};

impl<T: Clone> Clone for CircularList<T> {
    fn clone(&self) -> CircularList<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for CircularList<T> {
    #[inline]
    fn default() -> CircularList<T> {
        CircularList::new()
    }
}

impl<T: PartialEq> PartialEq for CircularList<T> {
    fn eq(&self, other: &CircularList<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularList<T> {}

impl<T: Hash> Hash for CircularList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T> Extend<T> for CircularList<T> {
    /// Appends every item after the tail, locating the tail only once.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.ends().map(|(_, tail)| tail);
        for value in iter {
            tail = Some(self.append_after(tail, value));
        }
    }
}

impl<T> FromIterator<T> for CircularList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = CircularList::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a CircularList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularList<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}
