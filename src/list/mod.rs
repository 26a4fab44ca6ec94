//! A singly-linked circular list whose nodes live in an arena.

use alloc::vec::{self, Vec};
use std::iter::Rev;
use std::mem;

use tracing::{debug, trace};

use crate::error::ListError;

mod iter;
mod trait_impls;

pub use self::iter::Iter;

/// Reverse traversal of a `CircularList`, buffered from one forward pass.
pub type ReverseIter<'a, T> = Rev<vec::IntoIter<&'a T>>;

/// An arena slot.
///
/// Occupied slots are the list's nodes; vacant slots form a free list threaded
/// through `next_free`.
enum Entry<T> {
    Occupied { value: T, next: usize },
    Vacant { next_free: Option<usize> },
}

/// `CircularList` is a singly-linked list whose last node links back to the
/// first one.
///
/// Nodes are stored in an arena and addressed by stable `usize` handles, so
/// relinking is O(1) once the predecessor is known and a deleted node's slot
/// is recycled by later insertions. Positions are 1-based.
///
/// Every internal scan stops when it comes back around to the head node; no
/// link is ever empty while the list holds nodes.
///
/// # Examples
///
/// ```
/// use circular::CircularList;
///
/// let mut list = CircularList::new();
/// list.insert_at_end(10);
/// list.insert_at_end(20);
/// list.insert_at_end(30);
/// assert_eq!(list.traverse_forward().collect::<Vec<_>>(), vec![&10, &20, &30]);
///
/// assert_eq!(list.delete_from_beginning(), Ok(10));
/// assert_eq!(list.delete_from_end(), Ok(30));
/// assert_eq!(list.traverse_forward().collect::<Vec<_>>(), vec![&20]);
/// ```
pub struct CircularList<T> {
    entries: Vec<Entry<T>>,
    free: Option<usize>,
    head: Option<usize>,
    len: usize,
}

impl<T> CircularList<T> {
    #[inline]
    fn next_of(&self, handle: usize) -> usize {
        match self.entries[handle] {
            Entry::Occupied { next, .. } => next,
            Entry::Vacant { .. } => unreachable!("handle {} is not linked", handle),
        }
    }

    #[inline]
    fn value_of(&self, handle: usize) -> &T {
        match self.entries[handle] {
            Entry::Occupied { ref value, .. } => value,
            Entry::Vacant { .. } => unreachable!("handle {} is not linked", handle),
        }
    }

    #[inline]
    fn set_next(&mut self, handle: usize, successor: usize) {
        match self.entries[handle] {
            Entry::Occupied { ref mut next, .. } => *next = successor,
            Entry::Vacant { .. } => unreachable!("handle {} is not linked", handle),
        }
    }

    /// Stores `value` in a free slot and returns its handle.
    ///
    /// A `next` of `None` links the node to itself.
    fn alloc(&mut self, value: T, next: Option<usize>) -> usize {
        let handle = match self.free {
            Some(handle) => {
                self.free = match self.entries[handle] {
                    Entry::Vacant { next_free } => next_free,
                    Entry::Occupied { .. } => unreachable!("free slot {} is occupied", handle),
                };
                handle
            }
            None => {
                self.entries.push(Entry::Vacant { next_free: None });
                self.entries.len() - 1
            }
        };
        self.entries[handle] = Entry::Occupied {
            value,
            next: next.unwrap_or(handle),
        };
        handle
    }

    /// Moves the payload out of an already unlinked node and frees its slot.
    fn release(&mut self, handle: usize) -> T {
        let vacant = Entry::Vacant { next_free: self.free };
        let value = match mem::replace(&mut self.entries[handle], vacant) {
            Entry::Occupied { value, .. } => value,
            Entry::Vacant { .. } => unreachable!("handle {} released twice", handle),
        };
        self.free = Some(handle);

        if self.head.is_none() {
            self.entries.clear();
            self.free = None;
        }
        value
    }

    /// Returns the handles of the head and tail nodes.
    ///
    /// The tail is found by walking from the head until a node links back to
    /// it.
    fn ends(&self) -> Option<(usize, usize)> {
        let head = self.head?;
        let mut node = head;
        let mut steps = 1;
        while self.next_of(node) != head {
            node = self.next_of(node);
            steps += 1;
            debug_assert!(steps <= self.len);
        }
        Some((head, node))
    }

    /// Returns the handle `index` links after the head.
    ///
    /// The list must hold more than `index` nodes.
    fn nth_handle(&self, index: usize) -> usize {
        debug_assert!(index < self.len);
        let mut node = match self.head {
            Some(head) => head,
            None => unreachable!("walk of {} links on an empty list", index),
        };
        for _ in 0..index {
            node = self.next_of(node);
        }
        node
    }

    /// Links a new node after `tail`, or makes it the only node if `tail` is
    /// `None`, and returns its handle.
    fn append_after(&mut self, tail: Option<usize>, value: T) -> usize {
        let handle = match (self.head, tail) {
            (Some(head), Some(tail)) => {
                let handle = self.alloc(value, Some(head));
                self.set_next(tail, handle);
                handle
            }
            _ => {
                debug_assert!(self.head.is_none());
                let handle = self.alloc(value, None);
                self.head = Some(handle);
                handle
            }
        };
        self.len += 1;
        handle
    }
}

impl<T> CircularList<T> {
    /// Creates an empty `CircularList`.
    #[inline]
    pub fn new() -> CircularList<T> {
        CircularList {
            entries: Vec::new(),
            free: None,
            head: None,
            len: 0,
        }
    }

    /// Creates an empty `CircularList` with room for `capacity` nodes before
    /// the arena reallocates.
    pub fn with_capacity(capacity: usize) -> CircularList<T> {
        CircularList {
            entries: Vec::with_capacity(capacity),
            free: None,
            head: None,
            len: 0,
        }
    }

    /// Returns the number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the payload of the head node.
    pub fn first(&self) -> Option<&T> {
        self.head.map(|head| self.value_of(head))
    }

    /// Returns the payload of the tail node.
    pub fn last(&self) -> Option<&T> {
        self.ends().map(|(_, tail)| self.value_of(tail))
    }

    /// Returns true if some node holds `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular::CircularList;
    ///
    /// let mut list: CircularList<_> = vec![1, 2, 3].into_iter().collect();
    /// assert_eq!(list.contains(&3), true);
    /// assert_eq!(list.contains(&4), false);
    ///
    /// list.clear();
    /// assert_eq!(list.contains(&3), false);
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|x| x == value)
    }

    /// Appends a node after the current tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular::CircularList;
    ///
    /// let mut list = CircularList::new();
    /// list.insert_at_end(1);
    /// list.insert_at_end(2);
    /// assert_eq!(list.last(), Some(&2));
    /// ```
    pub fn insert_at_end(&mut self, value: T) {
        let tail = self.ends().map(|(_, tail)| tail);
        let handle = self.append_after(tail, value);
        trace!(handle, len = self.len, "inserted at end");
    }

    /// Prepends a node; it becomes the new head and the tail links to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular::CircularList;
    ///
    /// let mut list = CircularList::new();
    /// list.insert_at_end(2);
    /// list.insert_at_beginning(1);
    /// assert_eq!(list.first(), Some(&1));
    /// assert_eq!(list.last(), Some(&2));
    /// ```
    pub fn insert_at_beginning(&mut self, value: T) {
        let handle = match self.ends() {
            Some((head, tail)) => {
                let handle = self.alloc(value, Some(head));
                self.set_next(tail, handle);
                self.head = Some(handle);
                self.len += 1;
                handle
            }
            None => self.append_after(None, value),
        };
        trace!(handle, len = self.len, "inserted at beginning");
    }

    /// Inserts a node so that it ends up at the 1-based `position`.
    ///
    /// Valid positions are `1..=len() + 1`; `len() + 1` appends after the
    /// tail. Any other position returns `ListError::InvalidPosition` and
    /// leaves the list unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular::{CircularList, ListError};
    ///
    /// let mut list: CircularList<_> = vec![10, 30].into_iter().collect();
    /// list.insert_at_position(20, 2).unwrap();
    /// list.insert_at_position(40, 4).unwrap();
    /// assert_eq!(list.iter().collect::<Vec<_>>(), vec![&10, &20, &30, &40]);
    ///
    /// assert_eq!(
    ///     list.insert_at_position(50, 6),
    ///     Err(ListError::InvalidPosition { position: 6, len: 4 })
    /// );
    /// ```
    pub fn insert_at_position(&mut self, value: T, position: usize) -> Result<(), ListError> {
        if position < 1 || position > self.len + 1 {
            debug!(position, len = self.len, "insert rejected, invalid position");
            return Err(ListError::InvalidPosition {
                position,
                len: self.len,
            });
        }

        if position == 1 {
            self.insert_at_beginning(value);
            return Ok(());
        }

        let prev = self.nth_handle(position - 2);
        let next = self.next_of(prev);
        let handle = self.alloc(value, Some(next));
        self.set_next(prev, handle);
        self.len += 1;

        trace!(handle, position, len = self.len, "inserted at position");
        Ok(())
    }

    /// Removes the head node and returns its payload.
    ///
    /// The tail is relinked to the old head's successor, which becomes the
    /// new head. Removing the only node empties the list.
    pub fn delete_from_beginning(&mut self) -> Result<T, ListError> {
        let (head, tail) = match self.ends() {
            Some(ends) => ends,
            None => {
                debug!("delete from beginning rejected, list is empty");
                return Err(ListError::Empty);
            }
        };

        if head == tail {
            self.head = None;
        } else {
            let new_head = self.next_of(head);
            self.set_next(tail, new_head);
            self.head = Some(new_head);
        }
        self.len -= 1;

        trace!(handle = head, len = self.len, "deleted from beginning");
        Ok(self.release(head))
    }

    /// Removes the tail node and returns its payload.
    ///
    /// The tail's predecessor is relinked to the head. Removing the only node
    /// empties the list.
    pub fn delete_from_end(&mut self) -> Result<T, ListError> {
        let head = match self.head {
            Some(head) => head,
            None => {
                debug!("delete from end rejected, list is empty");
                return Err(ListError::Empty);
            }
        };

        let mut prev = None;
        let mut node = head;
        while self.next_of(node) != head {
            prev = Some(node);
            node = self.next_of(node);
        }

        match prev {
            Some(prev) => self.set_next(prev, head),
            None => self.head = None,
        }
        self.len -= 1;

        trace!(handle = node, len = self.len, "deleted from end");
        Ok(self.release(node))
    }

    /// Removes the node at the 1-based `position` and returns its payload.
    ///
    /// Valid positions are `1..=len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular::CircularList;
    ///
    /// let mut list: CircularList<_> = (1..6).collect();
    /// assert_eq!(list.delete_at_position(3), Ok(3));
    /// assert_eq!(list.iter().collect::<Vec<_>>(), vec![&1, &2, &4, &5]);
    /// ```
    pub fn delete_at_position(&mut self, position: usize) -> Result<T, ListError> {
        if self.head.is_none() {
            debug!(position, "delete at position rejected, list is empty");
            return Err(ListError::Empty);
        }

        if position < 1 || position > self.len {
            debug!(position, len = self.len, "delete rejected, invalid position");
            return Err(ListError::InvalidPosition {
                position,
                len: self.len,
            });
        }

        if position == 1 {
            return self.delete_from_beginning();
        }
        if position == self.len {
            return self.delete_from_end();
        }

        let prev = self.nth_handle(position - 2);
        let target = self.next_of(prev);
        let next = self.next_of(target);
        self.set_next(prev, next);
        self.len -= 1;

        trace!(handle = target, position, len = self.len, "deleted at position");
        Ok(self.release(target))
    }

    /// Removes the first node holding `value` and returns its payload.
    ///
    /// The head is checked on its own first and removed through
    /// `delete_from_beginning`; the scan then starts at the head's successor
    /// and ends when it comes back to the head.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular::{CircularList, ListError};
    ///
    /// let mut list: CircularList<_> = vec![5, 7, 5].into_iter().collect();
    /// assert_eq!(list.delete_by_value(&7), Ok(7));
    /// assert_eq!(list.delete_by_value(&7), Err(ListError::NotFound));
    /// ```
    pub fn delete_by_value(&mut self, value: &T) -> Result<T, ListError>
    where
        T: PartialEq,
    {
        let head = match self.head {
            Some(head) => head,
            None => {
                debug!("delete by value rejected, list is empty");
                return Err(ListError::Empty);
            }
        };

        if self.value_of(head) == value {
            return self.delete_from_beginning();
        }

        let mut prev = head;
        let mut node = self.next_of(head);
        while node != head {
            if self.value_of(node) == value {
                let next = self.next_of(node);
                self.set_next(prev, next);
                self.len -= 1;

                trace!(handle = node, len = self.len, "deleted by value");
                return Ok(self.release(node));
            }
            prev = node;
            node = self.next_of(node);
        }

        debug!(len = self.len, "delete by value found no match");
        Err(ListError::NotFound)
    }

    /// Visits every node once, starting at the head.
    ///
    /// The traversal borrows the list and can be repeated.
    #[inline]
    pub fn traverse_forward(&self) -> Iter<'_, T> {
        self.iter()
    }

    /// Visits every node once, from the tail back to the head.
    ///
    /// Nodes only link forward, so this collects one forward pass into a
    /// buffer first.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular::CircularList;
    ///
    /// let list: CircularList<_> = (1..4).collect();
    /// assert_eq!(list.traverse_reverse().collect::<Vec<_>>(), vec![&3, &2, &1]);
    /// ```
    pub fn traverse_reverse(&self) -> ReverseIter<'_, T> {
        let forward: Vec<&T> = self.iter().collect();
        forward.into_iter().rev()
    }

    /// Returns a head-to-tail iterator over the payloads.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self, self.head, self.len)
    }

    /// Releases every node.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.free = None;
        self.head = None;
        self.len = 0;
    }
}

#[cfg(test)]
impl<T> CircularList<T> {
    /// Number of links followed from the head before reaching it again.
    fn cycle_len(&self) -> Option<usize> {
        let head = self.head?;
        let mut node = self.next_of(head);
        let mut steps = 1;
        while node != head {
            assert!(steps <= self.entries.len(), "cycle does not return to head");
            node = self.next_of(node);
            steps += 1;
        }
        Some(steps)
    }

    fn assert_cycle(&self) {
        match self.cycle_len() {
            Some(steps) => assert_eq!(steps, self.len),
            None => assert_eq!(self.len, 0),
        }
        assert_eq!(self.is_empty(), self.len == 0);
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}
