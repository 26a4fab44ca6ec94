//! A fixed capacity FIFO queue over a ring buffer.

use std::mem::MaybeUninit;
use std::ptr;

use tracing::{debug, trace};

use crate::array::Array;
use crate::error::QueueError;
use crate::utils::wrap_add;

mod iter;
mod trait_impls;

pub use self::iter::Iter;

/// Capacity of `DefaultRingQueue`.
pub const DEFAULT_CAPACITY: usize = 100;

/// A `RingQueue` holding up to `DEFAULT_CAPACITY` elements.
pub type DefaultRingQueue<T> = RingQueue<[T; DEFAULT_CAPACITY]>;

/// `RingQueue` is a fixed capacity FIFO queue backed by a ring buffer.
///
/// The capacity is the length of the backing array `A`, so
/// `RingQueue<[i32; 100]>` holds up to 100 integers. Elements are added at the
/// rear with `enqueue` and removed from the front with `dequeue`; both
/// positions wrap around the end of the array.
///
/// Unlike `ArrayDeque`-style rings, no slot is kept free: a full queue holds
/// exactly `capacity()` elements and the live count is tracked separately.
///
/// # Examples
///
/// ```
/// use circular::RingQueue;
///
/// let mut queue: RingQueue<[_; 3]> = RingQueue::new();
/// queue.enqueue(10).unwrap();
/// queue.enqueue(20).unwrap();
/// queue.enqueue(30).unwrap();
/// assert!(queue.is_full());
/// assert!(queue.enqueue(40).is_err());
///
/// assert_eq!(queue.dequeue(), Ok(10));
/// queue.enqueue(40).unwrap();
/// assert_eq!(queue.iter().collect::<Vec<_>>(), vec![&20, &30, &40]);
/// ```
pub struct RingQueue<A: Array> {
    xs: MaybeUninit<A>,
    front: Option<usize>,
    rear: Option<usize>,
    count: usize,
}

/// Fill state of a `RingQueue`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum QueueStatus {
    /// No live elements.
    Empty,
    /// Some live elements and some free slots.
    Partial,
    /// Every slot holds a live element.
    Full,
}

impl<A: Array> RingQueue<A> {
    #[inline]
    fn wrap_add(index: usize, addend: usize) -> usize {
        wrap_add(index, addend, A::capacity())
    }

    #[inline]
    fn ptr(&self) -> *const A::Item {
        self.xs.as_ptr() as *const A::Item
    }

    #[inline]
    fn ptr_mut(&mut self) -> *mut A::Item {
        self.xs.as_mut_ptr() as *mut A::Item
    }

    /// Moves the element at `offset` out of the buffer.
    ///
    /// The slot must hold a live element and is treated as uninitialized
    /// afterwards.
    #[inline]
    unsafe fn buffer_read(&mut self, offset: usize) -> A::Item {
        debug_assert!(offset < A::capacity());
        ptr::read(self.ptr().add(offset))
    }

    #[inline]
    unsafe fn buffer_write(&mut self, offset: usize, element: A::Item) {
        debug_assert!(offset < A::capacity());
        ptr::write(self.ptr_mut().add(offset), element);
    }

    #[inline]
    unsafe fn buffer_get(&self, offset: usize) -> &A::Item {
        debug_assert!(offset < A::capacity());
        &*self.ptr().add(offset)
    }

    #[inline]
    unsafe fn buffer_get_mut(&mut self, offset: usize) -> &mut A::Item {
        debug_assert!(offset < A::capacity());
        &mut *self.ptr_mut().add(offset)
    }
}

impl<A: Array> RingQueue<A> {
    /// Creates an empty `RingQueue`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular::RingQueue;
    ///
    /// let queue: RingQueue<[usize; 3]> = RingQueue::new();
    /// assert!(queue.is_empty());
    /// ```
    #[inline]
    pub fn new() -> RingQueue<A> {
        RingQueue {
            xs: MaybeUninit::uninit(),
            front: None,
            rear: None,
            count: 0,
        }
    }

    /// Returns the number of elements the queue can hold.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular::RingQueue;
    ///
    /// let queue: RingQueue<[usize; 5]> = RingQueue::new();
    /// assert_eq!(queue.capacity(), 5);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        A::capacity()
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if every slot holds a live element.
    ///
    /// A queue with a capacity of zero is always both empty and full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == A::capacity()
    }

    /// Returns the number of free slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular::RingQueue;
    ///
    /// let mut queue: RingQueue<[_; 4]> = RingQueue::new();
    /// assert_eq!(queue.remaining(), 4);
    /// queue.enqueue(1).unwrap();
    /// queue.enqueue(2).unwrap();
    /// assert_eq!(queue.remaining(), 2);
    /// ```
    #[inline]
    pub fn remaining(&self) -> usize {
        A::capacity() - self.count
    }

    /// Classifies the queue as empty, partially filled or full.
    ///
    /// Emptiness wins over fullness for a zero capacity queue.
    pub fn status(&self) -> QueueStatus {
        if self.is_empty() {
            QueueStatus::Empty
        } else if self.is_full() {
            QueueStatus::Full
        } else {
            QueueStatus::Partial
        }
    }

    /// Physical index of the oldest element, `None` when empty.
    #[inline]
    pub fn front_index(&self) -> Option<usize> {
        self.front
    }

    /// Physical index of the newest element, `None` when empty.
    #[inline]
    pub fn rear_index(&self) -> Option<usize> {
        self.rear
    }

    /// Appends an element at the rear of the queue.
    ///
    /// Returns `QueueError::Overflow` carrying the element back if the queue
    /// is full; the queue is not modified in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular::{QueueError, RingQueue};
    ///
    /// let mut queue: RingQueue<[_; 1]> = RingQueue::new();
    /// assert_eq!(queue.enqueue(1), Ok(()));
    /// assert_eq!(queue.enqueue(2), Err(QueueError::Overflow { element: 2 }));
    /// ```
    pub fn enqueue(&mut self, element: A::Item) -> Result<(), QueueError<A::Item>> {
        if self.is_full() {
            debug!(capacity = A::capacity(), "enqueue rejected, queue is full");
            return Err(QueueError::Overflow { element });
        }

        let front = self.front.unwrap_or(0);
        let rear = match self.rear {
            Some(rear) => Self::wrap_add(rear, 1),
            None => 0,
        };

        unsafe {
            self.buffer_write(rear, element);
        }
        self.front = Some(front);
        self.rear = Some(rear);
        self.count += 1;

        trace!(front, rear, len = self.count, "enqueued");
        Ok(())
    }

    /// Removes the oldest element and returns it.
    ///
    /// Returns `QueueError::Underflow` if the queue is empty. Removing the
    /// last element resets both positions to the empty state.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular::{QueueError, RingQueue};
    ///
    /// let mut queue: RingQueue<[_; 2]> = RingQueue::new();
    /// queue.enqueue(1).unwrap();
    /// assert_eq!(queue.dequeue(), Ok(1));
    /// assert_eq!(queue.dequeue(), Err(QueueError::Underflow));
    /// ```
    pub fn dequeue(&mut self) -> Result<A::Item, QueueError<A::Item>> {
        let front = match self.front {
            Some(front) => front,
            None => {
                debug!("dequeue rejected, queue is empty");
                return Err(QueueError::Underflow);
            }
        };

        let element = unsafe { self.buffer_read(front) };
        self.count -= 1;

        if self.count == 0 {
            self.front = None;
            self.rear = None;
        } else {
            self.front = Some(Self::wrap_add(front, 1));
        }

        trace!(front = ?self.front, rear = ?self.rear, len = self.count, "dequeued");
        Ok(element)
    }

    /// Returns a reference to the oldest element without removing it.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular::RingQueue;
    ///
    /// let mut queue: RingQueue<[_; 3]> = RingQueue::new();
    /// assert!(queue.peek().is_err());
    /// queue.enqueue(111).unwrap();
    /// queue.enqueue(222).unwrap();
    /// assert_eq!(queue.peek(), Ok(&111));
    /// assert_eq!(queue.len(), 2);
    /// ```
    pub fn peek(&self) -> Result<&A::Item, QueueError<A::Item>> {
        match self.front {
            Some(front) => unsafe { Ok(self.buffer_get(front)) },
            None => Err(QueueError::Underflow),
        }
    }

    /// Returns a mutable reference to the oldest element without removing it.
    pub fn peek_mut(&mut self) -> Result<&mut A::Item, QueueError<A::Item>> {
        match self.front {
            Some(front) => unsafe { Ok(self.buffer_get_mut(front)) },
            None => Err(QueueError::Underflow),
        }
    }

    /// Returns a reference to the newest element.
    pub fn back(&self) -> Option<&A::Item> {
        self.rear.map(|rear| unsafe { self.buffer_get(rear) })
    }

    /// Returns a front-to-rear iterator over the live elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular::RingQueue;
    ///
    /// let mut queue: RingQueue<[_; 3]> = RingQueue::new();
    /// queue.enqueue(5).unwrap();
    /// queue.enqueue(10).unwrap();
    /// queue.dequeue().unwrap();
    /// queue.enqueue(15).unwrap();
    /// queue.enqueue(20).unwrap();
    ///
    /// let b: &[_] = &[&10, &15, &20];
    /// let c: Vec<&i32> = queue.iter().collect();
    /// assert_eq!(&c[..], b);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, A::Item> {
        Iter::new(self.ptr(), A::capacity(), self.front.unwrap_or(0), self.count)
    }

    /// Drops every live element and resets the queue to empty.
    #[inline]
    pub fn clear(&mut self) {
        while self.dequeue().is_ok() {}
    }
}

#[cfg(test)]
impl<A: Array> PartialEq<Vec<A::Item>> for RingQueue<A>
where
    A::Item: PartialEq,
{
    fn eq(&self, other: &Vec<A::Item>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(l, r)| l == r)
    }
}
