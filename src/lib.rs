//! Bounded circular structures: a fixed capacity ring queue and a circular
//! singly-linked list.
//!
//! `RingQueue` is a FIFO queue over a ring buffer. Its capacity is the length
//! of the backing array type and it can be stored directly on the stack.
//! `CircularList` is a singly-linked list whose tail links back to its head;
//! nodes live in an arena and are addressed by stable handles.
//!
//! Every rejected operation returns an error value and leaves the structure
//! untouched.
//!
//! # Feature Flags
//! The **circular** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd. Without it the crate is `no_std` and needs `alloc`.
//!
//!
//! - `use_generic_array`
//!   - Optional
//!   - Depend on generic-array and allow using it just like a fixed
//!     size array for `RingQueue` storage.
//!
//! # Logging
//!
//! Operations emit [`tracing`] events: `trace` for completed mutations and
//! `debug` for rejected ones. No payloads are logged. Install a subscriber in
//! the application to see them.
//!
//! # Ring queue
//! ```
//! use circular::{QueueError, RingQueue};
//!
//! let mut queue: RingQueue<[_; 5]> = RingQueue::new();
//! for i in 1..6 {
//!     queue.enqueue(i).unwrap();
//! }
//! assert_eq!(queue.enqueue(6), Err(QueueError::Overflow { element: 6 }));
//!
//! assert_eq!(queue.dequeue(), Ok(1));
//! assert_eq!(queue.dequeue(), Ok(2));
//! queue.enqueue(6).unwrap();
//! queue.enqueue(7).unwrap();
//!
//! assert_eq!(format!("{:?}", queue), "[3, 4, 5, 6, 7]");
//! ```
//!
//! # Circular list
//! ```
//! use circular::{CircularList, ListError};
//!
//! let mut list: CircularList<_> = vec![10, 20, 30].into_iter().collect();
//! list.insert_at_position(15, 2).unwrap();
//! assert_eq!(format!("{:?}", list), "[10, 15, 20, 30]");
//!
//! assert_eq!(list.delete_by_value(&20), Ok(20));
//! assert_eq!(list.delete_by_value(&20), Err(ListError::NotFound));
//! assert_eq!(list.traverse_reverse().collect::<Vec<_>>(), vec![&30, &15, &10]);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

extern crate alloc;
#[cfg(not(any(feature = "std", test)))]
extern crate core as std;

mod array;
pub mod error;
pub mod list;
pub mod queue;
mod utils;

pub use array::Array;
pub use error::{ListError, QueueError};
pub use list::CircularList;
pub use queue::{DefaultRingQueue, QueueStatus, RingQueue, DEFAULT_CAPACITY};
