//! Error values reported by `RingQueue` and `CircularList`.

use std::fmt;

use thiserror::Error;

/// Error value of a rejected `RingQueue` operation.
///
/// The queue is left unchanged whenever one of these is returned.
#[derive(Clone, Copy, Eq, PartialEq, Error)]
pub enum QueueError<T = ()> {
    /// `enqueue` on a full queue.
    #[error("queue is full")]
    Overflow {
        /// The element that caused the error.
        element: T,
    },

    /// `dequeue` or `peek` on an empty queue.
    #[error("queue is empty")]
    Underflow,
}

impl<T> QueueError<T> {
    /// Returns the rejected element, if the error carries one.
    pub fn into_element(self) -> Option<T> {
        match self {
            QueueError::Overflow { element } => Some(element),
            QueueError::Underflow => None,
        }
    }
}

impl<T> fmt::Debug for QueueError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            QueueError::Overflow { .. } => write!(f, "QueueError::Overflow: {}", self),
            QueueError::Underflow => write!(f, "QueueError::Underflow: {}", self),
        }
    }
}

/// Error value of a rejected `CircularList` operation.
///
/// The list is left unchanged whenever one of these is returned.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum ListError {
    /// Deletion from a list with no nodes.
    #[error("list is empty")]
    Empty,

    /// A 1-based position outside the range accepted by the operation.
    #[error("invalid position {position} for a list of {len} nodes")]
    InvalidPosition {
        /// The rejected position.
        position: usize,
        /// Length of the list at the time of the call.
        len: usize,
    },

    /// No node holds the requested value.
    #[error("value not found")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(QueueError::Overflow { element: 7 }.to_string(), "queue is full");
        assert_eq!(QueueError::<i32>::Underflow.to_string(), "queue is empty");
        assert_eq!(
            ListError::InvalidPosition { position: 5, len: 3 }.to_string(),
            "invalid position 5 for a list of 3 nodes"
        );
        assert_eq!(
            format!("{:?}", QueueError::Overflow { element: 7 }),
            "QueueError::Overflow: queue is full"
        );
    }

    #[test]
    fn element_is_handed_back() {
        let err = QueueError::Overflow { element: "late" };
        assert_eq!(err.into_element(), Some("late"));
        assert_eq!(QueueError::<u8>::Underflow.into_element(), None);
    }
}
