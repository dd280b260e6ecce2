//! Errors returned by fallible collection operations.

use std::error::Error;
use std::fmt;

/// An error returned when a positional or bulk operation on a
/// [`DoublyLinkedList`] cannot be carried out.
///
/// A failed operation never leaves the list partially modified.
///
/// [`DoublyLinkedList`]: crate::collections::linked_list::DoublyLinkedList
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The position lies outside the range the operation accepts.
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// Length of the list at the time of the call.
        len: usize,
    },
    /// The destination buffer cannot hold every element of the list.
    Capacity {
        /// Slots needed in the destination, counting the offset.
        required: usize,
        /// Slots the destination actually has.
        available: usize,
    },
}

impl Error for ListError {}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for list of length {len}")
            }
            ListError::Capacity {
                required,
                available,
            } => {
                write!(
                    f,
                    "destination was not long enough: {required} slots required, {available} available"
                )
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        let err = ListError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "index 4 is out of range for list of length 2");

        let err = ListError::Capacity {
            required: 7,
            available: 5,
        };
        assert_eq!(
            err.to_string(),
            "destination was not long enough: 7 slots required, 5 available"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn takes_error(_: &dyn Error) {}
        takes_error(&ListError::IndexOutOfRange { index: 0, len: 0 });
    }
}
