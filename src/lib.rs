//! A doubly-linked list with owned nodes, indexed access and value search.
//!
//! ```
//! use dlist::prelude::*;
//!
//! let mut list = dlist![1 => 2 => 3];
//!
//! list.remove_at(1)?;
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.get(0), Ok(&1));
//! assert_eq!(list.get(1), Ok(&3));
//! assert_eq!(list.index_of(&2), None);
//! # Ok::<(), ListError>(())
//! ```

#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod collections;

/// Doubly-Linked List Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::dlist;

    #[doc(no_inline)]
    pub use super::collections::linked_list::{DoublyLinkedList, NodeRef};
    #[doc(no_inline)]
    pub use super::collections::ListError;
}
