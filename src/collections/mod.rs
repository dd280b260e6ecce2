//! Collection Types.

mod error;
pub mod linked_list;

pub use self::error::ListError;
pub use self::linked_list::{DoublyLinkedList, NodeRef};

/// Collections Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::dlist;

    #[doc(no_inline)]
    pub use super::error::ListError;
    #[doc(no_inline)]
    pub use super::linked_list::{DoublyLinkedList, NodeRef};
}
