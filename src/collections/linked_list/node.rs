//! Chain nodes and the read-only handle given out to callers.

use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

/// A link to a neighbouring node, or [`None`] at either end of the chain.
pub(super) type Link<T> = Option<NonNull<Node<T>>>;

/// A single heap-allocated element of the chain.
///
/// The chain is owned head-to-tail: a node's `next` is the owning link to the
/// node after it, while `prev` is only a back-reference used for *O*(1)
/// unlinking and backward traversal.
pub(super) struct Node<T> {
    /// Owning pointer to the next node in sequence.
    pub(super) next: Link<T>,
    /// Non-owning pointer to the previous node in sequence.
    pub(super) prev: Link<T>,
    /// The node's data.
    pub(super) elem: T,
}

impl<T> Node<T> {
    /// Allocates a new, unlinked node on the heap.
    ///
    /// The returned pointer must eventually be released with
    /// [`Node::into_elem`].
    pub(super) fn alloc(elem: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: None,
            prev: None,
            elem,
        })))
    }

    /// Frees the node and hands back the element it held.
    ///
    /// # Safety
    ///
    /// `node` must have been returned by [`Node::alloc`], must already be
    /// unlinked from its list, and must not be used again.
    pub(super) unsafe fn into_elem(node: NonNull<Node<T>>) -> T {
        let boxed_node = Box::from_raw(node.as_ptr());
        boxed_node.elem
    }
}

/// A read-only handle to a node of a [`DoublyLinkedList`].
///
/// Handles are returned by [`first`], [`last`] and [`find`]. They allow reading
/// the node's value and walking to its neighbours, but never changing the
/// links; every structural change goes through the list itself.
///
/// A handle borrows the list, so the list cannot be modified while a handle
/// is alive and a handle can never outlive the node it points to.
///
/// # Examples
///
/// ```
/// use dlist::prelude::*;
///
/// let list = dlist![1 => 2 => 3];
///
/// let first = list.first().unwrap();
/// assert_eq!(first.value(), &1);
/// assert!(first.prev().is_none());
///
/// let second = first.next().unwrap();
/// assert_eq!(second.value(), &2);
/// assert_eq!(second.prev(), Some(first));
/// ```
///
/// [`DoublyLinkedList`]: super::DoublyLinkedList
/// [`first`]: super::DoublyLinkedList::first
/// [`last`]: super::DoublyLinkedList::last
/// [`find`]: super::DoublyLinkedList::find
pub struct NodeRef<'a, T> {
    node: NonNull<Node<T>>,
    _marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> NodeRef<'a, T> {
    pub(super) fn new(node: NonNull<Node<T>>) -> Self {
        Self {
            node,
            _marker: PhantomData,
        }
    }

    /// Returns a reference to the value held by the node.
    #[inline]
    pub fn value(&self) -> &'a T {
        // SAFETY: the list is borrowed for `'a`, so the node is still
        // allocated and nothing can mutate it.
        unsafe { &(*self.node.as_ptr()).elem }
    }

    /// Returns a handle to the following node, or [`None`] if this is the
    /// last node of the list.
    #[inline]
    pub fn next(&self) -> Option<NodeRef<'a, T>> {
        unsafe { (*self.node.as_ptr()).next.map(NodeRef::new) }
    }

    /// Returns a handle to the preceding node, or [`None`] if this is the
    /// first node of the list.
    #[inline]
    pub fn prev(&self) -> Option<NodeRef<'a, T>> {
        unsafe { (*self.node.as_ptr()).prev.map(NodeRef::new) }
    }

    /// Returns `true` if this node is the head of its list.
    #[inline]
    pub fn is_first(&self) -> bool {
        self.prev().is_none()
    }

    /// Returns `true` if this node is the tail of its list.
    #[inline]
    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

/// Handles compare by node identity, not by value.
impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(self.value()).finish()
    }
}

unsafe impl<T: Sync> Send for NodeRef<'_, T> {}
unsafe impl<T: Sync> Sync for NodeRef<'_, T> {}

#[cfg(test)]
mod test {
    use super::super::DoublyLinkedList;

    #[test]
    fn test_walk_forward_and_back() {
        let list: DoublyLinkedList<i32> = (0..5).collect();

        let mut forward = Vec::new();
        let mut node = list.first();
        while let Some(curr) = node {
            forward.push(*curr.value());
            node = curr.next();
        }
        assert_eq!(forward, [0, 1, 2, 3, 4]);

        let mut backward = Vec::new();
        let mut node = list.last();
        while let Some(curr) = node {
            backward.push(*curr.value());
            node = curr.prev();
        }
        assert_eq!(backward, [4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_ends() {
        let list: DoublyLinkedList<i32> = (0..3).collect();

        let first = list.first().unwrap();
        let last = list.last().unwrap();
        assert!(first.is_first());
        assert!(!first.is_last());
        assert!(last.is_last());
        assert!(!last.is_first());

        let mut single = DoublyLinkedList::new();
        single.push_back(7);
        let only = single.first().unwrap();
        assert!(only.is_first() && only.is_last());
        assert_eq!(single.first(), single.last());
    }

    #[test]
    fn test_identity_not_value() {
        let list: DoublyLinkedList<i32> = [5, 5].into();

        let first = list.first().unwrap();
        let last = list.last().unwrap();
        assert_eq!(first.value(), last.value());
        assert_ne!(first, last);
        assert_eq!(first.next(), Some(last));
    }

    #[test]
    fn test_debug() {
        let list: DoublyLinkedList<&str> = ["a"].into();
        assert_eq!(format!("{:?}", list.first().unwrap()), r#"NodeRef("a")"#);
    }
}
