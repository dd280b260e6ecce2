//! A doubly-linked list with owned nodes and indexed access.
//!
//! The `DoublyLinkedList` allows pushing and popping at either end in
//! *constant* time, and also behaves like an indexable list: elements can be
//! read, replaced, inserted and removed by position, and searched for by
//! value. Positional and value-based operations walk the chain and take
//! *O*(*n*) time.
//!
//! Nodes are individually heap-allocated and never move, so a node keeps its
//! identity for as long as it stays in the list. Read-only [`NodeRef`]
//! handles to nodes are available through [`first`], [`last`] and [`find`].
//!
//! Using [Learn Rust With Entirely Too Many Linked Lists]
//!
//! [`first`]: DoublyLinkedList::first
//! [`last`]: DoublyLinkedList::last
//! [`find`]: DoublyLinkedList::find
//! [Learn Rust With Entirely Too Many Linked Lists]: https://rust-unofficial.github.io/too-many-lists/

mod iter;
mod node;

pub use self::iter::{IntoIter, Iter, IterMut};
pub use self::node::NodeRef;

use std::fmt;

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut};
use core::ptr::NonNull;
use core::{marker, mem};

use self::node::{Link, Node};
use super::error::ListError;

/// Creates a `DoublyLinkedList` containing the arguments.
///
/// # Examples
///
/// ```
/// use dlist::prelude::*;
///
/// let mut list = dlist![1 => 2 => 3];
/// assert_eq!(list.len(), 3);
/// assert!(list.iter().eq([&1, &2, &3]));
///
/// assert_eq!(list.pop_back(), Some(3));
/// assert_eq!(list.pop_back(), Some(2));
/// assert_eq!(list.pop_back(), Some(1));
/// ```
///
/// ```
/// use dlist::prelude::*;
///
/// let list = dlist![1; 5];
/// assert_eq!(list.len(), 5);
/// assert!(list.iter().eq([&1, &1, &1, &1, &1]));
/// ```
#[macro_export]
macro_rules! dlist {
    () => {
        $crate::collections::linked_list::DoublyLinkedList::new()
    };
    ($($elem:expr)=>+ $(=>)?) => {{
        let mut list = $crate::collections::linked_list::DoublyLinkedList::new();
        $(list.push_back($elem);)+
        list
    }};
    ($elem:expr; $n:expr) => {{
        // Ensure the expression is only evaluated once.
        let count = $n;

        let mut list = $crate::collections::linked_list::DoublyLinkedList::new();
        list.extend(::core::iter::repeat($elem).take(count));
        list
    }};
}

/// A doubly-linked list with owned nodes and indexed access.
///
/// Invariants maintained by every operation:
///
/// - `len` is the number of nodes reachable from `head` through `next`, and
///   also the number reachable from `tail` through `prev`.
/// - `len == 0` exactly when `head` and `tail` are both [`None`].
/// - `head` has no `prev`, `tail` has no `next`, and for adjacent nodes
///   `a.next == b` implies `b.prev == a`.
pub struct DoublyLinkedList<T> {
    /// Pointer to the head of the list.
    head: Link<T>,
    /// Pointer to the tail of the list.
    tail: Link<T>,
    /// Number of linked nodes.
    len: usize,
    /// In order to tell the drop checker that we do own values of type T, and
    /// therefore may drop some T's when we drop.
    _marker: marker::PhantomData<T>,
}

impl<T> DoublyLinkedList<T> {
    /// Constructs a new, empty `DoublyLinkedList<T>`.
    ///
    /// The list will not allocate until elements are pushed onto it.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let list: DoublyLinkedList<i32> = DoublyLinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: marker::PhantomData,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Always `false`: a `DoublyLinkedList` can be modified through any
    /// mutable borrow.
    #[inline]
    pub const fn is_read_only(&self) -> bool {
        false
    }

    /// Returns a handle to the first node of the list, or [`None`] if it is
    /// empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let list = dlist![3 => 4];
    /// let first = list.first().unwrap();
    ///
    /// assert_eq!(first.value(), &3);
    /// assert_eq!(first.next().map(|node| *node.value()), Some(4));
    /// ```
    #[inline]
    pub fn first(&self) -> Option<NodeRef<'_, T>> {
        self.head.map(NodeRef::new)
    }

    /// Returns a handle to the last node of the list, or [`None`] if it is
    /// empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let list = dlist![3 => 4];
    /// let last = list.last().unwrap();
    ///
    /// assert_eq!(last.value(), &4);
    /// assert!(last.next().is_none());
    /// ```
    #[inline]
    pub fn last(&self) -> Option<NodeRef<'_, T>> {
        self.tail.map(NodeRef::new)
    }

    /// Returns an immutable reference to the first element, or [`None`] if
    /// the list is empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        unsafe { self.head.map(|head| &(*head.as_ptr()).elem) }
    }

    /// Returns a mutable reference to the first element, or [`None`] if the
    /// list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        unsafe { self.head.map(|head| &mut (*head.as_ptr()).elem) }
    }

    /// Returns an immutable reference to the last element, or [`None`] if the
    /// list is empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        unsafe { self.tail.map(|tail| &(*tail.as_ptr()).elem) }
    }

    /// Returns a mutable reference to the last element, or [`None`] if the
    /// list is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        unsafe { self.tail.map(|tail| &mut (*tail.as_ptr()).elem) }
    }

    /// Appends an element to the back of the list.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let mut list = DoublyLinkedList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.get(1), Ok(&2));
    /// ```
    pub fn push_back(&mut self, elem: T) {
        let new_node = Node::alloc(elem);

        unsafe {
            if let Some(tail) = self.tail {
                // There is at least a valid `tail` node.
                (*tail.as_ptr()).next = Some(new_node);
                (*new_node.as_ptr()).prev = Some(tail);
            } else {
                self.head = Some(new_node);
            }
        }

        self.tail = Some(new_node);
        self.len += 1;
    }

    /// Prepends an element to the front of the list.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let mut list = dlist![2];
    /// list.push_front(1);
    ///
    /// assert!(list.iter().eq([&1, &2]));
    /// ```
    pub fn push_front(&mut self, elem: T) {
        let new_node = Node::alloc(elem);

        match self.head {
            // SAFETY: `head` is a live node of this list.
            Some(head) => unsafe { self.link_before(head, new_node) },
            None => {
                self.head = Some(new_node);
                self.tail = Some(new_node);
                self.len += 1;
            }
        }
    }

    /// Removes the first element from the list and returns it, or [`None`] if
    /// it is empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let mut list = dlist![1 => 2];
    ///
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), Some(2));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|head| unsafe { self.unlink(head) })
    }

    /// Removes the last element from the list and returns it, or [`None`] if
    /// it is empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let mut list = dlist![1 => 2];
    ///
    /// assert_eq!(list.pop_back(), Some(2));
    /// assert_eq!(list.pop_back(), Some(1));
    /// assert_eq!(list.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        self.tail.map(|tail| unsafe { self.unlink(tail) })
    }

    /// Inserts an element so that it ends up at position `index`, shifting
    /// every element after it one place towards the back.
    ///
    /// Inserting at `index == len()` appends the element.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index > len()`. The list is
    /// left unchanged.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*min*(*index*, *len* - *index*)) time to reach the position,
    /// and *O*(1) time to link the new node.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let mut list = dlist![1 => 3];
    ///
    /// list.insert(1, 2)?;
    /// list.insert(3, 4)?;
    /// assert!(list.iter().eq([&1, &2, &3, &4]));
    ///
    /// assert!(list.insert(9, 0).is_err());
    /// # Ok::<(), dlist::collections::ListError>(())
    /// ```
    pub fn insert(&mut self, index: usize, elem: T) -> Result<(), ListError> {
        if index == self.len {
            self.push_back(elem);
            return Ok(());
        }

        let next = self.node_at(index)?;
        let new_node = Node::alloc(elem);

        // SAFETY: `next` was just found in this list.
        unsafe { self.link_before(next, new_node) };
        Ok(())
    }

    /// Removes the element at position `index` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*min*(*index*, *len* - *index*)) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let mut list = dlist![1 => 2 => 3];
    ///
    /// assert_eq!(list.remove_at(1), Ok(2));
    /// assert!(list.iter().eq([&1, &3]));
    /// assert!(list.remove_at(2).is_err());
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        let node = self.node_at(index)?;

        // SAFETY: `node` was just found in this list.
        Ok(unsafe { self.unlink(node) })
    }

    /// Removes the first element equal to `elem`, searching from the front.
    ///
    /// Returns `true` if an element was removed, `false` if no element
    /// matched.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*len*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let mut list = dlist![1 => 2 => 1];
    ///
    /// assert!(list.remove(&1));
    /// assert!(list.iter().eq([&2, &1]));
    /// assert!(!list.remove(&5));
    /// ```
    pub fn remove(&mut self, elem: &T) -> bool
    where
        T: PartialEq,
    {
        match self.find_node(elem) {
            Some((_, node)) => {
                // SAFETY: `node` was just found in this list.
                drop(unsafe { self.unlink(node) });
                true
            }
            None => false,
        }
    }

    /// Returns the position of the first element equal to `elem`, or [`None`]
    /// if there is no such element.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*len*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let list = dlist!['a' => 'b' => 'b'];
    ///
    /// assert_eq!(list.index_of(&'b'), Some(1));
    /// assert_eq!(list.index_of(&'z'), None);
    /// ```
    pub fn index_of(&self, elem: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.find_node(elem).map(|(index, _)| index)
    }

    /// Returns `true` if the list contains an element equal to `elem`.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*len*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let list = dlist![0 => 1 => 2];
    ///
    /// assert!(list.contains(&0));
    /// assert!(!list.contains(&10));
    /// ```
    pub fn contains(&self, elem: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(elem).is_some()
    }

    /// Returns a handle to the first node whose value equals `elem`, or
    /// [`None`] if there is no such node.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*len*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let list = dlist![1 => 2 => 3];
    /// let node = list.find(&2).unwrap();
    ///
    /// assert_eq!(node.prev().map(|prev| *prev.value()), Some(1));
    /// assert_eq!(node.next().map(|next| *next.value()), Some(3));
    /// assert!(list.find(&4).is_none());
    /// ```
    pub fn find(&self, elem: &T) -> Option<NodeRef<'_, T>>
    where
        T: PartialEq,
    {
        self.find_node(elem).map(|(_, node)| NodeRef::new(node))
    }

    /// Like [`find`](Self::find), but also returns the node's position.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let list = dlist![1 => 2 => 3];
    /// let (index, node) = list.find_with_index(&3).unwrap();
    ///
    /// assert_eq!(index, 2);
    /// assert!(node.is_last());
    /// ```
    pub fn find_with_index(&self, elem: &T) -> Option<(usize, NodeRef<'_, T>)>
    where
        T: PartialEq,
    {
        self.find_node(elem)
            .map(|(index, node)| (index, NodeRef::new(node)))
    }

    /// Returns a reference to the element at position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*min*(*index*, *len* - *index*)) time. The walk starts from
    /// whichever end of the list is closer.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let list = dlist![10 => 20 => 30];
    ///
    /// assert_eq!(list.get(2), Ok(&30));
    /// assert!(list.get(3).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        self.node_at(index)
            .map(|node| unsafe { &(*node.as_ptr()).elem })
    }

    /// Returns a mutable reference to the element at position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        self.node_at(index)
            .map(|node| unsafe { &mut (*node.as_ptr()).elem })
    }

    /// Replaces the element at position `index`, returning the old one.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let mut list = dlist![1 => 2 => 3];
    ///
    /// assert_eq!(list.set(1, 20), Ok(2));
    /// assert!(list.iter().eq([&1, &20, &3]));
    /// ```
    pub fn set(&mut self, index: usize, elem: T) -> Result<T, ListError> {
        let slot = self.get_mut(index)?;
        Ok(mem::replace(slot, elem))
    }

    /// Clears the list, removing and dropping all elements.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*len*) time. Every node needs to be visited in order to free
    /// it.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let mut list = dlist![1 => 2 => 3];
    /// list.clear();
    ///
    /// assert!(list.is_empty());
    /// assert!(list.first().is_none());
    /// assert!(list.last().is_none());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Clones every element, front to back, into `dest` starting at
    /// `dest[offset]`. Slots outside `offset..offset + len()` are left as they
    /// were.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Capacity`] if `offset + len()` exceeds
    /// `dest.len()`. Nothing is written in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let list = dlist![1 => 2 => 3];
    /// let mut buf = [0; 5];
    ///
    /// list.copy_to(&mut buf, 1)?;
    /// assert_eq!(buf, [0, 1, 2, 3, 0]);
    ///
    /// assert!(list.copy_to(&mut buf, 3).is_err());
    /// # Ok::<(), dlist::collections::ListError>(())
    /// ```
    pub fn copy_to(&self, dest: &mut [T], offset: usize) -> Result<(), ListError>
    where
        T: Clone,
    {
        let required = offset.saturating_add(self.len);
        if required > dest.len() {
            return Err(ListError::Capacity {
                required,
                available: dest.len(),
            });
        }

        for (slot, elem) in dest[offset..required].iter_mut().zip(self) {
            slot.clone_from(elem);
        }

        Ok(())
    }

    /// Returns an iterator over references to the elements, front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let list = dlist![1 => 2];
    /// let mut iter = list.iter();
    ///
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns an iterator over mutable references to the elements, front to
    /// back.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let mut list = dlist![1 => 2];
    /// for elem in list.iter_mut() {
    ///     *elem += 10;
    /// }
    ///
    /// assert!(list.iter().eq([&11, &12]));
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Locates the node at `index`, walking from whichever end is closer.
    fn node_at(&self, index: usize) -> Result<NonNull<Node<T>>, ListError> {
        let out_of_range = ListError::IndexOutOfRange {
            index,
            len: self.len,
        };

        if index >= self.len {
            return Err(out_of_range);
        }

        let mut curr;
        unsafe {
            if index < self.len / 2 {
                curr = self.head;
                for _ in 0..index {
                    curr = curr.and_then(|node| (*node.as_ptr()).next);
                }
            } else {
                curr = self.tail;
                for _ in index + 1..self.len {
                    curr = curr.and_then(|node| (*node.as_ptr()).prev);
                }
            }
        }

        curr.ok_or(out_of_range)
    }

    /// Linear scan for the first node equal to `elem`, front to back.
    fn find_node(&self, elem: &T) -> Option<(usize, NonNull<Node<T>>)>
    where
        T: PartialEq,
    {
        let mut curr = self.head;
        let mut index = 0;

        while let Some(node) = curr {
            unsafe {
                if (*node.as_ptr()).elem == *elem {
                    return Some((index, node));
                }
                curr = (*node.as_ptr()).next;
            }
            index += 1;
        }

        None
    }

    /// Links the detached `new_node` immediately before `next`.
    ///
    /// # Safety
    ///
    /// `next` must be a live node of this list and `new_node` a fresh node
    /// from [`Node::alloc`].
    unsafe fn link_before(&mut self, next: NonNull<Node<T>>, new_node: NonNull<Node<T>>) {
        let prev = (*next.as_ptr()).prev;

        (*new_node.as_ptr()).prev = prev;
        (*new_node.as_ptr()).next = Some(next);
        (*next.as_ptr()).prev = Some(new_node);

        match prev {
            // Inserting in the middle of the list.
            Some(prev) => (*prev.as_ptr()).next = Some(new_node),
            // No previous node, `new_node` becomes the head.
            None => self.head = Some(new_node),
        }

        self.len += 1;
    }

    /// Detaches `node` from the chain, frees it and returns its element.
    ///
    /// # Safety
    ///
    /// `node` must be a live node of this list.
    unsafe fn unlink(&mut self, node: NonNull<Node<T>>) -> T {
        let prev = (*node.as_ptr()).prev;
        let next = (*node.as_ptr()).next;

        match prev {
            Some(prev) => (*prev.as_ptr()).next = next,
            None => self.head = next,
        }

        match next {
            Some(next) => (*next.as_ptr()).prev = prev,
            None => self.tail = prev,
        }

        self.len -= 1;

        Node::into_elem(node)
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.push_back(elem);
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for DoublyLinkedList<T> {
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T> Index<usize> for DoublyLinkedList<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(elem) => elem,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for DoublyLinkedList<T> {
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(elem) => elem,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: PartialOrd> PartialOrd for DoublyLinkedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for DoublyLinkedList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Hash> Hash for DoublyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for elem in self {
            elem.hash(state);
        }
    }
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
    type IntoIter = IterMut<'a, T>;
    type Item = &'a mut T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

unsafe impl<T: Send> Send for DoublyLinkedList<T> {}
unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}

#[allow(dead_code)]
fn assert_properties() {
    fn is_send<T: Send>() {}
    fn is_sync<T: Sync>() {}

    is_send::<DoublyLinkedList<i32>>();
    is_sync::<DoublyLinkedList<i32>>();

    is_send::<IntoIter<i32>>();
    is_sync::<IntoIter<i32>>();

    is_send::<Iter<'_, i32>>();
    is_sync::<Iter<'_, i32>>();

    is_send::<IterMut<'_, i32>>();
    is_sync::<IterMut<'_, i32>>();

    is_send::<NodeRef<'_, i32>>();
    is_sync::<NodeRef<'_, i32>>();

    fn list_covariant<'a, T>(x: DoublyLinkedList<&'static T>) -> DoublyLinkedList<&'a T> {
        x
    }
    fn iter_covariant<'i, 'a, T>(x: Iter<'i, &'static T>) -> Iter<'i, &'a T> {
        x
    }
    fn node_ref_covariant<'i, 'a, T>(x: NodeRef<'i, &'static T>) -> NodeRef<'i, &'a T> {
        x
    }
}
