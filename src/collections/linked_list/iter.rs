//! Iterators over a [`DoublyLinkedList`].
//!
//! Every iterator here borrows (or owns) the list it walks, so the list cannot
//! be structurally modified while a traversal is in progress. Dropping an
//! iterator only releases the iterator itself; the list is left untouched.

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use super::node::Link;
use super::DoublyLinkedList;

/// An iterator that borrows a `DoublyLinkedList<T>` immutably.
///
/// The iterator starts out *fresh*, with its cursor on the head of the list
/// and no [`current`] value. Each call to [`next`] yields the value under the
/// cursor, remembers it as the current value and moves the cursor along. Once
/// the cursor walks off the tail the iterator is *exhausted* and keeps
/// returning [`None`] until it is [`reset`].
///
/// [`current`]: Iter::current
/// [`next`]: Iter::next
/// [`reset`]: Iter::reset
pub struct Iter<'a, T> {
    /// The list being walked, kept so the iterator can be reset.
    list: &'a DoublyLinkedList<T>,
    /// Next node to yield from the front.
    head: Link<T>,
    /// Next node to yield from the back.
    tail: Link<T>,
    /// Number of nodes not yet yielded.
    len: usize,
    /// The most recently yielded value.
    current: Option<&'a T>,
}

/// An iterator that borrows a `DoublyLinkedList<T>` mutably.
pub struct IterMut<'a, T> {
    /// Next node to yield from the front.
    head: Link<T>,
    /// Next node to yield from the back.
    tail: Link<T>,
    /// Number of nodes not yet yielded.
    len: usize,
    _marker: PhantomData<&'a mut T>,
}

/// An iterator that moves out of a `DoublyLinkedList<T>`.
pub struct IntoIter<T> {
    list: DoublyLinkedList<T>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(list: &'a DoublyLinkedList<T>) -> Self {
        Self {
            list,
            head: list.head,
            tail: list.tail,
            len: list.len,
            current: None,
        }
    }

    /// Returns the value most recently yielded by this iterator, or [`None`]
    /// if nothing has been yielded since it was created or reset.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let list = dlist!['a' => 'b'];
    /// let mut iter = list.iter();
    ///
    /// assert_eq!(iter.current(), None);
    /// iter.next();
    /// assert_eq!(iter.current(), Some(&'a'));
    /// iter.next();
    /// assert_eq!(iter.current(), Some(&'b'));
    /// ```
    #[inline]
    pub fn current(&self) -> Option<&'a T> {
        self.current
    }

    /// Rewinds the iterator to the head of the list, forgetting the current
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let list = dlist![1 => 2 => 3];
    /// let mut iter = list.iter();
    ///
    /// assert!(iter.by_ref().eq([&1, &2, &3]));
    /// assert_eq!(iter.next(), None);
    ///
    /// iter.reset();
    /// assert_eq!(iter.current(), None);
    /// assert!(iter.eq([&1, &2, &3]));
    /// ```
    pub fn reset(&mut self) {
        *self = Self::new(self.list);
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            head: self.head,
            tail: self.tail,
            len: self.len,
            current: self.current,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("len", &self.len)
            .field("current", &self.current)
            .finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len > 0 {
            self.head.map(|head| unsafe {
                // SAFETY: the list is borrowed for `'a`, so every node the
                // cursor reaches stays allocated and unchanged.
                let node = &*head.as_ptr();
                self.len -= 1;
                self.head = node.next;
                self.current = Some(&node.elem);
                &node.elem
            })
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len > 0 {
            self.tail.map(|tail| unsafe {
                let node = &*tail.as_ptr();
                self.len -= 1;
                self.tail = node.prev;
                self.current = Some(&node.elem);
                &node.elem
            })
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(list: &'a mut DoublyLinkedList<T>) -> Self {
        Self {
            head: list.head,
            tail: list.tail,
            len: list.len,
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").field("len", &self.len).finish()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len > 0 {
            self.head.map(|head| unsafe {
                // SAFETY: each node is yielded at most once, so the mutable
                // references handed out never alias.
                let node = &mut *head.as_ptr();
                self.len -= 1;
                self.head = node.next;
                &mut node.elem
            })
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len > 0 {
            self.tail.map(|tail| unsafe {
                let node = &mut *tail.as_ptr();
                self.len -= 1;
                self.tail = node.prev;
                &mut node.elem
            })
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> IntoIter<T> {
    pub(super) fn new(list: DoublyLinkedList<T>) -> Self {
        Self { list }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

#[cfg(test)]
mod test {
    use super::super::DoublyLinkedList;

    fn generate_test() -> DoublyLinkedList<i32> {
        (0..7).collect()
    }

    #[test]
    fn test_iterator() {
        let m = generate_test();
        for (i, elt) in m.iter().enumerate() {
            assert_eq!(i as i32, *elt);
        }
        let mut n = DoublyLinkedList::new();
        assert_eq!(n.iter().next(), None);
        n.push_front(4);
        let mut it = n.iter();
        assert_eq!(it.size_hint(), (1, Some(1)));
        assert_eq!(it.next().unwrap(), &4);
        assert_eq!(it.size_hint(), (0, Some(0)));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_fresh_active_exhausted() {
        let list: DoublyLinkedList<char> = ['a', 'b', 'c'].into();
        let mut it = list.iter();

        // fresh
        assert_eq!(it.current(), None);
        assert_eq!(it.len(), 3);

        // active
        assert_eq!(it.next(), Some(&'a'));
        assert_eq!(it.current(), Some(&'a'));
        assert_eq!(it.next(), Some(&'b'));
        assert_eq!(it.next(), Some(&'c'));
        assert_eq!(it.current(), Some(&'c'));

        // exhausted
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
        assert_eq!(it.current(), Some(&'c'));
    }

    #[test]
    fn test_reset_replays_sequence() {
        let list: DoublyLinkedList<char> = ['a', 'b', 'c'].into();
        let mut it = list.iter();

        let first: Vec<_> = it.by_ref().collect();
        it.reset();
        let second: Vec<_> = it.by_ref().collect();

        assert_eq!(first, [&'a', &'b', &'c']);
        assert_eq!(first, second);

        // reset partway through
        it.reset();
        it.next();
        it.reset();
        assert_eq!(it.current(), None);
        assert_eq!(it.next(), Some(&'a'));
    }

    #[test]
    fn test_drop_leaves_list_intact() {
        let list = generate_test();
        {
            let mut it = list.iter();
            it.next();
            it.next();
        }
        assert_eq!(list.len(), 7);
        assert!(list.iter().eq(&[0, 1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn test_iterator_double_end() {
        let mut n = DoublyLinkedList::new();
        assert_eq!(n.iter().next(), None);
        n.push_front(4);
        n.push_front(5);
        n.push_front(6);
        let mut it = n.iter();
        assert_eq!(it.size_hint(), (3, Some(3)));
        assert_eq!(it.next().unwrap(), &6);
        assert_eq!(it.size_hint(), (2, Some(2)));
        assert_eq!(it.next_back().unwrap(), &4);
        assert_eq!(it.current(), Some(&4));
        assert_eq!(it.size_hint(), (1, Some(1)));
        assert_eq!(it.next_back().unwrap(), &5);
        assert_eq!(it.next_back(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_rev_iter() {
        let m = generate_test();
        for (i, elt) in m.iter().rev().enumerate() {
            assert_eq!(6 - i as i32, *elt);
        }
        assert_eq!(m.iter().last(), Some(&6));
    }

    #[test]
    fn test_mut_iter() {
        let mut m = generate_test();
        for elt in m.iter_mut() {
            *elt *= 10;
        }
        assert!(m.iter().eq(&[0, 10, 20, 30, 40, 50, 60]));

        let mut n: DoublyLinkedList<i32> = DoublyLinkedList::new();
        assert!(n.iter_mut().next().is_none());
        n.push_front(4);
        n.push_back(5);
        let mut it = n.iter_mut();
        assert_eq!(it.size_hint(), (2, Some(2)));
        assert_eq!(*it.next_back().unwrap(), 5);
        assert_eq!(*it.next().unwrap(), 4);
        assert!(it.next().is_none());
        assert!(it.next_back().is_none());
    }

    #[test]
    fn test_into_iter() {
        let m = generate_test();
        let mut it = m.into_iter();
        assert_eq!(it.len(), 7);
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next_back(), Some(6));
        assert_eq!(it.collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    }
}
