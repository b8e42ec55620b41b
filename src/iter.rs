use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::arena::{Node, NodeRef, Slot};
use crate::list::List;

/// An iterator over the doubly linked list that borrows the list
pub struct Iter<'a, T> {
    list: &'a List<T>,
    head: Option<NodeRef>,
    tail: Option<NodeRef>,
    len: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Iter {
            list,
            head: list.head,
            tail: list.tail,
            len: list.len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let r = self.head?;
        let node = self.list.node(r);
        self.head = node.next;
        self.len -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let r = self.tail?;
        let node = self.list.node(r);
        self.tail = node.prev;
        self.len -= 1;
        Some(&node.data)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// A mutable iterator over the doubly linked list that borrows the list
/// mutably
pub struct IterMut<'a, T> {
    slots: NonNull<Slot<T>>,
    head: Option<NodeRef>,
    tail: Option<NodeRef>,
    len: usize,
    _marker: PhantomData<&'a mut List<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        IterMut {
            slots: list.arena.base(),
            head: list.head,
            tail: list.tail,
            len: list.len,
            _marker: PhantomData,
        }
    }

    /// Resolves `r` against the slot storage and hands out a borrow for the
    /// full `'a`
    ///
    /// The `len` guard keeps the two ends from crossing, so every node is
    /// yielded at most once, and the list stays exclusively borrowed for
    /// `'a`; the returned `&mut` therefore never aliases another one.
    fn node_mut(&mut self, r: NodeRef) -> &'a mut Node<T> {
        unsafe {
            let slot = &mut *self.slots.as_ptr().add(r.index as usize);
            slot.node_mut().expect("list links must name live nodes")
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let r = self.head?;
        let node = self.node_mut(r);
        self.head = node.next;
        self.len -= 1;
        Some(&mut node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let r = self.tail?;
        let node = self.node_mut(r);
        self.tail = node.prev;
        self.len -= 1;
        Some(&mut node.data)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// An iterator over the doubly linked list that consumes the list
pub struct IntoIter<T>(List<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
