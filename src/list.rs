use std::fmt;
use std::mem;

use crate::Error;
use crate::arena::{Arena, Node, NodeRef};
use crate::cursor::Cursor;
use crate::iter::{Iter, IterMut};

/// A doubly linked list whose nodes live in a slot arena owned by the list
///
/// Nodes are wired together with handles instead of pointers, and positions
/// are named by [`Cursor`]. Pushes hand back a cursor at the new node, so a
/// caller can keep it and erase the node later in O(1), stable across
/// unrelated edits.
pub struct List<T> {
    pub(crate) arena: Arena<T>,
    pub(crate) head: Option<NodeRef>,
    pub(crate) tail: Option<NodeRef>,
    pub(crate) len: usize,
}

impl<T> List<T> {
    /// Creates a new empty doubly linked list
    pub fn new() -> Self {
        List {
            arena: Arena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Creates a new empty list with slot storage for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        List {
            arena: Arena::with_capacity(capacity),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Creates a list holding `len` clones of `elem`
    pub fn from_elem(elem: T, len: usize) -> Self
    where
        T: Clone,
    {
        let mut list = List::with_capacity(len);
        for _ in 0..len {
            list.push_back(elem.clone());
        }
        list
    }

    /// Creates a list holding `len` default-constructed elements
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut list = List::with_capacity(len);
        for _ in 0..len {
            list.push_back(T::default());
        }
        list
    }

    /// Returns the number of elements in the list
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes the list can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Returns a reference to the element at the front of the list
    /// Fails with [`Error::Empty`] if the list has no elements
    pub fn front(&self) -> Result<&T, Error> {
        match self.head {
            Some(r) => Ok(&self.node(r).data),
            None => Err(Error::Empty),
        }
    }

    /// Returns a mutable reference to the element at the front of the list
    /// Fails with [`Error::Empty`] if the list has no elements
    pub fn front_mut(&mut self) -> Result<&mut T, Error> {
        match self.head {
            Some(r) => Ok(&mut self.node_mut(r).data),
            None => Err(Error::Empty),
        }
    }

    /// Returns a reference to the element at the back of the list
    /// Fails with [`Error::Empty`] if the list has no elements
    pub fn back(&self) -> Result<&T, Error> {
        match self.tail {
            Some(r) => Ok(&self.node(r).data),
            None => Err(Error::Empty),
        }
    }

    /// Returns a mutable reference to the element at the back of the list
    /// Fails with [`Error::Empty`] if the list has no elements
    pub fn back_mut(&mut self) -> Result<&mut T, Error> {
        match self.tail {
            Some(r) => Ok(&mut self.node_mut(r).data),
            None => Err(Error::Empty),
        }
    }

    /// Returns a reference to the element at `at`
    ///
    /// Fails with [`Error::End`] for the end cursor and [`Error::Stale`] for
    /// a cursor whose node has been erased
    pub fn get(&self, at: Cursor<T>) -> Result<&T, Error> {
        let r = at.node().ok_or(Error::End)?;
        match self.arena.get(r) {
            Some(node) => Ok(&node.data),
            None => Err(Error::Stale),
        }
    }

    /// Returns a mutable reference to the element at `at`
    ///
    /// Fails with [`Error::End`] for the end cursor and [`Error::Stale`] for
    /// a cursor whose node has been erased
    pub fn get_mut(&mut self, at: Cursor<T>) -> Result<&mut T, Error> {
        let r = at.node().ok_or(Error::End)?;
        match self.arena.get_mut(r) {
            Some(node) => Ok(&mut node.data),
            None => Err(Error::Stale),
        }
    }

    /// Returns true if some element of the list equals `value`
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|x| x == value)
    }

    /// Returns a cursor at the first node, or the end cursor if the list is
    /// empty
    pub fn cursor_front(&self) -> Cursor<T> {
        Cursor::new(self.head)
    }

    /// Returns a cursor at the last node, or the end cursor if the list is
    /// empty
    pub fn cursor_back(&self) -> Cursor<T> {
        Cursor::new(self.tail)
    }

    /// Adds an element to the back of the list
    /// Returns a cursor at the newly inserted node
    pub fn push_back(&mut self, data: T) -> Cursor<T> {
        let new = self.arena.insert(Node {
            data,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(new),
            // Empty list
            None => self.head = Some(new),
        }
        self.tail = Some(new);
        self.len += 1;
        Cursor::new(Some(new))
    }

    /// Adds an element to the front of the list
    /// Returns a cursor at the newly inserted node
    pub fn push_front(&mut self, data: T) -> Cursor<T> {
        let new = self.arena.insert(Node {
            data,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(head) => self.node_mut(head).prev = Some(new),
            None => self.tail = Some(new),
        }
        self.head = Some(new);
        self.len += 1;
        Cursor::new(Some(new))
    }

    /// Inserts an element immediately before `at`
    /// Returns a cursor at the newly inserted node
    ///
    /// Inserting before the end cursor appends, and inserting into an empty
    /// list makes the new node the sole element whatever `at` names. Cursors
    /// at other nodes remain valid.
    ///
    /// # Panics
    /// Panics if the list is not empty and `at` names a node that has since
    /// been erased
    pub fn insert(&mut self, at: Cursor<T>, data: T) -> Cursor<T> {
        if self.is_empty() {
            return self.push_back(data);
        }
        let Some(r) = at.node() else {
            // End position
            return self.push_back(data);
        };
        let prev = self
            .lookup(r)
            .expect("cursor must name a live node in this list")
            .prev;
        let new = self.arena.insert(Node {
            data,
            prev,
            next: Some(r),
        });
        self.node_mut(r).prev = Some(new);
        match prev {
            Some(prev) => self.node_mut(prev).next = Some(new),
            // No predecessor, the new node is the head
            None => self.head = Some(new),
        }
        self.len += 1;
        Cursor::new(Some(new))
    }

    /// Removes the node at `at` and drops its element
    /// Returns a cursor at the node that followed it, or the end cursor if
    /// it was the last
    ///
    /// Erasing the end cursor is a no-op that returns the end cursor.
    ///
    /// # Panics
    /// Panics if `at` names a node that has since been erased
    pub fn erase(&mut self, at: Cursor<T>) -> Cursor<T> {
        let Some(r) = at.node() else {
            return Cursor::end();
        };
        Cursor::new(self.unlink(r).next)
    }

    /// Removes the node at `at` and returns its element
    /// Returns None for the end cursor
    ///
    /// # Panics
    /// Panics if `at` names a node that has since been erased
    pub fn remove(&mut self, at: Cursor<T>) -> Option<T> {
        let r = at.node()?;
        Some(self.unlink(r).data)
    }

    /// Removes and returns the element at the front of the list
    /// Returns None if the list is empty
    pub fn pop_front(&mut self) -> Option<T> {
        let r = self.head?;
        Some(self.unlink(r).data)
    }

    /// Removes and returns the element at the back of the list
    /// Returns None if the list is empty
    pub fn pop_back(&mut self) -> Option<T> {
        let r = self.tail?;
        Some(self.unlink(r).data)
    }

    /// Removes every element from the list
    ///
    /// Elements drop front to back. Slot storage is kept for reuse; cursors
    /// from before the call go stale.
    pub fn clear(&mut self) {
        if let Some(head) = self.head {
            self.truncate_from(head);
        }
    }

    /// Replaces the list's contents with the elements of `source`, reusing
    /// existing nodes where possible
    ///
    /// Walks both sequences in lock-step overwriting values in place, then
    /// appends whatever the source has left over, or releases whatever the
    /// destination has left over. An exhausted source clears the list.
    /// Consuming another list (`a.assign(b)`) is the move form of
    /// assignment; [`Clone::clone_from`] is the copy form.
    pub fn assign<I>(&mut self, source: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut source = source.into_iter();
        let mut cur = self.head;
        while let Some(r) = cur {
            match source.next() {
                Some(value) => {
                    let node = self.node_mut(r);
                    node.data = value;
                    cur = node.next;
                }
                // Source exhausted, the rest of the list is surplus
                None => {
                    self.truncate_from(r);
                    return;
                }
            }
        }
        // List exhausted, append what the source has left
        for value in source {
            self.push_back(value);
        }
    }

    /// Exchanges the contents of two lists in O(1)
    ///
    /// No nodes move and no cursors go stale; a cursor into one list
    /// resolves through the other afterwards.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Splices the node out of the chain, vacates its slot, and returns it
    fn unlink(&mut self, r: NodeRef) -> Node<T> {
        let node = self
            .arena
            .remove(r)
            .expect("cursor must name a live node in this list");
        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            // Removing the head
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            // Removing the tail
            None => self.tail = node.prev,
        }
        self.len -= 1;
        node
    }

    /// Releases the nodes from `first` through the tail and repoints the
    /// tail at `first`'s predecessor
    fn truncate_from(&mut self, first: NodeRef) {
        let prev = self.node(first).prev;
        let mut cur = Some(first);
        while let Some(r) = cur {
            let node = self
                .arena
                .remove(r)
                .expect("list links must name live nodes");
            cur = node.next;
            self.len -= 1;
        }
        match prev {
            Some(prev) => {
                self.node_mut(prev).next = None;
                self.tail = Some(prev);
            }
            // Truncated from the head, the list is now empty
            None => {
                self.head = None;
                self.tail = None;
            }
        }
    }

    pub(crate) fn lookup(&self, r: NodeRef) -> Option<&Node<T>> {
        self.arena.get(r)
    }

    pub(crate) fn node(&self, r: NodeRef) -> &Node<T> {
        self.arena.get(r).expect("list links must name live nodes")
    }

    pub(crate) fn node_mut(&mut self, r: NodeRef) -> &mut Node<T> {
        self.arena
            .get_mut(r)
            .expect("list links must name live nodes")
    }
}

impl<T> List<T> {
    /// Returns an iterator over the list that borrows the list
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns a mutable iterator over the list that borrows the list mutably
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        // Front to back, the order callers observe elsewhere
        self.clear();
    }
}

impl<T: Clone> Clone for List<T> {
    /// Starts empty and delegates to `clone_from`
    fn clone(&self) -> Self {
        let mut list = Self::new();
        list.clone_from(self);
        list
    }

    /// Merge-in-place copy: reuses this list's nodes where possible
    fn clone_from(&mut self, source: &Self) {
        self.assign(source.iter().cloned());
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(elems: [T; N]) -> Self {
        elems.into_iter().collect()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_default() {
        let list: List<i32> = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        let list: List<i32> = List::default();
        assert!(list.is_empty());
    }

    #[test]
    fn test_push_and_pop() {
        let mut list = List::new();
        list.push_back(2);
        list.push_back(3);
        list.push_front(1);
        assert_eq!(list.len(), 3);

        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_front_and_back() {
        let mut list = List::new();
        assert_eq!(list.front(), Err(Error::Empty));
        assert_eq!(list.back(), Err(Error::Empty));
        assert_eq!(list.front_mut(), Err(Error::Empty));
        assert_eq!(list.back_mut(), Err(Error::Empty));

        list.push_back(1);
        list.push_back(2);
        assert_eq!(list.front(), Ok(&1));
        assert_eq!(list.back(), Ok(&2));

        *list.front_mut().unwrap() = 10;
        *list.back_mut().unwrap() = 20;
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![10, 20]);
    }

    #[test]
    fn test_from_elem_and_with_len() {
        let list = List::from_elem(7, 3);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![7, 7, 7]);

        let list: List<i32> = List::with_len(2);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 0]);

        let list = List::from_elem(7, 0);
        assert!(list.is_empty());
    }

    #[test]
    fn test_insert() {
        // Into an empty list
        let mut list = List::new();
        let at = list.insert(Cursor::end(), 2);
        assert_eq!(list.get(at), Ok(&2));
        assert_eq!(list.len(), 1);

        // Before the head and before the end
        let mut list = List::from([1, 2, 3]);
        let at = list.insert(list.cursor_front(), 0);
        assert_eq!(at, list.cursor_front());
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);

        let at = list.insert(Cursor::end(), 4);
        assert_eq!(at, list.cursor_back());
        assert_eq!(
            list.iter().copied().collect::<Vec<_>>(),
            vec![0, 1, 2, 3, 4]
        );

        // In the middle
        let third = list.cursor_front().next(&list).next(&list);
        let at = list.insert(third, 9);
        assert_eq!(
            list.iter().copied().collect::<Vec<_>>(),
            vec![0, 1, 9, 2, 3, 4]
        );
        assert_eq!(list.get(at), Ok(&9));
        assert_eq!(at.next(&list), third);
    }

    #[test]
    fn test_erase() {
        let mut list = List::from([1, 2, 3]);
        let second = list.cursor_front().next(&list);

        // Erasing the middle returns a cursor at its successor
        let next = list.erase(second);
        assert_eq!(list.get(next), Ok(&3));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3]);

        // Erasing the tail returns the end cursor
        let next = list.erase(list.cursor_back());
        assert!(next.is_end());
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1]);

        // Erasing the only node empties the list
        let next = list.erase(list.cursor_front());
        assert!(next.is_end());
        assert!(list.is_empty());
        assert_eq!(list.front(), Err(Error::Empty));
        assert_eq!(list.back(), Err(Error::Empty));

        // Erasing the end cursor is a no-op
        let mut list = List::from([5]);
        assert!(list.erase(Cursor::end()).is_end());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut list = List::from([1, 2, 3]);
        assert_eq!(list.remove(Cursor::end()), None);
        assert_eq!(list.len(), 3);

        let second = list.cursor_front().next(&list);
        assert_eq!(list.remove(second), Some(2));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_assign() {
        // Shorter source releases the surplus
        let mut list = List::from([9, 9, 9, 9]);
        list.assign([1, 2]);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(list.len(), 2);

        // Longer source reuses then appends
        let mut list = List::from([9, 9]);
        list.assign([1, 2, 3, 4]);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);

        // Empty source clears
        let mut list = List::from([9, 9]);
        list.assign([]);
        assert!(list.is_empty());
        assert_eq!(list.tail, None);

        // Empty destination appends everything
        let mut list = List::new();
        list.assign([1, 2, 3]);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_assign_consumes_source_list() {
        let mut a = List::from([9, 9, 9]);
        let mut b = List::from([1, 2]);

        // The move form of assignment: the source is taken and ends empty
        a.assign(mem::take(&mut b));
        assert_eq!(a.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert!(b.is_empty());
        assert_eq!(b.len(), 0);
    }

    #[test]
    fn test_clone() {
        let a = List::from([1, 2, 3]);
        let mut b = a.clone();
        assert_eq!(a, b);

        // Node-level independence
        b.push_back(4);
        *b.front_mut().unwrap() = 10;
        assert_eq!(a.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(b.iter().copied().collect::<Vec<_>>(), vec![10, 2, 3, 4]);

        // clone_from reuses nodes and trims
        let mut c = List::from([9, 9, 9, 9]);
        c.clone_from(&a);
        assert_eq!(c, a);
    }

    #[test]
    fn test_swap() {
        let mut a = List::from([1, 2]);
        let mut b = List::from([3]);
        let one = a.cursor_front();

        a.swap(&mut b);
        assert_eq!(a.iter().copied().collect::<Vec<_>>(), vec![3]);
        assert_eq!(b.iter().copied().collect::<Vec<_>>(), vec![1, 2]);

        // The cursor still names the same node, now owned by b
        assert_eq!(b.get(one), Ok(&1));
        assert_eq!(one, b.cursor_front());
    }

    #[test]
    fn test_clear() {
        let mut list = List::from([1, 2, 3]);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.head, None);
        assert_eq!(list.tail, None);

        // Still usable, and safe to clear again
        list.clear();
        list.push_back(4);
        assert_eq!(list.front(), Ok(&4));
    }

    #[test]
    fn test_contains() {
        let list = List::from([1, 2, 3]);
        assert!(list.contains(&2));
        assert!(!list.contains(&4));
    }

    #[test]
    fn test_eq_and_debug() {
        let a = List::from([1, 2, 3]);
        let b: List<i32> = [1, 2, 3].into_iter().collect();
        let c = List::from([1, 2]);
        assert_eq!(a, b);
        assert_ne!(a, c);

        assert_eq!(format!("{a:?}"), "[1, 2, 3]");
        assert_eq!(format!("{:?}", List::<i32>::new()), "[]");
    }

    #[test]
    fn test_with_capacity() {
        let list: List<i32> = List::with_capacity(8);
        assert!(list.capacity() >= 8);
        assert!(list.is_empty());
    }
}
