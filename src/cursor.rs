use std::fmt;
use std::marker::PhantomData;

use crate::arena::NodeRef;
use crate::list::List;

/// A position in a [`List`], named by node identity
///
/// A cursor is a plain copyable handle, not a borrow: holding one does not
/// lock the list, and it stays pinned to its node across unrelated edits.
/// The null position doubles as the end sentinel, [`Cursor::end`]. Erasing
/// the node a cursor names leaves the cursor stale; stale cursors are
/// detected on access rather than dereferenced (see [`List::get`]).
///
/// A cursor is only meaningful with the list whose node it names (or the
/// list that has since received that node via [`List::swap`]).
pub struct Cursor<T> {
    node: Option<NodeRef>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Cursor<T> {
    pub(crate) fn new(node: Option<NodeRef>) -> Self {
        Cursor {
            node,
            _marker: PhantomData,
        }
    }

    pub(crate) fn node(&self) -> Option<NodeRef> {
        self.node
    }

    /// The canonical null-position cursor, one past the last element
    pub const fn end() -> Self {
        Cursor {
            node: None,
            _marker: PhantomData,
        }
    }

    /// Returns true if this cursor is at the end position
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Moves to the next position
    ///
    /// Moving past the tail yields the end cursor, and the end cursor stays
    /// put. A stale cursor degrades to the end cursor.
    pub fn next(self, list: &List<T>) -> Self {
        match self.node.and_then(|r| list.lookup(r)) {
            Some(node) => Cursor::new(node.next),
            None => Cursor::end(),
        }
    }

    /// Moves to the previous position
    ///
    /// Moving past the head yields the end cursor, with the same rules as
    /// [`Cursor::next`].
    pub fn prev(self, list: &List<T>) -> Self {
        match self.node.and_then(|r| list.lookup(r)) {
            Some(node) => Cursor::new(node.prev),
            None => Cursor::end(),
        }
    }
}

// Manual impls so that `Cursor<T>` is copyable and comparable whatever `T` is

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<T> {}

impl<T> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<T> Eq for Cursor<T> {}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node {
            Some(r) => f.debug_tuple("Cursor").field(&r).finish(),
            None => f.write_str("Cursor(end)"),
        }
    }
}
