//! A doubly linked list over a slot arena.
//!
//! Nodes live in storage owned by the list and are wired together with
//! handles instead of pointers. Positions are named by [`Cursor`], a copyable
//! handle that survives unrelated edits and detects, rather than
//! dereferences, nodes that have been erased.
//!
//! ```
//! use slotlist::List;
//!
//! let mut list = List::from([1, 2, 3]);
//! let at = list.push_back(4);
//! list.push_front(0);
//!
//! assert_eq!(list.remove(at), Some(4));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
//! ```

mod arena;
pub mod cursor;
pub mod iter;
pub mod list;

pub use cursor::Cursor;
pub use list::List;

/// Errors from element access through lists and cursors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `front` or `back` was asked for an element of an empty list
    #[error("cannot access an element of an empty list")]
    Empty,
    /// The end cursor was dereferenced
    #[error("cannot dereference the end cursor")]
    End,
    /// The cursor's node was erased after the cursor was taken
    #[error("cursor names a node that is no longer in the list")]
    Stale,
}
