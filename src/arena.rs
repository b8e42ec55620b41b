use std::mem;
use std::num::NonZeroU32;
use std::ptr::NonNull;

/// Stable handle to a slot in the arena
///
/// The index names the slot; the generation tells apart successive occupants
/// of the same slot, so a handle resolves only while the slot still holds the
/// occupant it was minted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeRef {
    pub(crate) index: u32,
    pub(crate) generation: NonZeroU32,
}

/// One element plus its structural links, stored as handles
pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) prev: Option<NodeRef>,
    pub(crate) next: Option<NodeRef>,
}

pub(crate) struct Slot<T> {
    generation: NonZeroU32,
    entry: Entry<T>,
}

enum Entry<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<u32> },
}

impl<T> Slot<T> {
    pub(crate) fn node_mut(&mut self) -> Option<&mut Node<T>> {
        match &mut self.entry {
            Entry::Occupied(node) => Some(node),
            Entry::Vacant { .. } => None,
        }
    }
}

/// The owned node store backing a list
///
/// Vacated slots are threaded onto a LIFO free list and reused before the
/// backing storage grows. Re-occupying a slot bumps its generation, so
/// handles minted for the previous occupant miss instead of aliasing the
/// new one.
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<u32>,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free_head: None,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Arena {
            slots: Vec::with_capacity(capacity),
            free_head: None,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Stores a node and returns its handle, reusing a vacated slot when one
    /// is free
    pub(crate) fn insert(&mut self, node: Node<T>) -> NodeRef {
        match self.free_head {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                let next_free = match slot.entry {
                    Entry::Vacant { next_free } => next_free,
                    Entry::Occupied(_) => unreachable!("free list holds only vacant slots"),
                };
                slot.generation = next_generation(slot.generation);
                slot.entry = Entry::Occupied(node);
                let generation = slot.generation;
                self.free_head = next_free;
                NodeRef { index, generation }
            }
            None => {
                let index = self.slots.len() as u32;
                let generation = NonZeroU32::MIN;
                self.slots.push(Slot {
                    generation,
                    entry: Entry::Occupied(node),
                });
                NodeRef { index, generation }
            }
        }
    }

    /// Vacates the slot and returns its node
    /// Returns None if the handle is stale
    pub(crate) fn remove(&mut self, r: NodeRef) -> Option<Node<T>> {
        let next_free = self.free_head;
        let slot = self.slots.get_mut(r.index as usize)?;
        if slot.generation != r.generation {
            return None;
        }
        match mem::replace(&mut slot.entry, Entry::Vacant { next_free }) {
            Entry::Occupied(node) => {
                self.free_head = Some(r.index);
                Some(node)
            }
            vacant => {
                // Handle to the slot's previous occupant; put the free link back
                slot.entry = vacant;
                None
            }
        }
    }

    /// Resolves a handle to its node
    /// Returns None if the handle is stale
    pub(crate) fn get(&self, r: NodeRef) -> Option<&Node<T>> {
        match self.slots.get(r.index as usize) {
            Some(slot) if slot.generation == r.generation => match &slot.entry {
                Entry::Occupied(node) => Some(node),
                Entry::Vacant { .. } => None,
            },
            _ => None,
        }
    }

    /// Resolves a handle to its node mutably
    /// Returns None if the handle is stale
    pub(crate) fn get_mut(&mut self, r: NodeRef) -> Option<&mut Node<T>> {
        match self.slots.get_mut(r.index as usize) {
            Some(slot) if slot.generation == r.generation => slot.node_mut(),
            _ => None,
        }
    }

    /// Pointer to the base of the slot storage, for the mutable iterator,
    /// which hands out one borrow per node while the whole list stays
    /// exclusively borrowed
    pub(crate) fn base(&mut self) -> NonNull<Slot<T>> {
        NonNull::from(self.slots.as_mut_slice()).cast::<Slot<T>>()
    }
}

fn next_generation(generation: NonZeroU32) -> NonZeroU32 {
    NonZeroU32::new(generation.get().wrapping_add(1)).unwrap_or(NonZeroU32::MIN)
}
