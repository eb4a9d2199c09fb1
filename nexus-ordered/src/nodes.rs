//! Node storage for the list backing.
//!
//! A growable slab of list nodes with stable indices. Removed slots go on a
//! free stack and are reused LIFO by later inserts, so a node's index stays
//! put for as long as the node lives regardless of what happens to its
//! neighbours.
//!
//! Every occupied slot carries the serial number it was stamped with on
//! insert. Serials come from a per-slab counter that is never reset, not
//! even by [`NodeSlab::clear`], which is what lets a [`ListHandle`] detect
//! that its node is gone even after the slot has been recycled.

use crate::ListHandle;

/// Sentinel link value: "no node".
pub(crate) const NIL: u32 = u32::MAX;

/// A list node: the stored value plus its links.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) prev: u32,
    pub(crate) next: u32,
}

impl<T> Node<T> {
    /// Creates an unlinked node.
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            prev: NIL,
            next: NIL,
        }
    }
}

#[derive(Debug)]
struct Slot<T> {
    serial: u64,
    node: Option<Node<T>>,
}

#[derive(Debug)]
pub(crate) struct NodeSlab<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    next_serial: u64,
}

impl<T> NodeSlab<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            next_serial: 0,
        }
    }

    /// Slots currently allocated, occupied or free.
    #[inline]
    pub(crate) fn allocated(&self) -> usize {
        self.slots.len()
    }

    /// Stores `node`, returning a handle to it.
    ///
    /// # Panics
    ///
    /// Panics if every `u32` index below the sentinel is in use.
    pub(crate) fn insert(&mut self, node: Node<T>) -> ListHandle {
        let serial = self.next_serial;
        self.next_serial += 1;

        if let Some(slot) = self.free.pop() {
            let entry = &mut self.slots[slot as usize];
            debug_assert!(entry.node.is_none(), "free slot is occupied");
            entry.serial = serial;
            entry.node = Some(node);
            return ListHandle { slot, serial };
        }

        let slot = u32::try_from(self.slots.len())
            .ok()
            .filter(|&slot| slot != NIL)
            .unwrap_or_else(|| panic!("list node index space exhausted"));
        self.slots.push(Slot {
            serial,
            node: Some(node),
        });
        ListHandle { slot, serial }
    }

    /// Returns the node `handle` names, if it is still alive.
    #[inline]
    pub(crate) fn get(&self, handle: ListHandle) -> Option<&Node<T>> {
        let entry = self.slots.get(handle.slot as usize)?;
        if entry.serial != handle.serial {
            return None;
        }
        entry.node.as_ref()
    }

    /// Returns a handle for the live node at `slot`.
    #[inline]
    pub(crate) fn handle(&self, slot: u32) -> ListHandle {
        ListHandle {
            slot,
            serial: self.slots[slot as usize].serial,
        }
    }

    /// Returns the live node at `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is vacant; list links only ever name live nodes.
    #[inline]
    pub(crate) fn node(&self, slot: u32) -> &Node<T> {
        match self.slots.get(slot as usize).and_then(|entry| entry.node.as_ref()) {
            Some(node) => node,
            None => panic!("dangling list link: {slot}"),
        }
    }

    /// Mutable form of [`NodeSlab::node`].
    #[inline]
    pub(crate) fn node_mut(&mut self, slot: u32) -> &mut Node<T> {
        match self
            .slots
            .get_mut(slot as usize)
            .and_then(|entry| entry.node.as_mut())
        {
            Some(node) => node,
            None => panic!("dangling list link: {slot}"),
        }
    }

    /// Vacates `slot` and returns its node.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is vacant.
    pub(crate) fn remove(&mut self, slot: u32) -> Node<T> {
        let node = match self
            .slots
            .get_mut(slot as usize)
            .and_then(|entry| entry.node.take())
        {
            Some(node) => node,
            None => panic!("removing vacant list slot: {slot}"),
        };
        self.free.push(slot);
        node
    }

    /// Drops every node and releases all slots.
    ///
    /// The serial counter keeps running so handles from before the clear
    /// stay dead.
    pub(crate) fn clear(&mut self) {
        self.slots = Vec::new();
        self.free = Vec::new();
    }
}
