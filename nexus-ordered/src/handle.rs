//! Handles to stored slots.
//!
//! A handle is returned by `insert` and `find` and lets the caller fetch or
//! remove that exact slot later without searching again. What a handle
//! survives depends on the backing:
//!
//! | Handle | Names | Invalidated by |
//! |--------|-------|----------------|
//! | [`ArrayHandle`] | slot position at a container version | *any* insert, remove or clear |
//! | [`ListHandle`] | one specific node | removing that node, clear, drop |
//!
//! Do not retain a handle across any mutating call unless you rely on the
//! list-backed guarantee explicitly. Both backings detect handles they no
//! longer honour and answer `None` instead of touching another slot, but
//! that detection is a safety net, not part of the contract.

/// Handle into a [`SortedArray`](crate::SortedArray).
///
/// Carries the slot position and the container version it was issued at.
/// Growth may reallocate and every insert or remove shifts slots, so the
/// handle is only honoured while the version still matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArrayHandle {
    pub(crate) index: usize,
    pub(crate) version: u64,
}

impl ArrayHandle {
    /// Returns the slot position (rank in ascending order) this handle names.
    #[inline]
    pub const fn position(&self) -> usize {
        self.index
    }
}

/// Handle into a [`SortedList`](crate::SortedList).
///
/// Names a node by its slab slot plus the serial stamped on the node when it
/// was inserted. Slots are reused after removal; the serial never is, so a
/// handle to a removed node cannot alias its successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListHandle {
    pub(crate) slot: u32,
    pub(crate) serial: u64,
}

/// Backing-agnostic handle issued by [`Container`](crate::Container).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    /// Handle into the array backing.
    Array(ArrayHandle),
    /// Handle into the list backing.
    List(ListHandle),
}

impl From<ArrayHandle> for Handle {
    #[inline]
    fn from(handle: ArrayHandle) -> Self {
        Handle::Array(handle)
    }
}

impl From<ListHandle> for Handle {
    #[inline]
    fn from(handle: ListHandle) -> Self {
        Handle::List(handle)
    }
}
