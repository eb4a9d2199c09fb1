//! Usage accounting across containers.
//!
//! A [`Registry`] counts live containers, live items, and allocated item
//! slots for every container created against it. Containers update it on
//! every create, drop, insert, remove, clear, and growth step, so a
//! [`Usage`] snapshot taken at any point reflects the exact aggregate state.
//!
//! Registries are explicit: create one, hand it to each container through
//! `new_in`, and read it back when you want diagnostics. Containers built
//! with plain `new` get a private registry of their own.
//!
//! ```
//! use nexus_ordered::{Natural, Registry, SortedArray, SortedList};
//!
//! let registry = Registry::new();
//! let mut ids: SortedArray<u32> = SortedArray::new_in(Natural, &registry);
//! let mut names: SortedList<&str> = SortedList::new_in(Natural, &registry);
//!
//! ids.insert(7);
//! names.insert("seven");
//!
//! let usage = registry.usage();
//! assert_eq!(usage.containers, 2);
//! assert_eq!(usage.items_in_use, 2);
//!
//! drop(ids);
//! drop(names);
//! assert_eq!(registry.usage().containers, 0);
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Point-in-time copy of a registry's counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Usage {
    /// Containers currently alive.
    pub containers: usize,
    /// Items currently stored across all containers.
    pub items_in_use: usize,
    /// Item slots currently allocated across all containers.
    pub items_allocated: usize,
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Containers: {}", self.containers)?;
        writeln!(f, "Container items in use: {}", self.items_in_use)?;
        write!(f, "Container items allocated: {}", self.items_allocated)
    }
}

#[derive(Debug, Default)]
struct Counters {
    containers: Cell<usize>,
    items_in_use: Cell<usize>,
    items_allocated: Cell<usize>,
}

/// Shared usage counters for a group of containers.
///
/// Cloning a registry yields another handle to the same counters.
/// Single-threaded: registries (and therefore containers) are `!Send`.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    counters: Rc<Counters>,
}

impl Registry {
    /// Creates a registry with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the current counters.
    pub fn usage(&self) -> Usage {
        Usage {
            containers: self.counters.containers.get(),
            items_in_use: self.counters.items_in_use.get(),
            items_allocated: self.counters.items_allocated.get(),
        }
    }

    /// Returns `true` if both handles point at the same counters.
    pub fn shares(&self, other: &Registry) -> bool {
        Rc::ptr_eq(&self.counters, &other.counters)
    }

    // ========================================================================
    // Container-side updates
    // ========================================================================

    #[inline]
    pub(crate) fn open(&self, allocated: usize) {
        add(&self.counters.containers, 1);
        add(&self.counters.items_allocated, allocated);
    }

    #[inline]
    pub(crate) fn close(&self, in_use: usize, allocated: usize) {
        sub(&self.counters.containers, 1);
        sub(&self.counters.items_in_use, in_use);
        sub(&self.counters.items_allocated, allocated);
    }

    #[inline]
    pub(crate) fn add_items(&self, n: usize) {
        add(&self.counters.items_in_use, n);
    }

    #[inline]
    pub(crate) fn remove_items(&self, n: usize) {
        sub(&self.counters.items_in_use, n);
    }

    #[inline]
    pub(crate) fn allocate(&self, n: usize) {
        add(&self.counters.items_allocated, n);
    }

    #[inline]
    pub(crate) fn release(&self, n: usize) {
        sub(&self.counters.items_allocated, n);
    }
}

#[inline]
fn add(counter: &Cell<usize>, n: usize) {
    counter.set(counter.get() + n);
}

#[inline]
fn sub(counter: &Cell<usize>, n: usize) {
    debug_assert!(counter.get() >= n, "usage counter underflow");
    counter.set(counter.get().saturating_sub(n));
}
