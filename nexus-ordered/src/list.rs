//! Sorted doubly-linked list.
//!
//! Nodes live in an internal slab and are linked in ascending comparator
//! order. Without random access, lookups scan from the head; once a node is
//! known, linking and unlinking it is O(1).
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `find` | O(n) scan, stops early past the probe |
//! | `insert` | O(n) scan + O(1) splice |
//! | `remove` | O(1) splice |
//! | traversal | O(n) |
//!
//! # Handles
//!
//! A [`ListHandle`] names one node and stays valid while that node is in the
//! list, no matter how many other elements are inserted or removed around
//! it. Removing the node itself, clearing the list, or dropping it ends the
//! handle's life.
//!
//! ```
//! use nexus_ordered::SortedList;
//!
//! let mut list: SortedList<u32> = SortedList::default();
//! list.insert(10);
//! list.insert(30);
//!
//! let thirty = list.find(&30).unwrap();
//! list.insert(20);
//! list.insert(40);
//!
//! // Still names the same node
//! assert_eq!(list.get(thirty), Some(&30));
//! assert_eq!(list.remove(thirty), Some(30));
//! assert_eq!(list.remove(thirty), None);
//! ```
//!
//! # Allocation
//!
//! Slots vacated by `remove` stay allocated and are reused by later
//! inserts. `clear` releases every slot. The slab's slot count is what gets
//! reported to the [`Registry`].

use core::cmp::Ordering;
use core::fmt;

use tracing::trace;

use crate::nodes::{NIL, Node, NodeSlab};
use crate::{Compare, ListHandle, Natural, OrderedContainer, Registry};

/// A sorted doubly-linked list.
///
/// # Example
///
/// ```
/// use nexus_ordered::SortedList;
///
/// let mut list: SortedList<i32, _> = SortedList::new(|a: &i32, b: &i32| b.cmp(a)); // descending
/// list.insert(1);
/// list.insert(3);
/// list.insert(2);
///
/// let values: Vec<_> = list.iter().copied().collect();
/// assert_eq!(values, vec![3, 2, 1]);
/// ```
pub struct SortedList<T, C = Natural> {
    nodes: NodeSlab<T>,
    head: u32,
    tail: u32,
    len: usize,
    compare: C,
    registry: Registry,
}

impl<T: Ord> Default for SortedList<T, Natural> {
    fn default() -> Self {
        Self::new(Natural)
    }
}

impl<T, C: Compare<T>> SortedList<T, C> {
    /// Creates an empty list with a private registry.
    pub fn new(compare: C) -> Self {
        Self::new_in(compare, &Registry::new())
    }

    /// Creates an empty list that reports usage to `registry`.
    pub fn new_in(compare: C, registry: &Registry) -> Self {
        registry.open(0);
        Self {
            nodes: NodeSlab::new(),
            head: NIL,
            tail: NIL,
            len: 0,
            compare,
            registry: registry.clone(),
        }
    }

    /// Returns the number of stored elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing is stored.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of node slots allocated, occupied or free.
    #[inline]
    pub fn allocated(&self) -> usize {
        self.nodes.allocated()
    }

    /// Returns the comparator.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.compare
    }

    /// Returns the registry this list reports to.
    #[inline]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns an ascending iterator over the elements.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Returns a handle to the smallest element.
    #[inline]
    pub fn front_handle(&self) -> Option<ListHandle> {
        if self.head == NIL {
            None
        } else {
            Some(self.nodes.handle(self.head))
        }
    }

    /// Returns a handle to the largest element.
    #[inline]
    pub fn back_handle(&self) -> Option<ListHandle> {
        if self.tail == NIL {
            None
        } else {
            Some(self.nodes.handle(self.tail))
        }
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Finds an element equal to `probe`.
    #[inline]
    pub fn find(&self, probe: &T) -> Option<ListHandle> {
        self.find_with(probe, |probe, value| self.compare.compare(probe, value))
    }

    /// Finds an element using a comparator consistent with the list's own.
    ///
    /// Scans from the head and stops at the first equal element, or as soon
    /// as it passes the place where `probe` would sit.
    pub fn find_with<Q, F>(&self, probe: &Q, mut cmp: F) -> Option<ListHandle>
    where
        Q: ?Sized,
        F: FnMut(&Q, &T) -> Ordering,
    {
        let mut cursor = self.head;
        while cursor != NIL {
            let node = self.nodes.node(cursor);
            match cmp(probe, &node.value) {
                Ordering::Greater => cursor = node.next,
                Ordering::Equal => return Some(self.nodes.handle(cursor)),
                Ordering::Less => return None,
            }
        }
        None
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Inserts `value` in front of the first element ranking strictly after
    /// it, or at the back.
    ///
    /// Existing handles remain valid.
    pub fn insert(&mut self, value: T) -> ListHandle {
        let mut before = self.head;
        while before != NIL {
            let node = self.nodes.node(before);
            if self.compare.compare(&node.value, &value) == Ordering::Greater {
                break;
            }
            before = node.next;
        }

        let allocated = self.nodes.allocated();
        let handle = self.nodes.insert(Node::new(value));
        self.registry.allocate(self.nodes.allocated() - allocated);

        if before == NIL {
            self.link_back(handle.slot);
        } else {
            self.link_before(before, handle.slot);
        }
        self.registry.add_items(1);
        handle
    }

    /// Removes the node `handle` names.
    ///
    /// Returns `None` if that node has already been removed. Other handles
    /// remain valid.
    pub fn remove(&mut self, handle: ListHandle) -> Option<T> {
        self.nodes.get(handle)?;

        self.unlink(handle.slot);
        let node = self.nodes.remove(handle.slot);
        self.registry.remove_items(1);
        Some(node.value)
    }

    /// Removes every element and releases all node slots.
    pub fn clear(&mut self) {
        trace!(
            len = self.len,
            allocated = self.nodes.allocated(),
            "clearing sorted list"
        );
        self.registry.remove_items(self.len);
        self.registry.release(self.nodes.allocated());

        self.nodes.clear();
        self.head = NIL;
        self.tail = NIL;
        self.len = 0;
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns the element `handle` names, or `None` if it was removed.
    #[inline]
    pub fn get(&self, handle: ListHandle) -> Option<&T> {
        self.nodes.get(handle).map(|node| &node.value)
    }

    /// Returns the smallest element.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        if self.head == NIL {
            None
        } else {
            Some(&self.nodes.node(self.head).value)
        }
    }

    /// Returns the largest element.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        if self.tail == NIL {
            None
        } else {
            Some(&self.nodes.node(self.tail).value)
        }
    }

    // ========================================================================
    // Linking
    // ========================================================================

    fn link_back(&mut self, slot: u32) {
        let node = self.nodes.node_mut(slot);
        node.prev = self.tail;
        node.next = NIL;

        if self.tail != NIL {
            self.nodes.node_mut(self.tail).next = slot;
        } else {
            self.head = slot;
        }

        self.tail = slot;
        self.len += 1;
    }

    fn link_before(&mut self, before: u32, slot: u32) {
        let prev = self.nodes.node(before).prev;
        let node = self.nodes.node_mut(slot);
        node.next = before;
        node.prev = prev;

        self.nodes.node_mut(before).prev = slot;

        if prev != NIL {
            self.nodes.node_mut(prev).next = slot;
        } else {
            self.head = slot;
        }

        self.len += 1;
    }

    fn unlink(&mut self, slot: u32) {
        let node = self.nodes.node(slot);
        let prev = node.prev;
        let next = node.next;
        debug_assert!(
            prev != NIL || self.head == slot,
            "unlinking a node that is not in the list"
        );

        if prev != NIL {
            self.nodes.node_mut(prev).next = next;
        } else {
            self.head = next;
        }

        if next != NIL {
            self.nodes.node_mut(next).prev = prev;
        } else {
            self.tail = prev;
        }

        let node = self.nodes.node_mut(slot);
        node.prev = NIL;
        node.next = NIL;

        self.len -= 1;
    }
}

impl<T, C> Drop for SortedList<T, C> {
    fn drop(&mut self) {
        trace!(len = self.len, "dropping sorted list");
        self.registry.close(self.len, self.nodes.allocated());
    }
}

impl<T, C: Compare<T>> OrderedContainer for SortedList<T, C> {
    type Item = T;
    type Handle = ListHandle;
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn allocated(&self) -> usize {
        self.nodes.allocated()
    }

    #[inline]
    fn registry(&self) -> &Registry {
        &self.registry
    }

    #[inline]
    fn insert(&mut self, value: T) -> ListHandle {
        SortedList::insert(self, value)
    }

    #[inline]
    fn find(&self, probe: &T) -> Option<ListHandle> {
        SortedList::find(self, probe)
    }

    #[inline]
    fn find_with<Q, F>(&self, probe: &Q, cmp: F) -> Option<ListHandle>
    where
        Q: ?Sized,
        F: FnMut(&Q, &T) -> Ordering,
    {
        SortedList::find_with(self, probe, cmp)
    }

    #[inline]
    fn get(&self, handle: ListHandle) -> Option<&T> {
        SortedList::get(self, handle)
    }

    #[inline]
    fn remove(&mut self, handle: ListHandle) -> Option<T> {
        SortedList::remove(self, handle)
    }

    #[inline]
    fn clear(&mut self) {
        SortedList::clear(self)
    }

    #[inline]
    fn iter(&self) -> Iter<'_, T> {
        SortedList::iter(self)
    }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a SortedList<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C: Compare<T>> Extend<T> for SortedList<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for SortedList<T, Natural> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::default();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Debug, C: Compare<T>> fmt::Debug for SortedList<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedList")
            .field("values", &DebugValues(self))
            .field("allocated", &self.nodes.allocated())
            .finish()
    }
}

struct DebugValues<'a, T, C>(&'a SortedList<T, C>);

impl<T: fmt::Debug, C: Compare<T>> fmt::Debug for DebugValues<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

// ============================================================================
// Iterator
// ============================================================================

/// Ascending iterator over a [`SortedList`].
pub struct Iter<'a, T> {
    nodes: &'a NodeSlab<T>,
    front: u32,
    back: u32,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.nodes.node(self.front);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.nodes.node(self.back);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> core::iter::FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish()
    }
}
