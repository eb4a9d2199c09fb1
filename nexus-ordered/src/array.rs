//! Sorted dynamic array.
//!
//! Elements live contiguously in ascending comparator order. Lookups are a
//! three-way binary search; inserts and removes shift the tail of the array
//! to keep it contiguous.
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `find` | O(log n) |
//! | `insert` | O(log n) search + O(n) shift, amortized growth |
//! | `remove` | O(n) shift |
//! | traversal | O(n) |
//!
//! # Allocation
//!
//! The array tracks its own logical allocation, separate from whatever the
//! allocator rounds up to. It starts at the [`GrowthPolicy`]'s initial
//! allocation and grows by the policy's step only when an insert finds every
//! slot in use. `clear` drops back to the initial allocation. The
//! allocation is what gets reported to the [`Registry`].
//!
//! # Handles
//!
//! An [`ArrayHandle`] is a slot position stamped with the container version.
//! Every insert, remove, and clear bumps the version, so any mutation
//! invalidates every outstanding handle:
//!
//! ```
//! use nexus_ordered::SortedArray;
//!
//! let mut array: SortedArray<u32> = SortedArray::default();
//! array.insert(10);
//! array.insert(30);
//!
//! let thirty = array.find(&30).unwrap();
//! array.insert(20); // shifts 30 one slot right
//!
//! assert_eq!(array.get(thirty), None);
//! let thirty = array.find(&30).unwrap();
//! assert_eq!(array.remove(thirty), Some(30));
//! ```

use core::cmp::Ordering;
use core::fmt;

use tracing::trace;

use crate::{ArrayHandle, Compare, GrowthPolicy, Natural, OrderedContainer, Registry};

/// Outcome of a binary search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Search {
    /// An equal element sits at this position.
    Found(usize),
    /// No equal element; inserting here keeps the array sorted.
    Vacant(usize),
}

impl Search {
    /// Returns the position, found or vacant.
    ///
    /// Either way, inserting at this position keeps the array sorted.
    #[inline]
    pub const fn position(&self) -> usize {
        match *self {
            Search::Found(index) | Search::Vacant(index) => index,
        }
    }

    /// Returns `true` if an equal element was found.
    #[inline]
    pub const fn is_found(&self) -> bool {
        matches!(self, Search::Found(_))
    }
}

/// A sorted, contiguous, growable array.
///
/// # Example
///
/// ```
/// use nexus_ordered::SortedArray;
///
/// let mut words = SortedArray::new(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// words.insert("ccc");
/// words.insert("a");
/// words.insert("bb");
///
/// assert_eq!(words.as_slice(), &["a", "bb", "ccc"]);
/// assert!(words.find(&"zz").is_some()); // same length as "bb"
/// ```
pub struct SortedArray<T, C = Natural> {
    values: Vec<T>,
    allocation: usize,
    version: u64,
    policy: GrowthPolicy,
    compare: C,
    registry: Registry,
}

impl<T: Ord> Default for SortedArray<T, Natural> {
    fn default() -> Self {
        Self::new(Natural)
    }
}

impl<T, C: Compare<T>> SortedArray<T, C> {
    /// Creates an empty array with the default growth policy and a private
    /// registry.
    pub fn new(compare: C) -> Self {
        Self::with_policy_in(compare, GrowthPolicy::default(), &Registry::new())
    }

    /// Creates an empty array that reports usage to `registry`.
    pub fn new_in(compare: C, registry: &Registry) -> Self {
        Self::with_policy_in(compare, GrowthPolicy::default(), registry)
    }

    /// Creates an empty array with a custom growth policy.
    pub fn with_policy(compare: C, policy: GrowthPolicy) -> Self {
        Self::with_policy_in(compare, policy, &Registry::new())
    }

    /// Creates an empty array with a custom growth policy that reports usage
    /// to `registry`.
    pub fn with_policy_in(compare: C, policy: GrowthPolicy, registry: &Registry) -> Self {
        let allocation = policy.initial_allocation();
        registry.open(allocation);
        Self {
            values: Vec::with_capacity(allocation),
            allocation,
            version: 0,
            policy,
            compare,
            registry: registry.clone(),
        }
    }

    /// Returns the number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the current logical allocation in slots.
    #[inline]
    pub fn allocation(&self) -> usize {
        self.allocation
    }

    /// Returns the growth policy.
    #[inline]
    pub fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    /// Returns the comparator.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.compare
    }

    /// Returns the registry this array reports to.
    #[inline]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the elements as an ascending slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Returns an ascending iterator over the elements.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.values.iter()
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Binary-searches for `probe` with the array's comparator.
    #[inline]
    pub fn search(&self, probe: &T) -> Search {
        self.search_by(probe, |probe, value| self.compare.compare(probe, value))
    }

    /// Binary-searches with a caller-supplied comparator.
    ///
    /// `cmp(probe, element)` is evaluated at the midpoint of the remaining
    /// range. The search stops at the first midpoint comparing equal and
    /// reports it as [`Search::Found`]; it does not walk to the first or
    /// last of a run of equal elements. On a miss the range converges to
    /// the position where `probe` would be inserted, reported as
    /// [`Search::Vacant`].
    pub fn search_by<Q, F>(&self, probe: &Q, mut cmp: F) -> Search
    where
        Q: ?Sized,
        F: FnMut(&Q, &T) -> Ordering,
    {
        // Candidates are [left, right).
        let mut left = 0;
        let mut right = self.values.len();
        while left < right {
            // Midpoint of the inclusive range [left, right - 1].
            let middle = left + (right - 1 - left) / 2;
            match cmp(probe, &self.values[middle]) {
                Ordering::Less => right = middle,
                Ordering::Equal => return Search::Found(middle),
                Ordering::Greater => left = middle + 1,
            }
        }
        Search::Vacant(left)
    }

    /// Finds an element equal to `probe`.
    #[inline]
    pub fn find(&self, probe: &T) -> Option<ArrayHandle> {
        match self.search(probe) {
            Search::Found(index) => Some(self.handle_at(index)),
            Search::Vacant(_) => None,
        }
    }

    /// Finds an element using a comparator consistent with the array's own.
    #[inline]
    pub fn find_with<Q, F>(&self, probe: &Q, cmp: F) -> Option<ArrayHandle>
    where
        Q: ?Sized,
        F: FnMut(&Q, &T) -> Ordering,
    {
        match self.search_by(probe, cmp) {
            Search::Found(index) => Some(self.handle_at(index)),
            Search::Vacant(_) => None,
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Inserts `value` at its ordered position.
    ///
    /// The position comes straight from one binary search: a hit inserts in
    /// front of the equal element it landed on, a miss inserts at the
    /// converged position. Invalidates all outstanding handles.
    pub fn insert(&mut self, value: T) -> ArrayHandle {
        let index = self.search(&value).position();
        if self.values.len() == self.allocation {
            self.grow();
        }

        self.values.insert(index, value);
        self.bump_version();
        self.registry.add_items(1);
        self.handle_at(index)
    }

    /// Removes the element `handle` names.
    ///
    /// Returns `None` if the handle was issued before the last mutation.
    /// Invalidates all outstanding handles.
    pub fn remove(&mut self, handle: ArrayHandle) -> Option<T> {
        if !self.is_current(handle) {
            return None;
        }

        let value = self.values.remove(handle.index);
        self.bump_version();
        self.registry.remove_items(1);
        Some(value)
    }

    /// Removes every element and shrinks back to the initial allocation.
    pub fn clear(&mut self) {
        trace!(
            len = self.values.len(),
            allocation = self.allocation,
            "clearing sorted array"
        );
        let initial = self.policy.initial_allocation();
        self.registry.remove_items(self.values.len());
        self.registry.release(self.allocation);
        self.registry.allocate(initial);

        self.values = Vec::with_capacity(initial);
        self.allocation = initial;
        self.bump_version();
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns the element `handle` names, or `None` if it is stale.
    #[inline]
    pub fn get(&self, handle: ArrayHandle) -> Option<&T> {
        if !self.is_current(handle) {
            return None;
        }
        self.values.get(handle.index)
    }

    /// Returns the smallest element.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.values.first()
    }

    /// Returns the largest element.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.values.last()
    }

    // ========================================================================
    // Internals
    // ========================================================================

    #[inline]
    fn handle_at(&self, index: usize) -> ArrayHandle {
        ArrayHandle {
            index,
            version: self.version,
        }
    }

    #[inline]
    fn is_current(&self, handle: ArrayHandle) -> bool {
        handle.version == self.version && handle.index < self.values.len()
    }

    #[inline]
    fn bump_version(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    fn grow(&mut self) {
        let next = self.policy.next_allocation(self.allocation);
        trace!(from = self.allocation, to = next, "growing sorted array");

        self.values.reserve_exact(next - self.values.len());
        self.registry.allocate(next - self.allocation);
        self.allocation = next;
    }
}

impl<T, C> Drop for SortedArray<T, C> {
    fn drop(&mut self) {
        trace!(len = self.values.len(), "dropping sorted array");
        self.registry.close(self.values.len(), self.allocation);
    }
}

impl<T, C: Compare<T>> OrderedContainer for SortedArray<T, C> {
    type Item = T;
    type Handle = ArrayHandle;
    type Iter<'a>
        = core::slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn allocated(&self) -> usize {
        self.allocation
    }

    #[inline]
    fn registry(&self) -> &Registry {
        &self.registry
    }

    #[inline]
    fn insert(&mut self, value: T) -> ArrayHandle {
        SortedArray::insert(self, value)
    }

    #[inline]
    fn find(&self, probe: &T) -> Option<ArrayHandle> {
        SortedArray::find(self, probe)
    }

    #[inline]
    fn find_with<Q, F>(&self, probe: &Q, cmp: F) -> Option<ArrayHandle>
    where
        Q: ?Sized,
        F: FnMut(&Q, &T) -> Ordering,
    {
        SortedArray::find_with(self, probe, cmp)
    }

    #[inline]
    fn get(&self, handle: ArrayHandle) -> Option<&T> {
        SortedArray::get(self, handle)
    }

    #[inline]
    fn remove(&mut self, handle: ArrayHandle) -> Option<T> {
        SortedArray::remove(self, handle)
    }

    #[inline]
    fn clear(&mut self) {
        SortedArray::clear(self)
    }

    #[inline]
    fn iter(&self) -> core::slice::Iter<'_, T> {
        self.values.iter()
    }
}

impl<'a, T, C> IntoIterator for &'a SortedArray<T, C> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T, C: Compare<T>> Extend<T> for SortedArray<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for SortedArray<T, Natural> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::default();
        array.extend(iter);
        array
    }
}

impl<T: fmt::Debug, C> fmt::Debug for SortedArray<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedArray")
            .field("values", &self.values)
            .field("allocation", &self.allocation)
            .field("version", &self.version)
            .finish()
    }
}
