//! The ordered container contract.
//!
//! [`OrderedContainer`] is the one interface both backings implement. Code
//! written against it works unchanged with [`SortedArray`],
//! [`SortedList`], or the runtime-selected [`Container`].
//!
//! [`SortedArray`]: crate::SortedArray
//! [`SortedList`]: crate::SortedList
//! [`Container`]: crate::Container

use core::cmp::Ordering;
use core::fmt;
use core::ops::ControlFlow;

use crate::{Apply, Registry};

/// A container that keeps its elements sorted by a comparator.
///
/// # Contract
///
/// - Iteration and every traversal visit elements in ascending comparator
///   order. Equal-ranked elements appear in unspecified relative order.
/// - `insert` never rejects or merges duplicates.
/// - `find` returns a handle to *some* element comparing equal to the
///   probe, or `None`.
/// - Handles are only guaranteed until the next mutating call on the same
///   container. List-backed handles additionally survive mutations of
///   other elements; see [`crate::handle`].
/// - Traversal callbacks see each element by shared reference. They cannot
///   insert into or remove from the container they are traversing.
///
/// # Example
///
/// ```
/// use nexus_ordered::{OrderedContainer, SortedArray, SortedList};
///
/// fn scenario<C: OrderedContainer<Item = u32>>(mut c: C) -> Vec<u32> {
///     for n in [5, 3, 4, 1, 2] {
///         c.insert(n);
///     }
///     let three = c.find(&3).unwrap();
///     assert_eq!(c.remove(three), Some(3));
///     c.iter().copied().collect()
/// }
///
/// assert_eq!(scenario(SortedArray::default()), vec![1, 2, 4, 5]);
/// assert_eq!(scenario(SortedList::default()), vec![1, 2, 4, 5]);
/// ```
pub trait OrderedContainer {
    /// Stored element type.
    type Item;

    /// Handle to a stored slot.
    type Handle: Copy + Eq + fmt::Debug;

    /// Ascending iterator over stored elements.
    type Iter<'a>: DoubleEndedIterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Returns the number of stored elements.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is stored.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of item slots currently allocated.
    fn allocated(&self) -> usize;

    /// Returns the registry this container reports usage to.
    fn registry(&self) -> &Registry;

    /// Inserts `value` at its ordered position, returning a handle to it.
    fn insert(&mut self, value: Self::Item) -> Self::Handle;

    /// Finds an element equal to `probe` under the container's comparator.
    fn find(&self, probe: &Self::Item) -> Option<Self::Handle>;

    /// Finds an element using a caller-supplied comparator.
    ///
    /// `cmp(probe, element)` must order elements consistently with the
    /// container's own comparator. If it does not, the result is
    /// unspecified (but never unsound).
    fn find_with<Q, F>(&self, probe: &Q, cmp: F) -> Option<Self::Handle>
    where
        Q: ?Sized,
        F: FnMut(&Q, &Self::Item) -> Ordering;

    /// Returns the element `handle` names, or `None` if the handle is stale.
    fn get(&self, handle: Self::Handle) -> Option<&Self::Item>;

    /// Removes and returns the element `handle` names.
    ///
    /// Returns `None` and leaves the container untouched if the handle is
    /// stale.
    fn remove(&mut self, handle: Self::Handle) -> Option<Self::Item>;

    /// Removes every element, returning to the just-created state.
    fn clear(&mut self);

    /// Returns an ascending iterator over the stored elements.
    fn iter(&self) -> Self::Iter<'_>;

    // ========================================================================
    // Provided lookups
    // ========================================================================

    /// Returns `true` if an element equal to `probe` is stored.
    #[inline]
    fn contains(&self, probe: &Self::Item) -> bool {
        self.find(probe).is_some()
    }

    /// Finds an element equal to `probe` and removes it.
    #[inline]
    fn remove_first(&mut self, probe: &Self::Item) -> Option<Self::Item> {
        let handle = self.find(probe)?;
        self.remove(handle)
    }

    /// Returns the smallest element.
    #[inline]
    fn first(&self) -> Option<&Self::Item> {
        self.iter().next()
    }

    /// Returns the largest element.
    #[inline]
    fn last(&self) -> Option<&Self::Item> {
        self.iter().next_back()
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// Drives `apply` over every element in ascending order.
    ///
    /// Returns `Some(b)` as soon as the callback breaks with `b`, or `None`
    /// once every element has been visited.
    fn traverse<A, B>(&self, mut apply: Apply<'_, Self::Item, A, B>) -> Option<B> {
        for value in self.iter() {
            if let ControlFlow::Break(result) = apply.call(value) {
                return Some(result);
            }
        }
        None
    }

    /// Calls `f` on every element in ascending order.
    fn apply<F>(&self, mut f: F)
    where
        F: FnMut(&Self::Item),
    {
        self.traverse::<(), ()>(Apply::Each(&mut f));
    }

    /// Calls `f` on elements in ascending order until it breaks.
    ///
    /// Returns the break value, or `None` if `f` never broke.
    ///
    /// ```
    /// use core::ops::ControlFlow;
    /// use nexus_ordered::{OrderedContainer, SortedArray};
    ///
    /// let mut c: SortedArray<u32> = SortedArray::default();
    /// for n in [5, 3, 4, 1, 2] {
    ///     c.insert(n);
    /// }
    ///
    /// let mut visited = Vec::new();
    /// let hit = c.apply_if(|n| {
    ///     visited.push(*n);
    ///     if *n == 3 { ControlFlow::Break(*n * 10) } else { ControlFlow::Continue(()) }
    /// });
    ///
    /// assert_eq!(hit, Some(30));
    /// assert_eq!(visited, vec![1, 2, 3]);
    /// ```
    fn apply_if<B, F>(&self, mut f: F) -> Option<B>
    where
        F: FnMut(&Self::Item) -> ControlFlow<B>,
    {
        self.traverse::<(), B>(Apply::EachIf(&mut f))
    }

    /// Calls `f` on every element with a context argument.
    fn apply_with<A, F>(&self, mut f: F, arg: &mut A)
    where
        F: FnMut(&Self::Item, &mut A),
    {
        self.traverse::<A, ()>(Apply::EachWith(&mut f, arg));
    }

    /// Calls `f` with a context argument until it breaks.
    fn apply_if_with<A, B, F>(&self, mut f: F, arg: &mut A) -> Option<B>
    where
        F: FnMut(&Self::Item, &mut A) -> ControlFlow<B>,
    {
        self.traverse::<A, B>(Apply::EachIfWith(&mut f, arg))
    }
}
