//! Runtime backing selection.
//!
//! [`Container`] wraps either backing behind one concrete type so the
//! choice can be made when the container is built, from configuration or
//! a command-line flag, rather than baked into the caller's types.

use core::cmp::Ordering;
use core::fmt;

use crate::{Compare, Handle, Natural, OrderedContainer, Registry, SortedArray, SortedList, list};

/// Which backing a [`Container`] uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Backing {
    /// Contiguous sorted storage with binary search.
    #[default]
    Array,
    /// Doubly-linked nodes with stable handles.
    List,
}

/// An ordered container whose backing is chosen at construction.
///
/// Handles are [`Handle`] values. A handle issued by one backing is never
/// honoured by the other; `get` and `remove` answer `None` for it.
///
/// ```
/// use nexus_ordered::{Backing, Container, Natural, OrderedContainer};
///
/// for backing in [Backing::Array, Backing::List] {
///     let mut c: Container<u32> = Container::new(backing, Natural);
///     c.insert(2);
///     c.insert(1);
///     assert_eq!(c.backing(), backing);
///     assert_eq!(c.first(), Some(&1));
/// }
/// ```
pub enum Container<T, C = Natural> {
    /// Array-backed.
    Array(SortedArray<T, C>),
    /// List-backed.
    List(SortedList<T, C>),
}

impl<T, C: Compare<T>> Container<T, C> {
    /// Creates an empty container with a private registry.
    pub fn new(backing: Backing, compare: C) -> Self {
        Self::new_in(backing, compare, &Registry::new())
    }

    /// Creates an empty container that reports usage to `registry`.
    pub fn new_in(backing: Backing, compare: C, registry: &Registry) -> Self {
        match backing {
            Backing::Array => Container::Array(SortedArray::new_in(compare, registry)),
            Backing::List => Container::List(SortedList::new_in(compare, registry)),
        }
    }

    /// Returns which backing is in use.
    #[inline]
    pub fn backing(&self) -> Backing {
        match self {
            Container::Array(_) => Backing::Array,
            Container::List(_) => Backing::List,
        }
    }
}

impl<T, C: Compare<T>> From<SortedArray<T, C>> for Container<T, C> {
    fn from(array: SortedArray<T, C>) -> Self {
        Container::Array(array)
    }
}

impl<T, C: Compare<T>> From<SortedList<T, C>> for Container<T, C> {
    fn from(list: SortedList<T, C>) -> Self {
        Container::List(list)
    }
}

impl<T, C: Compare<T>> OrderedContainer for Container<T, C> {
    type Item = T;
    type Handle = Handle;
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        match self {
            Container::Array(array) => array.len(),
            Container::List(list) => list.len(),
        }
    }

    fn allocated(&self) -> usize {
        match self {
            Container::Array(array) => array.allocation(),
            Container::List(list) => list.allocated(),
        }
    }

    fn registry(&self) -> &Registry {
        match self {
            Container::Array(array) => array.registry(),
            Container::List(list) => list.registry(),
        }
    }

    fn insert(&mut self, value: T) -> Handle {
        match self {
            Container::Array(array) => array.insert(value).into(),
            Container::List(list) => list.insert(value).into(),
        }
    }

    fn find(&self, probe: &T) -> Option<Handle> {
        match self {
            Container::Array(array) => array.find(probe).map(Handle::from),
            Container::List(list) => list.find(probe).map(Handle::from),
        }
    }

    fn find_with<Q, F>(&self, probe: &Q, cmp: F) -> Option<Handle>
    where
        Q: ?Sized,
        F: FnMut(&Q, &T) -> Ordering,
    {
        match self {
            Container::Array(array) => array.find_with(probe, cmp).map(Handle::from),
            Container::List(list) => list.find_with(probe, cmp).map(Handle::from),
        }
    }

    fn get(&self, handle: Handle) -> Option<&T> {
        match (self, handle) {
            (Container::Array(array), Handle::Array(handle)) => array.get(handle),
            (Container::List(list), Handle::List(handle)) => list.get(handle),
            _ => None,
        }
    }

    fn remove(&mut self, handle: Handle) -> Option<T> {
        match (self, handle) {
            (Container::Array(array), Handle::Array(handle)) => array.remove(handle),
            (Container::List(list), Handle::List(handle)) => list.remove(handle),
            _ => None,
        }
    }

    fn clear(&mut self) {
        match self {
            Container::Array(array) => array.clear(),
            Container::List(list) => list.clear(),
        }
    }

    fn iter(&self) -> Iter<'_, T> {
        match self {
            Container::Array(array) => Iter::Array(array.iter()),
            Container::List(list) => Iter::List(list.iter()),
        }
    }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a Container<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C: Compare<T>> Extend<T> for Container<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        match self {
            Container::Array(array) => array.extend(iter),
            Container::List(list) => list.extend(iter),
        }
    }
}

impl<T: fmt::Debug, C: Compare<T>> fmt::Debug for Container<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Array(array) => f.debug_tuple("Container").field(array).finish(),
            Container::List(list) => f.debug_tuple("Container").field(list).finish(),
        }
    }
}

/// Ascending iterator over a [`Container`].
#[derive(Debug, Clone)]
pub enum Iter<'a, T> {
    /// Iterating the array backing.
    Array(core::slice::Iter<'a, T>),
    /// Iterating the list backing.
    List(list::Iter<'a, T>),
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Iter::Array(iter) => iter.next(),
            Iter::List(iter) => iter.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Iter::Array(iter) => iter.size_hint(),
            Iter::List(iter) => iter.size_hint(),
        }
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        match self {
            Iter::Array(iter) => iter.next_back(),
            Iter::List(iter) => iter.next_back(),
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> core::iter::FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArrayHandle, ListHandle};

    #[test]
    fn default_backing_is_array() {
        assert_eq!(Backing::default(), Backing::Array);
    }

    #[test]
    fn new_picks_backing() {
        let array: Container<u8> = Container::new(Backing::Array, Natural);
        let list: Container<u8> = Container::new(Backing::List, Natural);

        assert!(matches!(array, Container::Array(_)));
        assert!(matches!(list, Container::List(_)));
        assert_eq!(array.allocated(), 3);
        assert_eq!(list.allocated(), 0);
    }

    #[test]
    fn mismatched_handle_is_rejected() {
        let mut array: Container<u8> = Container::new(Backing::Array, Natural);
        let mut list: Container<u8> = Container::new(Backing::List, Natural);

        let from_array = array.insert(1);
        let from_list = list.insert(1);

        assert_eq!(list.get(from_array), None);
        assert_eq!(array.remove(from_list), None);
        assert_eq!(array.len(), 1);
        assert_eq!(list.len(), 1);

        assert_eq!(array.get(from_array), Some(&1));
        assert_eq!(list.remove(from_list), Some(1));
    }

    #[test]
    fn handles_carry_backing_variant() {
        let mut array: Container<u8> = Container::new(Backing::Array, Natural);
        let mut list: Container<u8> = Container::new(Backing::List, Natural);

        assert!(matches!(array.insert(5), Handle::Array(ArrayHandle { .. })));
        assert!(matches!(list.insert(5), Handle::List(ListHandle { .. })));
    }

    #[test]
    fn from_backings_share_registry() {
        let registry = Registry::new();
        let array: Container<u8> = SortedArray::new_in(Natural, &registry).into();
        let list: Container<u8> = SortedList::new_in(Natural, &registry).into();

        assert!(array.registry().shares(list.registry()));
        assert_eq!(registry.usage().containers, 2);
    }

    #[test]
    fn iter_reverses() {
        let mut list: Container<u8> = Container::new(Backing::List, Natural);
        list.extend([3, 1, 2]);

        let backward: Vec<_> = list.iter().rev().copied().collect();
        assert_eq!(backward, vec![3, 2, 1]);
        assert_eq!(list.iter().len(), 3);
    }

    #[test]
    fn debug_wraps_backing() {
        let mut list: Container<u8> = Container::new(Backing::List, Natural);
        list.insert(1);
        assert_eq!(
            format!("{list:?}"),
            "Container(SortedList { values: [1], allocated: 1 })"
        );
    }
}
