//! Comparators that define a container's ordering.
//!
//! Every container is created with exactly one comparator and consults it
//! for every ordering decision it makes: where to insert, where to look,
//! when a scan can stop early. The comparator must be a consistent total
//! order (antisymmetric and transitive); containers do not check this.
//!
//! Any `Fn(&T, &T) -> Ordering` closure is a comparator:
//!
//! ```
//! use core::cmp::Ordering;
//! use nexus_ordered::{Compare, Natural};
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"ab", &"abc"), Ordering::Less);
//!
//! assert_eq!(Natural.compare(&3, &1), Ordering::Greater);
//! ```

use core::cmp::Ordering;

/// A three-way ordering over stored values.
///
/// Returns `Less` if `a` sorts before `b`, `Greater` if after, and `Equal`
/// if the two rank the same. Equal-ranked values may be stored in either
/// relative order.
pub trait Compare<T: ?Sized> {
    /// Compares two stored values.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders values by their [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Reverses the ordering of the wrapped comparator.
///
/// ```
/// use core::cmp::Ordering;
/// use nexus_ordered::{Compare, Natural, Reversed};
///
/// assert_eq!(Reversed(Natural).compare(&1, &2), Ordering::Greater);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}
