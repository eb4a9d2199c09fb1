//! Traversal callbacks.
//!
//! Containers walk their elements in ascending order and hand each one to a
//! callback. The four traversal modes differ only in the callback's shape,
//! so they are expressed as one tagged value, [`Apply`], driven by a single
//! traversal routine ([`OrderedContainer::traverse`]).
//!
//! | Mode | Callback | Stops early |
//! |------|----------|-------------|
//! | [`Apply::Each`] | `FnMut(&T)` | no |
//! | [`Apply::EachIf`] | `FnMut(&T) -> ControlFlow<B>` | on `Break` |
//! | [`Apply::EachWith`] | `FnMut(&T, &mut A)` | no |
//! | [`Apply::EachIfWith`] | `FnMut(&T, &mut A) -> ControlFlow<B>` | on `Break` |
//!
//! Most callers use the `apply*` convenience methods on
//! [`OrderedContainer`] rather than building an `Apply` by hand.
//!
//! [`OrderedContainer`]: crate::OrderedContainer
//! [`OrderedContainer::traverse`]: crate::OrderedContainer::traverse

use core::ops::ControlFlow;

/// A traversal callback in one of the four modes.
///
/// `A` is the context argument type and `B` the early-exit result type;
/// modes that do not use them leave them as `()`.
///
/// ```
/// use core::ops::ControlFlow;
/// use nexus_ordered::{Apply, OrderedContainer, SortedList};
///
/// let mut list: SortedList<u32> = SortedList::default();
/// for n in [4, 1, 3] {
///     list.insert(n);
/// }
///
/// let mut sum = 0;
/// let mut add = |n: &u32, total: &mut u32| *total += n;
/// list.traverse::<u32, ()>(Apply::EachWith(&mut add, &mut sum));
/// assert_eq!(sum, 8);
///
/// let mut first_odd = |n: &u32| {
///     if n % 2 == 1 { ControlFlow::Break(*n) } else { ControlFlow::Continue(()) }
/// };
/// assert_eq!(list.traverse::<(), u32>(Apply::EachIf(&mut first_odd)), Some(1));
/// ```
pub enum Apply<'f, T, A = (), B = ()> {
    /// Call on every element.
    Each(&'f mut dyn FnMut(&T)),
    /// Call on elements until the callback breaks.
    EachIf(&'f mut dyn FnMut(&T) -> ControlFlow<B>),
    /// Call on every element with a shared context argument.
    EachWith(&'f mut dyn FnMut(&T, &mut A), &'f mut A),
    /// Call with a context argument until the callback breaks.
    EachIfWith(&'f mut dyn FnMut(&T, &mut A) -> ControlFlow<B>, &'f mut A),
}

impl<T, A, B> Apply<'_, T, A, B> {
    /// Invokes the callback on one element.
    ///
    /// Non-breaking modes always continue.
    #[inline]
    pub fn call(&mut self, value: &T) -> ControlFlow<B> {
        match self {
            Apply::Each(f) => {
                (*f)(value);
                ControlFlow::Continue(())
            }
            Apply::EachIf(f) => (*f)(value),
            Apply::EachWith(f, arg) => {
                (*f)(value, &mut **arg);
                ControlFlow::Continue(())
            }
            Apply::EachIfWith(f, arg) => (*f)(value, &mut **arg),
        }
    }

    /// Returns `true` for the modes that can stop early.
    #[inline]
    pub fn can_break(&self) -> bool {
        matches!(self, Apply::EachIf(_) | Apply::EachIfWith(..))
    }
}

impl<T, A, B> core::fmt::Debug for Apply<'_, T, A, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mode = match self {
            Apply::Each(_) => "Each",
            Apply::EachIf(_) => "EachIf",
            Apply::EachWith(..) => "EachWith",
            Apply::EachIfWith(..) => "EachIfWith",
        };
        f.debug_tuple("Apply").field(&mode).finish()
    }
}
