//! Growth configuration for the array backing.
//!
//! The array backing keeps its own logical allocation and enlarges it only
//! when an insert finds every slot in use. Each growth step computes
//!
//! ```text
//! next = (allocation + increment) * factor
//! ```
//!
//! The default policy starts at 3 slots and grows 3 -> 8 -> 18 -> 38 -> ...
//!
//! ```
//! use nexus_ordered::GrowthPolicy;
//!
//! let policy = GrowthPolicy::default();
//! assert_eq!(policy.initial_allocation(), 3);
//! assert_eq!(policy.next_allocation(3), 8);
//!
//! let eager = GrowthPolicy::new(64, 2, 0).unwrap();
//! assert_eq!(eager.next_allocation(64), 128);
//!
//! assert!(GrowthPolicy::new(0, 2, 1).is_err());
//! ```

use crate::Error;

const DEFAULT_INITIAL_ALLOCATION: usize = 3;
const DEFAULT_FACTOR: usize = 2;
const DEFAULT_INCREMENT: usize = 1;

/// Validated growth parameters for [`SortedArray`](crate::SortedArray).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GrowthPolicy {
    initial_allocation: usize,
    factor: usize,
    increment: usize,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            initial_allocation: DEFAULT_INITIAL_ALLOCATION,
            factor: DEFAULT_FACTOR,
            increment: DEFAULT_INCREMENT,
        }
    }
}

impl GrowthPolicy {
    /// Creates a policy, checking that it starts non-empty and always grows.
    ///
    /// # Errors
    ///
    /// - [`Error::ZeroInitialAllocation`] if `initial_allocation` is 0.
    /// - [`Error::NonGrowingPolicy`] if a growth step could leave the
    ///   allocation unchanged (`factor == 0`, or `factor == 1` with no
    ///   increment).
    pub fn new(initial_allocation: usize, factor: usize, increment: usize) -> Result<Self, Error> {
        if initial_allocation == 0 {
            return Err(Error::ZeroInitialAllocation);
        }
        if factor == 0 || (factor == 1 && increment == 0) {
            return Err(Error::NonGrowingPolicy { factor, increment });
        }
        Ok(Self {
            initial_allocation,
            factor,
            increment,
        })
    }

    /// Returns a copy with a different initial allocation.
    ///
    /// # Errors
    ///
    /// Fails under the same rules as [`GrowthPolicy::new`].
    pub fn with_initial_allocation(self, initial_allocation: usize) -> Result<Self, Error> {
        Self::new(initial_allocation, self.factor, self.increment)
    }

    /// Returns a copy with a different growth factor.
    ///
    /// # Errors
    ///
    /// Fails under the same rules as [`GrowthPolicy::new`].
    pub fn with_factor(self, factor: usize) -> Result<Self, Error> {
        Self::new(self.initial_allocation, factor, self.increment)
    }

    /// Returns a copy with a different growth increment.
    ///
    /// # Errors
    ///
    /// Fails under the same rules as [`GrowthPolicy::new`].
    pub fn with_increment(self, increment: usize) -> Result<Self, Error> {
        Self::new(self.initial_allocation, self.factor, increment)
    }

    /// Slots allocated by a new or cleared container.
    #[inline]
    pub const fn initial_allocation(&self) -> usize {
        self.initial_allocation
    }

    /// Multiplier applied on growth.
    #[inline]
    pub const fn factor(&self) -> usize {
        self.factor
    }

    /// Slots added before multiplying.
    #[inline]
    pub const fn increment(&self) -> usize {
        self.increment
    }

    /// Returns the allocation that follows `current`.
    ///
    /// Always strictly larger than `current` for a non-zero `current`.
    #[inline]
    pub const fn next_allocation(&self, current: usize) -> usize {
        current
            .saturating_add(self.increment)
            .saturating_mul(self.factor)
    }
}
