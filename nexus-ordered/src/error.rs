//! Error types.

/// Errors raised while configuring a container.
///
/// Container operations themselves never fail: lookups answer `None`, and
/// allocation failure aborts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The array backing must start with at least one slot.
    #[error("initial allocation must be at least one slot")]
    ZeroInitialAllocation,

    /// The growth step would not enlarge the allocation.
    #[error("growth policy (allocation + {increment}) * {factor} never grows")]
    NonGrowingPolicy {
        /// Multiplier applied on growth.
        factor: usize,
        /// Slots added before multiplying.
        increment: usize,
    },
}
