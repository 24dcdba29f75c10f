use thiserror::Error;

/// Errors raised when a coaxial append cannot be honored.
///
/// A failed append is recoverable and leaves the train exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CapacityError {
    /// The last placement already holds a coaxial pair; a placement holds at
    /// most two gears.
    #[error("placement {index} already holds a coaxial pair")]
    PairFull {
        /// Index of the full placement.
        index: usize,
    },

    /// The input placement must hold exactly one gear, so a train that has
    /// not yet been extended with a meshed gear cannot take a coaxial one.
    #[error("the input placement must hold exactly one gear")]
    InputPlacement,
}

/// An error returned when a ratio is requested from a train that has no mesh
/// in it yet.
///
/// A lone input gear transmits nothing, so reporting a ratio of one would be
/// misleading; the condition is surfaced instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("gear train needs at least two placements before its ratio is meaningful ({placements} present)")]
pub struct DegenerateTrainError {
    /// Number of placements currently in the train.
    pub placements: usize,
}
