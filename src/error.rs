use super::{FormatError};

/// Errors returned by [`Array`] construction, the accessor and the slicing
/// engine.
///
/// [`Array`]: super::Array
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArrayError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("index {index} out of range for axis {axis} of length {len}")]
    OutOfRange { index: isize, axis: usize, len: usize },

    #[error("rank mismatch: array has rank {rank}, got {got}")]
    RankMismatch { rank: usize, got: usize },

    #[error("shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch { expected: Vec<usize>, got: Vec<usize> },

    #[error("shape requires {expected} items, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("shape {dims:?} has more than usize::MAX items")]
    TooLarge { dims: Vec<usize> },

    #[error("cannot stack an empty sequence of arrays")]
    EmptyStack,
}

/// Convenience alias used throughout this crate.
pub type Result<T, E = ArrayError> = std::result::Result<T, E>;
