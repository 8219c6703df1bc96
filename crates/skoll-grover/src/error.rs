//! Error types for the search crate.

use thiserror::Error;

/// Errors produced by Grover circuit synthesis.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GroverError {
    /// Register size the synthesis cannot represent.
    #[error("Register size {0} is not supported (must be between 1 and {max})", max = usize::BITS - 1)]
    InvalidRegisterSize(u32),

    /// Marked set with no indices.
    #[error("Marked set is empty: nothing to amplify")]
    EmptyMarkedSet,

    /// A marked index the register cannot represent.
    #[error("Marked index {index} is outside the state space of dimension {dim}")]
    MarkedIndexOutOfRange {
        /// The offending index.
        index: usize,
        /// State-space dimension (2^n).
        dim: usize,
    },

    /// More marked indices than basis states.
    #[error("Marked set has {n_marked} indices but the state space has only {dim}")]
    MarkedSetTooLarge {
        /// Number of marked indices requested.
        n_marked: usize,
        /// State-space dimension (2^n).
        dim: usize,
    },

    /// Circuit builder returned an error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] skoll_ir::IrError),
}

/// Result type for Grover synthesis operations.
pub type GroverResult<T> = Result<T, GroverError>;
