//! Error types for the execution backend.

use thiserror::Error;

/// Errors that can occur when executing a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Circuit exceeds the backend's qubit capacity.
    #[error("Circuit has {num_qubits} qubits but the simulator supports at most {max_qubits}")]
    CircuitTooLarge {
        /// Qubits in the rejected circuit.
        num_qubits: usize,
        /// The backend's capacity.
        max_qubits: u32,
    },

    /// Shot count of zero.
    #[error("Shot count must be at least 1, got {0}")]
    InvalidShots(u32),

    /// Circuit without any measurement to sample.
    #[error("Circuit has no measurements to sample")]
    NoMeasurements,
}

/// Result type for execution operations.
pub type SimResult<T> = Result<T, SimError>;
