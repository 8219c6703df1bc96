//! Error types for the IR crate.

use crate::qubit::{ClbitId, QubitId};
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit outside the circuit's register.
    #[error("Qubit {qubit} is out of range for a circuit with {num_qubits} qubits")]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Number of qubits in the circuit.
        num_qubits: u32,
    },

    /// Classical bit outside the circuit's register.
    #[error("Classical bit {clbit} is out of range for a circuit with {num_clbits} classical bits")]
    ClbitOutOfRange {
        /// The offending classical bit.
        clbit: ClbitId,
        /// Number of classical bits in the circuit.
        num_clbits: u32,
    },

    /// The same qubit was listed twice in one operation.
    #[error("Duplicate qubit {qubit} in '{transform}'")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Name of the transform being appended.
        transform: String,
    },

    /// Transform applied to the wrong number of qubits.
    #[error("Transform '{transform}' acts on {expected} qubits, got {got}")]
    ArityMismatch {
        /// Name of the transform.
        transform: String,
        /// Number of qubits the transform acts on.
        expected: u32,
        /// Number of qubits provided.
        got: u32,
    },

    /// Matrix with unequal row and column counts.
    #[error("Matrix is not square: {rows}x{cols}")]
    NonSquareMatrix {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Matrix dimension that does not correspond to a whole number of qubits.
    #[error("Matrix dimension {dim} is not a power of two (at least 2)")]
    DimensionNotPowerOfTwo {
        /// The rejected dimension.
        dim: usize,
    },

    /// Composition of transforms over state spaces of different size.
    #[error("Cannot compose transforms of dimension {left} and {right}")]
    DimensionMismatch {
        /// Dimension of the first transform.
        left: usize,
        /// Dimension of the second transform.
        right: usize,
    },

    /// Unitary appended after a measurement.
    #[error("Cannot append '{transform}' after measurement: measurement ends the circuit")]
    UnitaryAfterMeasure {
        /// Name of the rejected transform.
        transform: String,
    },

    /// Measurement with mismatched qubit and classical bit lists.
    #[error("Measurement maps {qubits} qubits onto {clbits} classical bits")]
    MeasureLengthMismatch {
        /// Number of qubits being read out.
        qubits: usize,
        /// Number of destination classical bits.
        clbits: usize,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
