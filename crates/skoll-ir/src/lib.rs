//! Skoll Circuit Intermediate Representation
//!
//! This crate provides the core data structures for representing unitary
//! circuits in Skoll. It is the foundation the simulator and the search
//! algorithms build on.
//!
//! # Overview
//!
//! A circuit is an ordered list of instructions over a register of qubits.
//! Every operation is either an opaque dense [`Unitary`] applied to an
//! explicit set of qubits, or a terminal measurement that reads qubits out
//! into classical bits. There is no gate set: algorithm crates hand the IR
//! whole matrices (an oracle, a diffuser, a Hadamard layer) and the executor
//! applies them without inspecting their structure.
//!
//! # Core Components
//!
//! - **Identifiers**: [`QubitId`], [`ClbitId`] for addressing the quantum
//!   and classical registers
//! - **Transforms**: [`Unitary`], a named square matrix over a power-of-two
//!   dimension
//! - **Instructions**: [`Instruction`] combining a transform or measurement
//!   with its operands
//! - **Circuit**: [`Circuit`], the builder and container
//!
//! # Example: Uniform Superposition
//!
//! ```rust
//! use skoll_ir::{Circuit, QubitId, Unitary};
//!
//! let mut circuit = Circuit::with_size("superpose", 2, 2);
//!
//! // One Hadamard per qubit takes |00⟩ to the uniform superposition.
//! let h = Unitary::hadamard(1);
//! circuit.unitary(h.clone(), [QubitId(0)]).unwrap();
//! circuit.unitary(h, [QubitId(1)]).unwrap();
//!
//! // Measurement ends the circuit.
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.num_instructions(), 3);
//! ```

pub mod circuit;
pub mod error;
pub mod instruction;
pub mod qubit;
pub mod unitary;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{ClbitId, QubitId};
pub use unitary::Unitary;
