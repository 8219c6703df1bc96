//! Skoll Grover Search Synthesis
//!
//! Builds the pieces of Grover's search over a simulated register as opaque
//! dense transforms for the Skoll IR:
//!
//! - **Phase oracle** ([`phase_oracle`]): negates the amplitudes of marked
//!   basis states
//! - **Diffuser** ([`diffuser`]): reflection about the uniform superposition
//! - **Search builder** ([`GroverSearch`]): assembles the full
//!   prepare / amplify / measure circuit
//!
//! The circuits are plain [`skoll_ir::Circuit`] values and run on any
//! backend; `skoll-sim` provides the local statevector engine.
//!
//! # Quick start
//!
//! ```rust
//! use skoll_grover::GroverSearch;
//!
//! // Search 8 database slots for index 5.
//! let search = GroverSearch::new(3, [5]);
//! assert_eq!(search.resolved_rounds().unwrap(), 2);
//!
//! let circuit = search.build().unwrap();
//! assert_eq!(circuit.num_qubits(), 3);
//! // 3 Hadamards + 2 rounds of (oracle, diffuser) + measurement
//! assert_eq!(circuit.num_instructions(), 8);
//! ```

pub mod diffuser;
pub mod error;
pub mod oracle;
pub mod search;

pub use diffuser::diffuser;
pub use error::{GroverError, GroverResult};
pub use oracle::phase_oracle;
pub use search::{GroverSearch, Rounds, optimal_rounds};
