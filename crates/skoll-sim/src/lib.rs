//! Skoll Local Statevector Backend
//!
//! Dense statevector execution for [`skoll_ir`] circuits. The engine applies
//! each unitary to the full 2^n-amplitude state, then samples the terminal
//! measurement to produce a histogram of classical outcomes.
//!
//! Because measurement is terminal in the IR, a run evolves the state once
//! and samples it `shots` times; shot count affects sampling noise, never
//! simulation cost.
//!
//! # Example
//!
//! ```rust
//! use skoll_ir::{Circuit, QubitId, Unitary};
//! use skoll_sim::SimulatorBackend;
//!
//! let mut circuit = Circuit::with_size("superpose", 2, 2);
//! let h = Unitary::hadamard(1);
//! circuit.unitary(h.clone(), [QubitId(0)]).unwrap();
//! circuit.unitary(h, [QubitId(1)]).unwrap();
//! circuit.measure_all().unwrap();
//!
//! let backend = SimulatorBackend::new();
//! let result = backend.run(&circuit, 100).unwrap();
//! assert_eq!(result.counts.total_shots(), 100);
//! ```

pub mod error;
pub mod result;
pub mod simulator;
pub mod statevector;

pub use error::{SimError, SimResult};
pub use result::{Counts, ExecutionResult};
pub use simulator::{SimulatorBackend, SimulatorConfig};
pub use statevector::Statevector;
