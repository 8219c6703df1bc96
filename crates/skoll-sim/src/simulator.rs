//! Execution backend over the statevector engine.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, instrument};

use skoll_ir::Circuit;

use crate::error::{SimError, SimResult};
use crate::result::{Counts, ExecutionResult};
use crate::statevector::Statevector;

/// Default qubit capacity, bounded by memory for the dense state.
const DEFAULT_MAX_QUBITS: u32 = 20;

/// Configuration for the local backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Maximum number of qubits accepted per circuit.
    #[serde(default = "default_max_qubits")]
    pub max_qubits: u32,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_qubits: DEFAULT_MAX_QUBITS,
        }
    }
}

fn default_max_qubits() -> u32 {
    DEFAULT_MAX_QUBITS
}

/// Local statevector backend.
///
/// Simulates circuits up to ~20 qubits (limited by memory). Measurement is
/// terminal in the IR, so the state is evolved once per run and sampled
/// `shots` times from the final distribution.
pub struct SimulatorBackend {
    /// Maximum number of qubits supported.
    max_qubits: u32,
}

impl SimulatorBackend {
    /// Create a backend with default settings.
    pub fn new() -> Self {
        Self {
            max_qubits: DEFAULT_MAX_QUBITS,
        }
    }

    /// Create a backend with a custom qubit capacity.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self { max_qubits }
    }

    /// Create a backend from a configuration.
    pub fn from_config(config: SimulatorConfig) -> Self {
        Self {
            max_qubits: config.max_qubits,
        }
    }

    /// The backend's qubit capacity.
    pub fn max_qubits(&self) -> u32 {
        self.max_qubits
    }

    /// Evolve the circuit and return the final state without sampling.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::CircuitTooLarge`] if the circuit exceeds the
    /// backend's capacity.
    #[instrument(skip(self, circuit))]
    pub fn statevector(&self, circuit: &Circuit) -> SimResult<Statevector> {
        self.check_capacity(circuit)?;
        Ok(evolve(circuit))
    }

    /// Run a circuit with the thread-local RNG.
    ///
    /// # Errors
    ///
    /// See [`SimulatorBackend::run_with_rng`].
    pub fn run(&self, circuit: &Circuit, shots: u32) -> SimResult<ExecutionResult> {
        self.run_with_rng(circuit, shots, &mut rand::thread_rng())
    }

    /// Run a circuit, sampling with a caller-supplied RNG.
    ///
    /// Passing a seeded RNG makes runs reproducible.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidShots`] for a shot count of zero,
    /// [`SimError::CircuitTooLarge`] if the circuit exceeds the backend's
    /// capacity, and [`SimError::NoMeasurements`] if nothing is measured.
    #[instrument(skip(self, circuit, rng))]
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        circuit: &Circuit,
        shots: u32,
        rng: &mut R,
    ) -> SimResult<ExecutionResult> {
        let start = Instant::now();

        if shots == 0 {
            return Err(SimError::InvalidShots(shots));
        }
        self.check_capacity(circuit)?;
        let readout = readout_map(circuit)?;

        debug!(
            "Starting simulation: {} qubits, {} shots",
            circuit.num_qubits(),
            shots
        );

        let sv = evolve(circuit);

        let width = circuit.num_clbits();
        let mut counts = Counts::new();
        for _ in 0..shots {
            let outcome = sv.sample(rng);
            // The classical register may be wider than a machine word.
            let mut key = vec!['0'; width];
            for &(qubit, clbit) in &readout {
                let bit = (outcome >> qubit) & 1;
                key[width - 1 - clbit] = if bit == 1 { '1' } else { '0' };
            }
            counts.insert(key.into_iter().collect::<String>(), 1);
        }

        let elapsed = start.elapsed();
        debug!("Simulation completed in {:?}", elapsed);

        Ok(ExecutionResult::new(counts, shots).with_execution_time(elapsed.as_millis() as u64))
    }

    fn check_capacity(&self, circuit: &Circuit) -> SimResult<()> {
        if circuit.num_qubits() > self.max_qubits as usize {
            return Err(SimError::CircuitTooLarge {
                num_qubits: circuit.num_qubits(),
                max_qubits: self.max_qubits,
            });
        }
        Ok(())
    }
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply every instruction to a fresh |0...0⟩ state.
fn evolve(circuit: &Circuit) -> Statevector {
    debug!("Circuit has {} instructions", circuit.num_instructions());
    let mut sv = Statevector::new(circuit.num_qubits());
    for instruction in circuit.instructions() {
        sv.apply(instruction);
    }
    sv
}

/// Measurement wiring as `(qubit, clbit)` pairs in instruction order.
/// A classical bit measured twice keeps the later value.
fn readout_map(circuit: &Circuit) -> SimResult<Vec<(usize, usize)>> {
    let mut map = Vec::new();
    for instruction in circuit.instructions() {
        if instruction.is_measure() {
            for (qubit, clbit) in instruction.qubits.iter().zip(&instruction.clbits) {
                map.push((qubit.0 as usize, clbit.0 as usize));
            }
        }
    }
    if map.is_empty() {
        return Err(SimError::NoMeasurements);
    }
    Ok(map)
}
