//! Grover search circuit assembly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::f64::consts::PI;
use tracing::{debug, instrument};

use skoll_ir::{Circuit, QubitId, Unitary};

use crate::diffuser::diffuser;
use crate::error::{GroverError, GroverResult};
use crate::oracle::phase_oracle;

/// Number of amplification rounds to run.
///
/// `Fixed(0)` is a valid request: the circuit prepares the uniform
/// superposition and measures it without amplifying. `Auto` computes the
/// optimal count from the problem size, which can itself be 0 when every
/// state is marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rounds {
    /// Use the optimal round count for the problem size.
    #[default]
    Auto,
    /// Run exactly this many rounds.
    Fixed(usize),
}

/// The optimal number of amplification rounds, floor((π/4)·√(N/k)) for N
/// basis states of which k are marked.
///
/// The formula rounds down, never to nearest. With k = N it yields 0: every
/// state is marked, so the uniform superposition already measures to one.
///
/// # Errors
///
/// Returns [`GroverError::InvalidRegisterSize`] for a zero-width register,
/// [`GroverError::EmptyMarkedSet`] for k = 0, and
/// [`GroverError::MarkedSetTooLarge`] for k > N.
pub fn optimal_rounds(n_qubits: u32, n_marked: usize) -> GroverResult<usize> {
    if n_qubits == 0 || n_qubits >= usize::BITS {
        return Err(GroverError::InvalidRegisterSize(n_qubits));
    }
    if n_marked == 0 {
        return Err(GroverError::EmptyMarkedSet);
    }
    let dim = 1usize << n_qubits;
    if n_marked > dim {
        return Err(GroverError::MarkedSetTooLarge { n_marked, dim });
    }
    let ratio = dim as f64 / n_marked as f64;
    Ok(((PI / 4.0) * ratio.sqrt()).floor() as usize)
}

/// Builder for Grover search circuits.
///
/// Assembles prepare / amplify / measure: one Hadamard per qubit, then the
/// configured number of oracle-diffuser rounds over the whole register, then
/// a full measurement.
///
/// ```rust
/// use skoll_grover::{GroverSearch, Rounds};
///
/// let circuit = GroverSearch::new(3, [5]).build().unwrap();
/// assert_eq!(circuit.num_qubits(), 3);
///
/// // Explicit round counts override the optimum.
/// let flat = GroverSearch::new(3, [5]).with_rounds(Rounds::Fixed(0));
/// assert_eq!(flat.resolved_rounds().unwrap(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct GroverSearch {
    n_qubits: u32,
    marked: BTreeSet<usize>,
    rounds: Rounds,
}

impl GroverSearch {
    /// Create a search over `n_qubits` qubits for the `marked` basis
    /// indices. Duplicates collapse. Validation happens when the circuit
    /// (or round count) is requested.
    pub fn new(n_qubits: u32, marked: impl IntoIterator<Item = usize>) -> Self {
        Self {
            n_qubits,
            marked: marked.into_iter().collect(),
            rounds: Rounds::Auto,
        }
    }

    /// Override the round count.
    #[must_use]
    pub fn with_rounds(mut self, rounds: Rounds) -> Self {
        self.rounds = rounds;
        self
    }

    /// Number of qubits in the search register.
    pub fn n_qubits(&self) -> u32 {
        self.n_qubits
    }

    /// The marked indices, deduplicated and sorted.
    pub fn marked(&self) -> &BTreeSet<usize> {
        &self.marked
    }

    /// The configured round choice.
    pub fn rounds(&self) -> Rounds {
        self.rounds
    }

    /// The round count the assembled circuit will use.
    ///
    /// # Errors
    ///
    /// Same validation as [`GroverSearch::build`].
    pub fn resolved_rounds(&self) -> GroverResult<usize> {
        self.validate()?;
        match self.rounds {
            Rounds::Auto => optimal_rounds(self.n_qubits, self.marked.len()),
            Rounds::Fixed(rounds) => Ok(rounds),
        }
    }

    /// Assemble the search circuit.
    ///
    /// # Errors
    ///
    /// Returns [`GroverError::InvalidRegisterSize`] for a zero-width
    /// register, [`GroverError::EmptyMarkedSet`] if nothing is marked, and
    /// [`GroverError::MarkedIndexOutOfRange`] if an index does not fit the
    /// register.
    #[instrument(skip(self), fields(n_qubits = self.n_qubits, n_marked = self.marked.len()))]
    pub fn build(&self) -> GroverResult<Circuit> {
        let rounds = self.resolved_rounds()?;
        debug!(rounds, "assembling Grover search circuit");

        let mut circuit = Circuit::with_size("grover", self.n_qubits, self.n_qubits);
        let h = Unitary::hadamard(1);
        for q in 0..self.n_qubits {
            circuit.unitary(h.clone(), [QubitId(q)])?;
        }

        if rounds > 0 {
            let oracle = phase_oracle(self.n_qubits, self.marked.iter().copied())?;
            let diffusion = diffuser(self.n_qubits)?;
            let all: Vec<QubitId> = (0..self.n_qubits).map(QubitId).collect();
            for _ in 0..rounds {
                circuit.unitary(oracle.clone(), all.iter().copied())?;
                circuit.unitary(diffusion.clone(), all.iter().copied())?;
            }
        }

        circuit.measure_all()?;
        Ok(circuit)
    }

    fn validate(&self) -> GroverResult<()> {
        if self.n_qubits == 0 || self.n_qubits >= usize::BITS {
            return Err(GroverError::InvalidRegisterSize(self.n_qubits));
        }
        if self.marked.is_empty() {
            return Err(GroverError::EmptyMarkedSet);
        }
        let dim = 1usize << self.n_qubits;
        if let Some(&index) = self.marked.iter().next_back() {
            if index >= dim {
                return Err(GroverError::MarkedIndexOutOfRange { index, dim });
            }
        }
        Ok(())
    }
}
