//! Statevector simulation engine.

use num_complex::Complex64;
use rand::Rng;

use skoll_ir::{Instruction, InstructionKind, Unitary};

/// A statevector over `num_qubits` qubits.
///
/// Basis convention: qubit `q` is bit `q` of an amplitude index, so index 5
/// on three qubits is the state with qubits 0 and 2 set.
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// State-space dimension (2^n).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// The amplitudes in basis order.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Probability of observing basis state `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`Statevector::dim`].
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes[index].norm_sqr()
    }

    /// The full probability distribution over basis states.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Apply an instruction to the statevector.
    ///
    /// Measurements do not modify the state; sampling is a separate step.
    /// Qubit operands must be within the register (the circuit builder
    /// guarantees this for instructions taken from a [`skoll_ir::Circuit`]).
    pub fn apply(&mut self, instruction: &Instruction) {
        match &instruction.kind {
            InstructionKind::Unitary(unitary) => {
                let targets: Vec<usize> =
                    instruction.qubits.iter().map(|q| q.0 as usize).collect();
                self.apply_unitary(unitary, &targets);
            }
            InstructionKind::Measure => {}
        }
    }

    /// Apply a dense transform to the listed target qubits.
    ///
    /// Iterates over every basis group that differs only on the target bits,
    /// gathers the group's amplitudes, multiplies by the matrix, and
    /// scatters the products back.
    fn apply_unitary(&mut self, unitary: &Unitary, targets: &[usize]) {
        let sub_dim = unitary.dim();
        let matrix = unitary.matrix();
        let mut group_mask = 0usize;
        for &q in targets {
            group_mask |= 1 << q;
        }

        let mut scratch = vec![Complex64::new(0.0, 0.0); sub_dim];
        for base in 0..self.amplitudes.len() {
            if base & group_mask != 0 {
                continue;
            }
            for (sub, slot) in scratch.iter_mut().enumerate() {
                *slot = self.amplitudes[spread(base, targets, sub)];
            }
            for row in 0..sub_dim {
                let mut acc = Complex64::new(0.0, 0.0);
                for (col, &amp) in scratch.iter().enumerate() {
                    acc += matrix[[row, col]] * amp;
                }
                self.amplitudes[spread(base, targets, row)] = acc;
            }
        }
    }

    /// Sample a measurement outcome from the probability distribution.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let r: f64 = rng.r#gen();

        let mut cumulative = 0.0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if r < cumulative {
                return i;
            }
        }

        // Fallback (shouldn't happen with normalized states)
        self.amplitudes.len() - 1
    }
}

/// Expand a sub-space index onto its target qubit positions within `base`.
/// Bit `b` of `sub` lands on bit `targets[b]` of the result.
fn spread(base: usize, targets: &[usize], sub: usize) -> usize {
    let mut index = base;
    for (bit, &q) in targets.iter().enumerate() {
        if sub & (1 << bit) != 0 {
            index |= 1 << q;
        }
    }
    index
}
