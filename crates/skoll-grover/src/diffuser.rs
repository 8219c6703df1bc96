//! Diffuser (inversion about the mean) synthesis.
//!
//! The diffuser is the reflection H⊗n · O₀ · H⊗n, where O₀ is the phase
//! oracle marking only |0...0⟩. Expanded, its entries are δᵢⱼ − 2/N, and
//! that closed form is what gets built here; a test pins it against the
//! triple product. Acting on an amplitude vector it maps every aᵢ to
//! aᵢ − 2·mean, the inversion about the mean carrying a global −1 phase.

use ndarray::Array2;
use num_complex::Complex64;
use tracing::debug;

use skoll_ir::Unitary;

use crate::error::{GroverError, GroverResult};

/// Build the diffuser over an `n_qubits` register.
///
/// # Errors
///
/// Returns [`GroverError::InvalidRegisterSize`] for a zero-width register.
pub fn diffuser(n_qubits: u32) -> GroverResult<Unitary> {
    if n_qubits == 0 || n_qubits >= usize::BITS {
        return Err(GroverError::InvalidRegisterSize(n_qubits));
    }
    let dim = 1usize << n_qubits;

    debug!(n_qubits, "building diffuser");

    let off_diag = -2.0 / dim as f64;
    let mut matrix = Array2::from_elem((dim, dim), Complex64::new(off_diag, 0.0));
    for i in 0..dim {
        matrix[[i, i]] = Complex64::new(1.0 + off_diag, 0.0);
    }
    Ok(Unitary::new("diffuser", matrix)?)
}
