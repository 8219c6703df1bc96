//! Phase oracle synthesis.
//!
//! The oracle for a marked set M is the diagonal transform that negates the
//! amplitude of every basis state in M and leaves all others untouched. It
//! is its own inverse: applying it twice restores the state.

use ndarray::Array2;
use num_complex::Complex64;
use std::collections::BTreeSet;
use tracing::debug;

use skoll_ir::Unitary;

use crate::error::{GroverError, GroverResult};

/// Build the phase oracle for `marked` over an `n_qubits` register.
///
/// Indices use the basis convention of the IR: bit `q` of an index is the
/// state of qubit `q`. Duplicate indices collapse; the oracle is the same
/// transform either way.
///
/// # Errors
///
/// Returns [`GroverError::InvalidRegisterSize`] for a zero-width register,
/// [`GroverError::EmptyMarkedSet`] if `marked` is empty, and
/// [`GroverError::MarkedIndexOutOfRange`] if an index needs more than
/// `n_qubits` bits.
pub fn phase_oracle(
    n_qubits: u32,
    marked: impl IntoIterator<Item = usize>,
) -> GroverResult<Unitary> {
    if n_qubits == 0 || n_qubits >= usize::BITS {
        return Err(GroverError::InvalidRegisterSize(n_qubits));
    }
    let marked: BTreeSet<usize> = marked.into_iter().collect();
    if marked.is_empty() {
        return Err(GroverError::EmptyMarkedSet);
    }
    let dim = 1usize << n_qubits;
    if let Some(&index) = marked.iter().next_back() {
        if index >= dim {
            return Err(GroverError::MarkedIndexOutOfRange { index, dim });
        }
    }

    debug!(n_qubits, n_marked = marked.len(), "building phase oracle");

    let mut matrix = Array2::<Complex64>::eye(dim);
    for &index in &marked {
        matrix[[index, index]] = Complex64::new(-1.0, 0.0);
    }
    Ok(Unitary::new("oracle", matrix)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_marked_set_rejected() {
        assert!(matches!(
            phase_oracle(2, []).unwrap_err(),
            GroverError::EmptyMarkedSet
        ));
    }

    #[test]
    fn test_zero_qubits_rejected() {
        assert!(matches!(
            phase_oracle(0, [0]).unwrap_err(),
            GroverError::InvalidRegisterSize(0)
        ));
    }

    #[test]
    fn test_index_out_of_range_rejected() {
        let err = phase_oracle(2, [1, 4]).unwrap_err();
        assert!(matches!(
            err,
            GroverError::MarkedIndexOutOfRange { index: 4, dim: 4 }
        ));
    }

    #[test]
    fn test_duplicates_collapse() {
        let once = phase_oracle(2, [1]).unwrap();
        let twice = phase_oracle(2, [1, 1, 1]).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_diagonal_signs() {
        let oracle = phase_oracle(2, [1, 3]).unwrap();
        assert_eq!(oracle.dim(), 4);
        let m = oracle.matrix();
        assert_eq!(m[[0, 0]].re, 1.0);
        assert_eq!(m[[1, 1]].re, -1.0);
        assert_eq!(m[[2, 2]].re, 1.0);
        assert_eq!(m[[3, 3]].re, -1.0);
        assert_eq!(m[[1, 2]].re, 0.0);
    }
}
