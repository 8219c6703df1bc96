//! Tests for diffuser synthesis.

use num_complex::Complex64;
use skoll_grover::{GroverError, diffuser, phase_oracle};
use skoll_ir::Unitary;

fn approx_eq(a: Complex64, b: Complex64) -> bool {
    (a - b).norm() < 1e-10
}

// ---------------------------------------------------------------------------
// Closed form vs. definition
// ---------------------------------------------------------------------------

#[test]
fn diffuser_matches_hadamard_conjugated_zero_reflection() {
    // The closed form must equal H⊗n · O₀ · H⊗n entry for entry, where O₀
    // is the phase oracle marking only |0...0⟩.
    for n in 1..=4 {
        let h = Unitary::hadamard(n);
        let zero_oracle = phase_oracle(n, [0]).unwrap();
        let triple = h.then(&zero_oracle).unwrap().then(&h).unwrap();

        let d = diffuser(n).unwrap();
        let dim = d.dim();
        for i in 0..dim {
            for j in 0..dim {
                assert!(
                    approx_eq(d.matrix()[[i, j]], triple.matrix()[[i, j]]),
                    "entry ({i}, {j}) mismatch for n = {n}"
                );
            }
        }
    }
}

#[test]
fn diffuser_entries_are_delta_minus_two_over_n() {
    let d = diffuser(3).unwrap();
    let m = d.matrix();
    for i in 0..8 {
        for j in 0..8 {
            let expected = if i == j { 1.0 - 0.25 } else { -0.25 };
            assert!(approx_eq(m[[i, j]], Complex64::new(expected, 0.0)));
        }
    }
}

// ---------------------------------------------------------------------------
// Algebraic properties
// ---------------------------------------------------------------------------

#[test]
fn diffuser_is_unitary_involution() {
    for n in 1..=4 {
        let d = diffuser(n).unwrap();
        assert!(d.is_unitary(1e-10));

        let squared = d.then(&d).unwrap();
        let id = Unitary::identity(n);
        let dim = d.dim();
        for i in 0..dim {
            for j in 0..dim {
                assert!(approx_eq(squared.matrix()[[i, j]], id.matrix()[[i, j]]));
            }
        }
    }
}

#[test]
fn single_qubit_diffuser_is_traceless() {
    // For N = 2 the diagonal entries are exactly 0: the matrix is -X.
    let d = diffuser(1).unwrap();
    assert!(approx_eq(d.matrix()[[0, 0]], Complex64::new(0.0, 0.0)));
    assert!(approx_eq(d.matrix()[[1, 1]], Complex64::new(0.0, 0.0)));
    assert!(approx_eq(d.matrix()[[0, 1]], Complex64::new(-1.0, 0.0)));
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn zero_width_register_returns_error() {
    assert!(matches!(
        diffuser(0),
        Err(GroverError::InvalidRegisterSize(0))
    ));
}
