//! Dense unitary transforms.
//!
//! A [`Unitary`] is an opaque square matrix over a power-of-two dimension,
//! identified by name. Circuits are sequences of these transforms; nothing
//! downstream inspects how a matrix was produced.

use crate::error::{IrError, IrResult};
use ndarray::Array2;
use num_complex::Complex64;

/// A named dense transform on `num_qubits` qubits.
///
/// Matrix indices follow the basis convention of the crate: bit `b` of a
/// row or column index is the state of the `b`-th qubit the transform is
/// applied to. Construction only checks the shape; callers that need the
/// matrix to actually be unitary can verify with [`Unitary::is_unitary`].
#[derive(Debug, Clone, PartialEq)]
pub struct Unitary {
    name: String,
    matrix: Array2<Complex64>,
}

impl Unitary {
    /// Wrap a matrix as a named transform.
    ///
    /// # Errors
    ///
    /// Returns [`IrError::NonSquareMatrix`] if the matrix is not square, and
    /// [`IrError::DimensionNotPowerOfTwo`] if its dimension is not a power
    /// of two of at least 2.
    pub fn new(name: impl Into<String>, matrix: Array2<Complex64>) -> IrResult<Self> {
        let (rows, cols) = matrix.dim();
        if rows != cols {
            return Err(IrError::NonSquareMatrix { rows, cols });
        }
        if rows < 2 || !rows.is_power_of_two() {
            return Err(IrError::DimensionNotPowerOfTwo { dim: rows });
        }
        Ok(Self {
            name: name.into(),
            matrix,
        })
    }

    /// The identity on `num_qubits` qubits.
    ///
    /// # Panics
    ///
    /// Panics if `num_qubits` is 0.
    pub fn identity(num_qubits: u32) -> Self {
        assert!(num_qubits >= 1, "identity requires at least one qubit");
        let dim = 1usize << num_qubits;
        Self {
            name: "id".to_string(),
            matrix: Array2::eye(dim),
        }
    }

    /// The Hadamard transform on `num_qubits` qubits.
    ///
    /// Entry `(i, j)` is `(-1)^popcount(i & j) / sqrt(2^n)`. Applied to the
    /// all-zeros state it prepares the uniform superposition.
    ///
    /// # Panics
    ///
    /// Panics if `num_qubits` is 0.
    pub fn hadamard(num_qubits: u32) -> Self {
        assert!(num_qubits >= 1, "hadamard requires at least one qubit");
        let dim = 1usize << num_qubits;
        let norm = 1.0 / (dim as f64).sqrt();
        let mut matrix = Array2::zeros((dim, dim));
        for i in 0..dim {
            for j in 0..dim {
                let sign = if (i & j).count_ones() % 2 == 0 {
                    norm
                } else {
                    -norm
                };
                matrix[[i, j]] = Complex64::new(sign, 0.0);
            }
        }
        Self {
            name: "h".to_string(),
            matrix,
        }
    }

    /// The transform's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// State-space dimension (always a power of two).
    pub fn dim(&self) -> usize {
        self.matrix.nrows()
    }

    /// Number of qubits the transform acts on.
    pub fn num_qubits(&self) -> u32 {
        self.dim().trailing_zeros()
    }

    /// The underlying matrix.
    pub fn matrix(&self) -> &Array2<Complex64> {
        &self.matrix
    }

    /// Whether `U† U` is the identity to within `tol` per entry.
    pub fn is_unitary(&self, tol: f64) -> bool {
        let adjoint = self.matrix.t().mapv(|z| z.conj());
        let product = adjoint.dot(&self.matrix);
        let dim = self.dim();
        for i in 0..dim {
            for j in 0..dim {
                let expected = if i == j {
                    Complex64::new(1.0, 0.0)
                } else {
                    Complex64::new(0.0, 0.0)
                };
                if (product[[i, j]] - expected).norm() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Compose with `other` into a single transform that applies `self`
    /// first, then `other` (matrix product `other * self`).
    ///
    /// # Errors
    ///
    /// Returns [`IrError::DimensionMismatch`] if the dimensions differ.
    pub fn then(&self, other: &Unitary) -> IrResult<Unitary> {
        if self.dim() != other.dim() {
            return Err(IrError::DimensionMismatch {
                left: self.dim(),
                right: other.dim(),
            });
        }
        Ok(Unitary {
            name: format!("{}*{}", other.name, self.name),
            matrix: other.matrix.dot(&self.matrix),
        })
    }
}
