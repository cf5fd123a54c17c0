//! State vectors and density matrices.

use ndarray::Array1;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use super::matrix::{self, CMatrix, CVector};
use crate::error::{Error, Result};

/// Smallest trace or norm magnitude accepted when normalizing.
const DEGENERATE_EPS: f64 = 1e-12;

/// Pure state vector in the Fock basis.
#[derive(Debug, Clone, PartialEq)]
pub struct Ket {
    amplitudes: CVector,
}

impl Ket {
    /// Wrap a vector of amplitudes.
    #[must_use]
    pub fn new(amplitudes: CVector) -> Self {
        Self { amplitudes }
    }

    /// Hilbert space dimension.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Amplitudes in the Fock basis.
    #[must_use]
    pub fn amplitudes(&self) -> &CVector {
        &self.amplitudes
    }

    /// Euclidean norm.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(Complex64::norm_sqr)
            .sum::<f64>()
            .sqrt()
    }

    /// Unit-norm copy of this ket.
    pub fn normalized(&self) -> Result<Self> {
        let norm = self.norm();
        if norm < DEGENERATE_EPS {
            return Err(Error::DegenerateState(
                "cannot normalize a zero vector".to_string(),
            ));
        }
        Ok(Self::new(self.amplitudes.mapv(|z| z / norm)))
    }

    /// Projector `|psi><psi|` (not renormalized).
    #[must_use]
    pub fn to_density_matrix(&self) -> DensityMatrix {
        DensityMatrix {
            matrix: matrix::outer(&self.amplitudes, &self.amplitudes),
        }
    }
}

/// Density matrix of a state in an `N`-level truncated Fock space.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityMatrix {
    matrix: CMatrix,
}

impl DensityMatrix {
    /// Wrap a square, non-empty matrix. No positivity or trace check is made.
    pub fn from_matrix(matrix: CMatrix) -> Result<Self> {
        let n = matrix::ensure_square(&matrix)?;
        if n == 0 {
            return Err(Error::invalid("hilbert_size", "must be >= 1"));
        }
        Ok(Self { matrix })
    }

    /// Projector onto a ket.
    #[must_use]
    pub fn from_ket(ket: &Ket) -> Self {
        ket.to_density_matrix()
    }

    /// Hilbert space dimension.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.matrix.nrows()
    }

    /// Underlying matrix.
    #[must_use]
    pub fn matrix(&self) -> &CMatrix {
        &self.matrix
    }

    /// Consume and return the underlying matrix.
    #[must_use]
    pub fn into_matrix(self) -> CMatrix {
        self.matrix
    }

    /// `tr(rho)`.
    #[must_use]
    pub fn trace(&self) -> Complex64 {
        self.matrix.diag().sum()
    }

    /// Whether the matrix is Hermitian to within `tol`.
    #[must_use]
    pub fn is_hermitian(&self, tol: f64) -> bool {
        matrix::is_hermitian(&self.matrix, tol)
    }

    /// Copy normalized to unit trace.
    pub fn unit(&self) -> Result<Self> {
        let tr = self.trace();
        if !tr.is_finite() {
            return Err(Error::DegenerateState(format!("trace {tr} is not finite")));
        }
        if tr.norm() < DEGENERATE_EPS {
            return Err(Error::DegenerateState(format!(
                "trace {tr} too small to normalize"
            )));
        }
        Ok(Self {
            matrix: self.matrix.mapv(|z| z / tr),
        })
    }

    /// Real part of the diagonal: the photon-number distribution.
    #[must_use]
    pub fn populations(&self) -> Array1<f64> {
        self.matrix.diag().mapv(|z| z.re)
    }

    /// `Re tr(rho^2)`; 1 for pure states.
    #[must_use]
    pub fn purity(&self) -> f64 {
        self.matrix.dot(&self.matrix).diag().sum().re
    }

    /// Expectation value `tr(rho op)`.
    pub fn expect(&self, op: &CMatrix) -> Result<Complex64> {
        let n = matrix::ensure_square(op)?;
        self.check_dim(n)?;
        Ok(self.matrix.dot(op).diag().sum())
    }

    /// Convex combination `(1 - weight) self + weight other`.
    pub fn mix(&self, other: &Self, weight: f64) -> Result<Self> {
        self.check_dim(other.dim())?;
        let matrix = self.matrix.mapv(|z| z * (1.0 - weight)) + other.matrix.mapv(|z| z * weight);
        Ok(Self { matrix })
    }

    /// `u rho u^†`.
    pub fn conjugate_by(&self, u: &CMatrix) -> Result<Self> {
        let n = matrix::ensure_square(u)?;
        self.check_dim(n)?;
        Ok(Self {
            matrix: matrix::conjugate_by(u, &self.matrix),
        })
    }

    /// Hilbert-Schmidt distance `sqrt(tr((a - b)^† (a - b)))`.
    pub fn hilbert_schmidt_distance(&self, other: &Self) -> Result<f64> {
        self.check_dim(other.dim())?;
        Ok((&self.matrix - &other.matrix)
            .iter()
            .map(Complex64::norm_sqr)
            .sum::<f64>()
            .sqrt())
    }

    fn check_dim(&self, other: usize) -> Result<()> {
        if other != self.dim() {
            return Err(Error::DimensionMismatch {
                expected: self.dim(),
                actual: other,
            });
        }
        Ok(())
    }
}

/// Serializable split of a complex matrix into real and imaginary parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexMatrixRecord {
    /// Real parts, row-major
    pub re: Vec<Vec<f64>>,
    /// Imaginary parts, row-major
    pub im: Vec<Vec<f64>>,
}

impl From<&DensityMatrix> for ComplexMatrixRecord {
    fn from(rho: &DensityMatrix) -> Self {
        let rows = |f: fn(&Complex64) -> f64| -> Vec<Vec<f64>> {
            rho.matrix
                .rows()
                .into_iter()
                .map(|row| row.iter().map(f).collect())
                .collect()
        };
        Self {
            re: rows(|z| z.re),
            im: rows(|z| z.im),
        }
    }
}

impl TryFrom<&ComplexMatrixRecord> for DensityMatrix {
    type Error = Error;

    fn try_from(record: &ComplexMatrixRecord) -> Result<Self> {
        let n = record.re.len();
        if record.im.len() != n {
            return Err(Error::DimensionMismatch {
                expected: n,
                actual: record.im.len(),
            });
        }
        for row in record.re.iter().chain(&record.im) {
            if row.len() != n {
                return Err(Error::NotSquare {
                    rows: n,
                    cols: row.len(),
                });
            }
        }
        let matrix = CMatrix::from_shape_fn((n, n), |(i, j)| {
            Complex64::new(record.re[i][j], record.im[i][j])
        });
        Self::from_matrix(matrix)
    }
}
