//! Dense complex linear algebra on `ndarray` arrays.
//!
//! Only what the truncated Fock-space code needs: adjoints, traces,
//! Hermiticity checks, outer products and a matrix exponential.

use ndarray::{Array1, Array2};
use num_complex::Complex64;

use crate::error::{Error, Result};

/// Complex dense matrix.
pub type CMatrix = Array2<Complex64>;

/// Complex column vector.
pub type CVector = Array1<Complex64>;

/// Upper bound on Taylor terms in [`expm`] after scaling.
const TAYLOR_TERMS: usize = 30;

/// Target 1-norm of the scaled matrix in [`expm`].
const SCALED_NORM: f64 = 0.5;

/// Return the dimension of a square matrix or a `NotSquare` error.
pub fn ensure_square(m: &CMatrix) -> Result<usize> {
    let (rows, cols) = m.dim();
    if rows != cols {
        return Err(Error::NotSquare { rows, cols });
    }
    Ok(rows)
}

/// Conjugate transpose.
#[must_use]
pub fn dagger(m: &CMatrix) -> CMatrix {
    m.t().mapv(|z| z.conj())
}

/// Sum of the diagonal.
pub fn trace(m: &CMatrix) -> Result<Complex64> {
    ensure_square(m)?;
    Ok(m.diag().sum())
}

/// Whether `m` equals its own adjoint to within `tol` entrywise.
#[must_use]
pub fn is_hermitian(m: &CMatrix, tol: f64) -> bool {
    let (rows, cols) = m.dim();
    if rows != cols {
        return false;
    }
    m.indexed_iter()
        .all(|((i, j), z)| (z - m[[j, i]].conj()).norm() <= tol)
}

/// Outer product `|a><b|`.
#[must_use]
pub fn outer(a: &CVector, b: &CVector) -> CMatrix {
    Array2::from_shape_fn((a.len(), b.len()), |(i, j)| a[i] * b[j].conj())
}

/// `u m u^†`.
#[must_use]
pub fn conjugate_by(u: &CMatrix, m: &CMatrix) -> CMatrix {
    u.dot(m).dot(&dagger(u))
}

/// Maximum absolute column sum.
#[must_use]
pub fn one_norm(m: &CMatrix) -> f64 {
    m.columns()
        .into_iter()
        .map(|col| col.iter().map(|z| z.norm()).sum::<f64>())
        .fold(0.0, f64::max)
}

/// Matrix exponential by scaling and squaring.
///
/// The input is divided by `2^s` until its 1-norm is at most 0.5, the
/// exponential of the scaled matrix is summed as a Taylor series, and the
/// result is squared `s` times. Non-finite entries or a 1-norm that
/// overflows are rejected.
pub fn expm(m: &CMatrix) -> Result<CMatrix> {
    let n = ensure_square(m)?;
    if !m.iter().all(|z| z.is_finite()) {
        return Err(Error::invalid("matrix", "entries must be finite"));
    }
    let norm = one_norm(m);
    if !norm.is_finite() {
        return Err(Error::invalid("matrix", format!("1-norm {norm} is not finite")));
    }

    let squarings = if norm > SCALED_NORM {
        (norm / SCALED_NORM).log2().ceil() as i32
    } else {
        0
    };
    let scale = 2f64.powi(squarings);
    let scaled = m.mapv(|z| z / scale);

    let mut result = CMatrix::eye(n);
    let mut term = CMatrix::eye(n);
    for k in 1..=TAYLOR_TERMS {
        term = term.dot(&scaled).mapv(|z| z / k as f64);
        result += &term;
        if one_norm(&term) <= f64::EPSILON * one_norm(&result) {
            break;
        }
    }

    for _ in 0..squarings {
        result = result.dot(&result);
    }
    Ok(result)
}
