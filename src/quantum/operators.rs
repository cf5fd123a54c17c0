//! Ladder, number and displacement operators in a truncated Fock space.

use num_complex::Complex64;

use super::matrix::{dagger, expm, CMatrix, CVector};
use crate::error::{Error, Result};

fn ensure_dim(n: usize) -> Result<()> {
    if n == 0 {
        return Err(Error::invalid("hilbert_size", "must be >= 1"));
    }
    Ok(())
}

/// Annihilation operator `a` on an `n`-level space.
pub fn destroy(n: usize) -> Result<CMatrix> {
    ensure_dim(n)?;
    let mut a = CMatrix::zeros((n, n));
    for k in 1..n {
        a[[k - 1, k]] = Complex64::new((k as f64).sqrt(), 0.0);
    }
    Ok(a)
}

/// Creation operator `a^†`.
pub fn create(n: usize) -> Result<CMatrix> {
    Ok(dagger(&destroy(n)?))
}

/// Number operator `a^† a`.
pub fn num(n: usize) -> Result<CMatrix> {
    ensure_dim(n)?;
    let mut m = CMatrix::zeros((n, n));
    for k in 0..n {
        m[[k, k]] = Complex64::new(k as f64, 0.0);
    }
    Ok(m)
}

/// Displacement operator `D(alpha) = exp(alpha a^† - alpha* a)`.
///
/// The exponential is taken of the truncated generator, so `D` is exactly
/// unitary on the `n`-level space but only approximates the infinite-space
/// operator for `|alpha|^2` well below `n`.
pub fn displace(n: usize, alpha: Complex64) -> Result<CMatrix> {
    let a = destroy(n)?;
    let generator = dagger(&a).mapv(|z| z * alpha) - a.mapv(|z| z * alpha.conj());
    expm(&generator)
}

/// Fock basis ket `|k>`.
pub fn basis(n: usize, k: usize) -> Result<CVector> {
    ensure_dim(n)?;
    if k >= n {
        return Err(Error::invalid(
            "n",
            format!("Fock level {k} outside Hilbert space of size {n}"),
        ));
    }
    let mut v = CVector::zeros(n);
    v[k] = Complex64::new(1.0, 0.0);
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantum::matrix::is_hermitian;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_destroy_entries() {
        let a = destroy(4).unwrap();
        assert_abs_diff_eq!(a[[0, 1]].re, 1.0);
        assert_abs_diff_eq!(a[[1, 2]].re, 2f64.sqrt());
        assert_abs_diff_eq!(a[[2, 3]].re, 3f64.sqrt());
        assert_abs_diff_eq!(a[[1, 0]].norm(), 0.0);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(destroy(0).is_err());
        assert!(num(0).is_err());
        assert!(basis(0, 0).is_err());
    }

    #[test]
    fn test_number_operator_matches_ladder_product() {
        let n = 6;
        let a = destroy(n).unwrap();
        let product = create(n).unwrap().dot(&a);
        let number = num(n).unwrap();
        for (x, y) in product.iter().zip(number.iter()) {
            assert_abs_diff_eq!((x - y).norm(), 0.0, epsilon = 1e-12);
        }
        assert!(is_hermitian(&number, 0.0));
    }

    #[test]
    fn test_basis_out_of_range() {
        assert!(basis(3, 3).is_err());
        let v = basis(3, 2).unwrap();
        assert_eq!(v[2], Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_displace_zero_is_identity() {
        let d = displace(5, Complex64::new(0.0, 0.0)).unwrap();
        for ((i, j), z) in d.indexed_iter() {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_abs_diff_eq!(z.re, expected, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_displace_is_unitary() {
        let d = displace(12, Complex64::new(1.2, -0.7)).unwrap();
        let product = d.dot(&dagger(&d));
        for ((i, j), z) in product.indexed_iter() {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_abs_diff_eq!(z.re, expected, epsilon = 1e-10);
            assert_abs_diff_eq!(z.im, 0.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_displace_rejects_huge_amplitude() {
        // Generator norm overflows; must error instead of squaring forever.
        assert!(displace(3, Complex64::new(1e308, 0.0)).is_err());
        assert!(displace(3, Complex64::new(f64::INFINITY, 0.0)).is_err());
        assert!(displace(3, Complex64::new(0.0, f64::NAN)).is_err());
    }

    #[test]
    fn test_displace_inverse() {
        let alpha = Complex64::new(0.4, 0.9);
        let d = displace(10, alpha).unwrap();
        let d_inv = displace(10, -alpha).unwrap();
        let product = d.dot(&d_inv);
        for ((i, j), z) in product.indexed_iter() {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_abs_diff_eq!(z.re, expected, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_coherent_amplitude_matches_poisson() {
        // <n|D(alpha)|0> = exp(-|alpha|^2/2) alpha^n / sqrt(n!) away from the cutoff.
        let alpha = Complex64::new(0.5, 0.0);
        let d = displace(30, alpha).unwrap();
        let prefactor = (-alpha.norm_sqr() / 2.0).exp();
        assert_abs_diff_eq!(d[[0, 0]].re, prefactor, epsilon = 1e-10);
        assert_abs_diff_eq!(d[[1, 0]].re, prefactor * 0.5, epsilon = 1e-10);
        assert_abs_diff_eq!(
            d[[2, 0]].re,
            prefactor * 0.25 / 2f64.sqrt(),
            epsilon = 1e-10
        );
    }
}
