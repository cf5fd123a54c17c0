//! Random density matrices.

use num_complex::Complex64;
use rand::Rng;

use crate::error::{Error, Result};
use crate::quantum::matrix::dagger;
use crate::quantum::{CMatrix, DensityMatrix};

/// Random mixed state with approximate fill fraction `density`.
///
/// A sparse complex matrix `X` with entries uniform in the unit square is
/// drawn (each row keeps at least one entry), Hermitized as `H = X + X^†`,
/// and `H^† H` is normalized to unit trace.
pub fn random<R: Rng + ?Sized>(n: usize, density: f64, rng: &mut R) -> Result<DensityMatrix> {
    if n == 0 {
        return Err(Error::invalid("hilbert_size", "must be >= 1"));
    }
    if !(density > 0.0 && density <= 1.0) {
        return Err(Error::invalid(
            "density",
            format!("must be in (0, 1], got {density}"),
        ));
    }

    let mut x = CMatrix::zeros((n, n));
    for i in 0..n {
        let forced = rng.random_range(0..n);
        for j in 0..n {
            if j == forced || rng.random::<f64>() < density {
                x[[i, j]] = Complex64::new(
                    rng.random::<f64>() * 2.0 - 1.0,
                    rng.random::<f64>() * 2.0 - 1.0,
                );
            }
        }
    }

    let h = &x + &dagger(&x);
    DensityMatrix::from_matrix(dagger(&h).dot(&h))?.unit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_state_is_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        let rho = random(10, 0.3, &mut rng).unwrap();
        assert_eq!(rho.dim(), 10);
        assert!((rho.trace().re - 1.0).abs() < 1e-12);
        assert!(rho.trace().im.abs() < 1e-12);
        assert!(rho.is_hermitian(1e-12));
        assert!(rho.populations().iter().all(|&p| p >= 0.0));
        assert!(rho.purity() <= 1.0 + 1e-12);
    }

    #[test]
    fn test_random_state_with_tiny_density() {
        let mut rng = StdRng::seed_from_u64(1);
        let rho = random(4, 0.01, &mut rng).unwrap();
        assert!((rho.trace().re - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_random_is_deterministic_for_seed() {
        let a = random(6, 0.5, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = random(6, 0.5, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_rejects_bad_density() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(random(4, 0.0, &mut rng).is_err());
        assert!(random(4, 1.5, &mut rng).is_err());
        assert!(random(0, 0.5, &mut rng).is_err());
    }
}
