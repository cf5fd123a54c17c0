//! Noise and measurement operations on density matrices.
//!
//! The measurement model is photon counting after a displacement: a state
//! `rho` is displaced by `-alpha` and its photon-number distribution is
//! recorded. Sweeping `alpha` over a phase-space grid yields the
//! generalized Q function, the input a tomography model is conditioned on.

use ndarray::{Array1, Array3};
use num_complex::Complex64;
use rand::Rng;
use std::f64::consts::SQRT_2;

use crate::error::{Error, Result};
use crate::quantum::{displace, DensityMatrix};
use crate::states;

/// Default mixing weight of the random state in [`add_state_noise`].
pub const DEFAULT_NOISE_SIGMA: f64 = 0.01;

/// Default fill fraction of the random state in [`add_state_noise`].
pub const DEFAULT_NOISE_SPARSITY: f64 = 0.01;

/// Mix a random density matrix into `rho`.
///
/// Returns `(1 - sigma) rho + sigma rho_rand`, renormalized to unit trace,
/// where `rho_rand` is drawn with fill fraction `sparsity`.
pub fn add_state_noise<R: Rng + ?Sized>(
    rho: &DensityMatrix,
    sigma: f64,
    sparsity: f64,
    rng: &mut R,
) -> Result<DensityMatrix> {
    if !(0.0..=1.0).contains(&sigma) {
        return Err(Error::invalid(
            "sigma",
            format!("mixing parameter must be in [0, 1], got {sigma}"),
        ));
    }
    let noise = states::random(rho.dim(), sparsity, rng)?;
    rho.mix(&noise, sigma)?.unit()
}

/// Photon-number populations of `rho` displaced by `-alpha`.
pub fn measure(alpha: Complex64, rho: &DensityMatrix) -> Result<Array1<f64>> {
    let d = displace(rho.dim(), -alpha)?;
    Ok(rho.conjugate_by(&d)?.populations())
}

/// Generalized Q function on a phase-space grid.
///
/// The result has shape `(yvec.len(), xvec.len(), N)`; entry `[i, j, ..]` is
/// [`measure`] at `alpha = (x_j + i p_i) / sqrt(2)`. The `[.., .., 0]` slice
/// is `pi` times the Husimi Q function.
pub fn generalized_q(rho: &DensityMatrix, xvec: &[f64], yvec: &[f64]) -> Result<Array3<f64>> {
    let n = rho.dim();
    let mut q = Array3::zeros((yvec.len(), xvec.len(), n));
    for (i, &p) in yvec.iter().enumerate() {
        for (j, &x) in xvec.iter().enumerate() {
            let beta = Complex64::new(x, p) / SQRT_2;
            let populations = measure(beta, rho)?;
            q.slice_mut(ndarray::s![i, j, ..]).assign(&populations);
        }
    }
    Ok(q)
}
