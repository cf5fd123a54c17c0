//! Families of single-mode bosonic states.
//!
//! Every constructor returns a unit-trace [`DensityMatrix`] in an `n`-level
//! truncated Fock space.

mod kind;
mod random;

pub use kind::{StateClass, StateKind};
pub use random::random;

use num_complex::Complex64;
use std::f64::consts::PI;

use crate::error::{Error, Result};
use crate::quantum::{basis, displace, CMatrix, CVector, DensityMatrix, Ket};

/// Fock state `|k><k|`.
pub fn fock(n: usize, k: usize) -> Result<DensityMatrix> {
    Ok(Ket::new(basis(n, k)?).to_density_matrix())
}

/// Thermal state with mean occupation `nth`, renormalized in the truncated space.
pub fn thermal(n: usize, nth: f64) -> Result<DensityMatrix> {
    if !(nth >= 0.0) {
        return Err(Error::invalid(
            "nth",
            format!("mean thermal photon number must be >= 0, got {nth}"),
        ));
    }
    if nth == 0.0 {
        return fock(n, 0);
    }
    if n == 0 {
        return Err(Error::invalid("hilbert_size", "must be >= 1"));
    }

    let beta = (1.0 / nth + 1.0).ln();
    // Subnormal nth overflows 1/nth; the state is the vacuum to machine precision.
    if !beta.is_finite() {
        return fock(n, 0);
    }
    let mut m = CMatrix::zeros((n, n));
    for k in 0..n {
        m[[k, k]] = Complex64::new((-beta * k as f64).exp(), 0.0);
    }
    DensityMatrix::from_matrix(m)?.unit()
}

/// Coherent state ket `D(alpha)|0>`.
pub fn coherent(n: usize, alpha: Complex64) -> Result<Ket> {
    Ok(Ket::new(displace(n, alpha)?.dot(&basis(n, 0)?)))
}

/// Coherent state density matrix.
pub fn coherent_dm(n: usize, alpha: Complex64) -> Result<DensityMatrix> {
    Ok(coherent(n, alpha)?.to_density_matrix())
}

/// Cat state built from `2(s + 1)` coherent states.
///
/// The components sit at `±alpha e^{i pi k/(s+1)} phi` for `k = 0..=s`, where
/// `phi = -(i^mu)`. `mu` selects the logical 0 or 1 codeword: for `mu = 1` the
/// pair with `k = s` enters with a minus sign. With `s = 0` that pair is the
/// only one, so both codewords are even two-component cats and the `mu = 1`
/// one is the `mu = 0` cat at `-i alpha`.
///
/// The `2(s + 1)` components must fit in the `n`-level space.
pub fn cat(n: usize, alpha: Complex64, s: u32, mu: u8) -> Result<DensityMatrix> {
    if mu > 1 {
        return Err(Error::invalid("mu", format!("must be 0 or 1, got {mu}")));
    }
    let components = 2 * (u64::from(s) + 1);
    if components > n as u64 {
        return Err(Error::invalid(
            "s",
            format!("{components} cat components exceed Hilbert space of size {n}"),
        ));
    }

    let phase = -Complex64::i().powu(u32::from(mu));
    let mut amplitudes = CVector::zeros(n);
    for k in 0..=s {
        let sign = if k >= s && mu == 1 { -1.0 } else { 1.0 };
        let rotation = Complex64::from_polar(1.0, PI * f64::from(k) / (f64::from(s) + 1.0));
        let beta = rotation * alpha * phase;

        amplitudes = amplitudes + coherent(n, beta)?.amplitudes().mapv(|z| z * sign);
        amplitudes = amplitudes + coherent(n, -beta)?.amplitudes().mapv(|z| z * sign);
    }

    Ket::new(amplitudes).to_density_matrix().unit()
}
