//! Random draws of state parameters from configured ranges.

use num_complex::Complex64;
use rand::Rng;
use std::f64::consts::PI;

use crate::config::DatasetSpec;
use crate::states::{StateClass, StateKind};

/// Smallest cat amplitude as a fraction of `alpha_max`.
///
/// Odd cats vanish as `alpha -> 0`, so amplitudes are kept away from zero.
const CAT_MIN_ALPHA_FRACTION: f64 = 0.25;

/// Complex amplitude with modulus uniform in `[min, max]` and uniform phase.
fn random_alpha<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> Complex64 {
    let r = min + (max - min) * rng.random::<f64>();
    let theta = 2.0 * PI * rng.random::<f64>();
    Complex64::from_polar(r, theta)
}

/// Draw parameters for one state of `class`.
pub fn sample_state<R: Rng + ?Sized>(
    class: StateClass,
    spec: &DatasetSpec,
    rng: &mut R,
) -> StateKind {
    let ranges = &spec.ranges;
    match class {
        StateClass::Fock => StateKind::Fock {
            n: rng.random_range(0..spec.hilbert_size),
        },
        StateClass::Thermal => StateKind::Thermal {
            nth: ranges.nth_max * rng.random::<f64>(),
        },
        StateClass::Coherent => StateKind::Coherent {
            alpha: random_alpha(rng, 0.0, ranges.alpha_max),
        },
        StateClass::Cat => StateKind::Cat {
            alpha: random_alpha(
                rng,
                CAT_MIN_ALPHA_FRACTION * ranges.alpha_max,
                ranges.alpha_max,
            ),
            s: rng.random_range(0..=ranges.cat_max_s),
            mu: rng.random_range(0..=1u8),
        },
        StateClass::Random => StateKind::Random {
            density: ranges.random_density,
        },
    }
}
