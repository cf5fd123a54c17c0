//! Dataset specification validation

use super::schema::DatasetSpec;
use crate::states::StateClass;

/// Validation error type
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid hilbert_size: {0} (must be >= 2)")]
    InvalidHilbertSize(usize),

    #[error("Invalid samples_per_class: {0} (must be > 0)")]
    InvalidSampleCount(usize),

    #[error("State class list cannot be empty")]
    EmptyClasses,

    #[error("Invalid grid points: {0} (must be >= 2)")]
    InvalidGridPoints(usize),

    #[error("Invalid grid range for {axis}: min {min} must be < max {max}")]
    InvalidGridRange { axis: &'static str, min: f64, max: f64 },

    #[error("Invalid noise sigma: {0} (must be in [0.0, 1.0])")]
    InvalidNoiseSigma(f64),

    #[error("Invalid noise sparsity: {0} (must be in (0.0, 1.0])")]
    InvalidNoiseSparsity(f64),

    #[error("Invalid {name}: {value} (must be > 0.0)")]
    NonPositiveRange { name: &'static str, value: f64 },

    #[error("Invalid {name}: {value} (must be finite)")]
    NonFinite { name: &'static str, value: f64 },

    #[error("Invalid random_density: {0} (must be in (0.0, 1.0])")]
    InvalidRandomDensity(f64),

    #[error(
        "hilbert_size {hilbert_size} too small for {name} = {value} (mean photon number must stay below the cutoff)"
    )]
    CutoffTooSmall {
        hilbert_size: usize,
        name: &'static str,
        value: f64,
    },

    #[error(
        "hilbert_size {hilbert_size} too small for cat_max_s = {cat_max_s} ({components} cat components)"
    )]
    CatTooLarge {
        hilbert_size: usize,
        cat_max_s: u32,
        components: u64,
    },
}

fn ensure_finite(name: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite { name, value })
    }
}

fn in_unit_interval(value: f64) -> bool {
    value > 0.0 && value <= 1.0
}

/// Validate a dataset specification, returning the first problem found
pub fn validate_spec(spec: &DatasetSpec) -> Result<(), ValidationError> {
    if spec.hilbert_size < 2 {
        return Err(ValidationError::InvalidHilbertSize(spec.hilbert_size));
    }
    if spec.samples_per_class == 0 {
        return Err(ValidationError::InvalidSampleCount(spec.samples_per_class));
    }
    if spec.classes.is_empty() {
        return Err(ValidationError::EmptyClasses);
    }

    let grid = &spec.grid;
    if grid.points < 2 {
        return Err(ValidationError::InvalidGridPoints(grid.points));
    }
    for (name, value) in [
        ("grid.x_min", grid.x_min),
        ("grid.x_max", grid.x_max),
        ("grid.y_min", grid.y_min),
        ("grid.y_max", grid.y_max),
    ] {
        ensure_finite(name, value)?;
    }
    for (axis, min, max) in [("x", grid.x_min, grid.x_max), ("y", grid.y_min, grid.y_max)] {
        if !(min < max) {
            return Err(ValidationError::InvalidGridRange { axis, min, max });
        }
    }

    if let Some(noise) = &spec.noise {
        if !(0.0..=1.0).contains(&noise.sigma) {
            return Err(ValidationError::InvalidNoiseSigma(noise.sigma));
        }
        if !in_unit_interval(noise.sparsity) {
            return Err(ValidationError::InvalidNoiseSparsity(noise.sparsity));
        }
    }

    let ranges = &spec.ranges;
    for (name, value) in [("alpha_max", ranges.alpha_max), ("nth_max", ranges.nth_max)] {
        if !(value > 0.0) {
            return Err(ValidationError::NonPositiveRange { name, value });
        }
        ensure_finite(name, value)?;
    }
    if !in_unit_interval(ranges.random_density) {
        return Err(ValidationError::InvalidRandomDensity(ranges.random_density));
    }

    // Largest grid displacement along an axis is |x| / sqrt(2).
    let extent = [grid.x_min, grid.x_max, grid.y_min, grid.y_max]
        .iter()
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));

    let cutoff = spec.hilbert_size as f64;
    for (name, value, mean_photons) in [
        ("alpha_max", ranges.alpha_max, ranges.alpha_max * ranges.alpha_max),
        ("nth_max", ranges.nth_max, ranges.nth_max),
        ("grid extent", extent, extent * extent / 2.0),
    ] {
        if mean_photons >= cutoff {
            return Err(ValidationError::CutoffTooSmall {
                hilbert_size: spec.hilbert_size,
                name,
                value,
            });
        }
    }

    if spec.classes.contains(&StateClass::Cat) {
        let components = 2 * (u64::from(ranges.cat_max_s) + 1);
        if components > spec.hilbert_size as u64 {
            return Err(ValidationError::CatTooLarge {
                hilbert_size: spec.hilbert_size,
                cat_max_s: ranges.cat_max_s,
                components,
            });
        }
    }

    Ok(())
}
