//! YAML schema for tomography dataset generation

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ops::{DEFAULT_NOISE_SIGMA, DEFAULT_NOISE_SPARSITY};
use crate::states::StateClass;

/// Complete dataset generation specification
///
/// # Example
///
/// ```yaml
/// hilbert_size: 32
/// samples_per_class: 100
/// seed: 42
/// classes: [fock, coherent, cat]
/// grid:
///   x_min: -3.0
///   x_max: 3.0
///   y_min: -3.0
///   y_max: 3.0
///   points: 32
/// noise:
///   sigma: 0.01
///   sparsity: 0.01
/// output: data/train.json
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSpec {
    /// Fock space cutoff `N`
    pub hilbert_size: usize,

    /// Number of states drawn per class
    #[serde(default = "default_samples_per_class")]
    pub samples_per_class: usize,

    /// Seed for the random generator
    #[serde(default)]
    pub seed: u64,

    /// State families to draw from
    #[serde(default = "default_classes")]
    pub classes: Vec<StateClass>,

    /// Phase-space grid for the generalized Q function
    #[serde(default)]
    pub grid: PhaseGrid,

    /// Optional random-state admixture
    #[serde(default)]
    pub noise: Option<NoiseSpec>,

    /// Parameter ranges for each family
    #[serde(default)]
    pub ranges: ParamRanges,

    /// Output JSON path
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_samples_per_class() -> usize {
    100
}

fn default_classes() -> Vec<StateClass> {
    vec![
        StateClass::Fock,
        StateClass::Thermal,
        StateClass::Coherent,
        StateClass::Cat,
    ]
}

fn default_output() -> PathBuf {
    PathBuf::from("dataset.json")
}

impl Default for DatasetSpec {
    fn default() -> Self {
        Self {
            hilbert_size: 32,
            samples_per_class: default_samples_per_class(),
            seed: 0,
            classes: default_classes(),
            grid: PhaseGrid::default(),
            noise: None,
            ranges: ParamRanges::default(),
            output: default_output(),
        }
    }
}

/// Rectangular grid of displacements `(x + i p) / sqrt(2)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseGrid {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    /// Points along each axis, endpoints included
    pub points: usize,
}

impl Default for PhaseGrid {
    fn default() -> Self {
        Self {
            x_min: -3.0,
            x_max: 3.0,
            y_min: -3.0,
            y_max: 3.0,
            points: 32,
        }
    }
}

impl PhaseGrid {
    /// Position quadrature values.
    #[must_use]
    pub fn xvec(&self) -> Vec<f64> {
        linspace(self.x_min, self.x_max, self.points)
    }

    /// Momentum quadrature values.
    #[must_use]
    pub fn yvec(&self) -> Vec<f64> {
        linspace(self.y_min, self.y_max, self.points)
    }
}

fn linspace(min: f64, max: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (points - 1) as f64;
            (0..points).map(|k| min + step * k as f64).collect()
        }
    }
}

/// Random-state admixture applied to every generated state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseSpec {
    /// Weight of the random state
    #[serde(default = "default_sigma")]
    pub sigma: f64,
    /// Fill fraction of the random state
    #[serde(default = "default_sparsity")]
    pub sparsity: f64,
}

fn default_sigma() -> f64 {
    DEFAULT_NOISE_SIGMA
}

fn default_sparsity() -> f64 {
    DEFAULT_NOISE_SPARSITY
}

impl Default for NoiseSpec {
    fn default() -> Self {
        Self {
            sigma: DEFAULT_NOISE_SIGMA,
            sparsity: DEFAULT_NOISE_SPARSITY,
        }
    }
}

/// Ranges the sampler draws state parameters from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamRanges {
    /// Largest coherent / cat amplitude `|alpha|`
    pub alpha_max: f64,
    /// Largest thermal mean photon number
    pub nth_max: f64,
    /// Largest cat order `s` (`2(s+1)` components)
    pub cat_max_s: u32,
    /// Fill fraction for the `random` class
    pub random_density: f64,
}

impl Default for ParamRanges {
    fn default() -> Self {
        Self {
            alpha_max: 3.0,
            nth_max: 3.0,
            cat_max_s: 1,
            random_density: 0.2,
        }
    }
}
