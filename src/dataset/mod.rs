//! Labelled tomography datasets
//!
//! Each sample pairs a density matrix with the generalized Q function of
//! that state on a phase-space grid. A reconstruction model is trained to
//! map the measurements back to the density matrix.
//!
//! # Example
//!
//! ```no_run
//! use qst_cgan::config::load_spec;
//! use qst_cgan::dataset::generate;
//!
//! let spec = load_spec("dataset.yaml")?;
//! let dataset = generate(&spec)?;
//! dataset.save_json(&spec.output)?;
//! # Ok::<(), qst_cgan::Error>(())
//! ```

mod sampler;

pub use sampler::sample_state;

use ndarray::Array3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::config::DatasetSpec;
use crate::error::{Error, Result};
use crate::ops::{add_state_noise, generalized_q};
use crate::quantum::{ComplexMatrixRecord, DensityMatrix};
use crate::states::{StateClass, StateKind};

/// One labelled state with its measurement grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TomographySample {
    /// State family
    pub class: StateClass,
    /// Integer class label
    pub label: usize,
    /// Parameters the state was built from
    pub kind: StateKind,
    /// Density matrix (after noise, if any)
    pub density_matrix: ComplexMatrixRecord,
    /// Shape of `measurements`: `[ny, nx, N]`
    pub shape: [usize; 3],
    /// Generalized Q function, row-major
    pub measurements: Vec<f64>,
}

impl TomographySample {
    /// Measurements as a `(ny, nx, N)` array.
    pub fn measurements_array(&self) -> Result<Array3<f64>> {
        Array3::from_shape_vec(self.shape, self.measurements.clone())
            .map_err(|e| Error::Serialization(format!("measurement shape mismatch: {e}")))
    }

    /// Reconstruct the density matrix.
    pub fn density_matrix(&self) -> Result<DensityMatrix> {
        DensityMatrix::try_from(&self.density_matrix)
    }
}

/// A generated dataset together with its grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Fock space cutoff
    pub hilbert_size: usize,
    /// Position quadrature grid
    pub xvec: Vec<f64>,
    /// Momentum quadrature grid
    pub yvec: Vec<f64>,
    /// Samples in generation order
    pub samples: Vec<TomographySample>,
}

impl Dataset {
    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether there are no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample count per class.
    #[must_use]
    pub fn class_counts(&self) -> BTreeMap<StateClass, usize> {
        let mut counts = BTreeMap::new();
        for sample in &self.samples {
            *counts.entry(sample.class).or_insert(0) += 1;
        }
        counts
    }

    /// Write as pretty-printed JSON, creating parent directories.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(path, json).map_err(|e| Error::io(path, e))
    }

    /// Read a dataset written by [`Dataset::save_json`].
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_json::from_str(&json).map_err(|e| Error::Serialization(e.to_string()))
    }
}

/// Build one sample from already-drawn parameters.
pub fn build_sample(
    kind: StateKind,
    spec: &DatasetSpec,
    xvec: &[f64],
    yvec: &[f64],
    rng: &mut StdRng,
) -> Result<TomographySample> {
    let mut rho = kind.build(spec.hilbert_size, rng)?;
    if let Some(noise) = &spec.noise {
        rho = add_state_noise(&rho, noise.sigma, noise.sparsity, rng)?;
    }

    let q = generalized_q(&rho, xvec, yvec)?;
    let (ny, nx, n) = q.dim();
    let class = kind.class();
    Ok(TomographySample {
        class,
        label: class.index(),
        kind,
        density_matrix: ComplexMatrixRecord::from(&rho),
        shape: [ny, nx, n],
        measurements: q.iter().copied().collect(),
    })
}

/// Generate a dataset; the output depends only on `spec`.
///
/// Samples are laid out class by class in the order of `spec.classes`.
/// The spec is assumed valid (see [`crate::config::validate_spec`]).
pub fn generate(spec: &DatasetSpec) -> Result<Dataset> {
    generate_with(spec, |_, _| {})
}

/// Like [`generate`], calling `on_sample(index, sample)` after each sample.
pub fn generate_with<F>(spec: &DatasetSpec, mut on_sample: F) -> Result<Dataset>
where
    F: FnMut(usize, &TomographySample),
{
    let mut rng = StdRng::seed_from_u64(spec.seed);
    let xvec = spec.grid.xvec();
    let yvec = spec.grid.yvec();

    let total = spec.classes.len() * spec.samples_per_class;
    let mut samples = Vec::with_capacity(total);
    for &class in &spec.classes {
        for _ in 0..spec.samples_per_class {
            let kind = sample_state(class, spec, &mut rng);
            let sample = build_sample(kind, spec, &xvec, &yvec, &mut rng)?;
            on_sample(samples.len(), &sample);
            samples.push(sample);
        }
    }

    Ok(Dataset {
        hilbert_size: spec.hilbert_size,
        xvec,
        yvec,
        samples,
    })
}
