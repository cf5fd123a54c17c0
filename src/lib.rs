//! # qst-cgan
//!
//! Data-side tooling for quantum state tomography with conditional
//! generative adversarial networks.
//!
//! A single bosonic mode is described in a truncated Fock space. This crate
//! builds density matrices for common state families, applies
//! random-state noise, and computes the displaced photon-counting
//! statistics (generalized Q function) that a reconstruction network is
//! conditioned on.
//!
//! - [`quantum`]: complex matrices, ladder and displacement operators, density matrices
//! - [`states`]: Fock, thermal, coherent, cat and random states
//! - [`ops`]: noise, single-point measurement and the generalized Q grid
//! - [`dataset`]: seeded generation of labelled tomography datasets
//! - [`config`]: YAML dataset specs and CLI arguments
//!
//! # Example
//!
//! ```
//! use num_complex::Complex64;
//! use qst_cgan::ops::generalized_q;
//! use qst_cgan::states::cat;
//!
//! let rho = cat(16, Complex64::new(2.0, 0.0), 0, 0)?;
//! let xvec = [-1.0, 0.0, 1.0];
//! let q = generalized_q(&rho, &xvec, &xvec)?;
//! assert_eq!(q.shape(), &[3, 3, 16]);
//! # Ok::<(), qst_cgan::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod ops;
pub mod quantum;
pub mod states;

pub use error::{Error, Result};
pub use quantum::{DensityMatrix, Ket};
