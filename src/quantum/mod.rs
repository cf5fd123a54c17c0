//! Truncated Fock-space quantum mechanics.
//!
//! States of a single bosonic mode are represented in the number basis
//! `|0>, |1>, ..., |N-1>`. Everything here is dense and exact within the
//! truncation; the cutoff `N` must be large compared to the mean photon
//! number of the states involved.

pub mod density;
pub mod matrix;
pub mod operators;

pub use density::{ComplexMatrixRecord, DensityMatrix, Ket};
pub use matrix::{CMatrix, CVector};
pub use operators::{basis, create, destroy, displace, num};
