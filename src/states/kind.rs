//! Parameterized description of a state from one of the supported families.

use num_complex::Complex64;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::quantum::DensityMatrix;

/// State family, used to label tomography samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateClass {
    Fock,
    Thermal,
    Coherent,
    Cat,
    Random,
}

impl StateClass {
    /// All classes in label order.
    pub const ALL: [StateClass; 5] = [
        StateClass::Fock,
        StateClass::Thermal,
        StateClass::Coherent,
        StateClass::Cat,
        StateClass::Random,
    ];

    /// Integer label used as the class index in datasets.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            StateClass::Fock => 0,
            StateClass::Thermal => 1,
            StateClass::Coherent => 2,
            StateClass::Cat => 3,
            StateClass::Random => 4,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StateClass::Fock => "fock",
            StateClass::Thermal => "thermal",
            StateClass::Coherent => "coherent",
            StateClass::Cat => "cat",
            StateClass::Random => "random",
        }
    }
}

impl fmt::Display for StateClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StateClass {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fock" => Ok(StateClass::Fock),
            "thermal" => Ok(StateClass::Thermal),
            "coherent" => Ok(StateClass::Coherent),
            "cat" => Ok(StateClass::Cat),
            "random" => Ok(StateClass::Random),
            _ => Err(format!(
                "Unknown state class: {s}. Valid classes: fock, thermal, coherent, cat, random"
            )),
        }
    }
}

/// A concrete state: family plus parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StateKind {
    /// `|n><n|`
    Fock { n: usize },
    /// Thermal state with mean photon number `nth`
    Thermal { nth: f64 },
    /// Coherent state `|alpha>`
    Coherent { alpha: Complex64 },
    /// Cat state, see [`super::cat`]
    Cat { alpha: Complex64, s: u32, mu: u8 },
    /// Random mixed state with fill fraction `density`
    Random { density: f64 },
}

impl StateKind {
    /// Family of this state.
    #[must_use]
    pub fn class(&self) -> StateClass {
        match self {
            StateKind::Fock { .. } => StateClass::Fock,
            StateKind::Thermal { .. } => StateClass::Thermal,
            StateKind::Coherent { .. } => StateClass::Coherent,
            StateKind::Cat { .. } => StateClass::Cat,
            StateKind::Random { .. } => StateClass::Random,
        }
    }

    /// Build the density matrix in an `n`-level space.
    ///
    /// `rng` is only drawn from for [`StateKind::Random`].
    pub fn build<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<DensityMatrix> {
        match *self {
            StateKind::Fock { n: level } => super::fock(n, level),
            StateKind::Thermal { nth } => super::thermal(n, nth),
            StateKind::Coherent { alpha } => super::coherent_dm(n, alpha),
            StateKind::Cat { alpha, s, mu } => super::cat(n, alpha, s, mu),
            StateKind::Random { density } => super::random(n, density, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_class_parsing() {
        assert_eq!("cat".parse::<StateClass>().unwrap(), StateClass::Cat);
        assert_eq!("FOCK".parse::<StateClass>().unwrap(), StateClass::Fock);
        assert!("squeezed".parse::<StateClass>().is_err());
    }

    #[test]
    fn test_class_indices_are_distinct() {
        let mut indices: Vec<usize> = StateClass::ALL.iter().map(|c| c.index()).collect();
        indices.dedup();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_kind_reports_class() {
        let kind = StateKind::Cat {
            alpha: Complex64::new(1.0, 0.0),
            s: 0,
            mu: 0,
        };
        assert_eq!(kind.class(), StateClass::Cat);
        assert_eq!(kind.class().to_string(), "cat");
    }

    #[test]
    fn test_kind_build_dimensions() {
        let mut rng = StdRng::seed_from_u64(11);
        let kinds = [
            StateKind::Fock { n: 3 },
            StateKind::Thermal { nth: 0.5 },
            StateKind::Coherent {
                alpha: Complex64::new(0.5, 0.5),
            },
            StateKind::Cat {
                alpha: Complex64::new(1.0, 0.0),
                s: 1,
                mu: 1,
            },
            StateKind::Random { density: 0.2 },
        ];
        for kind in &kinds {
            let rho = kind.build(12, &mut rng).unwrap();
            assert_eq!(rho.dim(), 12);
            assert!((rho.trace().re - 1.0).abs() < 1e-9, "{kind:?}");
        }
    }

    #[test]
    fn test_kind_yaml_tagging() {
        let kind = StateKind::Thermal { nth: 2.0 };
        let yaml = serde_yaml::to_string(&kind).unwrap();
        assert!(yaml.contains("kind: thermal"));
        let back: StateKind = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, kind);
    }
}
