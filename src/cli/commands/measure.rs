//! Measure command implementation

use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{MeasureArgs, OutputFormat};
use crate::ops::{add_state_noise, measure, DEFAULT_NOISE_SPARSITY};
use crate::states::{StateClass, StateKind};

/// Result of a single displaced photon-counting measurement
#[derive(Debug, Clone, Serialize)]
pub struct MeasureReport {
    pub state: StateKind,
    pub hilbert_size: usize,
    pub beta: Complex64,
    pub purity: f64,
    pub populations: Vec<f64>,
}

/// Translate CLI arguments into a state description
pub fn state_from_args(args: &MeasureArgs) -> StateKind {
    let alpha = Complex64::new(args.alpha_re, args.alpha_im);
    match args.state {
        StateClass::Fock => StateKind::Fock { n: args.n },
        StateClass::Thermal => StateKind::Thermal { nth: args.nth },
        StateClass::Coherent => StateKind::Coherent { alpha },
        StateClass::Cat => StateKind::Cat {
            alpha,
            s: args.s,
            mu: args.mu,
        },
        StateClass::Random => StateKind::Random {
            density: args.density,
        },
    }
}

/// Build the state and measure it
pub fn build_report(args: &MeasureArgs) -> Result<MeasureReport, String> {
    let mut rng = StdRng::seed_from_u64(args.seed);
    let state = state_from_args(args);
    let mut rho = state
        .build(args.hilbert_size, &mut rng)
        .map_err(|e| format!("Failed to build state: {e}"))?;
    if let Some(sigma) = args.noise {
        rho = add_state_noise(&rho, sigma, DEFAULT_NOISE_SPARSITY, &mut rng)
            .map_err(|e| format!("Failed to add noise: {e}"))?;
    }

    let beta = Complex64::new(args.beta_re, args.beta_im);
    let populations = measure(beta, &rho).map_err(|e| format!("Measurement failed: {e}"))?;

    Ok(MeasureReport {
        state,
        hilbert_size: args.hilbert_size,
        beta,
        purity: rho.purity(),
        populations: populations.to_vec(),
    })
}

pub fn run_measure(args: MeasureArgs, level: LogLevel) -> Result<(), String> {
    let report = build_report(&args)?;

    match args.format {
        OutputFormat::Text => {
            log(
                level,
                LogLevel::Normal,
                &format!(
                    "{:?} (N={}), displaced by {}",
                    report.state, report.hilbert_size, report.beta
                ),
            );
            log(
                level,
                LogLevel::Verbose,
                &format!("Purity: {:.6}", report.purity),
            );
            println!();
            println!("{:>4}  {:>12}", "n", "P(n)");
            for (n, p) in report.populations.iter().enumerate() {
                println!("{n:>4}  {p:>12.6e}");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_args, Command};

    fn measure_args(extra: &[&str]) -> MeasureArgs {
        let mut argv = vec!["qst-cgan", "measure"];
        argv.extend_from_slice(extra);
        match parse_args(argv).unwrap().command {
            Command::Measure(args) => args,
            _ => panic!("Expected Measure command"),
        }
    }

    #[test]
    fn test_fock_report_without_displacement() {
        let args = measure_args(&["--state", "fock", "--n", "3", "-N", "8"]);
        let report = build_report(&args).unwrap();
        assert_eq!(report.populations.len(), 8);
        assert!((report.populations[3] - 1.0).abs() < 1e-12);
        assert!((report.purity - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_state_from_args_uses_alpha() {
        let args = measure_args(&["--state", "cat", "--alpha-re", "2", "--alpha-im", "-1"]);
        assert_eq!(
            state_from_args(&args),
            StateKind::Cat {
                alpha: Complex64::new(2.0, -1.0),
                s: 0,
                mu: 0,
            }
        );
    }

    #[test]
    fn test_noise_lowers_purity() {
        let args = measure_args(&["--state", "coherent", "-N", "12", "--noise", "0.5"]);
        let report = build_report(&args).unwrap();
        assert!(report.purity < 1.0);
    }

    #[test]
    fn test_invalid_state_parameters_surface() {
        let args = measure_args(&["--state", "fock", "--n", "9", "-N", "4"]);
        let err = build_report(&args).unwrap_err();
        assert!(err.contains("Failed to build state"));
    }

    #[test]
    fn test_huge_displacement_fails_fast() {
        let args = measure_args(&["--state", "fock", "-N", "3", "--beta-re", "1e308"]);
        let err = build_report(&args).unwrap_err();
        assert!(err.contains("Measurement failed"));
    }

    #[test]
    fn test_cat_order_beyond_cutoff_fails() {
        let args = measure_args(&["--state", "cat", "-N", "4", "--s", "4294967295"]);
        let err = build_report(&args).unwrap_err();
        assert!(err.contains("Failed to build state"));
    }

    #[test]
    fn test_report_serializes() {
        let args = measure_args(&["--state", "thermal", "--nth", "0.5", "-N", "4"]);
        let report = build_report(&args).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"kind\":\"thermal\""));
        assert!(json.contains("populations"));
    }
}
