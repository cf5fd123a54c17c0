//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! qst-cgan init --output dataset.yaml
//! qst-cgan validate dataset.yaml
//! qst-cgan info dataset.yaml
//! qst-cgan generate dataset.yaml --samples 10 --seed 7
//! qst-cgan measure --state cat --alpha-re 2.0 --hilbert-size 32
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::schema::DatasetSpec;
use crate::states::StateClass;

/// qst-cgan: quantum state generation and measurement statistics for tomography
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "qst-cgan")]
#[command(version)]
#[command(
    about = "Generate density matrices and displaced photon-counting statistics for quantum state tomography"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Generate a tomography dataset from YAML configuration
    Generate(GenerateArgs),

    /// Validate a configuration file without generating
    Validate(ValidateArgs),

    /// Display information about a configuration
    Info(InfoArgs),

    /// Write a starter configuration file
    Init(InitArgs),

    /// Build one state and print its displaced photon-number statistics
    Measure(MeasureArgs),
}

/// Arguments for the generate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct GenerateArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Override output path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override samples per class
    #[arg(short = 'n', long = "samples")]
    pub samples_per_class: Option<usize>,

    /// Validate and report without generating
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Show detailed configuration summary
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the init command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InitArgs {
    /// Where to write the configuration
    #[arg(short, long, default_value = "dataset.yaml")]
    pub output: PathBuf,

    /// Fock space cutoff for the template
    #[arg(long)]
    pub hilbert_size: Option<usize>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the measure command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct MeasureArgs {
    /// State family (fock, thermal, coherent, cat, random)
    #[arg(short, long)]
    pub state: StateClass,

    /// Fock space cutoff
    #[arg(short = 'N', long, default_value_t = 16)]
    pub hilbert_size: usize,

    /// Fock level for `fock`
    #[arg(long, default_value_t = 0)]
    pub n: usize,

    /// Mean photon number for `thermal`
    #[arg(long, default_value_t = 1.0)]
    pub nth: f64,

    /// Real part of alpha for `coherent` and `cat`
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub alpha_re: f64,

    /// Imaginary part of alpha for `coherent` and `cat`
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub alpha_im: f64,

    /// Cat order (2(s+1) coherent components)
    #[arg(long, default_value_t = 0)]
    pub s: u32,

    /// Cat codeword (0 or 1)
    #[arg(long, default_value_t = 0)]
    pub mu: u8,

    /// Fill fraction for `random`
    #[arg(long, default_value_t = 0.2)]
    pub density: f64,

    /// Real part of the measurement displacement
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub beta_re: f64,

    /// Imaginary part of the measurement displacement
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub beta_im: f64,

    /// Mix in a random state with this weight before measuring
    #[arg(long)]
    pub noise: Option<f64>,

    /// Random seed
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {s}. Valid formats: text, json")),
        }
    }
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to a DatasetSpec
pub fn apply_overrides(spec: &mut DatasetSpec, args: &GenerateArgs) {
    if let Some(output) = &args.output {
        spec.output = output.clone();
    }
    if let Some(seed) = args.seed {
        spec.seed = seed;
    }
    if let Some(samples) = args.samples_per_class {
        spec.samples_per_class = samples;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate_command() {
        let cli = parse_args(["qst-cgan", "generate", "dataset.yaml"]).unwrap();
        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.config, PathBuf::from("dataset.yaml"));
                assert!(!args.dry_run);
                assert!(args.seed.is_none());
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_parse_generate_with_overrides() {
        let cli = parse_args([
            "qst-cgan",
            "generate",
            "dataset.yaml",
            "--seed",
            "9",
            "-n",
            "3",
            "--output",
            "out.json",
        ])
        .unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("Expected Generate command");
        };

        let mut spec = DatasetSpec::default();
        apply_overrides(&mut spec, &args);
        assert_eq!(spec.seed, 9);
        assert_eq!(spec.samples_per_class, 3);
        assert_eq!(spec.output, PathBuf::from("out.json"));
    }

    #[test]
    fn test_parse_measure_command() {
        let cli = parse_args([
            "qst-cgan",
            "measure",
            "--state",
            "cat",
            "-N",
            "24",
            "--alpha-re",
            "-1.5",
            "--mu",
            "1",
            "--format",
            "json",
        ])
        .unwrap();
        let Command::Measure(args) = cli.command else {
            panic!("Expected Measure command");
        };
        assert_eq!(args.state, StateClass::Cat);
        assert_eq!(args.hilbert_size, 24);
        assert_eq!(args.alpha_re, -1.5);
        assert_eq!(args.mu, 1);
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.noise.is_none());
    }

    #[test]
    fn test_measure_rejects_unknown_state() {
        assert!(parse_args(["qst-cgan", "measure", "--state", "squeezed"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = parse_args(["qst-cgan", "validate", "c.yaml", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
