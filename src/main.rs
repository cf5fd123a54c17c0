//! qst-cgan CLI
//!
//! # Usage
//!
//! ```bash
//! # Write a starter config
//! qst-cgan init --output dataset.yaml
//!
//! # Generate a dataset
//! qst-cgan generate dataset.yaml --samples 50 --seed 1
//!
//! # Validate config
//! qst-cgan validate dataset.yaml --detailed
//!
//! # Photon statistics of a displaced cat state
//! qst-cgan measure --state cat --alpha-re 2 --beta-re 0.5
//! ```

use clap::Parser;
use qst_cgan::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
