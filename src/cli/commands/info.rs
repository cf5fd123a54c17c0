//! Info command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_spec, DatasetSpec, InfoArgs, OutputFormat};

/// Number of `f64` values one sample stores (density matrix plus Q grid)
pub fn values_per_sample(spec: &DatasetSpec) -> usize {
    let n = spec.hilbert_size;
    let points = spec.grid.points;
    2 * n * n + points * points * n
}

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let spec = load_spec(&args.config).map_err(|e| format!("Config error: {e}"))?;

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Configuration Info:");
            println!();
            println!("Hilbert size: {}", spec.hilbert_size);
            println!(
                "Classes: {}",
                spec.classes
                    .iter()
                    .map(|c| c.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            println!(
                "Samples: {} ({} per class)",
                spec.classes.len() * spec.samples_per_class,
                spec.samples_per_class
            );
            println!("Grid: {} x {}", spec.grid.points, spec.grid.points);
            println!("Values per sample: {}", values_per_sample(&spec));

            if spec.noise.is_some() {
                println!("Noise: enabled");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&spec)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
    }

    Ok(())
}
