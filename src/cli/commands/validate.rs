//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{parse_spec, validate_spec, DatasetSpec, ValidateArgs};

/// Format Hilbert space and sampling information as a string
pub fn format_sampling_info(spec: &DatasetSpec) -> String {
    let classes: Vec<&str> = spec.classes.iter().map(|c| c.as_str()).collect();
    format!(
        "  Hilbert size: {}\n  Classes: {}\n  Samples per class: {}\n  Seed: {}",
        spec.hilbert_size,
        classes.join(", "),
        spec.samples_per_class,
        spec.seed
    )
}

/// Format the phase-space grid as a string
pub fn format_grid_info(spec: &DatasetSpec) -> String {
    let grid = &spec.grid;
    format!(
        "  Grid: x in [{}, {}], y in [{}, {}], {} x {} points",
        grid.x_min, grid.x_max, grid.y_min, grid.y_max, grid.points, grid.points
    )
}

/// Format parameter ranges as a string
pub fn format_ranges_info(spec: &DatasetSpec) -> String {
    let ranges = &spec.ranges;
    format!(
        "  alpha_max: {}\n  nth_max: {}\n  cat_max_s: {}\n  random_density: {}",
        ranges.alpha_max, ranges.nth_max, ranges.cat_max_s, ranges.random_density
    )
}

/// Format noise configuration as a string
pub fn format_noise_info(spec: &DatasetSpec) -> Option<String> {
    spec.noise.as_ref().map(|noise| {
        format!(
            "  Noise:\n    Sigma: {}\n    Sparsity: {}",
            noise.sigma, noise.sparsity
        )
    })
}

/// Print detailed configuration summary
pub fn print_detailed_summary(spec: &DatasetSpec) {
    println!();
    println!("Configuration Summary:");
    println!("{}", format_sampling_info(spec));
    println!();
    println!("{}", format_grid_info(spec));
    println!();
    println!("{}", format_ranges_info(spec));

    if let Some(noise_info) = format_noise_info(spec) {
        println!();
        println!("{noise_info}");
    }

    println!();
    println!("  Output: {}", spec.output.display());
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let spec = parse_spec(&args.config).map_err(|e| format!("Config error: {e}"))?;

    validate_spec(&spec).map_err(|e| format!("Validation failed: {e}"))?;

    log(level, LogLevel::Normal, "Configuration is valid");

    if args.detailed {
        print_detailed_summary(&spec);
    }

    Ok(())
}
