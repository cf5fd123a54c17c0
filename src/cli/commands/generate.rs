//! Generate command implementation

use std::time::Instant;

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{apply_overrides, parse_spec, validate_spec, DatasetSpec, GenerateArgs};
use crate::dataset::{generate_with, Dataset};

/// Load the spec, apply CLI overrides, then validate
pub fn resolve_spec(args: &GenerateArgs) -> Result<DatasetSpec, String> {
    let mut spec = parse_spec(&args.config).map_err(|e| format!("Config error: {e}"))?;
    apply_overrides(&mut spec, args);
    validate_spec(&spec).map_err(|e| format!("Validation failed: {e}"))?;
    Ok(spec)
}

/// One-line per-class summary of a dataset
pub fn format_class_counts(dataset: &Dataset) -> String {
    dataset
        .class_counts()
        .iter()
        .map(|(class, count)| format!("{class}={count}"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn run_generate(args: GenerateArgs, level: LogLevel) -> Result<(), String> {
    let spec = resolve_spec(&args)?;
    let total = spec.classes.len() * spec.samples_per_class;

    log(
        level,
        LogLevel::Normal,
        &format!(
            "✓ Config loaded: {} states (N={}, grid {}x{})",
            total, spec.hilbert_size, spec.grid.points, spec.grid.points
        ),
    );

    if args.dry_run {
        log(level, LogLevel::Normal, "Dry run: nothing generated");
        return Ok(());
    }

    let start = Instant::now();
    let dataset = generate_with(&spec, |index, sample| {
        log(
            level,
            LogLevel::Verbose,
            &format!("  [{}/{}] {:?}", index + 1, total, sample.kind),
        );
    })
    .map_err(|e| format!("Generation failed: {e}"))?;

    dataset
        .save_json(&spec.output)
        .map_err(|e| format!("Failed to save dataset: {e}"))?;

    log(
        level,
        LogLevel::Normal,
        &format!(
            "✓ Generated {} samples ({}) in {:.2}s",
            dataset.len(),
            format_class_counts(&dataset),
            start.elapsed().as_secs_f64()
        ),
    );
    log(
        level,
        LogLevel::Normal,
        &format!("  Output: {}", spec.output.display()),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const SMALL_CONFIG: &str = r"
hilbert_size: 6
samples_per_class: 1
classes: [fock, thermal]
grid:
  x_min: -1.0
  x_max: 1.0
  y_min: -1.0
  y_max: 1.0
  points: 2
ranges:
  alpha_max: 1.0
  nth_max: 1.0
";

    fn write_config(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("dataset.yaml");
        std::fs::write(&path, SMALL_CONFIG).unwrap();
        path
    }

    fn args(config: PathBuf) -> GenerateArgs {
        GenerateArgs {
            config,
            output: None,
            seed: None,
            samples_per_class: None,
            dry_run: false,
        }
    }

    #[test]
    fn test_resolve_spec_applies_overrides_before_validation() {
        let dir = TempDir::new().unwrap();
        let mut args = args(write_config(&dir));
        args.samples_per_class = Some(0);
        let err = resolve_spec(&args).unwrap_err();
        assert!(err.contains("samples_per_class"));
    }

    #[test]
    fn test_run_generate_writes_dataset() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.json");
        let mut args = args(write_config(&dir));
        args.output = Some(output.clone());
        args.samples_per_class = Some(2);

        run_generate(args, LogLevel::Quiet).unwrap();

        let dataset = Dataset::load_json(&output).unwrap();
        assert_eq!(dataset.len(), 4);
        assert_eq!(format_class_counts(&dataset), "fock=2, thermal=2");
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.json");
        let mut args = args(write_config(&dir));
        args.output = Some(output.clone());
        args.dry_run = true;

        run_generate(args, LogLevel::Quiet).unwrap();
        assert!(!output.exists());
    }
}
