//! Init command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{DatasetSpec, InitArgs, NoiseSpec};

/// Render the starter configuration as YAML
pub fn render_template(hilbert_size: Option<usize>) -> Result<String, String> {
    let mut spec = DatasetSpec {
        noise: Some(NoiseSpec::default()),
        ..Default::default()
    };
    if let Some(n) = hilbert_size {
        spec.hilbert_size = n;
    }
    serde_yaml::to_string(&spec).map_err(|e| format!("YAML serialization error: {e}"))
}

pub fn run_init(args: InitArgs, level: LogLevel) -> Result<(), String> {
    if args.output.exists() && !args.force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        ));
    }

    let yaml = render_template(args.hilbert_size)?;
    std::fs::write(&args.output, yaml)
        .map_err(|e| format!("Failed to write {}: {e}", args.output.display()))?;

    log(
        level,
        LogLevel::Normal,
        &format!("Wrote {}", args.output.display()),
    );
    Ok(())
}
