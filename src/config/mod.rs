//! Configuration: YAML dataset specs and CLI arguments

mod cli;
mod schema;
mod validate;

pub use cli::{
    apply_overrides, parse_args, Cli, Command, GenerateArgs, InfoArgs, InitArgs, MeasureArgs,
    OutputFormat, ValidateArgs,
};
pub use schema::{DatasetSpec, NoiseSpec, ParamRanges, PhaseGrid};
pub use validate::{validate_spec, ValidationError};

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read and parse a dataset spec without validating it
pub fn parse_spec<P: AsRef<Path>>(config_path: P) -> Result<DatasetSpec> {
    let yaml_content = fs::read_to_string(config_path.as_ref()).map_err(|e| {
        Error::ConfigError(format!(
            "Failed to read config file {}: {}",
            config_path.as_ref().display(),
            e
        ))
    })?;

    serde_yaml::from_str(&yaml_content)
        .map_err(|e| Error::ConfigError(format!("Failed to parse YAML config: {e}")))
}

/// Load and validate a dataset spec
pub fn load_spec<P: AsRef<Path>>(config_path: P) -> Result<DatasetSpec> {
    let spec = parse_spec(config_path)?;
    validate_spec(&spec).map_err(|e| Error::ConfigError(format!("Invalid config: {e}")))?;
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_config() {
        let yaml = r"
hilbert_size: 16
samples_per_class: 2
classes: [fock, thermal]
";
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let spec = load_spec(file.path()).unwrap();
        assert_eq!(spec.hilbert_size, 16);
        assert_eq!(spec.samples_per_class, 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_spec("/nonexistent/dataset.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"hilbert_size: [unclosed").unwrap();
        let err = load_spec(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse YAML"));
    }

    #[test]
    fn test_parse_skips_validation() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"hilbert_size: 1\n").unwrap();
        assert!(parse_spec(file.path()).is_ok());
        let err = load_spec(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }
}
