//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the run
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::RegisterConfig;

/// Loads and provides access to the run configuration.
///
/// # File format
///
/// ```yaml
/// template_path: plantillas/registro_jornada_laboral.pdf
/// output_dir: registros
/// holidays:
///   country: ES
///   subdivision: MD
///   extra:
///     - 2024-07-25
/// ```
///
/// # Example
///
/// ```no_run
/// use jornada_register::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./registro.yaml").unwrap();
/// println!("Template: {}", loader.config().template_path.display());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: RegisterConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown value types (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let config = Self::load_yaml::<RegisterConfig>(path)?;
        debug!(path = %path.display(), ?config, "Configuration loaded");
        Ok(Self { config })
    }

    /// Loads the file if a path is given, otherwise uses the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> EngineResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml(content: &str) -> EngineResult<Self> {
        let config = serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &RegisterConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> RegisterConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}", uuid::Uuid::new_v4(), name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_file() {
        let loader = ConfigLoader::load_or_default(None::<&str>).unwrap();
        let config = loader.config();
        assert_eq!(config.template_path, PathBuf::from("registro_jornada_laboral.pdf"));
        assert_eq!(config.output_dir, PathBuf::from("registros"));
        assert_eq!(config.holidays.region.country, "ES");
        assert_eq!(config.holidays.region.subdivision.as_deref(), Some("MD"));
        assert!(config.holidays.extra.is_empty());
    }

    #[test]
    fn test_load_full_file() {
        let path = temp_file(
            "full.yaml",
            "template_path: plantillas/registro.pdf\n\
             output_dir: salida\n\
             holidays:\n  country: ES\n  subdivision: MD\n  extra:\n    - 2024-07-25\n",
        );

        let loader = ConfigLoader::load(&path).unwrap();
        let config = loader.config();
        assert_eq!(config.template_path, PathBuf::from("plantillas/registro.pdf"));
        assert_eq!(config.output_dir, PathBuf::from("salida"));
        assert_eq!(
            config.holidays.extra,
            vec![NaiveDate::from_ymd_opt(2024, 7, 25).unwrap()]
        );

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let loader = ConfigLoader::from_yaml("output_dir: otra\n").unwrap();
        let config = loader.into_config();
        assert_eq!(config.output_dir, PathBuf::from("otra"));
        assert_eq!(config.template_path, PathBuf::from("registro_jornada_laboral.pdf"));
        assert_eq!(config.holidays.region.country, "ES");
    }

    #[test]
    fn test_national_only_region() {
        let loader = ConfigLoader::from_yaml("holidays:\n  country: ES\n").unwrap();
        assert_eq!(loader.config().holidays.region.subdivision, None);
    }

    #[test]
    fn test_output_path_joins_dir() {
        let config = RegisterConfig::default();
        assert_eq!(
            config.output_path("registro_jornada_laboral_julio2024.pdf"),
            PathBuf::from("registros/registro_jornada_laboral_julio2024.pdf")
        );
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        match ConfigLoader::load("/nonexistent/registro.yaml") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("registro.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_date_is_parse_error() {
        let path = temp_file("bad.yaml", "holidays:\n  country: ES\n  extra: [2024-13-40]\n");

        let result = ConfigLoader::load(&path);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));

        fs::remove_file(path).unwrap();
    }
}
