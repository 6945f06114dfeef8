//! Project configuration loaded from `.mdclint.toml`.
//!
//! The file is optional and every key in it is optional:
//!
//! ```toml
//! [validate]
//! default_dir = "agents"
//! extension = "mdc"
//! required_fields = ["name", "model", "description"]
//! ```

use crate::error::{LintError, Result};
use crate::report::ReportConfig;
use crate::validation::DocumentValidator;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the project configuration file
pub const CONFIG_FILE_NAME: &str = ".mdclint.toml";

/// Top-level configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintConfig {
    #[serde(default)]
    pub validate: ValidateSection,
}

/// `[validate]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateSection {
    /// Directory scanned when no paths are given, relative to the config file
    #[serde(default)]
    pub default_dir: Option<PathBuf>,
    /// File extension (without the dot) picked up from `default_dir`
    #[serde(default)]
    pub extension: Option<String>,
    /// Fields the metadata block must declare
    #[serde(default)]
    pub required_fields: Option<Vec<String>>,
}

impl LintConfig {
    /// Parse a configuration file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            LintError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Find and load the nearest configuration file at or above `start_path`.
    ///
    /// Returns the directory holding the file alongside the parsed config.
    pub fn discover(start_path: &Path) -> Result<Option<(PathBuf, Self)>> {
        let Some(config_path) = resolve_config_file(start_path) else {
            return Ok(None);
        };
        debug!("Using configuration from {}", config_path.display());

        let config = Self::load_from_file(&config_path)?;
        let base_dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| start_path.to_path_buf());
        Ok(Some((base_dir, config)))
    }

    /// Report settings, resolving a relative `default_dir` against `base_dir`
    pub fn report_config(&self, base_dir: &Path) -> ReportConfig {
        let defaults = ReportConfig::default();
        let default_dir = match &self.validate.default_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => base_dir.join(dir),
            None => base_dir.join(defaults.default_dir),
        };
        ReportConfig {
            default_dir,
            extension: self
                .validate
                .extension
                .clone()
                .unwrap_or(defaults.extension),
        }
    }

    /// Document validator honouring `required_fields`
    pub fn validator(&self) -> DocumentValidator {
        match &self.validate.required_fields {
            Some(fields) => DocumentValidator::with_config(fields.clone()),
            None => DocumentValidator::new(),
        }
    }
}

/// Walk up from `start_path` looking for [`CONFIG_FILE_NAME`]
pub fn resolve_config_file(start_path: &Path) -> Option<PathBuf> {
    let mut current = start_path.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: LintConfig = toml::from_str("").unwrap();
        assert_eq!(config, LintConfig::default());

        let report = config.report_config(Path::new("/project"));
        assert_eq!(report.default_dir, PathBuf::from("/project/agents"));
        assert_eq!(report.extension, "mdc");
        assert_eq!(
            config.validator().required_fields(),
            &["name", "model", "description"]
        );
    }

    #[test]
    fn test_partial_section() {
        let config: LintConfig = toml::from_str("[validate]\nextension = \"md\"\n").unwrap();
        let report = config.report_config(Path::new("/project"));
        assert_eq!(report.extension, "md");
        assert_eq!(report.default_dir, PathBuf::from("/project/agents"));
    }

    #[test]
    fn test_discover_walks_up_and_resolves_relative_dir() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[validate]\ndefault_dir = \"rules\"\nrequired_fields = [\"name\"]\n",
        )
        .unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (base_dir, config) = LintConfig::discover(&nested).unwrap().unwrap();
        assert_eq!(base_dir, temp_dir.path());
        assert_eq!(
            config.report_config(&base_dir).default_dir,
            temp_dir.path().join("rules")
        );
        assert_eq!(config.validator().required_fields(), &["name"]);
    }

    #[test]
    fn test_malformed_config_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[validate\nextension = 1").unwrap();

        let err = LintConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, LintError::Config(_)));
    }
}
