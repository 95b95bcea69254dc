//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BootstrapError, Result};

use super::schema::SdkConfig;
use super::validator::validate_config;

/// Project-level config file name.
pub const CONFIG_FILE_NAME: &str = ".sdk-bootstrap.yml";

/// Load configuration for a project.
///
/// Resolution order:
/// 1. `explicit` path, if given (must exist)
/// 2. `<project_root>/.sdk-bootstrap.yml`, if present
/// 3. Built-in defaults
///
/// A relative installer path is resolved against `project_root`.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<SdkConfig> {
    let mut config = match explicit {
        Some(path) => load_config_file(path)?,
        None => {
            let path = config_path(project_root);
            if path.is_file() {
                load_config_file(&path)?
            } else {
                tracing::debug!(
                    "No {} in {}, using defaults",
                    CONFIG_FILE_NAME,
                    project_root.display()
                );
                SdkConfig::default()
            }
        }
    };

    if config.installer.path.is_relative() {
        config.installer.path = project_root.join(&config.installer.path);
    }

    Ok(config)
}

/// Load and parse a single configuration file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<SdkConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BootstrapError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            BootstrapError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into an [`SdkConfig`].
///
/// # Errors
///
/// Returns `ConfigParseError` if the YAML is invalid.
/// Returns `ConfigValidationError` if a value is unusable (see
/// [`validate_config`]).
pub fn parse_config(content: &str, source_path: &Path) -> Result<SdkConfig> {
    // An empty file deserializes to unit, not an empty map.
    if content.trim().is_empty() {
        return Ok(SdkConfig::default());
    }

    let config: SdkConfig =
        serde_yaml::from_str(content).map_err(|e| BootstrapError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    let errors = validate_config(&config);
    if !errors.is_empty() {
        return Err(BootstrapError::ConfigValidationError {
            path: source_path.to_path_buf(),
            message: errors.join("; "),
        });
    }

    Ok(config)
}

/// Path of the project config file for `project_root`.
pub fn config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE_NAME)
}
