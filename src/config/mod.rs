//! Configuration loading and environment access.
//!
//! - Schema definitions and built-in defaults in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Environment snapshot in [`environment`]
//!
//! # Example
//!
//! ```
//! use sdk_bootstrap::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".sdk-bootstrap.yml"), "required_version: \"1.3.0\"").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.required_version, "1.3.0");
//! assert_eq!(config.env_var, "VULKAN_SDK");
//! ```

pub mod environment;
pub mod loader;
pub mod schema;
pub mod validator;

pub use environment::SdkEnvironment;
pub use loader::{config_path, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{DebugLibsConfig, InstallerConfig, SdkConfig};
pub use validator::validate_config;
