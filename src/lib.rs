//! sdk-bootstrap - Vulkan SDK provisioning for engine builds.
//!
//! Checks that the Vulkan SDK is installed at the version the engine
//! expects, offers to download and start the installer when it is not, and
//! unpacks the separately distributed debug libraries into the SDK root.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and environment snapshot
//! - [`error`] - Error types and result aliases
//! - [`sdk`] - SDK checks, downloads, and extraction
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use sdk_bootstrap::config::{SdkConfig, SdkEnvironment};
//! use sdk_bootstrap::sdk::{default_context, SdkProvisioner, SdkStatus};
//!
//! let env = SdkEnvironment::from_map(HashMap::from([(
//!     "VULKAN_SDK".to_string(),
//!     "C:/VulkanSDK/1.3.204.1".to_string(),
//! )]));
//! let provisioner = SdkProvisioner::new(SdkConfig::default(), &env, default_context()).unwrap();
//!
//! assert!(matches!(provisioner.status(), SdkStatus::VersionMismatch { .. }));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod sdk;
pub mod ui;

pub use error::{BootstrapError, Result};
