//! Configuration schema.
//!
//! Every field has a default matching the SDK release this tool was built
//! for, so an empty or partial `.sdk-bootstrap.yml` is valid.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Display name of the SDK in user-facing notices.
pub const DEFAULT_SDK_NAME: &str = "Vulkan SDK";

/// Environment variable designating the SDK install root.
pub const DEFAULT_ENV_VAR: &str = "VULKAN_SDK";

/// Version marker an installed SDK path must contain.
pub const DEFAULT_REQUIRED_VERSION: &str = "1.2.170.0";

/// Installer download location.
pub const DEFAULT_INSTALLER_URL: &str =
    "https://sdk.lunarg.com/sdk/download/1.2.170.0/windows/vulkan_sdk.exe";

/// Where the installer is written, relative to the project root.
pub const DEFAULT_INSTALLER_PATH: &str = "ZeoEngine/vendor/VulkanSDK/VulkanSDK.exe";

/// Debug library archive download location.
pub const DEFAULT_DEBUG_LIBS_URL: &str =
    "https://files.lunarg.com/SDK-1.2.170.0/VulkanSDK-1.2.170.0-DebugLibs.zip";

/// Library whose presence under the SDK root means the debug libs are installed.
pub const DEFAULT_DEBUG_LIBS_MARKER: &str = "Lib/shaderc_sharedd.lib";

/// Default HTTP connect timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Root configuration for SDK provisioning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdkConfig {
    /// Name used in notices (e.g., "Vulkan SDK").
    pub sdk_name: String,

    /// Environment variable holding the SDK root.
    pub env_var: String,

    /// Substring the SDK root must contain to be accepted.
    pub required_version: String,

    /// SDK installer artifact.
    pub installer: InstallerConfig,

    /// Debug library archive.
    pub debug_libs: DebugLibsConfig,

    /// HTTP connect timeout in seconds. Streaming a download is not bounded.
    pub timeout_secs: u64,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            sdk_name: DEFAULT_SDK_NAME.to_string(),
            env_var: DEFAULT_ENV_VAR.to_string(),
            required_version: DEFAULT_REQUIRED_VERSION.to_string(),
            installer: InstallerConfig::default(),
            debug_libs: DebugLibsConfig::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Installer download settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallerConfig {
    /// URL of the installer executable.
    pub url: String,

    /// Destination file. Relative paths resolve against the project root.
    pub path: PathBuf,

    /// Optional SHA-256 hex digest the download must match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_INSTALLER_URL.to_string(),
            path: PathBuf::from(DEFAULT_INSTALLER_PATH),
            sha256: None,
        }
    }
}

/// Debug library archive settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugLibsConfig {
    /// URL of the ZIP archive.
    pub url: String,

    /// File, relative to the SDK root, that marks the libs as installed.
    pub marker: PathBuf,

    /// Optional SHA-256 hex digest the archive must match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

impl Default for DebugLibsConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DEBUG_LIBS_URL.to_string(),
            marker: PathBuf::from(DEFAULT_DEBUG_LIBS_MARKER),
            sha256: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_vulkan_1_2_170() {
        let config = SdkConfig::default();
        assert_eq!(config.env_var, "VULKAN_SDK");
        assert_eq!(config.required_version, "1.2.170.0");
        assert!(config.installer.url.contains("1.2.170.0"));
        assert!(config.debug_libs.url.ends_with("DebugLibs.zip"));
        assert_eq!(
            config.debug_libs.marker,
            PathBuf::from("Lib/shaderc_sharedd.lib")
        );
        assert!(config.installer.sha256.is_none());
    }

    #[test]
    fn empty_yaml_yields_defaults() {
        let config: SdkConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, SdkConfig::default());
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let yaml = r#"
required_version: "1.3.204.1"
installer:
  url: https://mirror.example.com/vulkan_sdk.exe
"#;
        let config: SdkConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.required_version, "1.3.204.1");
        assert_eq!(
            config.installer.url,
            "https://mirror.example.com/vulkan_sdk.exe"
        );
        assert_eq!(
            config.installer.path,
            PathBuf::from(DEFAULT_INSTALLER_PATH)
        );
        assert_eq!(config.debug_libs, DebugLibsConfig::default());
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn sha256_is_omitted_when_unset() {
        let yaml = serde_yaml::to_string(&InstallerConfig::default()).unwrap();
        assert!(!yaml.contains("sha256"));
    }
}
