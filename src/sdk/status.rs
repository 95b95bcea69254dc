//! Outcome types for SDK checks.
//!
//! A missing or mismatched SDK is a normal state, not an error, so every
//! step of the flow reports a typed value the caller can act on.

use serde::Serialize;
use std::path::PathBuf;

/// What the environment says about the installed SDK.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SdkStatus {
    /// The SDK root variable is unset.
    NotInstalled,

    /// An SDK root is set but does not contain the required version marker.
    VersionMismatch {
        /// The located SDK root.
        location: PathBuf,
        /// The marker it was expected to contain.
        required: String,
    },

    /// The SDK root contains the required version marker.
    Satisfied {
        /// The located SDK root.
        location: PathBuf,
    },
}

impl SdkStatus {
    /// Check if the SDK can be used as-is.
    pub fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied { .. })
    }

    /// The located SDK root, if any.
    pub fn location(&self) -> Option<&PathBuf> {
        match self {
            Self::NotInstalled => None,
            Self::VersionMismatch { location, .. } | Self::Satisfied { location } => Some(location),
        }
    }

    /// Stable machine-readable name.
    pub fn key(&self) -> &'static str {
        match self {
            Self::NotInstalled => "not_installed",
            Self::VersionMismatch { .. } => "version_mismatch",
            Self::Satisfied { .. } => "satisfied",
        }
    }
}

/// Result of trying to start the downloaded installer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallerLaunch {
    /// The OS accepted the request to open the installer.
    Launched,
    /// The installer could not be started.
    Failed { message: String },
}

impl InstallerLaunch {
    /// Check if the installer was started.
    pub fn is_launched(&self) -> bool {
        matches!(self, Self::Launched)
    }
}

/// What the user chose when offered an install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallDecision {
    /// The user declined; the caller must stop using the SDK.
    Declined,

    /// The installer was downloaded and handed to the OS; the caller must
    /// stop and the tool should be re-run after installation.
    InstallerStarted {
        /// Where the installer was written.
        installer: PathBuf,
        /// Whether the launch succeeded.
        launch: InstallerLaunch,
    },
}

/// Result of the version check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionCheck {
    /// The SDK is usable.
    Satisfied { location: PathBuf },

    /// The SDK is missing or wrong; the user was prompted.
    Unsatisfied {
        status: SdkStatus,
        decision: InstallDecision,
    },
}

impl VersionCheck {
    /// Check if the SDK is usable.
    pub fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied { .. })
    }
}

/// Result of the debug library check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebugLibsStatus {
    /// The marker library was already present; nothing was downloaded.
    AlreadyPresent,
    /// The archive was downloaded and this many files were written.
    Extracted { entries: usize },
}

/// Result of the full provisioning flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// SDK verified and debug libraries in place.
    Ready {
        location: PathBuf,
        debug_libs: DebugLibsStatus,
    },

    /// SDK missing or wrong; see the decision.
    Unsatisfied {
        status: SdkStatus,
        decision: InstallDecision,
    },
}

/// Exit code when the SDK is ready.
pub const EXIT_READY: i32 = 0;
/// Exit code when the user declined to install.
pub const EXIT_DECLINED: i32 = 2;
/// Exit code when the installer was started and the tool must be re-run.
pub const EXIT_RERUN: i32 = 3;

impl ProvisionOutcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Ready { .. } => EXIT_READY,
            Self::Unsatisfied {
                decision: InstallDecision::Declined,
                ..
            } => EXIT_DECLINED,
            Self::Unsatisfied {
                decision: InstallDecision::InstallerStarted { .. },
                ..
            } => EXIT_RERUN,
        }
    }
}

/// Read-only snapshot of the SDK state, for `status` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SdkReport {
    pub sdk_name: String,
    pub env_var: String,
    pub required_version: String,
    pub location: Option<PathBuf>,
    pub status: &'static str,
    /// `None` when there is no location to look in.
    pub debug_libs_present: Option<bool>,
}
