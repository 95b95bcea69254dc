//! SDK detection and provisioning.
//!
//! This module checks whether the required SDK is installed at the right
//! version, offers to download and start its installer, and unpacks the
//! supplementary debug libraries into the SDK root.
//!
//! # Modules
//!
//! - [`provisioner`] - The check/install/debug-libs flow
//! - [`status`] - Typed outcomes for each step
//! - [`version`] - Version marker matching
//! - [`artifact`] - HTTP downloads with optional SHA-256 verification
//! - [`archive`] - ZIP extraction
//! - [`launch`] - Starting the installer

pub mod archive;
pub mod artifact;
pub mod launch;
pub mod provisioner;
pub mod status;
pub mod version;

pub use artifact::{ArtifactFetcher, DownloadProgress};
pub use provisioner::{default_context, ProvisionerContext, SdkProvisioner, INSTALL_PROMPT_KEY};
pub use status::{
    DebugLibsStatus, InstallDecision, InstallerLaunch, ProvisionOutcome, SdkReport, SdkStatus,
    VersionCheck, EXIT_DECLINED, EXIT_READY, EXIT_RERUN,
};
pub use version::VersionRequirement;
