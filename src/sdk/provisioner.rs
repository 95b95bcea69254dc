//! SDK provisioning flow.
//!
//! [`SdkProvisioner`] checks the located SDK against the required version,
//! offers to download and start the installer when it is missing or wrong,
//! and makes sure the debug libraries are unpacked into the SDK root.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::{SdkConfig, SdkEnvironment};
use crate::error::{BootstrapError, Result};
use crate::ui::{Prompt, UserInterface};

use super::archive::extract_zip;
use super::artifact::{format_bytes, ArtifactFetcher};
use super::launch::launch_detached;
use super::status::{
    DebugLibsStatus, InstallDecision, InstallerLaunch, ProvisionOutcome, SdkReport, SdkStatus,
    VersionCheck,
};
use super::version::VersionRequirement;

/// Key of the install confirmation prompt.
pub const INSTALL_PROMPT_KEY: &str = "install_sdk";

/// Mockable side effects for the provisioner.
pub struct ProvisionerContext<'a> {
    /// Start the downloaded installer without waiting for it.
    pub launch: &'a dyn Fn(&Path) -> InstallerLaunch,
}

/// Build the default `ProvisionerContext` for production use.
pub fn default_context() -> ProvisionerContext<'static> {
    ProvisionerContext {
        launch: &launch_detached,
    }
}

/// Checks and provisions the SDK described by an [`SdkConfig`].
pub struct SdkProvisioner<'a> {
    config: SdkConfig,
    location: Option<PathBuf>,
    requirement: VersionRequirement,
    fetcher: ArtifactFetcher,
    ctx: ProvisionerContext<'a>,
}

impl<'a> SdkProvisioner<'a> {
    /// Create a provisioner, reading the SDK root from `env`.
    pub fn new(
        config: SdkConfig,
        env: &SdkEnvironment,
        ctx: ProvisionerContext<'a>,
    ) -> Result<Self> {
        let location = env.path(&config.env_var);
        let requirement = VersionRequirement::new(config.required_version.clone());
        let fetcher = ArtifactFetcher::with_timeout(Duration::from_secs(config.timeout_secs))?;

        tracing::debug!(
            "{} from {}: {:?}",
            config.sdk_name,
            config.env_var,
            location
        );

        Ok(Self {
            config,
            location,
            requirement,
            fetcher,
            ctx,
        })
    }

    /// Use `root` as the SDK root instead of the environment variable.
    pub fn with_sdk_root(mut self, root: Option<PathBuf>) -> Self {
        if root.is_some() {
            self.location = root;
        }
        self
    }

    /// The configuration in use.
    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// The SDK root, if one was located. Not checked for existence.
    pub fn locate_installed_sdk(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    /// Classify the located SDK without prompting or touching the filesystem.
    pub fn status(&self) -> SdkStatus {
        match &self.location {
            None => SdkStatus::NotInstalled,
            Some(location) if !self.requirement.is_satisfied_by(location) => {
                SdkStatus::VersionMismatch {
                    location: location.clone(),
                    required: self.requirement.marker().to_string(),
                }
            }
            Some(location) => SdkStatus::Satisfied {
                location: location.clone(),
            },
        }
    }

    /// Path of the library whose presence marks the debug libs as installed.
    pub fn debug_libs_marker(&self, location: &Path) -> PathBuf {
        location.join(&self.config.debug_libs.marker)
    }

    /// Read-only snapshot for reporting.
    pub fn report(&self) -> SdkReport {
        let status = self.status();
        SdkReport {
            sdk_name: self.config.sdk_name.clone(),
            env_var: self.config.env_var.clone(),
            required_version: self.config.required_version.clone(),
            location: self.location.clone(),
            status: status.key(),
            debug_libs_present: self
                .location
                .as_deref()
                .map(|l| self.debug_libs_marker(l).exists()),
        }
    }

    /// Check the SDK version, prompting to install when it is missing or wrong.
    pub fn verify_sdk_version(&self, ui: &mut dyn UserInterface) -> Result<VersionCheck> {
        let name = &self.config.sdk_name;
        let status = self.status();

        match &status {
            SdkStatus::NotInstalled => {
                ui.warning(&format!("You don't have the {} installed!", name));
            }
            SdkStatus::VersionMismatch { location, required } => {
                ui.message(&format!("Located {} at {}", name, location.display()));
                ui.warning(&format!(
                    "You don't have the correct {} version! (requires {})",
                    name, required
                ));
            }
            SdkStatus::Satisfied { location } => {
                ui.success(&format!("Correct {} located at {}", name, location.display()));
                return Ok(VersionCheck::Satisfied {
                    location: location.clone(),
                });
            }
        }

        let decision = self.prompt_and_install(ui)?;
        Ok(VersionCheck::Unsatisfied { status, decision })
    }

    /// Ask whether to install the SDK and do so if the user agrees.
    ///
    /// Either way the caller should stop: a declined install leaves no SDK,
    /// and an accepted one needs the tool re-run once the installer is done.
    pub fn prompt_and_install(&self, ui: &mut dyn UserInterface) -> Result<InstallDecision> {
        let prompt = Prompt::new(
            INSTALL_PROMPT_KEY,
            &format!("Would you like to install the {}?", self.config.sdk_name),
        );

        if !ui.confirm(&prompt)? {
            tracing::info!("User declined {} install", self.config.sdk_name);
            return Ok(InstallDecision::Declined);
        }

        let launch = self.install_sdk(ui)?;
        Ok(InstallDecision::InstallerStarted {
            installer: self.config.installer.path.clone(),
            launch,
        })
    }

    /// Download the installer and start it.
    pub fn install_sdk(&self, ui: &mut dyn UserInterface) -> Result<InstallerLaunch> {
        let installer = &self.config.installer;
        let name = &self.config.sdk_name;

        if let Some(parent) = installer.path.parent() {
            fs::create_dir_all(parent)?;
        }

        ui.message(&format!(
            "Downloading {} to {}",
            installer.url,
            installer.path.display()
        ));
        if installer.sha256.is_none() {
            tracing::debug!("No checksum configured for {}", installer.url);
        }

        let mut spinner = ui.start_spinner(&format!("Downloading {} installer", name));
        let result = self.fetcher.download_to_file(
            &installer.url,
            &installer.path,
            installer.sha256.as_deref(),
            &mut |progress| spinner.set_message(&format!("Downloading {}", progress)),
        );
        match result {
            Ok(bytes) => spinner.finish_success(&format!("Done! ({})", format_bytes(bytes))),
            Err(e) => {
                spinner.finish_error("Download failed");
                return Err(e);
            }
        }

        ui.message(&format!("Running {} installer...", name));
        let launch = (self.ctx.launch)(&installer.path);
        if let InstallerLaunch::Failed { message } = &launch {
            ui.error(&format!(
                "Could not start {}: {}",
                installer.path.display(),
                message
            ));
            ui.message("Run the installer manually.");
        }
        ui.message("Re-run this tool after installation");

        Ok(launch)
    }

    /// Make sure the debug libraries are unpacked under `location`.
    ///
    /// Does nothing (and makes no network request) when the marker library
    /// already exists.
    pub fn ensure_debug_libraries(
        &self,
        location: &Path,
        ui: &mut dyn UserInterface,
    ) -> Result<DebugLibsStatus> {
        let name = &self.config.sdk_name;
        let debug_libs = &self.config.debug_libs;
        let marker = self.debug_libs_marker(location);

        let status = if marker.exists() {
            DebugLibsStatus::AlreadyPresent
        } else {
            ui.warning(&format!(
                "No {} debug libs found. (Checked {})",
                name,
                marker.display()
            ));
            ui.message(&format!("Downloading {}", debug_libs.url));

            let mut spinner = ui.start_spinner(&format!("Downloading {} debug libs", name));
            let bytes = match self
                .fetcher
                .fetch_bytes(&debug_libs.url, debug_libs.sha256.as_deref())
            {
                Ok(bytes) => bytes,
                Err(e) => {
                    spinner.finish_error("Download failed");
                    return Err(e);
                }
            };

            spinner.set_message(&format!("Extracting into {}", location.display()));
            let written = match extract_zip(&bytes, location, &debug_libs.url) {
                Ok(written) => written,
                Err(e) => {
                    spinner.finish_error("Extraction failed");
                    return Err(e);
                }
            };
            spinner.finish_success(&format!(
                "Extracted {} files ({})",
                written.len(),
                format_bytes(bytes.len() as u64)
            ));

            if ui.output_mode().shows_detail() {
                for file in &written {
                    ui.message(&format!("  {}", file.display()));
                }
            }
            if !marker.exists() {
                ui.warning(&format!(
                    "Archive did not contain {}",
                    debug_libs.marker.display()
                ));
            }

            DebugLibsStatus::Extracted {
                entries: written.len(),
            }
        };

        ui.success(&format!(
            "{} debug libs located at {}",
            name,
            location.display()
        ));
        Ok(status)
    }

    /// Run the debug-library check against the located SDK root.
    pub fn ensure_located_debug_libraries(
        &self,
        ui: &mut dyn UserInterface,
    ) -> Result<DebugLibsStatus> {
        let location = self
            .locate_installed_sdk()
            .ok_or_else(|| BootstrapError::SdkNotLocated {
                sdk: self.config.sdk_name.clone(),
                env_var: self.config.env_var.clone(),
            })?;
        self.ensure_debug_libraries(location, ui)
    }

    /// Full flow: verify the version, then ensure debug libraries.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<ProvisionOutcome> {
        match self.verify_sdk_version(ui)? {
            VersionCheck::Satisfied { location } => {
                let debug_libs = self.ensure_debug_libraries(&location, ui)?;
                Ok(ProvisionOutcome::Ready {
                    location,
                    debug_libs,
                })
            }
            VersionCheck::Unsatisfied { status, decision } => {
                Ok(ProvisionOutcome::Unsatisfied { status, decision })
            }
        }
    }
}
