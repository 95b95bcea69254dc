//! Install command implementation.
//!
//! The `sdk-bootstrap install` command downloads the SDK installer and starts
//! it without asking first.

use crate::error::Result;
use crate::sdk::{InstallerLaunch, EXIT_RERUN};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The install command implementation.
pub struct InstallCommand {
    ctx: CommandContext,
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(ctx: CommandContext) -> Self {
        Self { ctx }
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let provisioner = self.ctx.provisioner()?;
        match provisioner.install_sdk(ui)? {
            InstallerLaunch::Launched => Ok(CommandResult::from_exit_code(EXIT_RERUN)),
            InstallerLaunch::Failed { .. } => Ok(CommandResult::from_exit_code(1)),
        }
    }
}
