//! Check command implementation.
//!
//! The `sdk-bootstrap check` command runs the full flow: verify the SDK
//! version, offer an install when it is missing, then make sure the debug
//! libraries are unpacked.

use crate::error::Result;
use crate::sdk::{InstallDecision, ProvisionOutcome};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    ctx: CommandContext,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(ctx: CommandContext) -> Self {
        Self { ctx }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let provisioner = self.ctx.provisioner()?;
        let outcome = provisioner.run(ui)?;

        tracing::debug!(exit_code = outcome.exit_code(), "check finished: {:?}", outcome);

        if let ProvisionOutcome::Unsatisfied {
            decision: InstallDecision::Declined,
            ..
        } = &outcome
        {
            ui.error(&format!(
                "{} is required. Stopping.",
                provisioner.config().sdk_name
            ));
        }

        Ok(CommandResult::from_exit_code(outcome.exit_code()))
    }
}
