//! Debug libraries command implementation.
//!
//! The `sdk-bootstrap debug-libs` command unpacks the debug libraries into
//! the located SDK root, skipping the version check.

use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The debug-libs command implementation.
pub struct DebugLibsCommand {
    ctx: CommandContext,
}

impl DebugLibsCommand {
    /// Create a new debug-libs command.
    pub fn new(ctx: CommandContext) -> Self {
        Self { ctx }
    }
}

impl Command for DebugLibsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let provisioner = self.ctx.provisioner()?;
        let status = provisioner.ensure_located_debug_libraries(ui)?;
        tracing::debug!("debug libs: {:?}", status);
        Ok(CommandResult::success())
    }
}
