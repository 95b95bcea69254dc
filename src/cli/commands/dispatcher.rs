//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] for the state every command shares
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, SdkEnvironment};
use crate::error::Result;
use crate::sdk::{default_context, SdkProvisioner};
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self::from_exit_code(0)
    }

    /// Create a result from an exit code.
    pub fn from_exit_code(exit_code: i32) -> Self {
        Self { exit_code }
    }
}

/// Inputs shared by every command.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Project root; relative installer paths resolve against it.
    pub project_root: PathBuf,
    /// Explicit config file, if given.
    pub config_path: Option<PathBuf>,
    /// Explicit SDK root, if given.
    pub sdk_root: Option<PathBuf>,
    /// Environment snapshot taken at startup.
    pub env: SdkEnvironment,
}

impl CommandContext {
    /// Load configuration and build a provisioner.
    pub fn provisioner(&self) -> Result<SdkProvisioner<'static>> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        let provisioner = SdkProvisioner::new(config, &self.env, default_context())?
            .with_sdk_root(self.sdk_root.clone());
        Ok(provisioner)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    ctx: CommandContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root and environment.
    pub fn new(project_root: PathBuf, env: SdkEnvironment) -> Self {
        Self {
            ctx: CommandContext {
                project_root,
                config_path: None,
                sdk_root: None,
                env,
            },
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.ctx.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. No subcommand means `check`.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = CommandContext {
            config_path: cli.config.clone(),
            sdk_root: cli.sdk_root.clone(),
            ..self.ctx.clone()
        };

        match &cli.command {
            Some(Commands::Check) | None => super::check::CheckCommand::new(ctx).execute(ui),
            Some(Commands::Status(args)) => {
                super::status::StatusCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Install) => super::install::InstallCommand::new(ctx).execute(ui),
            Some(Commands::DebugLibs) => {
                super::debug_libs::DebugLibsCommand::new(ctx).execute(ui)
            }
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Context whose environment points `VULKAN_SDK` at `sdk_root`.
    pub(crate) fn test_context(project_root: &Path, sdk_root: Option<&Path>) -> CommandContext {
        let mut vars = HashMap::new();
        if let Some(root) = sdk_root {
            vars.insert("VULKAN_SDK".to_string(), root.display().to_string());
        }
        CommandContext {
            project_root: project_root.to_path_buf(),
            config_path: None,
            sdk_root: None,
            env: SdkEnvironment::from_map(vars),
        }
    }

    #[test]
    fn command_result_success() {
        assert_eq!(CommandResult::success().exit_code, 0);
        assert_eq!(CommandResult::success(), CommandResult::from_exit_code(0));
    }

    #[test]
    fn command_result_from_exit_code() {
        assert_eq!(CommandResult::from_exit_code(3).exit_code, 3);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"), SdkEnvironment::default());
        assert_eq!(dispatcher.project_root(), Path::new("/test"));
    }
}
