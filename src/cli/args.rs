//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// sdk-bootstrap - Checks for the Vulkan SDK and provisions what is missing.
#[derive(Debug, Parser)]
#[command(name = "sdk-bootstrap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .sdk-bootstrap.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// SDK root to use instead of the configured environment variable
    #[arg(long, global = true, value_name = "PATH")]
    pub sdk_root: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Never prompt; answer from SDK_BOOTSTRAP_PROMPT_* or defaults
    #[arg(long, global = true, env = "SDK_BOOTSTRAP_NON_INTERACTIVE")]
    pub non_interactive: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Verify the SDK and fetch debug libraries (default if no command specified)
    Check,

    /// Show SDK status without prompting or downloading
    Status(StatusArgs),

    /// Download and start the SDK installer
    Install,

    /// Download and unpack the debug libraries if missing
    DebugLibs,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["sdk-bootstrap"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "sdk-bootstrap",
            "check",
            "--sdk-root",
            "/opt/vulkan/1.2.170.0",
            "--non-interactive",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Commands::Check)));
        assert_eq!(cli.sdk_root, Some(PathBuf::from("/opt/vulkan/1.2.170.0")));
        assert!(cli.non_interactive);
    }

    #[test]
    fn status_json_flag() {
        let cli = Cli::try_parse_from(["sdk-bootstrap", "status", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Status(args)) => assert!(args.json),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn debug_libs_is_kebab_case() {
        let cli = Cli::try_parse_from(["sdk-bootstrap", "debug-libs"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::DebugLibs)));
    }
}
