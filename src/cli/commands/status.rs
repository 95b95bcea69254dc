//! Status command implementation.
//!
//! The `sdk-bootstrap status` command shows where the SDK is and whether it
//! satisfies the requirement, without prompting or downloading anything.

use anyhow::Context;

use crate::cli::args::StatusArgs;
use crate::error::Result;
use crate::sdk::{SdkReport, SdkStatus, EXIT_DECLINED};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The status command implementation.
pub struct StatusCommand {
    ctx: CommandContext,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(ctx: CommandContext, args: StatusArgs) -> Self {
        Self { ctx, args }
    }

    fn show_report(&self, status: &SdkStatus, report: &SdkReport, ui: &mut dyn UserInterface) {
        ui.show_header(&format!("{} - Status", report.sdk_name));

        ui.message(&format!("Environment variable: {}", report.env_var));
        ui.message(&format!("Required version:     {}", report.required_version));
        match &report.location {
            Some(location) => ui.message(&format!("Location:             {}", location.display())),
            None => ui.message("Location:             (not set)"),
        }
        ui.message("");

        match status {
            SdkStatus::Satisfied { .. } => {
                ui.success(&format!("{} is installed", report.sdk_name))
            }
            SdkStatus::VersionMismatch { required, .. } => ui.warning(&format!(
                "{} does not match version {}",
                report.sdk_name, required
            )),
            SdkStatus::NotInstalled => {
                ui.warning(&format!("{} is not installed", report.sdk_name))
            }
        }

        match report.debug_libs_present {
            Some(true) => ui.success("Debug libs present"),
            Some(false) => ui.warning("Debug libs missing"),
            None => {}
        }
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let provisioner = self.ctx.provisioner()?;
        let status = provisioner.status();
        let report = provisioner.report();

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize status")?;
            println!("{}", json);
        } else {
            self.show_report(&status, &report, ui);
        }

        if status.is_satisfied() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::from_exit_code(EXIT_DECLINED))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::dispatcher::tests::test_context;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn status_json_skips_ui_report() {
        let temp = TempDir::new().unwrap();
        let cmd = StatusCommand::new(
            test_context(temp.path(), None),
            StatusArgs { json: true },
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.headers().is_empty());
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn status_not_installed() {
        let temp = TempDir::new().unwrap();
        let cmd = StatusCommand::new(test_context(temp.path(), None), StatusArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_message("(not set)"));
        assert!(ui.has_warning("Vulkan SDK is not installed"));
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn status_version_mismatch() {
        let temp = TempDir::new().unwrap();
        let sdk_root = temp.path().join("VulkanSDK").join("1.3.204.1");
        fs::create_dir_all(&sdk_root).unwrap();
        let cmd = StatusCommand::new(
            test_context(temp.path(), Some(&sdk_root)),
            StatusArgs::default(),
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_warning("does not match version 1.2.170.0"));
        assert!(ui.has_warning("Debug libs missing"));
    }

    #[test]
    fn status_satisfied_shows_header() {
        let temp = TempDir::new().unwrap();
        let sdk_root = temp.path().join("VulkanSDK").join("1.2.170.0");
        fs::create_dir_all(sdk_root.join("Lib")).unwrap();
        fs::write(sdk_root.join("Lib").join("shaderc_sharedd.lib"), "lib").unwrap();
        let cmd = StatusCommand::new(
            test_context(temp.path(), Some(&sdk_root)),
            StatusArgs::default(),
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 0);
        assert_eq!(ui.headers(), &["Vulkan SDK - Status".to_string()]);
        assert!(ui.has_success("Vulkan SDK is installed"));
        assert!(ui.has_success("Debug libs present"));
    }
}
