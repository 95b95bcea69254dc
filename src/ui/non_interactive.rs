//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{BootstrapError, Result};

use super::{parse_answer, BootstrapTheme, OutputMode, Prompt, SpinnerHandle, Tone, UserInterface};

/// CI logs get icons but no ANSI codes.
const PLAIN: BootstrapTheme = BootstrapTheme::plain();

/// Prefix of environment variables that answer prompts by key.
pub const PROMPT_ENV_PREFIX: &str = "SDK_BOOTSTRAP_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `SDK_BOOTSTRAP_PROMPT_<KEY>` overrides, falling
/// back to the prompt's default.
pub struct NonInteractiveUI {
    mode: OutputMode,
    overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a non-interactive UI with no prompt overrides.
    pub fn new(mode: OutputMode) -> Self {
        Self::with_overrides(mode, HashMap::new())
    }

    /// Create with explicit overrides keyed by full variable name.
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self { mode, overrides }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        println!("{}", PLAIN.paint(Tone::Success, msg));
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", PLAIN.paint(Tone::Warning, msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", PLAIN.paint(Tone::Error, msg));
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        let answer = match self.overrides.get(&env_key) {
            Some(value) => {
                parse_answer(value).ok_or_else(|| BootstrapError::PromptUnavailable {
                    key: prompt.key.clone(),
                })?
            }
            None => prompt.default,
        };

        if self.mode.shows_messages() {
            println!("{} {}", prompt.question, if answer { "yes" } else { "no" });
        }
        Ok(answer)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_messages() {
            println!("  {}", message);
        }
        Box::new(LineSpinner { mode: self.mode })
    }

    fn show_header(&mut self, title: &str) {
        println!("\n{}\n", PLAIN.paint(Tone::Header, title));
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that prints only its final line.
struct LineSpinner {
    mode: OutputMode,
}

impl SpinnerHandle for LineSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            println!("{}", PLAIN.paint(Tone::Success, msg));
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("{}", PLAIN.paint(Tone::Error, msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn confirm_uses_default_without_override() {
        let mut ui = NonInteractiveUI::new(OutputMode::Quiet);
        let prompt = Prompt::new("install_sdk", "Install?");
        assert!(!ui.confirm(&prompt).unwrap());

        let prompt = Prompt {
            default: true,
            ..prompt
        };
        assert!(ui.confirm(&prompt).unwrap());
    }

    #[test]
    fn confirm_uses_env_override() {
        let mut ui = NonInteractiveUI::with_overrides(
            OutputMode::Quiet,
            overrides(&[("SDK_BOOTSTRAP_PROMPT_INSTALL_SDK", "yes")]),
        );
        let prompt = Prompt::new("install_sdk", "Install?");
        assert!(ui.confirm(&prompt).unwrap());
    }

    #[test]
    fn confirm_rejects_unrecognised_override() {
        let mut ui = NonInteractiveUI::with_overrides(
            OutputMode::Quiet,
            overrides(&[("SDK_BOOTSTRAP_PROMPT_INSTALL_SDK", "perhaps")]),
        );
        let result = ui.confirm(&Prompt::new("install_sdk", "Install?"));
        assert!(matches!(
            result,
            Err(BootstrapError::PromptUnavailable { .. })
        ));
    }

    #[test]
    fn is_never_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn reports_output_mode() {
        let ui = NonInteractiveUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
