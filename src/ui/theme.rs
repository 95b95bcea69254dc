//! Status line styling.
//!
//! Every UI prints status lines through [`BootstrapTheme::paint`], so the
//! icons are identical on a terminal and in CI logs; only the colors differ.

use console::Style;

/// Kind of status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
    Header,
}

impl Tone {
    fn icon(self) -> Option<&'static str> {
        match self {
            Self::Success => Some("✓"),
            Self::Warning => Some("⚠"),
            Self::Error => Some("✗"),
            Self::Header => None,
        }
    }

    fn style(self) -> Style {
        match self {
            Self::Success => Style::new().green(),
            Self::Warning => Style::new().color256(208),
            Self::Error => Style::new().red().bold(),
            Self::Header => Style::new().bold().magenta(),
        }
    }
}

/// Whether status lines are colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapTheme {
    colored: bool,
}

impl BootstrapTheme {
    /// Colored output.
    pub const fn colored() -> Self {
        Self { colored: true }
    }

    /// Icons only, no ANSI codes.
    pub const fn plain() -> Self {
        Self { colored: false }
    }

    /// Colored unless `NO_COLOR` is set or stdout is not a terminal.
    pub fn detect() -> Self {
        // https://no-color.org/
        if std::env::var_os("NO_COLOR").is_some() || !console::Term::stdout().is_term() {
            Self::plain()
        } else {
            Self::colored()
        }
    }

    /// Render `msg` as a line of the given tone.
    pub fn paint(&self, tone: Tone, msg: &str) -> String {
        let line = match tone.icon() {
            Some(icon) => format!("{} {}", icon, msg),
            None => msg.to_string(),
        };
        if self.colored {
            tone.style().apply_to(line).to_string()
        } else {
            line
        }
    }
}
