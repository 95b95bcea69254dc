//! Output verbosity.

/// Output verbosity mode, chosen by `--verbose` / `--quiet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also list every file written during extraction.
    Verbose,
    /// Notices, spinners and status lines.
    #[default]
    Normal,
    /// Status lines (success, warning, error, headers) only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode lists per-file detail.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows plain notices and progress.
    pub fn shows_messages(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
