//! Environment snapshot.
//!
//! The process environment is read once in `main` and passed down as an
//! [`SdkEnvironment`], so tests can supply their own variables without
//! mutating the real environment.

use std::collections::HashMap;
use std::path::PathBuf;

/// Variables that indicate a CI runner.
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// An immutable view of environment variables.
#[derive(Debug, Clone, Default)]
pub struct SdkEnvironment {
    vars: HashMap<String, String>,
}

impl SdkEnvironment {
    /// Snapshot the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Build from an explicit map (for testing).
    pub fn from_map(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }

    /// Look up a variable. Empty values are treated as unset.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Read a variable as a path.
    pub fn path(&self, name: &str) -> Option<PathBuf> {
        self.get(name).map(PathBuf::from)
    }

    /// All variables starting with `prefix`.
    pub fn with_prefix(&self, prefix: &str) -> HashMap<String, String> {
        self.vars
            .iter()
            .filter(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Check if running under a CI system.
    pub fn is_ci(&self) -> bool {
        CI_VARS.iter().any(|v| self.vars.contains_key(*v))
    }
}
