//! Configuration validation rules.
//!
//! Values that deserialize fine but would make every check pass (or look in
//! the wrong place) are rejected here:
//! - `required_version` must not be empty
//! - `debug_libs.marker` must be a relative path inside the SDK root

use std::path::{Component, Path};

use crate::config::schema::SdkConfig;

/// Validate a configuration and return all problems found.
///
/// Collects every problem rather than stopping at the first one.
pub fn validate_config(config: &SdkConfig) -> Vec<String> {
    let mut errors = Vec::new();

    if config.required_version.trim().is_empty() {
        errors.push("required_version must not be empty".to_string());
    }

    if let Some(problem) = marker_problem(&config.debug_libs.marker) {
        errors.push(format!("debug_libs.marker {}", problem));
    }

    errors
}

fn marker_problem(marker: &Path) -> Option<&'static str> {
    if marker.as_os_str().is_empty() {
        return Some("must not be empty");
    }
    // `has_root` also catches `\lib` on Windows, which is not `is_absolute`.
    if marker.is_absolute() || marker.has_root() {
        return Some("must be relative to the SDK root");
    }
    if marker
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
    {
        return Some("must stay inside the SDK root");
    }
    None
}
