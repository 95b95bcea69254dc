//! Version requirement matching.

use std::path::Path;

/// A version marker an SDK root must contain.
///
/// Matching is plain substring containment on the root path, so
/// `C:/VulkanSDK/1.2.170.0` satisfies `1.2.170.0` while a newer
/// `C:/VulkanSDK/1.3.204.1` does not. A marker that happens to be a prefix
/// of another version (e.g. `1.2.17` against `1.2.170.0`) also matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRequirement {
    marker: String,
}

impl VersionRequirement {
    /// Create a requirement for `marker`.
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// The marker string.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Check if `location` contains the marker.
    pub fn is_satisfied_by(&self, location: &Path) -> bool {
        location.to_string_lossy().contains(&self.marker)
    }
}
