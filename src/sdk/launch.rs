//! Installer launching.

use std::path::Path;

use super::status::InstallerLaunch;

/// Hand `installer` to the OS to open, without waiting for it to finish.
pub fn launch_detached(installer: &Path) -> InstallerLaunch {
    let target = std::path::absolute(installer).unwrap_or_else(|_| installer.to_path_buf());
    tracing::debug!("Opening {}", target.display());

    match open::that_detached(&target) {
        Ok(()) => InstallerLaunch::Launched,
        Err(e) => InstallerLaunch::Failed {
            message: e.to_string(),
        },
    }
}
