//! ZIP extraction into the SDK root.

use std::fs::{self, File};
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use crate::error::{BootstrapError, Result};

/// Extract every entry of an in-memory ZIP into `destination`.
///
/// Existing files are overwritten. Entries whose names would escape
/// `destination` (absolute paths, `..`) are skipped. Returns the files
/// written, relative to `destination`.
///
/// `source` names the archive in error messages.
pub fn extract_zip(bytes: &[u8], destination: &Path, source: &str) -> Result<Vec<PathBuf>> {
    let archive_err = |e: zip::result::ZipError| BootstrapError::Archive {
        url: source.to_string(),
        message: e.to_string(),
    };

    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(archive_err)?;
    fs::create_dir_all(destination)?;

    let mut written = Vec::new();
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(archive_err)?;
        let Some(relative) = entry.enclosed_name() else {
            tracing::warn!("Skipping unsafe archive entry '{}'", entry.name());
            continue;
        };
        let relative = relative.to_path_buf();
        let outpath = destination.join(&relative);

        if entry.is_dir() {
            fs::create_dir_all(&outpath)?;
            continue;
        }

        if let Some(parent) = outpath.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut outfile = File::create(&outpath)?;
        io::copy(&mut entry, &mut outfile)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                fs::set_permissions(&outpath, fs::Permissions::from_mode(mode))?;
            }
        }

        written.push(relative);
    }

    Ok(written)
}
