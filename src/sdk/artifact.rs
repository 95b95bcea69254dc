//! Artifact downloading.
//!
//! Provides a blocking HTTP client for the installer and the debug-library
//! archive, with optional SHA-256 verification.

use anyhow::Context;
use reqwest::blocking::{Client, Response};
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use std::time::Duration;
use tempfile::NamedTempFile;

use crate::error::{BootstrapError, Result};

const CHUNK_SIZE: usize = 64 * 1024;

/// Downloads artifacts over HTTP/HTTPS.
pub struct ArtifactFetcher {
    client: Client,
}

/// Bytes received so far during a streamed download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadProgress {
    /// Bytes written so far.
    pub downloaded: u64,
    /// Total size from `Content-Length`, when the server sent one.
    pub total: Option<u64>,
}

impl DownloadProgress {
    /// Percentage complete, if the total is known.
    pub fn percent(&self) -> Option<u64> {
        match self.total {
            Some(0) | None => None,
            Some(total) => Some((self.downloaded.min(total) * 100) / total),
        }
    }
}

impl fmt::Display for DownloadProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.total, self.percent()) {
            (Some(total), Some(pct)) => write!(
                f,
                "{} / {} ({}%)",
                format_bytes(self.downloaded),
                format_bytes(total),
                pct
            ),
            _ => write!(f, "{}", format_bytes(self.downloaded)),
        }
    }
}

impl ArtifactFetcher {
    /// Create a fetcher with a custom connect timeout.
    ///
    /// Only connecting is bounded; a large installer may take longer than
    /// `timeout` to stream.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("sdk-bootstrap/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }

    /// Stream `url` to `dest`, reporting progress after every chunk.
    ///
    /// Returns the number of bytes written. The body is streamed into a
    /// temporary file next to `dest` and only moved into place once the
    /// checksum (if any) matches, so `dest` never holds unverified bytes.
    /// The parent directory of `dest` is created if needed.
    pub fn download_to_file(
        &self,
        url: &str,
        dest: &Path,
        expected_sha256: Option<&str>,
        on_progress: &mut dyn FnMut(DownloadProgress),
    ) -> Result<u64> {
        let mut response = self.get(url)?;
        let total = response.content_length();

        let parent = match dest.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;
        let mut file = NamedTempFile::new_in(parent)?;
        let mut hasher = Sha256::new();
        let mut buf = vec![0u8; CHUNK_SIZE];
        let mut downloaded = 0u64;

        loop {
            let n = response
                .read(&mut buf)
                .map_err(|e| download_error(url, e))?;
            if n == 0 {
                break;
            }
            file.write_all(&buf[..n])?;
            hasher.update(&buf[..n]);
            downloaded += n as u64;
            on_progress(DownloadProgress { downloaded, total });
        }
        file.flush()?;

        if let Some(expected) = expected_sha256 {
            compare_digest(url, expected, &hex::encode(hasher.finalize()))?;
        }

        file.persist(dest).map_err(|e| BootstrapError::Io(e.error))?;
        tracing::debug!("Wrote {} bytes from {} to {}", downloaded, url, dest.display());
        Ok(downloaded)
    }

    /// Download `url` fully into memory.
    pub fn fetch_bytes(&self, url: &str, expected_sha256: Option<&str>) -> Result<Vec<u8>> {
        let response = self.get(url)?;
        let bytes = response.bytes().map_err(|e| download_error(url, e))?;

        if let Some(expected) = expected_sha256 {
            verify_checksum(url, &bytes, expected)?;
        }

        tracing::debug!("Fetched {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }

    fn get(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| download_error(url, e))?;

        if !response.status().is_success() {
            return Err(BootstrapError::Download {
                url: url.to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        Ok(response)
    }
}

/// Check `bytes` against an expected SHA-256 hex digest.
pub fn verify_checksum(url: &str, bytes: &[u8], expected: &str) -> Result<()> {
    let actual = hex::encode(Sha256::digest(bytes));
    compare_digest(url, expected, &actual)
}

fn compare_digest(url: &str, expected: &str, actual: &str) -> Result<()> {
    if expected.trim().eq_ignore_ascii_case(actual) {
        Ok(())
    } else {
        Err(BootstrapError::ChecksumMismatch {
            url: url.to_string(),
            expected: expected.trim().to_lowercase(),
            actual: actual.to_string(),
        })
    }
}

fn download_error(url: &str, e: impl fmt::Display) -> BootstrapError {
    BootstrapError::Download {
        url: url.to_string(),
        message: e.to_string(),
    }
}

/// Format a byte count for humans (e.g., "1.5 MiB").
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}
