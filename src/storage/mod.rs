//! Mirrored page storage
//!
//! Writes fetched page bytes into a directory tree that mirrors the source
//! site: `dest_dir/<host>/<url-path>`, with the URL path used verbatim as a
//! relative filesystem path. Existing files are never overwritten; hitting
//! one is an error, because a page file with no matching visited-state entry
//! means the page tree and the state file are out of sync.

use crate::{CrawlError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use url::Url;

/// Writes `bytes` to the mirror location for `url` under `dest_dir`
///
/// Creates intermediate directories as needed.
///
/// # Arguments
///
/// * `bytes` - The raw page content
/// * `url` - The URL the content was fetched from
/// * `dest_dir` - Root of the mirror tree
///
/// # Returns
///
/// * `Ok(PathBuf)` - The path the page was written to
/// * `Err(CrawlError::AlreadyExists)` - A file is already present at the
///   target; it is left untouched
pub fn save_page(bytes: &[u8], url: &str, dest_dir: &Path) -> Result<PathBuf> {
    let target = page_path(url, dest_dir)?;

    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&target)
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::AlreadyExists {
                CrawlError::AlreadyExists {
                    path: target.clone(),
                }
            } else {
                CrawlError::Io(e)
            }
        })?;
    file.write_all(bytes)?;

    tracing::debug!("saved {} bytes to {}", bytes.len(), target.display());
    Ok(target)
}

/// Derives the mirror path for `url`: `dest_dir/<host>/<url-path>`
///
/// The host is a single path segment (port excluded); the URL path supplies
/// any further subdirectories. Leading and trailing slashes are trimmed, so
/// a directory-style URL like `http://a.test/x/` maps to the file
/// `dest_dir/a.test/x` rather than a directory path.
pub fn page_path(url: &str, dest_dir: &Path) -> Result<PathBuf> {
    let parsed = Url::parse(url)?;
    let host = parsed.host_str().unwrap_or("");
    let rel = parsed.path().trim_matches('/');
    Ok(dest_dir.join(host).join(rel))
}
