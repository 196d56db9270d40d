//! Visited-URL state tracking
//!
//! This module persists the set of URLs a crawl has already processed, used
//! both to deduplicate links within a run and as the checkpoint that makes an
//! interrupted crawl resumable. The on-disk format is a flat JSON object
//! mapping each URL string to `true`; the boolean carries no information
//! beyond key presence, but the shape is kept for compatibility with state
//! files written by earlier runs.

use crate::{CrawlError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// The set of URLs already processed by a crawl
///
/// A URL is present iff the crawl has fetched it and attempted to persist its
/// page, regardless of whether persisting succeeded. Lookups are by the raw
/// link string: two different spellings of the same resource (say an absolute
/// URL and a relative one) are distinct keys. That duplicate-visit gap is
/// documented behavior, not an accident.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitState {
    visited: HashMap<String, bool>,
}

impl VisitState {
    /// Creates an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads state from `path`
    ///
    /// A missing file is a normal first run and yields an empty state. A file
    /// that exists but is not a valid flat string-to-boolean JSON object
    /// yields [`CrawlError::StateCorrupt`].
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|source| CrawlError::StateCorrupt {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Persists the full state to `path`, creating or truncating the file
    ///
    /// Called after every page visit, so the file always reflects the last
    /// completed checkpoint. Any I/O failure is [`CrawlError::StateWrite`].
    pub fn save(&self, path: &Path) -> Result<()> {
        let encoded = serde_json::to_vec(&self.visited).map_err(|source| {
            CrawlError::StateWrite {
                path: path.to_path_buf(),
                source: source.into(),
            }
        })?;
        std::fs::write(path, encoded).map_err(|source| CrawlError::StateWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Records `url` as visited
    pub fn mark_visited(&mut self, url: &str) {
        self.visited.insert(url.to_string(), true);
    }

    /// Returns true iff `url` (compared as a raw string) has been visited
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains_key(url)
    }

    /// Iterates over the visited URLs in no particular order
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.visited.keys().map(String::as_str)
    }

    /// Number of visited URLs
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    /// Returns true iff no URL has been visited
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }
}
