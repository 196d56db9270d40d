//! Sitemirror: a same-site HTML mirror crawler
//!
//! This crate implements a crawler that, starting from a single page URL,
//! recursively discovers linked `.html` pages within the start URL's prefix,
//! writes each page's raw bytes into a mirrored directory tree, and
//! checkpoints visited URLs to a state file so an interrupted crawl can be
//! resumed without re-fetching completed pages.

pub mod crawler;
pub mod scope;
pub mod state;
pub mod storage;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sitemirror operations
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("failed to fetch {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },

    #[error("failed to parse HTML content: {message}")]
    Parse { message: String },

    #[error("state file {} is corrupt: {source}", .path.display())]
    StateCorrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write state file {}: {source}", .path.display())]
    StateWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("page file already exists: {}", .path.display())]
    AlreadyExists { path: PathBuf },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for sitemirror operations
pub type Result<T> = std::result::Result<T, CrawlError>;

// Re-export commonly used types
pub use crawler::{crawl, Crawler};
pub use scope::is_in_scope;
pub use state::VisitState;
pub use storage::save_page;
