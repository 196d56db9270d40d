//! Crawler module: page fetching, link extraction, and traversal
//!
//! - HTTP fetching with a shared client
//! - Anchor href extraction from page bytes
//! - The depth-first traversal engine

mod engine;
mod fetcher;
mod parser;

pub use engine::Crawler;
pub use fetcher::{build_http_client, fetch_page};
pub use parser::extract_links;

use crate::state::VisitState;
use crate::Result;
use std::path::Path;

/// Runs a complete crawl rooted at `start_url`
///
/// Visits every reachable in-scope page not already recorded in the state
/// file at `state_file`, mirroring each page under `dest_dir`.
///
/// # Arguments
///
/// * `start_url` - The page to start from; also the scope prefix
/// * `dest_dir` - Root directory for the mirrored page tree
/// * `state_file` - Path to the visited-state checkpoint file
///
/// # Returns
///
/// * `Ok(VisitState)` - The final visited state after a complete crawl
/// * `Err(CrawlError)` - The first fatal error; the state file on disk still
///   reflects every page checkpointed before it
pub async fn crawl(start_url: &str, dest_dir: &Path, state_file: &Path) -> Result<VisitState> {
    let crawler = Crawler::new(start_url, dest_dir.to_path_buf(), state_file.to_path_buf())?;
    crawler.run().await
}
