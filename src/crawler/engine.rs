//! Traversal engine
//!
//! The driver that ties fetching, link extraction, scope filtering, page
//! persistence, and state checkpointing together. Pages are visited
//! depth-first in pre-order over an explicit work stack rather than by
//! call-stack recursion, so arbitrarily deep link chains cannot exhaust the
//! stack. The visited state is checkpointed to disk after every page, before
//! any of that page's links are processed, so a crash loses at most the
//! in-flight page. Any fetch, parse, persist, or state error aborts the
//! entire invocation; the only locally-recovered failure is an individual
//! href that does not parse as a URL.

use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::parser::extract_links;
use crate::scope::is_in_scope;
use crate::state::VisitState;
use crate::storage::save_page;
use crate::Result;
use reqwest::Client;
use std::path::PathBuf;

/// A link waiting to be visited, with the page it was discovered on
#[derive(Debug)]
struct PendingLink {
    url: String,
    origin: String,
}

/// One crawl invocation: start URL, destination tree, state file
pub struct Crawler {
    client: Client,
    start_url: String,
    dest_dir: PathBuf,
    state_file: PathBuf,
}

impl Crawler {
    /// Creates a crawler rooted at `start_url`
    pub fn new(start_url: &str, dest_dir: PathBuf, state_file: PathBuf) -> Result<Self> {
        Ok(Self {
            client: build_http_client()?,
            start_url: start_url.to_string(),
            dest_dir,
            state_file,
        })
    }

    /// Runs the crawl to completion or first fatal error
    ///
    /// Loads the visited state (empty on a first run), then drives the work
    /// stack until no in-scope unvisited link remains. Returns the final
    /// state; on error, the state file on disk still reflects the last
    /// completed checkpoint, so a rerun resumes past everything finished.
    pub async fn run(&self) -> Result<VisitState> {
        let mut state = VisitState::load(&self.state_file)?;
        if !state.is_empty() {
            tracing::info!(
                "loaded {} previously visited URLs from {}",
                state.len(),
                self.state_file.display()
            );
        }

        let mut pending = vec![PendingLink {
            url: self.start_url.clone(),
            origin: self.start_url.clone(),
        }];

        while let Some(link) = pending.pop() {
            // A URL can be queued more than once before it is first reached;
            // the visited check at pop time keeps visits exactly-once.
            if state.is_visited(&link.url) {
                tracing::debug!("already visited {} (found on {})", link.url, link.origin);
                continue;
            }
            self.process_page(&link.url, &mut state, &mut pending)
                .await?;
        }

        tracing::info!("crawl complete, {} pages visited", state.len());
        Ok(state)
    }

    /// Processes one page: fetch, extract, persist, checkpoint, queue links
    async fn process_page(
        &self,
        url: &str,
        state: &mut VisitState,
        pending: &mut Vec<PendingLink>,
    ) -> Result<()> {
        tracing::info!("visiting {}", url);

        let body = fetch_page(&self.client, url).await?;
        let links = extract_links(&body)?;
        save_page(&body, url, &self.dest_dir)?;

        // Checkpoint before any descendant is touched, so a crash during the
        // rest of the crawl never loses this page's visited mark.
        state.mark_visited(url);
        state.save(&self.state_file)?;

        // Push approved links in reverse document order so the first one is
        // processed next: depth-first, pre-order.
        for link in links.iter().rev() {
            if !is_in_scope(link, &self.start_url, url) {
                continue;
            }
            if state.is_visited(link) {
                tracing::debug!("already visited {}", link);
                continue;
            }
            pending.push(PendingLink {
                url: link.clone(),
                origin: url.to_string(),
            });
        }

        Ok(())
    }
}
