//! Link scope filtering
//!
//! Decides whether a discovered href is eligible for visitation. A link is
//! in-scope iff:
//! - it has no explicit host (a relative link), OR the URL of the page it was
//!   found on starts with the configured start URL, and
//! - its path's file extension is exactly `html`.
//!
//! Note that the prefix test runs against the *origin page*, not the link
//! target: an absolute link to a foreign host is still in-scope when the page
//! it appears on matches the start prefix. That is the documented behavior
//! this crawler ships with (see DESIGN.md), so scope narrows based on where a
//! link was found, not where it points.
//!
//! Link parsing fails open: an href that cannot be parsed as a URL is logged
//! and rejected, never propagated as an error.

use url::{ParseError, Url};

/// Base used only to extract the path component of relative links.
const RELATIVE_BASE: &str = "http://relative.invalid/";

/// Returns true iff `link`, found on the page at `origin_url`, should be
/// visited by a crawl rooted at `start_url`.
///
/// # Example
///
/// ```
/// use sitemirror::is_in_scope;
///
/// let start = "http://a.test/x/";
/// let origin = "http://a.test/x/index.html";
/// assert!(is_in_scope("http://a.test/x/y.html", start, origin));
/// assert!(!is_in_scope("page.htm", start, origin));
/// ```
pub fn is_in_scope(link: &str, start_url: &str, origin_url: &str) -> bool {
    let (has_host, path) = match parse_link(link) {
        Some(parts) => parts,
        None => {
            tracing::warn!("skipping unparseable link: {}", link);
            return false;
        }
    };

    if has_host && !origin_url.starts_with(start_url) {
        tracing::debug!("skipping link with a host found outside the start prefix: {}", link);
        return false;
    }

    if !has_html_extension(&path) {
        tracing::debug!("skipping non-HTML link: {}", link);
        return false;
    }

    true
}

/// Splits a raw href into (has explicit host, path component).
///
/// Relative links are resolved against a throwaway base purely to recover
/// their path; protocol-relative links (`//host/...`) count as having a host.
/// Returns None when the href cannot be parsed either way.
fn parse_link(link: &str) -> Option<(bool, String)> {
    match Url::parse(link) {
        Ok(url) => Some((url.has_host(), url.path().to_string())),
        Err(ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse(RELATIVE_BASE).ok()?;
            let resolved = base.join(link).ok()?;
            Some((link.starts_with("//"), resolved.path().to_string()))
        }
        Err(_) => None,
    }
}

/// Returns true iff the final path segment's extension is exactly `html`.
///
/// The comparison is case-sensitive: `.htm`, `.HTML`, and extensionless
/// segments are all rejected.
fn has_html_extension(path: &str) -> bool {
    let file = path.rsplit('/').next().unwrap_or(path);
    match file.rsplit_once('.') {
        Some((_, ext)) => ext == "html",
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "http://a.test/x/";
    const ORIGIN: &str = "http://a.test/x/index.html";

    #[test]
    fn test_same_host_html_link_in_scope() {
        assert!(is_in_scope("http://a.test/x/y.html", START, ORIGIN));
    }

    #[test]
    fn test_foreign_host_followed_when_origin_matches_prefix() {
        // The prefix check runs against the origin page, so a link pointing
        // at another host is still in-scope when found on a matching page.
        assert!(is_in_scope("http://b.test/y.html", START, ORIGIN));
    }

    #[test]
    fn test_hosted_link_rejected_when_origin_outside_prefix() {
        assert!(!is_in_scope(
            "http://a.test/x/y.html",
            START,
            "http://elsewhere.test/page.html"
        ));
    }

    #[test]
    fn test_relative_link_in_scope_regardless_of_origin() {
        assert!(is_in_scope("y.html", START, ORIGIN));
        assert!(is_in_scope("y.html", START, "http://elsewhere.test/page.html"));
    }

    #[test]
    fn test_htm_extension_rejected() {
        assert!(!is_in_scope("page.htm", START, ORIGIN));
    }

    #[test]
    fn test_html_extension_accepted() {
        assert!(is_in_scope("page.html", START, ORIGIN));
    }

    #[test]
    fn test_extensionless_path_rejected() {
        assert!(!is_in_scope("dir/", START, ORIGIN));
        assert!(!is_in_scope("http://a.test/x/dir", START, ORIGIN));
    }

    #[test]
    fn test_uppercase_extension_rejected() {
        assert!(!is_in_scope("page.HTML", START, ORIGIN));
    }

    #[test]
    fn test_query_ignored_for_extension() {
        assert!(is_in_scope("page.html?section=2", START, ORIGIN));
    }

    #[test]
    fn test_unparseable_link_fails_open() {
        assert!(!is_in_scope("http://[::not-a-host/x.html", START, ORIGIN));
    }

    #[test]
    fn test_protocol_relative_link_counts_as_hosted() {
        assert!(is_in_scope("//b.test/y.html", START, ORIGIN));
        assert!(!is_in_scope(
            "//b.test/y.html",
            START,
            "http://elsewhere.test/page.html"
        ));
    }

    #[test]
    fn test_mailto_rejected_by_extension() {
        assert!(!is_in_scope("mailto:user@a.test", START, ORIGIN));
    }
}
