//! Link extraction from fetched page bytes
//!
//! Parses a page body as HTML and returns every anchor `href` value, in
//! document order, as the raw attribute string. No resolution, validation,
//! or deduplication happens here: that all belongs to the scope filter and
//! the visited state. Tolerant tree parsing is expected, so malformed or
//! nested markup still yields whatever anchors the parser recovers.

use crate::{CrawlError, Result};
use scraper::{Html, Selector};

/// Extracts the raw `href` value of every anchor element in `bytes`
///
/// Returns hrefs in document order. A page with no anchors yields an empty
/// vector, not an error. Bytes are decoded lossily, so a page in a non-UTF-8
/// encoding still parses; invalid sequences only garble the text they sit in.
pub fn extract_links(bytes: &[u8]) -> Result<Vec<String>> {
    let html = String::from_utf8_lossy(bytes);

    let document = Html::parse_document(&html);
    // The selector is static and known-good; Selector::parse only fails on
    // invalid selector syntax.
    let anchors = Selector::parse("a[href]").map_err(|e| CrawlError::Parse {
        message: e.to_string(),
    })?;

    Ok(document
        .select(&anchors)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_hrefs_in_document_order() {
        let html = br#"
            <html><body>
                <a href="first.html">One</a>
                <p><a href="second.html">Two</a></p>
                <a href="third.html">Three</a>
            </body></html>
        "#;
        let links = extract_links(html).unwrap();
        assert_eq!(links, vec!["first.html", "second.html", "third.html"]);
    }

    #[test]
    fn test_hrefs_are_returned_raw() {
        let html = br#"<html><body><a href="../up/page.html?x=1#frag">Link</a></body></html>"#;
        let links = extract_links(html).unwrap();
        assert_eq!(links, vec!["../up/page.html?x=1#frag"]);
    }

    #[test]
    fn test_no_anchors_yields_empty() {
        let html = br#"<html><body><p>No links here</p></body></html>"#;
        let links = extract_links(html).unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn test_anchor_without_href_skipped() {
        let html = br#"<html><body><a name="top">Anchor</a><a href="x.html">X</a></body></html>"#;
        let links = extract_links(html).unwrap();
        assert_eq!(links, vec!["x.html"]);
    }

    #[test]
    fn test_nested_and_malformed_markup_tolerated() {
        let html = br#"<div><a href="a.html"><span><a href="b.html">nested</div>"#;
        let links = extract_links(html).unwrap();
        assert_eq!(links, vec!["a.html", "b.html"]);
    }

    #[test]
    fn test_duplicate_hrefs_kept() {
        let html = br#"<body><a href="x.html">1</a><a href="x.html">2</a></body>"#;
        let links = extract_links(html).unwrap();
        assert_eq!(links, vec!["x.html", "x.html"]);
    }

    #[test]
    fn test_non_utf8_body_tolerated() {
        // Latin-1 text around an ordinary anchor.
        let html = b"<html><body>caf\xe9 <a href=\"menu.html\">menu</a></body></html>";
        let links = extract_links(html).unwrap();
        assert_eq!(links, vec!["menu.html"]);
    }
}
