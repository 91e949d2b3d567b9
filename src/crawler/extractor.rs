//! Article link extraction from listing pages
//!
//! Given a fetched page and a source-specific selector, produces the ordered
//! sequence of absolute article URLs found on that page. Pure with respect
//! to the page content: no I/O, no shared state.

use crate::url::resolve_href;
use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracts article links from a listing page
///
/// # Extraction Rules
///
/// - Every element matching `selector` contributes its `href`, resolved
///   against `base_url` (absolute hrefs pass through unchanged).
/// - Elements with no href, unresolvable hrefs, or resolved URLs outside
///   http(s) (javascript:, mailto:, ...) are skipped.
/// - If `url_pattern` is present and compiles, only resolved URLs matching
///   it are kept. A pattern that fails to compile is a recoverable
///   configuration defect: a warning is logged and extraction proceeds
///   unfiltered.
/// - Output preserves first-seen order and contains no duplicate URL
///   strings. Dedupe here is within-page only; cross-run dedupe is the
///   seen-link store's job.
///
/// # Arguments
///
/// * `html` - The listing page body
/// * `base_url` - The source's base URL for resolving relative hrefs
/// * `selector` - CSS selector identifying the anchor elements
/// * `url_pattern` - Optional regex a resolved URL must match
///
/// # Example
///
/// ```
/// use news_scout::crawler::extract_article_links;
/// use url::Url;
///
/// let html = r#"<a class="story" href="/a">A</a><a class="story" href="/b">B</a>"#;
/// let base = Url::parse("https://site.test").unwrap();
/// let links = extract_article_links(html, &base, "a.story", None);
/// assert_eq!(links, vec!["https://site.test/a", "https://site.test/b"]);
/// ```
pub fn extract_article_links(
    html: &str,
    base_url: &Url,
    selector: &str,
    url_pattern: Option<&str>,
) -> Vec<String> {
    let parsed_selector = match Selector::parse(selector) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!("Invalid link selector '{}': {:?}. Extracting nothing.", selector, e);
            return Vec::new();
        }
    };

    let pattern = compile_pattern(url_pattern);

    let document = Html::parse_document(html);
    let mut seen: HashSet<String> = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&parsed_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if href.trim().is_empty() {
            continue;
        }

        let resolved = match resolve_href(base_url, href) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!("Skipping unresolvable href: {}", e);
                continue;
            }
        };

        // Non-navigable schemes (javascript:, mailto:, tel:, data:)
        if resolved.scheme() != "http" && resolved.scheme() != "https" {
            continue;
        }

        let resolved = resolved.to_string();

        if let Some(re) = &pattern {
            if !re.is_match(&resolved) {
                continue;
            }
        }

        if seen.insert(resolved.clone()) {
            links.push(resolved);
        }
    }

    links
}

/// Compiles the optional article URL pattern
///
/// Returns `None` both when no pattern is configured and when the configured
/// pattern is invalid, so callers fall back to unfiltered extraction.
fn compile_pattern(url_pattern: Option<&str>) -> Option<Regex> {
    let raw = url_pattern?.trim();
    if raw.is_empty() {
        return None;
    }

    match Regex::new(raw) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(
                "Invalid article URL pattern '{}': {}. Extracting unfiltered.",
                raw,
                e
            );
            None
        }
    }
}
