//! Per-source crawl worker and the publish-then-commit protocol
//!
//! One worker runs per configured source. Categories within a source are
//! crawled strictly sequentially; concurrency lives across sources, not
//! inside one. Every per-link and per-category failure is contained here —
//! the worker always runs to completion and reports only through logs,
//! counters, and emitted [`ArticleMeta`] records.
//!
//! # Publish-then-commit
//!
//! For each candidate link the worker checks the seen-link store, publishes
//! to the link's own topic, and only then marks the link as seen. A failed
//! publish leaves the link unmarked so it stays eligible on the next crawl
//! pass; a failed or raced mark after a successful publish is logged but the
//! message is never retracted. Delivery is therefore at-least-once, never
//! at-most-once: the ordering trades a bounded duplicate window for the
//! guarantee that a marked link was delivered.

use crate::config::SourceConfig;
use crate::crawler::extractor::extract_article_links;
use crate::crawler::fetcher::fetch_page;
use crate::publish::Publisher;
use crate::store::SeenLinkStore;
use crate::url::domain_and_topic;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use url::Url;

/// One newly discovered, newly delivered article link
///
/// Created exactly once per link that was both published and committed as a
/// new seen-set member; consumed once by the orchestrator's aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleMeta {
    /// Domain name of the source that discovered the link
    pub domain: String,

    /// Category the link was found under
    pub category: String,

    /// The article URL
    pub url: String,
}

/// Crawls every category of one source
///
/// Fetches each listing page in configured order, extracts candidate links,
/// and runs each through the publish-then-commit protocol. Newly committed
/// links are sent to `tx`; the worker's sender clone dropping on return is
/// what lets the orchestrator's aggregation channel close.
///
/// # Arguments
///
/// * `source` - The source configuration
/// * `client` - Shared HTTP client
/// * `store` - Seen-link store, shared across all workers
/// * `publisher` - Message-bus publisher, shared across all workers
/// * `tx` - Aggregation channel for newly discovered articles
/// * `link_delay` - Politeness pause between per-link iterations
///
/// # Returns
///
/// The number of new articles discovered for this source. Never fails; all
/// errors are contained at link or category scope.
pub async fn crawl_source(
    source: SourceConfig,
    client: Client,
    store: Arc<dyn SeenLinkStore>,
    publisher: Arc<dyn Publisher>,
    tx: mpsc::Sender<ArticleMeta>,
    link_delay: Duration,
) -> usize {
    tracing::info!("[{}] Starting crawl", source.domain_name);

    let base_url = match Url::parse(&source.base_url) {
        Ok(url) => url,
        Err(e) => {
            // Validation rejects this at load time; a worker still must not panic.
            tracing::error!(
                "[{}] Unusable base URL '{}': {}. Skipping source.",
                source.domain_name,
                source.base_url,
                e
            );
            return 0;
        }
    };

    let mut total_new = 0usize;

    for category in &source.categories {
        tracing::info!(
            "[{} - {}] Crawling listing page: {}",
            source.domain_name,
            category.name,
            category.url
        );

        let body = match fetch_page(&client, &category.url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(
                    "[{} - {}] Fetch failed: {}. Skipping category.",
                    source.domain_name,
                    category.name,
                    e
                );
                continue;
            }
        };

        let links = extract_article_links(
            &body,
            &base_url,
            &category.article_link_selector,
            category.article_url_regex.as_deref(),
        );
        tracing::debug!(
            "[{} - {}] Extracted {} candidate links",
            source.domain_name,
            category.name,
            links.len()
        );

        let mut new_in_category = 0usize;

        for link in links {
            if process_link(&source, &category.name, &link, &store, &publisher, &tx).await {
                new_in_category += 1;
                total_new += 1;
            }

            if !link_delay.is_zero() {
                tokio::time::sleep(link_delay).await;
            }
        }

        if new_in_category > 0 {
            tracing::info!(
                "[{} - {}] Category done: {} new articles",
                source.domain_name,
                category.name,
                new_in_category
            );
        } else {
            tracing::info!(
                "[{} - {}] Category done: no new articles",
                source.domain_name,
                category.name
            );
        }
    }

    tracing::info!(
        "[{}] Source done: {} new articles total",
        source.domain_name,
        total_new
    );
    total_new
}

/// Runs one candidate link through publish-then-commit
///
/// Returns `true` only when the link was newly published AND newly
/// committed, which is the only case that emits an [`ArticleMeta`].
async fn process_link(
    source: &SourceConfig,
    category: &str,
    link: &str,
    store: &Arc<dyn SeenLinkStore>,
    publisher: &Arc<dyn Publisher>,
    tx: &mpsc::Sender<ArticleMeta>,
) -> bool {
    // Routing is keyed by the link's own host, not the configuring source:
    // cross-domain links land in the other domain's topic and seen set.
    let (link_domain, topic) = match domain_and_topic(link) {
        Ok(pair) => pair,
        Err(e) => {
            tracing::warn!(
                "[{} - {}] Cannot derive domain/topic for '{}': {}. Skipping link.",
                source.domain_name,
                category,
                link,
                e
            );
            return false;
        }
    };

    // A store error means membership is UNKNOWN — do not publish on unknown.
    let seen = match store.is_seen(&link_domain, link).await {
        Ok(seen) => seen,
        Err(e) => {
            tracing::warn!(
                "[{} - {}] Seen-link store check failed for '{}': {}. Skipping link.",
                source.domain_name,
                category,
                link,
                e
            );
            return false;
        }
    };

    if seen {
        // Expected steady-state case after the first crawl.
        return false;
    }

    tracing::info!(
        "[{} - {}] New link: {} (domain: {}, topic: {})",
        source.domain_name,
        category,
        link,
        link_domain,
        topic
    );

    if let Err(e) = publisher.publish(&topic, link).await {
        // Not marked seen, so the link stays eligible on the next pass.
        tracing::warn!(
            "[{} - {}] Publish failed for '{}': {}. Link left unmarked for retry.",
            source.domain_name,
            category,
            link,
            e
        );
        return false;
    }

    match store.mark_seen(&link_domain, link).await {
        Ok(true) => {
            let meta = ArticleMeta {
                domain: source.domain_name.clone(),
                category: category.to_string(),
                url: link.to_string(),
            };
            if tx.send(meta).await.is_err() {
                tracing::debug!("Aggregation channel closed; article record dropped");
            }
            true
        }
        Ok(false) => {
            // Raced with another worker or a prior run. The message is
            // already on the bus and is never retracted: at-least-once.
            tracing::warn!(
                "[{} - {}] Link '{}' was marked seen by someone else after we published it",
                source.domain_name,
                category,
                link
            );
            false
        }
        Err(e) => {
            tracing::warn!(
                "[{} - {}] Failed to mark '{}' as seen: {}. Message was already published.",
                source.domain_name,
                category,
                link,
                e
            );
            false
        }
    }
}
