//! Crawl orchestration: fan-out across sources, fan-in of new articles
//!
//! The orchestrator spawns one worker task per configured source, all
//! writing into a single bounded aggregation channel, and drains that
//! channel until every worker has finished. It performs no business logic
//! of its own; everything per-link happens inside the workers.

use crate::config::SourceConfig;
use crate::crawler::fetcher::build_http_client;
use crate::crawler::worker::{crawl_source, ArticleMeta};
use crate::publish::Publisher;
use crate::store::SeenLinkStore;
use crate::ScoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Aggregation channel capacity
///
/// Sized so fast workers rarely feel backpressure while keeping memory
/// bounded when the consumer lags.
const AGGREGATION_CAPACITY: usize = 100;

/// Tunables shared by every source worker
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    /// User-Agent sent with every listing-page request
    pub user_agent: String,

    /// Per-request fetch timeout
    pub request_timeout: Duration,

    /// Politeness pause between per-link iterations within a category
    pub link_delay: Duration,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36"
                .to_string(),
            request_timeout: Duration::from_secs(10),
            link_delay: Duration::from_millis(50),
        }
    }
}

/// Runs one full crawl pass over every configured source
///
/// Spawns one worker per source; workers run fully in parallel with no
/// inter-source synchronization beyond the shared store, publisher, and
/// aggregation channel. The channel closes exactly once — when the last
/// worker returns and drops its sender clone (the orchestrator drops its
/// own handle right after fan-out) — and the drain loop ends there.
///
/// # Arguments
///
/// * `sources` - All loaded source configurations
/// * `store` - Seen-link store shared by every worker
/// * `publisher` - Message-bus publisher shared by every worker
/// * `options` - Crawl tunables
///
/// # Returns
///
/// * `Ok(Vec<ArticleMeta>)` - Newly discovered articles in arrival order
///   (interleaving across sources is not deterministic between runs)
/// * `Err(ScoutError)` - Only for setup failures before any worker spawns
pub async fn run_crawl(
    sources: Vec<SourceConfig>,
    store: Arc<dyn SeenLinkStore>,
    publisher: Arc<dyn Publisher>,
    options: &CrawlOptions,
) -> Result<Vec<ArticleMeta>, ScoutError> {
    let client = build_http_client(&options.user_agent, options.request_timeout)?;

    let (tx, mut rx) = mpsc::channel::<ArticleMeta>(AGGREGATION_CAPACITY);
    let mut handles = Vec::with_capacity(sources.len());

    tracing::info!("Starting crawl pass over {} sources", sources.len());

    for source in sources {
        let handle = tokio::spawn(crawl_source(
            source,
            client.clone(),
            Arc::clone(&store),
            Arc::clone(&publisher),
            tx.clone(),
            options.link_delay,
        ));
        handles.push(handle);
    }

    // Only worker clones keep the channel open from here on.
    drop(tx);

    let mut new_articles = Vec::new();
    while let Some(article) = rx.recv().await {
        tracing::info!(
            "-> New article: domain={}, category={}, url={}",
            article.domain,
            article.category,
            article.url
        );
        new_articles.push(article);
    }

    for handle in handles {
        if let Err(e) = handle.await {
            tracing::error!("Source worker panicked: {}", e);
        }
    }

    tracing::info!(
        "Crawl pass complete: {} new articles across all sources",
        new_articles.len()
    );

    Ok(new_articles)
}
