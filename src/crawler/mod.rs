//! Crawler module for listing-page fetching and link discovery
//!
//! This module contains the core crawl pipeline:
//! - HTTP fetching of configured listing pages
//! - Article link extraction (selector + optional URL pattern)
//! - The per-source worker running the publish-then-commit protocol
//! - The orchestrator fanning out one worker per source

mod coordinator;
mod extractor;
mod fetcher;
mod worker;

pub use coordinator::{run_crawl, CrawlOptions};
pub use extractor::extract_article_links;
pub use fetcher::{build_http_client, fetch_page};
pub use worker::{crawl_source, ArticleMeta};
