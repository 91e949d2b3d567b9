//! News-Scout: a news article link discovery crawler
//!
//! This crate crawls the configured listing pages of many news sources
//! concurrently, extracts article links, filters out links that were already
//! delivered, and publishes each newly discovered link to a message-bus topic
//! derived from the link's own host. Deduplication state lives in a
//! per-domain seen-link store, so a link is handed downstream at most once
//! per discovery (at-least-once delivery overall).

pub mod config;
pub mod crawler;
pub mod publish;
pub mod store;
pub mod url;

use thiserror::Error;

/// Main error type for News-Scout operations
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Seen-link store error: {0}")]
    Store(#[from] store::StoreError),

    #[error("Publish error: {0}")]
    Publish(#[from] publish::PublishError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors produced while fetching a listing page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Bad status {status} for {url}")]
    BadStatus { url: String, status: u16 },
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("URL has no host: {0}")]
    MissingHost(String),
}

/// Result type alias for News-Scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::{CategoryConfig, SourceConfig};
pub use crawler::{run_crawl, ArticleMeta, CrawlOptions};
pub use self::url::{domain_and_topic, link_domain, resolve_href, topic_for_host};
