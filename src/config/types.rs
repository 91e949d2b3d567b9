use serde::Deserialize;

/// Configuration for one news source
///
/// Loaded once at startup and never mutated by the crawler.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Domain name identifying the source (e.g. "example.com")
    #[serde(rename = "domainName")]
    pub domain_name: String,

    /// Base URL used to resolve relative article links
    #[serde(rename = "baseURL")]
    pub base_url: String,

    /// Listing pages to crawl, in configured order
    pub categories: Vec<CategoryConfig>,
}

/// Configuration for one listing page within a source
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryConfig {
    /// Human-readable category name (e.g. "politics")
    pub name: String,

    /// URL of the listing page
    pub url: String,

    /// CSS selector identifying the anchor elements to extract
    #[serde(rename = "articleLinkSelector")]
    pub article_link_selector: String,

    /// Optional regex a resolved article URL must match to be kept
    #[serde(rename = "articleUrlRegex", default)]
    pub article_url_regex: Option<String>,
}
