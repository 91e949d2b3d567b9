use crate::config::types::SourceConfig;
use crate::ConfigError;
use url::Url;

/// Validates a loaded source configuration
///
/// Checks that the source identifies a domain, that its base URL and every
/// category URL parse as http(s) URLs, and that each category carries a
/// selector. The article URL regex is deliberately NOT validated here: an
/// invalid pattern is a recoverable defect handled at extraction time by
/// degrading to unfiltered extraction.
///
/// # Arguments
///
/// * `source` - The source configuration to validate
///
/// # Returns
///
/// * `Ok(())` - The configuration is structurally sound
/// * `Err(ConfigError)` - A description of the first problem found
pub fn validate(source: &SourceConfig) -> Result<(), ConfigError> {
    if source.domain_name.trim().is_empty() {
        return Err(ConfigError::Validation(
            "source is missing a domainName".to_string(),
        ));
    }

    validate_http_url(&source.base_url)?;

    if source.categories.is_empty() {
        return Err(ConfigError::Validation(format!(
            "source '{}' has no categories",
            source.domain_name
        )));
    }

    for category in &source.categories {
        if category.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "source '{}' has a category with no name",
                source.domain_name
            )));
        }

        validate_http_url(&category.url)?;

        if category.article_link_selector.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "category '{}' of source '{}' has an empty articleLinkSelector",
                category.name, source.domain_name
            )));
        }
    }

    Ok(())
}

/// Checks that a string parses as an absolute http(s) URL
fn validate_http_url(raw: &str) -> Result<(), ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(format!("'{}': {}", raw, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "'{}': only http and https URLs are supported",
            raw
        )));
    }

    Ok(())
}
