use crate::UrlError;
use url::Url;

/// Resolves an anchor href against a base URL into an absolute URL
///
/// Absolute hrefs pass through unchanged; relative and scheme-relative hrefs
/// are joined against the base. Callers are expected to filter the resolved
/// URL by scheme; this function performs no scheme policy of its own.
///
/// # Arguments
///
/// * `base` - The base URL of the source the href was found on
/// * `href` - The raw href attribute value
///
/// # Returns
///
/// * `Ok(Url)` - The resolved absolute URL
/// * `Err(UrlError)` - The href could not be resolved against the base
///
/// # Examples
///
/// ```
/// use news_scout::url::resolve_href;
/// use url::Url;
///
/// let base = Url::parse("https://site.test").unwrap();
/// let resolved = resolve_href(&base, "/a").unwrap();
/// assert_eq!(resolved.as_str(), "https://site.test/a");
///
/// let resolved = resolve_href(&base, "https://other.example/c").unwrap();
/// assert_eq!(resolved.as_str(), "https://other.example/c");
/// ```
pub fn resolve_href(base: &Url, href: &str) -> Result<Url, UrlError> {
    base.join(href.trim())
        .map_err(|e| UrlError::Parse(format!("'{}' against base '{}': {}", href, base, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://site.test").unwrap()
    }

    #[test]
    fn test_root_relative_href() {
        let resolved = resolve_href(&base(), "/a").unwrap();
        assert_eq!(resolved.as_str(), "https://site.test/a");
    }

    #[test]
    fn test_relative_href_joins_base_path() {
        let base = Url::parse("https://site.test/news/").unwrap();
        let resolved = resolve_href(&base, "politics/story-1").unwrap();
        assert_eq!(resolved.as_str(), "https://site.test/news/politics/story-1");
    }

    #[test]
    fn test_absolute_href_passes_through() {
        let resolved = resolve_href(&base(), "https://other.example/c").unwrap();
        assert_eq!(resolved.as_str(), "https://other.example/c");
    }

    #[test]
    fn test_scheme_relative_href() {
        let resolved = resolve_href(&base(), "//cdn.site.test/article").unwrap();
        assert_eq!(resolved.as_str(), "https://cdn.site.test/article");
    }

    #[test]
    fn test_href_with_surrounding_whitespace() {
        let resolved = resolve_href(&base(), "  /a  ").unwrap();
        assert_eq!(resolved.as_str(), "https://site.test/a");
    }

    #[test]
    fn test_query_preserved() {
        let resolved = resolve_href(&base(), "/a?id=7").unwrap();
        assert_eq!(resolved.as_str(), "https://site.test/a?id=7");
    }
}
