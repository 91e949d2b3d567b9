use crate::UrlError;
use url::Url;

/// Extracts the seen-set domain for a link
///
/// The domain is the link's own lowercase host with a single leading `www.`
/// stripped. The seen-link store and the routing topic are both keyed by
/// this value, so a link discovered by one source but pointing at another
/// domain is deduplicated and routed under its own domain.
///
/// # Examples
///
/// ```
/// use news_scout::url::link_domain;
///
/// assert_eq!(link_domain("https://www.example.com/a").unwrap(), "example.com");
/// assert_eq!(link_domain("https://news.example.com/a").unwrap(), "news.example.com");
/// ```
pub fn link_domain(link: &str) -> Result<String, UrlError> {
    let parsed = Url::parse(link).map_err(|e| UrlError::Parse(format!("'{}': {}", link, e)))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| UrlError::MissingHost(link.to_string()))?;
    let host = host.to_lowercase();
    Ok(host.strip_prefix("www.").unwrap_or(&host).to_string())
}

/// Derives the message-bus topic name for a host
///
/// The topic is the reversed sequence of domain labels joined by underscores,
/// with hyphens also replaced by underscores:
/// `example.com` → `com_example`, `news.co.uk` → `uk_co_news`.
pub fn topic_for_host(domain: &str) -> String {
    let mut parts: Vec<&str> = domain.split('.').collect();
    parts.reverse();
    parts.join("_").replace('-', "_")
}

/// Derives both the seen-set domain and the routing topic for a link
///
/// # Arguments
///
/// * `link` - An absolute article URL
///
/// # Returns
///
/// * `Ok((domain, topic))` - The link's own domain and its topic name
/// * `Err(UrlError)` - The link is unparsable or has no host
pub fn domain_and_topic(link: &str) -> Result<(String, String), UrlError> {
    let domain = link_domain(link)?;
    let topic = topic_for_host(&domain);
    Ok((domain, topic))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_strips_www() {
        assert_eq!(
            link_domain("https://www.example.com/a").unwrap(),
            "example.com"
        );
    }

    #[test]
    fn test_domain_keeps_subdomain() {
        assert_eq!(
            link_domain("https://sports.example.com/a").unwrap(),
            "sports.example.com"
        );
    }

    #[test]
    fn test_topic_reverses_labels() {
        assert_eq!(topic_for_host("example.com"), "com_example");
    }

    #[test]
    fn test_topic_multi_label() {
        assert_eq!(topic_for_host("news.bbc.co.uk"), "uk_co_bbc_news");
    }

    #[test]
    fn test_topic_replaces_hyphens() {
        assert_eq!(topic_for_host("my-paper.com"), "com_my_paper");
    }

    #[test]
    fn test_domain_and_topic_for_link() {
        let (domain, topic) = domain_and_topic("https://www.example.com/a").unwrap();
        assert_eq!(domain, "example.com");
        assert_eq!(topic, "com_example");
    }

    #[test]
    fn test_topic_independent_of_path() {
        let (_, topic) = domain_and_topic("https://other.example/c?id=1").unwrap();
        assert_eq!(topic, "example_other");
    }

    #[test]
    fn test_missing_host_is_error() {
        let result = link_domain("mailto:editor@example.com");
        assert!(matches!(result, Err(UrlError::MissingHost(_))));
    }

    #[test]
    fn test_unparsable_link_is_error() {
        let result = link_domain("not a url");
        assert!(matches!(result, Err(UrlError::Parse(_))));
    }
}
