//! Integration tests for the crawl pipeline
//!
//! These tests run the full orchestrator over wiremock HTTP servers with the
//! in-memory store and publisher backends, exercising fan-out across
//! sources, aggregation, idempotence across passes, and the cross-source
//! discovery race.

use news_scout::config::{CategoryConfig, SourceConfig};
use news_scout::crawler::{run_crawl, CrawlOptions};
use news_scout::publish::MemoryPublisher;
use news_scout::store::{MemorySeenStore, SeenLinkStore};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_options() -> CrawlOptions {
    CrawlOptions {
        user_agent: "TestAgent/1.0".to_string(),
        request_timeout: Duration::from_secs(5),
        link_delay: Duration::ZERO,
    }
}

fn source(domain: &str, base: &str, categories: Vec<CategoryConfig>) -> SourceConfig {
    SourceConfig {
        domain_name: domain.to_string(),
        base_url: base.to_string(),
        categories,
    }
}

fn category(name: &str, url: String) -> CategoryConfig {
    CategoryConfig {
        name: name.to_string(),
        url,
        article_link_selector: "a.story".to_string(),
        article_url_regex: None,
    }
}

async fn mount_listing(server: &MockServer, page: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_crawl_pass_across_two_sources() {
    let server_a = MockServer::start().await;
    let server_b = MockServer::start().await;

    mount_listing(
        &server_a,
        "/news",
        r#"<a class="story" href="https://alpha.example/one">1</a>
           <a class="story" href="https://alpha.example/two">2</a>"#
            .to_string(),
    )
    .await;
    mount_listing(
        &server_b,
        "/news",
        r#"<a class="story" href="https://beta.example/three">3</a>"#.to_string(),
    )
    .await;

    let sources = vec![
        source(
            "alpha.example",
            &server_a.uri(),
            vec![category("news", format!("{}/news", server_a.uri()))],
        ),
        source(
            "beta.example",
            &server_b.uri(),
            vec![category("news", format!("{}/news", server_b.uri()))],
        ),
    ];

    let store = Arc::new(MemorySeenStore::new());
    let publisher = Arc::new(MemoryPublisher::new());

    let articles = run_crawl(sources, store.clone(), publisher.clone(), &test_options())
        .await
        .unwrap();

    assert_eq!(articles.len(), 3);
    assert_eq!(
        publisher.payloads_for("example_alpha").len(),
        2,
        "alpha links route to the alpha topic"
    );
    assert_eq!(publisher.payloads_for("example_beta").len(), 1);
    assert_eq!(store.len("alpha.example"), 2);
    assert_eq!(store.len("beta.example"), 1);
}

#[tokio::test]
async fn test_second_pass_is_idempotent() {
    let server = MockServer::start().await;
    mount_listing(
        &server,
        "/news",
        r#"<a class="story" href="/a">A</a><a class="story" href="/b">B</a>"#.to_string(),
    )
    .await;

    let sources = || {
        vec![source(
            "site.test",
            &server.uri(),
            vec![category("news", format!("{}/news", server.uri()))],
        )]
    };

    let store = Arc::new(MemorySeenStore::new());
    let publisher = Arc::new(MemoryPublisher::new());

    let first = run_crawl(sources(), store.clone(), publisher.clone(), &test_options())
        .await
        .unwrap();
    let second = run_crawl(sources(), store.clone(), publisher.clone(), &test_options())
        .await
        .unwrap();

    assert_eq!(first.len(), 2);
    assert!(
        second.is_empty(),
        "an unchanged listing page must yield zero new articles on the second pass"
    );
    assert_eq!(publisher.messages().len(), 2, "nothing republished");
}

#[tokio::test]
async fn test_cross_source_discovery_commits_once() {
    // Two sources both link to the same third-domain article. Both workers
    // may publish it (accepted at-least-once race), but the seen set must
    // end with exactly one membership entry and exactly one worker counts it.
    let server_a = MockServer::start().await;
    let server_b = MockServer::start().await;
    let shared = r#"<a class="story" href="https://shared.example/story">S</a>"#;

    mount_listing(&server_a, "/news", shared.to_string()).await;
    mount_listing(&server_b, "/news", shared.to_string()).await;

    let sources = vec![
        source(
            "alpha.example",
            &server_a.uri(),
            vec![category("news", format!("{}/news", server_a.uri()))],
        ),
        source(
            "beta.example",
            &server_b.uri(),
            vec![category("news", format!("{}/news", server_b.uri()))],
        ),
    ];

    let store = Arc::new(MemorySeenStore::new());
    let publisher = Arc::new(MemoryPublisher::new());

    let articles = run_crawl(sources, store.clone(), publisher.clone(), &test_options())
        .await
        .unwrap();

    assert_eq!(store.len("shared.example"), 1, "exactly one membership entry");
    assert_eq!(articles.len(), 1, "exactly one worker wins the commit");

    let published = publisher.payloads_for("example_shared");
    assert!(
        !published.is_empty() && published.len() <= 2,
        "delivered at least once, duplicates tolerated; got {}",
        published.len()
    );
    assert!(
        store
            .is_seen("shared.example", "https://shared.example/story")
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_failing_source_does_not_affect_others() {
    let good = MockServer::start().await;
    mount_listing(
        &good,
        "/news",
        r#"<a class="story" href="/ok">OK</a>"#.to_string(),
    )
    .await;

    let sources = vec![
        // This source's listing page does not exist anywhere.
        source(
            "down.example",
            "http://127.0.0.1:1",
            vec![category("news", "http://127.0.0.1:1/news".to_string())],
        ),
        source(
            "good.example",
            &good.uri(),
            vec![category("news", format!("{}/news", good.uri()))],
        ),
    ];

    let store = Arc::new(MemorySeenStore::new());
    let publisher = Arc::new(MemoryPublisher::new());

    let articles = run_crawl(sources, store, publisher, &test_options())
        .await
        .unwrap();

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].domain, "good.example");
}

#[tokio::test]
async fn test_empty_source_list_yields_empty_report() {
    let store = Arc::new(MemorySeenStore::new());
    let publisher = Arc::new(MemoryPublisher::new());

    let articles = run_crawl(vec![], store, publisher, &test_options())
        .await
        .unwrap();
    assert!(articles.is_empty());
}
