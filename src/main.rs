//! News-Scout main entry point
//!
//! Loads the per-source JSON configs, connects the seen-link store and the
//! message-bus producer, runs one crawl pass over every source, and prints a
//! summary of the newly discovered articles. Startup failures (unreadable
//! sources directory, unreachable store, producer setup) abort before any
//! worker spawns; everything after that is contained per link/category and
//! the process exits 0.

use clap::Parser;
use news_scout::config::load_all_sources;
use news_scout::crawler::{run_crawl, CrawlOptions};
use news_scout::publish::KafkaPublisher;
use news_scout::store::RedisSeenStore;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// News-Scout: a news article link discovery crawler
///
/// Crawls the configured listing pages of every source in the sources
/// directory, publishes each newly discovered article link to the Kafka
/// topic of the link's own domain, and records it in Redis so the next
/// pass skips it.
#[derive(Parser, Debug)]
#[command(name = "news-scout")]
#[command(version = "1.0.0")]
#[command(about = "A news article link discovery crawler", long_about = None)]
struct Cli {
    /// Directory of per-source JSON configuration files
    #[arg(value_name = "SOURCES_DIR", default_value = "sources")]
    sources_dir: PathBuf,

    /// Redis connection URL for the seen-link store
    #[arg(long, default_value = "redis://127.0.0.1:6379")]
    redis_url: String,

    /// Key prefix for the per-domain seen sets
    #[arg(long, default_value = "article_links")]
    key_prefix: String,

    /// Kafka bootstrap broker list
    #[arg(long, default_value = "localhost:9092")]
    kafka_brokers: String,

    /// Per-request fetch timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Politeness delay between links within a category, in milliseconds
    #[arg(long, default_value_t = 50)]
    link_delay_ms: u64,

    /// User-Agent header sent with every listing-page request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate configuration and show what would be crawled, without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading sources from: {}", cli.sources_dir.display());
    let sources = load_all_sources(&cli.sources_dir)?;

    if sources.is_empty() {
        tracing::info!(
            "No source configs found in '{}'. Nothing to crawl.",
            cli.sources_dir.display()
        );
        return Ok(());
    }
    tracing::info!("Loaded {} source configs", sources.len());

    if cli.dry_run {
        print_dry_run(&sources);
        return Ok(());
    }

    // Startup wiring is the only fatal territory: an unreachable store or a
    // failed producer setup aborts before any worker spawns.
    let store = RedisSeenStore::connect(&cli.redis_url, &cli.key_prefix).await?;
    tracing::info!("Connected to seen-link store at {}", cli.redis_url);

    let publisher = KafkaPublisher::new(&cli.kafka_brokers, Duration::from_secs(10))?;
    tracing::info!("Kafka producer ready for brokers {}", cli.kafka_brokers);

    let options = CrawlOptions {
        user_agent: cli.user_agent,
        request_timeout: Duration::from_secs(cli.timeout),
        link_delay: Duration::from_millis(cli.link_delay_ms),
    };

    let new_articles = run_crawl(sources, Arc::new(store), Arc::new(publisher), &options).await?;

    if new_articles.is_empty() {
        println!("No new articles discovered in this pass.");
    } else {
        println!("\n--- NEW ARTICLES ({}) ---", new_articles.len());
        for (i, article) in new_articles.iter().enumerate() {
            println!(
                "{}. Domain: {}, Category: {}, URL: {}",
                i + 1,
                article.domain,
                article.category,
                article.url
            );
        }
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("news_scout=info,warn"),
            1 => EnvFilter::new("news_scout=debug,info"),
            2 => EnvFilter::new("news_scout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Prints what a crawl pass would cover, without fetching anything
fn print_dry_run(sources: &[news_scout::SourceConfig]) {
    println!("=== News-Scout Dry Run ===\n");

    for source in sources {
        println!("{} (base: {})", source.domain_name, source.base_url);
        for category in &source.categories {
            println!("  - {}: {}", category.name, category.url);
            println!("    selector: {}", category.article_link_selector);
            if let Some(pattern) = &category.article_url_regex {
                println!("    url pattern: {}", pattern);
            }
        }
    }

    let category_count: usize = sources.iter().map(|s| s.categories.len()).sum();
    println!(
        "\n✓ {} sources, {} listing pages would be crawled",
        sources.len(),
        category_count
    );
}
