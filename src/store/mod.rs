//! Seen-link store: per-domain persistent membership sets
//!
//! The store answers "has this link been delivered before" and "atomically
//! record it as delivered", both keyed by the link's own domain. Membership
//! is monotonic: once a link is present it is never removed by this system
//! (no TTL, no eviction; operational purges happen outside the crawler).
//!
//! Keys are partitioned into one set per domain so backend pressure on one
//! domain never blocks membership operations for another.

mod memory;
mod redis;

pub use self::memory::MemorySeenStore;
pub use self::redis::RedisSeenStore;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during seen-link store operations
///
/// Every failure collapses to "the backend could not answer". Callers must
/// treat an error from `is_seen` as *unknown* membership — never as "not
/// seen" — and must not publish a link whose membership is unknown.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("seen-link store unavailable: {0}")]
    Unavailable(String),
}

impl From<::redis::RedisError> for StoreError {
    fn from(e: ::redis::RedisError) -> Self {
        StoreError::Unavailable(e.to_string())
    }
}

/// Result type for seen-link store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Trait for seen-link store backends
///
/// Implementations must be safe to share across concurrent source workers;
/// multiple workers may race on the same domain key when two configured
/// sources link to each other's articles.
#[async_trait]
pub trait SeenLinkStore: Send + Sync {
    /// Tests whether `link` is already in the set for `domain`
    async fn is_seen(&self, domain: &str, link: &str) -> StoreResult<bool>;

    /// Adds `link` to the set for `domain`
    ///
    /// Returns `true` iff this call caused the link to transition from
    /// absent to present, i.e. it was the first to add it. A `false` return
    /// means another worker or a prior run got there first.
    async fn mark_seen(&self, domain: &str, link: &str) -> StoreResult<bool>;

    /// Atomic check-and-add
    ///
    /// Equivalent to an `is_seen`/`mark_seen` pair but as a single atomic
    /// add whose return value says whether the link was new. This is the
    /// safe primitive whenever no publish step has to happen between the
    /// check and the mark. For set backends it is the same wire operation
    /// as `mark_seen`, hence the default implementation.
    async fn add_if_absent(&self, domain: &str, link: &str) -> StoreResult<bool> {
        self.mark_seen(domain, link).await
    }
}
