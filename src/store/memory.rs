use crate::store::{SeenLinkStore, StoreResult};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// In-memory seen-link store
///
/// Keeps one `HashSet` per domain behind a mutex. Used by tests and local
/// development runs where no Redis backend is available; membership does not
/// survive the process.
#[derive(Default)]
pub struct MemorySeenStore {
    sets: Mutex<HashMap<String, HashSet<String>>>,
}

impl MemorySeenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of links recorded for a domain
    pub fn len(&self, domain: &str) -> usize {
        self.sets
            .lock()
            .unwrap()
            .get(domain)
            .map_or(0, |set| set.len())
    }

    /// True when no link has been recorded for any domain
    pub fn is_empty(&self) -> bool {
        self.sets.lock().unwrap().values().all(|set| set.is_empty())
    }
}

#[async_trait]
impl SeenLinkStore for MemorySeenStore {
    async fn is_seen(&self, domain: &str, link: &str) -> StoreResult<bool> {
        let sets = self.sets.lock().unwrap();
        Ok(sets.get(domain).is_some_and(|set| set.contains(link)))
    }

    async fn mark_seen(&self, domain: &str, link: &str) -> StoreResult<bool> {
        let mut sets = self.sets.lock().unwrap();
        Ok(sets
            .entry(domain.to_string())
            .or_default()
            .insert(link.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unseen_link_is_not_seen() {
        let store = MemorySeenStore::new();
        assert!(!store.is_seen("example.com", "https://example.com/a").await.unwrap());
    }

    #[tokio::test]
    async fn test_is_seen_after_mark_seen() {
        let store = MemorySeenStore::new();
        assert!(store.mark_seen("example.com", "https://example.com/a").await.unwrap());
        assert!(store.is_seen("example.com", "https://example.com/a").await.unwrap());
    }

    #[tokio::test]
    async fn test_second_mark_returns_false() {
        let store = MemorySeenStore::new();
        assert!(store.mark_seen("example.com", "https://example.com/a").await.unwrap());
        assert!(!store.mark_seen("example.com", "https://example.com/a").await.unwrap());
    }

    #[tokio::test]
    async fn test_add_if_absent_matches_mark_seen() {
        let store = MemorySeenStore::new();
        assert!(store.add_if_absent("example.com", "https://example.com/a").await.unwrap());
        assert!(!store.add_if_absent("example.com", "https://example.com/a").await.unwrap());
        assert!(store.is_seen("example.com", "https://example.com/a").await.unwrap());
    }

    #[tokio::test]
    async fn test_domains_are_partitioned() {
        let store = MemorySeenStore::new();
        store.mark_seen("a.com", "https://a.com/x").await.unwrap();
        assert!(!store.is_seen("b.com", "https://a.com/x").await.unwrap());
        assert_eq!(store.len("a.com"), 1);
        assert_eq!(store.len("b.com"), 0);
    }
}
