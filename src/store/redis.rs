use crate::store::{SeenLinkStore, StoreResult};
use async_trait::async_trait;
use redis::AsyncCommands;

/// Redis-backed seen-link store
///
/// Each domain maps to one Redis set under
/// `{prefix}:{domain with dots replaced by underscores}:processed`;
/// membership tests are `SISMEMBER` and marks are `SADD`, whose reply count
/// distinguishes a first add from a duplicate.
#[derive(Clone)]
pub struct RedisSeenStore {
    client: redis::Client,
    key_prefix: String,
}

impl RedisSeenStore {
    /// Connects to Redis and verifies the backend is reachable
    ///
    /// Issues a `PING` so that an unreachable backend fails here, at
    /// startup, rather than on the first link of the first crawl.
    ///
    /// # Arguments
    ///
    /// * `redis_url` - Redis connection URL (e.g. `redis://127.0.0.1:6379`)
    /// * `key_prefix` - Namespace prefix for all seen-set keys
    pub async fn connect(redis_url: &str, key_prefix: &str) -> StoreResult<Self> {
        let client = redis::Client::open(redis_url)?;
        let mut con = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING")
            .query_async::<String>(&mut con)
            .await?;

        Ok(Self {
            client,
            key_prefix: key_prefix.trim_end_matches(':').to_string(),
        })
    }

    /// Builds the set key for a domain
    fn set_key(&self, domain: &str) -> String {
        let safe_domain = domain.replace('.', "_");
        format!("{}:{}:processed", self.key_prefix, safe_domain)
    }
}

#[async_trait]
impl SeenLinkStore for RedisSeenStore {
    async fn is_seen(&self, domain: &str, link: &str) -> StoreResult<bool> {
        let mut con = self.client.get_multiplexed_async_connection().await?;
        let is_member: bool = con.sismember(self.set_key(domain), link).await?;
        Ok(is_member)
    }

    async fn mark_seen(&self, domain: &str, link: &str) -> StoreResult<bool> {
        let mut con = self.client.get_multiplexed_async_connection().await?;
        let added: i64 = con.sadd(self.set_key(domain), link).await?;
        Ok(added > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_key_replaces_dots() {
        let store = RedisSeenStore {
            client: redis::Client::open("redis://127.0.0.1/").unwrap(),
            key_prefix: "article_links".to_string(),
        };
        assert_eq!(
            store.set_key("news.example.com"),
            "article_links:news_example_com:processed"
        );
    }

    #[test]
    fn test_key_prefix_trailing_colon_stripped() {
        let store = RedisSeenStore {
            client: redis::Client::open("redis://127.0.0.1/").unwrap(),
            key_prefix: "article_links:".trim_end_matches(':').to_string(),
        };
        assert_eq!(
            store.set_key("example.com"),
            "article_links:example_com:processed"
        );
    }
}
