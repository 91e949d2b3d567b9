//! Publisher: durable delivery of discovered links to the message bus
//!
//! A publish call resolves only once the bus acknowledges durable receipt of
//! the message, never on local buffering alone. From the crawler's point of
//! view a publish is a single all-or-nothing attempt; any retrying inside
//! the backend happens within that attempt's budget.

mod kafka;
mod memory;

pub use kafka::KafkaPublisher;
pub use memory::MemoryPublisher;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while publishing
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to create producer: {0}")]
    Init(String),

    #[error("publish to topic '{topic}' failed: {reason}")]
    Failed { topic: String, reason: String },
}

/// Result type for publish operations
pub type PublishResult<T> = Result<T, PublishError>;

/// Trait for message-bus publisher backends
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publishes `payload` to `topic`, blocking until the bus acknowledges
    /// durable receipt or the backend's retry budget is exhausted
    async fn publish(&self, topic: &str, payload: &str) -> PublishResult<()>;
}
