use crate::publish::{Publisher, PublishResult};
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory recording publisher
///
/// Appends every published `(topic, payload)` pair to a list instead of
/// talking to a broker. Used by tests and local development runs.
#[derive(Default)]
pub struct MemoryPublisher {
    messages: Mutex<Vec<(String, String)>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages published so far, in publish order
    pub fn messages(&self) -> Vec<(String, String)> {
        self.messages.lock().unwrap().clone()
    }

    /// Payloads published to one topic, in publish order
    pub fn payloads_for(&self, topic: &str) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(t, _)| t == topic)
            .map(|(_, p)| p.clone())
            .collect()
    }
}

#[async_trait]
impl Publisher for MemoryPublisher {
    async fn publish(&self, topic: &str, payload: &str) -> PublishResult<()> {
        self.messages
            .lock()
            .unwrap()
            .push((topic.to_string(), payload.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_messages_in_order() {
        let publisher = MemoryPublisher::new();
        publisher.publish("com_example", "https://example.com/a").await.unwrap();
        publisher.publish("com_example", "https://example.com/b").await.unwrap();
        publisher.publish("example_other", "https://other.example/c").await.unwrap();

        assert_eq!(publisher.messages().len(), 3);
        assert_eq!(
            publisher.payloads_for("com_example"),
            vec!["https://example.com/a", "https://example.com/b"]
        );
        assert_eq!(
            publisher.payloads_for("example_other"),
            vec!["https://other.example/c"]
        );
    }
}
