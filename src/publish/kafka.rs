use crate::publish::{PublishError, Publisher, PublishResult};
use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::producer::{FutureProducer, FutureRecord};
use rdkafka::util::Timeout;
use std::time::Duration;

/// Kafka-backed publisher
///
/// Configured with `acks=all` so a publish only resolves once every in-sync
/// replica has the message. Broker-side retries stay inside
/// `message.timeout.ms`; when that budget runs out the send resolves as a
/// single failed attempt.
#[derive(Clone)]
pub struct KafkaPublisher {
    producer: FutureProducer,
    delivery_timeout: Duration,
}

impl KafkaPublisher {
    /// Creates a producer connected to the given brokers
    ///
    /// # Arguments
    ///
    /// * `brokers` - Comma-separated broker list (e.g. `localhost:9092`)
    /// * `delivery_timeout` - Upper bound on one publish attempt, including
    ///   the backend's internal retries
    pub fn new(brokers: &str, delivery_timeout: Duration) -> PublishResult<Self> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("acks", "all")
            .set("retries", "5")
            .set(
                "message.timeout.ms",
                delivery_timeout.as_millis().to_string(),
            )
            .create()
            .map_err(|e| PublishError::Init(e.to_string()))?;

        Ok(Self {
            producer,
            delivery_timeout,
        })
    }
}

#[async_trait]
impl Publisher for KafkaPublisher {
    async fn publish(&self, topic: &str, payload: &str) -> PublishResult<()> {
        let record: FutureRecord<'_, (), str> = FutureRecord::to(topic).payload(payload);

        match self
            .producer
            .send(record, Timeout::After(self.delivery_timeout))
            .await
        {
            Ok(_) => Ok(()),
            Err((e, _message)) => Err(PublishError::Failed {
                topic: topic.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}
