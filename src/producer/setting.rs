use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Producer configuration.
///
/// Deserializable so it can sit inside an application's own config file;
/// missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProducerSetting {
    /// Name reported by the producer in logs and receipts.
    pub producer_name: String,
    /// Number of queues (partitions) per topic.
    pub queue_count: u32,
    /// How long a send may wait for broker acknowledgement.
    ///
    /// Read by broker-backed producers; `InMemoryProducer` acknowledges
    /// immediately and ignores it.
    pub send_timeout_ms: u64,
    /// Accept messages for topics that were never declared.
    pub auto_create_topics: bool,
}

impl Default for ProducerSetting {
    fn default() -> Self {
        Self {
            producer_name: "exception-publisher".to_string(),
            queue_count: 4,
            send_timeout_ms: 3000,
            auto_create_topics: true,
        }
    }
}

impl ProducerSetting {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_producer_name(mut self, name: impl Into<String>) -> Self {
        self.producer_name = name.into();
        self
    }

    /// Set the queue count. Zero is clamped to one.
    pub fn with_queue_count(mut self, count: u32) -> Self {
        self.queue_count = count.max(1);
        self
    }

    pub fn with_send_timeout(mut self, timeout: Duration) -> Self {
        self.send_timeout_ms = timeout.as_millis() as u64;
        self
    }

    pub fn with_auto_create_topics(mut self, enabled: bool) -> Self {
        self.auto_create_topics = enabled;
        self
    }

    /// Queue count as used for routing (never zero).
    pub fn effective_queue_count(&self) -> u32 {
        self.queue_count.max(1)
    }

    /// Acknowledgement timeout for producers that talk to a broker.
    pub fn send_timeout(&self) -> Duration {
        Duration::from_millis(self.send_timeout_ms)
    }
}
