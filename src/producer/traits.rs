use crate::message::TransportMessage;

use super::ProducerError;

/// Broker acknowledgement for a sent message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SendReceipt {
    /// Broker-assigned message id
    pub message_id: String,
    pub topic: String,
    pub routing_key: String,
    /// Queue (partition) the routing key was mapped to
    pub queue_id: u32,
    /// Position of the message within its queue
    pub queue_offset: u64,
}

/// A message-broker producer.
///
/// Connection management, partitioning, acknowledgement and transport-level
/// retries all live behind this trait. Implementations must be safe for
/// concurrent sends from many tasks.
///
/// Implementations might include:
/// - `InMemoryProducer` - For testing and single-process scenarios
/// - a Kafka, NATS or RabbitMQ client
#[async_trait::async_trait]
pub trait Producer: Send + Sync {
    /// Start the producer. Behaviour of a second call is producer-defined.
    async fn start(&self) -> Result<(), ProducerError>;

    /// Stop the producer and release its resources.
    async fn shutdown(&self) -> Result<(), ProducerError>;

    /// Send a message; messages sharing a routing key land on the same queue.
    async fn send(
        &self,
        message: TransportMessage,
        routing_key: &str,
    ) -> Result<SendReceipt, ProducerError>;
}
