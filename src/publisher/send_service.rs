use crate::message::TransportMessage;
use crate::producer::{Producer, ProducerError, SendReceipt};

/// Hands a message to a producer and logs the outcome.
///
/// The producer's result is returned unchanged: no retry, no suppression.
#[derive(Clone, Copy, Debug, Default)]
pub struct SendService;

impl SendService {
    pub fn new() -> Self {
        Self
    }

    pub async fn send<P: Producer + ?Sized>(
        &self,
        producer: &P,
        message: TransportMessage,
        routing_key: &str,
    ) -> Result<SendReceipt, ProducerError> {
        let topic = message.topic.clone();
        let tag = message.tag.clone();

        match producer.send(message, routing_key).await {
            Ok(receipt) => {
                tracing::debug!(
                    %topic,
                    %tag,
                    routing_key,
                    message_id = %receipt.message_id,
                    queue_id = receipt.queue_id,
                    queue_offset = receipt.queue_offset,
                    "message sent"
                );
                Ok(receipt)
            }
            Err(err) => {
                tracing::error!(%topic, %tag, routing_key, error = %err, "message send failed");
                Err(err)
            }
        }
    }
}
