use std::sync::Arc;

use crate::envelope::ExceptionEnvelope;
use crate::error::PublishError;
use crate::exception::PublishableException;
use crate::message::{MessageTypeCode, TransportMessage};
use crate::producer::{Producer, ProducerError, ProducerSetting, SendReceipt};
use crate::resolve::{TopicProvider, TypeNameProvider};
use crate::serializer::{EnvelopeSerializer, JsonSerializer};

use super::SendService;

/// A transport message together with the key it will be routed by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub message: TransportMessage,
    pub routing_key: String,
}

/// Publishes domain exceptions through an owned producer.
///
/// The publisher holds no mutable state of its own: collaborators are
/// shared read-only, and concurrent publishes only meet inside the producer.
///
/// ## Example
///
/// ```ignore
/// let publisher = ExceptionPublisher::new(producer, Arc::new(topics), Arc::new(type_names));
/// publisher.start().await?;
///
/// let receipt = publisher.publish(&order_failed).await?;
/// ```
pub struct ExceptionPublisher<P> {
    producer: P,
    serializer: Arc<dyn EnvelopeSerializer>,
    topics: Arc<dyn TopicProvider>,
    type_names: Arc<dyn TypeNameProvider>,
    send_service: SendService,
}

impl<P: Producer> ExceptionPublisher<P> {
    /// Create a publisher around a producer that has not been started yet.
    pub fn new(
        producer: P,
        topics: Arc<dyn TopicProvider>,
        type_names: Arc<dyn TypeNameProvider>,
    ) -> Self {
        Self {
            producer,
            serializer: Arc::new(JsonSerializer),
            topics,
            type_names,
            send_service: SendService::new(),
        }
    }

    /// Create the producer from a setting (`None` for defaults).
    pub fn from_setting(
        setting: Option<ProducerSetting>,
        topics: Arc<dyn TopicProvider>,
        type_names: Arc<dyn TypeNameProvider>,
    ) -> Self
    where
        P: From<ProducerSetting>,
    {
        Self::new(P::from(setting.unwrap_or_default()), topics, type_names)
    }

    /// Replace the default JSON serializer.
    pub fn with_serializer(mut self, serializer: Arc<dyn EnvelopeSerializer>) -> Self {
        self.serializer = serializer;
        self
    }

    pub fn producer(&self) -> &P {
        &self.producer
    }

    /// Start the producer. Must happen before the first publish.
    pub async fn start(&self) -> Result<&Self, ProducerError> {
        self.producer.start().await?;
        Ok(self)
    }

    pub async fn shutdown(&self) -> Result<&Self, ProducerError> {
        self.producer.shutdown().await?;
        Ok(self)
    }

    /// Build the transport message and routing key for an exception.
    ///
    /// Runs every step short of sending, so any error here means nothing
    /// reached the producer.
    pub fn build_message<E: PublishableException + ?Sized>(
        &self,
        exception: &E,
    ) -> Result<OutgoingMessage, PublishError> {
        if exception.id().is_empty() {
            return Err(PublishError::MissingId);
        }

        let exception_type = exception.exception_type();
        let topic = self
            .topics
            .topic(&exception_type)
            .ok_or_else(|| PublishError::TopicNotFound {
                exception_type: exception_type.rust_name().to_string(),
            })?;

        let envelope = ExceptionEnvelope::from_exception(exception);
        let body = self.serializer.serialize(&envelope)?;

        let tag = self
            .type_names
            .type_name(&exception_type)
            .ok_or_else(|| PublishError::TypeNameNotFound {
                exception_type: exception_type.rust_name().to_string(),
            })?;

        // Fall back to the id so every message still has a stable key.
        let routing_key = exception
            .routing_key()
            .unwrap_or_else(|| exception.id())
            .to_string();

        tracing::debug!(
            %topic,
            %tag,
            %routing_key,
            exception_id = exception.id(),
            "exception message built"
        );

        Ok(OutgoingMessage {
            message: TransportMessage::new(topic, MessageTypeCode::Exception, body, tag),
            routing_key,
        })
    }

    /// Publish an exception.
    ///
    /// Resolution and serialization errors return before anything is sent.
    /// Send errors come from the producer unchanged.
    pub async fn publish<E: PublishableException + ?Sized>(
        &self,
        exception: &E,
    ) -> Result<SendReceipt, PublishError> {
        let OutgoingMessage {
            message,
            routing_key,
        } = self.build_message(exception).map_err(|err| {
            tracing::warn!(
                exception_id = exception.id(),
                stage = ?err.stage(),
                error = %err,
                "exception not published"
            );
            err
        })?;

        let receipt = self
            .send_service
            .send(&self.producer, message, &routing_key)
            .await?;
        Ok(receipt)
    }
}
