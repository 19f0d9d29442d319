//! Publish domain exceptions to a message broker.
//!
//! An [`ExceptionPublisher`] turns a [`PublishableException`] into a
//! [`TransportMessage`]: it resolves the topic from the exception's concrete
//! type, captures the exception in a JSON [`ExceptionEnvelope`], tags the
//! message with a stable type name, picks a routing key, and hands the result
//! to a [`Producer`].

mod envelope;
mod error;
mod exception;
mod message;
mod producer;
mod publisher;
mod resolve;
mod serializer;

pub use envelope::ExceptionEnvelope;
pub use error::{PublishError, PublishStage};
pub use exception::{ExceptionHeader, ExceptionType, PublishableException, Sequence};
pub use message::{MessageTypeCode, TransportMessage};
pub use producer::{
    InMemoryProducer, Producer, ProducerError, ProducerSetting, ProducerState, SendReceipt,
    SentMessage,
};
pub use publisher::{ExceptionPublisher, MessagePublisher, OutgoingMessage, SendService};
pub use resolve::{RegistryError, TopicMap, TopicProvider, TypeNameProvider, TypeNameRegistry};
pub use serializer::{EnvelopeSerializer, JsonSerializer, SerializationError};
