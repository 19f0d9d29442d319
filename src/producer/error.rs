//! Errors reported by a message-broker producer.

use std::error::Error;

/// Error type for producer operations.
///
/// These are surfaced to publish callers verbatim; the publisher never
/// interprets or retries them.
#[derive(Debug, thiserror::Error)]
pub enum ProducerError {
    /// A send was attempted before the producer was started.
    #[error("producer has not been started")]
    NotStarted,
    /// The producer was shut down (sends and restarts are refused).
    #[error("producer has been shut down")]
    ShutDown,
    /// Timeout waiting for the broker to acknowledge the message.
    #[error("send timed out")]
    Timeout,
    /// The broker could not be reached.
    #[error("broker unreachable: {0}")]
    Unreachable(String),
    /// The broker does not know the destination topic.
    #[error("topic does not exist on the broker: {0}")]
    TopicNotExist(String),
    /// The broker rejected the message.
    #[error("message rejected: {0}")]
    Rejected(String),
    /// Other error.
    #[error("producer error: {0}")]
    Other(Box<dyn Error + Send + Sync>),
}

impl ProducerError {
    /// True when the send may succeed if the caller tries again later.
    pub fn is_transient(&self) -> bool {
        matches!(self, ProducerError::Timeout | ProducerError::Unreachable(_))
    }

    /// True when the failure comes from the producer's start/shutdown state
    /// rather than from the broker.
    pub fn is_lifecycle(&self) -> bool {
        matches!(self, ProducerError::NotStarted | ProducerError::ShutDown)
    }

    pub(crate) fn lock_poisoned(what: &'static str) -> Self {
        ProducerError::Other(format!("{} lock poisoned", what).into())
    }
}
