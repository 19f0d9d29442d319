use crate::producer::ProducerError;
use crate::serializer::SerializationError;

/// Step of a publish at which a failure occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PublishStage {
    Validation,
    Resolution,
    Serialization,
    Transport,
}

/// Error type for publish operations.
///
/// Everything except `Send` is raised before the producer is called.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// The exception has an empty unique id.
    #[error("exception has no unique id")]
    MissingId,
    /// No topic is mapped to the exception's type.
    #[error("no topic registered for exception type {exception_type}")]
    TopicNotFound { exception_type: String },
    /// No type name is registered for the exception's type.
    #[error("no type name registered for exception type {exception_type}")]
    TypeNameNotFound { exception_type: String },
    /// The envelope could not be encoded.
    #[error(transparent)]
    Serialization(#[from] SerializationError),
    /// The producer failed to send; carried verbatim.
    #[error("send failed: {0}")]
    Send(#[from] ProducerError),
}

impl PublishError {
    pub fn stage(&self) -> PublishStage {
        match self {
            PublishError::MissingId => PublishStage::Validation,
            PublishError::TopicNotFound { .. } | PublishError::TypeNameNotFound { .. } => {
                PublishStage::Resolution
            }
            PublishError::Serialization(_) => PublishStage::Serialization,
            PublishError::Send(_) => PublishStage::Transport,
        }
    }

    /// True when the producer was not started or already shut down.
    pub fn is_lifecycle(&self) -> bool {
        matches!(self, PublishError::Send(err) if err.is_lifecycle())
    }

    pub fn producer_error(&self) -> Option<&ProducerError> {
        match self {
            PublishError::Send(err) => Some(err),
            _ => None,
        }
    }
}
