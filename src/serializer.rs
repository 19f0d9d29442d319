//! Envelope serialization.

use crate::envelope::ExceptionEnvelope;

#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    #[error("failed to encode envelope: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode envelope: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("envelope body is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("{0}")]
    Other(String),
}

/// Turns envelopes into message bodies and back.
///
/// `deserialize` is not used when publishing; it exists so consumers and
/// tests decode with the same format the publisher writes.
pub trait EnvelopeSerializer: Send + Sync {
    fn serialize(&self, envelope: &ExceptionEnvelope) -> Result<Vec<u8>, SerializationError>;

    fn deserialize(&self, bytes: &[u8]) -> Result<ExceptionEnvelope, SerializationError>;
}

/// UTF-8 JSON serializer.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonSerializer;

impl EnvelopeSerializer for JsonSerializer {
    fn serialize(&self, envelope: &ExceptionEnvelope) -> Result<Vec<u8>, SerializationError> {
        serde_json::to_vec(envelope).map_err(SerializationError::Encode)
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<ExceptionEnvelope, SerializationError> {
        let text = std::str::from_utf8(bytes)?;
        serde_json::from_str(text).map_err(SerializationError::Decode)
    }
}
