//! Transport-level message handed to the producer.

/// Kind of payload carried by a transport message.
///
/// Several message kinds share one transport; consumers branch on the code
/// before decoding the body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum MessageTypeCode {
    Command = 1,
    DomainEventStream = 2,
    Exception = 3,
    Application = 4,
}

impl MessageTypeCode {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(MessageTypeCode::Command),
            2 => Some(MessageTypeCode::DomainEventStream),
            3 => Some(MessageTypeCode::Exception),
            4 => Some(MessageTypeCode::Application),
            _ => None,
        }
    }
}

/// A message ready to be sent to a topic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportMessage {
    /// Destination topic
    pub topic: String,
    /// Message kind, see [`MessageTypeCode`]
    pub code: i32,
    /// Serialized payload (UTF-8 JSON for exception messages)
    pub body: Vec<u8>,
    /// Concrete type tag used by consumers for polymorphic decoding
    pub tag: String,
}

impl TransportMessage {
    pub fn new(
        topic: impl Into<String>,
        code: MessageTypeCode,
        body: Vec<u8>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            topic: topic.into(),
            code: code.code(),
            body,
            tag: tag.into(),
        }
    }

    pub fn type_code(&self) -> Option<MessageTypeCode> {
        MessageTypeCode::from_code(self.code)
    }

    /// Get the body as a string (if valid UTF-8).
    pub fn body_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}
