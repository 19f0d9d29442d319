use std::time::{SystemTime, UNIX_EPOCH};

use ulid::Ulid;

/// Aggregate information carried by an exception, if any.
///
/// Exceptions raised while handling an aggregate are `Aggregate`; consumers
/// use the pair to order them causally with the aggregate's own events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Sequence {
    #[default]
    Plain,
    Aggregate { type_name: String, id: String },
}

impl Sequence {
    pub fn aggregate_root_type_name(&self) -> Option<&str> {
        match self {
            Sequence::Plain => None,
            Sequence::Aggregate { type_name, .. } => Some(type_name.as_str()),
        }
    }

    pub fn aggregate_root_id(&self) -> Option<&str> {
        match self {
            Sequence::Plain => None,
            Sequence::Aggregate { id, .. } => Some(id.as_str()),
        }
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(self, Sequence::Aggregate { .. })
    }
}

/// Identity and routing data shared by every publishable exception.
///
/// Domain exceptions embed one of these and expose it through
/// [`PublishableException::header`](super::PublishableException::header).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExceptionHeader {
    id: String,
    /// Unix epoch milliseconds
    timestamp: i64,
    routing_key: Option<String>,
    sequence: Sequence,
}

impl ExceptionHeader {
    /// Create a header with the given id, stamped with the current time.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            timestamp: now_millis(),
            routing_key: None,
            sequence: Sequence::Plain,
        }
    }

    /// Create a header with a freshly generated ULID id.
    pub fn generate() -> Self {
        Self::new(Ulid::new().to_string())
    }

    pub fn with_timestamp(mut self, timestamp_millis: i64) -> Self {
        self.timestamp = timestamp_millis;
        self
    }

    pub fn with_routing_key(mut self, routing_key: impl Into<String>) -> Self {
        self.routing_key = Some(routing_key.into());
        self
    }

    /// Mark the exception as raised for an aggregate root.
    pub fn sequenced(mut self, type_name: impl Into<String>, id: impl Into<String>) -> Self {
        self.sequence = Sequence::Aggregate {
            type_name: type_name.into(),
            id: id.into(),
        };
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Routing key, with an empty string treated as absent.
    pub fn routing_key(&self) -> Option<&str> {
        self.routing_key.as_deref().filter(|key| !key.is_empty())
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or_default()
}
