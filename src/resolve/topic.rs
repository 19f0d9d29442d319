use std::collections::HashMap;

use crate::exception::{ExceptionType, PublishableException};

/// Maps an exception type to its destination topic.
pub trait TopicProvider: Send + Sync {
    /// Topic for the type, or `None` when the type is unmapped.
    fn topic(&self, exception_type: &ExceptionType) -> Option<String>;
}

/// Topic lookup table keyed by concrete exception type.
#[derive(Clone, Debug, Default)]
pub struct TopicMap {
    topics: HashMap<ExceptionType, String>,
}

impl TopicMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `E` to a topic, replacing any earlier mapping.
    pub fn register<E: PublishableException>(&mut self, topic: impl Into<String>) -> &mut Self {
        self.topics.insert(ExceptionType::of::<E>(), topic.into());
        self
    }

    pub fn with_topic<E: PublishableException>(mut self, topic: impl Into<String>) -> Self {
        self.register::<E>(topic);
        self
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

impl TopicProvider for TopicMap {
    fn topic(&self, exception_type: &ExceptionType) -> Option<String> {
        self.topics.get(exception_type).cloned()
    }
}
