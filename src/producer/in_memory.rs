//! In-memory producer for testing and single-process scenarios.
//!
//! Implements the full `Producer` lifecycle without a broker, useful for:
//! - Unit and integration testing without external dependencies
//! - Single-process applications that consume their own exceptions
//! - Development and prototyping

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, RwLock};

use ulid::Ulid;

use super::{Producer, ProducerError, ProducerSetting, SendReceipt};
use crate::message::TransportMessage;

/// Lifecycle state of an [`InMemoryProducer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProducerState {
    #[default]
    Created,
    Running,
    Shutdown,
}

/// A message accepted by the in-memory producer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentMessage {
    pub message: TransportMessage,
    pub routing_key: String,
    pub receipt: SendReceipt,
}

/// In-memory producer.
///
/// Features:
/// - Cloneable; clones share the same state and log
/// - Routing keys map to queues by FNV-1a, so one key lands on the same
///   queue across processes and builds
/// - Offsets grow per (topic, queue)
/// - Optional topic whitelist when `auto_create_topics` is off
///
/// ## Example
///
/// ```
/// use exception_publisher::{InMemoryProducer, MessageTypeCode, Producer, TransportMessage};
///
/// # tokio_test_block(async {
/// let producer = InMemoryProducer::new();
/// producer.start().await.unwrap();
///
/// let message = TransportMessage::new("exceptions", MessageTypeCode::Exception, b"{}".to_vec(), "OrderFailed");
/// let receipt = producer.send(message, "order-1").await.unwrap();
/// assert_eq!(receipt.queue_offset, 0);
/// assert_eq!(producer.len(), 1);
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Runtime::new().unwrap().block_on(f)
/// # }
/// ```
#[derive(Clone)]
pub struct InMemoryProducer {
    setting: ProducerSetting,
    state: Arc<Mutex<ProducerState>>,
    /// Topics declared up front (only consulted when auto-create is off)
    topics: Arc<RwLock<HashSet<String>>>,
    /// Next offset per (topic, queue)
    offsets: Arc<Mutex<HashMap<(String, u32), u64>>>,
    log: Arc<RwLock<Vec<SentMessage>>>,
}

impl Default for InMemoryProducer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ProducerSetting> for InMemoryProducer {
    fn from(setting: ProducerSetting) -> Self {
        Self::with_setting(setting)
    }
}

impl InMemoryProducer {
    /// Create a producer with the default setting.
    pub fn new() -> Self {
        Self::with_setting(ProducerSetting::default())
    }

    pub fn with_setting(setting: ProducerSetting) -> Self {
        Self {
            setting,
            state: Arc::new(Mutex::new(ProducerState::Created)),
            topics: Arc::new(RwLock::new(HashSet::new())),
            offsets: Arc::new(Mutex::new(HashMap::new())),
            log: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Declare a topic on the in-memory broker.
    pub fn with_topic(self, topic: impl Into<String>) -> Self {
        self.topics
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(topic.into());
        self
    }

    pub fn setting(&self) -> &ProducerSetting {
        &self.setting
    }

    pub fn state(&self) -> ProducerState {
        *self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Queue a routing key maps to: FNV-1a of the key modulo the queue count.
    pub fn select_queue(&self, routing_key: &str) -> u32 {
        (fnv1a(routing_key.as_bytes()) % u64::from(self.setting.effective_queue_count())) as u32
    }

    /// Get all accepted messages in send order.
    pub fn sent(&self) -> Vec<SentMessage> {
        self.log
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Get all accepted messages for one topic.
    pub fn sent_to(&self, topic: &str) -> Vec<SentMessage> {
        self.log
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .filter(|sent| sent.message.topic == topic)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.log
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn topic_exists(&self, topic: &str) -> Result<bool, ProducerError> {
        if self.setting.auto_create_topics {
            return Ok(true);
        }
        let topics = self
            .topics
            .read()
            .map_err(|_| ProducerError::lock_poisoned("topic"))?;
        Ok(topics.contains(topic))
    }
}

fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    bytes.iter().fold(OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(PRIME)
    })
}

#[async_trait::async_trait]
impl Producer for InMemoryProducer {
    async fn start(&self) -> Result<(), ProducerError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| ProducerError::lock_poisoned("state"))?;
        match *state {
            ProducerState::Created => {
                *state = ProducerState::Running;
                tracing::info!(producer = %self.setting.producer_name, "producer started");
                Ok(())
            }
            ProducerState::Running => Ok(()),
            ProducerState::Shutdown => Err(ProducerError::ShutDown),
        }
    }

    async fn shutdown(&self) -> Result<(), ProducerError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| ProducerError::lock_poisoned("state"))?;
        if *state != ProducerState::Shutdown {
            *state = ProducerState::Shutdown;
            tracing::info!(producer = %self.setting.producer_name, "producer shut down");
        }
        Ok(())
    }

    async fn send(
        &self,
        message: TransportMessage,
        routing_key: &str,
    ) -> Result<SendReceipt, ProducerError> {
        // Held until the message is logged, so a concurrent shutdown either
        // precedes the send entirely or waits for it.
        let state = self
            .state
            .lock()
            .map_err(|_| ProducerError::lock_poisoned("state"))?;
        match *state {
            ProducerState::Created => return Err(ProducerError::NotStarted),
            ProducerState::Shutdown => return Err(ProducerError::ShutDown),
            ProducerState::Running => {}
        }
        if !self.topic_exists(&message.topic)? {
            return Err(ProducerError::TopicNotExist(message.topic));
        }

        let queue_id = self.select_queue(routing_key);
        let queue_offset = {
            let mut offsets = self
                .offsets
                .lock()
                .map_err(|_| ProducerError::lock_poisoned("offset"))?;
            let next = offsets.entry((message.topic.clone(), queue_id)).or_insert(0);
            let offset = *next;
            *next += 1;
            offset
        };

        let receipt = SendReceipt {
            message_id: Ulid::new().to_string(),
            topic: message.topic.clone(),
            routing_key: routing_key.to_string(),
            queue_id,
            queue_offset,
        };
        self.log
            .write()
            .map_err(|_| ProducerError::lock_poisoned("sent log"))?
            .push(SentMessage {
                message,
                routing_key: routing_key.to_string(),
                receipt: receipt.clone(),
            });
        drop(state);
        Ok(receipt)
    }
}
