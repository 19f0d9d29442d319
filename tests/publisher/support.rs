//! Test domain: order exceptions and a scriptable producer.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use exception_publisher::{
    ExceptionHeader, ExceptionPublisher, InMemoryProducer, Producer, ProducerError,
    PublishableException, SendReceipt, TopicMap, TransportMessage, TypeNameRegistry,
};

/// An order could not be completed.
pub struct OrderFailed {
    pub header: ExceptionHeader,
    pub reason: String,
}

impl OrderFailed {
    pub fn new(header: ExceptionHeader) -> Self {
        Self {
            header,
            reason: "out of stock".to_string(),
        }
    }
}

impl PublishableException for OrderFailed {
    fn header(&self) -> &ExceptionHeader {
        &self.header
    }

    fn serialize_to(&self, info: &mut HashMap<String, String>) {
        info.insert("Reason".to_string(), self.reason.clone());
    }
}

/// A payment was declined; carries the amount and the card network.
pub struct PaymentDeclined {
    pub header: ExceptionHeader,
    pub amount: u64,
    pub network: String,
}

impl PublishableException for PaymentDeclined {
    fn header(&self) -> &ExceptionHeader {
        &self.header
    }

    fn serialize_to(&self, info: &mut HashMap<String, String>) {
        info.insert("Amount".to_string(), self.amount.to_string());
        info.insert("Network".to_string(), self.network.clone());
    }
}

/// Never given a topic.
pub struct ShippingDelayed {
    pub header: ExceptionHeader,
}

impl PublishableException for ShippingDelayed {
    fn header(&self) -> &ExceptionHeader {
        &self.header
    }

    fn serialize_to(&self, _info: &mut HashMap<String, String>) {}
}

pub fn topics() -> TopicMap {
    TopicMap::new()
        .with_topic::<OrderFailed>("exceptions.order")
        .with_topic::<PaymentDeclined>("exceptions.payment")
}

pub fn type_names() -> TypeNameRegistry {
    TypeNameRegistry::new()
        .with_type::<OrderFailed>("OrderFailed")
        .and_then(|registry| registry.with_type::<PaymentDeclined>("PaymentDeclined"))
        .and_then(|registry| registry.with_type::<ShippingDelayed>("ShippingDelayed"))
        .unwrap()
}

pub fn publisher_with<P: Producer>(producer: P) -> ExceptionPublisher<P> {
    ExceptionPublisher::new(producer, Arc::new(topics()), Arc::new(type_names()))
}

/// Publisher over an already started in-memory producer.
pub async fn started_publisher() -> ExceptionPublisher<InMemoryProducer> {
    let publisher = publisher_with(InMemoryProducer::new());
    publisher.start().await.unwrap();
    publisher
}

/// Producer that records every call and fails sends on request.
#[derive(Clone, Default)]
pub struct ScriptedProducer {
    pub sends: Arc<AtomicUsize>,
    pub received: Arc<Mutex<Vec<(TransportMessage, String)>>>,
    pub failure: Arc<Mutex<Option<fn() -> ProducerError>>>,
}

impl ScriptedProducer {
    pub fn failing(make_error: fn() -> ProducerError) -> Self {
        let producer = Self::default();
        *producer.failure.lock().unwrap() = Some(make_error);
        producer
    }

    pub fn send_count(&self) -> usize {
        self.sends.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Producer for ScriptedProducer {
    async fn start(&self) -> Result<(), ProducerError> {
        Ok(())
    }

    async fn shutdown(&self) -> Result<(), ProducerError> {
        Ok(())
    }

    async fn send(
        &self,
        message: TransportMessage,
        routing_key: &str,
    ) -> Result<SendReceipt, ProducerError> {
        self.sends.fetch_add(1, Ordering::SeqCst);
        if let Some(make_error) = *self.failure.lock().unwrap() {
            return Err(make_error());
        }

        let receipt = SendReceipt {
            message_id: format!("msg-{}", self.send_count()),
            topic: message.topic.clone(),
            routing_key: routing_key.to_string(),
            queue_id: 0,
            queue_offset: self.send_count() as u64 - 1,
        };
        self.received
            .lock()
            .unwrap()
            .push((message, routing_key.to_string()));
        Ok(receipt)
    }
}
