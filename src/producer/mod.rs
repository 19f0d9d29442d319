//! Producer - the message-broker transport seam.
//!
//! The publisher only needs three things from a transport: start it, stop
//! it, and send a message with a routing key. Everything else (connections,
//! partitions, acknowledgements, transport retries) stays behind `Producer`.
//!
//! ```text
//! ┌──────────────────────────┐
//! │    ExceptionPublisher    │
//! └────────────┬─────────────┘
//!              │ send(message, routing_key)
//!              ▼
//! ┌──────────────────────────┐
//! │     Producer (trait)     │
//! └──────┬────────────┬──────┘
//!        ▼            ▼
//! ┌─────────────┐ ┌────────────────────┐
//! │InMemory     │ │ Kafka / NATS / ... │
//! │ (included)  │ │    (external)      │
//! └─────────────┘ └────────────────────┘
//! ```

mod error;
mod in_memory;
mod setting;
mod traits;

pub use error::ProducerError;
pub use in_memory::{InMemoryProducer, ProducerState, SentMessage};
pub use setting::ProducerSetting;
pub use traits::{Producer, SendReceipt};
