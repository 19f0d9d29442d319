//! Exception publisher.
//!
//! One publish runs strictly in order:
//!
//! ```text
//! resolve topic ─► build envelope ─► serialize ─► resolve tag ─► routing key ─► producer.send
//! └──────────────────── fail fast, nothing sent ───────────────────────────┘   └─ async ─┘
//! ```

mod exception_publisher;
mod message_publisher;
mod send_service;

pub use exception_publisher::{ExceptionPublisher, OutgoingMessage};
pub use message_publisher::MessagePublisher;
pub use send_service::SendService;
