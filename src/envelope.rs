//! The exception envelope: the JSON body of an exception message.
//!
//! Field names are part of the wire contract and shared with consumers in
//! other languages, so they are spelled exactly:
//!
//! ```text
//! {
//!   "UniqueId": "E1",
//!   "AggregateRootTypeName": "Order" | null,
//!   "AggregateRootId": "A1" | null,
//!   "Timestamp": 1000,
//!   "SerializableInfo": { "Reason": "out of stock" }
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::exception::PublishableException;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExceptionEnvelope {
    pub unique_id: String,
    #[serde(default)]
    pub aggregate_root_type_name: Option<String>,
    #[serde(default)]
    pub aggregate_root_id: Option<String>,
    /// Unix epoch milliseconds
    pub timestamp: i64,
    #[serde(default)]
    pub serializable_info: HashMap<String, String>,
}

impl ExceptionEnvelope {
    /// Capture an exception. Aggregate fields are filled only for sequenced
    /// exceptions.
    pub fn from_exception<E: PublishableException + ?Sized>(exception: &E) -> Self {
        let mut serializable_info = HashMap::new();
        exception.serialize_to(&mut serializable_info);

        let sequence = exception.sequence();
        Self {
            unique_id: exception.id().to_string(),
            aggregate_root_type_name: sequence.aggregate_root_type_name().map(str::to_string),
            aggregate_root_id: sequence.aggregate_root_id().map(str::to_string),
            timestamp: exception.timestamp(),
            serializable_info,
        }
    }

    pub fn is_sequenced(&self) -> bool {
        self.aggregate_root_type_name.is_some() && self.aggregate_root_id.is_some()
    }
}
