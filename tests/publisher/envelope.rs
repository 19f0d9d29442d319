//! Envelope contents as seen by a consumer.

use exception_publisher::{EnvelopeSerializer, ExceptionHeader, JsonSerializer};
use serde_json::{json, Value};

use crate::support::{publisher_with, OrderFailed, PaymentDeclined, ScriptedProducer};

#[test]
fn body_is_utf8_json_with_exact_field_names() {
    let publisher = publisher_with(ScriptedProducer::default());
    let exception = PaymentDeclined {
        header: ExceptionHeader::new("E7").with_timestamp(1_700_000_000_000),
        amount: 4200,
        network: "visa".into(),
    };

    let outgoing = publisher.build_message(&exception).unwrap();
    let body: Value = serde_json::from_str(outgoing.message.body_str().unwrap()).unwrap();

    assert_eq!(
        body,
        json!({
            "UniqueId": "E7",
            "AggregateRootTypeName": null,
            "AggregateRootId": null,
            "Timestamp": 1_700_000_000_000i64,
            "SerializableInfo": { "Amount": "4200", "Network": "visa" }
        })
    );
}

#[test]
fn decoded_envelope_matches_source() {
    let publisher = publisher_with(ScriptedProducer::default());
    let exception = OrderFailed {
        header: ExceptionHeader::new("E8")
            .with_timestamp(99)
            .sequenced("Order", "A1"),
        reason: "card expired".into(),
    };

    let outgoing = publisher.build_message(&exception).unwrap();
    let envelope = JsonSerializer.deserialize(&outgoing.message.body).unwrap();

    assert_eq!(envelope.unique_id, "E8");
    assert_eq!(envelope.timestamp, 99);
    assert_eq!(envelope.aggregate_root_type_name.as_deref(), Some("Order"));
    assert_eq!(envelope.aggregate_root_id.as_deref(), Some("A1"));
    assert_eq!(envelope.serializable_info.len(), 1);
    assert_eq!(envelope.serializable_info["Reason"], "card expired");

    let reencoded = JsonSerializer.serialize(&envelope).unwrap();
    assert_eq!(JsonSerializer.deserialize(&reencoded).unwrap(), envelope);
}
