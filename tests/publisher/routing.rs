//! Routing key and topic selection.

use exception_publisher::{
    ExceptionHeader, ExceptionType, MessagePublisher, PublishableException, TopicProvider,
};

use crate::support::{publisher_with, topics, OrderFailed, PaymentDeclined, ScriptedProducer};

fn declined(header: ExceptionHeader) -> PaymentDeclined {
    PaymentDeclined {
        header,
        amount: 4200,
        network: "visa".into(),
    }
}

#[test]
fn missing_routing_key_falls_back_to_id() {
    let publisher = publisher_with(ScriptedProducer::default());

    for id in ["E1", "E2", "01HZX3J6W5R2D7Q8M9N0P1A2B3"] {
        let outgoing = publisher
            .build_message(&OrderFailed::new(ExceptionHeader::new(id)))
            .unwrap();
        assert_eq!(outgoing.routing_key, id);
    }
}

#[test]
fn empty_routing_key_falls_back_to_id() {
    let publisher = publisher_with(ScriptedProducer::default());

    let outgoing = publisher
        .build_message(&OrderFailed::new(
            ExceptionHeader::new("E1").with_routing_key(""),
        ))
        .unwrap();

    assert_eq!(outgoing.routing_key, "E1");
}

#[test]
fn explicit_routing_key_wins_over_id() {
    let publisher = publisher_with(ScriptedProducer::default());

    for key in ["A1", "order-77", "E1-but-not-the-id"] {
        let outgoing = publisher
            .build_message(&declined(ExceptionHeader::new("E1").with_routing_key(key)))
            .unwrap();
        assert_eq!(outgoing.routing_key, key);
    }
}

#[test]
fn topic_depends_on_type_not_instance() {
    let publisher = publisher_with(ScriptedProducer::default());

    let first = publisher
        .build_message(&declined(ExceptionHeader::new("E1")))
        .unwrap();
    let second = publisher
        .build_message(&declined(
            ExceptionHeader::new("E2")
                .with_routing_key("A9")
                .sequenced("Payment", "P9"),
        ))
        .unwrap();

    assert_eq!(first.message.topic, "exceptions.payment");
    assert_eq!(first.message.topic, second.message.topic);
    assert_eq!(first.message.tag, "PaymentDeclined");
    assert_eq!(first.message.tag, second.message.tag);

    let topics = topics();
    assert_eq!(
        topics.topic(&ExceptionType::of::<PaymentDeclined>()),
        topics.topic(&ExceptionType::of::<PaymentDeclined>())
    );
}

#[tokio::test]
async fn same_routing_key_lands_on_same_queue() {
    let publisher = crate::support::started_publisher().await;

    let mut receipts = Vec::new();
    for id in ["E1", "E2", "E3"] {
        let exception = OrderFailed::new(
            ExceptionHeader::new(id)
                .with_routing_key("A1")
                .sequenced("Order", "A1"),
        );
        receipts.push(publisher.publish(&exception).await.unwrap());
    }

    assert!(receipts.iter().all(|r| r.queue_id == receipts[0].queue_id));
    let offsets: Vec<u64> = receipts.iter().map(|r| r.queue_offset).collect();
    assert_eq!(offsets, vec![0, 1, 2]);
}

#[tokio::test]
async fn boxed_exceptions_resolve_by_concrete_type() {
    let publisher = crate::support::started_publisher().await;
    let pending: Vec<Box<dyn PublishableException>> = vec![
        Box::new(OrderFailed::new(ExceptionHeader::new("E1"))),
        Box::new(declined(ExceptionHeader::new("E2"))),
    ];

    for exception in &pending {
        publisher.publish(exception.as_ref()).await.unwrap();
    }

    let sent = publisher.producer().sent();
    let topics: Vec<&str> = sent.iter().map(|s| s.message.topic.as_str()).collect();
    let tags: Vec<&str> = sent.iter().map(|s| s.message.tag.as_str()).collect();
    assert_eq!(topics, vec!["exceptions.order", "exceptions.payment"]);
    assert_eq!(tags, vec!["OrderFailed", "PaymentDeclined"]);
}

#[tokio::test]
async fn boxed_exceptions_through_message_publisher() {
    let publisher = crate::support::started_publisher().await;
    let seam: &dyn MessagePublisher<dyn PublishableException> = &publisher;
    let exception: Box<dyn PublishableException> =
        Box::new(declined(ExceptionHeader::new("E3").with_routing_key("A3")));

    let receipt = seam.publish(exception.as_ref()).await.unwrap();

    assert_eq!(receipt.topic, "exceptions.payment");
    assert_eq!(receipt.routing_key, "A3");
}
