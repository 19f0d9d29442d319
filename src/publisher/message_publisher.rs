use crate::error::PublishError;
use crate::exception::PublishableException;
use crate::producer::{Producer, SendReceipt};

use super::ExceptionPublisher;

/// Trait for publishing one kind of message.
///
/// Lets callers hold an exception publisher next to publishers for other
/// message kinds behind a single interface.
#[async_trait::async_trait]
pub trait MessagePublisher<M: ?Sized + Send + Sync>: Send + Sync {
    async fn publish(&self, message: &M) -> Result<SendReceipt, PublishError>;
}

#[async_trait::async_trait]
impl<P, E> MessagePublisher<E> for ExceptionPublisher<P>
where
    P: Producer,
    E: PublishableException + ?Sized,
{
    async fn publish(&self, exception: &E) -> Result<SendReceipt, PublishError> {
        ExceptionPublisher::publish(self, exception).await
    }
}
