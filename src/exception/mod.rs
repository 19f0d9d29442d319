mod header;
mod publishable;

pub use header::{ExceptionHeader, Sequence};
pub use publishable::{ExceptionType, PublishableException};
