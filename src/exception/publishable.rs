use std::any::{type_name, TypeId};
use std::collections::HashMap;
use std::fmt;

use super::{ExceptionHeader, Sequence};

/// A domain exception that can be published to other services.
///
/// ```
/// use std::collections::HashMap;
/// use exception_publisher::{ExceptionHeader, PublishableException};
///
/// struct OrderFailed {
///     header: ExceptionHeader,
///     reason: String,
/// }
///
/// impl PublishableException for OrderFailed {
///     fn header(&self) -> &ExceptionHeader {
///         &self.header
///     }
///
///     fn serialize_to(&self, info: &mut HashMap<String, String>) {
///         info.insert("Reason".to_string(), self.reason.clone());
///     }
/// }
///
/// let failed = OrderFailed { header: ExceptionHeader::new("E1"), reason: "no stock".into() };
/// assert_eq!(failed.id(), "E1");
/// assert_eq!(failed.routing_key(), None);
/// ```
pub trait PublishableException: Send + Sync + 'static {
    fn header(&self) -> &ExceptionHeader;

    /// Write the exception's domain-specific fields.
    fn serialize_to(&self, info: &mut HashMap<String, String>);

    fn id(&self) -> &str {
        self.header().id()
    }

    fn timestamp(&self) -> i64 {
        self.header().timestamp()
    }

    fn routing_key(&self) -> Option<&str> {
        self.header().routing_key()
    }

    fn sequence(&self) -> &Sequence {
        self.header().sequence()
    }

    /// Concrete type of this exception, also when reached through
    /// `dyn PublishableException`.
    fn exception_type(&self) -> ExceptionType {
        ExceptionType::of::<Self>()
    }
}

/// Key identifying a concrete exception type.
///
/// Topic and type-name lookups go through this key, so the answer depends on
/// the type only, never on a particular instance.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExceptionType {
    id: TypeId,
    rust_name: &'static str,
}

impl ExceptionType {
    pub fn of<E: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<E>(),
            rust_name: type_name::<E>(),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Compiler-provided type path; for diagnostics only, not stable across builds.
    pub fn rust_name(&self) -> &'static str {
        self.rust_name
    }
}

impl fmt::Debug for ExceptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rust_name)
    }
}

impl fmt::Display for ExceptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rust_name)
    }
}
