//! Pure lookups from an exception's concrete type to its topic and tag.

mod topic;
mod type_name;

pub use topic::{TopicMap, TopicProvider};
pub use type_name::{RegistryError, TypeNameProvider, TypeNameRegistry};
