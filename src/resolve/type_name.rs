use std::collections::HashMap;

use crate::exception::{ExceptionType, PublishableException};

/// Maps an exception type to the stable tag consumers decode by.
///
/// Tags cross process and version boundaries, so the mapping must be
/// one-to-one and must not change once consumers depend on it.
pub trait TypeNameProvider: Send + Sync {
    fn type_name(&self, exception_type: &ExceptionType) -> Option<String>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("type name {name} is already registered for {existing}")]
    DuplicateName { name: String, existing: String },
    #[error("{exception_type} is already registered as {existing}")]
    AlreadyRegistered {
        exception_type: String,
        existing: String,
    },
}

/// Explicit, bijective type-name registry.
#[derive(Clone, Debug, Default)]
pub struct TypeNameRegistry {
    names: HashMap<ExceptionType, String>,
    types: HashMap<String, ExceptionType>,
}

impl TypeNameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `E` under `name`.
    ///
    /// Re-registering the same pair is a no-op; giving a type a second name
    /// or a name a second type is an error.
    pub fn register<E: PublishableException>(
        &mut self,
        name: impl Into<String>,
    ) -> Result<&mut Self, RegistryError> {
        let name = name.into();
        let exception_type = ExceptionType::of::<E>();

        if let Some(existing) = self.types.get(&name).copied() {
            if existing == exception_type {
                return Ok(self);
            }
            return Err(RegistryError::DuplicateName {
                name,
                existing: existing.rust_name().to_string(),
            });
        }
        if let Some(existing) = self.names.get(&exception_type) {
            return Err(RegistryError::AlreadyRegistered {
                exception_type: exception_type.rust_name().to_string(),
                existing: existing.clone(),
            });
        }

        self.names.insert(exception_type, name.clone());
        self.types.insert(name, exception_type);
        Ok(self)
    }

    pub fn with_type<E: PublishableException>(
        mut self,
        name: impl Into<String>,
    ) -> Result<Self, RegistryError> {
        self.register::<E>(name)?;
        Ok(self)
    }

    /// Reverse lookup, for consumers decoding by tag.
    pub fn exception_type(&self, name: &str) -> Option<ExceptionType> {
        self.types.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl TypeNameProvider for TypeNameRegistry {
    fn type_name(&self, exception_type: &ExceptionType) -> Option<String> {
        self.names.get(exception_type).cloned()
    }
}
