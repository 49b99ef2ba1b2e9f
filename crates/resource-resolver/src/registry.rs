//! Primitive resource registry
//!
//! The registry holds every primitive descriptor, partitioned by backend.
//! Identifiers are unique within a backend and keep their registration
//! order so that documentation output is deterministic.
//!
//! # Example
//!
//! ```rust
//! use resource_resolver::{Backend, Registry, ResourceDescriptor};
//!
//! let mut registry = Registry::new();
//! registry
//!     .register(ResourceDescriptor::functional(Backend::IconFontA, "HomeOutlined"))
//!     .unwrap();
//!
//! assert!(registry.get(Backend::IconFontA, "HomeOutlined").is_some());
//! assert!(registry.get(Backend::IconFontA, "Missing").is_none());
//! ```

use crate::descriptor::{Backend, ResourceDescriptor};
use crate::error::{validate_key, ConfigurationError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A registered descriptor plus its token value, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    /// The descriptor
    pub descriptor: ResourceDescriptor,
    /// Concrete CSS value for token backends
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default)]
struct BackendTable {
    entries: Vec<RegistryEntry>,
    index: HashMap<String, usize>,
}

/// Backend-partitioned table of primitive descriptors
#[derive(Debug, Clone, Default)]
pub struct Registry {
    tables: Vec<(Backend, BackendTable)>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Register an icon-style descriptor without a value
    pub fn register(&mut self, descriptor: ResourceDescriptor) -> Result<(), ConfigurationError> {
        self.insert(descriptor, None)
    }

    /// Register a token descriptor together with its concrete value
    pub fn register_token(
        &mut self,
        descriptor: ResourceDescriptor,
        value: impl Into<String>,
    ) -> Result<(), ConfigurationError> {
        self.insert(descriptor, Some(value.into()))
    }

    fn insert(
        &mut self,
        descriptor: ResourceDescriptor,
        value: Option<String>,
    ) -> Result<(), ConfigurationError> {
        validate_key("identifier", &descriptor.identifier).map_err(|e| {
            ConfigurationError::InvalidKey {
                key: descriptor.identifier.clone(),
                reason: e.to_string(),
            }
        })?;

        let backend = descriptor.backend;
        let table = match self.tables.iter().position(|(b, _)| *b == backend) {
            Some(pos) => &mut self.tables[pos].1,
            None => {
                self.tables.push((backend, BackendTable::default()));
                let last = self.tables.len() - 1;
                &mut self.tables[last].1
            }
        };

        if table.index.contains_key(&descriptor.identifier) {
            return Err(ConfigurationError::DuplicateIdentifier {
                backend,
                identifier: descriptor.identifier,
            });
        }

        table
            .index
            .insert(descriptor.identifier.clone(), table.entries.len());
        table.entries.push(RegistryEntry { descriptor, value });
        Ok(())
    }

    fn table(&self, backend: Backend) -> Option<&BackendTable> {
        self.tables
            .iter()
            .find(|(b, _)| *b == backend)
            .map(|(_, table)| table)
    }

    /// Look up a registered entry
    pub fn entry(&self, backend: Backend, identifier: &str) -> Option<&RegistryEntry> {
        let table = self.table(backend)?;
        table.index.get(identifier).map(|&i| &table.entries[i])
    }

    /// Look up a descriptor
    pub fn get(&self, backend: Backend, identifier: &str) -> Option<&ResourceDescriptor> {
        self.entry(backend, identifier).map(|e| &e.descriptor)
    }

    /// Look up the concrete value of a token
    pub fn value(&self, backend: Backend, identifier: &str) -> Option<&str> {
        self.entry(backend, identifier)?.value.as_deref()
    }

    /// Check if a backend holds an identifier
    pub fn contains(&self, backend: Backend, identifier: &str) -> bool {
        self.entry(backend, identifier).is_some()
    }

    /// Check if any identifier was registered under a backend
    pub fn has_backend(&self, backend: Backend) -> bool {
        self.table(backend).is_some()
    }

    /// Registered backends in registration order
    pub fn backends(&self) -> impl Iterator<Item = Backend> + '_ {
        self.tables.iter().map(|(b, _)| *b)
    }

    /// Identifiers of a backend in registration order
    pub fn identifiers(&self, backend: Backend) -> Vec<&str> {
        self.entries(backend)
            .map(|e| e.descriptor.identifier.as_str())
            .collect()
    }

    /// Entries of a backend in registration order
    pub fn entries(&self, backend: Backend) -> impl Iterator<Item = &RegistryEntry> + '_ {
        self.table(backend)
            .into_iter()
            .flat_map(|table| table.entries.iter())
    }

    /// Total number of registered descriptors
    pub fn len(&self) -> usize {
        self.tables.iter().map(|(_, t)| t.entries.len()).sum()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
