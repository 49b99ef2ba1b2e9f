//! Symbolic `(context, action)` mapping
//!
//! Context definitions are declared as data: each action maps either to a full
//! descriptor or to a primitive `(backend, identifier)` reference. Both forms
//! are checked against the [`Registry`] once, when the map is built, so
//! lookups never branch on the entry shape and never see a dangling
//! reference.

use crate::descriptor::{Backend, ResourceDescriptor};
use crate::error::{validate_key, ConfigurationError, NotFound};
use crate::registry::Registry;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Declarations
// =============================================================================

/// Right-hand side of a context entry, as declared in static configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContextEntry {
    /// A complete descriptor; must match the registry exactly
    Descriptor(ResourceDescriptor),
    /// A reference to a registry identifier; usage is taken from the registry
    Primitive {
        /// Backend to look in
        backend: Backend,
        /// Identifier within the backend
        identifier: String,
    },
}

/// Declaration of one context and its actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextDefinition {
    /// Context name
    pub name: String,
    /// Ordered `(action, entry)` pairs
    pub actions: Vec<(String, ContextEntry)>,
}

impl ContextDefinition {
    /// Start a new context declaration
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            actions: Vec::new(),
        }
    }

    /// Map an action to a registry identifier
    pub fn primitive(
        mut self,
        action: impl Into<String>,
        backend: Backend,
        identifier: impl Into<String>,
    ) -> Self {
        self.actions.push((
            action.into(),
            ContextEntry::Primitive {
                backend,
                identifier: identifier.into(),
            },
        ));
        self
    }

    /// Map an action to a full descriptor
    pub fn descriptor(mut self, action: impl Into<String>, descriptor: ResourceDescriptor) -> Self {
        self.actions
            .push((action.into(), ContextEntry::Descriptor(descriptor)));
        self
    }

    /// Map several actions of one backend at once
    pub fn primitives<'a>(
        mut self,
        backend: Backend,
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        for (action, identifier) in pairs {
            self = self.primitive(action, backend, identifier);
        }
        self
    }
}

// =============================================================================
// Resolved map
// =============================================================================

#[derive(Debug, Clone)]
struct ContextTable {
    name: String,
    actions: Vec<(String, ResourceDescriptor)>,
    index: HashMap<String, usize>,
}

/// Immutable `(context, action) -> descriptor` map
#[derive(Debug, Clone, Default)]
pub struct ContextMap {
    contexts: Vec<ContextTable>,
    index: HashMap<String, usize>,
}

impl ContextMap {
    /// Resolve context declarations against a registry
    ///
    /// Declarations sharing a name are merged in order. Fails on the first
    /// duplicate action, dangling reference or usage mismatch.
    pub fn build(
        definitions: impl IntoIterator<Item = ContextDefinition>,
        registry: &Registry,
    ) -> Result<Self, ConfigurationError> {
        let mut map = ContextMap::default();

        for definition in definitions {
            check_key(&definition.name)?;

            let slot = match map.index.get(&definition.name) {
                Some(&i) => i,
                None => {
                    map.index
                        .insert(definition.name.clone(), map.contexts.len());
                    map.contexts.push(ContextTable {
                        name: definition.name.clone(),
                        actions: Vec::new(),
                        index: HashMap::new(),
                    });
                    map.contexts.len() - 1
                }
            };

            for (action, entry) in definition.actions {
                check_key(&action)?;
                let descriptor = resolve_entry(&definition.name, &action, entry, registry)?;

                let table = &mut map.contexts[slot];
                if table.index.contains_key(&action) {
                    return Err(ConfigurationError::DuplicateAction {
                        context: definition.name.clone(),
                        action,
                    });
                }
                table.index.insert(action.clone(), table.actions.len());
                table.actions.push((action, descriptor));
            }
        }

        Ok(map)
    }

    /// Look up the descriptor of a context action
    pub fn lookup(&self, context: &str, action: &str) -> Result<&ResourceDescriptor, NotFound> {
        let table = self
            .index
            .get(context)
            .map(|&i| &self.contexts[i])
            .ok_or(NotFound::ContextNotFound)?;

        table
            .index
            .get(action)
            .map(|&i| &table.actions[i].1)
            .ok_or(NotFound::ActionNotFound)
    }

    /// Check if a context is registered
    pub fn has_context(&self, context: &str) -> bool {
        self.index.contains_key(context)
    }

    /// Context names in declaration order
    pub fn contexts(&self) -> Vec<&str> {
        self.contexts.iter().map(|t| t.name.as_str()).collect()
    }

    /// Action names of a context in declaration order
    ///
    /// Returns `None` for an unknown context.
    pub fn actions(&self, context: &str) -> Option<Vec<&str>> {
        self.entries(context)
            .map(|entries| entries.iter().map(|(a, _)| a.as_str()).collect())
    }

    /// `(action, descriptor)` pairs of a context in declaration order
    pub fn entries(&self, context: &str) -> Option<&[(String, ResourceDescriptor)]> {
        self.index
            .get(context)
            .map(|&i| self.contexts[i].actions.as_slice())
    }

    /// Number of contexts
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    /// Check if no context is registered
    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    /// Total number of `(context, action)` pairs
    pub fn action_count(&self) -> usize {
        self.contexts.iter().map(|t| t.actions.len()).sum()
    }
}

fn check_key(key: &str) -> Result<(), ConfigurationError> {
    validate_key("key", key).map_err(|e| ConfigurationError::InvalidKey {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

fn resolve_entry(
    context: &str,
    action: &str,
    entry: ContextEntry,
    registry: &Registry,
) -> Result<ResourceDescriptor, ConfigurationError> {
    let (backend, identifier, declared) = match entry {
        ContextEntry::Primitive {
            backend,
            identifier,
        } => (backend, identifier, None),
        ContextEntry::Descriptor(d) => (d.backend, d.identifier, Some(d.usage)),
    };

    let registered = registry.get(backend, &identifier).ok_or_else(|| {
        ConfigurationError::DanglingReference {
            context: context.to_string(),
            action: action.to_string(),
            backend,
            identifier: identifier.clone(),
        }
    })?;

    if let Some(declared) = declared {
        if declared != registered.usage {
            return Err(ConfigurationError::UsageMismatch {
                context: context.to_string(),
                action: action.to_string(),
                declared,
                registered: registered.usage,
            });
        }
    }

    Ok(registered.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Usage;

    fn registry() -> Registry {
        let mut registry = Registry::new();
        for id in ["CheckCircleOutlined", "CloseCircleOutlined", "LoginOutlined"] {
            registry
                .register(ResourceDescriptor::functional(Backend::IconFontA, id))
                .unwrap();
        }
        registry
            .register(ResourceDescriptor::decorative(Backend::IconFontA, "StarOutlined"))
            .unwrap();
        registry
    }

    fn status() -> ContextDefinition {
        ContextDefinition::new("status")
            .primitive("success", Backend::IconFontA, "CheckCircleOutlined")
            .primitive("error", Backend::IconFontA, "CloseCircleOutlined")
    }

    #[test]
    fn test_lookup_found() {
        let map = ContextMap::build(vec![status()], &registry()).unwrap();
        let d = map.lookup("status", "success").unwrap();
        assert_eq!(d.identifier, "CheckCircleOutlined");
        assert_eq!(d.usage, Usage::Functional);
    }

    #[test]
    fn test_lookup_distinguishes_missing_context_and_action() {
        let map = ContextMap::build(vec![status()], &registry()).unwrap();
        assert_eq!(
            map.lookup("unknown", "success").unwrap_err(),
            NotFound::ContextNotFound
        );
        assert_eq!(
            map.lookup("status", "bogus-action").unwrap_err(),
            NotFound::ActionNotFound
        );
    }

    #[test]
    fn test_primitive_takes_registry_usage() {
        let def = ContextDefinition::new("decor").primitive("star", Backend::IconFontA, "StarOutlined");
        let map = ContextMap::build(vec![def], &registry()).unwrap();
        assert_eq!(map.lookup("decor", "star").unwrap().usage, Usage::Decorative);
    }

    #[test]
    fn test_descriptor_entry_must_match_registry() {
        let ok = ContextDefinition::new("auth").descriptor(
            "login",
            ResourceDescriptor::functional(Backend::IconFontA, "LoginOutlined"),
        );
        assert!(ContextMap::build(vec![ok], &registry()).is_ok());

        let wrong_usage = ContextDefinition::new("auth").descriptor(
            "login",
            ResourceDescriptor::decorative(Backend::IconFontA, "LoginOutlined"),
        );
        let err = ContextMap::build(vec![wrong_usage], &registry()).unwrap_err();
        assert!(matches!(err, ConfigurationError::UsageMismatch { .. }));
    }

    #[test]
    fn test_dangling_reference_fails_build() {
        let def = ContextDefinition::new("status").primitive("success", Backend::IconFontB, "MdCheck");
        let err = ContextMap::build(vec![def], &registry()).unwrap_err();
        match err {
            ConfigurationError::DanglingReference {
                context,
                action,
                backend,
                identifier,
            } => {
                assert_eq!(context, "status");
                assert_eq!(action, "success");
                assert_eq!(backend, Backend::IconFontB);
                assert_eq!(identifier, "MdCheck");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_action_fails_build() {
        let def = status().primitive("success", Backend::IconFontA, "CloseCircleOutlined");
        let err = ContextMap::build(vec![def], &registry()).unwrap_err();
        assert!(matches!(err, ConfigurationError::DuplicateAction { .. }));
    }

    #[test]
    fn test_definitions_with_same_name_merge() {
        let extra = ContextDefinition::new("status").primitive("done", Backend::IconFontA, "CheckCircleOutlined");
        let map = ContextMap::build(vec![status(), extra], &registry()).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(
            map.actions("status").unwrap(),
            vec!["success", "error", "done"]
        );
    }

    #[test]
    fn test_listing_is_ordered() {
        let auth = ContextDefinition::new("authentication").primitive("login", Backend::IconFontA, "LoginOutlined");
        let map = ContextMap::build(vec![status(), auth], &registry()).unwrap();
        assert_eq!(map.contexts(), vec!["status", "authentication"]);
        assert_eq!(map.action_count(), 3);
        assert!(map.actions("missing").is_none());
        assert!(map.has_context("authentication"));
    }

    #[test]
    fn test_invalid_context_name_fails_build() {
        let def = ContextDefinition::new("bad context");
        let err = ContextMap::build(vec![def], &registry()).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidKey { .. }));
    }
}
