//! Fallback table
//!
//! Exactly one default descriptor per usage kind. Both must exist in the
//! registry with the matching usage, since resolving a fallback is the last
//! resort and can never itself fail.

use crate::descriptor::{ResourceDescriptor, Usage};
use crate::error::ConfigurationError;
use crate::registry::Registry;
use serde::{Deserialize, Serialize};

/// Default descriptors substituted when a lookup misses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackTable {
    /// Default for meaning-bearing resources
    pub functional: ResourceDescriptor,
    /// Default for ornamental resources
    pub decorative: ResourceDescriptor,
}

impl FallbackTable {
    /// Create a fallback table
    pub fn new(functional: ResourceDescriptor, decorative: ResourceDescriptor) -> Self {
        Self {
            functional,
            decorative,
        }
    }

    /// Fallback for a usage kind
    pub fn get(&self, usage: Usage) -> &ResourceDescriptor {
        match usage {
            Usage::Functional => &self.functional,
            Usage::Decorative => &self.decorative,
        }
    }

    /// Iterate `(usage, descriptor)` pairs, functional first
    pub fn iter(&self) -> impl Iterator<Item = (Usage, &ResourceDescriptor)> + '_ {
        Usage::ALL.into_iter().map(move |usage| (usage, self.get(usage)))
    }

    /// Check both entries against the registry
    pub fn validate(&self, registry: &Registry) -> Result<(), ConfigurationError> {
        for (usage, descriptor) in self.iter() {
            if descriptor.usage != usage {
                return Err(ConfigurationError::InvalidFallback {
                    usage,
                    reason: format!("descriptor {} is {}", descriptor, descriptor.usage),
                });
            }
            match registry.get(descriptor.backend, &descriptor.identifier) {
                Some(registered) if registered == descriptor => {}
                Some(registered) => {
                    return Err(ConfigurationError::InvalidFallback {
                        usage,
                        reason: format!("registry holds {}", registered),
                    })
                }
                None => {
                    return Err(ConfigurationError::InvalidFallback {
                        usage,
                        reason: format!("{} is not registered", descriptor),
                    })
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Backend;

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .register(ResourceDescriptor::functional(
                Backend::IconFontA,
                "QuestionCircleOutlined",
            ))
            .unwrap();
        registry
            .register(ResourceDescriptor::decorative(Backend::IconFontA, "BorderOutlined"))
            .unwrap();
        registry
    }

    fn table() -> FallbackTable {
        FallbackTable::new(
            ResourceDescriptor::functional(Backend::IconFontA, "QuestionCircleOutlined"),
            ResourceDescriptor::decorative(Backend::IconFontA, "BorderOutlined"),
        )
    }

    #[test]
    fn test_get_by_usage() {
        let table = table();
        assert_eq!(table.get(Usage::Functional).identifier, "QuestionCircleOutlined");
        assert_eq!(table.get(Usage::Decorative).identifier, "BorderOutlined");
    }

    #[test]
    fn test_iter_order() {
        let usages: Vec<_> = table().iter().map(|(u, _)| u).collect();
        assert_eq!(usages, vec![Usage::Functional, Usage::Decorative]);
    }

    #[test]
    fn test_validate_ok() {
        assert!(table().validate(&registry()).is_ok());
    }

    #[test]
    fn test_validate_missing_entry() {
        let table = FallbackTable::new(
            ResourceDescriptor::functional(Backend::IconFontB, "MdHelp"),
            ResourceDescriptor::decorative(Backend::IconFontA, "BorderOutlined"),
        );
        let err = table.validate(&registry()).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::InvalidFallback {
                usage: Usage::Functional,
                ..
            }
        ));
    }

    #[test]
    fn test_validate_wrong_usage() {
        let table = FallbackTable::new(
            ResourceDescriptor::functional(Backend::IconFontA, "QuestionCircleOutlined"),
            ResourceDescriptor::functional(Backend::IconFontA, "QuestionCircleOutlined"),
        );
        assert!(table.validate(&registry()).is_err());
    }
}
