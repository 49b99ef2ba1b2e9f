//! Documentation and introspection
//!
//! [`Engine::describe`] materializes the whole static configuration into an
//! ordered [`DocumentationTree`], used for generated reference docs and for
//! completeness checks in tests.

use crate::descriptor::{Backend, ResourceDescriptor, ResourceRef, Usage};
use crate::engine::Engine;
use crate::scale::{ScaleKind, ScaleStep};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// One action of a context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDoc {
    /// Action name
    pub action: String,
    /// Descriptor the action resolves to
    pub descriptor: ResourceDescriptor,
}

/// One context and its actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextDoc {
    /// Context name
    pub context: String,
    /// Actions in declaration order
    pub actions: Vec<ActionDoc>,
}

/// One registry identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierDoc {
    /// Identifier
    pub identifier: String,
    /// Usage classification
    pub usage: Usage,
    /// Token value, for token backends
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// One backend and its identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendDoc {
    /// Backend
    pub backend: Backend,
    /// Identifiers in registration order
    pub identifiers: Vec<IdentifierDoc>,
}

/// One scale table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleDoc {
    /// Scale kind
    pub scale: ScaleKind,
    /// Default step name
    pub default_step: String,
    /// Steps in declaration order
    pub steps: Vec<ScaleStep>,
}

/// One fallback entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackDoc {
    /// Usage kind
    pub usage: Usage,
    /// Fallback descriptor
    pub descriptor: ResourceDescriptor,
}

/// Ordered snapshot of an engine's configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentationTree {
    /// Contexts in declaration order
    pub contexts: Vec<ContextDoc>,
    /// Backends in registration order
    pub backends: Vec<BackendDoc>,
    /// Scale tables
    pub scales: Vec<ScaleDoc>,
    /// Fallback table, functional first
    pub fallbacks: Vec<FallbackDoc>,
}

impl DocumentationTree {
    /// Number of `(context, action)` entries
    pub fn action_count(&self) -> usize {
        self.contexts.iter().map(|c| c.actions.len()).sum()
    }

    /// Number of registry identifiers
    pub fn identifier_count(&self) -> usize {
        self.backends.iter().map(|b| b.identifiers.len()).sum()
    }

    /// Find a context
    pub fn context(&self, name: &str) -> Option<&ContextDoc> {
        self.contexts.iter().find(|c| c.context == name)
    }

    /// Find a backend
    pub fn backend(&self, backend: Backend) -> Option<&BackendDoc> {
        self.backends.iter().find(|b| b.backend == backend)
    }

    /// Render the tree as Markdown reference documentation
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_markdown(&mut out);
        out
    }

    fn write_markdown(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "# Resource Reference")?;

        writeln!(out, "\n## Contexts")?;
        for context in &self.contexts {
            writeln!(out, "\n### {}\n", context.context)?;
            writeln!(out, "| Action | Backend | Identifier | Usage |")?;
            writeln!(out, "|--------|---------|------------|-------|")?;
            for action in &context.actions {
                writeln!(
                    out,
                    "| `{}` | {} | `{}` | {} |",
                    action.action,
                    action.descriptor.backend,
                    action.descriptor.identifier,
                    action.descriptor.usage
                )?;
            }
        }

        writeln!(out, "\n## Backends")?;
        for backend in &self.backends {
            writeln!(out, "\n### {}\n", backend.backend)?;
            for id in &backend.identifiers {
                match &id.value {
                    Some(value) => writeln!(out, "- `{}` ({}) = `{}`", id.identifier, id.usage, value)?,
                    None => writeln!(out, "- `{}` ({})", id.identifier, id.usage)?,
                }
            }
        }

        writeln!(out, "\n## Scales")?;
        for scale in &self.scales {
            writeln!(out, "\n### {} (default `{}`)\n", scale.scale, scale.default_step)?;
            for step in &scale.steps {
                writeln!(out, "- `{}` = `{}`", step.name, step.value)?;
            }
        }

        writeln!(out, "\n## Fallbacks\n")?;
        for fallback in &self.fallbacks {
            writeln!(out, "- {}: `{}`", fallback.usage, fallback.descriptor)?;
        }
        Ok(())
    }
}

/// A violation of the static configuration invariants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditIssue {
    /// Entry that failed, as `namespace/key`
    pub entry: String,
    /// Description of the failure
    pub problem: String,
}

impl Engine {
    /// Snapshot of the full configuration
    pub fn describe(&self) -> DocumentationTree {
        let map = self.context_map();
        let registry = self.registry();

        let contexts = map
            .contexts()
            .into_iter()
            .map(|context| ContextDoc {
                context: context.to_string(),
                actions: map
                    .entries(context)
                    .unwrap_or_default()
                    .iter()
                    .map(|(action, descriptor)| ActionDoc {
                        action: action.clone(),
                        descriptor: descriptor.clone(),
                    })
                    .collect(),
            })
            .collect();

        let backends = registry
            .backends()
            .map(|backend| BackendDoc {
                backend,
                identifiers: registry
                    .entries(backend)
                    .map(|entry| IdentifierDoc {
                        identifier: entry.descriptor.identifier.clone(),
                        usage: entry.descriptor.usage,
                        value: entry.value.clone(),
                    })
                    .collect(),
            })
            .collect();

        let scales = self
            .scales()
            .tables()
            .iter()
            .map(|table| ScaleDoc {
                scale: table.kind(),
                default_step: table.default_step().to_string(),
                steps: table.steps().to_vec(),
            })
            .collect();

        let fallbacks = self
            .fallbacks()
            .iter()
            .map(|(usage, descriptor)| FallbackDoc {
                usage,
                descriptor: descriptor.clone(),
            })
            .collect();

        DocumentationTree {
            contexts,
            backends,
            scales,
            fallbacks,
        }
    }

    /// Re-check the static invariants through the validation path
    ///
    /// Every context action must resolve without fallback to a registered
    /// descriptor, and both fallbacks must be registered. A built engine
    /// always returns an empty list.
    pub fn audit(&self) -> Vec<AuditIssue> {
        let tree = self.describe();
        let mut issues = Vec::new();

        for context in &tree.contexts {
            for action in &context.actions {
                let entry = format!("{}/{}", context.context, action.action);
                if !self.is_valid(&ResourceRef::contextual(&context.context, &action.action)) {
                    issues.push(AuditIssue {
                        entry,
                        problem: "context action does not resolve".to_string(),
                    });
                } else if !self.is_valid(&ResourceRef::Descriptor(action.descriptor.clone())) {
                    issues.push(AuditIssue {
                        entry,
                        problem: format!("{} is not registered", action.descriptor),
                    });
                }
            }
        }

        for fallback in &tree.fallbacks {
            if !self.is_valid(&ResourceRef::Descriptor(fallback.descriptor.clone())) {
                issues.push(AuditIssue {
                    entry: format!("fallback/{}", fallback.usage),
                    problem: format!("{} is not registered", fallback.descriptor),
                });
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResolverConfig;
    use crate::context_map::ContextDefinition;
    use crate::fallback::FallbackTable;
    use crate::scale::ScaleTable;

    fn engine() -> Engine {
        Engine::builder()
            .config(ResolverConfig::quiet())
            .register(ResourceDescriptor::functional(Backend::IconFontA, "CheckCircleOutlined"))
            .register(ResourceDescriptor::functional(Backend::IconFontA, "QuestionCircleOutlined"))
            .register(ResourceDescriptor::decorative(Backend::IconFontA, "BorderOutlined"))
            .register_token(ResourceDescriptor::functional(Backend::Spacing, "md"), "16px")
            .context(
                ContextDefinition::new("status")
                    .primitive("success", Backend::IconFontA, "CheckCircleOutlined"),
            )
            .context(ContextDefinition::new("spacing-scale").primitive("md", Backend::Spacing, "md"))
            .token_fallback("spacing-scale", "md")
            .fallbacks(FallbackTable::new(
                ResourceDescriptor::functional(Backend::IconFontA, "QuestionCircleOutlined"),
                ResourceDescriptor::decorative(Backend::IconFontA, "BorderOutlined"),
            ))
            .scale(ScaleTable::new(ScaleKind::Size, "base", [("base", "16px")]).unwrap())
            .scale(ScaleTable::new(ScaleKind::Color, "neutral", [("neutral", "#64748b")]).unwrap())
            .scale(ScaleTable::new(ScaleKind::Spacing, "md", [("md", "16px")]).unwrap())
            .scale(ScaleTable::new(ScaleKind::Shadow, "sm", [("sm", "none")]).unwrap())
            .scale(ScaleTable::new(ScaleKind::Radius, "md", [("md", "6px")]).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_describe_enumerates_everything() {
        let engine = engine();
        let tree = engine.describe();

        assert_eq!(tree.contexts.len(), 2);
        assert_eq!(tree.action_count(), 2);
        assert_eq!(tree.identifier_count(), engine.registry().len());
        assert_eq!(tree.scales.len(), 5);
        assert_eq!(tree.fallbacks[0].usage, Usage::Functional);
        assert_eq!(tree.fallbacks[1].usage, Usage::Decorative);

        let spacing = tree.backend(Backend::Spacing).unwrap();
        assert_eq!(spacing.identifiers[0].value.as_deref(), Some("16px"));
        assert!(tree.context("status").is_some());
    }

    #[test]
    fn test_describe_is_stable() {
        let engine = engine();
        assert_eq!(engine.describe(), engine.describe());
        assert_eq!(
            serde_json::to_string(&engine.describe()).unwrap(),
            serde_json::to_string(&engine.describe()).unwrap()
        );
    }

    #[test]
    fn test_markdown_rendering() {
        let md = engine().describe().to_markdown();
        assert!(md.starts_with("# Resource Reference"));
        assert!(md.contains("### status"));
        assert!(md.contains("| `success` | icon-font-a | `CheckCircleOutlined` | functional |"));
        assert!(md.contains("- `md` (functional) = `16px`"));
        assert!(md.contains("### size (default `base`)"));
        assert!(md.contains("- functional: `icon-font-a/QuestionCircleOutlined (functional)`"));
    }

    #[test]
    fn test_audit_clean() {
        assert!(engine().audit().is_empty());
    }
}
