//! Resource catalog for the bus-ticketing UI
//!
//! This crate holds the static icon and design-token tables of the
//! ticketing interface and assembles them into a ready-to-use
//! [`resource_resolver::Engine`].
//!
//! # Catalog
//!
//! Four icon fonts are registered:
//! - `icon-font-a` - Outlined general-purpose set, also hosts both fallbacks
//! - `icon-font-b` - Material set for transport and amenities
//! - `icon-font-c` - Solid set for back-office navigation
//! - `icon-font-d` - Outline set for the booking flow
//!
//! Colour tokens come from seven palettes (primary sky `#0ea5e9`, neutral
//! slate `#64748b`, secondary, success, warning, danger and info), each with
//! shades `50` to `900`.
//!
//! # Modules
//!
//! - [`icons`] - Icon font registrations and the fallback table
//! - [`contexts`] - Semantic `(context, action)` icon bindings
//! - [`tokens`] - Palettes and the size, spacing, shadow and radius scales
//!
//! # Example
//!
//! ```rust
//! use resource_resolver::{ResolveOptions, ResolverConfig};
//!
//! let engine = ui_catalog::standard_engine_with(ResolverConfig::quiet(), None).unwrap();
//!
//! let resolved = engine
//!     .resolve("status", "success", &ResolveOptions::new().with_size("lg"))
//!     .unwrap();
//! assert_eq!(resolved.descriptor.identifier, "CheckCircleOutlined");
//! assert_eq!(resolved.style["fontSize"], "20px");
//!
//! let brand = engine.token("color-primary", "500").unwrap();
//! assert_eq!(brand.value, "#0ea5e9");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contexts;
pub mod icons;
pub mod tokens;

use std::sync::Arc;

use resource_resolver::{ConfigurationError, DiagnosticSink, Engine, EngineBuilder, ResolverConfig};

pub use tokens::{palette, radius, shadows, size, spacing, Palette, Shadow};

/// Builder pre-loaded with the whole catalog
pub fn standard_builder() -> Result<EngineBuilder, ConfigurationError> {
    let builder = icons::install(Engine::builder());
    let builder = contexts::install(builder);
    tokens::install(builder)
}

/// Engine over the whole catalog with default configuration
pub fn standard_engine() -> Result<Engine, ConfigurationError> {
    standard_engine_with(ResolverConfig::default(), None)
}

/// Engine over the whole catalog with explicit configuration and sink
pub fn standard_engine_with(
    config: ResolverConfig,
    sink: Option<Arc<dyn DiagnosticSink>>,
) -> Result<Engine, ConfigurationError> {
    let mut builder = standard_builder()?.config(config);
    if let Some(sink) = sink {
        builder = builder.sink(sink);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_resolver::{Backend, ResolveOptions, ScaleKind, Usage};

    fn engine() -> Engine {
        standard_engine_with(ResolverConfig::quiet(), None).unwrap()
    }

    // ==========================================================================
    // Build Tests
    // ==========================================================================

    #[test]
    fn test_standard_engine_builds() {
        let engine = standard_engine().unwrap();
        assert!(engine.audit().is_empty());
    }

    #[test]
    fn test_all_backends_registered() {
        let engine = engine();
        for backend in Backend::ALL {
            assert!(engine.registry().has_backend(backend), "{} missing", backend);
        }
    }

    #[test]
    fn test_every_action_resolves_without_fallback() {
        let engine = engine();
        let tree = engine.describe();
        for context in &tree.contexts {
            for action in &context.actions {
                let resolved = engine
                    .resolve(&context.context, &action.action, &ResolveOptions::default())
                    .unwrap();
                assert_eq!(resolved.descriptor, action.descriptor);
            }
        }
        assert_eq!(engine.diagnostic_counts().fallbacks, 0);
    }

    // ==========================================================================
    // Icon Tests
    // ==========================================================================

    #[test]
    fn test_status_success() {
        let engine = engine();
        let d = engine.lookup("status", "success", Usage::Functional).unwrap();
        assert_eq!(d.backend, Backend::IconFontA);
        assert_eq!(d.identifier, "CheckCircleOutlined");
        assert_eq!(d.usage, Usage::Functional);
    }

    #[test]
    fn test_decorative_context() {
        let engine = engine();
        let d = engine.lookup("decoration", "sparkle", Usage::Decorative).unwrap();
        assert_eq!(d.backend, Backend::IconFontD);
        assert_eq!(d.usage, Usage::Decorative);
    }

    #[test]
    fn test_transport_uses_material_set() {
        let engine = engine();
        let d = engine.lookup("transport", "bus", Usage::Functional).unwrap();
        assert_eq!(d.identifier, "MdDirectionsBus");
    }

    // ==========================================================================
    // Token Tests
    // ==========================================================================

    #[test]
    fn test_palette_tokens() {
        let engine = engine();
        assert_eq!(engine.token("color-primary", "500").unwrap().value, "#0ea5e9");
        assert_eq!(engine.token("color-neutral", "900").unwrap().value, "#0f172a");
        assert_eq!(engine.token("color-scale", "danger").unwrap().value, "#ef4444");
    }

    #[test]
    fn test_missing_shade_uses_palette_default() {
        let engine = engine();
        let token = engine.token("color-success", "950").unwrap();
        assert_eq!(token.value, "#22c55e");
        assert_eq!(engine.diagnostic_counts().fallbacks, 1);
    }

    #[test]
    fn test_missing_token_context_uses_neutral() {
        let engine = engine();
        let token = engine.token("color-plaid", "500").unwrap();
        assert_eq!(token.value, "#64748b");
    }

    #[test]
    fn test_scale_defaults() {
        let engine = engine();
        assert_eq!(engine.scale(ScaleKind::Size, "nope").value, "16px");
        assert_eq!(engine.scale(ScaleKind::Color, "nope").value, "#64748b");
        assert_eq!(engine.scale(ScaleKind::Spacing, "nope").value, "16px");
        assert_eq!(engine.scale(ScaleKind::Radius, "nope").value, "6px");
        assert_eq!(
            engine.scale(ScaleKind::Shadow, "nope").value,
            "0px 1px 2px 0px rgba(0, 0, 0, 0.05)"
        );
    }

    #[test]
    fn test_spacing_token_matches_scale() {
        let engine = engine();
        for step in engine.scales().table(ScaleKind::Spacing).steps() {
            let token = engine.token("spacing-scale", &step.name).unwrap();
            assert_eq!(token.value, step.value);
        }
    }

    #[test]
    fn test_token_defaults_cover_palettes() {
        let engine = engine();
        let defaults = engine.token_defaults();
        for p in palette::ALL {
            let context = p.context();
            assert!(defaults.iter().any(|(c, t)| *c == context && t.value == p.base()));
        }
    }
}
