//! Style composition
//!
//! Turns a resolved descriptor plus caller options into a presentation-ready
//! style map and class string.
//!
//! # Merge order
//!
//! Style properties are written in three layers, later layers overwrite
//! earlier ones:
//!
//! 1. computed from the descriptor (font family, token value)
//! 2. computed from named scales and options (`fontSize`, `color`, `transform`)
//! 3. caller `style` overrides
//!
//! # Class names
//!
//! The class string is the base class, then the origin class, then the
//! caller classes, joined with single spaces. Repeated classes are kept as
//! given.

use crate::descriptor::{ResourceDescriptor, Usage};
use crate::error::{ResolveError, Result};
use crate::registry::Registry;
use crate::scale::{is_color_literal, ScaleKind, ScaleSet};
use heck::ToKebabCase;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Options
// =============================================================================

/// Caller options for resolution and composition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolveOptions {
    /// Named size step (default "base")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Named colour step or literal CSS colour (default "neutral")
    #[serde(skip_serializing_if = "Option::is_none", alias = "shade")]
    pub color: Option<String>,
    /// Extra classes appended verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Usage kind to fall back to when the lookup misses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
    /// Rotation in degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<i32>,
    /// Continuous rotation animation
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub spin: bool,
    /// Free-form style overrides, merged last
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub style: BTreeMap<String, String>,
}

impl ResolveOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size step
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Set the colour step or literal
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the caller classes
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Request a usage kind for fallback selection
    pub fn with_usage(mut self, usage: Usage) -> Self {
        self.usage = Some(usage);
        self
    }

    /// Rotate by a number of degrees
    pub fn with_rotate(mut self, degrees: i32) -> Self {
        self.rotate = Some(degrees);
        self
    }

    /// Enable the spin animation class
    pub fn with_spin(mut self, spin: bool) -> Self {
        self.spin = spin;
        self
    }

    /// Add a style override
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    /// Usage kind used for fallback selection
    pub fn fallback_usage(&self) -> Usage {
        self.usage.unwrap_or(Usage::Functional)
    }

    /// Check the shape of the options
    ///
    /// Unknown scale steps are not errors; empty values and empty property
    /// names are.
    pub fn validate(&self) -> Result<()> {
        if let Some(size) = &self.size {
            if size.trim().is_empty() {
                return Err(ResolveError::invalid("size", "must not be empty"));
            }
        }
        if let Some(color) = &self.color {
            if color.trim().is_empty() {
                return Err(ResolveError::invalid("color", "must not be empty"));
            }
        }
        for (property, value) in &self.style {
            if property.trim().is_empty() {
                return Err(ResolveError::invalid(
                    "style",
                    format!("empty property name for value {:?}", value),
                ));
            }
        }
        Ok(())
    }
}

/// Options as actually applied, after defaults and scale degradation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedOptions {
    /// Effective size step
    pub size: String,
    /// Effective colour step, or the literal colour
    pub color: String,
    /// Caller classes, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Usage kind used for fallback selection
    pub usage: Usage,
    /// Rotation in degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<i32>,
    /// Spin animation enabled
    pub spin: bool,
}

/// Final style map and class string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    /// CSS-in-JS style properties (camelCase keys)
    pub style: BTreeMap<String, String>,
    /// Space separated class list
    pub class_name: String,
}

/// Where a descriptor came from, for the origin class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin<'a> {
    /// Resolved through the context map
    Context {
        /// Requested context
        context: &'a str,
        /// Requested action
        action: &'a str,
    },
    /// Resolved directly or composed standalone
    Descriptor,
}

// =============================================================================
// Compositor
// =============================================================================

/// Composes descriptors against a registry and scale set
#[derive(Debug, Clone, Copy)]
pub struct Compositor<'a> {
    registry: &'a Registry,
    scales: &'a ScaleSet,
}

impl<'a> Compositor<'a> {
    /// Create a compositor over borrowed tables
    pub fn new(registry: &'a Registry, scales: &'a ScaleSet) -> Self {
        Self { registry, scales }
    }

    /// Compose a descriptor with options
    pub fn compose(
        &self,
        descriptor: &ResourceDescriptor,
        origin: Origin<'_>,
        options: &ResolveOptions,
    ) -> Result<(Composition, AppliedOptions)> {
        options.validate()?;

        let mut style = BTreeMap::new();

        // Layer 1: descriptor
        if let Some(family) = descriptor.backend.font_family() {
            style.insert("display".to_string(), "inline-flex".to_string());
            style.insert("fontFamily".to_string(), family.to_string());
        } else if let Some(value) = self
            .registry
            .value(descriptor.backend, &descriptor.identifier)
        {
            style.insert(format!("--token-{}", descriptor.backend), value.to_string());
        }

        // Layer 2: named scales and options
        let size = match options.size.as_deref() {
            Some(step) => self.scales.resolve(ScaleKind::Size, step),
            None => self.scales.table(ScaleKind::Size).default_value(),
        };
        style.insert("fontSize".to_string(), size.value.clone());

        let (color_name, color_value) = match options.color.as_deref() {
            Some(literal) if is_color_literal(literal) => (literal.to_string(), literal.to_string()),
            Some(step) => {
                let resolved = self.scales.resolve(ScaleKind::Color, step);
                (resolved.name.clone(), resolved.value.clone())
            }
            None => {
                let resolved = self.scales.table(ScaleKind::Color).default_value();
                (resolved.name.clone(), resolved.value.clone())
            }
        };
        style.insert("color".to_string(), color_value);

        if let Some(degrees) = options.rotate {
            style.insert("transform".to_string(), format!("rotate({}deg)", degrees));
        }

        // Layer 3: caller overrides
        for (property, value) in &options.style {
            style.insert(property.clone(), value.clone());
        }

        let class_name = compose_class_name(descriptor, origin, options);

        let applied = AppliedOptions {
            size: size.name.clone(),
            color: color_name,
            class_name: options.class_name.clone(),
            usage: options.fallback_usage(),
            rotate: options.rotate,
            spin: options.spin,
        };

        Ok((Composition { style, class_name }, applied))
    }
}

fn compose_class_name(
    descriptor: &ResourceDescriptor,
    origin: Origin<'_>,
    options: &ResolveOptions,
) -> String {
    let base = descriptor.backend.class_name();
    let mut parts: Vec<String> = vec![base.to_string()];
    if options.spin {
        parts.push(format!("{}-spin", base));
    }

    parts.push(match origin {
        Origin::Context { context, action } => format!("{}-{}", context, action),
        Origin::Descriptor => descriptor.identifier.to_kebab_case(),
    });

    if let Some(extra) = &options.class_name {
        parts.push(extra.clone());
    }

    parts
        .into_iter()
        .filter(|p| !p.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
