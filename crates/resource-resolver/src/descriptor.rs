//! Resource descriptors
//!
//! A [`ResourceDescriptor`] is the atomic resolvable unit: a backend, the
//! primitive identifier inside that backend, and a usage classification.

use serde::{Deserialize, Serialize};

// =============================================================================
// Backends
// =============================================================================

/// Registry partition a descriptor comes from
///
/// Four icon font sets and five design-token categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// Outlined icon font (Ant Design style names)
    IconFontA,
    /// Material icon font
    IconFontB,
    /// Font Awesome icon font
    IconFontC,
    /// Heroicons icon font
    IconFontD,
    /// Colour palette tokens
    Color,
    /// Font size tokens
    Size,
    /// Spacing tokens
    Spacing,
    /// Box shadow tokens
    Shadow,
    /// Border radius tokens
    Radius,
}

/// Broad family of a backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Glyph from an icon font
    Icon,
    /// Design token with a concrete CSS value
    Token,
}

impl Backend {
    /// All backends in canonical order
    pub const ALL: [Backend; 9] = [
        Backend::IconFontA,
        Backend::IconFontB,
        Backend::IconFontC,
        Backend::IconFontD,
        Backend::Color,
        Backend::Size,
        Backend::Spacing,
        Backend::Shadow,
        Backend::Radius,
    ];

    /// Wire name of the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::IconFontA => "icon-font-a",
            Backend::IconFontB => "icon-font-b",
            Backend::IconFontC => "icon-font-c",
            Backend::IconFontD => "icon-font-d",
            Backend::Color => "color",
            Backend::Size => "size",
            Backend::Spacing => "spacing",
            Backend::Shadow => "shadow",
            Backend::Radius => "radius",
        }
    }

    /// Family of the backend
    pub fn kind(&self) -> BackendKind {
        match self {
            Backend::IconFontA | Backend::IconFontB | Backend::IconFontC | Backend::IconFontD => {
                BackendKind::Icon
            }
            _ => BackendKind::Token,
        }
    }

    /// Check if this backend is an icon font
    pub fn is_icon(&self) -> bool {
        self.kind() == BackendKind::Icon
    }

    /// Base CSS class emitted for every resource of this backend
    pub fn class_name(&self) -> &'static str {
        match self {
            Backend::IconFontA => "anticon",
            Backend::IconFontB => "material-icons",
            Backend::IconFontC => "fa-icon",
            Backend::IconFontD => "hero-icon",
            Backend::Color => "token-color",
            Backend::Size => "token-size",
            Backend::Spacing => "token-spacing",
            Backend::Shadow => "token-shadow",
            Backend::Radius => "token-radius",
        }
    }

    /// Font family of an icon backend
    pub fn font_family(&self) -> Option<&'static str> {
        match self {
            Backend::IconFontA => Some("anticon"),
            Backend::IconFontB => Some("Material Icons"),
            Backend::IconFontC => Some("Font Awesome 6 Free"),
            Backend::IconFontD => Some("Heroicons"),
            _ => None,
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Backend::ALL
            .iter()
            .copied()
            .find(|backend| backend.as_str() == s)
            .ok_or_else(|| format!("Unknown backend: {}", s))
    }
}

// =============================================================================
// Usage
// =============================================================================

/// Whether a resource carries meaning or is purely ornamental
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Usage {
    /// Meaning-bearing resource
    #[default]
    Functional,
    /// Purely ornamental resource
    Decorative,
}

impl Usage {
    /// Both usage kinds, functional first
    pub const ALL: [Usage; 2] = [Usage::Functional, Usage::Decorative];

    /// Wire name of the usage
    pub fn as_str(&self) -> &'static str {
        match self {
            Usage::Functional => "functional",
            Usage::Decorative => "decorative",
        }
    }
}

impl std::fmt::Display for Usage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Usage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "functional" => Ok(Usage::Functional),
            "decorative" => Ok(Usage::Decorative),
            _ => Err(format!("Unknown usage: {}", s)),
        }
    }
}

// =============================================================================
// Descriptor
// =============================================================================

/// Concrete reference to a primitive resource
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// Registry partition
    pub backend: Backend,
    /// Primitive name within the backend
    pub identifier: String,
    /// Usage classification
    pub usage: Usage,
}

impl ResourceDescriptor {
    /// Create a new descriptor
    pub fn new(backend: Backend, identifier: impl Into<String>, usage: Usage) -> Self {
        Self {
            backend,
            identifier: identifier.into(),
            usage,
        }
    }

    /// Create a functional descriptor
    pub fn functional(backend: Backend, identifier: impl Into<String>) -> Self {
        Self::new(backend, identifier, Usage::Functional)
    }

    /// Create a decorative descriptor
    pub fn decorative(backend: Backend, identifier: impl Into<String>) -> Self {
        Self::new(backend, identifier, Usage::Decorative)
    }
}

impl std::fmt::Display for ResourceDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} ({})", self.backend, self.identifier, self.usage)
    }
}

/// Any caller-side reference to a resource, as accepted by validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ResourceRef {
    /// Symbolic `(context, action)` pair
    Contextual {
        /// Context name
        context: String,
        /// Action name
        action: String,
    },
    /// Primitive `(backend, identifier)` pair, backend given by name
    Direct {
        /// Backend name
        backend: String,
        /// Identifier within the backend
        identifier: String,
    },
    /// A fully formed descriptor
    Descriptor(ResourceDescriptor),
}

impl ResourceRef {
    /// Reference a context action
    pub fn contextual(context: impl Into<String>, action: impl Into<String>) -> Self {
        Self::Contextual {
            context: context.into(),
            action: action.into(),
        }
    }

    /// Reference a backend identifier
    pub fn direct(backend: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::Direct {
            backend: backend.into(),
            identifier: identifier.into(),
        }
    }
}

impl From<ResourceDescriptor> for ResourceRef {
    fn from(descriptor: ResourceDescriptor) -> Self {
        Self::Descriptor(descriptor)
    }
}
