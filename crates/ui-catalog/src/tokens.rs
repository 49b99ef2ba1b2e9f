//! Design tokens for the ticketing UI
//!
//! This module provides the colour palettes and the size, spacing, shadow
//! and radius scales. Every token is registered in the resolver under its
//! category backend and exposed through a `*-scale` context.

use resource_resolver::{
    Backend, ConfigurationError, ContextDefinition, EngineBuilder, ResourceDescriptor, ScaleKind,
    ScaleStep, ScaleTable, Usage,
};
use serde::{Deserialize, Serialize};

/// Shade names shared by every palette, lightest first
pub const SHADES: [&str; 10] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900",
];

/// Shade used when a palette shade is missing
pub const DEFAULT_SHADE: &str = "500";

// =============================================================================
// Colour Palettes
// =============================================================================

/// A named palette with ten shades
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Palette name, also the named colour step
    pub name: &'static str,
    /// Hex values in [`SHADES`] order
    pub shades: [&'static str; 10],
}

impl Palette {
    /// Hex value of a shade
    pub fn get(&self, shade: &str) -> Option<&'static str> {
        SHADES
            .iter()
            .position(|s| *s == shade)
            .map(|i| self.shades[i])
    }

    /// Base (500) value
    pub fn base(&self) -> &'static str {
        self.shades[5]
    }

    /// Registry identifier of a shade, e.g. `primary-500`
    pub fn identifier(&self, shade: &str) -> String {
        format!("{}-{}", self.name, shade)
    }

    /// Context name of the palette, e.g. `color-primary`
    pub fn context(&self) -> String {
        format!("color-{}", self.name)
    }
}

/// Palette definitions
pub mod palette {
    use super::Palette;

    /// Brand sky blue
    pub const PRIMARY: Palette = Palette {
        name: "primary",
        shades: [
            "#f0f9ff", "#e0f2fe", "#bae6fd", "#7dd3fc", "#38bdf8", "#0ea5e9", "#0284c7",
            "#0369a1", "#075985", "#0c4a6e",
        ],
    };

    /// Secondary violet
    pub const SECONDARY: Palette = Palette {
        name: "secondary",
        shades: [
            "#f5f3ff", "#ede9fe", "#ddd6fe", "#c4b5fd", "#a78bfa", "#8b5cf6", "#7c3aed",
            "#6d28d9", "#5b21b6", "#4c1d95",
        ],
    };

    /// Confirmations and paid tickets
    pub const SUCCESS: Palette = Palette {
        name: "success",
        shades: [
            "#f0fdf4", "#dcfce7", "#bbf7d0", "#86efac", "#4ade80", "#22c55e", "#16a34a",
            "#15803d", "#166534", "#14532d",
        ],
    };

    /// Pending payments and delays
    pub const WARNING: Palette = Palette {
        name: "warning",
        shades: [
            "#fffbeb", "#fef3c7", "#fde68a", "#fcd34d", "#fbbf24", "#f59e0b", "#d97706",
            "#b45309", "#92400e", "#78350f",
        ],
    };

    /// Errors and cancellations
    pub const DANGER: Palette = Palette {
        name: "danger",
        shades: [
            "#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444", "#dc2626",
            "#b91c1c", "#991b1b", "#7f1d1d",
        ],
    };

    /// Informational notices
    pub const INFO: Palette = Palette {
        name: "info",
        shades: [
            "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb",
            "#1d4ed8", "#1e40af", "#1e3a8a",
        ],
    };

    /// Slate greys for text, borders and surfaces
    pub const NEUTRAL: Palette = Palette {
        name: "neutral",
        shades: [
            "#f8fafc", "#f1f5f9", "#e2e8f0", "#cbd5e1", "#94a3b8", "#64748b", "#475569",
            "#334155", "#1e293b", "#0f172a",
        ],
    };

    /// All palettes in documentation order
    pub const ALL: [Palette; 7] = [NEUTRAL, PRIMARY, SECONDARY, SUCCESS, WARNING, DANGER, INFO];

    /// Find a palette by name
    pub fn get(name: &str) -> Option<Palette> {
        ALL.iter().copied().find(|p| p.name == name)
    }
}

/// Pure colours outside the palettes
pub mod base_colors {
    /// White
    pub const WHITE: &str = "#ffffff";
    /// Black
    pub const BLACK: &str = "#000000";
}

/// Default named colour step
pub const DEFAULT_COLOR: &str = "neutral";

// =============================================================================
// Size Tokens
// =============================================================================

/// Font and icon size scale
pub mod size {
    /// Default step
    pub const DEFAULT: &str = "base";

    /// Steps, smallest first
    pub const STEPS: [(&str, &str); 7] = [
        ("xs", "12px"),
        ("sm", "14px"),
        ("base", "16px"),
        ("lg", "20px"),
        ("xl", "24px"),
        ("2xl", "32px"),
        ("3xl", "40px"),
    ];
}

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale on a 4px base unit
pub mod spacing {
    /// Default step
    pub const DEFAULT: &str = "md";

    /// Steps, smallest first
    pub const STEPS: [(&str, &str); 7] = [
        ("none", "0px"),
        ("xs", "4px"),
        ("sm", "8px"),
        ("md", "16px"),
        ("lg", "24px"),
        ("xl", "32px"),
        ("2xl", "48px"),
    ];
}

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Border radius scale
pub mod radius {
    /// Default step
    pub const DEFAULT: &str = "md";

    /// Steps, smallest first
    pub const STEPS: [(&str, &str); 6] = [
        ("none", "0px"),
        ("sm", "2px"),
        ("md", "6px"),
        ("lg", "8px"),
        ("xl", "12px"),
        ("full", "9999px"),
    ];
}

// =============================================================================
// Shadow Tokens
// =============================================================================

/// Shadow definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Blur radius
    pub blur: f32,
    /// Spread radius
    pub spread: f32,
    /// Shadow color (with alpha)
    pub color: String,
}

impl Shadow {
    /// Create a new shadow
    pub fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: &str) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color: color.to_string(),
        }
    }

    /// CSS `box-shadow` value
    pub fn to_css(&self) -> String {
        if self.blur == 0.0 && self.offset_x == 0.0 && self.offset_y == 0.0 && self.spread == 0.0 {
            return "none".to_string();
        }
        format!(
            "{}px {}px {}px {}px {}",
            self.offset_x, self.offset_y, self.blur, self.spread, self.color
        )
    }
}

/// Shadow presets
pub mod shadows {
    use super::Shadow;

    /// Default step
    pub const DEFAULT: &str = "sm";

    /// No shadow
    pub fn none() -> Shadow {
        Shadow::new(0.0, 0.0, 0.0, 0.0, "transparent")
    }

    /// Small shadow (cards)
    pub fn sm() -> Shadow {
        Shadow::new(0.0, 1.0, 2.0, 0.0, "rgba(0, 0, 0, 0.05)")
    }

    /// Medium shadow (dropdowns)
    pub fn md() -> Shadow {
        Shadow::new(0.0, 4.0, 6.0, -1.0, "rgba(0, 0, 0, 0.1)")
    }

    /// Large shadow (modals)
    pub fn lg() -> Shadow {
        Shadow::new(0.0, 10.0, 15.0, -3.0, "rgba(0, 0, 0, 0.1)")
    }

    /// Extra large shadow (drawers)
    pub fn xl() -> Shadow {
        Shadow::new(0.0, 20.0, 25.0, -5.0, "rgba(0, 0, 0, 0.1)")
    }

    /// Steps with their CSS values, smallest first
    pub fn steps() -> Vec<(&'static str, String)> {
        vec![
            ("none", none().to_css()),
            ("sm", sm().to_css()),
            ("md", md().to_css()),
            ("lg", lg().to_css()),
            ("xl", xl().to_css()),
        ]
    }
}

// =============================================================================
// Registration
// =============================================================================

fn named_colors() -> Vec<(&'static str, &'static str)> {
    let mut colors: Vec<_> = palette::ALL.iter().map(|p| (p.name, p.base())).collect();
    colors.push(("white", base_colors::WHITE));
    colors.push(("black", base_colors::BLACK));
    colors
}

/// Register every token, its contexts, defaults and scale tables
pub fn install(mut builder: EngineBuilder) -> Result<EngineBuilder, ConfigurationError> {
    // Colour backend: palette shades plus pure colours
    for p in palette::ALL {
        for (shade, value) in SHADES.iter().zip(p.shades) {
            builder = builder.register_token(
                ResourceDescriptor::functional(Backend::Color, p.identifier(shade)),
                value,
            );
        }
    }
    builder = builder
        .register_token(ResourceDescriptor::functional(Backend::Color, "white"), base_colors::WHITE)
        .register_token(ResourceDescriptor::functional(Backend::Color, "black"), base_colors::BLACK);

    let shadow_steps = shadows::steps();
    let scales: [(Backend, ScaleKind, Usage, &str, Vec<(&str, String)>); 4] = [
        (Backend::Size, ScaleKind::Size, Usage::Functional, size::DEFAULT, owned(&size::STEPS)),
        (
            Backend::Spacing,
            ScaleKind::Spacing,
            Usage::Functional,
            spacing::DEFAULT,
            owned(&spacing::STEPS),
        ),
        (
            Backend::Shadow,
            ScaleKind::Shadow,
            Usage::Decorative,
            shadows::DEFAULT,
            shadow_steps,
        ),
        (
            Backend::Radius,
            ScaleKind::Radius,
            Usage::Decorative,
            radius::DEFAULT,
            owned(&radius::STEPS),
        ),
    ];

    for (backend, kind, usage, default, steps) in scales {
        let context_name = format!("{}-scale", kind);
        let mut context = ContextDefinition::new(&context_name);
        for (step, value) in &steps {
            builder = builder.register_token(ResourceDescriptor::new(backend, *step, usage), value.clone());
            context = context.primitive(*step, backend, *step);
        }
        builder = builder
            .context(context)
            .token_default(&context_name, default)
            .scale(scale_table(kind, default, &steps)?);
    }

    // Named colour scale and per-palette shade contexts
    let colors = named_colors();
    let mut color_scale = ContextDefinition::new("color-scale");
    for (name, _) in &colors {
        let identifier = match palette::get(name) {
            Some(p) => p.identifier(DEFAULT_SHADE),
            None => name.to_string(),
        };
        color_scale = color_scale.primitive(*name, Backend::Color, identifier);
    }
    builder = builder
        .context(color_scale)
        .token_default("color-scale", DEFAULT_COLOR)
        .token_fallback("color-scale", DEFAULT_COLOR)
        .scale(scale_table(
            ScaleKind::Color,
            DEFAULT_COLOR,
            &colors
                .iter()
                .map(|(n, v)| (*n, v.to_string()))
                .collect::<Vec<_>>(),
        )?);

    for p in palette::ALL {
        let mut context = ContextDefinition::new(p.context());
        for shade in SHADES {
            context = context.primitive(shade, Backend::Color, p.identifier(shade));
        }
        builder = builder
            .context(context)
            .token_default(p.context(), DEFAULT_SHADE);
    }

    Ok(builder)
}

fn owned(steps: &[(&'static str, &'static str)]) -> Vec<(&'static str, String)> {
    steps.iter().map(|(n, v)| (*n, v.to_string())).collect()
}

fn scale_table(
    kind: ScaleKind,
    default: &str,
    steps: &[(&str, String)],
) -> Result<ScaleTable, ConfigurationError> {
    ScaleTable::from_steps(
        kind,
        default,
        steps.iter().map(|(name, value)| ScaleStep {
            name: name.to_string(),
            value: value.clone(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Palette Tests
    // ==========================================================================

    #[test]
    fn test_palette_shades_are_hex() {
        for p in palette::ALL {
            for shade in p.shades {
                assert!(shade.starts_with('#'), "{} has bad shade {}", p.name, shade);
                assert_eq!(shade.len(), 7, "{} has bad shade {}", p.name, shade);
            }
        }
    }

    #[test]
    fn test_palette_lookup() {
        assert_eq!(palette::PRIMARY.get("500"), Some("#0ea5e9"));
        assert_eq!(palette::PRIMARY.base(), "#0ea5e9");
        assert_eq!(palette::NEUTRAL.get("950"), None);
        assert_eq!(palette::PRIMARY.identifier("600"), "primary-600");
        assert_eq!(palette::DANGER.context(), "color-danger");
        assert!(palette::get("info").is_some());
        assert!(palette::get("plaid").is_none());
    }

    #[test]
    fn test_palette_names_unique() {
        let mut names: Vec<_> = palette::ALL.iter().map(|p| p.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), palette::ALL.len());
    }

    // ==========================================================================
    // Scale Tests
    // ==========================================================================

    #[test]
    fn test_scale_defaults_exist() {
        assert!(size::STEPS.iter().any(|(n, _)| *n == size::DEFAULT));
        assert!(spacing::STEPS.iter().any(|(n, _)| *n == spacing::DEFAULT));
        assert!(radius::STEPS.iter().any(|(n, _)| *n == radius::DEFAULT));
        assert!(shadows::steps().iter().any(|(n, _)| *n == shadows::DEFAULT));
    }

    #[test]
    fn test_size_lg_is_20px() {
        let lg = size::STEPS.iter().find(|(n, _)| *n == "lg").unwrap();
        assert_eq!(lg.1, "20px");
    }

    // ==========================================================================
    // Shadow Tests
    // ==========================================================================

    #[test]
    fn test_shadow_css() {
        assert_eq!(shadows::none().to_css(), "none");
        assert_eq!(shadows::sm().to_css(), "0px 1px 2px 0px rgba(0, 0, 0, 0.05)");
        assert_eq!(shadows::md().to_css(), "0px 4px 6px -1px rgba(0, 0, 0, 0.1)");
    }

    #[test]
    fn test_shadow_presets_grow() {
        assert!(shadows::sm().blur < shadows::md().blur);
        assert!(shadows::md().blur < shadows::lg().blur);
        assert!(shadows::lg().blur < shadows::xl().blur);
    }

    #[test]
    fn test_shadow_serialization() {
        let shadow = shadows::md();
        let json = serde_json::to_string(&shadow).unwrap();
        let deserialized: Shadow = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, shadow);
    }

    #[test]
    fn test_named_colors() {
        let colors = named_colors();
        assert_eq!(colors[0], ("neutral", "#64748b"));
        assert!(colors.contains(&("primary", "#0ea5e9")));
        assert!(colors.contains(&("white", "#ffffff")));
    }
}
