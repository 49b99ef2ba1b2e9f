//! Named scale tables
//!
//! Each scale (size, color, spacing, shadow, radius) is a fixed list of
//! named steps with a documented default step. Looking up an unknown step
//! yields the default step instead of failing.

use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Kind of named scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    /// Font/icon size scale
    Size,
    /// Named colour scale
    Color,
    /// Spacing scale
    Spacing,
    /// Shadow scale
    Shadow,
    /// Border radius scale
    Radius,
}

impl ScaleKind {
    /// All scale kinds in documentation order
    pub const ALL: [ScaleKind; 5] = [
        ScaleKind::Size,
        ScaleKind::Color,
        ScaleKind::Spacing,
        ScaleKind::Shadow,
        ScaleKind::Radius,
    ];

    /// Wire name of the scale
    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleKind::Size => "size",
            ScaleKind::Color => "color",
            ScaleKind::Spacing => "spacing",
            ScaleKind::Shadow => "shadow",
            ScaleKind::Radius => "radius",
        }
    }
}

impl std::fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ScaleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScaleKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown scale: {}", s))
    }
}

/// One named step of a scale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleStep {
    /// Step name (e.g. "lg", "primary")
    pub name: String,
    /// Concrete CSS value (e.g. "20px", "#0ea5e9")
    pub value: String,
}

/// A fixed named scale with a default step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleTable {
    kind: ScaleKind,
    default_step: String,
    steps: Vec<ScaleStep>,
    index: HashMap<String, usize>,
}

impl ScaleTable {
    /// Build a scale table
    ///
    /// The default step must be one of the steps and step names must be
    /// unique.
    pub fn new<'a>(
        kind: ScaleKind,
        default_step: &str,
        steps: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, ConfigurationError> {
        Self::from_steps(
            kind,
            default_step,
            steps.into_iter().map(|(name, value)| ScaleStep {
                name: name.to_string(),
                value: value.to_string(),
            }),
        )
    }

    /// Build a scale table from owned steps
    pub fn from_steps(
        kind: ScaleKind,
        default_step: &str,
        steps: impl IntoIterator<Item = ScaleStep>,
    ) -> Result<Self, ConfigurationError> {
        let invalid = |reason: String| ConfigurationError::InvalidScale {
            scale: kind.to_string(),
            reason,
        };

        let mut table = Self {
            kind,
            default_step: default_step.to_string(),
            steps: Vec::new(),
            index: HashMap::new(),
        };
        for step in steps {
            if table.index.contains_key(&step.name) {
                return Err(invalid(format!("duplicate step '{}'", step.name)));
            }
            table.index.insert(step.name.clone(), table.steps.len());
            table.steps.push(step);
        }

        if table.steps.is_empty() {
            return Err(invalid("scale has no steps".to_string()));
        }
        if !table.index.contains_key(default_step) {
            return Err(invalid(format!(
                "default step '{}' is not a step of the scale",
                default_step
            )));
        }
        Ok(table)
    }

    /// Kind of this scale
    pub fn kind(&self) -> ScaleKind {
        self.kind
    }

    /// Name of the default step
    pub fn default_step(&self) -> &str {
        &self.default_step
    }

    /// Steps in declaration order
    pub fn steps(&self) -> &[ScaleStep] {
        &self.steps
    }

    /// Look up a step without degrading
    pub fn get(&self, step: &str) -> Option<&ScaleStep> {
        self.index.get(step).map(|&i| &self.steps[i])
    }

    /// Check if a step exists
    pub fn contains(&self, step: &str) -> bool {
        self.index.contains_key(step)
    }

    /// The default step
    pub fn default_value(&self) -> &ScaleStep {
        &self.steps[self.index[&self.default_step]]
    }

    /// Look up a step, degrading to the default step when unknown
    pub fn resolve(&self, step: &str) -> &ScaleStep {
        match self.get(step) {
            Some(found) => found,
            None => {
                tracing::debug!(
                    scale = %self.kind,
                    step,
                    default = %self.default_step,
                    "Unknown scale step, using default"
                );
                self.default_value()
            }
        }
    }
}

/// The full set of scale tables used by the compositor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleSet {
    tables: Vec<ScaleTable>,
}

impl ScaleSet {
    /// Assemble a scale set; every [`ScaleKind`] must appear exactly once
    pub fn new(tables: impl IntoIterator<Item = ScaleTable>) -> Result<Self, ConfigurationError> {
        let mut tables: Vec<ScaleTable> = tables.into_iter().collect();
        for kind in ScaleKind::ALL {
            let count = tables.iter().filter(|t| t.kind == kind).count();
            if count != 1 {
                return Err(ConfigurationError::InvalidScale {
                    scale: kind.to_string(),
                    reason: format!("expected exactly one table, found {}", count),
                });
            }
        }
        tables.sort_by_key(|t| ScaleKind::ALL.iter().position(|k| *k == t.kind));
        Ok(Self { tables })
    }

    /// Table of a scale kind
    pub fn table(&self, kind: ScaleKind) -> &ScaleTable {
        // `new` guarantees one table per kind, in `ScaleKind::ALL` order
        &self.tables[ScaleKind::ALL
            .iter()
            .position(|k| *k == kind)
            .unwrap_or_default()]
    }

    /// Look up a step of a scale, degrading to the scale default
    pub fn resolve(&self, kind: ScaleKind, step: &str) -> &ScaleStep {
        self.table(kind).resolve(step)
    }

    /// Tables in documentation order
    pub fn tables(&self) -> &[ScaleTable] {
        &self.tables
    }
}

/// Check if a colour option is a literal CSS colour rather than a scale step
pub fn is_color_literal(value: &str) -> bool {
    const FUNCTIONS: [&str; 5] = ["rgb(", "rgba(", "hsl(", "hsla(", "var("];
    const KEYWORDS: [&str; 3] = ["currentColor", "transparent", "inherit"];

    value.starts_with('#')
        || FUNCTIONS.iter().any(|f| value.starts_with(f))
        || KEYWORDS.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size_table() -> ScaleTable {
        ScaleTable::new(
            ScaleKind::Size,
            "base",
            [("sm", "14px"), ("base", "16px"), ("lg", "20px")],
        )
        .unwrap()
    }

    fn full_set() -> ScaleSet {
        ScaleSet::new(vec![
            ScaleTable::new(ScaleKind::Radius, "md", [("md", "6px")]).unwrap(),
            size_table(),
            ScaleTable::new(ScaleKind::Color, "neutral", [("neutral", "#64748b")]).unwrap(),
            ScaleTable::new(ScaleKind::Spacing, "md", [("md", "16px")]).unwrap(),
            ScaleTable::new(ScaleKind::Shadow, "sm", [("sm", "0 1px 2px")]).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_scale_get() {
        let table = size_table();
        assert_eq!(table.get("lg").unwrap().value, "20px");
        assert!(table.get("huge").is_none());
    }

    #[test]
    fn test_unknown_step_uses_default() {
        let table = size_table();
        assert_eq!(table.resolve("unknown"), table.resolve("base"));
        assert_eq!(table.resolve("").value, "16px");
    }

    #[test]
    fn test_default_must_exist() {
        let err = ScaleTable::new(ScaleKind::Size, "base", [("sm", "14px")]).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidScale { .. }));
    }

    #[test]
    fn test_duplicate_step_rejected() {
        let err = ScaleTable::new(
            ScaleKind::Size,
            "sm",
            [("sm", "14px"), ("sm", "15px")],
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_empty_scale_rejected() {
        let err = ScaleTable::new(ScaleKind::Radius, "md", []).unwrap_err();
        assert!(err.to_string().contains("no steps"));
    }

    #[test]
    fn test_scale_set_orders_tables() {
        let set = full_set();
        let kinds: Vec<_> = set.tables().iter().map(|t| t.kind()).collect();
        assert_eq!(kinds, ScaleKind::ALL.to_vec());
        assert_eq!(set.resolve(ScaleKind::Size, "lg").value, "20px");
        assert_eq!(set.resolve(ScaleKind::Color, "nope").name, "neutral");
    }

    #[test]
    fn test_scale_set_requires_every_kind() {
        let err = ScaleSet::new(vec![size_table()]).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidScale { .. }));
    }

    #[test]
    fn test_scale_kind_parse() {
        assert_eq!("spacing".parse::<ScaleKind>().unwrap(), ScaleKind::Spacing);
        assert!("opacity".parse::<ScaleKind>().is_err());
    }

    #[test]
    fn test_color_literals() {
        assert!(is_color_literal("#0ea5e9"));
        assert!(is_color_literal("rgba(0, 0, 0, 0.1)"));
        assert!(is_color_literal("currentColor"));
        assert!(is_color_literal("var(--brand)"));
        assert!(!is_color_literal("primary"));
        assert!(!is_color_literal("neutral"));
    }
}
