//! Resolver configuration
//!
//! Static resource tables live in code; the knobs here only control how the
//! engine reports degradation.

use crate::diagnostics::DiagnosticLevel;
use crate::error::{ResolveError, Result};
use serde::{Deserialize, Serialize};

/// Runtime configuration of an engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolverConfig {
    /// Log level of fallback and invalid-argument events
    pub diagnostic_level: DiagnosticLevel,

    /// Report invalid arguments to the diagnostic channel as well as the caller
    pub report_invalid_arguments: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            diagnostic_level: DiagnosticLevel::Warn,
            report_invalid_arguments: true,
        }
    }
}

impl ResolverConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ResolveError::invalid("config", e.to_string()))
    }

    /// Set the diagnostic log level
    pub fn with_diagnostic_level(mut self, level: DiagnosticLevel) -> Self {
        self.diagnostic_level = level;
        self
    }

    /// Quiet configuration for tests and tooling
    pub fn quiet() -> Self {
        Self::default().with_diagnostic_level(DiagnosticLevel::Off)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ResolverConfig::default();
        assert_eq!(config.diagnostic_level, DiagnosticLevel::Warn);
        assert!(config.report_invalid_arguments);
    }

    #[test]
    fn test_from_json_partial() {
        let config = ResolverConfig::from_json_str(r#"{"diagnosticLevel":"debug"}"#).unwrap();
        assert_eq!(config.diagnostic_level, DiagnosticLevel::Debug);
        assert!(config.report_invalid_arguments);

        let config = ResolverConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ResolverConfig::default());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = ResolverConfig::from_json_str(r#"{"diagnosticLevel":"loud"}"#).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidArgument { field: "config", .. }));
    }

    #[test]
    fn test_quiet() {
        assert_eq!(ResolverConfig::quiet().diagnostic_level, DiagnosticLevel::Off);
    }
}
