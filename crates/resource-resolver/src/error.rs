//! Error types for resource resolution
//!
//! Missing keys are not errors: they are reported through [`NotFound`] and
//! handled inside the resolver by substituting a fallback. Only malformed
//! caller input and broken static configuration surface as [`ResolveError`].

use crate::descriptor::{Backend, Usage};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced to callers of the engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A caller passed a malformed argument
    #[error("Invalid argument `{field}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        field: &'static str,
        /// Human readable description of the problem
        reason: String,
    },

    /// The static configuration is inconsistent
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

impl ResolveError {
    /// Build an [`ResolveError::InvalidArgument`]
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    /// Check if this error is an invalid argument
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Violations of the structural invariants of the static tables
///
/// These are raised while an engine is being built. A built engine never
/// produces them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// An identifier was registered twice in the same backend
    #[error("Duplicate identifier '{identifier}' in backend '{backend}'")]
    DuplicateIdentifier {
        /// Backend holding the duplicate
        backend: Backend,
        /// The duplicated identifier
        identifier: String,
    },

    /// An action was registered twice in the same context
    #[error("Duplicate action '{action}' in context '{context}'")]
    DuplicateAction {
        /// Context holding the duplicate
        context: String,
        /// The duplicated action
        action: String,
    },

    /// A context entry points at an identifier missing from the registry
    #[error("Context '{context}' action '{action}' references missing '{backend}/{identifier}'")]
    DanglingReference {
        /// Context of the broken entry
        context: String,
        /// Action of the broken entry
        action: String,
        /// Referenced backend
        backend: Backend,
        /// Referenced identifier
        identifier: String,
    },

    /// A context entry carries a descriptor that disagrees with the registry
    #[error("Context '{context}' action '{action}' declares usage {declared} but registry has {registered}")]
    UsageMismatch {
        /// Context of the broken entry
        context: String,
        /// Action of the broken entry
        action: String,
        /// Usage declared by the entry
        declared: Usage,
        /// Usage stored in the registry
        registered: Usage,
    },

    /// A fallback descriptor is missing or has the wrong usage
    #[error("Fallback for {usage} usage is invalid: {reason}")]
    InvalidFallback {
        /// Usage kind of the broken fallback
        usage: Usage,
        /// Description of the problem
        reason: String,
    },

    /// No fallback was configured for a usage kind
    #[error("No fallback configured for {0} usage")]
    MissingFallback(Usage),

    /// Token backends are registered but no token fallback was set
    #[error("Token backends are registered but no token fallback is configured")]
    MissingTokenFallback,

    /// A token default or token fallback does not name a registered token
    #[error("Token '{context}/{action}' is invalid: {reason}")]
    InvalidToken {
        /// Context of the token
        context: String,
        /// Action of the token
        action: String,
        /// Description of the problem
        reason: String,
    },

    /// A scale table is empty or its default step is not one of its steps
    #[error("Scale '{scale}' is invalid: {reason}")]
    InvalidScale {
        /// Scale name
        scale: String,
        /// Description of the problem
        reason: String,
    },

    /// A static key failed validation
    #[error("Invalid key '{key}': {reason}")]
    InvalidKey {
        /// The rejected key
        key: String,
        /// Description of the problem
        reason: String,
    },
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Why a lookup produced no descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotFound {
    /// The context is not registered
    ContextNotFound,
    /// The context exists but the action is not registered under it
    ActionNotFound,
    /// The backend name is not registered
    BackendNotFound,
    /// The backend exists but does not hold the identifier
    IdentifierNotFound,
}

impl NotFound {
    /// Stable reason code used in diagnostics
    pub fn reason(&self) -> &'static str {
        match self {
            NotFound::ContextNotFound => "context-not-found",
            NotFound::ActionNotFound => "action-not-found",
            NotFound::BackendNotFound => "backend-not-found",
            NotFound::IdentifierNotFound => "identifier-not-found",
        }
    }
}

impl std::fmt::Display for NotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.reason())
    }
}

const MAX_KEY_LEN: usize = 128;

/// Check a caller-supplied key before lookup
///
/// Only empty or whitespace-only keys are malformed. Any other string is a
/// candidate key; if nothing is registered under it the lookup misses and
/// the resolver falls back.
pub fn require_key(field: &'static str, key: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(ResolveError::invalid(field, "must not be empty"));
    }
    Ok(())
}

/// Validate a key declared in the static tables
///
/// Keys must be non-empty, at most 128 bytes, and made of ASCII letters,
/// digits, `.`, `_` or `-`.
pub fn validate_key(field: &'static str, key: &str) -> Result<()> {
    require_key(field, key)?;
    if key.len() > MAX_KEY_LEN {
        return Err(ResolveError::invalid(
            field,
            format!("must be at most {} bytes, got {}", MAX_KEY_LEN, key.len()),
        ));
    }
    if let Some(c) = key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')))
    {
        return Err(ResolveError::invalid(
            field,
            format!("contains invalid character {:?}", c),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key_accepts_symbols() {
        assert!(validate_key("context", "crud-actions").is_ok());
        assert!(validate_key("identifier", "CheckCircleOutlined").is_ok());
        assert!(validate_key("action", "500").is_ok());
        assert!(validate_key("context", "color.primary_1").is_ok());
    }

    #[test]
    fn test_validate_key_rejects_empty() {
        let err = validate_key("context", "").unwrap_err();
        assert!(err.is_invalid_argument());

        assert!(validate_key("context", "   ").is_err());
    }

    #[test]
    fn test_validate_key_rejects_bad_characters() {
        let err = validate_key("action", "log in").unwrap_err();
        assert!(matches!(
            err,
            ResolveError::InvalidArgument { field: "action", .. }
        ));
        assert!(validate_key("action", "status/success").is_err());
        assert!(validate_key("action", "ok\n").is_err());
    }

    #[test]
    fn test_require_key_only_rejects_blank() {
        assert!(require_key("action", "").unwrap_err().is_invalid_argument());
        assert!(require_key("action", " \t ").is_err());

        assert!(require_key("action", "log in").is_ok());
        assert!(require_key("action", "succès").is_ok());
        assert!(require_key("context", "crud actions").is_ok());
        assert!(require_key("action", &"a".repeat(129)).is_ok());
    }

    #[test]
    fn test_validate_key_rejects_long_keys() {
        let long = "a".repeat(129);
        assert!(validate_key("identifier", &long).is_err());
        assert!(validate_key("identifier", &long[..128]).is_ok());
    }

    #[test]
    fn test_not_found_reasons() {
        assert_eq!(NotFound::ContextNotFound.reason(), "context-not-found");
        assert_eq!(NotFound::ActionNotFound.to_string(), "action-not-found");
        assert_eq!(NotFound::BackendNotFound.reason(), "backend-not-found");
        assert_eq!(
            NotFound::IdentifierNotFound.reason(),
            "identifier-not-found"
        );
    }

    #[test]
    fn test_configuration_error_converts() {
        let err: ResolveError = ConfigurationError::MissingFallback(Usage::Decorative).into();
        assert!(matches!(err, ResolveError::Configuration(_)));
        assert!(err.to_string().contains("decorative"));
    }
}
