//! Structured diagnostics
//!
//! Every fallback substitution and every rejected argument produces exactly
//! one [`DiagnosticEvent`]. Events are logged through `tracing`, counted, and
//! forwarded to an optional [`DiagnosticSink`] so callers and tests can observe
//! degradation without inspecting the returned values.

use crate::error::NotFound;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// What was being resolved when the event occurred
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Subject {
    /// A `(context, action)` lookup
    Context {
        /// Requested context
        context: String,
        /// Requested action
        action: String,
    },
    /// A `(backend, identifier)` lookup
    Backend {
        /// Requested backend name
        backend: String,
        /// Requested identifier
        identifier: String,
    },
    /// A standalone scale, token or composition call
    Scale {
        /// Scale or category name
        scale: String,
        /// Requested step
        step: String,
    },
}

impl Subject {
    /// Subject for a context lookup
    pub fn context(context: &str, action: &str) -> Self {
        Self::Context {
            context: context.to_string(),
            action: action.to_string(),
        }
    }

    /// Subject for a direct lookup
    pub fn backend(backend: &str, identifier: &str) -> Self {
        Self::Backend {
            backend: backend.to_string(),
            identifier: identifier.to_string(),
        }
    }

    /// Subject for a scale lookup
    pub fn scale(scale: &str, step: &str) -> Self {
        Self::Scale {
            scale: scale.to_string(),
            step: step.to_string(),
        }
    }

    /// `(namespace, key)` pair of the subject
    pub fn parts(&self) -> (&str, &str) {
        match self {
            Subject::Context { context, action } => (context, action),
            Subject::Backend {
                backend,
                identifier,
            } => (backend, identifier),
            Subject::Scale { scale, step } => (scale, step),
        }
    }
}

/// Reason code of a diagnostic event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Reason {
    /// The context is not registered
    ContextNotFound,
    /// The action is not registered under the context
    ActionNotFound,
    /// The backend name is not registered
    BackendNotFound,
    /// The identifier is not registered under the backend
    IdentifierNotFound,
    /// The caller passed a malformed argument
    InvalidArgument,
}

impl Reason {
    /// All reasons
    pub const ALL: [Reason; 5] = [
        Reason::ContextNotFound,
        Reason::ActionNotFound,
        Reason::BackendNotFound,
        Reason::IdentifierNotFound,
        Reason::InvalidArgument,
    ];

    /// Stable reason code
    pub fn as_str(&self) -> &'static str {
        match self.not_found() {
            Some(not_found) => not_found.reason(),
            None => "invalid-argument",
        }
    }

    /// The lookup miss behind this reason, if it is a fallback
    pub fn not_found(&self) -> Option<NotFound> {
        match self {
            Reason::ContextNotFound => Some(NotFound::ContextNotFound),
            Reason::ActionNotFound => Some(NotFound::ActionNotFound),
            Reason::BackendNotFound => Some(NotFound::BackendNotFound),
            Reason::IdentifierNotFound => Some(NotFound::IdentifierNotFound),
            Reason::InvalidArgument => None,
        }
    }

    /// Check if this reason caused a fallback substitution
    pub fn is_fallback(&self) -> bool {
        self.not_found().is_some()
    }
}

impl From<NotFound> for Reason {
    fn from(not_found: NotFound) -> Self {
        match not_found {
            NotFound::ContextNotFound => Reason::ContextNotFound,
            NotFound::ActionNotFound => Reason::ActionNotFound,
            NotFound::BackendNotFound => Reason::BackendNotFound,
            NotFound::IdentifierNotFound => Reason::IdentifierNotFound,
        }
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One diagnostic event
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiagnosticEvent {
    /// What was being resolved
    pub subject: Subject,
    /// Why the event was raised
    pub reason: Reason,
}

impl DiagnosticEvent {
    /// Create an event
    pub fn new(subject: Subject, reason: Reason) -> Self {
        Self { subject, reason }
    }
}

// =============================================================================
// Sinks
// =============================================================================

/// Receiver of diagnostic events
pub trait DiagnosticSink: Send + Sync {
    /// Handle one event
    fn emit(&self, event: &DiagnosticEvent);
}

/// Sink that stores every event in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl RecordingSink {
    /// Create an empty recording sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded events
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events.lock().clone()
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Check if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Drain recorded events
    pub fn take(&self) -> Vec<DiagnosticEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, event: &DiagnosticEvent) {
        self.events.lock().push(event.clone());
    }
}

// =============================================================================
// Dispatcher
// =============================================================================

/// Log level used for diagnostic events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    /// Log at WARN
    #[default]
    Warn,
    /// Log at DEBUG
    Debug,
    /// Do not log (sink and counters still receive events)
    Off,
}

/// Snapshot of diagnostic counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticCounts {
    /// Fallback substitutions
    pub fallbacks: u64,
    /// Rejected arguments
    pub invalid_arguments: u64,
}

/// Routes events to tracing, counters and the configured sink
#[derive(Default)]
pub struct Diagnostics {
    level: DiagnosticLevel,
    sink: Option<Arc<dyn DiagnosticSink>>,
    fallbacks: AtomicU64,
    invalid_arguments: AtomicU64,
}

impl std::fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics")
            .field("level", &self.level)
            .field("has_sink", &self.sink.is_some())
            .field("counts", &self.counts())
            .finish()
    }
}

impl Diagnostics {
    /// Create a dispatcher
    pub fn new(level: DiagnosticLevel, sink: Option<Arc<dyn DiagnosticSink>>) -> Self {
        Self {
            level,
            sink,
            fallbacks: AtomicU64::new(0),
            invalid_arguments: AtomicU64::new(0),
        }
    }

    /// Dispatch one event
    pub fn emit(&self, event: DiagnosticEvent) {
        let (namespace, key) = event.subject.parts();
        let reason = event.reason.as_str();

        if event.reason.is_fallback() {
            self.fallbacks.fetch_add(1, Ordering::Relaxed);
        } else {
            self.invalid_arguments.fetch_add(1, Ordering::Relaxed);
        }

        match self.level {
            DiagnosticLevel::Warn => {
                tracing::warn!(namespace, key, reason, "Resource resolution degraded")
            }
            DiagnosticLevel::Debug => {
                tracing::debug!(namespace, key, reason, "Resource resolution degraded")
            }
            DiagnosticLevel::Off => {}
        }

        if let Some(sink) = &self.sink {
            sink.emit(&event);
        }
    }

    /// Current counter values
    pub fn counts(&self) -> DiagnosticCounts {
        DiagnosticCounts {
            fallbacks: self.fallbacks.load(Ordering::Relaxed),
            invalid_arguments: self.invalid_arguments.load(Ordering::Relaxed),
        }
    }

    /// Configured log level
    pub fn level(&self) -> DiagnosticLevel {
        self.level
    }
}
