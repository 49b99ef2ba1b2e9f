//! Context-scoped resource resolution
//!
//! This crate resolves symbolic UI resource keys (icons and design tokens)
//! to concrete, typed descriptors and presentation-ready styles. A missing
//! key never breaks the caller: it degrades to a designated fallback and is
//! reported on a structured diagnostic channel.
//!
//! # Modules
//!
//! - [`descriptor`] - Backends, usage kinds and resource descriptors
//! - [`registry`] - Backend-partitioned primitive tables
//! - [`context_map`] - `(context, action)` symbolic mapping
//! - [`fallback`] - Per-usage default descriptors
//! - [`scale`] - Named scale tables (size, color, spacing, shadow, radius)
//! - [`compose`] - Style and class name composition
//! - [`engine`] - The resolver engine and its builder
//! - [`describe`] - Documentation tree and invariant audit
//! - [`diagnostics`] - Diagnostic events, sinks and counters
//! - [`config`] - Runtime configuration
//! - [`error`] - Error types
//!
//! Static tables for a concrete application live outside this crate; see the
//! `ui-catalog` crate for the bus-ticketing UI catalog.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compose;
pub mod config;
pub mod context_map;
pub mod describe;
pub mod descriptor;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod fallback;
pub mod registry;
pub mod scale;

// Re-export commonly used types
pub use compose::{AppliedOptions, Composition, ResolveOptions};
pub use config::ResolverConfig;
pub use context_map::{ContextDefinition, ContextEntry, ContextMap};
pub use describe::{AuditIssue, DocumentationTree};
pub use descriptor::{Backend, BackendKind, ResourceDescriptor, ResourceRef, Usage};
pub use diagnostics::{
    DiagnosticCounts, DiagnosticEvent, DiagnosticLevel, DiagnosticSink, Reason, RecordingSink,
    Subject,
};
pub use engine::{Engine, EngineBuilder, ResolvedValue, TokenValue};
pub use error::{ConfigurationError, NotFound, ResolveError, Result};
pub use fallback::FallbackTable;
pub use registry::Registry;
pub use scale::{ScaleKind, ScaleSet, ScaleStep, ScaleTable};
