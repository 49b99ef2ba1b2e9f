//! The resolver engine
//!
//! An [`Engine`] bundles the registry, context map, fallback table and scale
//! tables. It is assembled once with an [`EngineBuilder`], which checks every
//! structural invariant, and is read-only afterwards. Share it by reference
//! or behind an `Arc`; all methods take `&self`.
//!
//! # Example
//!
//! ```rust
//! use resource_resolver::{
//!     Backend, ContextDefinition, Engine, FallbackTable, ResolveOptions,
//!     ResourceDescriptor, ScaleKind, ScaleTable,
//! };
//!
//! let engine = Engine::builder()
//!     .register(ResourceDescriptor::functional(Backend::IconFontA, "CheckCircleOutlined"))
//!     .register(ResourceDescriptor::functional(Backend::IconFontA, "QuestionCircleOutlined"))
//!     .register(ResourceDescriptor::decorative(Backend::IconFontA, "BorderOutlined"))
//!     .context(
//!         ContextDefinition::new("status")
//!             .primitive("success", Backend::IconFontA, "CheckCircleOutlined"),
//!     )
//!     .fallbacks(FallbackTable::new(
//!         ResourceDescriptor::functional(Backend::IconFontA, "QuestionCircleOutlined"),
//!         ResourceDescriptor::decorative(Backend::IconFontA, "BorderOutlined"),
//!     ))
//!     .scale(ScaleTable::new(ScaleKind::Size, "base", [("base", "16px"), ("lg", "20px")]).unwrap())
//!     .scale(ScaleTable::new(ScaleKind::Color, "neutral", [("neutral", "#64748b")]).unwrap())
//!     .scale(ScaleTable::new(ScaleKind::Spacing, "md", [("md", "16px")]).unwrap())
//!     .scale(ScaleTable::new(ScaleKind::Shadow, "sm", [("sm", "none")]).unwrap())
//!     .scale(ScaleTable::new(ScaleKind::Radius, "md", [("md", "6px")]).unwrap())
//!     .build()
//!     .unwrap();
//!
//! let value = engine
//!     .resolve("status", "success", &ResolveOptions::new().with_size("lg"))
//!     .unwrap();
//! assert_eq!(value.descriptor.identifier, "CheckCircleOutlined");
//! assert_eq!(value.style["fontSize"], "20px");
//! ```

use crate::compose::{AppliedOptions, Composition, Compositor, Origin, ResolveOptions};
use crate::config::ResolverConfig;
use crate::context_map::{ContextDefinition, ContextMap};
use crate::descriptor::{Backend, BackendKind, ResourceDescriptor, ResourceRef, Usage};
use crate::diagnostics::{DiagnosticCounts, DiagnosticEvent, DiagnosticSink, Diagnostics, Reason, Subject};
use crate::error::{require_key, ConfigurationError, NotFound, ResolveError, Result};
use crate::fallback::FallbackTable;
use crate::registry::Registry;
use crate::scale::{ScaleKind, ScaleSet, ScaleStep, ScaleTable};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

// =============================================================================
// Results
// =============================================================================

/// Render-ready result of a resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedValue {
    /// The descriptor that was finally used
    pub descriptor: ResourceDescriptor,
    /// Options after defaults and degradation
    pub applied_options: AppliedOptions,
    /// Style properties
    pub style: BTreeMap<String, String>,
    /// Class string
    pub class_name: String,
}

/// A resolved design token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenValue {
    /// The token descriptor
    pub descriptor: ResourceDescriptor,
    /// Concrete CSS value
    pub value: String,
}

// =============================================================================
// Builder
// =============================================================================

/// Assembles and validates an [`Engine`]
///
/// Registration errors are collected and reported by [`EngineBuilder::build`].
#[derive(Default)]
pub struct EngineBuilder {
    registry: Registry,
    contexts: Vec<ContextDefinition>,
    fallbacks: Option<FallbackTable>,
    scales: Vec<ScaleTable>,
    token_defaults: Vec<(String, String)>,
    token_fallback: Option<(String, String)>,
    config: ResolverConfig,
    sink: Option<Arc<dyn DiagnosticSink>>,
    error: Option<ConfigurationError>,
}

impl EngineBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, result: std::result::Result<(), ConfigurationError>) {
        if let Err(e) = result {
            self.error.get_or_insert(e);
        }
    }

    /// Register a primitive descriptor
    pub fn register(mut self, descriptor: ResourceDescriptor) -> Self {
        let result = self.registry.register(descriptor);
        self.record(result);
        self
    }

    /// Register a token descriptor with its value
    pub fn register_token(mut self, descriptor: ResourceDescriptor, value: impl Into<String>) -> Self {
        let result = self.registry.register_token(descriptor, value);
        self.record(result);
        self
    }

    /// Add a context declaration
    pub fn context(mut self, definition: ContextDefinition) -> Self {
        self.contexts.push(definition);
        self
    }

    /// Set the fallback table
    pub fn fallbacks(mut self, fallbacks: FallbackTable) -> Self {
        self.fallbacks = Some(fallbacks);
        self
    }

    /// Add a scale table
    pub fn scale(mut self, table: ScaleTable) -> Self {
        self.scales.push(table);
        self
    }

    /// Default action used by [`Engine::token`] when an action misses in a context
    pub fn token_default(mut self, context: impl Into<String>, action: impl Into<String>) -> Self {
        self.token_defaults.push((context.into(), action.into()));
        self
    }

    /// Token used by [`Engine::token`] when the context itself misses
    pub fn token_fallback(mut self, context: impl Into<String>, action: impl Into<String>) -> Self {
        self.token_fallback = Some((context.into(), action.into()));
        self
    }

    /// Set the runtime configuration
    pub fn config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Forward diagnostic events to a sink
    pub fn sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Validate everything and produce the engine
    pub fn build(self) -> std::result::Result<Engine, ConfigurationError> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let context_map = ContextMap::build(self.contexts, &self.registry)?;

        let fallbacks = self
            .fallbacks
            .ok_or(ConfigurationError::MissingFallback(Usage::Functional))?;
        fallbacks.validate(&self.registry)?;

        let scales = ScaleSet::new(self.scales)?;

        let has_tokens = self
            .registry
            .backends()
            .any(|b| b.kind() == BackendKind::Token);

        let token_fallback = match self.token_fallback {
            Some((context, action)) => {
                let token = token_at(&context_map, &self.registry, &context, &action)?;
                Some(token)
            }
            None if has_tokens => return Err(ConfigurationError::MissingTokenFallback),
            None => None,
        };

        let mut token_defaults = HashMap::new();
        for (context, action) in self.token_defaults {
            let token = token_at(&context_map, &self.registry, &context, &action)?;
            token_defaults.insert(context, token);
        }

        let diagnostics = Diagnostics::new(self.config.diagnostic_level, self.sink);

        tracing::debug!(
            backends = self.registry.backends().count(),
            descriptors = self.registry.len(),
            contexts = context_map.len(),
            actions = context_map.action_count(),
            "Resource engine built"
        );

        Ok(Engine {
            registry: self.registry,
            context_map,
            fallbacks,
            scales,
            token_defaults,
            token_fallback,
            config: self.config,
            diagnostics,
        })
    }
}

fn token_at(
    context_map: &ContextMap,
    registry: &Registry,
    context: &str,
    action: &str,
) -> std::result::Result<TokenValue, ConfigurationError> {
    let invalid = |reason: &str| ConfigurationError::InvalidToken {
        context: context.to_string(),
        action: action.to_string(),
        reason: reason.to_string(),
    };

    let descriptor = context_map
        .lookup(context, action)
        .map_err(|e| invalid(e.reason()))?;
    let value = registry
        .value(descriptor.backend, &descriptor.identifier)
        .ok_or_else(|| invalid("has no token value"))?;

    Ok(TokenValue {
        descriptor: descriptor.clone(),
        value: value.to_string(),
    })
}

// =============================================================================
// Engine
// =============================================================================

/// Immutable resource resolution engine
#[derive(Debug)]
pub struct Engine {
    registry: Registry,
    context_map: ContextMap,
    fallbacks: FallbackTable,
    scales: ScaleSet,
    token_defaults: HashMap<String, TokenValue>,
    token_fallback: Option<TokenValue>,
    config: ResolverConfig,
    diagnostics: Diagnostics,
}

impl Engine {
    /// Start building an engine
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// The primitive registry
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The context map
    pub fn context_map(&self) -> &ContextMap {
        &self.context_map
    }

    /// The fallback table
    pub fn fallbacks(&self) -> &FallbackTable {
        &self.fallbacks
    }

    /// The scale tables
    pub fn scales(&self) -> &ScaleSet {
        &self.scales
    }

    /// The runtime configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Diagnostic counters since the engine was built
    pub fn diagnostic_counts(&self) -> DiagnosticCounts {
        self.diagnostics.counts()
    }

    fn compositor(&self) -> Compositor<'_> {
        Compositor::new(&self.registry, &self.scales)
    }

    fn reject(&self, subject: Subject, error: ResolveError) -> ResolveError {
        if self.config.report_invalid_arguments {
            self.diagnostics
                .emit(DiagnosticEvent::new(subject, Reason::InvalidArgument));
        }
        error
    }

    fn fall_back(&self, subject: Subject, not_found: NotFound, usage: Usage) -> &ResourceDescriptor {
        self.diagnostics
            .emit(DiagnosticEvent::new(subject, not_found.into()));
        self.fallbacks.get(usage)
    }

    fn check_context_args(&self, context: &str, action: &str) -> Result<()> {
        require_key("context", context)
            .and_then(|_| require_key("action", action))
            .map_err(|e| self.reject(Subject::context(context, action), e))
    }

    fn check_direct_args(&self, backend: &str, identifier: &str) -> Result<()> {
        require_key("backend", backend)
            .and_then(|_| require_key("identifier", identifier))
            .map_err(|e| self.reject(Subject::backend(backend, identifier), e))
    }

    fn check_options(&self, subject: impl FnOnce() -> Subject, options: &ResolveOptions) -> Result<()> {
        options.validate().map_err(|e| self.reject(subject(), e))
    }

    fn find_direct(&self, backend: &str, identifier: &str) -> std::result::Result<&ResourceDescriptor, NotFound> {
        let backend: Backend = backend.parse().map_err(|_| NotFound::BackendNotFound)?;
        if !self.registry.has_backend(backend) {
            return Err(NotFound::BackendNotFound);
        }
        self.registry
            .get(backend, identifier)
            .ok_or(NotFound::IdentifierNotFound)
    }

    fn find_or_fall_back(&self, context: &str, action: &str, usage: Usage) -> &ResourceDescriptor {
        match self.context_map.lookup(context, action) {
            Ok(descriptor) => descriptor,
            Err(not_found) => self.fall_back(Subject::context(context, action), not_found, usage),
        }
    }

    fn find_direct_or_fall_back(&self, backend: &str, identifier: &str, usage: Usage) -> &ResourceDescriptor {
        match self.find_direct(backend, identifier) {
            Ok(descriptor) => descriptor,
            Err(not_found) => {
                self.fall_back(Subject::backend(backend, identifier), not_found, usage)
            }
        }
    }

    /// Look up a context action, substituting the fallback on a miss
    pub fn lookup(&self, context: &str, action: &str, usage: Usage) -> Result<&ResourceDescriptor> {
        self.check_context_args(context, action)?;
        Ok(self.find_or_fall_back(context, action, usage))
    }

    /// Look up a backend identifier, substituting the fallback on a miss
    pub fn lookup_direct(&self, backend: &str, identifier: &str, usage: Usage) -> Result<&ResourceDescriptor> {
        self.check_direct_args(backend, identifier)?;
        Ok(self.find_direct_or_fall_back(backend, identifier, usage))
    }

    /// Resolve a context action into a render-ready value
    ///
    /// Unknown contexts and actions resolve to the fallback for the requested
    /// usage (functional unless the options ask for decorative) and emit one
    /// diagnostic event. Malformed arguments are returned as
    /// [`ResolveError::InvalidArgument`].
    pub fn resolve(&self, context: &str, action: &str, options: &ResolveOptions) -> Result<ResolvedValue> {
        self.check_context_args(context, action)?;
        self.check_options(|| Subject::context(context, action), options)?;

        let descriptor = self.find_or_fall_back(context, action, options.fallback_usage());
        self.finish(descriptor, Origin::Context { context, action }, options)
    }

    /// Resolve a backend identifier, bypassing the context map
    pub fn resolve_direct(&self, backend: &str, identifier: &str, options: &ResolveOptions) -> Result<ResolvedValue> {
        self.check_direct_args(backend, identifier)?;
        self.check_options(|| Subject::backend(backend, identifier), options)?;

        let descriptor = self.find_direct_or_fall_back(backend, identifier, options.fallback_usage());
        self.finish(descriptor, Origin::Descriptor, options)
    }

    fn finish(&self, descriptor: &ResourceDescriptor, origin: Origin<'_>, options: &ResolveOptions) -> Result<ResolvedValue> {
        let (composition, applied_options) = self.compositor().compose(descriptor, origin, options)?;
        Ok(ResolvedValue {
            descriptor: descriptor.clone(),
            applied_options,
            style: composition.style,
            class_name: composition.class_name,
        })
    }

    /// Compose a descriptor with options
    ///
    /// Pure: identical inputs give identical output.
    pub fn compose(&self, descriptor: &ResourceDescriptor, options: &ResolveOptions) -> Result<Composition> {
        self.check_options(
            || Subject::backend(descriptor.backend.as_str(), &descriptor.identifier),
            options,
        )?;
        let (composition, _) = self
            .compositor()
            .compose(descriptor, Origin::Descriptor, options)?;
        Ok(composition)
    }

    /// Check whether a reference resolves without fallback
    ///
    /// Never substitutes and never emits diagnostics. Malformed references are
    /// not valid.
    pub fn is_valid(&self, reference: &ResourceRef) -> bool {
        match reference {
            ResourceRef::Contextual { context, action } => {
                require_key("context", context).is_ok()
                    && require_key("action", action).is_ok()
                    && self.context_map.lookup(context, action).is_ok()
            }
            ResourceRef::Direct {
                backend,
                identifier,
            } => {
                require_key("backend", backend).is_ok()
                    && require_key("identifier", identifier).is_ok()
                    && self.find_direct(backend, identifier).is_ok()
            }
            ResourceRef::Descriptor(descriptor) => {
                self.registry.get(descriptor.backend, &descriptor.identifier) == Some(descriptor)
            }
        }
    }

    /// Look up a named scale step by scale name
    ///
    /// Unknown steps degrade to the scale default; an unknown scale name is a
    /// malformed argument.
    pub fn resolve_scale(&self, scale: &str, step: &str) -> Result<&ScaleStep> {
        let kind: ScaleKind = scale.parse().map_err(|e: String| {
            self.reject(Subject::scale(scale, step), ResolveError::invalid("scale", e))
        })?;
        Ok(self.scales.resolve(kind, step))
    }

    /// Look up a named scale step
    pub fn scale(&self, kind: ScaleKind, step: &str) -> &ScaleStep {
        self.scales.resolve(kind, step)
    }

    /// Resolve a design token (category × shade) to its CSS value
    ///
    /// A missing action degrades to the context's default token, a missing
    /// context to the global token fallback; both emit one diagnostic event.
    pub fn token(&self, context: &str, action: &str) -> Result<TokenValue> {
        self.check_context_args(context, action)?;
        let subject = || Subject::context(context, action);

        match self.context_map.lookup(context, action) {
            Ok(descriptor) => match self.registry.value(descriptor.backend, &descriptor.identifier) {
                Some(value) => Ok(TokenValue {
                    descriptor: descriptor.clone(),
                    value: value.to_string(),
                }),
                None => Err(self.reject(
                    subject(),
                    ResolveError::invalid(
                        "context",
                        format!("'{}' does not resolve to a design token", context),
                    ),
                )),
            },
            Err(not_found) => {
                let token = match not_found {
                    NotFound::ActionNotFound => self
                        .token_defaults
                        .get(context)
                        .or(self.token_fallback.as_ref()),
                    _ => self.token_fallback.as_ref(),
                };
                let token = token.ok_or_else(|| {
                    self.reject(
                        subject(),
                        ResolveError::invalid("context", "no token fallback is configured"),
                    )
                })?;
                self.diagnostics
                    .emit(DiagnosticEvent::new(subject(), not_found.into()));
                Ok(token.clone())
            }
        }
    }

    /// Global token fallback, if token backends are registered
    pub fn token_fallback(&self) -> Option<&TokenValue> {
        self.token_fallback.as_ref()
    }

    /// Per-context token defaults, sorted by context name
    pub fn token_defaults(&self) -> Vec<(&str, &TokenValue)> {
        let mut defaults: Vec<_> = self
            .token_defaults
            .iter()
            .map(|(context, token)| (context.as_str(), token))
            .collect();
        defaults.sort_by_key(|(context, _)| *context);
        defaults
    }
}
