//! Transit UI resources
//!
//! Facade over the resource resolution engine and the bus-ticketing UI
//! catalog. Most callers only need [`standard_engine`].
//!
//! # Crates
//!
//! - [`resolver`] - The resolution engine (`resource-resolver`)
//! - [`catalog`] - Static icon and token tables (`ui-catalog`)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use resource_resolver as resolver;
pub use ui_catalog as catalog;

pub use resource_resolver::{
    DiagnosticEvent, DiagnosticSink, Engine, ResolveError, ResolveOptions, ResolvedValue,
    ResolverConfig, ResourceDescriptor, TokenValue, Usage,
};
pub use ui_catalog::{standard_engine, standard_engine_with};
