//! Stencil core library — template and artifact types, template discovery.
//!
//! Public API surface:
//! - [`types`] — [`TemplateEntry`], [`TemplateMap`], [`RenderedArtifact`]
//! - [`error`] — [`SourceError`]
//! - [`source`] — [`load_templates`] directory walker

pub mod error;
pub mod source;
pub mod types;

pub use error::SourceError;
pub use source::{load_templates, LoadOptions, RESERVED_MARKER, TEMPLATE_EXTENSIONS};
pub use types::{template_map, RenderedArtifact, TemplateEntry, TemplateMap};
