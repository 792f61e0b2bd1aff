//! # stencil-generate
//!
//! The generation pipeline: context accumulation, render dispatch and the
//! write stage, composed by the [`Generator`] façade.
//!
//! ```rust,no_run
//! use serde_json::json;
//! use stencil_core::{load_templates, LoadOptions};
//! use stencil_generate::{ContextPatch, Generator, GeneratorConfig};
//!
//! fn scaffold() -> Result<(), Box<dyn std::error::Error>> {
//!     let templates = load_templates("templates", &LoadOptions::new())?;
//!     let mut generator = Generator::new(GeneratorConfig::default())?;
//!     generator
//!         .add_context(templates)
//!         .add_context(ContextPatch::data(json!([{ "name": "users" }, { "name": "orders" }])))
//!         .render()?
//!         .write()?;
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod diff;
pub mod dispatch;
pub mod error;
pub mod generator;
pub mod pipeline;
pub mod writer;

pub use context::{deep_merge, Context, ContextPatch};
pub use diff::{diff_artifact, FileDiff};
pub use dispatch::DispatchMode;
pub use error::GenerateError;
pub use generator::{Generator, GeneratorConfig};
pub use writer::{write_artifact, DefaultWrite, WriteResult};
