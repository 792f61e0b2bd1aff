//! # stencil-renderer
//!
//! Swappable template engines behind one narrow [`Renderer`] trait.
//!
//! ## Usage
//!
//! ```rust
//! use serde_json::json;
//! use stencil_renderer::EngineKind;
//!
//! let renderer = EngineKind::Tera.build();
//! let out = renderer
//!     .render_string("Hello {{ name | upper_case }}", &json!({ "name": "world" }))
//!     .unwrap();
//! assert_eq!(out, "Hello WORLD");
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod handlebars_engine;
pub mod helpers;
pub mod tera_engine;

pub use engine::{EngineKind, Renderer};
pub use error::RenderError;
pub use handlebars_engine::HandlebarsRenderer;
pub use tera_engine::TeraRenderer;
