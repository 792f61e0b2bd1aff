//! Engine selection — the [`Renderer`] capability and [`EngineKind`].
//!
//! # Engines
//!
//! | Kind         | Identifier   | Syntax                         |
//! |--------------|--------------|--------------------------------|
//! | Tera         | `tera`       | `{{ name \| snake_case }}`     |
//! | Handlebars   | `handlebars` | `{{snake_case name}}`          |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RenderError;
use crate::handlebars_engine::HandlebarsRenderer;
use crate::tera_engine::TeraRenderer;

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Render a template string against a data value.
///
/// Implementations must be pure with respect to `(template, data)`: the same
/// inputs always give the same output.
pub trait Renderer: Send + Sync {
    /// Which engine backs this renderer.
    fn kind(&self) -> EngineKind;

    /// Compile `template` and evaluate it against `data`.
    fn render_string(&self, template: &str, data: &Value) -> Result<String, RenderError>;
}

// ---------------------------------------------------------------------------
// EngineKind
// ---------------------------------------------------------------------------

/// All supported template engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    #[default]
    Tera,
    Handlebars,
}

impl EngineKind {
    /// All engine variants in a stable order.
    pub fn all() -> &'static [EngineKind] {
        &[EngineKind::Tera, EngineKind::Handlebars]
    }

    /// Identifier accepted by [`EngineKind::from_str`].
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineKind::Tera => "tera",
            EngineKind::Handlebars => "handlebars",
        }
    }

    /// Construct a fresh renderer for this engine with the text helpers registered.
    pub fn build(self) -> Box<dyn Renderer> {
        match self {
            EngineKind::Tera => Box::new(TeraRenderer::new()),
            EngineKind::Handlebars => Box::new(HandlebarsRenderer::new()),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineKind {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tera" => Ok(EngineKind::Tera),
            "handlebars" => Ok(EngineKind::Handlebars),
            _ => Err(RenderError::UnknownEngine {
                name: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
