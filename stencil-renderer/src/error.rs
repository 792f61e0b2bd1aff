//! Error types for stencil-renderer.

use std::error::Error as _;

use thiserror::Error;

/// All errors that can arise from template rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error, with its full cause chain in the message.
    #[error("tera error: {}", tera_chain(.0))]
    Tera(#[from] tera::Error),

    /// Handlebars template engine error.
    #[error("handlebars error: {0}")]
    Handlebars(#[from] handlebars::RenderError),

    /// Engine identifier that matches no known engine.
    #[error("invalid render engine provided: '{name}'; expected one of: tera, handlebars")]
    UnknownEngine { name: String },
}

/// Tera puts the useful part (which variable, which filter) in `source()`.
fn tera_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        cause = inner.source();
    }
    message
}
