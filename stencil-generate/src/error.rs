//! Error types for stencil-generate.

use std::path::PathBuf;

use thiserror::Error;

use stencil_core::SourceError;
use stencil_renderer::RenderError;

/// All errors that can arise from a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Invalid pipeline configuration, e.g. an unknown engine.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An error from template discovery.
    #[error("template source error: {0}")]
    Source(#[from] SourceError),

    /// The engine failed on a template's content or on its logical path.
    #[error("failed to render template '{template}': {source}")]
    Render {
        template: String,
        #[source]
        source: RenderError,
    },

    /// Writing rendered content to its output path failed.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any other I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`GenerateError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> GenerateError {
    GenerateError::Io {
        path: path.into(),
        source,
    }
}
