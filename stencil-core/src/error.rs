//! Error types for stencil-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while discovering templates.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The caller supplied an unusable template root.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Filesystem failure while walking or reading templates.
    #[error("template io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`SourceError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SourceError {
    SourceError::Io {
        path: path.into(),
        source,
    }
}
