//! Write stage — persist rendered artifacts.
//!
//! ## Default strategy ([`write_artifact`])
//!
//! 1. Create the parent directory chain. A failure here is logged with the
//!    path, content length, content and error, and the write is still attempted.
//! 2. Write the content to the path, overwriting. A failure here is returned
//!    and aborts the remaining writes.
//!
//! Directory errors are swallowed while content errors propagate.
//!
//! Callers that want something else (dry run, diffing, another target) hand a
//! callback to [`Generator::write_with`](crate::Generator::write_with); it
//! receives a [`DefaultWrite`] handle so it can still fall back to the default.

use std::path::{Path, PathBuf};

use serde::Serialize;

use stencil_core::RenderedArtifact;

use crate::error::GenerateError;

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WriteResult {
    /// File was written.
    Written { path: PathBuf },
    /// Dry-run mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path } | WriteResult::WouldWrite { path } => path,
        }
    }
}

// ---------------------------------------------------------------------------
// write_artifact
// ---------------------------------------------------------------------------

/// Write a single artifact with the default strategy.
pub fn write_artifact(artifact: &RenderedArtifact) -> Result<WriteResult, GenerateError> {
    let path = &artifact.path;

    if let Some(parent) = path.parent() {
        if let Err(error) = std::fs::create_dir_all(parent) {
            tracing::error!(
                path = %path.display(),
                len = artifact.content.len(),
                content = %artifact.content,
                %error,
                "failed to create output directory"
            );
        }
    }

    std::fs::write(path, &artifact.content).map_err(|source| GenerateError::Write {
        path: path.clone(),
        source,
    })?;

    tracing::debug!("wrote: {}", path.display());
    Ok(WriteResult::Written { path: path.clone() })
}

/// Handle to the default write strategy, passed to write callbacks.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultWrite;

impl DefaultWrite {
    pub fn write(&self, artifact: &RenderedArtifact) -> Result<WriteResult, GenerateError> {
        write_artifact(artifact)
    }
}

// ---------------------------------------------------------------------------
// Dry run
// ---------------------------------------------------------------------------

/// Write callback that records what would be written and touches nothing.
pub fn dry_run(
    results: &mut Vec<WriteResult>,
) -> impl FnMut(&RenderedArtifact, &DefaultWrite) -> Result<(), GenerateError> + '_ {
    move |artifact, _default| {
        tracing::info!("[dry-run] would write: {}", artifact.path.display());
        results.push(WriteResult::WouldWrite {
            path: artifact.path.clone(),
        });
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
