//! Unified-diff write strategy for `stencil diff`.
//!
//! Compares each artifact with what is on disk instead of writing it.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use similar::TextDiff;

use stencil_core::RenderedArtifact;

use crate::error::{io_err, GenerateError};
use crate::writer::DefaultWrite;

/// A single rendered file diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDiff {
    pub path: PathBuf,
    pub unified_diff: String,
}

/// Diff one artifact against its current on-disk content.
///
/// A missing file counts as empty. Returns `None` when nothing would change.
/// Headers are relative to `root` when the artifact lives under it.
pub fn diff_artifact(
    artifact: &RenderedArtifact,
    root: &Path,
) -> Result<Option<FileDiff>, GenerateError> {
    let rendered = normalize_line_endings(&artifact.content);
    let existing = read_existing_or_empty(&artifact.path)?;
    if existing == rendered {
        return Ok(None);
    }

    let relative = artifact
        .path
        .strip_prefix(root)
        .unwrap_or(artifact.path.as_path());
    let old_header = format!("a/{}", relative.display());
    let new_header = format!("b/{}", relative.display());
    let unified = TextDiff::from_lines(&existing, &rendered)
        .unified_diff()
        .header(&old_header, &new_header)
        .context_radius(3)
        .to_string();

    Ok(Some(FileDiff {
        path: artifact.path.clone(),
        unified_diff: unified,
    }))
}

/// Write callback that collects diffs into `diffs` and writes nothing.
pub fn collect<'a>(
    root: &'a Path,
    diffs: &'a mut Vec<FileDiff>,
) -> impl FnMut(&RenderedArtifact, &DefaultWrite) -> Result<(), GenerateError> + 'a {
    move |artifact, _default| {
        if let Some(diff) = diff_artifact(artifact, root)? {
            diffs.push(diff);
        }
        Ok(())
    }
}

fn read_existing_or_empty(path: &Path) -> Result<String, GenerateError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(normalize_line_endings(&content)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(io_err(path, err)),
    }
}

fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n")
}
