//! Domain types shared by every stage of a generation run.
//!
//! All path fields use `PathBuf`; logical paths stay `String` because they are
//! rendered as templates before they ever become filesystem paths.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

/// A single raw template discovered by the template source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    /// Output-path template, relative to the output root, with the
    /// template-file extension already stripped.
    pub logical_path: String,
    /// Where the template was read from. Diagnostic use only.
    pub source_path: PathBuf,
    /// Unrendered template text.
    pub content: String,
}

impl TemplateEntry {
    /// Build an entry that did not come from disk.
    ///
    /// The logical path doubles as the source path.
    pub fn inline(logical_path: impl Into<String>, content: impl Into<String>) -> Self {
        let logical_path = logical_path.into();
        Self {
            source_path: PathBuf::from(&logical_path),
            logical_path,
            content: content.into(),
        }
    }
}

/// Templates keyed by logical path, in discovery order.
///
/// Order matters: it decides render order and therefore output order.
pub type TemplateMap = IndexMap<String, TemplateEntry>;

/// Collect entries into a [`TemplateMap`] keyed by their logical path.
///
/// A repeated logical path replaces the earlier entry and keeps its position.
pub fn template_map(entries: impl IntoIterator<Item = TemplateEntry>) -> TemplateMap {
    entries
        .into_iter()
        .map(|entry| (entry.logical_path.clone(), entry))
        .collect()
}

// ---------------------------------------------------------------------------
// Artifacts
// ---------------------------------------------------------------------------

/// One rendered file, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedArtifact {
    /// Resolved absolute output path.
    pub path: PathBuf,
    /// Rendered file content.
    pub content: String,
}

impl RenderedArtifact {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}
