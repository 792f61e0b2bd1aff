//! Template discovery — walk a directory tree into a [`TemplateMap`].
//!
//! # Rules
//!
//! | Input                                   | Result                            |
//! |-----------------------------------------|-----------------------------------|
//! | file or directory named `_*`            | skipped, with all descendants     |
//! | `README.md.tera`, `main.rs.hbs`, `x.vto`| extension stripped: `README.md`   |
//! | `docs/{{name}}.md.tera`                 | logical path `docs/{{name}}.md`   |
//! | symlinked directory                     | skipped                           |
//! | any other file                          | kept as-is                        |
//!
//! Entries are visited in file-name order. File contents are decoded as UTF-8
//! lossily, so a stray binary file never fails the load.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{io_err, SourceError};
use crate::types::{TemplateEntry, TemplateMap};

/// Leading character that excludes a file or directory from discovery.
pub const RESERVED_MARKER: char = '_';

/// Template-file extensions removed from logical paths.
pub const TEMPLATE_EXTENSIONS: &[&str] = &["tera", "hbs", "vto"];

type PathFilter = Box<dyn Fn(&Path) -> bool>;

/// Optional knobs for [`load_templates`].
#[derive(Default)]
pub struct LoadOptions {
    filter: Option<PathFilter>,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only candidates for which `filter` returns `true`.
    ///
    /// The predicate receives the absolute path of each candidate file.
    pub fn filter(mut self, filter: impl Fn(&Path) -> bool + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    fn keeps(&self, path: &Path) -> bool {
        self.filter.as_ref().map_or(true, |f| f(path))
    }
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("filter", &self.filter.is_some())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Walking helpers
// ---------------------------------------------------------------------------

fn is_reserved(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with(RESERVED_MARKER))
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), SourceError> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| io_err(dir, e))? {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let file_type = entry.file_type().map_err(|e| io_err(entry.path(), e))?;
        entries.push((entry.path(), file_type));
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    for (path, file_type) in entries {
        if is_reserved(&path) {
            tracing::trace!("skipping reserved entry: {}", path.display());
            continue;
        }
        if file_type.is_dir() {
            collect_template_files(&path, out)?;
        } else if file_type.is_file() {
            out.push(path);
        } else if file_type.is_symlink() {
            // Linked files are followed, linked directories are not.
            let meta = std::fs::metadata(&path).map_err(|e| io_err(&path, e))?;
            if meta.is_file() {
                out.push(path);
            } else {
                tracing::debug!("skipping symlinked directory: {}", path.display());
            }
        }
    }
    Ok(())
}

/// Relative path with `/` separators and the template extension removed.
fn logical_path_for(relative: &Path) -> String {
    let stripped = match relative.extension().and_then(|e| e.to_str()) {
        Some(ext) if TEMPLATE_EXTENSIONS.contains(&ext) => relative.with_extension(""),
        _ => relative.to_path_buf(),
    };
    stripped.to_string_lossy().replace('\\', "/")
}

// ---------------------------------------------------------------------------
// load_templates
// ---------------------------------------------------------------------------

/// Discover every template under `root`.
///
/// Fails with [`SourceError::InvalidArgument`] when `root` is empty, before
/// touching the filesystem.
pub fn load_templates(
    root: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<TemplateMap, SourceError> {
    let root = root.as_ref();
    if root.as_os_str().is_empty() {
        return Err(SourceError::InvalidArgument(
            "template root path must be a non-empty path".to_string(),
        ));
    }
    let root = std::path::absolute(root).map_err(|e| io_err(root, e))?;

    let mut files = Vec::new();
    collect_template_files(&root, &mut files)?;

    let mut templates = TemplateMap::new();
    for path in files {
        if !options.keeps(&path) {
            tracing::debug!("filtered out: {}", path.display());
            continue;
        }

        let relative = path.strip_prefix(&root).unwrap_or(path.as_path());
        let logical_path = logical_path_for(relative);
        if logical_path.starts_with(RESERVED_MARKER) {
            continue;
        }

        let bytes = std::fs::read(&path).map_err(|e| io_err(&path, e))?;
        let content = String::from_utf8_lossy(&bytes).into_owned();
        templates.insert(
            logical_path.clone(),
            TemplateEntry {
                logical_path,
                source_path: path,
                content,
            },
        );
    }

    tracing::debug!(
        root = %root.display(),
        count = templates.len(),
        "loaded templates"
    );
    Ok(templates)
}
