//! Render dispatch — how many times each template is rendered, and with what.
//!
//! ## Modes
//!
//! | `Context.data`          | Renders per template        | Data slice        |
//! |-------------------------|-----------------------------|-------------------|
//! | null                    | 1                           | `{}`              |
//! | array of N values       | N (element-major order)     | each element      |
//! | object                  | 1                           | the whole object  |
//! | bool / number / string  | 0, with a warning           | —                 |
//!
//! A caller-supplied override bypasses this table entirely; see
//! [`Generator::render_with`](crate::Generator::render_with).

use std::path::{Component, Path, PathBuf};

use serde_json::{Map, Value};

use stencil_core::{RenderedArtifact, TemplateMap};
use stencil_renderer::Renderer;

use crate::error::GenerateError;

// ---------------------------------------------------------------------------
// DispatchMode
// ---------------------------------------------------------------------------

/// Shape of the context data, as far as dispatch is concerned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DispatchMode<'a> {
    /// No data supplied.
    Absent,
    /// One render pass per element.
    Sequence(&'a [Value]),
    /// One render pass against the whole object.
    Object(&'a Value),
    /// Nothing sensible to iterate.
    Scalar(&'a Value),
}

impl<'a> DispatchMode<'a> {
    pub fn classify(data: &'a Value) -> Self {
        match data {
            Value::Null => DispatchMode::Absent,
            Value::Array(items) => DispatchMode::Sequence(items),
            Value::Object(_) => DispatchMode::Object(data),
            Value::Bool(_) | Value::Number(_) | Value::String(_) => DispatchMode::Scalar(data),
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// Path resolution
// ---------------------------------------------------------------------------

/// Resolve a rendered logical path against the output root.
///
/// Purely lexical: `.` segments are dropped and `..` pops a segment. A `..`
/// at the filesystem root is dropped; one past the start of a relative root is
/// kept. An absolute `relative` replaces `root`.
pub fn resolve_output_path(root: &Path, relative: &str) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in root.join(relative).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match resolved.components().next_back() {
                Some(Component::Normal(_)) => {
                    resolved.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                // Relative root already exhausted.
                _ => resolved.push(".."),
            },
            other => resolved.push(other.as_os_str()),
        }
    }
    resolved
}

// ---------------------------------------------------------------------------
// dispatch
// ---------------------------------------------------------------------------

/// Render every template according to the shape of `data`.
///
/// Artifacts are pushed onto `sink` as they are produced, so on a render
/// failure the artifacts finished before it stay in `sink`. Returns the number
/// of artifacts added.
pub fn dispatch(
    templates: &TemplateMap,
    data: &Value,
    renderer: &dyn Renderer,
    out: &Path,
    sink: &mut Vec<RenderedArtifact>,
) -> Result<usize, GenerateError> {
    let before = sink.len();
    match DispatchMode::classify(data) {
        DispatchMode::Absent => {
            let empty = Value::Object(Map::new());
            render_pass(templates, &empty, renderer, out, sink)?;
        }
        DispatchMode::Sequence(items) => {
            for item in items {
                render_pass(templates, item, renderer, out, sink)?;
            }
        }
        DispatchMode::Object(object) => {
            render_pass(templates, object, renderer, out, sink)?;
        }
        DispatchMode::Scalar(value) => {
            tracing::warn!(
                kind = value_kind(value),
                "context data is neither an object nor an array and no render override was given; nothing rendered"
            );
        }
    }
    Ok(sink.len() - before)
}

/// One artifact per template, in insertion order, against a single data slice.
fn render_pass(
    templates: &TemplateMap,
    data: &Value,
    renderer: &dyn Renderer,
    out: &Path,
    sink: &mut Vec<RenderedArtifact>,
) -> Result<(), GenerateError> {
    for (name, template) in templates {
        let render = |text: &str| {
            renderer
                .render_string(text, data)
                .map_err(|source| GenerateError::Render {
                    template: name.clone(),
                    source,
                })
        };
        let content = render(&template.content)?;
        let relative = render(&template.logical_path)?;
        let path = resolve_output_path(out, &relative);

        tracing::debug!("rendered {} -> {}", name, path.display());
        sink.push(RenderedArtifact { path, content });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
