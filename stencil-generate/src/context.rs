//! Generation context — the accumulator a run threads through every stage.
//!
//! All changes to templates and data go through [`Context::merge`]. The
//! rendered list only grows, and only the dispatcher appends to it.

use serde_json::Value;

use stencil_core::{RenderedArtifact, TemplateEntry, TemplateMap};

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// State of one generation run.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub(crate) templates: TemplateMap,
    pub(crate) data: Value,
    pub(crate) rendered: Vec<RenderedArtifact>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Templates in discovery order.
    pub fn templates(&self) -> &TemplateMap {
        &self.templates
    }

    /// Caller data. `Value::Null` means no data was supplied.
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Every artifact produced so far, in production order.
    pub fn rendered(&self) -> &[RenderedArtifact] {
        &self.rendered
    }

    /// Merge `patch` into this context.
    ///
    /// Templates are inserted by logical path. Data is deep-merged with
    /// [`deep_merge`]. Nothing absent from the patch is removed.
    pub fn merge(&mut self, patch: ContextPatch) {
        let ContextPatch { templates, data } = patch;
        for (logical_path, entry) in templates {
            self.templates.insert(logical_path, entry);
        }
        if let Some(data) = data {
            deep_merge(&mut self.data, data);
        }
    }

    pub(crate) fn extend_rendered(&mut self, artifacts: impl IntoIterator<Item = RenderedArtifact>) {
        self.rendered.extend(artifacts);
    }
}

// ---------------------------------------------------------------------------
// ContextPatch
// ---------------------------------------------------------------------------

/// A change to merge into a [`Context`].
#[derive(Debug, Clone, Default)]
pub struct ContextPatch {
    pub templates: TemplateMap,
    pub data: Option<Value>,
}

impl ContextPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch that only adds templates.
    pub fn templates(templates: TemplateMap) -> Self {
        Self {
            templates,
            data: None,
        }
    }

    /// Patch that only merges data.
    pub fn data(data: impl Into<Value>) -> Self {
        Self {
            templates: TemplateMap::new(),
            data: Some(data.into()),
        }
    }

    pub fn with_template(mut self, entry: TemplateEntry) -> Self {
        self.templates.insert(entry.logical_path.clone(), entry);
        self
    }

    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        self.data = Some(data.into());
        self
    }
}

impl From<TemplateMap> for ContextPatch {
    fn from(templates: TemplateMap) -> Self {
        Self::templates(templates)
    }
}

impl From<Value> for ContextPatch {
    fn from(data: Value) -> Self {
        Self::data(data)
    }
}

// ---------------------------------------------------------------------------
// deep_merge
// ---------------------------------------------------------------------------

/// Merge `patch` into `target`.
///
/// Two objects merge key by key, recursively. In every other case (arrays,
/// scalars, null) `patch` replaces `target` wholesale.
pub fn deep_merge(target: &mut Value, patch: Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                match target.get_mut(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (target, patch) => *target = patch,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
