//! [`Generator`] — the fluent façade over one generation run.
//!
//! ```text
//! Generator::new(config)?            engine + output root fixed here
//!     .add_context(templates)        Context Builder
//!     .add_context(data)
//!     .render()?                     Render Dispatcher (cumulative)
//!     .write()?                      Writer
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use stencil_core::RenderedArtifact;
use stencil_renderer::{EngineKind, RenderError, Renderer};

use crate::context::{Context, ContextPatch};
use crate::dispatch::dispatch;
use crate::error::{io_err, GenerateError};
use crate::writer::{write_artifact, DefaultWrite, WriteResult};

// ---------------------------------------------------------------------------
// GeneratorConfig
// ---------------------------------------------------------------------------

/// Construction-time options for a [`Generator`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Engine identifier (`tera` or `handlebars`). Defaults to `tera`.
    pub engine: Option<String>,
    /// Output root. Defaults to the current working directory.
    pub out: Option<PathBuf>,
}

impl GeneratorConfig {
    pub fn engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = Some(engine.into());
        self
    }

    pub fn out(mut self, out: impl Into<PathBuf>) -> Self {
        self.out = Some(out.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Owns the [`Context`] of one run and drives it through every stage.
pub struct Generator {
    context: Context,
    renderer: Box<dyn Renderer>,
    out: PathBuf,
}

impl Generator {
    /// Validate `config` and build a generator.
    ///
    /// An unknown engine fails with [`GenerateError::Configuration`] before
    /// anything else happens.
    pub fn new(config: GeneratorConfig) -> Result<Self, GenerateError> {
        let engine = match config.engine.as_deref() {
            Some(name) => name
                .parse::<EngineKind>()
                .map_err(|e: RenderError| GenerateError::Configuration(e.to_string()))?,
            None => EngineKind::default(),
        };

        let out = match config.out {
            Some(out) => std::path::absolute(&out).map_err(|e| io_err(&out, e))?,
            None => std::env::current_dir().map_err(|e| io_err(".", e))?,
        };

        Ok(Self::with_renderer(engine.build(), out))
    }

    /// Build a generator around any renderer.
    ///
    /// A relative `out` is made absolute against the current directory; an
    /// empty one is kept as given.
    pub fn with_renderer(renderer: Box<dyn Renderer>, out: impl Into<PathBuf>) -> Self {
        let out = out.into();
        Generator {
            context: Context::new(),
            renderer,
            out: std::path::absolute(&out).unwrap_or(out),
        }
    }

    /// Read-only view of the run so far.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Output root every artifact path is resolved against.
    pub fn out(&self) -> &Path {
        &self.out
    }

    pub fn engine(&self) -> EngineKind {
        self.renderer.kind()
    }

    // -----------------------------------------------------------------------
    // Context Builder
    // -----------------------------------------------------------------------

    /// Deep-merge `patch` into the context.
    pub fn add_context(&mut self, patch: impl Into<ContextPatch>) -> &mut Self {
        self.context.merge(patch.into());
        self
    }

    /// Compute a patch from the current context, then merge it.
    ///
    /// Errors from `f` are returned untouched and nothing is merged.
    pub fn add_context_with<F, E>(&mut self, f: F) -> Result<&mut Self, E>
    where
        F: FnOnce(&Context) -> Result<ContextPatch, E>,
    {
        let patch = f(&self.context)?;
        self.context.merge(patch);
        Ok(self)
    }

    // -----------------------------------------------------------------------
    // Render Dispatcher
    // -----------------------------------------------------------------------

    /// Render every template according to the shape of the context data and
    /// append the artifacts to [`Context::rendered`].
    pub fn render(&mut self) -> Result<&mut Self, GenerateError> {
        let Context {
            templates,
            data,
            rendered,
        } = &mut self.context;
        let added = dispatch(templates, data, self.renderer.as_ref(), &self.out, rendered)?;
        tracing::info!(
            added,
            total = rendered.len(),
            engine = %self.renderer.kind(),
            "render stage complete"
        );
        Ok(self)
    }

    /// Replace built-in dispatch with `render_fn`.
    ///
    /// `render_fn` is called once; whatever it returns is appended verbatim.
    pub fn render_with<F>(&mut self, render_fn: F) -> &mut Self
    where
        F: FnOnce(&Context) -> Vec<RenderedArtifact>,
    {
        let artifacts = render_fn(&self.context);
        tracing::info!(added = artifacts.len(), "render override complete");
        self.context.extend_rendered(artifacts);
        self
    }

    // -----------------------------------------------------------------------
    // Writer
    // -----------------------------------------------------------------------

    /// Write every rendered artifact, in order, with the default strategy.
    pub fn write(&self) -> Result<Vec<WriteResult>, GenerateError> {
        let mut results = Vec::with_capacity(self.context.rendered.len());
        for artifact in &self.context.rendered {
            results.push(write_artifact(artifact)?);
        }
        tracing::info!(written = results.len(), "write stage complete");
        Ok(results)
    }

    /// Hand every rendered artifact, in order, to `callback` instead.
    ///
    /// The callback decides whether and how to persist each one; the
    /// [`DefaultWrite`] handle gives access to the default strategy. An error
    /// from the callback stops the loop.
    pub fn write_with<F>(&self, mut callback: F) -> Result<(), GenerateError>
    where
        F: FnMut(&RenderedArtifact, &DefaultWrite) -> Result<(), GenerateError>,
    {
        let default = DefaultWrite;
        for artifact in &self.context.rendered {
            callback(artifact, &default)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
