//! Shared pipeline entrypoint used by the CLI.

use std::path::PathBuf;

use serde_json::Value;

use stencil_core::{load_templates, LoadOptions};

use crate::context::ContextPatch;
use crate::diff::{self, FileDiff};
use crate::error::GenerateError;
use crate::generator::{Generator, GeneratorConfig};
use crate::writer::{self, WriteResult};

/// Everything one run needs: where templates live, what data to render, and
/// how to construct the generator.
#[derive(Debug, Clone, Default)]
pub struct PipelineRequest {
    pub templates: PathBuf,
    pub data: Option<Value>,
    pub config: GeneratorConfig,
}

/// Load, merge and render, leaving the artifacts in the generator's context.
pub fn prepare(request: &PipelineRequest) -> Result<Generator, GenerateError> {
    let mut generator = Generator::new(request.config.clone())?;
    let templates = load_templates(&request.templates, &LoadOptions::new())?;

    generator.add_context(ContextPatch::templates(templates));
    if let Some(data) = &request.data {
        generator.add_context(ContextPatch::data(data.clone()));
    }
    generator.render()?;
    Ok(generator)
}

/// Run the pipeline end to end.
///
/// With `dry_run` nothing is written and every artifact is reported as
/// [`WriteResult::WouldWrite`].
pub fn run(request: &PipelineRequest, dry_run: bool) -> Result<Vec<WriteResult>, GenerateError> {
    let generator = prepare(request)?;
    if dry_run {
        let mut results = Vec::new();
        generator.write_with(writer::dry_run(&mut results))?;
        return Ok(results);
    }
    generator.write()
}

/// Render and report what `run` would change on disk, without writing.
pub fn diff(request: &PipelineRequest) -> Result<Vec<FileDiff>, GenerateError> {
    let generator = prepare(request)?;
    let mut diffs = Vec::new();
    generator.write_with(diff::collect(generator.out(), &mut diffs))?;
    Ok(diffs)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    fn request(templates: &TempDir, out: &TempDir, data: Option<Value>) -> PipelineRequest {
        PipelineRequest {
            templates: templates.path().to_path_buf(),
            data,
            config: GeneratorConfig::default().out(out.path()),
        }
    }

    #[test]
    fn run_writes_one_file_per_record() {
        let templates = TempDir::new().expect("templates");
        let out = TempDir::new().expect("out");
        fs::write(templates.path().join("{{ name }}.txt.tera"), "hi {{ name }}").expect("tpl");

        let results = run(
            &request(&templates, &out, Some(json!([{ "name": "a" }, { "name": "b" }]))),
            false,
        )
        .expect("run");

        assert_eq!(results.len(), 2);
        assert_eq!(fs::read_to_string(out.path().join("a.txt")).unwrap(), "hi a");
        assert_eq!(fs::read_to_string(out.path().join("b.txt")).unwrap(), "hi b");
    }

    #[test]
    fn dry_run_reports_without_writing() {
        let templates = TempDir::new().expect("templates");
        let out = TempDir::new().expect("out");
        fs::write(templates.path().join("README.md.tera"), "readme").expect("tpl");

        let results = run(&request(&templates, &out, None), true).expect("run");

        assert_eq!(
            results,
            vec![WriteResult::WouldWrite {
                path: out.path().join("README.md")
            }]
        );
        assert!(fs::read_dir(out.path()).unwrap().next().is_none());
    }

    #[test]
    fn diff_is_empty_after_run() {
        let templates = TempDir::new().expect("templates");
        let out = TempDir::new().expect("out");
        fs::write(templates.path().join("a.txt"), "alpha\n").expect("tpl");
        let req = request(&templates, &out, None);

        assert_eq!(diff(&req).expect("diff before").len(), 1);
        run(&req, false).expect("run");
        assert!(diff(&req).expect("diff after").is_empty());
    }

    #[test]
    fn unknown_engine_fails_before_loading_templates() {
        let out = TempDir::new().expect("out");
        let req = PipelineRequest {
            templates: PathBuf::from("/definitely/not/here"),
            data: None,
            config: GeneratorConfig::default().engine("vento").out(out.path()),
        };
        let err = run(&req, false).unwrap_err();
        assert!(matches!(err, GenerateError::Configuration(_)));
    }
}
