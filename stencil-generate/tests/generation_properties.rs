//! End-to-end behaviour of the generation pipeline through the public façade.

use std::fs;
use std::path::PathBuf;

use serde_json::{json, Value};
use stencil_core::{template_map, RenderedArtifact, TemplateEntry, TemplateMap};
use stencil_generate::{ContextPatch, GenerateError, Generator, WriteResult};
use stencil_renderer::EngineKind;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn generator_at(out: impl Into<PathBuf>) -> Generator {
    Generator::with_renderer(EngineKind::Handlebars.build(), out)
}

fn greeting() -> TemplateMap {
    template_map([TemplateEntry::inline("greeting", "Hello {{name}}")])
}

fn model_templates() -> TemplateMap {
    template_map([
        TemplateEntry::inline("src/{{snake_case name}}.rs", "pub struct {{pascal_case name}};"),
        TemplateEntry::inline("tests/{{snake_case name}}_test.rs", "use crate::{{pascal_case name}};"),
        TemplateEntry::inline("docs/{{kebab_case name}}.md", "# {{name}}"),
    ])
}

fn render_once(templates: TemplateMap, data: Value) -> Vec<RenderedArtifact> {
    let mut generator = generator_at("/out");
    generator
        .add_context(templates)
        .add_context(ContextPatch::data(data))
        .render()
        .expect("render");
    generator.context().rendered().to_vec()
}

// ---------------------------------------------------------------------------
// Dispatch properties
// ---------------------------------------------------------------------------

#[test]
fn greeting_fans_out_to_colliding_paths() {
    let rendered = render_once(greeting(), json!([{ "name": "A" }, { "name": "B" }]));
    assert_eq!(
        rendered,
        vec![
            RenderedArtifact::new("/out/greeting", "Hello A"),
            RenderedArtifact::new("/out/greeting", "Hello B"),
        ]
    );
}

#[test]
fn fan_out_cardinality_is_templates_times_records() {
    let records: Vec<Value> = (0..7).map(|i| json!({ "name": format!("Model{i}") })).collect();
    let rendered = render_once(model_templates(), Value::Array(records));
    assert_eq!(rendered.len(), 3 * 7);
    assert_eq!(rendered[0].path, PathBuf::from("/out/src/model0.rs"));
    assert_eq!(rendered[20].path, PathBuf::from("/out/docs/model6.md"));
}

#[test]
fn repeated_runs_are_identical() {
    let data = json!([{ "name": "UserAccount" }, { "name": "OrderLine" }]);
    let first = render_once(model_templates(), data.clone());
    for _ in 0..3 {
        assert_eq!(render_once(model_templates(), data.clone()), first);
    }
}

#[test]
fn object_data_renders_each_template_once() {
    let rendered = render_once(model_templates(), json!({ "name": "Invoice" }));
    let paths: Vec<_> = rendered.iter().map(|a| a.path.clone()).collect();
    assert_eq!(
        paths,
        [
            PathBuf::from("/out/src/invoice.rs"),
            PathBuf::from("/out/tests/invoice_test.rs"),
            PathBuf::from("/out/docs/invoice.md"),
        ]
    );
    assert_eq!(rendered[0].content, "pub struct Invoice;");
}

#[test]
fn absent_data_renders_each_template_against_empty_object() {
    let mut generator = generator_at("/out");
    generator
        .add_context(template_map([TemplateEntry::inline("LICENSE", "MIT")]))
        .render()
        .expect("render");
    assert_eq!(
        generator.context().rendered(),
        [RenderedArtifact::new("/out/LICENSE", "MIT")]
    );
}

#[test]
fn absent_data_with_placeholder_fails_the_same_in_both_engines() {
    for (engine, template) in [
        (EngineKind::Tera, "MIT {{ name }}"),
        (EngineKind::Handlebars, "MIT {{name}}"),
    ] {
        let mut generator = Generator::with_renderer(engine.build(), "/out");
        generator.add_context(template_map([TemplateEntry::inline("LICENSE", template)]));
        let err = generator.render().err().expect("undefined variable must fail");
        assert!(
            matches!(err, GenerateError::Render { ref template, .. } if template == "LICENSE"),
            "{engine}: {err}"
        );
        assert!(generator.context().rendered().is_empty());
    }
}

#[test]
fn empty_template_map_renders_nothing() {
    for data in [Value::Null, json!([{ "a": 1 }]), json!({ "a": 1 }), json!(42)] {
        let rendered = render_once(TemplateMap::new(), data);
        assert!(rendered.is_empty());
    }
}

#[test]
fn scalar_data_renders_nothing_and_does_not_fail() {
    let rendered = render_once(greeting(), json!(42));
    assert!(rendered.is_empty());
}

#[test]
fn render_stage_is_cumulative() {
    let mut generator = generator_at("/out");
    generator
        .add_context(greeting())
        .add_context(ContextPatch::data(json!({ "name": "first" })))
        .render()
        .expect("first render");
    generator
        .add_context(ContextPatch::data(json!({ "name": "second" })))
        .render()
        .expect("second render");

    let contents: Vec<_> = generator
        .context()
        .rendered()
        .iter()
        .map(|a| a.content.as_str())
        .collect();
    assert_eq!(contents, ["Hello first", "Hello second"]);
}

#[test]
fn override_then_builtin_render_accumulate_in_call_order() {
    let mut generator = generator_at("/out");
    generator
        .add_context(greeting())
        .add_context(ContextPatch::data(json!({ "name": "builtin" })))
        .render_with(|_| vec![RenderedArtifact::new("/elsewhere/custom", "custom")])
        .render()
        .expect("render");

    let rendered = generator.context().rendered();
    assert_eq!(rendered.len(), 2);
    assert_eq!(rendered[0].content, "custom");
    assert_eq!(rendered[1].content, "Hello builtin");
}

#[test]
fn render_failure_aborts_with_template_name() {
    let mut generator = Generator::with_renderer(EngineKind::Tera.build(), "/out");
    generator.add_context(template_map([TemplateEntry::inline("bad", "{{ oops")]));
    let err = generator.render().err().expect("render must fail");
    assert!(err.to_string().contains("'bad'"), "unexpected message: {err}");
}

// ---------------------------------------------------------------------------
// Context Builder
// ---------------------------------------------------------------------------

#[test]
fn merge_is_non_destructive() {
    let mut generator = generator_at("/out");
    generator
        .add_context(ContextPatch::data(json!({ "project": { "name": "x", "tags": ["a", "b"] }, "v": 1 })))
        .add_context(ContextPatch::data(json!({ "project": { "tags": ["c"] } })));
    assert_eq!(
        generator.context().data(),
        &json!({ "project": { "name": "x", "tags": ["c"] }, "v": 1 })
    );
}

// ---------------------------------------------------------------------------
// Writer
// ---------------------------------------------------------------------------

#[test]
fn colliding_paths_last_write_wins() {
    let out = TempDir::new().unwrap();
    let mut generator = generator_at(out.path());
    generator
        .add_context(greeting())
        .add_context(ContextPatch::data(json!([{ "name": "A" }, { "name": "B" }])))
        .render()
        .expect("render");

    let results = generator.write().expect("write");
    assert_eq!(results.len(), 2);
    assert_eq!(fs::read_to_string(out.path().join("greeting")).unwrap(), "Hello B");
}

#[test]
fn write_creates_nested_directories_in_order() {
    let out = TempDir::new().unwrap();
    let mut generator = generator_at(out.path());
    generator
        .add_context(model_templates())
        .add_context(ContextPatch::data(json!({ "name": "UserAccount" })))
        .render()
        .expect("render");

    let results = generator.write().expect("write");
    let written: Vec<_> = results.iter().map(|r| r.path().to_path_buf()).collect();
    assert_eq!(
        written,
        [
            out.path().join("src/user_account.rs"),
            out.path().join("tests/user_account_test.rs"),
            out.path().join("docs/user-account.md"),
        ]
    );
    assert_eq!(
        fs::read_to_string(out.path().join("src/user_account.rs")).unwrap(),
        "pub struct UserAccount;"
    );
}

#[test]
fn content_write_failure_aborts_remaining_writes() {
    let out = TempDir::new().unwrap();
    fs::write(out.path().join("blocker"), "file, not dir").unwrap();

    let mut generator = generator_at(out.path());
    generator.render_with(|_| {
        vec![
            RenderedArtifact::new(out.path().join("first.txt"), "1"),
            RenderedArtifact::new(out.path().join("blocker/inner.txt"), "2"),
            RenderedArtifact::new(out.path().join("third.txt"), "3"),
        ]
    });

    let err = generator.write().unwrap_err();
    assert!(matches!(err, GenerateError::Write { .. }));
    assert!(out.path().join("first.txt").exists());
    assert!(!out.path().join("third.txt").exists(), "writes after a failure must not run");
}

#[test]
fn write_callback_controls_persistence() {
    let out = TempDir::new().unwrap();
    let mut generator = generator_at(out.path());
    generator.render_with(|_| {
        vec![
            RenderedArtifact::new(out.path().join("keep.txt"), "kept"),
            RenderedArtifact::new(out.path().join("skip.txt"), "skipped"),
        ]
    });

    let mut seen = Vec::new();
    generator
        .write_with(|artifact, default| {
            seen.push(artifact.path.clone());
            if artifact.path.ends_with("keep.txt") {
                let result = default.write(artifact)?;
                assert!(matches!(result, WriteResult::Written { .. }));
            }
            Ok(())
        })
        .expect("write_with");

    assert_eq!(seen.len(), 2);
    assert!(out.path().join("keep.txt").exists());
    assert!(!out.path().join("skip.txt").exists());
}

#[test]
fn callback_error_stops_the_loop() {
    let mut generator = generator_at("/out");
    generator.render_with(|_| {
        vec![
            RenderedArtifact::new("/out/a", "a"),
            RenderedArtifact::new("/out/b", "b"),
        ]
    });

    let mut calls = 0;
    let result = generator.write_with(|_, _| {
        calls += 1;
        Err(GenerateError::Configuration("stop".to_string()))
    });
    assert!(result.is_err());
    assert_eq!(calls, 1);
}
