//! Subcommand implementations and the arguments they share.

pub mod diff;
pub mod generate;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use stencil_generate::{pipeline::PipelineRequest, GeneratorConfig};

/// Arguments common to every command that renders templates.
#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Directory holding the templates.
    pub templates: PathBuf,

    /// JSON or YAML file with the data to render (`.yaml`/`.yml` read as YAML).
    #[arg(long, short)]
    pub data: Option<PathBuf>,

    /// Template engine: tera or handlebars.
    #[arg(long, short, default_value = "tera")]
    pub engine: String,

    /// Output root. Defaults to the current directory.
    #[arg(long, short)]
    pub out: Option<PathBuf>,
}

impl TemplateArgs {
    pub fn to_request(&self) -> Result<PipelineRequest> {
        let data = self.data.as_deref().map(load_data).transpose()?;
        let mut config = GeneratorConfig::default().engine(self.engine.clone());
        config.out = self.out.clone();
        Ok(PipelineRequest {
            templates: self.templates.clone(),
            data,
            config,
        })
    }
}

/// Parse a data file by extension.
pub fn load_data(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read data file {}", path.display()))?;
    let value = match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => serde_yaml::from_str(&raw)
            .with_context(|| format!("failed to parse YAML data in {}", path.display()))?,
        _ => serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON data in {}", path.display()))?,
    };
    Ok(value)
}
