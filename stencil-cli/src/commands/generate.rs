//! `stencil generate` — render templates and write the results.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use stencil_generate::{pipeline, WriteResult};

use super::TemplateArgs;

/// Arguments for `stencil generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: TemplateArgs,

    /// Show what would be written without actually writing any files.
    #[arg(long)]
    pub dry_run: bool,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    pub fn run(self) -> Result<()> {
        let request = self.common.to_request()?;
        tracing::debug!(?request, "starting generate");
        let results = pipeline::run(&request, self.dry_run).with_context(|| {
            format!("generate failed for '{}'", self.common.templates.display())
        })?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&results)?);
            return Ok(());
        }

        print_results(&results, self.dry_run);
        Ok(())
    }
}

fn print_results(results: &[WriteResult], dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };

    if results.is_empty() {
        println!("{prefix}{} nothing to do", "✓".green());
        return;
    }

    let verb = if dry_run { "would write" } else { "wrote" };
    println!("{prefix}{} {verb} {} file(s)", "✓".green(), results.len());

    for r in results {
        match r {
            WriteResult::Written { path } => println!("  ✎  {}", path.display()),
            WriteResult::WouldWrite { path } => println!("  ~  {}", path.display()),
        }
    }
}
