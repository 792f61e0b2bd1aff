//! `stencil diff` — show unified diffs for what generate would write.

use anyhow::{Context, Result};
use clap::Args;

use stencil_generate::pipeline;

use super::TemplateArgs;

/// Arguments for `stencil diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {
    #[command(flatten)]
    pub common: TemplateArgs,
}

impl DiffArgs {
    pub fn run(self) -> Result<()> {
        let request = self.common.to_request()?;
        tracing::debug!(?request, "starting diff");
        let diffs = pipeline::diff(&request).with_context(|| {
            format!("diff failed for '{}'", self.common.templates.display())
        })?;

        if diffs.is_empty() {
            println!("No differences.");
            return Ok(());
        }

        for diff in diffs {
            print!("{}", diff.unified_diff);
            if !diff.unified_diff.ends_with('\n') {
                println!();
            }
        }

        Ok(())
    }
}
