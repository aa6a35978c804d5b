use anyhow::Context;
use tracing::info;

use super::Execute;
use crate::cli::ParseArgs;
use crate::engine::XEngine;

impl Execute for ParseArgs {
    const NAME: &'static str = "parse";

    fn execute(&self, engine: &mut XEngine) -> anyhow::Result<()> {
        for file in &self.files {
            engine
                .parse_file(file)
                .with_context(|| format!("failed to parse {}", file.display()))?;
            info!(file = %file.display(), "well-formed");
        }
        Ok(())
    }
}
