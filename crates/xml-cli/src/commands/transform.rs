use std::fs;

use anyhow::Context;
use tracing::info;
use xml_engine_traits::XsltParameters;

use super::Execute;
use crate::cli::TransformArgs;
use crate::engine::XEngine;

impl Execute for TransformArgs {
    const NAME: &'static str = "transform";

    fn execute(&self, engine: &mut XEngine) -> anyhow::Result<()> {
        let doc = engine
            .parse_file(&self.xml)
            .with_context(|| format!("failed to parse {}", self.xml.display()))?;
        let mut stylesheet = engine
            .compile_stylesheet_file(&self.xsl)
            .with_context(|| format!("failed to load stylesheet {}", self.xsl.display()))?;

        let params: XsltParameters = self.params.iter().cloned().collect();
        let output = engine
            .transform_to_string(&mut stylesheet, &doc, &params)
            .with_context(|| {
                format!(
                    "failed to apply {} to {}",
                    self.xsl.display(),
                    self.xml.display()
                )
            })?;

        fs::write(&self.out, output)
            .with_context(|| format!("failed to write {}", self.out.display()))?;
        info!(
            xml = %self.xml.display(),
            xsl = %self.xsl.display(),
            out = %self.out.display(),
            "transformed"
        );
        Ok(())
    }
}
