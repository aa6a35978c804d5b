use std::path::Path;

use anyhow::{bail, Context};
use serde::Serialize;
use tracing::info;
use xml_engine_traits::{ValidationError, ValidationResult};

use super::Execute;
use crate::cli::ValidateArgs;
use crate::engine::XEngine;

/// One line of `validate --json` output
#[derive(Debug, Serialize)]
struct FileReport<'a> {
    file: String,
    valid: bool,
    errors: &'a [ValidationError],
}

impl<'a> FileReport<'a> {
    fn new(file: &Path, result: &'a ValidationResult) -> Self {
        Self {
            file: file.display().to_string(),
            valid: result.valid,
            errors: &result.errors,
        }
    }
}

impl Execute for ValidateArgs {
    const NAME: &'static str = "validate";

    fn execute(&self, engine: &mut XEngine) -> anyhow::Result<()> {
        engine
            .load_schema_file(&self.xsd)
            .with_context(|| format!("failed to load schema {}", self.xsd.display()))?;

        for file in &self.files {
            let doc = engine
                .parse_file(file)
                .with_context(|| format!("failed to parse {}", file.display()))?;
            let result = engine
                .validate(&doc)
                .with_context(|| format!("failed to validate {}", file.display()))?;

            if self.json {
                println!("{}", serde_json::to_string(&FileReport::new(file, &result))?);
            }
            if !result.valid {
                bail!(
                    "{} does not conform to {}:\n{}",
                    file.display(),
                    self.xsd.display(),
                    result.summary()
                );
            }
            info!(file = %file.display(), schema = %self.xsd.display(), "valid");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_errors() {
        let result = ValidationResult::invalid(vec![ValidationError::new("bad").at(Some(2), Some(5))]);
        let report = FileReport::new(Path::new("doc.xml"), &result);
        let value: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["file"], "doc.xml");
        assert_eq!(value["valid"], false);
        assert_eq!(value["errors"][0]["line"], 2);
    }
}
