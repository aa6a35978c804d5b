//! XSD validation capability

use std::path::Path;

use crate::error::Result;
use crate::parser::XmlParser;
use crate::result::ValidationResult;

/// XSD validation capability.
///
/// A validator holds at most one loaded schema; loading another replaces it.
pub trait XsdValidator: XmlParser {
    /// Load a schema from a string
    fn load_schema(&mut self, xsd: &str) -> Result<()>;

    /// Load a schema from a file
    fn load_schema_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path)?;
        self.load_schema(&content)
    }

    /// Validate a document against the loaded schema
    fn validate(&mut self, doc: &Self::Document) -> Result<ValidationResult>;
}
