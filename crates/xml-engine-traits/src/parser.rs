//! XML parsing capability

use std::path::Path;

use crate::error::Result;

/// XML parsing capability.
///
/// Every backend implements this; the other capability traits build on it
/// so that documents produced here can be fed straight back into the
/// same engine.
pub trait XmlParser {
    /// The document type returned by this parser
    type Document;

    /// Parse XML from a string
    fn parse(&mut self, xml: &str) -> Result<Self::Document>;

    /// Parse XML from a file
    fn parse_file(&mut self, path: &Path) -> Result<Self::Document> {
        let content = std::fs::read_to_string(path)?;
        self.parse(&content)
    }

    /// Short name of the backend, used in diagnostics
    fn backend_name(&self) -> &'static str;
}
