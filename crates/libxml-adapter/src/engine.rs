//! libxml2 engine wrapper: parsing and XSD validation

use std::path::Path;

use libxml::error::StructuredError;
use libxml::parser::{Parser, ParserOptions};
use libxml::schemas::{SchemaParserContext, SchemaValidationContext};
use libxml::tree::Document;
use tracing::debug;

use xml_engine_traits::error::{Error, Result};
use xml_engine_traits::result::{ValidationError, ValidationResult};
use xml_engine_traits::{XmlParser, XsdValidator};

pub(crate) const BACKEND_NAME: &str = "libxml2";

/// libxml2 engine wrapper
pub struct LibxmlEngine {
    parser: Parser,
    schema: Option<SchemaValidationContext>,
}

impl Default for LibxmlEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LibxmlEngine {
    pub fn new() -> Self {
        Self {
            parser: Parser::default(),
            schema: None,
        }
    }

    fn install_schema(&mut self, mut parser: SchemaParserContext) -> Result<()> {
        let context = SchemaValidationContext::from_parser(&mut parser).map_err(|errors| {
            let messages: Vec<String> = convert_errors(&errors)
                .into_iter()
                .map(|e| e.to_string())
                .collect();
            Error::xsd(format!("invalid schema: {}", messages.join("; ")))
        })?;
        self.schema = Some(context);
        Ok(())
    }
}

/// Document handle for libxml2
pub struct LibxmlDocument {
    doc: Document,
}

impl LibxmlDocument {
    pub(crate) fn new(doc: Document) -> Self {
        Self { doc }
    }

    /// The underlying libxml2 document
    pub fn inner(&self) -> &Document {
        &self.doc
    }
}

/// Recovery stays off so a malformed document is an error rather than a
/// repaired tree. libxml2 keeps reporting its own diagnostics to stderr;
/// the returned error carries no further detail.
macro_rules! strict_options {
    () => {
        ParserOptions {
            recover: false,
            no_error: false,
            ..ParserOptions::default()
        }
    };
}

pub(crate) fn path_str(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| Error::engine(format!("path is not valid UTF-8: {}", path.display())))
}

/// Fails with the OS error if the file cannot be read, before libxml2 sees it
pub(crate) fn ensure_readable(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path)?;
    if metadata.is_dir() {
        return Err(Error::IoError(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{} is a directory", path.display()),
        )));
    }
    Ok(())
}

fn convert_errors(errors: &[StructuredError]) -> Vec<ValidationError> {
    errors
        .iter()
        .map(|e| {
            let message = e
                .message
                .as_deref()
                .map(str::trim_end)
                .unwrap_or("unknown libxml2 error");
            let line = e.line.and_then(|l| usize::try_from(l).ok()).filter(|&l| l > 0);
            let column = e.col.and_then(|c| usize::try_from(c).ok()).filter(|&c| c > 0);
            ValidationError::new(message).at(line, column)
        })
        .collect()
}

impl XmlParser for LibxmlEngine {
    type Document = LibxmlDocument;

    fn parse(&mut self, xml: &str) -> Result<Self::Document> {
        self.parser
            .parse_string_with_options(xml, strict_options!())
            .map(LibxmlDocument::new)
            .map_err(|_| Error::parse("document is not well-formed"))
    }

    fn parse_file(&mut self, path: &Path) -> Result<Self::Document> {
        ensure_readable(path)?;
        let filename = path_str(path)?;
        self.parser
            .parse_file_with_options(filename, strict_options!())
            .map(LibxmlDocument::new)
            .map_err(|_| Error::parse(format!("{} is not well-formed", path.display())))
    }

    fn backend_name(&self) -> &'static str {
        BACKEND_NAME
    }
}

impl XsdValidator for LibxmlEngine {
    fn load_schema(&mut self, xsd: &str) -> Result<()> {
        self.install_schema(SchemaParserContext::from_buffer(xsd))
    }

    fn load_schema_file(&mut self, path: &Path) -> Result<()> {
        ensure_readable(path)?;
        let filename = path_str(path)?;
        debug!(schema = %path.display(), "loading XSD schema");
        self.install_schema(SchemaParserContext::from_file(filename))
    }

    fn validate(&mut self, doc: &Self::Document) -> Result<ValidationResult> {
        let schema = self
            .schema
            .as_mut()
            .ok_or_else(|| Error::xsd("No schema loaded"))?;

        match schema.validate_document(doc.inner()) {
            Ok(()) => Ok(ValidationResult::valid()),
            Err(errors) => {
                let mut errors = convert_errors(&errors);
                if errors.is_empty() {
                    errors.push(ValidationError::new("document failed schema validation"));
                }
                Ok(ValidationResult::invalid(errors))
            }
        }
    }
}
