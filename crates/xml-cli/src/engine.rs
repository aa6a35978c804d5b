//! Unified engine wrapper with runtime backend selection
//!
//! Provides a single `XEngine` type that can use any backend (libxml2, xot)
//! with the same API, selectable from the command line.

use std::fmt;
use std::path::Path;

use libxml_adapter::{LibxmlDocument, LibxmlEngine, LibxmlStylesheet};
use xml_engine_traits::error::{Error, Result};
use xml_engine_traits::{
    ValidationResult, XmlParser, XsdValidator, XsltEngine, XsltParameters,
};
use xot_adapter::{XotDocument, XotEngine};

/// Backend engine selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Backend {
    /// libxml2 + libxslt: parsing, XSLT 1.0, XSD 1.0
    #[default]
    #[value(name = "libxml2")]
    Libxml2,
    /// xot: parsing only
    Xot,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Backend::Libxml2 => "libxml2",
            Backend::Xot => "xot",
        })
    }
}

/// Unified XML engine with runtime backend selection
pub enum XEngine {
    Libxml(LibxmlEngine),
    Xot(XotEngine),
}

/// Unified document handle
pub enum XDocument {
    Libxml(LibxmlDocument),
    Xot(XotDocument),
}

/// Unified compiled stylesheet
pub enum XStylesheet {
    Libxml(LibxmlStylesheet),
    Xot,
}

fn mismatch() -> Error {
    Error::engine("Document was created with a different engine")
}

impl XEngine {
    /// Create a new engine with the specified backend
    pub fn with_backend(backend: Backend) -> Self {
        match backend {
            Backend::Libxml2 => Self::Libxml(LibxmlEngine::new()),
            Backend::Xot => Self::Xot(XotEngine::new()),
        }
    }

    /// Name reported by the active backend
    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Libxml(e) => e.backend_name(),
            Self::Xot(e) => e.backend_name(),
        }
    }

    // ==================== XML Parsing ====================

    /// Parse XML from a file
    pub fn parse_file(&mut self, path: &Path) -> Result<XDocument> {
        match self {
            Self::Libxml(e) => e.parse_file(path).map(XDocument::Libxml),
            Self::Xot(e) => e.parse_file(path).map(XDocument::Xot),
        }
    }

    // ==================== XSLT ====================

    /// Compile an XSLT stylesheet from a file
    pub fn compile_stylesheet_file(&mut self, path: &Path) -> Result<XStylesheet> {
        match self {
            Self::Libxml(e) => e.compile_stylesheet_file(path).map(XStylesheet::Libxml),
            Self::Xot(e) => e.compile_stylesheet_file(path).map(|()| XStylesheet::Xot),
        }
    }

    /// Transform a document and serialize the result as indented XML
    pub fn transform_to_string(
        &mut self,
        stylesheet: &mut XStylesheet,
        doc: &XDocument,
        params: &XsltParameters,
    ) -> Result<String> {
        match (self, stylesheet, doc) {
            (Self::Libxml(e), XStylesheet::Libxml(s), XDocument::Libxml(d)) => {
                e.transform_to_string(s, d, params)
            }
            (Self::Xot(e), XStylesheet::Xot, XDocument::Xot(d)) => {
                e.transform_to_string(&mut (), d, params)
            }
            _ => Err(mismatch()),
        }
    }

    // ==================== XSD Validation ====================

    /// Load an XSD schema from a file, replacing any previous one
    pub fn load_schema_file(&mut self, path: &Path) -> Result<()> {
        match self {
            Self::Libxml(e) => e.load_schema_file(path),
            Self::Xot(e) => e.load_schema_file(path),
        }
    }

    /// Validate a document against the loaded schema
    pub fn validate(&mut self, doc: &XDocument) -> Result<ValidationResult> {
        match (self, doc) {
            (Self::Libxml(e), XDocument::Libxml(d)) => e.validate(d),
            (Self::Xot(e), XDocument::Xot(d)) => e.validate(d),
            _ => Err(mismatch()),
        }
    }
}

impl Default for XEngine {
    /// Default to the libxml2 backend
    fn default() -> Self {
        Self::with_backend(Backend::default())
    }
}
