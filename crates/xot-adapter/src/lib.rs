//! xot engine adapter
//!
//! Supports:
//! - XML parsing via xot (pure Rust)
//!
//! Does NOT support:
//! - XSLT
//! - XSD validation

use std::path::Path;

use xml_engine_traits::error::{Error, Result};
use xml_engine_traits::result::ValidationResult;
use xml_engine_traits::{XmlParser, XsdValidator, XsltEngine, XsltParameters};

const BACKEND_NAME: &str = "xot";

/// xot engine wrapper
pub struct XotEngine {
    xot: xot::Xot,
}

impl Default for XotEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl XotEngine {
    pub fn new() -> Self {
        Self {
            xot: xot::Xot::new(),
        }
    }
}

/// Document handle for xot (wraps xot::Node)
///
/// Only well-formedness is checked with this backend, so the node is held
/// but never read.
pub struct XotDocument {
    _root: xot::Node,
}

impl XmlParser for XotEngine {
    type Document = XotDocument;

    fn parse(&mut self, xml: &str) -> Result<Self::Document> {
        let root = self
            .xot
            .parse(xml)
            .map_err(|e| Error::parse(e.to_string()))?;
        Ok(XotDocument { _root: root })
    }

    fn parse_file(&mut self, path: &Path) -> Result<Self::Document> {
        let content = std::fs::read_to_string(path)?;
        self.parse(&content).map_err(|e| match e {
            Error::ParseError(msg) => Error::parse(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    fn backend_name(&self) -> &'static str {
        BACKEND_NAME
    }
}

impl XsltEngine for XotEngine {
    type Stylesheet = ();

    fn compile_stylesheet(&mut self, _xslt: &str) -> Result<Self::Stylesheet> {
        Err(Error::Unsupported(BACKEND_NAME))
    }

    fn compile_stylesheet_file(&mut self, _path: &Path) -> Result<Self::Stylesheet> {
        Err(Error::Unsupported(BACKEND_NAME))
    }

    fn transform(
        &mut self,
        _stylesheet: &mut Self::Stylesheet,
        _source: &Self::Document,
        _params: &XsltParameters,
    ) -> Result<Self::Document> {
        Err(Error::Unsupported(BACKEND_NAME))
    }

    fn serialize(&self, _doc: &Self::Document) -> Result<String> {
        Err(Error::Unsupported(BACKEND_NAME))
    }
}

impl XsdValidator for XotEngine {
    fn load_schema(&mut self, _xsd: &str) -> Result<()> {
        Err(Error::Unsupported(BACKEND_NAME))
    }

    fn load_schema_file(&mut self, _path: &Path) -> Result<()> {
        Err(Error::Unsupported(BACKEND_NAME))
    }

    fn validate(&mut self, _doc: &Self::Document) -> Result<ValidationResult> {
        Err(Error::Unsupported(BACKEND_NAME))
    }
}
