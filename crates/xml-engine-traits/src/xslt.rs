//! XSLT engine abstraction trait

use std::path::Path;
use std::str::FromStr;

use crate::error::Result;
use crate::parser::XmlParser;

/// A single top-level stylesheet parameter, passed as a string value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XsltParam {
    pub name: String,
    pub value: String,
}

impl FromStr for XsltParam {
    type Err = String;

    /// Parses `NAME=VALUE`; the value may itself contain `=`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| format!("expected NAME=VALUE, got `{s}`"))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(format!("missing parameter name in `{s}`"));
        }
        Ok(Self {
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}

/// Ordered set of stylesheet parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XsltParameters {
    params: Vec<XsltParam>,
}

impl XsltParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter; a later value for the same name replaces the earlier one
    pub fn add(&mut self, name: &str, value: &str) {
        match self.params.iter_mut().find(|p| p.name == name) {
            Some(existing) => existing.value = value.to_string(),
            None => self.params.push(XsltParam {
                name: name.to_string(),
                value: value.to_string(),
            }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &XsltParam> {
        self.params.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }
}

impl FromIterator<XsltParam> for XsltParameters {
    fn from_iter<I: IntoIterator<Item = XsltParam>>(iter: I) -> Self {
        let mut params = Self::new();
        for param in iter {
            params.add(&param.name, &param.value);
        }
        params
    }
}

/// Trait for XSLT transformation engines.
///
/// This trait abstracts over different XSLT implementation strategies,
/// allowing different engines to be used interchangeably.
pub trait XsltEngine: XmlParser {
    /// Type representing a compiled stylesheet
    type Stylesheet;

    /// Compile an XSLT stylesheet from a string
    fn compile_stylesheet(&mut self, xslt: &str) -> Result<Self::Stylesheet>;

    /// Compile an XSLT stylesheet from a file
    fn compile_stylesheet_file(&mut self, path: &Path) -> Result<Self::Stylesheet> {
        let content = std::fs::read_to_string(path)?;
        self.compile_stylesheet(&content)
    }

    /// Transform a source document using a compiled stylesheet
    fn transform(
        &mut self,
        stylesheet: &mut Self::Stylesheet,
        source: &Self::Document,
        params: &XsltParameters,
    ) -> Result<Self::Document>;

    /// Serialize a result document as indented XML
    fn serialize(&self, doc: &Self::Document) -> Result<String>;

    /// Transform a document and return the serialized result
    fn transform_to_string(
        &mut self,
        stylesheet: &mut Self::Stylesheet,
        source: &Self::Document,
        params: &XsltParameters,
    ) -> Result<String> {
        let result = self.transform(stylesheet, source, params)?;
        self.serialize(&result)
    }
}
