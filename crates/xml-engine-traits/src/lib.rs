//! Core trait abstractions for XML processing engines.
//!
//! This crate defines the capabilities an XML backend can offer to
//! `xml-cli`: parsing, XSLT transformation and XSD validation. A backend
//! that lacks a capability still implements the trait and answers with
//! [`Error::Unsupported`].

pub mod error;
pub mod parser;
pub mod result;
pub mod xsd;
pub mod xslt;

pub use error::{Error, Result};
pub use parser::XmlParser;
pub use result::{ValidationError, ValidationResult};
pub use xsd::XsdValidator;
pub use xslt::{XsltEngine, XsltParam, XsltParameters};

