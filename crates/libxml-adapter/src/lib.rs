//! libxml2 engine adapter for the XML engine abstraction
//!
//! Supports:
//! - XML parsing (strict, no recovery)
//! - XSLT 1.0 via libxslt
//! - XSD 1.0 validation
//!
//! This is the same C toolkit lxml wraps, so behavior around entity
//! resolution, includes and error messages follows libxml2.

pub mod engine;
pub mod xslt;

pub use engine::{LibxmlDocument, LibxmlEngine};
pub use xslt::LibxmlStylesheet;
