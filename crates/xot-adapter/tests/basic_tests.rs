//! Basic tests for xot-adapter

use std::fs;

use xml_engine_traits::{Error, XmlParser, XsdValidator, XsltEngine, XsltParameters};
use xot_adapter::XotEngine;

#[test]
fn parse_well_formed() {
    let mut engine = XotEngine::new();
    assert!(engine.parse("<root><item>test</item></root>").is_ok());
}

#[test]
fn parse_malformed_carries_message() {
    let mut engine = XotEngine::new();
    let err = engine.parse("<root><item></root>").err().unwrap();
    assert!(matches!(err, Error::ParseError(_)));
}

#[test]
fn parse_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.xml");
    fs::write(&path, "<a><b></a>").unwrap();

    let mut engine = XotEngine::new();
    let err = engine.parse_file(&path).err().unwrap();
    assert!(matches!(err, Error::ParseError(_)));
    let message = err.to_string();
    assert!(message.starts_with(&format!("XML parsing error: {}: ", path.display())));
    assert_eq!(message.matches("XML parsing error").count(), 1);
}

#[test]
fn parse_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = XotEngine::new();
    let err = engine.parse_file(&dir.path().join("nope.xml")).err().unwrap();
    assert!(matches!(err, Error::IoError(_)));
}

#[test]
fn xslt_and_xsd_are_unsupported() {
    let mut engine = XotEngine::new();
    let doc = engine.parse("<root/>").unwrap();

    assert!(engine.compile_stylesheet("<xsl:stylesheet/>").unwrap_err().is_unsupported());
    assert!(engine
        .transform(&mut (), &doc, &XsltParameters::new())
        .err()
        .unwrap()
        .is_unsupported());
    assert!(engine.load_schema("<xs:schema/>").unwrap_err().is_unsupported());
    assert!(engine.validate(&doc).unwrap_err().is_unsupported());
    assert_eq!(engine.backend_name(), "xot");
}
