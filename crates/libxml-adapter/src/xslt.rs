//! XSLT support through libxslt

use std::path::Path;

use libxml::tree::SaveOptions;
use libxslt::parser as xslt_parser;
use libxslt::stylesheet::Stylesheet;
use tracing::debug;

use xml_engine_traits::error::{Error, Result};
use xml_engine_traits::{XsltEngine, XsltParameters};

use crate::engine::{ensure_readable, path_str, LibxmlDocument, LibxmlEngine};

/// Compiled libxslt stylesheet
pub struct LibxmlStylesheet {
    inner: Stylesheet,
}

/// libxslt evaluates parameter values as XPath expressions, so string
/// values are wrapped in whichever quote character they do not contain.
/// A value holding both is spliced together with `concat`.
pub(crate) fn xpath_string_literal(value: &str) -> String {
    if !value.contains('\'') {
        return format!("'{value}'");
    }
    if !value.contains('"') {
        return format!("\"{value}\"");
    }
    let pieces: Vec<String> = value.split('\'').map(|piece| format!("'{piece}'")).collect();
    format!("concat({})", pieces.join(", \"'\", "))
}

impl XsltEngine for LibxmlEngine {
    type Stylesheet = LibxmlStylesheet;

    fn compile_stylesheet(&mut self, xslt: &str) -> Result<Self::Stylesheet> {
        xslt_parser::parse_bytes(xslt.as_bytes().to_vec(), "")
            .map(|inner| LibxmlStylesheet { inner })
            .map_err(|e| Error::xslt(format!("failed to compile stylesheet: {e}")))
    }

    fn compile_stylesheet_file(&mut self, path: &Path) -> Result<Self::Stylesheet> {
        ensure_readable(path)?;
        let filename = path_str(path)?;
        debug!(stylesheet = %path.display(), "compiling XSLT stylesheet");
        xslt_parser::parse_file(filename)
            .map(|inner| LibxmlStylesheet { inner })
            .map_err(|e| {
                Error::xslt(format!(
                    "failed to compile stylesheet {}: {e}",
                    path.display()
                ))
            })
    }

    fn transform(
        &mut self,
        stylesheet: &mut Self::Stylesheet,
        source: &Self::Document,
        params: &XsltParameters,
    ) -> Result<Self::Document> {
        let quoted: Vec<(&str, String)> = params
            .iter()
            .map(|p| (p.name.as_str(), xpath_string_literal(&p.value)))
            .collect();
        let pairs: Vec<(&str, &str)> = quoted
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect();

        stylesheet
            .inner
            .transform(source.inner().clone(), pairs)
            .map(LibxmlDocument::new)
            .map_err(|e| Error::xslt(e.to_string()))
    }

    fn serialize(&self, doc: &Self::Document) -> Result<String> {
        let options = SaveOptions {
            format: true,
            no_declaration: true,
            ..SaveOptions::default()
        };
        Ok(doc.inner().to_string_with_options(options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_prefers_single_quotes() {
        assert_eq!(xpath_string_literal("hello"), "'hello'");
        assert_eq!(xpath_string_literal(""), "''");
    }

    #[test]
    fn literal_switches_quote_character() {
        assert_eq!(xpath_string_literal("it's"), "\"it's\"");
        assert_eq!(xpath_string_literal("say \"hi\""), "'say \"hi\"'");
    }

    #[test]
    fn literal_concatenates_mixed_quotes() {
        assert_eq!(
            xpath_string_literal("it's \"both\""),
            "concat('it', \"'\", 's \"both\"')"
        );
        assert_eq!(
            xpath_string_literal("'\""),
            "concat('', \"'\", '\"')"
        );
    }
}
