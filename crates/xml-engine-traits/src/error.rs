//! Error types for XML engine operations

/// Result type for XML engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for all XML engine operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The selected backend does not implement the requested capability
    #[error("Operation not supported by the {0} backend")]
    Unsupported(&'static str),

    /// XML parsing failed (document is not well-formed)
    #[error("XML parsing error: {0}")]
    ParseError(String),

    /// XSLT compilation or transformation failed
    #[error("XSLT transformation error: {0}")]
    XsltError(String),

    /// XSD schema loading or validation failed
    #[error("XSD validation error: {0}")]
    XsdError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic engine error
    #[error("Engine error: {0}")]
    EngineError(String),
}

impl Error {
    /// Create a new XML parsing error
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::ParseError(msg.into())
    }

    /// Create a new XSLT error
    pub fn xslt<S: Into<String>>(msg: S) -> Self {
        Error::XsltError(msg.into())
    }

    /// Create a new XSD error
    pub fn xsd<S: Into<String>>(msg: S) -> Self {
        Error::XsdError(msg.into())
    }

    /// Create a new generic engine error
    pub fn engine<S: Into<String>>(msg: S) -> Self {
        Error::EngineError(msg.into())
    }

    /// True when the backend lacks the capability rather than the input being bad
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::Unsupported(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_names_backend() {
        let err = Error::Unsupported("xot");
        assert!(err.is_unsupported());
        assert_eq!(err.to_string(), "Operation not supported by the xot backend");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.xml");
        let err: Error = io.into();
        assert!(matches!(err, Error::IoError(_)));
        assert!(err.to_string().contains("missing.xml"));
    }
}
