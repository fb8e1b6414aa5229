//! Error types for the unpage library.
//!
//! The page accumulator and the metadata normalizer never fail; errors only
//! come from the content engine boundary (reading input, decoding markup)
//! and from rendering results.

use std::io;
use thiserror::Error;

/// Result type alias for unpage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not in a format the content engine can handle.
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// The structural markup could not be parsed.
    #[error("Markup parsing error: {0}")]
    Markup(String),

    /// The input is not valid text in the expected encoding.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Error during rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Markup(err.to_string())
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedFormat("application/pdf".into());
        assert_eq!(
            err.to_string(),
            "Unsupported document format: application/pdf"
        );

        let err = Error::Markup("unexpected end".into());
        assert_eq!(err.to_string(), "Markup parsing error: unexpected end");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_utf8_error_conversion() {
        let bytes = vec![0x66, 0x6f, 0xff];
        let err: Error = std::str::from_utf8(&bytes).unwrap_err().into();
        assert!(matches!(err, Error::Encoding(_)));
    }
}
