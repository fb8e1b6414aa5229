//! Media type parsing and magic-byte sniffing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `type/subtype` media type, parameters stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaType {
    /// Top-level type (e.g., "application")
    pub top_level: String,
    /// Subtype (e.g., "pdf")
    pub subtype: String,
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

impl MediaType {
    /// Create a media type from its parts (lowercased).
    pub fn new(top_level: impl Into<String>, subtype: impl Into<String>) -> Self {
        Self {
            top_level: top_level.into().to_ascii_lowercase(),
            subtype: subtype.into().to_ascii_lowercase(),
        }
    }

    /// `application/octet-stream`
    pub fn octet_stream() -> Self {
        Self::new("application", "octet-stream")
    }

    /// Parse a `Content-Type` value such as `application/pdf; version=1.4`.
    ///
    /// # Example
    ///
    /// ```
    /// use unpage::MediaType;
    ///
    /// let media = MediaType::parse("application/pdf; version=1.4").unwrap();
    /// assert!(media.is_pdf());
    /// assert_eq!(media.to_string(), "application/pdf");
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        let essence = value.split(';').next()?.trim();
        let (top_level, subtype) = essence.split_once('/')?;
        let (top_level, subtype) = (top_level.trim(), subtype.trim());
        if top_level.is_empty() || subtype.is_empty() {
            return None;
        }
        Some(Self::new(top_level, subtype))
    }

    /// Guess the media type from the leading bytes of a document.
    pub fn sniff(data: &[u8]) -> Self {
        if is_pdf_bytes(data) {
            return Self::new("application", "pdf");
        }

        let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
        let start = data
            .iter()
            .position(|b| !b.is_ascii_whitespace())
            .unwrap_or(data.len());
        let head = &data[start..data.len().min(start + 64)];
        let head_lower = head.to_ascii_lowercase();

        if head_lower.starts_with(b"<?xml")
            || head_lower.starts_with(b"<html")
            || head_lower.starts_with(b"<!doctype html")
        {
            return Self::new("application", "xhtml+xml");
        }

        if std::str::from_utf8(data).is_ok() {
            return Self::new("text", "plain");
        }

        Self::octet_stream()
    }

    /// Check whether this is a PDF media type.
    pub fn is_pdf(&self) -> bool {
        self.subtype == "pdf"
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.top_level, self.subtype)
    }
}

/// Check if bytes start with the PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    data.starts_with(PDF_MAGIC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_content_type() {
        let media = MediaType::parse("Application/PDF").unwrap();
        assert_eq!(media, MediaType::new("application", "pdf"));
        assert!(media.is_pdf());

        let media = MediaType::parse("text/html; charset=UTF-8").unwrap();
        assert_eq!(media.to_string(), "text/html");
        assert!(!media.is_pdf());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(MediaType::parse("").is_none());
        assert!(MediaType::parse("pdf").is_none());
        assert!(MediaType::parse("application/").is_none());
    }

    #[test]
    fn test_sniff_pdf() {
        assert!(MediaType::sniff(b"%PDF-1.7\n%\xe2\xe3\xcf\xd3").is_pdf());
        assert!(is_pdf_bytes(b"%PDF-1.4\n"));
        assert!(!is_pdf_bytes(b"Not a PDF"));
    }

    #[test]
    fn test_sniff_xhtml() {
        let media = MediaType::sniff(b"\n  <?xml version=\"1.0\"?><html/>");
        assert_eq!(media.to_string(), "application/xhtml+xml");

        let media = MediaType::sniff(b"\xEF\xBB\xBF<!DOCTYPE html><html></html>");
        assert_eq!(media.to_string(), "application/xhtml+xml");
    }

    #[test]
    fn test_sniff_fallbacks() {
        assert_eq!(MediaType::sniff(b"plain words").to_string(), "text/plain");
        assert_eq!(
            MediaType::sniff(&[0xFF, 0xFE, 0x00, 0x01]),
            MediaType::octet_stream()
        );
    }
}
