//! Content engine abstraction.
//!
//! A content engine is the external parser that understands a document's
//! binary format. The extractor drives it twice per document: once for
//! plain text plus the raw metadata table, once to stream structural events
//! into a page accumulator. Implement [`ContentEngine`] to plug in a new
//! parser.
//!
//! # Example
//!
//! ```
//! use unpage::engine::{ContentEngine, XhtmlEngine};
//! use unpage::PageAccumulator;
//!
//! fn main() -> unpage::Result<()> {
//!     let xhtml = br#"<html><body><div class="page"><p>Hello</p></div></body></html>"#;
//!     let engine = XhtmlEngine::new();
//!
//!     let mut pages = PageAccumulator::new(true);
//!     engine.stream_events(xhtml, &mut pages)?;
//!     assert_eq!(pages.finish(), vec!["Hello"]);
//!     Ok(())
//! }
//! ```

mod xhtml;

pub use xhtml::XhtmlEngine;

use crate::error::Result;
use crate::media::MediaType;
use crate::model::{EventSink, RawMetadata};

/// Plain-text pass output of a content engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextExtraction {
    /// Full document text, uncompressed
    pub text: String,

    /// Raw metadata table
    pub metadata: RawMetadata,
}

impl TextExtraction {
    /// Create a text extraction result.
    pub fn new(text: impl Into<String>, metadata: RawMetadata) -> Self {
        Self {
            text: text.into(),
            metadata,
        }
    }
}

/// Trait for external content-parsing engines.
pub trait ContentEngine: Send + Sync {
    /// Get the name of this engine.
    fn name(&self) -> &str;

    /// Detect the media type of a document.
    fn detect(&self, data: &[u8]) -> Result<MediaType>;

    /// Extract full text and the raw metadata table.
    fn extract_text(&self, data: &[u8]) -> Result<TextExtraction>;

    /// Push the document's structural events, in document order, into `sink`.
    fn stream_events(&self, data: &[u8], sink: &mut dyn EventSink) -> Result<()>;
}
