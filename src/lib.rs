//! # unpage
//!
//! Page-delimited text and unified metadata from structured document markup.
//!
//! Content-parsing engines describe a document as a stream of structural
//! events (element open, character data, element close) plus a flat metadata
//! table whose keys depend on the source format. This library rebuilds
//! logical pages from the event stream and maps the metadata table onto a
//! small unified schema.
//!
//! ## Quick Start
//!
//! ```
//! use unpage::{MetadataNormalizer, NormalizeOptions, PageAccumulator, RawMetadata, StructuralEvent};
//!
//! // Split pages from an event stream
//! let mut pages = PageAccumulator::new(true);
//! for event in [
//!     StructuralEvent::open("div", [("class", "page")]),
//!     StructuralEvent::characters("Hello,\n  world"),
//!     StructuralEvent::close("div"),
//! ] {
//!     pages.on_event(event);
//! }
//! assert_eq!(pages.finish(), vec!["Hello, world"]);
//!
//! // Normalize engine metadata
//! let raw: RawMetadata = [("dc:title", "Report"), ("meta:page-count", "1")]
//!     .into_iter()
//!     .collect();
//! let meta = MetadataNormalizer::new().normalize(&raw, None, NormalizeOptions::default());
//! assert_eq!(meta.title.as_deref(), Some("Report"));
//! ```
//!
//! ## Features
//!
//! - **Streaming page splitting**: push-based accumulator, one pass, never fails
//! - **Metadata fallback chains**: one schema across PDF, office and image vocabularies
//! - **Language fallback**: built-in `whatlang` identifier (feature `language`), or plug in your own
//! - **XHTML input**: engine-rendered XHTML parsed with `quick-xml`
//! - **Batch extraction**: documents processed in parallel with Rayon

pub mod engine;
pub mod error;
pub mod extract;
pub mod media;
pub mod meta;
pub mod model;
pub mod pages;
pub mod render;
pub mod text;

// Re-export commonly used types
pub use engine::{ContentEngine, TextExtraction, XhtmlEngine};
pub use error::{Error, Result};
pub use extract::{ExtractOptions, ExtractionResult, Extractor};
pub use media::MediaType;
pub use meta::{LanguageIdentifier, MetadataNormalizer, NormalizeOptions};
#[cfg(feature = "language")]
pub use meta::WhatlangIdentifier;
pub use model::{EventSink, MetadataValue, RawMetadata, StructuralEvent, UnifiedMetadata};
pub use pages::{split_pages, PageAccumulator, PageMarker};
pub use render::{to_json, JsonFormat};

use std::path::Path;

/// Extract a document from engine-rendered XHTML bytes with default options.
///
/// # Example
///
/// ```
/// let xhtml = br#"<html><body><p>Just text</p></body></html>"#;
/// let result = unpage::extract_bytes("note.html", xhtml).unwrap();
/// assert_eq!(result.content.as_deref(), Some("Just text"));
/// ```
pub fn extract_bytes(filename: &str, data: &[u8]) -> Result<ExtractionResult> {
    Extractor::new().extract(filename, data)
}

/// Extract a document from an engine-rendered XHTML file with default options.
///
/// ```no_run
/// let result = unpage::extract_file("report.xhtml").unwrap();
/// println!("{:?}", result.pages);
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<ExtractionResult> {
    Extractor::new().extract_file(path)
}

/// Split the pages of an XHTML document.
///
/// # Example
///
/// ```
/// let xhtml = r#"<body><div class="page">A</div><div class="page">B</div></body>"#;
/// assert_eq!(unpage::pages_from_xhtml(xhtml, true).unwrap(), vec!["A", "B"]);
/// ```
pub fn pages_from_xhtml(xhtml: &str, compress: bool) -> Result<Vec<String>> {
    let mut pages = PageAccumulator::new(compress);
    pages::stream_xhtml(xhtml, &mut pages)?;
    Ok(pages.finish())
}

/// Normalize a raw metadata table without language detection.
pub fn normalize_metadata(raw: &RawMetadata) -> UnifiedMetadata {
    meta::normalize(raw)
}
