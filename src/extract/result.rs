//! Extraction result.

use serde::{Deserialize, Serialize};

use crate::model::{RawMetadata, UnifiedMetadata};

/// Everything extracted from one document.
///
/// Optional parts are omitted from JSON when they were not requested or do
/// not apply (e.g. `pages` for non-paginated formats).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Name the document was submitted under
    pub filename: String,

    /// Detected media type
    pub mimetype: String,

    /// Full text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Raw metadata table as reported by the engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rawmeta: Option<RawMetadata>,

    /// Normalized metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<UnifiedMetadata>,

    /// Page texts, in page order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<String>>,
}

impl ExtractionResult {
    /// Create a result with only the filename and media type set.
    pub fn new(filename: impl Into<String>, mimetype: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            mimetype: mimetype.into(),
            ..Default::default()
        }
    }

    /// Number of pages, if the document was split into pages.
    pub fn page_count(&self) -> Option<usize> {
        self.pages.as_ref().map(Vec::len)
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: usize) -> Option<&str> {
        if page_num == 0 {
            return None;
        }
        self.pages
            .as_ref()?
            .get(page_num - 1)
            .map(String::as_str)
    }
}
