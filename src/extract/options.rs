//! Extraction options and configuration.

use crate::meta::NormalizeOptions;
use crate::pages::PageMarker;

/// Options controlling what an extraction returns.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Collapse whitespace and trim full text and page text
    pub compress: bool,

    /// Include the raw metadata table
    pub raw_metadata: bool,

    /// Include normalized metadata
    pub metadata: bool,

    /// Include full text for PDFs (other formats always get it)
    pub full_text: bool,

    /// Guess the language from the full text when metadata has none
    pub detect_language: bool,

    /// Whether batch extraction uses parallel workers
    pub parallel: bool,

    /// Element signature delimiting pages
    pub page_marker: PageMarker,
}

impl ExtractOptions {
    /// Create new extraction options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable whitespace compression.
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Enable or disable raw metadata output.
    pub fn with_raw_metadata(mut self, raw: bool) -> Self {
        self.raw_metadata = raw;
        self
    }

    /// Enable or disable normalized metadata output.
    pub fn with_metadata(mut self, metadata: bool) -> Self {
        self.metadata = metadata;
        self
    }

    /// Enable or disable full text for PDFs.
    pub fn with_full_text(mut self, full_text: bool) -> Self {
        self.full_text = full_text;
        self
    }

    /// Enable or disable the language fallback.
    pub fn with_detect_language(mut self, detect: bool) -> Self {
        self.detect_language = detect;
        self
    }

    /// Enable or disable parallel batch processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel batch processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set the page marker.
    pub fn with_page_marker(mut self, marker: PageMarker) -> Self {
        self.page_marker = marker;
        self
    }

    /// Normalization options derived from these options.
    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions::new().with_detect_language(self.detect_language)
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            compress: true,
            raw_metadata: false,
            metadata: true,
            full_text: true,
            detect_language: true,
            parallel: true,
            page_marker: PageMarker::default(),
        }
    }
}
