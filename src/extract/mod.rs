//! Document extraction: full text, unified metadata and pages.
//!
//! The [`Extractor`] runs a [`ContentEngine`] twice per document, once for
//! plain text plus raw metadata and once to stream structural events into a
//! fresh [`PageAccumulator`]. Pages are only produced for PDF documents.
//!
//! # Example
//!
//! ```
//! use unpage::{ExtractOptions, Extractor};
//!
//! let xhtml = br#"<html><head><meta name="Content-Type" content="application/pdf"/>
//! <meta name="dc:title" content="Minutes"/></head>
//! <body><div class="page"><p>Page one</p></div><div class="page"><p>Page two</p></div></body></html>"#;
//!
//! let extractor = Extractor::new().with_options(ExtractOptions::new().with_raw_metadata(true));
//! let result = extractor.extract("minutes.pdf", xhtml)?;
//!
//! assert_eq!(result.mimetype, "application/pdf");
//! assert_eq!(result.pages, Some(vec!["Page one".to_string(), "Page two".to_string()]));
//! assert_eq!(result.meta.unwrap().title.as_deref(), Some("Minutes"));
//! # Ok::<(), unpage::Error>(())
//! ```

mod options;
mod result;

pub use options::ExtractOptions;
pub use result::ExtractionResult;

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;

use crate::engine::{ContentEngine, XhtmlEngine};
use crate::error::{Error, Result};
use crate::meta::{LanguageIdentifier, MetadataNormalizer};
use crate::pages::PageAccumulator;
use crate::text::compress_if;

/// Extraction pipeline over a content engine.
///
/// Holds only shared, immutable state, so one extractor can serve many
/// documents concurrently.
#[derive(Clone)]
pub struct Extractor {
    engine: Arc<dyn ContentEngine>,
    identifier: Option<Arc<dyn LanguageIdentifier>>,
    options: ExtractOptions,
}

impl Extractor {
    /// Create an extractor over the XHTML engine with default options.
    ///
    /// With the `language` feature the built-in identifier backs the
    /// language fallback.
    pub fn new() -> Self {
        Self {
            engine: Arc::new(XhtmlEngine::new()),
            identifier: default_identifier(),
            options: ExtractOptions::default(),
        }
    }

    /// Use a different content engine.
    pub fn with_engine(mut self, engine: Arc<dyn ContentEngine>) -> Self {
        self.engine = engine;
        self
    }

    /// Set extraction options.
    pub fn with_options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the language identifier used by the metadata language fallback.
    pub fn with_language_identifier(mut self, identifier: Arc<dyn LanguageIdentifier>) -> Self {
        self.identifier = Some(identifier);
        self
    }

    /// Get the extraction options.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Get the content engine name.
    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// Extract one document.
    ///
    /// Engine failures abort the document; nothing is normalized or split
    /// for a document the engine could not parse.
    pub fn extract(&self, filename: &str, data: &[u8]) -> Result<ExtractionResult> {
        let start = Instant::now();
        log::info!("Extracting document: {}", filename);
        ensure_not_empty(data)?;

        let media = self.engine.detect(data)?;
        let mut result = ExtractionResult::new(filename, media.to_string());

        let extraction = self.engine.extract_text(data)?;

        if self.options.raw_metadata {
            result.rawmeta = Some(extraction.metadata.clone());
        }

        if self.options.metadata {
            let normalizer = match &self.identifier {
                Some(identifier) => MetadataNormalizer::with_identifier(identifier.as_ref()),
                None => MetadataNormalizer::new(),
            };
            result.meta = Some(normalizer.normalize(
                &extraction.metadata,
                Some(&extraction.text),
                self.options.normalize_options(),
            ));
        }

        // PDFs only carry full text when asked to
        if !media.is_pdf() || self.options.full_text {
            result.content = Some(compress_if(extraction.text, self.options.compress));
        }

        if media.is_pdf() {
            let mut pages =
                PageAccumulator::with_marker(self.options.compress, self.options.page_marker.clone());
            self.engine.stream_events(data, &mut pages)?;
            result.pages = Some(pages.finish());
        }

        log::info!("Elapsed time: {}ms", start.elapsed().as_millis());
        Ok(result)
    }

    /// Extract a document from a file, using its file name as `filename`.
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<ExtractionResult> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.extract(&filename, &data)
    }

    /// Extract several documents, each independently.
    ///
    /// Results come back in input order. Documents run on the rayon pool
    /// unless parallel processing is disabled.
    pub fn extract_batch<S, D>(&self, documents: &[(S, D)]) -> Vec<Result<ExtractionResult>>
    where
        S: AsRef<str> + Sync,
        D: AsRef<[u8]> + Sync,
    {
        log::debug!(
            "Extracting batch of {} documents (parallel: {})",
            documents.len(),
            self.options.parallel
        );

        if self.options.parallel {
            documents
                .par_iter()
                .map(|(name, data)| self.extract(name.as_ref(), data.as_ref()))
                .collect()
        } else {
            documents
                .iter()
                .map(|(name, data)| self.extract(name.as_ref(), data.as_ref()))
                .collect()
        }
    }

    /// Extract one document on tokio's blocking pool.
    #[cfg(feature = "async")]
    pub async fn extract_async(
        &self,
        filename: impl Into<String>,
        data: Vec<u8>,
    ) -> Result<ExtractionResult> {
        let extractor = self.clone();
        let filename = filename.into();
        tokio::task::spawn_blocking(move || extractor.extract(&filename, &data))
            .await
            .map_err(|e| Error::Other(format!("Extraction task failed: {}", e)))?
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Extractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor")
            .field("engine", &self.engine.name())
            .field("identifier", &self.identifier.is_some())
            .field("options", &self.options)
            .finish()
    }
}

#[cfg(feature = "language")]
fn default_identifier() -> Option<Arc<dyn LanguageIdentifier>> {
    Some(Arc::new(crate::meta::WhatlangIdentifier::new()))
}

#[cfg(not(feature = "language"))]
fn default_identifier() -> Option<Arc<dyn LanguageIdentifier>> {
    None
}

/// Reject empty uploads before they reach an engine.
fn ensure_not_empty(data: &[u8]) -> Result<()> {
    if data.is_empty() {
        return Err(Error::UnsupportedFormat("empty document".into()));
    }
    Ok(())
}
