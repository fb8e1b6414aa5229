//! Metadata normalization into the unified schema.
//!
//! Each output field walks an ordered chain of raw keys and uses the first
//! one with a non-empty value. Numeric fields are coerced to integers and
//! fall back to the original text when parsing fails.

use crate::model::{MetadataValue, RawMetadata, UnifiedMetadata};
use crate::text::compress_whitespace;

use super::LanguageIdentifier;

const TITLE_KEYS: &[&str] = &["dc:title", "title"];
const DESCRIPTION_KEYS: &[&str] = &["description", "dc:subject", "subject"];
const VERSION_KEYS: &[&str] = &[
    "editing-cycles",
    "pdf:PDFVersion",
    "Revision-Number",
    "cp:revision",
];
const PAGE_COUNT_KEYS: &[&str] = &["meta:page-count", "xmpTPg:NPages"];
const WORD_COUNT_KEYS: &[&str] = &["meta:word-count"];
const CREATOR_KEYS: &[&str] = &["meta:author", "creator"];
const HEIGHT_KEYS: &[&str] = &["tiff:ImageLength"];
const WIDTH_KEYS: &[&str] = &["tiff:ImageWidth"];
const LANGUAGE_KEY: &str = "language";
const KEYWORDS_KEYS: &[&str] = &["Keywords"];
const CREATED_KEYS: &[&str] = &["meta:creation-date"];
const CHANGED_KEYS: &[&str] = &["Last-Modified"];

/// Length of the `YYYY-MM-DDTHH:MM:SS` timestamp prefix.
const TIMESTAMP_PREFIX_LEN: usize = 19;

/// Options for metadata normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Guess the language from the full text when the table has none
    pub detect_language: bool,
}

impl NormalizeOptions {
    /// Create options with defaults (language detection on).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the language fallback.
    pub fn with_detect_language(mut self, detect: bool) -> Self {
        self.detect_language = detect;
        self
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            detect_language: true,
        }
    }
}

/// Maps raw engine metadata onto [`UnifiedMetadata`].
///
/// Holds no per-document state; one normalizer can serve any number of
/// documents and threads.
///
/// # Example
///
/// ```
/// use unpage::{MetadataNormalizer, MetadataValue, NormalizeOptions, RawMetadata};
///
/// let raw: RawMetadata = [("title", "Annual Report"), ("xmpTPg:NPages", "12")]
///     .into_iter()
///     .collect();
///
/// let meta = MetadataNormalizer::new().normalize(&raw, None, NormalizeOptions::default());
/// assert_eq!(meta.title.as_deref(), Some("Annual Report"));
/// assert_eq!(meta.page_count, Some(MetadataValue::Integer(12)));
/// ```
#[derive(Clone, Copy, Default)]
pub struct MetadataNormalizer<'a> {
    identifier: Option<&'a dyn LanguageIdentifier>,
}

impl<'a> MetadataNormalizer<'a> {
    /// Create a normalizer without a language identifier.
    ///
    /// The language fallback then never produces a value.
    pub fn new() -> Self {
        Self { identifier: None }
    }

    /// Create a normalizer that uses `identifier` for the language fallback.
    pub fn with_identifier(identifier: &'a dyn LanguageIdentifier) -> Self {
        Self {
            identifier: Some(identifier),
        }
    }

    /// Normalize a raw table. Never fails.
    ///
    /// `full_text` is only consulted for the language fallback.
    pub fn normalize(
        &self,
        raw: &RawMetadata,
        full_text: Option<&str>,
        options: NormalizeOptions,
    ) -> UnifiedMetadata {
        UnifiedMetadata {
            title: text_field(raw, TITLE_KEYS),
            description: text_field(raw, DESCRIPTION_KEYS),
            version: numeric_field(raw, VERSION_KEYS),
            page_count: numeric_field(raw, PAGE_COUNT_KEYS),
            word_count: numeric_field(raw, WORD_COUNT_KEYS),
            creator: text_field(raw, CREATOR_KEYS),
            height: numeric_field(raw, HEIGHT_KEYS),
            width: numeric_field(raw, WIDTH_KEYS),
            language: self.language(raw, full_text, options),
            keywords: text_field(raw, KEYWORDS_KEYS),
            document_created: timestamp_field(raw, CREATED_KEYS),
            document_changed: timestamp_field(raw, CHANGED_KEYS),
        }
    }

    fn language(
        &self,
        raw: &RawMetadata,
        full_text: Option<&str>,
        options: NormalizeOptions,
    ) -> Option<String> {
        if let Some(language) = raw.get_non_empty(LANGUAGE_KEY) {
            return Some(language.to_string());
        }
        if !options.detect_language {
            return None;
        }

        let text = compress_whitespace(full_text?);
        if text.is_empty() {
            return None;
        }

        match self.identifier {
            Some(identifier) => {
                log::debug!("Guessing language of document...");
                let language = identifier.identify_language(&text);
                (!language.is_empty()).then_some(language)
            }
            None => {
                log::debug!("Language detection requested but no identifier is configured");
                None
            }
        }
    }
}

impl std::fmt::Debug for MetadataNormalizer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetadataNormalizer")
            .field("identifier", &self.identifier.is_some())
            .finish()
    }
}

/// Normalize a raw table without a language identifier.
pub fn normalize(raw: &RawMetadata) -> UnifiedMetadata {
    MetadataNormalizer::new().normalize(raw, None, NormalizeOptions::default())
}

fn text_field(raw: &RawMetadata, keys: &[&str]) -> Option<String> {
    raw.first_of(keys).map(str::to_string)
}

fn numeric_field(raw: &RawMetadata, keys: &[&str]) -> Option<MetadataValue> {
    raw.first_of(keys).map(MetadataValue::coerce)
}

fn timestamp_field(raw: &RawMetadata, keys: &[&str]) -> Option<String> {
    raw.first_of(keys)
        .map(|value| value.chars().take(TIMESTAMP_PREFIX_LEN).collect())
}
