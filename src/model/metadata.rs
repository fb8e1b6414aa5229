//! Raw and unified metadata types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Flat metadata table as reported by a content engine.
///
/// Keys use the engine's own vocabulary (`dc:title`, `meta:page-count`,
/// `xmpTPg:NPages`, ...). Empty values are kept in the table but treated as
/// absent by every lookup helper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawMetadata {
    entries: BTreeMap<String, String>,
}

impl RawMetadata {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Insert a value only if the key has no value yet.
    ///
    /// Engines that report multi-valued keys keep their first value.
    pub fn insert_first(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.entry(key.into()).or_insert_with(|| value.into());
    }

    /// Raw value for a key, including empty strings.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Value for a key, or `None` when missing or empty.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    /// First non-empty value along a fallback chain of keys.
    pub fn first_of(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| self.get_non_empty(key))
    }

    /// Number of entries (empty values included).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for RawMetadata
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = RawMetadata::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}

/// A metadata value that is an integer when it parses as one, text otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    /// Successfully parsed integer
    Integer(i32),
    /// Original text, kept when integer parsing failed
    Text(String),
}

impl MetadataValue {
    /// Coerce a raw value: parse the trimmed text as an integer, otherwise
    /// keep the original text unmodified.
    pub fn coerce(raw: &str) -> Self {
        match raw.trim().parse::<i32>() {
            Ok(n) => MetadataValue::Integer(n),
            Err(_) => MetadataValue::Text(raw.to_string()),
        }
    }

    /// Integer value, if this is one.
    pub fn as_integer(&self) -> Option<i32> {
        match self {
            MetadataValue::Integer(n) => Some(*n),
            MetadataValue::Text(_) => None,
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Integer(n) => write!(f, "{}", n),
            MetadataValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Unified metadata schema.
///
/// Every field is independently optional; a missing field means the value
/// could not be determined. Absent fields are omitted from JSON output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnifiedMetadata {
    /// Document title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Description or subject
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Revision, editing cycle count or format version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<MetadataValue>,

    /// Number of pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<MetadataValue>,

    /// Number of words
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<MetadataValue>,

    /// Author or creator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,

    /// Image height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<MetadataValue>,

    /// Image width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<MetadataValue>,

    /// Language tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Keywords
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,

    /// Creation timestamp, `YYYY-MM-DDTHH:MM:SS` prefix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_created: Option<String>,

    /// Last modification timestamp, `YYYY-MM-DDTHH:MM:SS` prefix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_changed: Option<String>,
}

impl UnifiedMetadata {
    /// Create an empty metadata record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no field could be determined.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
