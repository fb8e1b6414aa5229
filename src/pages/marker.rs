//! Page marker configuration.

use serde::{Deserialize, Serialize};

/// Element signature that delimits one logical page.
///
/// The default matches `<div class="page">`, the shape content engines use
/// for paginated XHTML output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMarker {
    /// Page-container tag name, matched as a suffix of the event's tag name
    pub tag: String,

    /// Attribute that carries the marker value
    pub attribute: String,

    /// Exact (case-sensitive) marker value
    pub value: String,
}

impl PageMarker {
    /// Create a marker.
    pub fn new(
        tag: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            tag: tag.into(),
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// Check whether a tag name is the page container, tolerating a
    /// namespace prefix (`xhtml:div` matches `div`).
    ///
    /// This is a plain suffix match: any tag ending in the marker tag
    /// (`mydiv` for `div`) counts, and its close ends the current page
    /// region. Pick a marker tag no unrelated element name ends with.
    pub fn matches_tag(&self, tag_name: &str) -> bool {
        tag_name.ends_with(self.tag.as_str())
    }

    /// Check whether an attribute value marks a page.
    pub fn matches_value(&self, value: Option<&str>) -> bool {
        value == Some(self.value.as_str())
    }
}

impl Default for PageMarker {
    fn default() -> Self {
        Self::new("div", "class", "page")
    }
}
