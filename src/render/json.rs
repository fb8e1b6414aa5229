//! JSON rendering of extraction output.

use serde::Serialize;

use crate::error::{Error, Result};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize an extraction result, page list or metadata record to JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::ExtractionResult;
    use crate::model::{MetadataValue, UnifiedMetadata};

    #[test]
    fn test_to_json_pretty() {
        let mut result = ExtractionResult::new("test.pdf", "application/pdf");
        result.meta = Some(UnifiedMetadata {
            title: Some("Test".to_string()),
            ..Default::default()
        });
        result.pages = Some(vec!["Hello".to_string()]);

        let json = to_json(&result, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains("Test"));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let meta = UnifiedMetadata {
            page_count: Some(MetadataValue::Integer(2)),
            ..Default::default()
        };
        let json = to_json(&meta, JsonFormat::Compact).unwrap();
        assert_eq!(json, r#"{"page_count":2}"#);
    }

    #[test]
    fn test_page_list_with_gaps() {
        let pages = vec!["A".to_string(), String::new(), "C".to_string()];
        let json = to_json(pages.as_slice(), JsonFormat::Compact).unwrap();
        assert_eq!(json, r#"["A","","C"]"#);
    }
}
