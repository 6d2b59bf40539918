//! Document analysis model
//!
//! Defines the document category tag and the canned analysis payload
//! returned for each category. The payloads are compiled-in constants;
//! nothing here is computed at runtime.

mod catalog;

pub use catalog::analysis_for;

use serde::Serialize;

/// Document category requested by the client.
///
/// Parsed from the `document_type` field of the analyze request body.
/// Anything that is not exactly `"privacy"` or `"terms"` falls back to
/// `Legal`, which also covers the literal `"legal"` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentType {
    Privacy,
    Terms,
    #[default]
    Legal,
}

impl DocumentType {
    /// Map a raw tag to a document type. Unknown tags are absorbed by
    /// the `Legal` fallback rather than rejected.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "privacy" => Self::Privacy,
            "terms" => Self::Terms,
            _ => Self::Legal,
        }
    }
}

/// Canned analysis result for one document category.
///
/// Field declaration order is the serialization order; clients assert on
/// the exact key order, so do not reorder these fields.
#[derive(Debug, Serialize)]
pub struct AnalysisResult {
    pub short_summary: &'static str,
    pub risky_points: [&'static str; 3],
    pub favourable_points: [&'static str; 3],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_map_to_their_category() {
        assert_eq!(DocumentType::from_tag("privacy"), DocumentType::Privacy);
        assert_eq!(DocumentType::from_tag("terms"), DocumentType::Terms);
        assert_eq!(DocumentType::from_tag("legal"), DocumentType::Legal);
    }

    #[test]
    fn test_unknown_tags_fall_back_to_legal() {
        assert_eq!(DocumentType::from_tag("cookie"), DocumentType::Legal);
        assert_eq!(DocumentType::from_tag(""), DocumentType::Legal);
        assert_eq!(DocumentType::from_tag("Privacy"), DocumentType::Legal);
    }

    #[test]
    fn test_default_is_legal() {
        assert_eq!(DocumentType::default(), DocumentType::Legal);
    }

    #[test]
    fn test_serialization_preserves_key_order() {
        let result = analysis_for(DocumentType::Terms);
        let json = serde_json::to_string(result).unwrap();
        let summary_pos = json.find("short_summary").unwrap();
        let risky_pos = json.find("risky_points").unwrap();
        let favourable_pos = json.find("favourable_points").unwrap();
        assert!(summary_pos < risky_pos);
        assert!(risky_pos < favourable_pos);
    }
}
