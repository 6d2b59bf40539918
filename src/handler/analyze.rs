//! Analyze operation
//!
//! Reads the request body, picks the canned payload for the requested
//! document type, and serializes it. All failures propagate to the
//! router, which converts them into the 500 response.

use crate::analysis::{self, AnalysisResult, DocumentType};
use crate::http;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Request, Response};
use serde::Deserialize;
use std::error::Error;

/// The slice of the request body the mock actually reads. The body must
/// be a JSON object; every field other than `document_type` is ignored.
#[derive(Deserialize)]
struct AnalyzeRequest {
    /// Raw tag value. Kept as a `Value` so a non-string tag falls back
    /// to the default category instead of failing deserialization.
    #[serde(default)]
    document_type: serde_json::Value,
}

/// Handle `POST /scanner/quick-analyze/`
pub async fn handle(
    req: Request<hyper::body::Incoming>,
) -> Result<Response<Full<Bytes>>, Box<dyn Error>> {
    let body = req.collect().await?.to_bytes();
    let payload = select_analysis(&body)?;
    let json = serde_json::to_string(payload)?;
    Ok(http::build_json_response(json))
}

/// Parse the body and look up the matching canned payload
fn select_analysis(body: &[u8]) -> Result<&'static AnalysisResult, serde_json::Error> {
    let request: AnalyzeRequest = serde_json::from_slice(body)?;
    let document_type = request
        .document_type
        .as_str()
        .map(DocumentType::from_tag)
        .unwrap_or_default();
    Ok(analysis::analysis_for(document_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privacy_tag_selects_privacy_payload() {
        let payload = select_analysis(br#"{"document_type": "privacy"}"#).unwrap();
        assert!(payload.short_summary.starts_with("This Privacy Policy"));
    }

    #[test]
    fn test_terms_tag_selects_terms_payload() {
        let payload = select_analysis(br#"{"document_type": "terms"}"#).unwrap();
        assert!(payload
            .short_summary
            .starts_with("The Terms of Service establish the legal framework"));
        assert_eq!(payload.risky_points.len(), 3);
    }

    #[test]
    fn test_unknown_tag_falls_back_to_legal() {
        let payload = select_analysis(br#"{"document_type": "cookie_policy"}"#).unwrap();
        assert!(payload.short_summary.starts_with("This legal agreement"));
    }

    #[test]
    fn test_missing_tag_falls_back_to_legal() {
        let payload = select_analysis(br#"{"url": "https://example.com"}"#).unwrap();
        assert!(payload.short_summary.starts_with("This legal agreement"));
    }

    #[test]
    fn test_non_string_tag_falls_back_to_legal() {
        let payload = select_analysis(br#"{"document_type": 42}"#).unwrap();
        assert!(payload.short_summary.starts_with("This legal agreement"));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let payload =
            select_analysis(br#"{"document_type": "terms", "content": "...", "lang": "en"}"#)
                .unwrap();
        assert!(payload.short_summary.starts_with("The Terms of Service"));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(select_analysis(b"not json at all").is_err());
        assert!(select_analysis(b"").is_err());
        assert!(select_analysis(b"{\"document_type\": ").is_err());
    }

    #[test]
    fn test_non_object_body_is_an_error() {
        assert!(select_analysis(b"[1, 2, 3]").is_err());
        assert!(select_analysis(b"\"privacy\"").is_err());
        assert!(select_analysis(b"null").is_err());
    }

    #[test]
    fn test_selection_is_deterministic() {
        let a = serde_json::to_string(select_analysis(br#"{"document_type": "terms"}"#).unwrap())
            .unwrap();
        let b = serde_json::to_string(select_analysis(br#"{"document_type": "terms"}"#).unwrap())
            .unwrap();
        assert_eq!(a, b);
    }
}
