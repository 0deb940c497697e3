//! HTTP DTOs (Data Transfer Objects) for review endpoints.
//!
//! These types define the JSON request/response structure for the review API.
//! They serve as the boundary between HTTP and the application layer.

use serde::{Deserialize, Serialize};

use crate::application::handlers::review::AnalyzeCodeResult;
use crate::ports::ProviderInfo;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body accepted by every `/analyze/*` endpoint.
///
/// All fields are optional at the wire level; a missing `code` is reported by
/// the application layer. Each endpoint reads only the fields its agent uses
/// and unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeCodeRequest {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    /// Usage context (performance agent).
    #[serde(default)]
    pub context: Option<String>,
    /// Team conventions (style agent).
    #[serde(default)]
    pub team_conventions: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Successful analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// The model's text, unmodified.
    pub result: String,
}

impl From<AnalyzeCodeResult> for AnalysisResponse {
    fn from(result: AnalyzeCodeResult) -> Self {
        Self {
            result: result.result,
        }
    }
}

/// Error body shared by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub provider: String,
    pub model: String,
}

impl From<ProviderInfo> for HealthResponse {
    fn from(info: ProviderInfo) -> Self {
        Self {
            status: "ok".to_string(),
            provider: info.name,
            model: info.model,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_accepts_empty_object() {
        let req: AnalyzeCodeRequest = serde_json::from_str("{}").unwrap();
        assert!(req.code.is_none());
        assert!(req.language.is_none());
    }

    #[test]
    fn request_ignores_unknown_fields() {
        let req: AnalyzeCodeRequest =
            serde_json::from_str(r#"{"code":"x","language":"","severity":"high"}"#).unwrap();
        assert_eq!(req.code.as_deref(), Some("x"));
        assert_eq!(req.language.as_deref(), Some(""));
    }

    #[test]
    fn request_accepts_null_code() {
        let req: AnalyzeCodeRequest = serde_json::from_str(r#"{"code":null}"#).unwrap();
        assert!(req.code.is_none());
    }

    #[test]
    fn error_response_serializes_single_field() {
        let json = serde_json::to_string(&ErrorResponse::new("No code provided")).unwrap();
        assert_eq!(json, r#"{"error":"No code provided"}"#);
    }

    #[test]
    fn health_response_from_provider_info() {
        let health = HealthResponse::from(ProviderInfo::new("groq", "llama3-70b-8192"));
        let json = serde_json::to_value(&health).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["provider"], "groq");
        assert_eq!(json["model"], "llama3-70b-8192");
    }
}
