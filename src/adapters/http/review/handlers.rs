//! HTTP handlers for review endpoints.
//!
//! These handlers connect Axum routes to the analysis command handler.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::review::{
    AnalyzeCodeCommand, AnalyzeCodeError, AnalyzeCodeHandler,
};
use crate::domain::review::{AgentKind, InstructionDetail};
use crate::ports::{AIError, AIProvider};

use super::dto::{AnalysisResponse, AnalyzeCodeRequest, ErrorResponse, HealthResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the review endpoints.
#[derive(Clone)]
pub struct ReviewAppState {
    pub ai_provider: Arc<dyn AIProvider>,
    pub instruction_detail: InstructionDetail,
}

impl ReviewAppState {
    pub fn new(ai_provider: Arc<dyn AIProvider>) -> Self {
        Self {
            ai_provider,
            instruction_detail: InstructionDetail::default(),
        }
    }

    pub fn with_instruction_detail(mut self, detail: InstructionDetail) -> Self {
        self.instruction_detail = detail;
        self
    }

    /// Create the analysis handler from the shared state.
    pub fn analyze_code_handler(&self) -> AnalyzeCodeHandler {
        AnalyzeCodeHandler::new(self.ai_provider.clone())
            .with_instruction_detail(self.instruction_detail)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Analysis Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /analyze/bug - Bug detection. Only `code` is read.
pub async fn analyze_bug(
    State(state): State<ReviewAppState>,
    payload: Result<Json<AnalyzeCodeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ReviewApiError> {
    let Json(req) = payload?;
    let cmd = AnalyzeCodeCommand::new(AgentKind::Bug, req.code);
    analyze(&state, cmd).await
}

/// POST /analyze/style - Style review with optional team conventions.
pub async fn analyze_style(
    State(state): State<ReviewAppState>,
    payload: Result<Json<AnalyzeCodeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ReviewApiError> {
    let Json(req) = payload?;
    let cmd = AnalyzeCodeCommand::new(AgentKind::Style, req.code)
        .with_language(req.language)
        .with_context(req.team_conventions);
    analyze(&state, cmd).await
}

/// POST /analyze/performance - Performance review with optional usage context.
pub async fn analyze_performance(
    State(state): State<ReviewAppState>,
    payload: Result<Json<AnalyzeCodeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ReviewApiError> {
    let Json(req) = payload?;
    let cmd = AnalyzeCodeCommand::new(AgentKind::Performance, req.code)
        .with_language(req.language)
        .with_context(req.context);
    analyze(&state, cmd).await
}

/// POST /analyze/security - Security review.
pub async fn analyze_security(
    State(state): State<ReviewAppState>,
    payload: Result<Json<AnalyzeCodeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ReviewApiError> {
    let Json(req) = payload?;
    let cmd = AnalyzeCodeCommand::new(AgentKind::Security, req.code).with_language(req.language);
    analyze(&state, cmd).await
}

async fn analyze(
    state: &ReviewAppState,
    cmd: AnalyzeCodeCommand,
) -> Result<Json<AnalysisResponse>, ReviewApiError> {
    let result = state.analyze_code_handler().handle(cmd).await?;
    Ok(Json(AnalysisResponse::from(result)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Health
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health - Reports the configured provider without calling it.
pub async fn health(State(state): State<ReviewAppState>) -> impl IntoResponse {
    Json(HealthResponse::from(state.ai_provider.provider_info()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper for HTTP responses.
#[derive(Debug)]
pub enum ReviewApiError {
    /// The body was not a JSON object we could read.
    InvalidBody(String),
    Analysis(AnalyzeCodeError),
}

impl From<JsonRejection> for ReviewApiError {
    fn from(rejection: JsonRejection) -> Self {
        ReviewApiError::InvalidBody(rejection.body_text())
    }
}

impl From<AnalyzeCodeError> for ReviewApiError {
    fn from(err: AnalyzeCodeError) -> Self {
        ReviewApiError::Analysis(err)
    }
}

impl IntoResponse for ReviewApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            ReviewApiError::InvalidBody(detail) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid JSON body: {}", detail),
            ),
            ReviewApiError::Analysis(AnalyzeCodeError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            ReviewApiError::Analysis(AnalyzeCodeError::Provider(err)) => {
                let status = match err {
                    AIError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
                    AIError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
                    _ => StatusCode::BAD_GATEWAY,
                };
                (status, err.to_string())
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::review::ReviewError;

    fn status_of(err: ReviewApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn missing_code_maps_to_bad_request() {
        let err = ReviewApiError::from(AnalyzeCodeError::Validation(ReviewError::MissingCode));
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn provider_errors_map_to_gateway_statuses() {
        let cases = [
            (AIError::rate_limited(5), StatusCode::TOO_MANY_REQUESTS),
            (AIError::Timeout { timeout_secs: 60 }, StatusCode::GATEWAY_TIMEOUT),
            (AIError::AuthenticationFailed, StatusCode::BAD_GATEWAY),
            (AIError::unavailable("503"), StatusCode::BAD_GATEWAY),
            (AIError::network("reset"), StatusCode::BAD_GATEWAY),
            (AIError::parse("no choices"), StatusCode::BAD_GATEWAY),
            (AIError::InvalidRequest("bad".into()), StatusCode::BAD_GATEWAY),
        ];

        for (err, expected) in cases {
            let api_err = ReviewApiError::from(AnalyzeCodeError::Provider(err.clone()));
            assert_eq!(status_of(api_err), expected, "{:?}", err);
        }
    }

    #[test]
    fn invalid_body_maps_to_bad_request() {
        let err = ReviewApiError::InvalidBody("expected value".to_string());
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }
}
