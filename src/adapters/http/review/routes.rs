//! Axum router configuration for review endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    analyze_bug, analyze_performance, analyze_security, analyze_style, health, ReviewAppState,
};

/// Create the review API router.
///
/// # Routes
/// - `POST /analyze/bug`
/// - `POST /analyze/style`
/// - `POST /analyze/performance`
/// - `POST /analyze/security`
/// - `GET /health`
pub fn review_routes() -> Router<ReviewAppState> {
    Router::new()
        .route("/analyze/bug", post(analyze_bug))
        .route("/analyze/style", post(analyze_style))
        .route("/analyze/performance", post(analyze_performance))
        .route("/analyze/security", post(analyze_security))
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::adapters::ai::MockAIProvider;
    use crate::domain::review::{persona, AgentKind};
    use crate::ports::AIError;

    fn app(provider: &MockAIProvider) -> Router {
        review_routes().with_state(ReviewAppState::new(Arc::new(provider.clone())))
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn bug_endpoint_returns_result() {
        let provider = MockAIProvider::new().with_response("Looks fine.");

        let response = app(&provider)
            .oneshot(post_json("/analyze/bug", r#"{"code":"def f(): pass"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["result"], "Looks fine.");

        let call = provider.last_call().unwrap();
        assert!(call.user_prompt().unwrap().contains("def f(): pass"));
        assert_eq!(call.system_prompt.as_deref(), Some(persona(AgentKind::Bug)));
    }

    #[tokio::test]
    async fn empty_body_returns_no_code_provided() {
        let provider = MockAIProvider::new();

        for agent in AgentKind::all() {
            let response = app(&provider)
                .oneshot(post_json(&format!("/analyze/{}", agent), "{}"))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(body_json(response).await["error"], "No code provided");
        }

        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn empty_code_string_returns_bad_request() {
        let provider = MockAIProvider::new();

        let response = app(&provider)
            .oneshot(post_json("/analyze/security", r#"{"code":"","language":"Go"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn style_endpoint_reads_team_conventions() {
        let provider = MockAIProvider::new();

        let response = app(&provider)
            .oneshot(post_json(
                "/analyze/style",
                r#"{"code":"x=1","language":"Python","team_conventions":"snake_case"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let prompt = provider.last_call().unwrap().user_prompt().unwrap().to_string();
        assert!(prompt.contains("Language: Python"));
        assert!(prompt.contains("Team Conventions: snake_case"));
    }

    #[tokio::test]
    async fn performance_endpoint_reads_context() {
        let provider = MockAIProvider::new();

        app(&provider)
            .oneshot(post_json(
                "/analyze/performance",
                r#"{"code":"x=1","context":"called per request"}"#,
            ))
            .await
            .unwrap();

        let prompt = provider.last_call().unwrap().user_prompt().unwrap().to_string();
        assert!(prompt.contains("Language: Not specified"));
        assert!(prompt.contains("Context: called per request"));
    }

    #[tokio::test]
    async fn malformed_json_is_rejected_without_call() {
        let provider = MockAIProvider::new();

        let response = app(&provider)
            .oneshot(post_json("/analyze/bug", "{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid JSON body"));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn rate_limit_maps_to_429() {
        let provider = MockAIProvider::new().with_error(AIError::rate_limited(12));

        let response = app(&provider)
            .oneshot(post_json("/analyze/bug", r#"{"code":"x"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn get_on_analyze_is_method_not_allowed() {
        let provider = MockAIProvider::new();

        let response = app(&provider)
            .oneshot(
                Request::builder()
                    .uri("/analyze/bug")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn health_reports_provider() {
        let provider = MockAIProvider::new();

        let response = app(&provider)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["provider"], "mock");
        assert_eq!(provider.call_count(), 0);
    }
}
