//! Router assembly and the serve loop.

use axum::http::{header, HeaderValue, StatusCode};
use axum::middleware::map_response;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;

use super::review::{review_routes, ErrorResponse, ReviewAppState};

/// Create the application router with the HTTP middleware stack.
pub fn create_router(state: ReviewAppState, server: &ServerConfig) -> Router {
    let router = review_routes()
        .with_state(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(map_response(timeout_error_body))
        .layer(TraceLayer::new_for_http());

    match cors_layer(server) {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

/// Gives the timeout layer's bare 408 the same `{"error"}` body as every
/// other failure.
async fn timeout_error_body(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT
        && !response.headers().contains_key(header::CONTENT_TYPE)
    {
        return (
            StatusCode::REQUEST_TIMEOUT,
            Json(ErrorResponse::new("Request timed out")),
        )
            .into_response();
    }
    response
}

/// Builds the CORS layer.
///
/// Explicit origins win. Without any, development allows every origin and
/// production installs no CORS layer.
fn cors_layer(server: &ServerConfig) -> Option<CorsLayer> {
    let origins = server.cors_origins_list();

    if origins.is_empty() {
        if !server.environment.allows_any_origin_by_default() {
            return None;
        }
        return Some(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(parsed))
            .allow_methods(Any)
            .allow_headers(Any),
    )
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(app: Router, server: &ServerConfig) -> anyhow::Result<()> {
    let addr = server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Code review agents listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
