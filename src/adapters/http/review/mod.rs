//! HTTP adapter for review endpoints.
//!
//! Exposes the review agents via REST API:
//! - `POST /analyze/bug` - Bug detection
//! - `POST /analyze/style` - Style and best practices
//! - `POST /analyze/performance` - Performance optimization
//! - `POST /analyze/security` - Security vulnerabilities
//! - `GET /health` - Liveness and provider info

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{AnalysisResponse, AnalyzeCodeRequest, ErrorResponse, HealthResponse};
pub use handlers::{ReviewApiError, ReviewAppState};
pub use routes::review_routes;
