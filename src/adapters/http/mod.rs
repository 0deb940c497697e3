//! HTTP adapters - REST API implementations.
//!
//! - `review` - the four analysis endpoints and the health check
//! - `server` - router assembly, middleware and the serve loop

pub mod review;
mod server;

pub use review::{review_routes, ReviewApiError, ReviewAppState};
pub use server::{create_router, serve};
