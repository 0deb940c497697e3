//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Completion providers (Groq, mock)
//! - `http` - REST API over axum
//! - `cli` - Interactive terminal loop

pub mod ai;
pub mod cli;
pub mod http;

pub use ai::{GroqConfig, GroqProvider, MockAIProvider};
pub use http::{create_router, serve, ReviewAppState};
