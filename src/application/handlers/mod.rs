//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod review;

pub use review::{AnalyzeCodeCommand, AnalyzeCodeError, AnalyzeCodeHandler, AnalyzeCodeResult};
