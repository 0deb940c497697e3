//! Domain layer containing the review agents and their prompt material.
//!
//! # Module Organization
//!
//! - `review` - Agent kinds, analysis requests, prompt templates and system instructions

pub mod review;
