//! Code Review Agents - LLM-backed code analysis
//!
//! Four review agents (bug, style, performance, security) turn a code snippet
//! into a prompt, send it to a hosted chat-completion API and return the text.
//! They are exposed over HTTP and as an interactive terminal loop.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
