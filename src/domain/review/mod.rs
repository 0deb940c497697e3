//! Review domain - the four agents and the text they send to the model.
//!
//! An agent is data: a persona (system instruction) and a prompt template.
//! Nothing here performs I/O.

mod agent;
mod errors;
mod instructions;
mod prompt;
mod request;

pub use agent::AgentKind;
pub use errors::{ParseAgentError, ReviewError};
pub use instructions::{guidelines, persona, system_instruction, InstructionDetail};
pub use prompt::{render_prompt, NOT_PROVIDED, NOT_SPECIFIED};
pub use request::AnalysisRequest;
