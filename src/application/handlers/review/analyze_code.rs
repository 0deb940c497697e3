//! AnalyzeCodeHandler - Command handler running one review agent over a snippet.

use std::sync::Arc;
use std::time::Instant;

use uuid::Uuid;

use crate::domain::review::{
    render_prompt, system_instruction, AgentKind, AnalysisRequest, InstructionDetail, ReviewError,
};
use crate::ports::{AIError, AIProvider, CompletionRequest, MessageRole, RequestMetadata, TokenUsage};

/// Command to analyze a code snippet with one agent.
#[derive(Debug, Clone)]
pub struct AnalyzeCodeCommand {
    pub agent: AgentKind,
    pub code: Option<String>,
    pub language: Option<String>,
    /// Team conventions for the style agent, usage context for the performance agent.
    pub context: Option<String>,
}

impl AnalyzeCodeCommand {
    pub fn new(agent: AgentKind, code: Option<String>) -> Self {
        Self {
            agent,
            code,
            language: None,
            context: None,
        }
    }

    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }

    pub fn with_context(mut self, context: Option<String>) -> Self {
        self.context = context;
        self
    }
}

/// Result of a successful analysis.
#[derive(Debug, Clone)]
pub struct AnalyzeCodeResult {
    pub agent: AgentKind,
    /// The model's text, unmodified.
    pub result: String,
    pub trace_id: String,
    pub model: String,
    pub usage: TokenUsage,
}

/// Errors from running an analysis.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalyzeCodeError {
    #[error("{0}")]
    Validation(#[from] ReviewError),

    #[error("completion failed: {0}")]
    Provider(#[from] AIError),
}

/// Handler for code analysis.
///
/// Stateless apart from the shared provider; one instance serves every agent.
pub struct AnalyzeCodeHandler {
    ai_provider: Arc<dyn AIProvider>,
    instruction_detail: InstructionDetail,
}

impl AnalyzeCodeHandler {
    pub fn new(ai_provider: Arc<dyn AIProvider>) -> Self {
        Self {
            ai_provider,
            instruction_detail: InstructionDetail::default(),
        }
    }

    /// Sets how much guidance goes into the system instruction.
    pub fn with_instruction_detail(mut self, detail: InstructionDetail) -> Self {
        self.instruction_detail = detail;
        self
    }

    pub async fn handle(
        &self,
        cmd: AnalyzeCodeCommand,
    ) -> Result<AnalyzeCodeResult, AnalyzeCodeError> {
        // 1. Validate before any outbound call
        let request = AnalysisRequest::new(cmd.code)?
            .with_language(cmd.language)
            .with_context(cmd.context);

        // 2. Render the agent's prompt and instruction
        let prompt = render_prompt(cmd.agent, &request);
        let instruction = system_instruction(cmd.agent, self.instruction_detail);

        let trace_id = Uuid::new_v4().to_string();
        tracing::debug!(
            agent = %cmd.agent,
            trace_id = %trace_id,
            prompt_len = prompt.len(),
            "Sending analysis request"
        );

        // 3. One round trip to the completion service
        let completion_request =
            CompletionRequest::new(RequestMetadata::new(cmd.agent, trace_id.clone()))
                .with_system_prompt(instruction)
                .with_message(MessageRole::User, prompt);

        let started = Instant::now();
        let response = self
            .ai_provider
            .complete(completion_request)
            .await
            .map_err(|e| {
                tracing::warn!(
                    agent = %cmd.agent,
                    trace_id = %trace_id,
                    error = %e,
                    "Analysis failed"
                );
                e
            })?;

        tracing::debug!(
            agent = %cmd.agent,
            trace_id = %trace_id,
            latency_ms = started.elapsed().as_millis() as u64,
            completion_tokens = response.usage.completion_tokens,
            "Analysis completed"
        );

        // 4. Return the model's text as-is
        Ok(AnalyzeCodeResult {
            agent: cmd.agent,
            result: response.content,
            trace_id,
            model: response.model,
            usage: response.usage,
        })
    }
}
