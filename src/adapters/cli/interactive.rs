//! Interactive terminal loop for a single agent.
//!
//! Reads a snippet and the agent's optional questions line by line, runs the
//! analysis and prints the result, until `exit` or end of input.

use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::application::handlers::review::{
    AnalyzeCodeCommand, AnalyzeCodeError, AnalyzeCodeHandler,
};
use crate::domain::review::AgentKind;

const LANGUAGE_QUESTION: &str = "Programming language (optional): ";

/// Extra free-text question asked after the language, if the agent takes one.
fn context_question(agent: AgentKind) -> Option<&'static str> {
    match agent {
        AgentKind::Style => Some("Team-specific conventions [optional]: "),
        AgentKind::Performance => {
            Some("Additional context (e.g., usage patterns, requirements) [optional]: ")
        }
        AgentKind::Bug | AgentKind::Security => None,
    }
}

/// One interactive review session over arbitrary async input and output.
pub struct InteractiveSession<R, W> {
    agent: AgentKind,
    handler: AnalyzeCodeHandler,
    input: R,
    output: W,
}

impl<R, W> InteractiveSession<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(agent: AgentKind, handler: AnalyzeCodeHandler, input: R, output: W) -> Self {
        Self {
            agent,
            handler,
            input,
            output,
        }
    }

    /// Runs the loop until the user types `exit` or input is exhausted.
    pub async fn run(mut self) -> io::Result<()> {
        self.print_banner().await?;

        loop {
            let Some(code) = self.ask("\nCode to analyze:\n").await? else {
                break;
            };
            if code.trim().eq_ignore_ascii_case("exit") {
                break;
            }
            if code.trim().is_empty() {
                self.write("No code provided\n").await?;
                continue;
            }

            let mut cmd = AnalyzeCodeCommand::new(self.agent, Some(code));

            if self.agent.uses_language() {
                let Some(language) = self.ask(LANGUAGE_QUESTION).await? else {
                    break;
                };
                cmd = cmd.with_language(Some(language));
            }

            if let Some(question) = context_question(self.agent) {
                let Some(context) = self.ask(question).await? else {
                    break;
                };
                cmd = cmd.with_context(Some(context));
            }

            match self.handler.handle(cmd).await {
                Ok(result) => {
                    self.write("\nAnalysis Results:\n").await?;
                    self.write(&result.result).await?;
                    self.write("\n").await?;
                }
                Err(AnalyzeCodeError::Validation(err)) => {
                    self.write(&format!("{}\n", err)).await?;
                }
                Err(AnalyzeCodeError::Provider(err)) => {
                    self.write(&format!("\nError: {}\n", err)).await?;
                }
            }
        }

        self.output.flush().await
    }

    async fn print_banner(&mut self) -> io::Result<()> {
        let title = self.agent.display_name();
        let banner = format!(
            "{}\n{}\nEnter your code snippet (type 'exit' to quit):\n",
            title,
            "=".repeat(title.len())
        );
        self.write(&banner).await
    }

    /// Writes `question` and reads one line. `None` on end of input.
    async fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        self.write(question).await?;
        self.output.flush().await?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::adapters::ai::MockAIProvider;
    use crate::ports::AIError;

    async fn run_session(agent: AgentKind, provider: &MockAIProvider, input: &str) -> String {
        let handler = AnalyzeCodeHandler::new(Arc::new(provider.clone()));
        let mut output = Vec::new();
        InteractiveSession::new(agent, handler, input.as_bytes(), &mut output)
            .run()
            .await
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn exit_ends_session_without_calls() {
        let provider = MockAIProvider::new();

        let out = run_session(AgentKind::Security, &provider, "EXIT\n").await;

        assert!(out.starts_with("Security Code Analyzer\n======================\n"));
        assert!(out.contains("Enter your code snippet (type 'exit' to quit):"));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn style_session_asks_both_questions() {
        let provider = MockAIProvider::new().with_response("Use snake_case.");

        let out = run_session(
            AgentKind::Style,
            &provider,
            "myVar = 1\nPython\nPEP 8\nexit\n",
        )
        .await;

        assert!(out.contains(LANGUAGE_QUESTION));
        assert!(out.contains("Team-specific conventions [optional]: "));
        assert!(out.contains("\nAnalysis Results:\nUse snake_case.\n"));

        let prompt = provider.last_call().unwrap().user_prompt().unwrap().to_string();
        assert!(prompt.contains("myVar = 1"));
        assert!(prompt.contains("Language: Python"));
        assert!(prompt.contains("Team Conventions: PEP 8"));
    }

    #[tokio::test]
    async fn bug_session_skips_language_question() {
        let provider = MockAIProvider::new().with_response("ok");

        let out = run_session(AgentKind::Bug, &provider, "def f(): pass\nexit\n").await;

        assert!(!out.contains(LANGUAGE_QUESTION));
        assert!(out.contains("Analysis Results:\nok"));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn blank_code_is_reported_and_loop_continues() {
        let provider = MockAIProvider::new();

        let out = run_session(AgentKind::Bug, &provider, "   \nexit\n").await;

        assert!(out.contains("No code provided\n"));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn provider_error_is_printed_and_loop_continues() {
        let provider = MockAIProvider::new()
            .with_error(AIError::AuthenticationFailed)
            .with_response("second try");

        let out = run_session(
            AgentKind::Security,
            &provider,
            "a\n\nb\nRust\n",
        )
        .await;

        assert!(out.contains("Error: authentication failed"));
        assert!(out.contains("Analysis Results:\nsecond try"));
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn end_of_input_mid_questions_stops_quietly() {
        let provider = MockAIProvider::new();

        run_session(AgentKind::Performance, &provider, "x = 1\nPython\n").await;

        assert_eq!(provider.call_count(), 0);
    }

    #[test]
    fn context_questions_per_agent() {
        assert!(context_question(AgentKind::Bug).is_none());
        assert!(context_question(AgentKind::Security).is_none());
        assert!(context_question(AgentKind::Performance)
            .unwrap()
            .starts_with("Additional context"));
    }
}
