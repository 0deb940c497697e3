//! Code Review Agents binary.
//!
//! `serve` (the default) runs the HTTP API; `review <agent>` runs one agent
//! interactively in the terminal.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use code_review_agents::adapters::ai::{GroqConfig, GroqProvider};
use code_review_agents::adapters::cli::InteractiveSession;
use code_review_agents::adapters::http::{create_router, serve, ReviewAppState};
use code_review_agents::application::AnalyzeCodeHandler;
use code_review_agents::config::{AppConfig, LogFormat, ServerConfig};
use code_review_agents::domain::review::{AgentKind, InstructionDetail};
use code_review_agents::ports::AIProvider;

#[derive(Parser)]
#[command(name = "code-review-agents", version, about = "LLM-backed code review agents")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API (default)
    Serve,
    /// Review snippets interactively with one agent
    Review {
        /// bug, style, performance or security
        agent: AgentKind,
    },
}

/// Initialize tracing.
///
/// Interactive mode logs to stderr without ANSI so stdout carries only the
/// session. Production emits JSON lines.
fn init_tracing(server: &ServerConfig, interactive: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| server.log_level.clone().into());

    if interactive {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
        return;
    }

    match server.log_format() {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Serve);

    let config = AppConfig::load()?;
    init_tracing(&config.server, matches!(command, Commands::Review { .. }));
    config.validate()?;

    let groq_config = GroqConfig::from_ai_config(&config.ai)?;
    let provider: Arc<dyn AIProvider> = Arc::new(GroqProvider::new(groq_config)?);
    let detail = InstructionDetail::from_flag(config.ai.detailed_instructions);

    let info = provider.provider_info();
    tracing::info!(
        provider = %info.name,
        model = %info.model,
        detailed_instructions = config.ai.detailed_instructions,
        "Loaded configuration"
    );

    match command {
        Commands::Serve => {
            let state = ReviewAppState::new(provider).with_instruction_detail(detail);
            let app = create_router(state, &config.server);
            serve(app, &config.server).await
        }
        Commands::Review { agent } => {
            let handler = AnalyzeCodeHandler::new(provider).with_instruction_detail(detail);
            let stdin = BufReader::new(tokio::io::stdin());
            InteractiveSession::new(agent, handler, stdin, tokio::io::stdout())
                .run()
                .await?;
            Ok(())
        }
    }
}
