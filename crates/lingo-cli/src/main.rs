//! Lingo CLI — entry point.
//!
//! # Commands
//!
//! - `lingo serve [--port PORT]` — run the HTTP API for the web front end
//! - `lingo chat [-d DIFFICULTY] [-t TOPIC]` — tutoring REPL in the terminal
//! - `lingo status` — show configuration and provider status

mod helpers;
mod repl;
mod serve;
mod status;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use lingo_core::config::Config;
use lingo_engine::{SessionStore, TutorEngine};
use lingo_providers::HttpProvider;

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// 🗣 Lingo — conversational English-tutoring backend
#[derive(Parser)]
#[command(name = "lingo", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Override the configured listen port
        #[arg(short, long)]
        port: Option<u16>,

        /// Enable debug logging
        #[arg(long, default_value_t = false)]
        logs: bool,
    },

    /// Practice English in an interactive terminal session
    Chat {
        /// Difficulty: beginner, medium, or advanced
        #[arg(short, long)]
        difficulty: Option<String>,

        /// Custom conversation topic
        #[arg(short, long)]
        topic: Option<String>,

        /// Enable debug logging
        #[arg(long, default_value_t = false)]
        logs: bool,
    },

    /// Show configuration and provider status
    Status,
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, logs } => {
            init_logging(logs);
            serve::run(port).await
        }
        Commands::Chat {
            difficulty,
            topic,
            logs,
        } => {
            init_logging(logs);
            repl::run(difficulty, topic).await
        }
        Commands::Status => status::run(),
    }
}

/// Build a `TutorEngine` from the loaded configuration.
pub fn build_engine(config: &Config) -> TutorEngine {
    let provider = Arc::new(HttpProvider::new(&config.provider));
    TutorEngine::new(provider, Arc::new(SessionStore::new()))
}

/// Initialize tracing/logging.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("lingo=debug,info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
