//! `lingo serve` — run the HTTP API for the web front end.

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::info;

use lingo_core::config::load_config;
use lingo_server::AppState;

/// Run the server command.
pub async fn run(port_override: Option<u16>) -> Result<()> {
    let mut config = load_config(None);
    if let Some(port) = port_override {
        config.server.port = port;
    }

    if !config.provider.is_configured() {
        eprintln!(
            "{}",
            "⚠  No provider API key configured — generation calls will fail.\n\
   Set providers in ~/.lingo/config.json or LINGO_PROVIDER__API_KEY."
                .yellow()
        );
    }

    let engine = crate::build_engine(&config);
    let state = AppState::new(engine);

    helpers_banner(&config.server.addr(), &config.provider.model);
    info!(addr = %config.server.addr(), model = %config.provider.model, "server starting");

    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
        println!();
        println!("  Shutting down...");
        info!("received Ctrl+C, shutting down");
    };

    lingo_server::start_server(&config.server, state, shutdown)
        .await
        .context("server error")?;

    println!("  Server stopped. Goodbye!");
    Ok(())
}

fn helpers_banner(addr: &str, model: &str) {
    println!();
    crate::helpers::print_banner();
    println!("  Mode:      Server");
    println!("  Listening: http://{addr}");
    println!("  Model:     {model}");
    println!();
    println!("  Ctrl+C to stop");
    println!();
}
