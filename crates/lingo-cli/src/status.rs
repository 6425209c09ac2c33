//! `lingo status` — show configuration and provider status.

use anyhow::Result;
use colored::Colorize;

use lingo_core::config::{get_config_path, load_config};

/// Run the status command.
pub fn run() -> Result<()> {
    let config = load_config(None);
    let config_path = get_config_path();

    println!();
    println!("{}", "🗣 Lingo Status".cyan().bold());
    println!();

    // Config
    let config_exists = config_path.exists();
    println!(
        "  {:<14} {} {}",
        "Config:".bold(),
        config_path.display(),
        if config_exists {
            "✓".green().to_string()
        } else {
            "(not found)".red().to_string()
        }
    );

    // Server
    println!(
        "  {:<14} http://{}",
        "Listen:".bold(),
        config.server.addr()
    );

    // Model
    println!("  {:<14} {}", "Model:".bold(), config.provider.model);

    // Parameters
    println!(
        "  {:<14} {} | max_tokens: {}",
        "Parameters:".bold(),
        format!("temp: {}", config.provider.temperature).dimmed(),
        format!("{}", config.provider.max_tokens).dimmed(),
    );

    // API base
    println!(
        "  {:<14} {}",
        "API base:".bold(),
        config
            .provider
            .api_base
            .as_deref()
            .unwrap_or("https://api.openai.com/v1 (default)")
    );

    // Key
    let key_status = if config.provider.is_configured() {
        format!("{} (key set)", "✓".green())
    } else {
        format!("{}", "· not configured".dimmed())
    };
    println!("  {:<14} {}", "API key:".bold(), key_status);

    println!();

    Ok(())
}
