//! Interactive tutoring REPL.
//!
//! Uses `rustyline` for readline-style editing with persistent history.
//! Runs the same engine as the HTTP server, so the terminal session gets
//! the full grammar-check + reply flow.

use anyhow::Result;
use colored::Colorize;
use rustyline::config::Configurer;
use rustyline::history::DefaultHistory;
use rustyline::{DefaultEditor, Editor};
use tracing::debug;

use lingo_core::config::load_config;

use crate::helpers;

/// Exit commands (case-insensitive match).
const EXIT_COMMANDS: &[&str] = &["exit", "quit", "/exit", "/quit", ":q"];

/// Run the interactive tutoring loop.
pub async fn run(difficulty: Option<String>, topic: Option<String>) -> Result<()> {
    let config = load_config(None);
    let engine = crate::build_engine(&config);

    println!();
    helpers::print_banner();
    println!(
        "{}",
        "Practice your English. Type a message, or \"exit\" to quit.".dimmed()
    );

    // Open the session and topic before the first prompt
    let session_id = engine.start_session();
    helpers::print_thinking();
    match engine
        .start_topic(&session_id, difficulty.as_deref(), topic.as_deref())
        .await
    {
        Ok(opener) => {
            helpers::clear_thinking();
            helpers::print_response(&opener);
        }
        Err(e) => {
            helpers::clear_thinking();
            eprintln!("\n❌ Could not start the conversation: {e}\n");
            return Ok(());
        }
    }

    let mut editor = create_editor()?;

    loop {
        // Read input
        let input = match editor.readline("You: ") {
            Ok(line) => line,
            Err(rustyline::error::ReadlineError::Interrupted) => {
                // Ctrl-C — exit cleanly
                break;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                // Ctrl-D — exit cleanly
                break;
            }
            Err(e) => {
                eprintln!("Input error: {e}");
                break;
            }
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            continue;
        }

        if is_exit_command(trimmed) {
            break;
        }

        let _ = editor.add_history_entry(&input);

        debug!(session = %session_id, input = trimmed, "processing input");
        helpers::print_thinking();

        match engine.handle_message(&session_id, trimmed).await {
            Ok(reply) => {
                helpers::clear_thinking();
                if let Some(correction) = &reply.correction {
                    helpers::print_correction(correction);
                }
                helpers::print_response(&reply.response);
            }
            Err(e) => {
                helpers::clear_thinking();
                eprintln!("\n❌ Error: {e}\n");
            }
        }
    }

    engine.end_session(&session_id);
    println!("\nGoodbye! 👋");

    save_history(&mut editor);

    Ok(())
}

/// Create a rustyline editor with history.
fn create_editor() -> Result<Editor<(), DefaultHistory>> {
    let mut editor = DefaultEditor::new()?;
    editor.set_max_history_size(1000)?;

    // Load history from ~/.lingo/history/chat_history
    let history_path = history_path();
    if history_path.exists() {
        let _ = editor.load_history(&history_path);
        debug!("loaded REPL history from {}", history_path.display());
    }

    Ok(editor)
}

/// Save history to disk.
fn save_history(editor: &mut Editor<(), DefaultHistory>) {
    let path = history_path();
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Err(e) = editor.save_history(&path) {
        debug!("failed to save history: {e}");
    }
}

/// Path to the history file.
fn history_path() -> std::path::PathBuf {
    lingo_core::utils::get_data_path()
        .join("history")
        .join("chat_history")
}

/// Check if input is an exit command.
fn is_exit_command(input: &str) -> bool {
    let lower = input.to_lowercase();
    EXIT_COMMANDS.contains(&lower.as_str())
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
