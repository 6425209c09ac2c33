//! Shared CLI helpers — banner and response printing.

use colored::Colorize;

/// Print the version banner.
pub fn print_banner() {
    let version = env!("CARGO_PKG_VERSION");
    println!("{}  v{}", "🗣 Lingo".cyan().bold(), version.dimmed());
}

/// Print a tutor reply to stdout.
pub fn print_response(response: &str) {
    println!();
    println!("{}", "🗣 Tutor".cyan().bold());
    if response.is_empty() {
        println!("{}", "(no response)".dimmed());
    } else {
        println!("{response}");
    }
    println!();
}

/// Print a grammar correction above the tutor reply.
pub fn print_correction(correction: &str) {
    println!();
    println!("{} {}", "✏ Correction:".yellow().bold(), correction);
}

/// Print a "thinking" placeholder (for non-log mode).
pub fn print_thinking() {
    eprint!("{}", "⠿ thinking...".dimmed());
}

/// Clear the "thinking" placeholder.
pub fn clear_thinking() {
    eprint!("\r{}\r", " ".repeat(40));
}
