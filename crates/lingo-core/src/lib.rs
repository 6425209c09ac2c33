//! Core building blocks for Lingo — the conversational English-tutoring
//! backend.
//!
//! This crate holds what every other crate needs: the conversation domain
//! types ([`types::Turn`], [`types::Session`]), the chat-completions wire
//! types sent to the generative API, the configuration system, and a few
//! path/string utilities.

pub mod config;
pub mod types;
pub mod utils;
