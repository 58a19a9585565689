//! CLI command handlers
//!
//! Bridges clap argument parsing with the wizard core.

pub mod journal;
pub mod show;

pub use journal::handle_journal_command;
pub use show::{handle_messages_command, handle_run_command, handle_show_command, OutputFormat};
