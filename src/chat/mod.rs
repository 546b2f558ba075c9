//! Interactive chat mode for translation sessions.
//!
//! Provides a REPL-style interface with slash commands for managing the
//! session.

/// Slash command parsing and autocomplete.
pub mod command;
mod shell;
mod ui;

pub use shell::ChatShell;
