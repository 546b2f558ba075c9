//! # warmly - Private Translation Chat
//!
//! `warmly` is a chat-style translation tool for personal conversations.
//! Each message is translated between a fixed language pair by a hosted
//! language model, and the conversation is kept locally for 24 hours
//! before it expires.
//!
//! ## Features
//!
//! - **Ephemeral sessions**: One active session, discarded 24 hours after it started
//! - **Context-aware prompts**: Tone and emotional nuance are preserved
//! - **Right-to-left scripts**: Urdu and Arabic output is marked for bidi rendering
//! - **Transcript export**: Save the session as plain text before it expires
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate one message into Urdu (the default pair)
//! warmly "I miss you"
//!
//! # Pick another pair
//! warmly --pair es "See you tomorrow"
//!
//! # Interactive chat mode
//! warmly chat
//!
//! # Save the session before it expires
//! warmly export -o evening.txt
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/warmly/config.toml`:
//!
//! ```toml
//! [warmly]
//! pair = "en-ur"
//! model = "claude-sonnet-4-20250514"
//! api_key_env = "ANTHROPIC_API_KEY"
//! ```

/// Interactive chat mode for translation sessions.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and service settings.
pub mod config;

/// File system utilities.
pub mod fs;

/// Input reading from arguments, files and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration and session data.
pub mod paths;

/// Session model, expiry, export and the submission flow.
pub mod session;

/// Key-value persistence for the session and preferences.
pub mod storage;

/// Translation client for the Messages API.
pub mod translation;

/// Terminal UI components (spinner, colors, theme).
pub mod ui;
