//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. Colors follow
//! the active [`Theme`] and are dropped entirely when color is disabled.

use owo_colors::OwoColorize;
use std::fmt::Display;

use super::Theme;
use crate::output;

fn paint<T: Display>(text: T, apply: impl FnOnce(&T, Theme) -> String) -> String {
    if output::is_no_color() {
        text.to_string()
    } else {
        apply(&text, output::theme())
    }
}

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for section headers (e.g., "Session", "Available commands")
    pub fn header<T: Display>(text: T) -> String {
        paint(text, |t, _| t.bold().to_string())
    }

    /// Style for labels/keys (e.g., "pair", "model")
    pub fn label<T: Display>(text: T) -> String {
        paint(text, |t, _| t.dimmed().to_string())
    }

    /// Style for primary values (e.g., language names, model names)
    pub fn value<T: Display>(text: T) -> String {
        paint(text, |t, theme| match theme {
            Theme::Dark => t.bright_cyan().to_string(),
            Theme::Light => t.blue().to_string(),
        })
    }

    /// Style for secondary/supplementary info (e.g., endpoints, descriptions)
    pub fn secondary<T: Display>(text: T) -> String {
        paint(text, |t, _| t.dimmed().to_string())
    }

    /// Style for the user's original message
    pub fn original<T: Display>(text: T) -> String {
        paint(text, |t, theme| match theme {
            Theme::Dark => t.bright_yellow().to_string(),
            Theme::Light => t.yellow().to_string(),
        })
    }

    /// Style for a finished translation
    pub fn translation<T: Display>(text: T) -> String {
        paint(text, |t, theme| match theme {
            Theme::Dark => t.bright_green().bold().to_string(),
            Theme::Light => t.green().bold().to_string(),
        })
    }

    /// Style for success messages
    pub fn success<T: Display>(text: T) -> String {
        paint(text, |t, _| t.green().to_string())
    }

    /// Style for error messages
    pub fn error<T: Display>(text: T) -> String {
        paint(text, |t, _| t.red().bold().to_string())
    }

    /// Style for warning messages
    pub fn warning<T: Display>(text: T) -> String {
        paint(text, |t, theme| match theme {
            Theme::Dark => t.bright_yellow().to_string(),
            Theme::Light => t.yellow().to_string(),
        })
    }

    /// Style for commands (e.g., "/pair", "/help")
    pub fn command<T: Display>(text: T) -> String {
        paint(text, |t, _| t.green().to_string())
    }

    /// Style for language codes
    pub fn code<T: Display>(text: T) -> String {
        paint(text, |t, _| t.yellow().to_string())
    }

    /// Style for version info
    pub fn version<T: Display>(text: T) -> String {
        paint(text, |t, _| t.dimmed().to_string())
    }
}
