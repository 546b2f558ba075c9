//! Supported language pairs and text direction.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ui::Style;

/// Supported pairs as (source code, source name, target code, target name).
pub const SUPPORTED_PAIRS: &[(&str, &str, &str, &str)] = &[
    ("en", "English", "ur", "Urdu"),
    ("en", "English", "hi", "Hindi"),
    ("en", "English", "es", "Spanish"),
    ("en", "English", "ar", "Arabic"),
    ("en", "English", "zh", "Chinese"),
    ("en", "English", "fr", "French"),
];

/// Target codes whose scripts are written right-to-left.
const RTL_CODES: &[&str] = &["ar", "ur"];

/// A (source, target) language combination offered to the user.
///
/// Languages are carried both as human-readable names (sent to the model)
/// and ISO 639-1 codes (used for lookup and text direction).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    #[serde(rename = "from")]
    pub source_language: String,
    #[serde(rename = "to")]
    pub target_language: String,
    #[serde(rename = "fromCode")]
    pub source_code: String,
    #[serde(rename = "toCode")]
    pub target_code: String,
}

/// Rendering direction for translated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    LeftToRight,
    RightToLeft,
}

impl LanguagePair {
    fn from_entry(&(source_code, source, target_code, target): &(&str, &str, &str, &str)) -> Self {
        Self {
            source_language: source.to_string(),
            target_language: target.to_string(),
            source_code: source_code.to_string(),
            target_code: target_code.to_string(),
        }
    }

    /// Direction in which translations into the target language are rendered.
    pub fn target_direction(&self) -> TextDirection {
        if RTL_CODES.contains(&self.target_code.as_str()) {
            TextDirection::RightToLeft
        } else {
            TextDirection::LeftToRight
        }
    }

    /// Short identifier in `from-to` code form, e.g. `en-ur`.
    pub fn code(&self) -> String {
        format!("{}-{}", self.source_code, self.target_code)
    }
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self::from_entry(&SUPPORTED_PAIRS[0])
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ↔ {}", self.source_language, self.target_language)
    }
}

/// Returns all supported pairs in display order.
pub fn supported_pairs() -> Vec<LanguagePair> {
    SUPPORTED_PAIRS.iter().map(LanguagePair::from_entry).collect()
}

/// Looks up a supported pair by target code (`ur`) or `from-to` code (`en-ur`).
pub fn find_pair(key: &str) -> Option<LanguagePair> {
    SUPPORTED_PAIRS
        .iter()
        .find(|(from, _, to, _)| key == *to || key.split_once('-') == Some((*from, *to)))
        .map(LanguagePair::from_entry)
}

/// Resolves a pair key, failing with a listing of the valid keys.
///
/// # Errors
///
/// Returns an error if the key does not match a supported pair.
pub fn resolve_pair(key: &str) -> Result<LanguagePair> {
    find_pair(key).ok_or_else(|| {
        let valid: Vec<&str> = SUPPORTED_PAIRS.iter().map(|(_, _, to, _)| *to).collect();
        anyhow::anyhow!(
            "Invalid language pair: '{key}'\n\n\
             Valid pairs: {}\n\
             Run 'warmly pairs' to see all supported pairs.",
            valid.join(", ")
        )
    })
}

/// Prints all supported pairs to stdout.
pub fn print_pairs() {
    println!("{}", Style::header("Supported language pairs"));
    for pair in supported_pairs() {
        println!(
            "  {:6} {}",
            Style::code(pair.code()),
            Style::secondary(&pair)
        );
    }
}
