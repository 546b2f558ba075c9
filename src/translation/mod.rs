mod client;
mod error;
mod language;
mod prompt;

pub use client::{API_VERSION, TranslationClient, TranslationOutcome};
pub use error::TranslationError;
pub use language::{
    LanguagePair, SUPPORTED_PAIRS, TextDirection, find_pair, print_pairs, resolve_pair,
    supported_pairs,
};
pub use prompt::{PROMPT_TEMPLATE, build_prompt};

/// User-facing text recorded on a failed exchange.
pub const FAILURE_MESSAGE: &str = "Translation error - please try again";
