use reqwest::StatusCode;
use thiserror::Error;

/// Why a single translation attempt produced no text.
///
/// These are operator diagnostics; users only ever see
/// [`FAILURE_MESSAGE`](super::FAILURE_MESSAGE).
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("failed to reach generation service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("generation service returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("response contained no text block")]
    MissingText,
}
