use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::FAILURE_MESSAGE;
use super::error::TranslationError;
use super::prompt::build_prompt;

/// Value of the `anthropic-version` header sent with every request.
pub const API_VERSION: &str = "2023-06-01";

/// Result of one translation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    /// The trimmed text of the first text block.
    Translated(String),
    /// The attempt failed; the cause has already been logged.
    Failed,
}

impl TranslationOutcome {
    /// Text to show the user: the translation, or the fixed failure marker.
    pub fn text(&self) -> &str {
        match self {
            Self::Translated(text) => text,
            Self::Failed => FAILURE_MESSAGE,
        }
    }

    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message; 1],
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

/// Client for the external generation service's Messages API.
///
/// Makes exactly one request per [`translate`](Self::translate) call: no
/// retries, no caching.
#[derive(Clone)]
pub struct TranslationClient {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl fmt::Debug for TranslationClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl TranslationClient {
    pub fn new(endpoint: String, api_key: String, model: String, max_tokens: u32) -> Self {
        Self::with_http_client(Client::new(), endpoint, api_key, model, max_tokens)
    }

    /// Builds a client over a preconfigured HTTP client (timeouts, proxies).
    pub const fn with_http_client(
        client: Client,
        endpoint: String,
        api_key: String,
        model: String,
        max_tokens: u32,
    ) -> Self {
        Self {
            client,
            endpoint,
            api_key,
            model,
            max_tokens,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Translates `text` from `from` to `to` (human-readable language names).
    ///
    /// Never fails: transport, status and parsing problems are logged and
    /// reported as [`TranslationOutcome::Failed`].
    pub async fn translate(&self, text: &str, from: &str, to: &str) -> TranslationOutcome {
        match self.request_translation(text, from, to).await {
            Ok(translated) => TranslationOutcome::Translated(translated),
            Err(err) => {
                tracing::error!(error = %err, from, to, "translation failed");
                TranslationOutcome::Failed
            }
        }
    }

    async fn request_translation(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<String, TranslationError> {
        let url = format!("{}/v1/messages", self.endpoint.trim_end_matches('/'));

        let body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: [Message {
                role: "user",
                content: build_prompt(text, from, to),
            }],
        };

        tracing::debug!(%url, model = %self.model, from, to, "sending translation request");

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;

        if !status.is_success() {
            return Err(TranslationError::Status { status, body: raw });
        }

        extract_text(&raw)
    }
}

/// Pulls the first text block out of a Messages API response body.
fn extract_text(raw: &str) -> Result<String, TranslationError> {
    let response: MessagesResponse = serde_json::from_str(raw)?;

    response
        .content
        .into_iter()
        .find_map(|block| match block {
            ContentBlock::Text { text } => Some(text.trim().to_string()),
            ContentBlock::Other => None,
        })
        .filter(|text| !text.is_empty())
        .ok_or(TranslationError::MissingText)
}
