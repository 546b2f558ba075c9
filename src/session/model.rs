use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::translation::{LanguagePair, TranslationOutcome};

/// Lifecycle of one exchange. `Complete` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeStatus {
    Pending,
    Complete,
    Failed,
}

/// One user message and its translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exchange {
    id: u64,
    original_text: String,
    translated_text: String,
    created_at: DateTime<Utc>,
    status: ExchangeStatus,
}

impl Exchange {
    pub(crate) const fn pending(id: u64, original_text: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            original_text,
            translated_text: String::new(),
            created_at,
            status: ExchangeStatus::Pending,
        }
    }

    pub const fn id(&self) -> u64 {
        self.id
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    /// Empty while pending; the failure marker once failed.
    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub const fn status(&self) -> ExchangeStatus {
        self.status
    }

    /// Moves a pending exchange to its terminal state. Returns `false` and
    /// leaves the exchange untouched if it was already resolved.
    pub(crate) fn resolve(&mut self, outcome: &TranslationOutcome) -> bool {
        if self.status != ExchangeStatus::Pending {
            return false;
        }

        self.translated_text = outcome.text().to_string();
        self.status = if outcome.is_failed() {
            ExchangeStatus::Failed
        } else {
            ExchangeStatus::Complete
        };
        true
    }
}

/// The ephemeral conversation: exchanges in chronological order, the
/// instant it started, and the active language pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    exchanges: Vec<Exchange>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    started_at: DateTime<Utc>,
    #[serde(default)]
    language_pair: LanguagePair,
}

impl Session {
    pub const fn new(started_at: DateTime<Utc>, language_pair: LanguagePair) -> Self {
        Self {
            exchanges: Vec::new(),
            started_at,
            language_pair,
        }
    }

    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub const fn language_pair(&self) -> &LanguagePair {
        &self.language_pair
    }

    pub fn set_language_pair(&mut self, pair: LanguagePair) {
        self.language_pair = pair;
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    /// Id for an exchange created at `now`.
    ///
    /// Ids are creation-time milliseconds, bumped when needed so they stay
    /// strictly increasing within the session.
    pub(crate) fn next_id(&self, now: DateTime<Utc>) -> u64 {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        self.exchanges
            .last()
            .map_or(millis, |last| millis.max(last.id + 1))
    }

    /// Appends a resolved exchange. Pending exchanges are refused, so the
    /// session only ever holds terminal states.
    pub(crate) fn push_resolved(&mut self, exchange: Exchange) -> bool {
        if exchange.status == ExchangeStatus::Pending {
            return false;
        }
        self.exchanges.push(exchange);
        true
    }
}
