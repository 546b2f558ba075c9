use anyhow::Result;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

use super::clock::Clock;
use super::export::render_transcript;
use super::model::{Exchange, Session};
use super::store::{RemainingTime, SessionStore};
use crate::storage::KeyValueStore;
use crate::translation::{LanguagePair, TranslationClient};

/// Why a submission did not end with a saved exchange.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("message is empty")]
    EmptyInput,

    /// The exchange was recorded in memory but could not be persisted.
    #[error("session could not be saved: {source:#}")]
    NotSaved {
        exchange: Box<Exchange>,
        source: anyhow::Error,
    },
}

/// Read-only view of the "submission in progress" flag.
///
/// Only the owning [`Conversation`] raises it; `submit` borrows the
/// conversation mutably, so submissions never overlap.
#[derive(Debug, Clone, Default)]
pub struct InFlight(Arc<AtomicBool>);

impl InFlight {
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Raises the flag until the returned guard drops.
    fn raise(&self) -> InFlightGuard {
        self.0.store(true, Ordering::Release);
        InFlightGuard(self.clone())
    }
}

/// Holds [`InFlight`] raised until dropped, including when a submission
/// is cancelled mid-request.
#[derive(Debug)]
struct InFlightGuard(InFlight);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        (self.0).0.store(false, Ordering::Release);
    }
}

/// Single owner of the active session: submits messages for translation,
/// records the results, and persists after every mutation.
pub struct Conversation<S, C> {
    session: Session,
    store: SessionStore<S, C>,
    client: TranslationClient,
    in_flight: InFlight,
}

impl<S: KeyValueStore, C: Clock> Conversation<S, C> {
    /// Resumes the persisted session, or starts a new one on `default_pair`.
    pub fn open(
        mut store: SessionStore<S, C>,
        client: TranslationClient,
        default_pair: LanguagePair,
    ) -> Self {
        let session = store.load().unwrap_or_else(|| {
            tracing::debug!("starting a new session");
            store.new_session(default_pair)
        });

        Self {
            session,
            store,
            client,
            in_flight: InFlight::default(),
        }
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub const fn client(&self) -> &TranslationClient {
        &self.client
    }

    /// Handle on the in-progress flag, for observers outside this owner.
    pub fn in_flight(&self) -> InFlight {
        self.in_flight.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_set()
    }

    /// Translates `text` with the active pair and appends the exchange.
    ///
    /// Blank input is rejected before any network call. Translation failures
    /// are not errors: they yield an exchange with `Failed` status. The
    /// exchange stays pending off the session until the request settles, so
    /// dropping this future leaves the session untouched. The session is
    /// persisted once, after the exchange is appended.
    pub async fn submit(&mut self, text: &str) -> Result<Exchange, SubmitError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SubmitError::EmptyInput);
        }

        let _guard = self.in_flight.raise();

        let pair = self.session.language_pair().clone();
        let now = self.store.now();
        let mut exchange = Exchange::pending(self.session.next_id(now), text.to_string(), now);

        let outcome = self
            .client
            .translate(text, &pair.source_language, &pair.target_language)
            .await;

        exchange.resolve(&outcome);
        self.session.push_resolved(exchange.clone());

        if let Err(source) = self.store.persist(&self.session) {
            tracing::warn!(error = %source, id = exchange.id(), "exchange kept in memory only");
            return Err(SubmitError::NotSaved {
                exchange: Box::new(exchange),
                source,
            });
        }

        Ok(exchange)
    }

    /// Switches the active pair. Persisted only when the session has content.
    pub fn set_language_pair(&mut self, pair: LanguagePair) -> Result<()> {
        self.session.set_language_pair(pair);
        self.store.persist(&self.session)
    }

    /// Deletes the persisted session and starts over, keeping the active pair.
    pub fn clear(&mut self) -> Result<()> {
        self.store.clear()?;
        self.session = self
            .store
            .new_session(self.session.language_pair().clone());
        Ok(())
    }

    pub fn remaining_time(&self) -> RemainingTime {
        self.store.remaining_time(&self.session)
    }

    pub fn is_expiring_soon(&self) -> bool {
        self.store.is_expiring_soon(&self.session)
    }

    pub fn transcript<Tz>(&self, exported_at: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        render_transcript(&self.session, exported_at)
    }
}
