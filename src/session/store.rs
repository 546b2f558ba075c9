use anyhow::{Context, Result};
use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;

use super::clock::{Clock, SystemClock};
use super::model::Session;
use crate::storage::{KeyValueStore, SESSION_KEY};
use crate::translation::{LanguagePair, supported_pairs};

/// How long a session lives after it starts.
pub const SESSION_TTL_HOURS: i64 = 24;

/// Elapsed time after which the session counts as expiring soon.
pub const EXPIRY_WARNING_HOURS: i64 = 23;

/// Time left in a session, rounded down to whole hours for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemainingTime {
    Hours(i64),
    Expired,
}

impl fmt::Display for RemainingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hours(hours) => write!(f, "{hours}h"),
            Self::Expired => f.write_str("Expired"),
        }
    }
}

/// Mirrors the single active [`Session`] into durable storage and expires
/// it after [`SESSION_TTL_HOURS`].
#[derive(Debug)]
pub struct SessionStore<S, C = SystemClock> {
    storage: S,
    clock: C,
}

impl<S: KeyValueStore, C: Clock> SessionStore<S, C> {
    pub const fn new(storage: S, clock: C) -> Self {
        Self { storage, clock }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Starts a fresh, empty session at the current time.
    pub fn new_session(&self, language_pair: LanguagePair) -> Session {
        Session::new(self.now(), language_pair)
    }

    /// Restores the persisted session.
    ///
    /// Missing, unreadable, and malformed records all read as `None`, as do
    /// records naming an unsupported pair or starting after now. An expired
    /// record is also deleted.
    pub fn load(&mut self) -> Option<Session> {
        let raw = match self.storage.get(SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(error = %err, "could not read stored session");
                return None;
            }
        };

        let session: Session = match serde_json::from_str(&raw) {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(error = %err, "ignoring malformed stored session");
                return None;
            }
        };

        if !supported_pairs().contains(session.language_pair()) {
            tracing::warn!(
                pair = %session.language_pair().code(),
                "ignoring stored session with unsupported pair"
            );
            return None;
        }
        if session.started_at() > self.now() {
            tracing::warn!(
                started_at = %session.started_at(),
                "ignoring stored session started in the future"
            );
            return None;
        }

        if self.elapsed(&session) >= TimeDelta::hours(SESSION_TTL_HOURS) {
            tracing::debug!(started_at = %session.started_at(), "stored session expired");
            if let Err(err) = self.storage.remove(SESSION_KEY) {
                tracing::warn!(error = %err, "could not remove expired session");
            }
            return None;
        }

        Some(session)
    }

    /// Writes `session` to storage. Empty sessions are never written.
    pub fn persist(&mut self, session: &Session) -> Result<()> {
        if session.is_empty() {
            tracing::debug!("skipping persist of empty session");
            return Ok(());
        }

        let json = serde_json::to_string(session).context("Failed to serialize session")?;
        self.storage
            .set(SESSION_KEY, &json)
            .context("Failed to save session")
    }

    /// Deletes the persisted session. The caller resets its in-memory copy.
    pub fn clear(&mut self) -> Result<()> {
        self.storage
            .remove(SESSION_KEY)
            .context("Failed to clear session")
    }

    pub fn elapsed(&self, session: &Session) -> TimeDelta {
        self.now() - session.started_at()
    }

    /// Time left before expiry, clamped at zero.
    pub fn remaining(&self, session: &Session) -> TimeDelta {
        let remaining = TimeDelta::hours(SESSION_TTL_HOURS) - self.elapsed(session);
        remaining.max(TimeDelta::zero())
    }

    pub fn remaining_time(&self, session: &Session) -> RemainingTime {
        let remaining = self.remaining(session);
        if remaining <= TimeDelta::zero() {
            RemainingTime::Expired
        } else {
            RemainingTime::Hours(remaining.num_hours())
        }
    }

    /// True once more than [`EXPIRY_WARNING_HOURS`] have elapsed.
    pub fn is_expiring_soon(&self, session: &Session) -> bool {
        self.elapsed(session) > TimeDelta::hours(EXPIRY_WARNING_HOURS)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::session::clock::FixedClock;
    use crate::session::model::Exchange;
    use crate::storage::MemoryStore;
    use crate::translation::TranslationOutcome;

    fn start() -> DateTime<Utc> {
        DateTime::from_timestamp_millis(1_700_000_000_000).unwrap()
    }

    fn store_at(now: DateTime<Utc>) -> (SessionStore<MemoryStore, FixedClock>, FixedClock) {
        let clock = FixedClock::new(now);
        (SessionStore::new(MemoryStore::new(), clock.clone()), clock)
    }

    fn session_with_exchange() -> Session {
        let mut session = Session::new(start(), LanguagePair::default());
        let mut exchange = Exchange::pending(session.next_id(start()), "Hello".to_string(), start());
        exchange.resolve(&TranslationOutcome::Translated("ہیلو".to_string()));
        session.push_resolved(exchange);
        session
    }

    fn elapsed(h: i64, m: i64, s: i64) -> TimeDelta {
        TimeDelta::hours(h) + TimeDelta::minutes(m) + TimeDelta::seconds(s)
    }

    #[test]
    fn test_load_without_stored_session() {
        let (mut store, _) = store_at(start());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_persist_then_load() {
        let (mut store, _) = store_at(start());
        let session = session_with_exchange();

        store.persist(&session).unwrap();

        assert_eq!(store.load(), Some(session));
    }

    #[test]
    fn test_persist_skips_empty_session() {
        let (mut store, _) = store_at(start());
        let session = store.new_session(LanguagePair::default());

        store.persist(&session).unwrap();

        assert!(store.storage.get(SESSION_KEY).unwrap().is_none());
    }

    #[test]
    fn test_persist_is_idempotent() {
        let (mut store, _) = store_at(start());
        let session = session_with_exchange();

        store.persist(&session).unwrap();
        let first = store.storage.get(SESSION_KEY).unwrap();
        store.persist(&session).unwrap();

        assert_eq!(store.storage.get(SESSION_KEY).unwrap(), first);
    }

    #[test]
    fn test_load_just_before_expiry() {
        let (mut store, clock) = store_at(start());
        store.persist(&session_with_exchange()).unwrap();

        clock.set(start() + elapsed(23, 59, 59));

        assert!(store.load().is_some());
    }

    #[test]
    fn test_load_at_exact_expiry() {
        let (mut store, clock) = store_at(start());
        store.persist(&session_with_exchange()).unwrap();

        clock.set(start() + elapsed(24, 0, 0));

        assert!(store.load().is_none());
    }

    #[test]
    fn test_load_after_expiry_removes_record() {
        let (mut store, clock) = store_at(start());
        store.persist(&session_with_exchange()).unwrap();

        clock.set(start() + elapsed(24, 0, 1));

        assert!(store.load().is_none());
        assert!(store.storage.get(SESSION_KEY).unwrap().is_none());
    }

    #[test]
    fn test_load_malformed_record() {
        let (mut store, _) = store_at(start());
        store.storage.set(SESSION_KEY, "{not json").unwrap();

        assert!(store.load().is_none());
    }

    #[test]
    fn test_load_wrong_shape() {
        let (mut store, _) = store_at(start());
        store
            .storage
            .set(SESSION_KEY, r#"{"messages":[],"startTime":"yesterday"}"#)
            .unwrap();

        assert!(store.load().is_none());
    }

    #[test]
    fn test_load_rejects_unsupported_pair() {
        let (mut store, _) = store_at(start());
        let record = serde_json::json!({
            "exchanges": [],
            "startedAt": start().timestamp_millis(),
            "languagePair": { "from": "English", "to": "Klingon", "fromCode": "en", "toCode": "xx" },
        });
        store.storage.set(SESSION_KEY, &record.to_string()).unwrap();

        assert!(store.load().is_none());
    }

    #[test]
    fn test_load_rejects_start_in_the_future() {
        let (mut store, clock) = store_at(start() + TimeDelta::hours(2));
        store.persist(&session_with_exchange()).unwrap();

        clock.set(start() - TimeDelta::minutes(1));

        assert!(store.load().is_none());
    }

    #[test]
    fn test_clear_removes_record() {
        let (mut store, _) = store_at(start());
        store.persist(&session_with_exchange()).unwrap();

        store.clear().unwrap();

        assert!(store.load().is_none());
    }

    #[test]
    fn test_remaining_time_whole_hours() {
        let (store, clock) = store_at(start());
        let session = Session::new(start(), LanguagePair::default());

        assert_eq!(store.remaining_time(&session), RemainingTime::Hours(24));

        clock.set(start() + elapsed(0, 30, 0));
        assert_eq!(store.remaining_time(&session), RemainingTime::Hours(23));

        clock.set(start() + elapsed(23, 30, 0));
        assert_eq!(store.remaining_time(&session).to_string(), "0h");
    }

    #[test]
    fn test_remaining_time_clamps_to_expired() {
        let (store, clock) = store_at(start());
        let session = Session::new(start(), LanguagePair::default());

        clock.set(start() + elapsed(24, 0, 0));
        assert_eq!(store.remaining_time(&session), RemainingTime::Expired);
        assert_eq!(store.remaining(&session), TimeDelta::zero());

        clock.set(start() + TimeDelta::days(3));
        assert_eq!(store.remaining_time(&session).to_string(), "Expired");
        assert_eq!(store.remaining(&session), TimeDelta::zero());
    }

    #[test]
    fn test_remaining_is_non_increasing() {
        let (store, clock) = store_at(start());
        let session = Session::new(start(), LanguagePair::default());

        let mut previous = store.remaining(&session);
        for _ in 0..60 {
            clock.advance(TimeDelta::minutes(30));
            let current = store.remaining(&session);
            assert!(current <= previous);
            previous = current;
        }
    }

    #[test]
    fn test_is_expiring_soon_boundary() {
        let (store, clock) = store_at(start());
        let session = Session::new(start(), LanguagePair::default());

        clock.set(start() + elapsed(22, 59, 59));
        assert!(!store.is_expiring_soon(&session));

        clock.set(start() + elapsed(23, 0, 0));
        assert!(!store.is_expiring_soon(&session));

        clock.set(start() + elapsed(23, 0, 1));
        assert!(store.is_expiring_soon(&session));
    }
}
