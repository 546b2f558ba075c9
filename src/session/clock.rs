use chrono::{DateTime, TimeDelta, Utc};
use std::sync::{Arc, Mutex, PoisonError};

/// Source of the current time for session bookkeeping.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A manually driven clock. Clones share the same instant.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = now;
    }

    pub fn advance(&self, by: TimeDelta) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_clones_share_time() {
        let start = DateTime::<Utc>::UNIX_EPOCH;
        let clock = FixedClock::new(start);
        let handle = clock.clone();

        handle.advance(TimeDelta::hours(2));

        assert_eq!(clock.now() - start, TimeDelta::hours(2));
    }

    #[test]
    fn test_fixed_clock_set() {
        let clock = FixedClock::new(DateTime::<Utc>::UNIX_EPOCH);
        let later = DateTime::<Utc>::UNIX_EPOCH + TimeDelta::days(3);

        clock.set(later);

        assert_eq!(clock.now(), later);
    }
}
