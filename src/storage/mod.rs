//! Durable key-value storage for the session and user preferences.
//!
//! Values are opaque JSON strings, mirroring a browser's local storage:
//! no schema versioning, and callers treat unreadable values as absent.

mod file;
mod memory;

use anyhow::Result;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Key holding the serialized active session.
pub const SESSION_KEY: &str = "translationSession";

/// Key holding the dark-mode preference (`true`/`false`).
pub const DARK_MODE_KEY: &str = "darkMode";

/// A string-keyed store of serialized values.
pub trait KeyValueStore {
    /// Returns the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}
