//! Light/dark palette, persisted under the `darkMode` key.

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::storage::{DARK_MODE_KEY, KeyValueStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::Dark } else { Self::Light }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Reads the stored preference. Missing or unparsable values mean light.
pub fn load_theme(store: &impl KeyValueStore) -> Theme {
    match store.get(DARK_MODE_KEY) {
        Ok(Some(raw)) => serde_json::from_str::<bool>(&raw).map_or_else(
            |err| {
                tracing::warn!(error = %err, "ignoring malformed darkMode preference");
                Theme::default()
            },
            Theme::from_dark_mode,
        ),
        Ok(None) => Theme::default(),
        Err(err) => {
            tracing::warn!(error = %err, "could not read darkMode preference");
            Theme::default()
        }
    }
}

pub fn save_theme(store: &mut impl KeyValueStore, theme: Theme) -> Result<()> {
    let raw = serde_json::to_string(&theme.is_dark()).context("Failed to serialize theme")?;
    store
        .set(DARK_MODE_KEY, &raw)
        .context("Failed to save theme preference")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_missing_preference_is_light() {
        assert_eq!(load_theme(&MemoryStore::new()), Theme::Light);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();

        save_theme(&mut store, Theme::Dark).unwrap();

        assert_eq!(store.get(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));
        assert_eq!(load_theme(&store), Theme::Dark);
    }

    #[test]
    fn test_malformed_preference_is_light() {
        let mut store = MemoryStore::new();
        store.set(DARK_MODE_KEY, "yes please").unwrap();

        assert_eq!(load_theme(&store), Theme::Light);
    }
}
