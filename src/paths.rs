//! XDG-style path utilities for configuration and session data.
//!
//! Resolution prefers XDG Base Directory conventions over OS-specific
//! locations so the layout is the same on every platform.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "warmly";

/// Returns the configuration directory for warmly.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/warmly` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/warmly` otherwise
pub fn config_dir() -> Result<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", &[".config"])
}

/// Returns the data directory holding the persisted session and preferences.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/warmly` if `XDG_DATA_HOME` is set
/// 2. `~/.local/share/warmly` otherwise
pub fn data_dir() -> Result<PathBuf> {
    xdg_dir("XDG_DATA_HOME", &[".local", "share"])
}

fn xdg_dir(var: &str, fallback: &[&str]) -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var(var)
        && !xdg.is_empty()
    {
        return Ok(PathBuf::from(xdg).join(APP_DIR));
    }

    let mut dir = dirs::home_dir().context("Failed to determine home directory")?;
    for segment in fallback {
        dir.push(segment);
    }
    Ok(dir.join(APP_DIR))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn with_var<F: FnOnce()>(var: &str, value: Option<&str>, f: F) {
        let original = std::env::var(var).ok();
        match value {
            Some(v) => unsafe { std::env::set_var(var, v) },
            None => unsafe { std::env::remove_var(var) },
        }

        f();

        match original {
            Some(v) => unsafe { std::env::set_var(var, v) },
            None => unsafe { std::env::remove_var(var) },
        }
    }

    #[test]
    #[serial]
    fn test_config_dir_default() {
        with_var("XDG_CONFIG_HOME", None, || {
            let dir = config_dir().unwrap();
            assert!(dir.ends_with(".config/warmly"));
        });
    }

    #[test]
    #[serial]
    fn test_config_dir_xdg_override() {
        with_var("XDG_CONFIG_HOME", Some("/custom/config"), || {
            assert_eq!(config_dir().unwrap(), PathBuf::from("/custom/config/warmly"));
        });
    }

    #[test]
    #[serial]
    fn test_data_dir_default() {
        with_var("XDG_DATA_HOME", None, || {
            let dir = data_dir().unwrap();
            assert!(dir.ends_with(".local/share/warmly"));
        });
    }

    #[test]
    #[serial]
    fn test_data_dir_empty_var_falls_back() {
        with_var("XDG_DATA_HOME", Some(""), || {
            let dir = data_dir().unwrap();
            assert!(dir.ends_with(".local/share/warmly"));
        });
    }

    #[test]
    #[serial]
    fn test_data_dir_xdg_override() {
        with_var("XDG_DATA_HOME", Some("/custom/data"), || {
            assert_eq!(data_dir().unwrap(), PathBuf::from("/custom/data/warmly"));
        });
    }
}
