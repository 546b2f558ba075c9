use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;
use crate::translation::{LanguagePair, resolve_pair};

/// Messages API base URL used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Token budget for a single translation.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Environment variable holding the service credential by default.
pub const DEFAULT_API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Settings in the `[warmly]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WarmlyConfig {
    /// Messages API base URL.
    pub endpoint: Option<String>,
    /// Model identifier.
    pub model: Option<String>,
    /// Token budget per request.
    pub max_tokens: Option<u32>,
    /// API key stored directly in config (not recommended).
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    pub api_key_env: Option<String>,
    /// Default language pair, by target code (`ur`) or `from-to` code.
    pub pair: Option<String>,
}

impl WarmlyConfig {
    /// Gets the API key, preferring the environment over the config file.
    pub fn get_api_key(&self) -> Option<String> {
        let env_var = self.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV);
        if let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone().filter(|key| !key.is_empty())
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/warmly/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub warmly: WarmlyConfig,
}

/// Effective settings after merging CLI options, config file and defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
    pub api_key: String,
    pub language_pair: LanguagePair,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub pair: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// # Errors
///
/// Returns an error if the language pair is unknown or no API key is available.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let file = &config_file.warmly;

    let endpoint = options
        .endpoint
        .as_ref()
        .or(file.endpoint.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let model = options
        .model
        .as_ref()
        .or(file.model.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let max_tokens = file.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS);
    if max_tokens == 0 {
        bail!("Invalid configuration: 'max_tokens' must be greater than zero");
    }

    let language_pair = match options.pair.as_ref().or(file.pair.as_ref()) {
        Some(key) => resolve_pair(key)?,
        None => LanguagePair::default(),
    };

    let Some(api_key) = file.get_api_key() else {
        let env_var = file.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV);
        bail!(
            "Missing API key for the translation service\n\n\
             Set the {env_var} environment variable:\n  \
             export {env_var}=\"your-api-key\"\n\n\
             Or set api_key in ~/.config/warmly/config.toml"
        );
    };

    Ok(ResolvedConfig {
        endpoint,
        model,
        max_tokens,
        api_key,
        language_pair,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/warmly/config.toml`
    /// or `~/.config/warmly/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| "Failed to parse config file")
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })
    }

    pub fn load_or_default(&self) -> ConfigFile {
        if !self.config_path.exists() {
            return ConfigFile::default();
        }
        self.load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring unreadable config file");
            ConfigFile::default()
        })
    }
}
