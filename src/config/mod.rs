//! Configuration file management and resolution of effective settings.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS,
    DEFAULT_MODEL, ResolveOptions, ResolvedConfig, WarmlyConfig, resolve_config,
};
