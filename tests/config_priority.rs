//! Config priority contract tests.
//!
//! These tests verify that CLI options take priority over config file settings.
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file defaults
//! 3. Built-in defaults

use warmly::config::{
    ConfigFile, DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, ResolveOptions,
    WarmlyConfig, resolve_config,
};

/// Points the key lookup at a variable no test sets, so the file key wins.
const UNSET_KEY_ENV: &str = "WARMLY_CONFIG_PRIORITY_UNSET_KEY";

fn make_config_with_defaults() -> ConfigFile {
    ConfigFile {
        warmly: WarmlyConfig {
            endpoint: Some("http://config.local".to_string()),
            model: Some("config_model".to_string()),
            max_tokens: Some(512),
            api_key: Some("file_key".to_string()),
            api_key_env: Some(UNSET_KEY_ENV.to_string()),
            pair: Some("es".to_string()),
        },
    }
}

fn make_config_with_key_only() -> ConfigFile {
    ConfigFile {
        warmly: WarmlyConfig {
            api_key: Some("file_key".to_string()),
            api_key_env: Some(UNSET_KEY_ENV.to_string()),
            ..WarmlyConfig::default()
        },
    }
}

#[test]
fn test_cli_options_override_config_file() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        endpoint: Some("http://cli.local".to_string()),
        model: Some("cli_model".to_string()),
        pair: Some("en-fr".to_string()),
    };

    let resolved = resolve_config(&options, &config).unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(resolved.endpoint, "http://cli.local");
    assert_eq!(resolved.model, "cli_model");
    assert_eq!(resolved.language_pair.target_code, "fr");
}

#[test]
fn test_config_file_used_when_no_cli_options() {
    let config = make_config_with_defaults();

    let resolved =
        resolve_config(&ResolveOptions::default(), &config).unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(resolved.endpoint, "http://config.local");
    assert_eq!(resolved.model, "config_model");
    assert_eq!(resolved.max_tokens, 512);
    assert_eq!(resolved.api_key, "file_key");
    assert_eq!(resolved.language_pair.target_language, "Spanish");
}

#[test]
fn test_builtin_defaults_fill_gaps() {
    let config = make_config_with_key_only();

    let resolved =
        resolve_config(&ResolveOptions::default(), &config).unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(resolved.model, DEFAULT_MODEL);
    assert_eq!(resolved.max_tokens, DEFAULT_MAX_TOKENS);
    assert_eq!(resolved.language_pair.code(), "en-ur");
}

#[test]
fn test_partial_cli_override() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        model: Some("cli_model".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(resolved.model, "cli_model");
    assert_eq!(resolved.endpoint, "http://config.local");
    assert_eq!(resolved.language_pair.target_code, "es");
}

#[test]
fn test_unknown_pair_in_config_file_is_rejected() {
    let mut config = make_config_with_key_only();
    config.warmly.pair = Some("en-xx".to_string());

    let err = resolve_config(&ResolveOptions::default(), &config)
        .err()
        .map(|e| e.to_string())
        .unwrap_or_default();

    assert!(err.contains("Invalid language pair: 'en-xx'"));
}

#[test]
fn test_missing_api_key_names_the_variable() {
    let config = ConfigFile {
        warmly: WarmlyConfig {
            api_key_env: Some(UNSET_KEY_ENV.to_string()),
            ..WarmlyConfig::default()
        },
    };

    let err = resolve_config(&ResolveOptions::default(), &config)
        .err()
        .map(|e| e.to_string())
        .unwrap_or_default();

    assert!(err.contains("Missing API key"));
    assert!(err.contains(UNSET_KEY_ENV));
}

#[test]
fn test_zero_max_tokens_is_rejected() {
    let mut config = make_config_with_key_only();
    config.warmly.max_tokens = Some(0);

    assert!(resolve_config(&ResolveOptions::default(), &config).is_err());
}

#[test]
fn test_config_file_parses_from_toml() {
    let config: ConfigFile = toml::from_str(
        r#"
        [warmly]
        pair = "en-ar"
        model = "claude-haiku"
        max_tokens = 400
        "#,
    )
    .unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(config.warmly.pair.as_deref(), Some("en-ar"));
    assert_eq!(config.warmly.model.as_deref(), Some("claude-haiku"));
    assert_eq!(config.warmly.max_tokens, Some(400));
    assert!(config.warmly.api_key.is_none());
}
