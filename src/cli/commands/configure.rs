//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Select, Text};

use crate::config::{
    ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS,
    DEFAULT_MODEL,
};
use crate::translation::{find_pair, supported_pairs};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command to edit default settings.
///
/// Lets the user pick the default language pair and model.
pub fn run_configure() -> Result<()> {
    handle_prompt_cancellation(run_configure_inner)
}

/// Prints the effective defaults without prompting.
pub fn show_configuration() -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default();

    print_current_defaults(&config);
    println!(
        "{}",
        Style::secondary(format!("Config file: {}", manager.config_path().display()))
    );
    Ok(())
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default();

    print_current_defaults(&config);

    let pair = select_pair(config.warmly.pair.as_deref())?;
    let model = input_model(config.warmly.model.as_deref())?;

    config.warmly.pair = Some(pair);
    config.warmly.model = Some(model);

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile) {
    let warmly = &config.warmly;
    let api_key_env = warmly.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV);
    let pair = warmly
        .pair
        .as_deref()
        .and_then(find_pair)
        .unwrap_or_default();

    println!("{}", Style::header("Current defaults"));
    println!("  {}        {}", Style::label("pair"), Style::value(&pair));
    println!(
        "  {}       {}",
        Style::label("model"),
        Style::value(warmly.model.as_deref().unwrap_or(DEFAULT_MODEL))
    );
    println!(
        "  {}  {}",
        Style::label("max_tokens"),
        Style::value(warmly.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS))
    );
    println!(
        "  {}    {}",
        Style::label("endpoint"),
        Style::secondary(warmly.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))
    );
    println!(
        "  {}     {} {}",
        Style::label("api_key"),
        Style::secondary(api_key_env),
        if warmly.get_api_key().is_some() {
            Style::success("(set)")
        } else {
            Style::warning("(not set)")
        }
    );
    println!();
}

fn select_pair(default: Option<&str>) -> Result<String> {
    let pairs = supported_pairs();
    let options: Vec<String> = pairs
        .iter()
        .map(|pair| format!("{} - {pair}", pair.target_code))
        .collect();

    let default_index = default
        .and_then(find_pair)
        .and_then(|d| pairs.iter().position(|p| *p == d))
        .unwrap_or(0);

    let selection = Select::new("Default language pair:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    // Extract code from "code - From ↔ To" format
    let code = selection.split(" - ").next().unwrap_or(&selection);

    Ok(code.to_string())
}

fn input_model(default: Option<&str>) -> Result<String> {
    let model = Text::new("Default model:")
        .with_default(default.unwrap_or(DEFAULT_MODEL))
        .prompt()?;

    if model.trim().is_empty() {
        bail!("Model name cannot be empty");
    }

    Ok(model.trim().to_string())
}
