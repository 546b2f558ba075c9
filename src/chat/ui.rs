//! Chat mode UI components.

use crate::session::{Exchange, ExchangeStatus, RemainingTime};
use crate::translation::{LanguagePair, TranslationClient};
use crate::ui::{Style, directional};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(pair: &LanguagePair, remaining: RemainingTime, exchanges: usize) {
    println!(
        "{} {} - Private Translation Chat",
        Style::header("warmly"),
        Style::version(format!("v{VERSION}"))
    );
    print_session_line(pair, remaining);
    if exchanges > 0 {
        println!(
            "{}",
            Style::secondary(format!("Resumed session with {exchanges} message(s)"))
        );
    }
    println!();
}

pub fn print_session_line(pair: &LanguagePair, remaining: RemainingTime) {
    println!(
        "{} {}",
        Style::value(pair),
        Style::secondary(format!("• Private session • {remaining} left"))
    );
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_exchange(exchange: &Exchange, pair: &LanguagePair) {
    match exchange.status() {
        ExchangeStatus::Complete => {
            let text = directional(exchange.translated_text(), pair.target_direction());
            println!("{}", Style::translation(text));
        }
        ExchangeStatus::Failed => {
            println!("{}", Style::error(exchange.translated_text()));
            println!("{}", Style::secondary("Send the message again to retry."));
        }
        ExchangeStatus::Pending => {
            println!("{}", Style::secondary("Translating..."));
        }
    }
    println!(
        "{}",
        Style::secondary(exchange.created_at().with_timezone(&chrono::Local).format("%H:%M"))
    );
    println!();
}

pub fn print_expiry_warning() {
    println!(
        "{}",
        Style::warning("⚠️  Session expires soon! Consider exporting to save (/export).")
    );
    println!();
}

pub fn print_config(pair: &LanguagePair, client: &TranslationClient) {
    println!("{}", Style::header("Configuration"));
    println!("  {}       {}", Style::label("pair"), Style::value(pair));
    println!(
        "  {}      {}",
        Style::label("model"),
        Style::value(client.model())
    );
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(client.endpoint())
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    let commands = [
        ("/pair [code]", "Show or change the language pair"),
        ("/status", "Show session time remaining"),
        ("/export [path]", "Save the session transcript ('-' for stdout)"),
        ("/clear", "Delete this session's messages"),
        ("/config", "Show current configuration"),
        ("/help", "Show this help"),
        ("/quit", "Exit chat mode"),
    ];
    for (command, description) in commands {
        println!(
            "  {}  {}",
            Style::command(format!("{command:14}")),
            Style::secondary(description)
        );
    }
    println!();
}

pub fn print_pairs(active: &LanguagePair) {
    println!("{}", Style::header("Language pairs"));
    for pair in crate::translation::supported_pairs() {
        let marker = if &pair == active { " (active)" } else { "" };
        println!(
            "  {}  {}{}",
            Style::code(format!("{:3}", pair.target_code)),
            Style::value(&pair),
            Style::secondary(marker)
        );
    }
    println!();
}

pub fn print_success(message: &str) {
    println!("{} {message}", Style::success("✓"));
    println!();
}

pub fn print_warning(message: &str) {
    eprintln!("{}", Style::warning(message));
    eprintln!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
