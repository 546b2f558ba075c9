use clap::{Parser, Subcommand};

use crate::ui::Theme;

#[derive(Parser, Debug)]
#[command(name = "warmly")]
#[command(about = "Private, context-aware translation chat")]
#[command(version)]
pub struct Args {
    /// Text to translate (reads --file or stdin if not provided)
    pub text: Option<String>,

    /// File to translate
    #[arg(short = 'f', long)]
    pub file: Option<String>,

    #[command(flatten)]
    pub service: ServiceArgs,

    /// Suppress status output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log request diagnostics to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Overrides for the translation service and language pair.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ServiceArgs {
    /// Language pair by target code (e.g., ur, es) or from-to code (en-ur)
    #[arg(short = 'p', long)]
    pub pair: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Messages API base URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive chat mode for translation
    Chat {
        #[command(flatten)]
        service: ServiceArgs,
    },
    /// List supported language pairs
    Pairs,
    /// Show the active session and time remaining
    Status,
    /// Save the session transcript as plain text
    Export {
        /// Output path, or '-' for stdout (default: translation-<millis>.txt)
        #[arg(short = 'o', long)]
        output: Option<String>,
    },
    /// Delete the active session
    Clear {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Show or set the color theme
    Theme {
        /// Theme to switch to
        #[arg(value_enum)]
        theme: Option<Theme>,
    },
    /// Configure warmly defaults
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
