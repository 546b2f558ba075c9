use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use warmly::cli::commands::{chat, configure, session, translate};
use warmly::cli::{self, Args, Command};
use warmly::output::{self, OutputConfig};
use warmly::storage::FileStore;
use warmly::translation::print_pairs;
use warmly::ui::{Style, Theme, load_theme};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    init_tracing(args.verbose);
    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || std::env::var_os("NO_COLOR").is_some(),
        theme: stored_theme(),
    });

    if let Err(err) = run(args).await {
        eprintln!("{} {err:#}", Style::error("Error:"));
        std::process::exit(cli::exit_code(&err));
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Chat { service }) => {
            chat::run_chat(chat::ChatOptions { service }).await?;
        }
        Some(Command::Pairs) => print_pairs(),
        Some(Command::Status) => session::print_status()?,
        Some(Command::Export { output }) => session::run_export(output.as_deref())?,
        Some(Command::Clear { yes }) => session::run_clear(yes)?,
        Some(Command::Theme { theme }) => session::run_theme(theme)?,
        Some(Command::Configure { show }) => {
            if show {
                configure::show_configuration()?;
            } else {
                configure::run_configure()?;
            }
        }
        None => {
            let options = translate::TranslateOptions {
                text: args.text,
                file: args.file,
                service: args.service,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}

/// Logs go to stderr; `WARMLY_LOG` (or `RUST_LOG`) overrides the level.
fn init_tracing(verbose: bool) {
    let default = if verbose { "warmly=debug" } else { "warn" };
    let filter = std::env::var("WARMLY_LOG")
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn stored_theme() -> Theme {
    FileStore::new().map(|store| load_theme(&store)).unwrap_or_default()
}
