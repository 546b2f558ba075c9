use anyhow::Result;
use chrono::Local;
use inquire::Confirm;

use super::open_store;
use crate::cli::CliError;
use crate::session::{ExportTarget, render_transcript, write_transcript};
use crate::status;
use crate::storage::FileStore;
use crate::ui::{Style, Theme, handle_prompt_cancellation, load_theme, save_theme};

/// Prints the active session's pair, size and remaining time.
pub fn print_status() -> Result<()> {
    let mut store = open_store()?;

    let Some(session) = store.load() else {
        println!("No active session.");
        return Ok(());
    };

    println!("{}", Style::header("Session"));
    println!(
        "  {}       {}",
        Style::label("pair"),
        Style::value(session.language_pair())
    );
    println!(
        "  {}   {}",
        Style::label("messages"),
        Style::value(session.len())
    );
    println!(
        "  {}    {}",
        Style::label("started"),
        Style::secondary(
            session
                .started_at()
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
        )
    );
    println!(
        "  {}  {}",
        Style::label("remaining"),
        Style::value(store.remaining_time(&session))
    );

    if store.is_expiring_soon(&session) {
        println!();
        println!(
            "{}",
            Style::warning("Session expires soon! Run 'warmly export' to save it.")
        );
    }

    Ok(())
}

/// Writes the active session's transcript to `output` (or a default file).
pub fn run_export(output: Option<&str>) -> Result<()> {
    let mut store = open_store()?;

    let session = store
        .load()
        .filter(|s| !s.is_empty())
        .ok_or(CliError::NothingToExport)?;

    let transcript = render_transcript(&session, &Local::now());
    match write_transcript(&transcript, output, store.now())? {
        ExportTarget::Stdout => {}
        ExportTarget::File(path) => {
            status!(
                "{} Transcript saved to {}",
                Style::success("✓"),
                Style::value(path.display())
            );
        }
    }

    Ok(())
}

/// Deletes the persisted session, asking first unless `yes` is set.
pub fn run_clear(yes: bool) -> Result<()> {
    handle_prompt_cancellation(|| {
        if !yes
            && !Confirm::new("Clear this session? Messages will be deleted.")
                .with_default(false)
                .prompt()?
        {
            return Ok(());
        }

        open_store()?.clear()?;
        status!("{} Session cleared", Style::success("✓"));
        Ok(())
    })
}

/// Prints the current theme, or stores a new one.
pub fn run_theme(theme: Option<Theme>) -> Result<()> {
    let mut store = FileStore::new()?;

    match theme {
        None => println!("{}", load_theme(&store).name()),
        Some(theme) => {
            save_theme(&mut store, theme)?;
            status!(
                "{} Theme set to {}",
                Style::success("✓"),
                Style::value(theme.name())
            );
        }
    }

    Ok(())
}
