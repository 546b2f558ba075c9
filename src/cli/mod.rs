//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Subcommand implementations.
pub mod commands;

pub use args::{Args, Command, ServiceArgs};

use thiserror::Error;

use crate::session::SubmitError;
use crate::translation::FAILURE_MESSAGE;

/// Failures that map to distinct process exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(anyhow::Error),

    #[error(transparent)]
    Usage(anyhow::Error),

    #[error(transparent)]
    Submit(#[from] SubmitError),

    #[error("{}", FAILURE_MESSAGE)]
    TranslationFailed,

    #[error("No session to export")]
    NothingToExport,

    #[error("Translation was not saved to the session: {0:#}")]
    NotSaved(anyhow::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::Config(_) => exitcode::CONFIG,
            Self::Usage(_) => exitcode::USAGE,
            Self::Submit(SubmitError::EmptyInput) => exitcode::DATAERR,
            Self::Submit(SubmitError::NotSaved { .. }) | Self::NotSaved(_) => exitcode::IOERR,
            Self::TranslationFailed => exitcode::UNAVAILABLE,
            Self::NothingToExport => exitcode::NOINPUT,
        }
    }
}

/// Exit code for an error returned by a command handler.
pub fn exit_code(err: &anyhow::Error) -> exitcode::ExitCode {
    err.downcast_ref::<CliError>()
        .map_or(exitcode::SOFTWARE, CliError::exit_code)
}
