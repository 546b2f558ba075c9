use anyhow::Result;
use std::io::IsTerminal;

use super::open_conversation;
use crate::cli::{CliError, ServiceArgs};
use crate::input::InputReader;
use crate::session::{ExchangeStatus, SubmitError};
use crate::status;
use crate::ui::{Spinner, Style, directional};

pub struct TranslateOptions {
    pub text: Option<String>,
    pub file: Option<String>,
    pub service: ServiceArgs,
}

/// Translates one message, appends it to the session, and prints the result.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let mut conversation = open_conversation(&options.service)?;
    let text = InputReader::read(options.text.as_deref(), options.file.as_deref())?;

    let result = {
        let _spinner = Spinner::new("Translating...");
        conversation.submit(&text).await
    };

    let (exchange, not_saved) = match result {
        Ok(exchange) => (exchange, None),
        Err(SubmitError::NotSaved { exchange, source }) => (*exchange, Some(source)),
        Err(err) => return Err(CliError::from(err).into()),
    };

    if exchange.status() == ExchangeStatus::Failed {
        return Err(CliError::TranslationFailed.into());
    }

    let translated = exchange.translated_text();
    if std::io::stdout().is_terminal() {
        let direction = conversation.session().language_pair().target_direction();
        println!("{}", directional(translated, direction));
    } else {
        println!("{translated}");
    }

    status!(
        "{}",
        Style::secondary(format!(
            "Private session • {} left",
            conversation.remaining_time()
        ))
    );
    if conversation.is_expiring_soon() {
        status!(
            "{}",
            Style::warning("Session expires soon! Run 'warmly export' to save it.")
        );
    }

    if let Some(source) = not_saved {
        return Err(CliError::NotSaved(source).into());
    }

    Ok(())
}
