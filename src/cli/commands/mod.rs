//! Subcommand implementations.

/// Chat mode command handler.
pub mod chat;

/// Configure command handler.
pub mod configure;

/// Session status, export, clear and theme handlers.
pub mod session;

/// One-shot translation command handler.
pub mod translate;

use anyhow::Result;

use super::{CliError, ServiceArgs};
use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::session::{Conversation, SessionStore, SystemClock};
use crate::storage::FileStore;
use crate::translation::{TranslationClient, resolve_pair};

/// Resolves settings and resumes (or starts) the persisted conversation.
///
/// An explicit `--pair` switches the resumed session to that pair.
fn open_conversation(service: &ServiceArgs) -> Result<Conversation<FileStore, SystemClock>> {
    let explicit_pair = service
        .pair
        .as_deref()
        .map(resolve_pair)
        .transpose()
        .map_err(CliError::Usage)?;

    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default();

    let options = ResolveOptions {
        endpoint: service.endpoint.clone(),
        model: service.model.clone(),
        pair: service.pair.clone(),
    };
    let resolved = resolve_config(&options, &file_config).map_err(CliError::Config)?;

    let client = TranslationClient::new(
        resolved.endpoint,
        resolved.api_key,
        resolved.model,
        resolved.max_tokens,
    );
    let store = SessionStore::new(FileStore::new()?, SystemClock);
    let mut conversation = Conversation::open(store, client, resolved.language_pair);

    if let Some(pair) = explicit_pair
        && conversation.session().language_pair() != &pair
    {
        conversation.set_language_pair(pair)?;
    }

    Ok(conversation)
}

/// Opens the session store without requiring service credentials.
fn open_store() -> Result<SessionStore<FileStore, SystemClock>> {
    Ok(SessionStore::new(FileStore::new()?, SystemClock))
}
