use anyhow::Result;

use super::open_conversation;
use crate::chat::ChatShell;
use crate::cli::ServiceArgs;

pub struct ChatOptions {
    pub service: ServiceArgs,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let conversation = open_conversation(&options.service)?;
    let mut shell = ChatShell::new(conversation);
    shell.run().await
}
