use anyhow::Result;
use chrono::{Local, Utc};
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{Confirm, Text};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::session::{Clock, Conversation, ExportTarget, SubmitError, write_transcript};
use crate::storage::KeyValueStore;
use crate::translation::find_pair;
use crate::ui::Spinner;

/// An interactive chat shell over a [`Conversation`].
///
/// Owns the conversation for the whole REPL; every handler mutates it
/// synchronously between awaits.
pub struct ChatShell<S, C> {
    conversation: Conversation<S, C>,
}

impl<S: KeyValueStore, C: Clock> ChatShell<S, C> {
    pub const fn new(conversation: Conversation<S, C>) -> Self {
        Self { conversation }
    }

    pub async fn run(&mut self) -> Result<()> {
        let session = self.conversation.session();
        ui::print_header(
            session.language_pair(),
            self.conversation.remaining_time(),
            session.len(),
        );
        self.warn_if_expiring();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Type a message to translate, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd)? {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.translate_and_print(&text).await;
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Returns `false` when the shell should exit.
    fn handle_command(&mut self, cmd: SlashCommand) -> Result<bool> {
        match cmd {
            SlashCommand::Clear => self.clear()?,
            SlashCommand::Config => {
                ui::print_config(
                    self.conversation.session().language_pair(),
                    self.conversation.client(),
                );
            }
            SlashCommand::Export(output) => self.export(output.as_deref()),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Pair(code) => self.set_pair(code.as_deref()),
            SlashCommand::Quit => return Ok(false),
            SlashCommand::Status => {
                ui::print_session_line(
                    self.conversation.session().language_pair(),
                    self.conversation.remaining_time(),
                );
                println!();
            }
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
            }
        }
        Ok(true)
    }

    fn set_pair(&mut self, code: Option<&str>) {
        let Some(code) = code else {
            ui::print_pairs(self.conversation.session().language_pair());
            return;
        };

        let Some(pair) = find_pair(code) else {
            ui::print_error(&format!("Unknown language pair: {code}"));
            ui::print_pairs(self.conversation.session().language_pair());
            return;
        };

        let message = format!("Language pair set to {pair}");
        match self.conversation.set_language_pair(pair) {
            Ok(()) => ui::print_success(&message),
            Err(e) => ui::print_warning(&format!("{message}, but it could not be saved: {e:#}")),
        }
    }

    fn clear(&mut self) -> Result<()> {
        if self.conversation.session().is_empty() {
            ui::print_success("Session is already empty");
            return Ok(());
        }

        let confirmed = match Confirm::new("Clear this session? Messages will be deleted.")
            .with_default(false)
            .prompt()
        {
            Ok(confirmed) => confirmed,
            Err(
                inquire::InquireError::OperationCanceled
                | inquire::InquireError::OperationInterrupted,
            ) => false,
            Err(e) => return Err(e.into()),
        };

        if confirmed {
            match self.conversation.clear() {
                Ok(()) => ui::print_success("Session cleared"),
                Err(e) => ui::print_error(&format!("{e:#}")),
            }
        }
        Ok(())
    }

    fn export(&self, output: Option<&str>) {
        if self.conversation.session().is_empty() {
            ui::print_error("Nothing to export yet");
            return;
        }

        let transcript = self.conversation.transcript(&Local::now());
        match write_transcript(&transcript, output, Utc::now()) {
            Ok(ExportTarget::Stdout) => println!(),
            Ok(ExportTarget::File(path)) => {
                ui::print_success(&format!("Transcript saved to {}", path.display()));
            }
            Err(e) => ui::print_error(&format!("{e:#}")),
        }
    }

    async fn translate_and_print(&mut self, text: &str) {
        let result = {
            let _spinner = Spinner::new("Translating...");
            self.conversation.submit(text).await
        };

        match result {
            Ok(exchange) => {
                ui::print_exchange(&exchange, self.conversation.session().language_pair());
                self.warn_if_expiring();
            }
            Err(SubmitError::EmptyInput) => {}
            Err(SubmitError::NotSaved { exchange, source }) => {
                ui::print_exchange(&exchange, self.conversation.session().language_pair());
                ui::print_warning(&format!(
                    "This message was not saved and will be lost on exit: {source:#}"
                ));
            }
        }
    }

    fn warn_if_expiring(&self) {
        if !self.conversation.session().is_empty() && self.conversation.is_expiring_soon() {
            ui::print_expiry_warning();
        }
    }
}
