use anyhow::Result;
use log::{debug, info};
use std::io::Write;

use crate::ai::{remove_fences, Assistant};
use crate::cli::{Input, OutputFormatter, Spinner, Version};
use crate::config::Config;
use crate::error::HowtoError;
use crate::history::History;
use crate::utils::ShellRunner;

const FOLLOW_UP_MARKER: char = '+';

/// Drives one invocation: classifies the input, talks to the assistant or
/// the shell, and keeps the history up to date.
pub struct CommandHandler<A, S> {
    config: Config,
    version: Version,
    assistant: A,
    shell: S,
    formatter: OutputFormatter,
    show_spinner: bool,
}

impl<A: Assistant, S: ShellRunner> CommandHandler<A, S> {
    pub fn new(
        config: Config,
        version: Version,
        assistant: A,
        shell: S,
        formatter: OutputFormatter,
    ) -> Self {
        Self {
            config,
            version,
            assistant,
            shell,
            formatter,
            show_spinner: false,
        }
    }

    pub fn with_spinner(mut self, show_spinner: bool) -> Self {
        self.show_spinner = show_spinner;
        self
    }

    /// Handles the input and saves the history if nothing failed.
    pub async fn handle<W: Write>(
        &self,
        out: &mut W,
        input: &Input,
        history: &mut History,
    ) -> Result<()> {
        debug!("Handling input: {input:?}");

        match input {
            Input::Help => self.formatter.write_usage(out)?,
            Input::Version => {
                self.formatter
                    .write_version(out, &self.version, &self.config, history)?
            }
            Input::RunLast => self.run_last_command(out, history)?,
            Input::Question(question) => self.answer(out, question, history).await?,
        }

        history.save()
    }

    /// Asks the assistant. A `+` prefix continues the conversation,
    /// anything else starts a new one. The question stays in the history
    /// even when the assistant fails.
    async fn answer<W: Write>(&self, out: &mut W, input: &str, history: &mut History) -> Result<()> {
        let question = match input.strip_prefix(FOLLOW_UP_MARKER) {
            Some(rest) => {
                debug!("Follow-up question, keeping {} entries", history.len());
                rest.trim()
            }
            None => {
                history.clear();
                input
            }
        };

        history.add(question);

        let spinner = self.show_spinner.then(|| Spinner::new("Thinking..."));
        let result = self.assistant.ask(history.messages()).await;
        if let Some(spinner) = spinner {
            spinner.stop();
        }

        let answer = remove_fences(&result?);
        write!(out, "{}", self.formatter.format_answer(&answer))?;
        history.add(answer);

        info!("Answered, history has {} entries", history.len());
        Ok(())
    }

    /// Runs the command suggested in the last answer.
    fn run_last_command<W: Write>(&self, out: &mut W, history: &History) -> Result<()> {
        let command = history.answered_command().ok_or(HowtoError::NoCommand)?;

        writeln!(out, "{}", self.formatter.emphasize(command))?;
        writeln!(out)?;

        let output = self.shell.run(command)?;
        writeln!(out, "{output}")?;
        Ok(())
    }
}
