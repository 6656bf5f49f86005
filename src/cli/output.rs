use console::{style, Color};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

use crate::ai::split_answer;
use crate::cli::Version;
use crate::config::Config;
use crate::history::History;

/// Column at which explanations and the prompt are hard-wrapped.
pub const WRAP_WIDTH: usize = 80;

pub struct OutputFormatter {
    use_colors: bool,
}

/// Shown on stderr while waiting for the AI vendor. Hidden when stderr
/// is not a terminal.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "]),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    pub fn stop(self) {
        self.bar.finish_and_clear();
    }
}

impl OutputFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Bold command on the first line, the wrapped explanation after it.
    pub fn format_answer(&self, answer: &str) -> String {
        match split_answer(answer) {
            (command, Some(explanation)) => {
                format!("{}\n{}", self.emphasize(command), wrap(explanation, WRAP_WIDTH))
            }
            (_, None) => wrap(answer, WRAP_WIDTH),
        }
    }

    pub fn write_usage<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Usage: howto [-h] [-v] [-run] [question]")?;
        writeln!(out)?;
        writeln!(out, "A humble command-line assistant.")?;
        writeln!(out)?;
        writeln!(out, "Options:")?;
        writeln!(out, "  -h, --help      Show this help message and exit")?;
        writeln!(out, "  -v, --version   Show version information and exit")?;
        writeln!(out, "  -run            Run the last suggested command")?;
        writeln!(out, "  question        Describe the task to get a command suggestion")?;
        writeln!(out, "                  Use '+' to ask a follow up question")
    }

    /// Version, active configuration and the stored conversation.
    pub fn write_version<W: Write>(
        &self,
        out: &mut W,
        version: &Version,
        config: &Config,
        history: &History,
    ) -> io::Result<()> {
        writeln!(out, "{} {version}", self.emphasize("howto"))?;
        writeln!(out)?;
        writeln!(out, "{}", self.emphasize("## Config"))?;
        writeln!(out, "- Vendor: {}", config.vendor)?;
        writeln!(out, "- URL: {}", config.url)?;
        if config.token.is_empty() {
            writeln!(out, "- Token: (empty)")?;
        } else {
            writeln!(out, "- Token: ***")?;
        }
        writeln!(out, "- Model: {}", config.model)?;
        writeln!(out, "- Temperature: {}", config.temperature)?;
        writeln!(out, "- Timeout: {}s", config.timeout.as_secs())?;
        writeln!(out)?;
        writeln!(out, "{}", self.emphasize("## Prompt"))?;
        write!(out, "{}", wrap(&config.prompt, WRAP_WIDTH))?;
        writeln!(out)?;
        writeln!(out, "{}", self.emphasize("## History"))?;
        history.render(out)
    }

    pub fn emphasize(&self, text: &str) -> String {
        if self.use_colors {
            style(text).bold().force_styling(true).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn format_error(&self, message: &str) -> String {
        format!("{} {}", self.style_text("Error:", Color::Red), message)
    }

    fn style_text(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            style(text).fg(color).force_styling(true).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Hard-wraps each line of `text` at `width` columns on word boundaries.
/// Words longer than the width stay whole. Every output line ends with
/// a newline.
pub fn wrap(text: &str, width: usize) -> String {
    let mut output = String::new();

    for line in text.split('\n') {
        let mut line_len = 0;

        for (i, word) in line.split(' ').enumerate() {
            let word_len = word.chars().count();
            if i == 0 {
                output.push_str(word);
                line_len = word_len;
            } else if line_len + word_len + 1 <= width {
                output.push(' ');
                output.push_str(word);
                line_len += word_len + 1;
            } else {
                output.push('\n');
                output.push_str(word);
                line_len = word_len;
            }
        }

        output.push('\n');
    }

    output
}
