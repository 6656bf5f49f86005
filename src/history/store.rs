use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::history::path::history_path;

const USER_PREFIX: &str = "🧑 ";
const ASSISTANT_PREFIX: &str = "🤖 ";
const MAX_LINE_BYTES: usize = 80;
const TRUNCATED_BYTES: usize = 77;

/// Where a history lives between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Storage {
    Persistent(PathBuf),
    Transient,
}

/// Conversation between the user and the assistant. Even entries are user
/// questions, odd entries are assistant answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    storage: Storage,
    messages: Vec<String>,
}

impl History {
    /// An empty history that is never written to disk.
    pub fn transient() -> Self {
        Self::from_messages(Vec::new())
    }

    pub fn from_messages(messages: Vec<String>) -> Self {
        Self {
            storage: Storage::Transient,
            messages,
        }
    }

    /// Loads the history from the per-user config directory.
    pub fn load_default() -> Result<Self> {
        let path = history_path().context("load history")?;
        Self::load(path)
    }

    /// Loads the history from `path`. A missing file gives an empty history
    /// bound to that path.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No history at {}, starting empty", path.display());
                return Ok(Self {
                    storage: Storage::Persistent(path),
                    messages: Vec::new(),
                });
            }
            Err(e) => {
                return Err(e).with_context(|| format!("load history from {}", path.display()))
            }
        };

        let messages: Vec<String> = serde_json::from_slice(&data)
            .with_context(|| format!("load history from {}", path.display()))?;

        debug!("Loaded {} history entries", messages.len());
        Ok(Self {
            storage: Storage::Persistent(path),
            messages,
        })
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn add(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// First line of the most recent message, or an empty string.
    pub fn last_command(&self) -> &str {
        self.messages
            .last()
            .and_then(|message| message.split('\n').next())
            .unwrap_or("")
    }

    /// The last suggested command, if the conversation ends on an answer.
    /// A trailing unanswered question never counts as a command.
    pub fn answered_command(&self) -> Option<&str> {
        if self.messages.is_empty() || self.messages.len() % 2 != 0 {
            return None;
        }

        let command = self.last_command();
        if command.trim().is_empty() {
            None
        } else {
            Some(command)
        }
    }

    /// Writes the history to its file. Transient histories are skipped.
    pub fn save(&self) -> Result<()> {
        let path = match &self.storage {
            Storage::Persistent(path) => path,
            Storage::Transient => return Ok(()),
        };

        let data = serde_json::to_vec(&self.messages).context("save history")?;
        write_private(path, &data)
            .with_context(|| format!("save history to {}", path.display()))?;

        info!("Saved {} history entries", self.messages.len());
        Ok(())
    }

    /// Prints one line per message for a human reader.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.messages.is_empty() {
            return writeln!(out, "(empty)");
        }

        for (i, message) in self.messages.iter().enumerate() {
            let prefix = if i % 2 == 0 {
                USER_PREFIX
            } else {
                ASSISTANT_PREFIX
            };
            let line = format!("{prefix}{}", message.replace('\n', " "));
            writeln!(out, "{}", truncate(&line))?;
        }

        Ok(())
    }
}

/// Lines over 80 bytes keep at most 77 bytes, cut on a char boundary.
fn truncate(line: &str) -> String {
    if line.len() <= MAX_LINE_BYTES {
        return line.to_string();
    }

    let mut end = TRUNCATED_BYTES;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &line[..end])
}

#[cfg(unix)]
fn write_private(path: &Path, data: &[u8]) -> io::Result<()> {
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(data)
}

#[cfg(not(unix))]
fn write_private(path: &Path, data: &[u8]) -> io::Result<()> {
    fs::write(path, data)
}
