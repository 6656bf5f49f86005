use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use std::process::Command;

use crate::error::HowtoError;

/// Runs a command line in a system shell and returns its trimmed stdout.
pub trait ShellRunner {
    fn run(&self, command: &str) -> Result<String>;
}

/// `sh -c` on unix, `cmd /C` on Windows.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemShell;

impl SystemShell {
    pub fn new() -> Self {
        Self
    }

    fn command(command: &str) -> Command {
        if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", command]);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.args(["-c", command]);
            cmd
        }
    }
}

impl ShellRunner for SystemShell {
    fn run(&self, command: &str) -> Result<String> {
        if command.trim().is_empty() {
            return Err(anyhow!("empty command"));
        }

        debug!("Executing: {command}");
        let output = Self::command(command)
            .output()
            .with_context(|| format!("Failed to execute command: {command}"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            info!("Command exited with {}", output.status);
            if !stderr.is_empty() {
                return Err(HowtoError::CommandFailed(stderr).into());
            }
            return Err(HowtoError::CommandStatus(output.status).into());
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
