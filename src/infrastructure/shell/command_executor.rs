//! Command executor for running the package-manager install
//!
//! Commands run through the platform shell with the parent's stdio, so
//! package-manager progress shows up in the invoking terminal.

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use crate::error::SetupError;

/// Trait for executing shell commands
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Execute a shell command in the given working directory
    async fn execute(&self, command: &str, working_dir: &Path)
    -> Result<CommandResult, SetupError>;
}

/// Result of command execution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// `-1` when the process was terminated by a signal
    pub exit_code: i32,
}

impl CommandResult {
    /// Check if the command was successful
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Default command executor using tokio::process
pub struct ShellCommandExecutor;

impl ShellCommandExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ShellCommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandExecutor for ShellCommandExecutor {
    async fn execute(
        &self,
        command: &str,
        working_dir: &Path,
    ) -> Result<CommandResult, SetupError> {
        let (shell, shell_arg) = if cfg!(target_os = "windows") {
            ("cmd", "/C")
        } else {
            ("sh", "-c")
        };

        tracing::debug!(command = %command, cwd = %working_dir.display(), "Spawning command");

        let status = Command::new(shell)
            .arg(shell_arg)
            .arg(command)
            .current_dir(working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| SetupError::CommandSpawn {
                command: command.to_string(),
                source,
            })?;

        Ok(CommandResult {
            exit_code: status.code().unwrap_or(-1),
        })
    }
}

/// Mock command executor for testing
#[cfg(test)]
pub struct MockCommandExecutor {
    pub results: std::collections::HashMap<String, i32>,
    pub calls: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl MockCommandExecutor {
    pub fn new() -> Self {
        Self {
            results: std::collections::HashMap::new(),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn with_result(mut self, command: &str, exit_code: i32) -> Self {
        self.results.insert(command.to_string(), exit_code);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl CommandExecutor for MockCommandExecutor {
    async fn execute(
        &self,
        command: &str,
        _working_dir: &Path,
    ) -> Result<CommandResult, SetupError> {
        self.calls.lock().unwrap().push(command.to_string());
        self.results
            .get(command)
            .map(|&exit_code| CommandResult { exit_code })
            .ok_or_else(|| SetupError::CommandSpawn {
                command: command.to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "mock executor has no result for command",
                ),
            })
    }
}
