//! Generator backed by the `llm` command-line tool
//!
//! Each call spawns `<command> [extra args] -m <model> --system <prompt> -`,
//! streams the tool content on stdin and takes the trimmed stdout as the
//! description.

use super::client::DescriptionGenerator;
use super::error::GeneratorError;
use super::prompt::{DEFAULT_LLM_COMMAND, DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Clone)]
pub struct LlmCliGenerator {
    command: String,
    extra_args: Vec<String>,
    model: String,
    system_prompt: String,
    timeout: Duration,
}

impl LlmCliGenerator {
    pub fn new(command: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            extra_args: Vec::new(),
            model: model.into(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Arguments placed before the model flags, e.g. a script path when the
    /// command is an interpreter.
    pub fn with_extra_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn args(&self) -> Vec<String> {
        let mut args = self.extra_args.clone();
        args.extend([
            "-m".to_string(),
            self.model.clone(),
            "--system".to_string(),
            self.system_prompt.clone(),
            "-".to_string(),
        ]);
        args
    }

    fn io_error(&self, message: impl std::fmt::Display) -> GeneratorError {
        GeneratorError::Io {
            command: self.command.clone(),
            message: message.to_string(),
        }
    }
}

impl Default for LlmCliGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_LLM_COMMAND, DEFAULT_MODEL)
    }
}

#[async_trait]
impl DescriptionGenerator for LlmCliGenerator {
    async fn describe(&self, content: &str) -> Result<String, GeneratorError> {
        let started = Instant::now();
        debug!(command = %self.command, model = %self.model, bytes = content.len(), "Invoking description generator");

        let mut child = Command::new(&self.command)
            .args(self.args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => GeneratorError::Unavailable {
                    command: self.command.clone(),
                },
                _ => self.io_error(e),
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| self.io_error("stdin was not captured"))?;
        let input = content.to_owned();
        let writer = tokio::spawn(async move {
            stdin.write_all(input.as_bytes()).await?;
            stdin.shutdown().await
        });

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| GeneratorError::Timeout {
                command: self.command.clone(),
                timeout: self.timeout,
            })?
            .map_err(|e| self.io_error(e))?;

        // A generator may exit before draining stdin; its exit status decides.
        if let Ok(Err(e)) = writer.await {
            debug!(command = %self.command, error = %e, "Generator closed stdin early");
        }

        debug!(
            command = %self.command,
            status = %output.status,
            elapsed_ms = started.elapsed().as_millis(),
            "Description generator finished"
        );

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(GeneratorError::Failed {
                command: self.command.clone(),
                status: output.status.to_string(),
                stderr: if stderr.is_empty() {
                    "no error output".to_string()
                } else {
                    stderr
                },
            });
        }

        let description = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if description.is_empty() {
            return Err(GeneratorError::EmptyResult {
                command: self.command.clone(),
            });
        }

        Ok(description)
    }

    fn name(&self) -> &str {
        &self.command
    }

    fn model_info(&self) -> Option<String> {
        Some(self.model.clone())
    }
}
