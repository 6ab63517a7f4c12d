use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Reasons a description could not be produced for a tool
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeneratorError {
    /// The generator executable could not be found
    #[error("'{command}' command not found")]
    Unavailable { command: String },

    /// The generator ran and reported a failure
    #[error("'{command}' failed ({status}): {stderr}")]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },

    /// The generator succeeded but printed nothing usable
    #[error("'{command}' returned an empty description")]
    EmptyResult { command: String },

    /// The generator did not finish in time
    #[error("'{command}' timed out after {timeout:?}")]
    Timeout { command: String, timeout: Duration },

    /// Spawning or talking to the generator failed
    #[error("failed to run '{command}': {message}")]
    Io { command: String, message: String },
}

impl GeneratorError {
    /// Short machine-friendly label for the failure cause
    pub fn kind(&self) -> &'static str {
        match self {
            GeneratorError::Unavailable { .. } => "unavailable",
            GeneratorError::Failed { .. } => "failed",
            GeneratorError::EmptyResult { .. } => "empty_result",
            GeneratorError::Timeout { .. } => "timeout",
            GeneratorError::Io { .. } => "io",
        }
    }

    /// Remediation hint shown next to the error, if there is one
    pub fn help_message(&self) -> Option<String> {
        match self {
            GeneratorError::Unavailable { command } if command == "llm" => Some(
                "Install with: pip install llm llm-anthropic\n\
                 Then set your API key with: llm keys set anthropic"
                    .to_string(),
            ),
            GeneratorError::Unavailable { command } => Some(format!(
                "Check that '{}' is installed and on your PATH, or pass --llm-command",
                command
            )),
            GeneratorError::Timeout { .. } => {
                Some("Increase the limit with --timeout or TOOLDOCS_TIMEOUT".to_string())
            }
            _ => None,
        }
    }
}
