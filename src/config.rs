//! Configuration management for tooldocs
//!
//! Settings are loaded from environment variables with sensible defaults;
//! command-line flags override them afterwards.
//!
//! # Environment Variables
//!
//! - `TOOLDOCS_TOOLS_DIR`: Directory scanned for tools - default: "public/tools"
//! - `TOOLDOCS_LLM_COMMAND`: Executable used to generate descriptions - default: "llm"
//! - `TOOLDOCS_LLM_ARGS`: Whitespace-separated arguments placed before the model flags
//! - `TOOLDOCS_MODEL`: Model passed to the executable via `-m` - default: "claude-haiku-4.5"
//! - `TOOLDOCS_TIMEOUT`: Per-tool timeout in seconds - default: "120"
//! - `TOOLDOCS_LOG_LEVEL`: Logging level - default: "info"
//!
//! The `llm` tool reads its own API keys (`llm keys set anthropic`).
//!
//! # Example
//!
//! ```no_run
//! use tooldocs::ToolDocsConfig;
//!
//! let config = ToolDocsConfig::default();
//! config.validate().expect("Invalid configuration");
//! let generator = config.create_generator();
//! ```

use crate::generator::{LlmCliGenerator, DEFAULT_LLM_COMMAND, DEFAULT_MODEL};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_TOOLS_DIR: &str = "public/tools";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_TIMEOUT_SECS: u64 = 120;
const MAX_TIMEOUT_SECS: u64 = 600;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    /// Failed to parse configuration value
    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDocsConfig {
    /// Directory containing the HTML tools
    pub tools_dir: PathBuf,

    /// Executable invoked once per tool
    pub llm_command: String,

    /// Arguments placed before `-m <model>`
    pub llm_args: Vec<String>,

    /// Model name handed to the executable
    pub model: String,

    /// Per-tool timeout in seconds
    pub timeout_secs: u64,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ToolDocsConfig {
    /// Loads `TOOLDOCS_*` environment variables, falling back to defaults.
    ///
    /// A timeout that does not parse falls back to the default; use
    /// [`ToolDocsConfig::from_env`] to surface the parse error instead.
    fn default() -> Self {
        Self::from_env().unwrap_or_else(|_| Self::from_env_lenient())
    }
}

impl ToolDocsConfig {
    /// Loads configuration from the environment, rejecting unparsable values
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::from_env_lenient();
        if let Ok(raw) = env::var("TOOLDOCS_TIMEOUT") {
            config.timeout_secs = raw.trim().parse::<u64>().map_err(|e| ConfigError::ParseError {
                field: "TOOLDOCS_TIMEOUT".to_string(),
                error: e.to_string(),
            })?;
        }
        Ok(config)
    }

    fn from_env_lenient() -> Self {
        let tools_dir = env::var("TOOLDOCS_TOOLS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_TOOLS_DIR));

        let llm_command =
            env::var("TOOLDOCS_LLM_COMMAND").unwrap_or_else(|_| DEFAULT_LLM_COMMAND.to_string());

        let llm_args = env::var("TOOLDOCS_LLM_ARGS")
            .map(|raw| raw.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();

        let model = env::var("TOOLDOCS_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let log_level = env::var("TOOLDOCS_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            tools_dir,
            llm_command,
            llm_args,
            model,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_level,
        }
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the timeout is out of range, the command or
    /// model is empty, or the log level is unknown.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "Timeout must be at least 1 second".to_string(),
            ));
        }
        if self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::ValidationFailed(
                "Timeout cannot exceed 10 minutes".to_string(),
            ));
        }

        if self.llm_command.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "LLM command cannot be empty".to_string(),
            ));
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Model cannot be empty".to_string(),
            ));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Builds the `llm` CLI generator described by this configuration
    pub fn create_generator(&self) -> LlmCliGenerator {
        LlmCliGenerator::new(self.llm_command.clone(), self.model.clone())
            .with_extra_args(self.llm_args.clone())
            .with_timeout(self.timeout())
    }
}

impl fmt::Display for ToolDocsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "tooldocs Configuration:")?;
        writeln!(f, "  Tools Dir: {}", self.tools_dir.display())?;
        writeln!(f, "  LLM Command: {}", self.llm_command)?;
        if !self.llm_args.is_empty() {
            writeln!(f, "  LLM Args: {}", self.llm_args.join(" "))?;
        }
        writeln!(f, "  Model: {}", self.model)?;
        writeln!(f, "  Timeout: {}s", self.timeout_secs)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}
