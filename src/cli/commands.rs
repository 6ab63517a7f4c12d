use crate::config::ToolDocsConfig;
use crate::regen::{RegenerationPolicy, RunOptions};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Generates one-sentence descriptions for HTML tools with an LLM
#[derive(Parser, Debug)]
#[command(
    name = "tooldocs",
    about = "Generate descriptions for HTML tools using an LLM",
    version,
    author,
    long_about = "tooldocs scans a directory for HTML tools and writes a one-sentence \
                  description next to each one (clock.html -> clock.md) using the `llm` \
                  command-line tool. Descriptions are regenerated only when missing or \
                  older than their tool.\n\n\
                  Examples:\n  \
                  tooldocs\n  \
                  tooldocs --dry-run\n  \
                  tooldocs --verbose\n  \
                  tooldocs --force --model claude-haiku-4.5"
)]
pub struct CliArgs {
    #[arg(
        long,
        value_name = "DIR",
        help = "Directory containing the HTML tools (default: public/tools)"
    )]
    pub tools_dir: Option<PathBuf>,

    #[arg(long, help = "Show what would be done without calling the LLM or writing files")]
    pub dry_run: bool,

    #[arg(long, help = "Regenerate every description regardless of timestamps")]
    pub force: bool,

    #[arg(
        long,
        value_enum,
        default_value = "timestamp",
        help = "How stale descriptions are detected"
    )]
    pub policy: PolicyArg,

    #[arg(
        short = 'm',
        long,
        value_name = "MODEL",
        help = "Model passed to the LLM command (default: claude-haiku-4.5)"
    )]
    pub model: Option<String>,

    #[arg(
        long,
        value_name = "COMMAND",
        help = "Executable used to generate descriptions (default: llm)"
    )]
    pub llm_command: Option<String>,

    #[arg(
        long = "llm-arg",
        value_name = "ARG",
        allow_hyphen_values = true,
        help = "Extra argument placed before the model flags (repeatable)"
    )]
    pub llm_args: Vec<String>,

    #[arg(long, value_name = "SECONDS", help = "Per-tool timeout in seconds (default: 120)")]
    pub timeout: Option<u64>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Summary output format"
    )]
    pub format: OutputFormatArg,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Show per-tool progress")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - only failures and the summary"
    )]
    pub quiet: bool,
}

impl CliArgs {
    /// Overrides environment-derived settings with explicit flags
    pub fn apply_to(&self, config: &mut ToolDocsConfig) {
        if let Some(dir) = &self.tools_dir {
            config.tools_dir = dir.clone();
        }
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(command) = &self.llm_command {
            config.llm_command = command.clone();
        }
        if !self.llm_args.is_empty() {
            config.llm_args = self.llm_args.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.to_lowercase();
        }
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            force: self.force,
            dry_run: self.dry_run,
            policy: self.policy.into(),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyArg {
    /// Regenerate when the tool is newer than its description
    Timestamp,
    /// Only generate missing descriptions
    ExistenceOnly,
}

impl From<PolicyArg> for RegenerationPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Timestamp => RegenerationPolicy::Timestamp,
            PolicyArg::ExistenceOnly => RegenerationPolicy::ExistenceOnly,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Human,
    Json,
    Yaml,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => super::output::OutputFormat::Human,
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
        }
    }
}
