//! Command handlers
//!
//! Each handler returns the process exit code. Per-tool failures never
//! change it; only unusable configuration does.

use super::commands::{CliArgs, OutputFormatArg};
use super::output::OutputFormatter;
use crate::config::ToolDocsConfig;
use crate::fs::RealFileSystem;
use crate::generator::DescriptionGenerator;
use crate::progress::{CompositeHandler, ConsoleHandler, LoggingHandler};
use crate::regen::RegenerationEngine;
use std::sync::Arc;
use tracing::debug;

/// Loads configuration from the environment and applies the CLI overrides
pub fn resolve_config(args: &CliArgs) -> Result<ToolDocsConfig, String> {
    let mut config = ToolDocsConfig::from_env().map_err(|e| e.to_string())?;
    args.apply_to(&mut config);
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

pub async fn handle_generate(args: &CliArgs) -> i32 {
    let config = match resolve_config(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    debug!("{}", config);

    let generator = config.create_generator();
    debug!(
        generator = generator.name(),
        model = ?generator.model_info(),
        timeout_secs = config.timeout_secs,
        "Description generator configured"
    );

    // Structured formats own stdout; per-tool lines would corrupt them.
    let mut progress = CompositeHandler::new().with(Arc::new(LoggingHandler));
    if args.format == OutputFormatArg::Human {
        progress = progress.with(Arc::new(ConsoleHandler::new(args.verbose, args.quiet)));
    }

    let engine = RegenerationEngine::new(Arc::new(RealFileSystem::new()), Arc::new(generator))
        .with_progress(Arc::new(progress));
    let report = engine.run(&config.tools_dir, &args.run_options()).await;

    match OutputFormatter::new(args.format.into()).format(&report) {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}
