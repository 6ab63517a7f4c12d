//! Logging-based progress handler

use super::{ProgressEvent, ProgressHandler};
use tracing::{debug, warn};

/// Handler that logs progress events using tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

impl ProgressHandler for LoggingHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Started {
                tools_dir,
                dry_run,
                force,
            } => {
                debug!(tools_dir = %tools_dir.display(), dry_run, force, "Starting description run");
            }
            ProgressEvent::DiscoveryFailed { error } => {
                warn!(error = %error, "Tool discovery failed");
            }
            ProgressEvent::ToolsDiscovered { count } => {
                debug!(count, "Tools discovered");
            }
            ProgressEvent::NoToolsFound { tools_dir } => {
                debug!(tools_dir = %tools_dir.display(), "No tools found");
            }
            ProgressEvent::ToolStarted { tool } => {
                debug!(tool = %tool, "Evaluating tool");
            }
            ProgressEvent::ToolUpToDate { tool, artifact } => {
                debug!(tool = %tool, artifact = %artifact, "Description up to date");
            }
            ProgressEvent::ToolPlanned { tool, action } => {
                debug!(tool = %tool, action = action.verb(), "Dry run, nothing written");
            }
            ProgressEvent::GenerationStarted { tool, action } => {
                debug!(tool = %tool, action = action.verb(), "Requesting description");
            }
            ProgressEvent::ToolWritten {
                tool,
                artifact,
                action,
                elapsed,
            } => {
                debug!(
                    tool = %tool,
                    artifact = %artifact,
                    action = action.verb(),
                    elapsed_ms = elapsed.as_millis(),
                    "Description written"
                );
            }
            ProgressEvent::ToolFailed { tool, error, .. } => {
                warn!(tool = %tool, error = %error, "Description generation failed");
            }
            ProgressEvent::Completed {
                summary,
                total_time,
            } => {
                debug!(
                    generated = summary.generated,
                    updated = summary.updated,
                    skipped = summary.skipped,
                    total_time_ms = total_time.as_millis(),
                    "Run complete"
                );
            }
        }
    }
}
