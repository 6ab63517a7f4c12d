//! User-facing progress lines on stdout

use super::{ProgressEvent, ProgressHandler};

/// Prints the per-tool report lines a user reads while a run progresses.
///
/// Quiet mode keeps only failures; verbose mode adds the per-tool
/// evaluation lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleHandler {
    verbose: bool,
    quiet: bool,
}

impl ConsoleHandler {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// The line printed for `event`, if any
    pub fn render(&self, event: &ProgressEvent) -> Option<String> {
        match event {
            ProgressEvent::DiscoveryFailed { error } => Some(format!("Error: {}", error)),
            ProgressEvent::ToolFailed { tool, error, help } => {
                let mut line = format!("✗ Failed to generate description for {}: {}", tool, error);
                if let Some(help) = help {
                    for hint in help.lines() {
                        line.push_str("\n  ");
                        line.push_str(hint);
                    }
                }
                Some(line)
            }
            _ if self.quiet => None,
            ProgressEvent::ToolsDiscovered { count } => Some(format!("Found {} HTML tool(s)", count)),
            ProgressEvent::NoToolsFound { tools_dir } => {
                Some(format!("No HTML tools found in {}/", tools_dir.display()))
            }
            ProgressEvent::ToolPlanned { tool, action } => {
                Some(format!("Would {} description for {}", action.verb(), tool))
            }
            ProgressEvent::ToolWritten {
                artifact, action, ..
            } => Some(format!("✓ {} {}", action.past(), artifact)),
            ProgressEvent::ToolStarted { tool } if self.verbose => {
                Some(format!("\nProcessing {}...", tool))
            }
            ProgressEvent::ToolUpToDate { artifact, .. } if self.verbose => {
                Some(format!("  Skipping - {} is up to date", artifact))
            }
            ProgressEvent::GenerationStarted { action, .. } if self.verbose => {
                Some(format!("  {} description...", action.progressive()))
            }
            _ => None,
        }
    }
}

impl ProgressHandler for ConsoleHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        let Some(line) = self.render(event) else {
            return;
        };
        match event {
            ProgressEvent::DiscoveryFailed { .. } => eprintln!("{}", line),
            _ => println!("{}", line),
        }
    }
}
