//! Progress handler trait and events

use crate::regen::{Action, RunSummary};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Events emitted while a run progresses
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Run started
    Started {
        tools_dir: PathBuf,
        dry_run: bool,
        force: bool,
    },

    /// The tools directory could not be listed; the run ends here
    DiscoveryFailed { error: String },

    /// Discovery finished with at least one tool
    ToolsDiscovered { count: usize },

    /// Discovery finished with no candidate tools
    NoToolsFound { tools_dir: PathBuf },

    /// Evaluation of a tool began
    ToolStarted { tool: String },

    /// The tool's description is current
    ToolUpToDate { tool: String, artifact: String },

    /// Dry run: the description would be (re)generated
    ToolPlanned { tool: String, action: Action },

    /// The generator is about to be invoked
    GenerationStarted { tool: String, action: Action },

    /// A description was written
    ToolWritten {
        tool: String,
        artifact: String,
        action: Action,
        elapsed: Duration,
    },

    /// No description could be produced; the tool counts as skipped
    ToolFailed {
        tool: String,
        error: String,
        help: Option<String>,
    },

    /// Run finished
    Completed {
        summary: RunSummary,
        total_time: Duration,
    },
}

/// Trait for handling progress events during a run
pub trait ProgressHandler: Send + Sync {
    /// Called when a progress event occurs
    fn on_progress(&self, event: &ProgressEvent);
}

/// No-op handler that ignores all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHandler;

impl ProgressHandler for NoOpHandler {
    fn on_progress(&self, _event: &ProgressEvent) {}
}

/// Forwards every event to each inner handler in order
#[derive(Default, Clone)]
pub struct CompositeHandler {
    handlers: Vec<Arc<dyn ProgressHandler>>,
}

impl CompositeHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, handler: Arc<dyn ProgressHandler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl ProgressHandler for CompositeHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        for handler in &self.handlers {
            handler.on_progress(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingHandler {
        count: Arc<AtomicUsize>,
    }

    impl ProgressHandler for CountingHandler {
        fn on_progress(&self, _event: &ProgressEvent) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpHandler;
        handler.on_progress(&ProgressEvent::ToolsDiscovered { count: 1 });
    }

    #[test]
    fn test_composite_fans_out() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let handler = CompositeHandler::new()
            .with(Arc::new(CountingHandler {
                count: first.clone(),
            }))
            .with(Arc::new(CountingHandler {
                count: second.clone(),
            }));

        handler.on_progress(&ProgressEvent::ToolStarted {
            tool: "a.html".to_string(),
        });
        handler.on_progress(&ProgressEvent::Completed {
            summary: RunSummary::default(),
            total_time: Duration::from_millis(5),
        });

        assert_eq!(handler.len(), 2);
        assert_eq!(first.load(Ordering::SeqCst), 2);
        assert_eq!(second.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_event_debug() {
        let event = ProgressEvent::ToolPlanned {
            tool: "a.html".to_string(),
            action: Action::Update,
        };
        let debug_str = format!("{:?}", event);
        assert!(debug_str.contains("ToolPlanned"));
        assert!(debug_str.contains("Update"));
    }
}
