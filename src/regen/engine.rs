//! Batch regeneration engine
//!
//! Processes tools strictly one after another. Every per-tool failure is
//! converted into a skip plus a report line; only a discovery failure ends
//! the run early.

use super::discovery::{discover_tools, DiscoveryError, DiscoveryRules, UnreadableTool};
use super::policy::{decide, Decision, RegenerationPolicy, RunOptions};
use super::types::{
    Action, DescriptionArtifact, OutcomeKind, RunReport, RunStatus, ToolOutcome, ToolSource,
};
use crate::fs::FileSystem;
use crate::generator::{DescriptionGenerator, GeneratorError};
use crate::progress::{NoOpHandler, ProgressEvent, ProgressHandler};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{info, warn};

/// Why a tool that needed a description did not get one
#[derive(Debug, Error)]
pub enum RegenerationFailure {
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error("failed to read {}: {message}", .path.display())]
    ReadSource { path: PathBuf, message: String },

    #[error("cannot read modification time of {}: {message}", .path.display())]
    Metadata { path: PathBuf, message: String },

    #[error("failed to write {}: {message}", .path.display())]
    WriteArtifact { path: PathBuf, message: String },
}

impl RegenerationFailure {
    pub fn kind(&self) -> &'static str {
        match self {
            RegenerationFailure::Generator(e) => e.kind(),
            RegenerationFailure::ReadSource { .. } => "read_source",
            RegenerationFailure::Metadata { .. } => "metadata",
            RegenerationFailure::WriteArtifact { .. } => "write_artifact",
        }
    }

    pub fn help_message(&self) -> Option<String> {
        match self {
            RegenerationFailure::Generator(e) => e.help_message(),
            _ => None,
        }
    }
}

pub struct RegenerationEngine {
    fs: Arc<dyn FileSystem>,
    generator: Arc<dyn DescriptionGenerator>,
    progress: Arc<dyn ProgressHandler>,
    rules: DiscoveryRules,
}

impl RegenerationEngine {
    pub fn new(fs: Arc<dyn FileSystem>, generator: Arc<dyn DescriptionGenerator>) -> Self {
        Self {
            fs,
            generator,
            progress: Arc::new(NoOpHandler),
            rules: DiscoveryRules::default(),
        }
    }

    pub fn with_progress(mut self, progress: Arc<dyn ProgressHandler>) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_rules(mut self, rules: DiscoveryRules) -> Self {
        self.rules = rules;
        self
    }

    fn emit(&self, event: ProgressEvent) {
        self.progress.on_progress(&event);
    }

    /// Runs one batch over `tools_dir`.
    ///
    /// Never fails: discovery problems are reflected in
    /// [`RunReport::status`] and per-tool problems in the outcomes.
    pub async fn run(&self, tools_dir: &Path, options: &RunOptions) -> RunReport {
        let timer = Instant::now();
        let mut report = RunReport::start(tools_dir, options);

        self.emit(ProgressEvent::Started {
            tools_dir: tools_dir.to_path_buf(),
            dry_run: options.dry_run,
            force: options.force,
        });

        if options.force && options.policy == RegenerationPolicy::ExistenceOnly {
            warn!("--force has no effect with the existence-only policy");
        }

        let discovery = match discover_tools(self.fs.as_ref(), tools_dir, &self.rules) {
            Ok(discovery) => discovery,
            Err(e) => {
                let status = match e {
                    DiscoveryError::DirectoryNotFound(_) | DiscoveryError::NotADirectory(_) => {
                        RunStatus::DirectoryNotFound
                    }
                    DiscoveryError::ReadFailed { .. } => RunStatus::DirectoryUnreadable,
                };
                self.emit(ProgressEvent::DiscoveryFailed {
                    error: e.to_string(),
                });
                return report.finish(status);
            }
        };

        if discovery.is_empty() {
            self.emit(ProgressEvent::NoToolsFound {
                tools_dir: tools_dir.to_path_buf(),
            });
            return report.finish(RunStatus::NoToolsFound);
        }

        self.emit(ProgressEvent::ToolsDiscovered {
            count: discovery.candidates(),
        });

        for tool in &discovery.unreadable {
            report.summary.record_skip();
            report.outcomes.push(self.report_unreadable(tool));
        }

        for source in &discovery.sources {
            let outcome = self.process(source, options).await;
            match &outcome.kind {
                OutcomeKind::Planned { action } | OutcomeKind::Written { action } => {
                    report.summary.record(*action)
                }
                OutcomeKind::UpToDate | OutcomeKind::Failed { .. } => report.summary.record_skip(),
            }
            report.outcomes.push(outcome);
        }

        self.emit(ProgressEvent::Completed {
            summary: report.summary,
            total_time: timer.elapsed(),
        });
        info!(
            generated = report.summary.generated,
            updated = report.summary.updated,
            skipped = report.summary.skipped,
            dry_run = options.dry_run,
            "Description run finished"
        );

        report.finish(RunStatus::Completed)
    }

    fn report_unreadable(&self, tool: &UnreadableTool) -> ToolOutcome {
        let failure = RegenerationFailure::Metadata {
            path: tool.path.clone(),
            message: tool.message.clone(),
        };
        self.emit(ProgressEvent::ToolFailed {
            tool: tool.name.clone(),
            error: failure.to_string(),
            help: None,
        });
        ToolOutcome {
            tool: tool.name.clone(),
            artifact: tool.path.with_extension(&self.rules.artifact_extension),
            kind: OutcomeKind::Failed {
                cause: failure.kind().to_string(),
                message: failure.to_string(),
            },
        }
    }

    async fn process(&self, source: &ToolSource, options: &RunOptions) -> ToolOutcome {
        let artifact = DescriptionArtifact::observe(
            self.fs.as_ref(),
            source.artifact_path(&self.rules.artifact_extension),
        );
        self.emit(ProgressEvent::ToolStarted {
            tool: source.name.clone(),
        });

        let kind = match decide(source, &artifact, options) {
            Decision::Skip => {
                self.emit(ProgressEvent::ToolUpToDate {
                    tool: source.name.clone(),
                    artifact: artifact.file_name(),
                });
                OutcomeKind::UpToDate
            }
            Decision::Regenerate(action) if options.dry_run => {
                self.emit(ProgressEvent::ToolPlanned {
                    tool: source.name.clone(),
                    action,
                });
                OutcomeKind::Planned { action }
            }
            Decision::Regenerate(action) => self.regenerate_and_report(source, &artifact, action).await,
        };

        ToolOutcome {
            tool: source.name.clone(),
            artifact: artifact.path,
            kind,
        }
    }

    async fn regenerate_and_report(
        &self,
        source: &ToolSource,
        artifact: &DescriptionArtifact,
        action: Action,
    ) -> OutcomeKind {
        self.emit(ProgressEvent::GenerationStarted {
            tool: source.name.clone(),
            action,
        });

        let started = Instant::now();
        match self.regenerate(source, artifact).await {
            Ok(()) => {
                self.emit(ProgressEvent::ToolWritten {
                    tool: source.name.clone(),
                    artifact: artifact.file_name(),
                    action,
                    elapsed: started.elapsed(),
                });
                OutcomeKind::Written { action }
            }
            Err(failure) => {
                self.emit(ProgressEvent::ToolFailed {
                    tool: source.name.clone(),
                    error: failure.to_string(),
                    help: failure.help_message(),
                });
                OutcomeKind::Failed {
                    cause: failure.kind().to_string(),
                    message: failure.to_string(),
                }
            }
        }
    }

    /// Produces and persists one description. The artifact is only written
    /// once a usable description is in hand.
    async fn regenerate(
        &self,
        source: &ToolSource,
        artifact: &DescriptionArtifact,
    ) -> Result<(), RegenerationFailure> {
        let content =
            self.fs
                .read_to_string(&source.path)
                .map_err(|e| RegenerationFailure::ReadSource {
                    path: source.path.clone(),
                    message: format!("{:#}", e),
                })?;

        let description = self.generator.describe(&content).await?;
        let description = description.trim();
        if description.is_empty() {
            return Err(GeneratorError::EmptyResult {
                command: self.generator.name().to_string(),
            }
            .into());
        }

        self.fs
            .write(&artifact.path, &format!("{}\n", description))
            .map_err(|e| RegenerationFailure::WriteArtifact {
                path: artifact.path.clone(),
                message: format!("{:#}", e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{MockFailure, MockFileSystem};
    use crate::generator::{MockGenerator, MockResponse};
    use std::sync::Mutex;
    use std::time::Duration;

    const TOOLS: &str = "/mock/public/tools";

    struct RecordingHandler {
        events: Mutex<Vec<ProgressEvent>>,
    }

    impl RecordingHandler {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                events: Mutex::new(Vec::new()),
            })
        }

        fn events(&self) -> Vec<ProgressEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl ProgressHandler for RecordingHandler {
        fn on_progress(&self, event: &ProgressEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    fn engine(fs: &Arc<MockFileSystem>, generator: &Arc<MockGenerator>) -> RegenerationEngine {
        RegenerationEngine::new(fs.clone(), generator.clone())
    }

    fn tools() -> &'static Path {
        Path::new(TOOLS)
    }

    #[tokio::test]
    async fn test_generates_missing_description() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_file("public/tools/a.html", "<h1>A</h1>");
        let generator = Arc::new(MockGenerator::always("Converts things."));

        let report = engine(&fs, &generator).run(tools(), &RunOptions::default()).await;

        assert_eq!(report.status, RunStatus::Completed);
        assert_eq!(report.summary.generated, 1);
        assert_eq!(report.summary.updated, 0);
        assert_eq!(report.summary.skipped, 0);
        assert_eq!(
            fs.contents("public/tools/a.md").as_deref(),
            Some("Converts things.\n")
        );
        assert_eq!(generator.inputs(), vec!["<h1>A</h1>"]);
    }

    #[tokio::test]
    async fn test_updates_stale_description() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_file("public/tools/a.md", "Old.\n");
        fs.advance(Duration::from_secs(60));
        fs.add_file("public/tools/a.html", "<h1>A v2</h1>");
        fs.advance(Duration::from_secs(1));
        let generator = Arc::new(MockGenerator::always("New."));

        let report = engine(&fs, &generator).run(tools(), &RunOptions::default()).await;

        assert_eq!(report.summary.updated, 1);
        assert_eq!(report.summary.generated, 0);
        assert_eq!(fs.contents("public/tools/a.md").as_deref(), Some("New.\n"));
    }

    #[tokio::test]
    async fn test_existence_only_keeps_stale_description() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_file("public/tools/a.md", "Old.\n");
        fs.advance(Duration::from_secs(60));
        fs.add_file("public/tools/a.html", "<h1>A v2</h1>");
        let generator = Arc::new(MockGenerator::always("New."));
        let options = RunOptions {
            policy: RegenerationPolicy::ExistenceOnly,
            ..RunOptions::default()
        };

        let report = engine(&fs, &generator).run(tools(), &options).await;

        assert_eq!(report.summary.skipped, 1);
        assert_eq!(report.summary.succeeded(), 0);
        assert_eq!(fs.contents("public/tools/a.md").as_deref(), Some("Old.\n"));
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_equal_timestamps_skip() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_file("public/tools/a.html", "<h1>A</h1>");
        fs.add_file("public/tools/a.md", "Current.\n");
        let generator = Arc::new(MockGenerator::always("New."));

        let report = engine(&fs, &generator).run(tools(), &RunOptions::default()).await;

        assert_eq!(report.summary.skipped, 1);
        assert_eq!(report.outcomes[0].kind, OutcomeKind::UpToDate);
        assert_eq!(fs.write_count(), 0);
    }

    #[tokio::test]
    async fn test_force_regenerates_current_descriptions() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_file("public/tools/a.html", "a");
        fs.add_file("public/tools/b.html", "b");
        fs.advance(Duration::from_secs(60));
        fs.add_file("public/tools/a.md", "Current.\n");
        let generator = Arc::new(MockGenerator::always("Forced."));
        let options = RunOptions {
            force: true,
            ..RunOptions::default()
        };

        let report = engine(&fs, &generator).run(tools(), &options).await;

        assert_eq!(report.summary.updated, 1);
        assert_eq!(report.summary.generated, 1);
        assert_eq!(fs.contents("public/tools/a.md").as_deref(), Some("Forced.\n"));
        assert_eq!(fs.contents("public/tools/b.md").as_deref(), Some("Forced.\n"));
    }

    #[tokio::test]
    async fn test_second_run_is_idempotent() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_file("public/tools/a.html", "a");
        fs.add_file("public/tools/b.html", "b");
        fs.advance(Duration::from_secs(1));
        let generator = Arc::new(MockGenerator::always("Desc."));
        let engine = engine(&fs, &generator);

        let first = engine.run(tools(), &RunOptions::default()).await;
        let second = engine.run(tools(), &RunOptions::default()).await;

        assert_eq!(first.summary.generated, 2);
        assert_eq!(second.summary.succeeded(), 0);
        assert_eq!(second.summary.skipped, 2);
        assert_eq!(generator.call_count(), 2);
        assert_eq!(fs.write_count(), 2);
    }

    #[tokio::test]
    async fn test_dry_run_counts_without_side_effects() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_file("public/tools/stale.md", "Old.\n");
        fs.add_file("public/tools/current.html", "c");
        fs.add_file("public/tools/current.md", "Current.\n");
        fs.advance(Duration::from_secs(60));
        fs.add_file("public/tools/stale.html", "s");
        fs.add_file("public/tools/new.html", "n");
        let generator = Arc::new(MockGenerator::always("Desc."));

        let dry = RunOptions {
            dry_run: true,
            ..RunOptions::default()
        };
        let dry_report = engine(&fs, &generator).run(tools(), &dry).await;

        assert_eq!(dry_report.summary.generated, 1);
        assert_eq!(dry_report.summary.updated, 1);
        assert_eq!(dry_report.summary.skipped, 1);
        assert_eq!(fs.write_count(), 0);
        assert_eq!(generator.call_count(), 0);
        assert_eq!(fs.contents("public/tools/stale.md").as_deref(), Some("Old.\n"));
        assert!(fs.contents("public/tools/new.md").is_none());

        fs.advance(Duration::from_secs(1));
        let real_report = engine(&fs, &generator).run(tools(), &RunOptions::default()).await;
        assert_eq!(real_report.summary, dry_report.summary);
    }

    #[tokio::test]
    async fn test_one_failure_among_three() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_file("public/tools/a.html", "a");
        fs.add_file("public/tools/b.html", "b");
        fs.add_file_with_mtime(
            "public/tools/b.md",
            "Keep me.\n",
            fs.now() - Duration::from_secs(60),
        );
        fs.add_file("public/tools/c.html", "c");
        let generator = Arc::new(MockGenerator::new());
        generator.add_responses([
            MockResponse::text("A."),
            MockResponse::failed("rate limited"),
            MockResponse::text("C."),
        ]);

        let report = engine(&fs, &generator).run(tools(), &RunOptions::default()).await;

        assert_eq!(report.summary.succeeded(), 2);
        assert_eq!(report.summary.skipped, 1);
        assert_eq!(fs.contents("public/tools/b.md").as_deref(), Some("Keep me.\n"));
        assert_eq!(fs.contents("public/tools/c.md").as_deref(), Some("C.\n"));

        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].tool, "b.html");
        match &failures[0].kind {
            OutcomeKind::Failed { cause, message } => {
                assert_eq!(cause, "failed");
                assert!(message.contains("rate limited"));
            }
            other => panic!("Expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failed_generation_leaves_missing_artifact_absent() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_file("public/tools/a.html", "a");
        let generator = Arc::new(MockGenerator::new());
        generator.add_response(MockResponse::error(GeneratorError::Unavailable {
            command: "llm".to_string(),
        }));
        let recorder = RecordingHandler::new();

        let report = engine(&fs, &generator)
            .with_progress(recorder.clone())
            .run(tools(), &RunOptions::default())
            .await;

        assert_eq!(report.summary.skipped, 1);
        assert!(!fs.exists(Path::new("/mock/public/tools/a.md")));
        let help = recorder.events().into_iter().find_map(|e| match e {
            ProgressEvent::ToolFailed { help, .. } => help,
            _ => None,
        });
        assert!(help.unwrap().contains("pip install llm"));
    }

    fn failure_cause(outcome: &ToolOutcome) -> Option<&str> {
        match &outcome.kind {
            OutcomeKind::Failed { cause, .. } => Some(cause.as_str()),
            _ => None,
        }
    }

    #[tokio::test]
    async fn test_unwritable_artifact_is_skipped_and_batch_continues() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_dir("public/tools/a.md");
        fs.advance(Duration::from_secs(60));
        fs.add_file("public/tools/a.html", "a");
        fs.add_file("public/tools/b.html", "b");
        let generator = Arc::new(MockGenerator::always("Desc."));

        let report = engine(&fs, &generator).run(tools(), &RunOptions::default()).await;

        assert_eq!(report.summary.skipped, 1);
        assert_eq!(report.summary.generated, 1);
        assert_eq!(report.summary.updated, 0);
        assert_eq!(failure_cause(&report.outcomes[0]), Some("write_artifact"));
        assert!(fs.is_dir(Path::new("/mock/public/tools/a.md")));
        assert_eq!(fs.contents("public/tools/b.md").as_deref(), Some("Desc.\n"));
        assert_eq!(generator.call_count(), 2);
    }

    #[tokio::test]
    async fn test_unreadable_source_never_reaches_generator() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_file("public/tools/a.html", "a");
        fs.fail("public/tools/a.html", MockFailure::Read);
        let generator = Arc::new(MockGenerator::always("Desc."));

        let report = engine(&fs, &generator).run(tools(), &RunOptions::default()).await;

        assert_eq!(report.summary.skipped, 1);
        assert_eq!(failure_cause(&report.outcomes[0]), Some("read_source"));
        assert_eq!(generator.call_count(), 0);
        assert_eq!(fs.write_count(), 0);
    }

    #[tokio::test]
    async fn test_unlistable_directory_is_unreadable() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_file("public/tools/a.html", "a");
        fs.fail("public/tools", MockFailure::ReadDir);
        let generator = Arc::new(MockGenerator::always("Desc."));
        let recorder = RecordingHandler::new();

        let report = engine(&fs, &generator)
            .with_progress(recorder.clone())
            .run(tools(), &RunOptions::default())
            .await;

        assert_eq!(report.status, RunStatus::DirectoryUnreadable);
        assert_eq!(report.summary.total(), 0);
        assert_eq!(fs.write_count(), 0);
        assert_eq!(generator.call_count(), 0);
        assert!(recorder
            .events()
            .iter()
            .any(|e| matches!(e, ProgressEvent::DiscoveryFailed { .. })));
    }

    #[tokio::test]
    async fn test_unreadable_tool_timestamp_counts_as_skip() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_file("public/tools/a.html", "a");
        fs.add_file("public/tools/b.html", "b");
        fs.fail("public/tools/a.html", MockFailure::Metadata);
        let generator = Arc::new(MockGenerator::always("Desc."));
        let recorder = RecordingHandler::new();

        let report = engine(&fs, &generator)
            .with_progress(recorder.clone())
            .run(tools(), &RunOptions::default())
            .await;

        assert_eq!(report.status, RunStatus::Completed);
        assert_eq!(report.summary.skipped, 1);
        assert_eq!(report.summary.generated, 1);
        let failed = report.failures().next().unwrap();
        assert_eq!(failed.tool, "a.html");
        assert_eq!(failure_cause(failed), Some("metadata"));
        assert!(!fs.exists(Path::new("/mock/public/tools/a.md")));

        let events = recorder.events();
        assert!(events
            .iter()
            .any(|e| matches!(e, ProgressEvent::ToolsDiscovered { count: 2 })));
        assert!(events.iter().any(|e| matches!(
            e,
            ProgressEvent::ToolFailed { tool, .. } if tool == "a.html"
        )));
    }

    #[tokio::test]
    async fn test_whitespace_only_description_is_empty_result() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_file("public/tools/a.html", "a");
        let generator = Arc::new(MockGenerator::always("  \n "));

        let report = engine(&fs, &generator).run(tools(), &RunOptions::default()).await;

        assert_eq!(report.summary.skipped, 1);
        assert_eq!(fs.write_count(), 0);
        assert!(matches!(
            &report.outcomes[0].kind,
            OutcomeKind::Failed { cause, .. } if cause == "empty_result"
        ));
    }

    #[tokio::test]
    async fn test_trailing_whitespace_normalized_to_one_newline() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_file("public/tools/a.html", "a");
        let generator = Arc::new(MockGenerator::always("Line one.\n\n"));

        engine(&fs, &generator).run(tools(), &RunOptions::default()).await;

        assert_eq!(fs.contents("public/tools/a.md").as_deref(), Some("Line one.\n"));
    }

    #[tokio::test]
    async fn test_missing_directory_has_no_side_effects() {
        let fs = Arc::new(MockFileSystem::new());
        let generator = Arc::new(MockGenerator::always("Desc."));
        let recorder = RecordingHandler::new();

        let report = engine(&fs, &generator)
            .with_progress(recorder.clone())
            .run(tools(), &RunOptions::default())
            .await;

        assert_eq!(report.status, RunStatus::DirectoryNotFound);
        assert_eq!(report.summary.total(), 0);
        assert!(report.outcomes.is_empty());
        assert_eq!(fs.write_count(), 0);
        assert!(recorder.events().iter().any(|e| matches!(
            e,
            ProgressEvent::DiscoveryFailed { error } if error.contains("not found")
        )));
    }

    #[tokio::test]
    async fn test_no_tools_found() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_file("public/tools/_template.html", "t");
        let generator = Arc::new(MockGenerator::always("Desc."));

        let report = engine(&fs, &generator).run(tools(), &RunOptions::default()).await;

        assert_eq!(report.status, RunStatus::NoToolsFound);
        assert_eq!(report.summary.total(), 0);
        assert!(!fs.exists(Path::new("/mock/public/tools/_template.md")));
    }

    #[tokio::test]
    async fn test_events_follow_tool_order() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_file("public/tools/b.html", "b");
        fs.add_file("public/tools/a.html", "a");
        let generator = Arc::new(MockGenerator::always("Desc."));
        let recorder = RecordingHandler::new();

        engine(&fs, &generator)
            .with_progress(recorder.clone())
            .run(tools(), &RunOptions::default())
            .await;

        let started: Vec<String> = recorder
            .events()
            .into_iter()
            .filter_map(|e| match e {
                ProgressEvent::ToolStarted { tool } => Some(tool),
                _ => None,
            })
            .collect();
        assert_eq!(started, vec!["a.html", "b.html"]);
        assert!(matches!(
            recorder.events().last(),
            Some(ProgressEvent::Completed { summary, .. }) if summary.generated == 2
        ));
    }

    #[tokio::test]
    async fn test_custom_artifact_extension() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_file("public/tools/a.html", "a");
        let generator = Arc::new(MockGenerator::always("Desc."));
        let rules = DiscoveryRules {
            artifact_extension: "txt".to_string(),
            ..DiscoveryRules::default()
        };

        engine(&fs, &generator)
            .with_rules(rules)
            .run(tools(), &RunOptions::default())
            .await;

        assert_eq!(fs.contents("public/tools/a.txt").as_deref(), Some("Desc.\n"));
    }
}
