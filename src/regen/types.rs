use super::policy::{RegenerationPolicy, RunOptions};
use crate::fs::FileSystem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::warn;

/// A tool file found during discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSource {
    pub path: PathBuf,
    pub name: String,
    pub modified: SystemTime,
}

impl ToolSource {
    pub fn new(path: PathBuf, modified: SystemTime) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Self {
            path,
            name,
            modified,
        }
    }

    /// Sibling path with the same base name and `extension`
    pub fn artifact_path(&self, extension: &str) -> PathBuf {
        self.path.with_extension(extension)
    }
}

/// The description file paired with a [`ToolSource`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionArtifact {
    pub path: PathBuf,
    /// `None` when the artifact does not exist
    pub modified: Option<SystemTime>,
}

impl DescriptionArtifact {
    pub fn missing(path: PathBuf) -> Self {
        Self {
            path,
            modified: None,
        }
    }

    pub fn present(path: PathBuf, modified: SystemTime) -> Self {
        Self {
            path,
            modified: Some(modified),
        }
    }

    /// Reads existence and modification time from `fs`.
    ///
    /// An artifact that exists but whose timestamp cannot be read is treated
    /// as infinitely old, so it is regenerated rather than silently kept.
    pub fn observe(fs: &dyn FileSystem, path: PathBuf) -> Self {
        if !fs.exists(&path) {
            return Self::missing(path);
        }
        match fs.modified(&path) {
            Ok(modified) => Self::present(path, modified),
            Err(e) => {
                warn!(artifact = %path.display(), error = %e, "Cannot read artifact timestamp");
                Self::present(path, SystemTime::UNIX_EPOCH)
            }
        }
    }

    pub fn exists(&self) -> bool {
        self.modified.is_some()
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// What happens to an artifact that needs (re)generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Generate,
    Update,
}

impl Action {
    pub fn for_artifact(artifact: &DescriptionArtifact) -> Self {
        if artifact.exists() {
            Action::Update
        } else {
            Action::Generate
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Action::Generate => "generate",
            Action::Update => "update",
        }
    }

    pub fn progressive(&self) -> &'static str {
        match self {
            Action::Generate => "Generating",
            Action::Update => "Updating",
        }
    }

    pub fn past(&self) -> &'static str {
        match self {
            Action::Generate => "Generated",
            Action::Update => "Updated",
        }
    }
}

/// Counters accumulated over one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub generated: usize,
    pub updated: usize,
    pub skipped: usize,
}

impl RunSummary {
    pub fn record(&mut self, action: Action) {
        match action {
            Action::Generate => self.generated += 1,
            Action::Update => self.updated += 1,
        }
    }

    pub fn record_skip(&mut self) {
        self.skipped += 1;
    }

    /// Generated plus updated
    pub fn succeeded(&self) -> usize {
        self.generated + self.updated
    }

    pub fn total(&self) -> usize {
        self.succeeded() + self.skipped
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Summary: {} generated, {} updated, {} skipped",
            self.generated, self.updated, self.skipped
        )
    }
}

/// Result of processing a single tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum OutcomeKind {
    UpToDate,
    Planned { action: Action },
    Written { action: Action },
    Failed { cause: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolOutcome {
    pub tool: String,
    pub artifact: PathBuf,
    #[serde(flatten)]
    pub kind: OutcomeKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Completed,
    NoToolsFound,
    DirectoryNotFound,
    DirectoryUnreadable,
}

/// Everything a finished run reports
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub tools_dir: PathBuf,
    pub policy: RegenerationPolicy,
    pub dry_run: bool,
    pub force: bool,
    pub status: RunStatus,
    pub summary: RunSummary,
    pub outcomes: Vec<ToolOutcome>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    pub fn start(tools_dir: &Path, options: &RunOptions) -> Self {
        let now = Utc::now();
        Self {
            tools_dir: tools_dir.to_path_buf(),
            policy: options.policy,
            dry_run: options.dry_run,
            force: options.force,
            status: RunStatus::Completed,
            summary: RunSummary::default(),
            outcomes: Vec::new(),
            started_at: now,
            finished_at: now,
        }
    }

    pub fn finish(mut self, status: RunStatus) -> Self {
        self.status = status;
        self.finished_at = Utc::now();
        self
    }

    pub fn failures(&self) -> impl Iterator<Item = &ToolOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.kind, OutcomeKind::Failed { .. }))
    }
}
