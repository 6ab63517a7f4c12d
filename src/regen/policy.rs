//! Regeneration decision rule
//!
//! [`decide`] is a pure function of the source, its artifact and the run
//! options; it never touches the file system.

use super::types::{Action, DescriptionArtifact, ToolSource};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How staleness is judged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegenerationPolicy {
    /// Regenerate when forced, when the artifact is missing, or when the
    /// source is strictly newer than the artifact
    #[default]
    Timestamp,
    /// Legacy behavior: any existing artifact is kept, `force` is ignored
    ExistenceOnly,
}

impl RegenerationPolicy {
    /// Whether this policy can ever classify an outcome as an update
    pub fn reports_updates(&self) -> bool {
        matches!(self, RegenerationPolicy::Timestamp)
    }
}

impl fmt::Display for RegenerationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegenerationPolicy::Timestamp => write!(f, "timestamp"),
            RegenerationPolicy::ExistenceOnly => write!(f, "existence-only"),
        }
    }
}

/// Flags that shape a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub force: bool,
    pub dry_run: bool,
    pub policy: RegenerationPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Regenerate(Action),
    Skip,
}

/// Timestamp rule: forced, missing, or source strictly newer.
///
/// Equal timestamps do not count as newer.
pub fn should_regenerate(source: &ToolSource, artifact: &DescriptionArtifact, force: bool) -> bool {
    if force {
        return true;
    }
    match artifact.modified {
        None => true,
        Some(artifact_modified) => source.modified > artifact_modified,
    }
}

pub fn decide(source: &ToolSource, artifact: &DescriptionArtifact, options: &RunOptions) -> Decision {
    let regenerate = match options.policy {
        RegenerationPolicy::Timestamp => should_regenerate(source, artifact, options.force),
        RegenerationPolicy::ExistenceOnly => !artifact.exists(),
    };

    if regenerate {
        Decision::Regenerate(Action::for_artifact(artifact))
    } else {
        Decision::Skip
    }
}
