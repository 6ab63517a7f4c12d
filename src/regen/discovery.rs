//! Tool discovery
//!
//! Lists the regular files directly inside the tools directory whose
//! extension matches and whose name does not start with the template marker.

use super::types::ToolSource;
use crate::fs::{FileSystem, FileType};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiscoveryError {
    #[error("{} not found", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to read {}: {message}", .path.display())]
    ReadFailed { path: PathBuf, message: String },
}

/// Naming conventions for sources and their description artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryRules {
    pub source_extension: String,
    pub artifact_extension: String,
    pub template_prefix: char,
}

impl Default for DiscoveryRules {
    fn default() -> Self {
        Self {
            source_extension: "html".to_string(),
            artifact_extension: "md".to_string(),
            template_prefix: '_',
        }
    }
}

impl DiscoveryRules {
    pub fn is_candidate(&self, file_name: &str) -> bool {
        if file_name.starts_with(self.template_prefix) {
            return false;
        }
        Path::new(file_name)
            .extension()
            .map(|ext| ext == self.source_extension.as_str())
            .unwrap_or(false)
    }
}

/// A candidate whose modification time could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadableTool {
    pub path: PathBuf,
    pub name: String,
    pub message: String,
}

/// Candidates found in the tools directory, each list sorted by file name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    pub sources: Vec<ToolSource>,
    pub unreadable: Vec<UnreadableTool>,
}

impl Discovery {
    /// Number of candidates, readable or not
    pub fn candidates(&self) -> usize {
        self.sources.len() + self.unreadable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates() == 0
    }
}

/// Lists the candidate tools in `root`.
pub fn discover_tools(
    fs: &dyn FileSystem,
    root: &Path,
    rules: &DiscoveryRules,
) -> Result<Discovery, DiscoveryError> {
    if !fs.exists(root) {
        return Err(DiscoveryError::DirectoryNotFound(root.to_path_buf()));
    }
    if !fs.is_dir(root) {
        return Err(DiscoveryError::NotADirectory(root.to_path_buf()));
    }

    let entries = fs.read_dir(root).map_err(|e| DiscoveryError::ReadFailed {
        path: root.to_path_buf(),
        message: format!("{:#}", e),
    })?;

    let mut discovery = Discovery::default();
    for entry in entries {
        if entry.file_type() != FileType::File || !rules.is_candidate(entry.file_name()) {
            debug!(entry = %entry.file_name(), "Ignoring non-candidate entry");
            continue;
        }
        match fs.modified(entry.path()) {
            Ok(modified) => discovery
                .sources
                .push(ToolSource::new(entry.path().to_path_buf(), modified)),
            Err(e) => {
                warn!(tool = %entry.file_name(), error = %e, "Cannot read tool timestamp");
                discovery.unreadable.push(UnreadableTool {
                    path: entry.path().to_path_buf(),
                    name: entry.file_name().to_string(),
                    message: format!("{:#}", e),
                });
            }
        }
    }

    discovery.sources.sort_by(|a, b| a.name.cmp(&b.name));
    discovery.unreadable.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(
        root = %root.display(),
        count = discovery.sources.len(),
        unreadable = discovery.unreadable.len(),
        "Discovered tools"
    );
    Ok(discovery)
}
