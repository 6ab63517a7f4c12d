use super::{DirEntry, FileMetadata, FileSystem, FileType};
use anyhow::{anyhow, Result};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use std::time::{Duration, SystemTime};

#[derive(Debug, Clone)]
pub struct MockEntry {
    pub content: Option<String>,
    pub file_type: FileType,
    pub modified: SystemTime,
}

/// Operations that can be made to fail for a given path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockFailure {
    Metadata,
    Read,
    ReadDir,
    Write,
}

/// In-memory file system with a controllable clock.
///
/// Every entry added or written is stamped with the current mock time, which
/// only moves when [`MockFileSystem::advance`] is called. Writes are recorded
/// so tests can assert that nothing changed.
pub struct MockFileSystem {
    files: RwLock<HashMap<PathBuf, MockEntry>>,
    writes: RwLock<Vec<PathBuf>>,
    failures: RwLock<HashSet<(PathBuf, MockFailure)>>,
    now: RwLock<SystemTime>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::with_root(PathBuf::from("/mock"))
    }

    pub fn with_root(root: PathBuf) -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
            writes: RwLock::new(Vec::new()),
            failures: RwLock::new(HashSet::new()),
            now: RwLock::new(SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000)),
            root,
        }
    }

    pub fn now(&self) -> SystemTime {
        *self.now.read().unwrap()
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.write().unwrap();
        *now += by;
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let now = self.now();
        self.insert_file(path.as_ref(), content, now);
    }

    pub fn add_file_with_mtime(&self, path: impl AsRef<Path>, content: &str, modified: SystemTime) {
        self.insert_file(path.as_ref(), content, modified);
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        let now = self.now();
        let mut files = self.files.write().unwrap();

        Self::ensure_parents(&mut files, &path, now);

        files.insert(
            path,
            MockEntry {
                content: None,
                file_type: FileType::Directory,
                modified: now,
            },
        );
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        let path = self.normalize_path(path.as_ref());
        self.files
            .read()
            .unwrap()
            .get(&path)
            .and_then(|e| e.content.clone())
    }

    /// Makes `operation` on `path` return an error from now on
    pub fn fail(&self, path: impl AsRef<Path>, operation: MockFailure) {
        let path = self.normalize_path(path.as_ref());
        self.failures.write().unwrap().insert((path, operation));
    }

    fn check(&self, path: &Path, operation: MockFailure) -> Result<()> {
        if self
            .failures
            .read()
            .unwrap()
            .contains(&(path.to_path_buf(), operation))
        {
            return Err(anyhow!("Injected {:?} failure for {:?}", operation, path));
        }
        Ok(())
    }

    pub fn write_count(&self) -> usize {
        self.writes.read().unwrap().len()
    }

    pub fn written_paths(&self) -> Vec<PathBuf> {
        self.writes.read().unwrap().clone()
    }

    fn insert_file(&self, path: &Path, content: &str, modified: SystemTime) {
        let path = self.normalize_path(path);
        let mut files = self.files.write().unwrap();

        if let Some(parent) = path.parent() {
            Self::ensure_parents(&mut files, parent, modified);
        }

        files.insert(
            path,
            MockEntry {
                content: Some(content.to_string()),
                file_type: FileType::File,
                modified,
            },
        );
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn ensure_parents(files: &mut HashMap<PathBuf, MockEntry>, path: &Path, now: SystemTime) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            files.entry(current.clone()).or_insert(MockEntry {
                content: None,
                file_type: FileType::Directory,
                modified: now,
            });
        }
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.files.read().unwrap().contains_key(&path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.files
            .read()
            .unwrap()
            .get(&path)
            .map(|e| e.file_type == FileType::Directory)
            .unwrap_or(false)
    }

    fn metadata(&self, path: &Path) -> Result<FileMetadata> {
        let path = self.normalize_path(path);
        self.check(&path, MockFailure::Metadata)?;
        let files = self.files.read().unwrap();
        let entry = files
            .get(&path)
            .ok_or_else(|| anyhow!("Path not found: {:?}", path))?;

        Ok(FileMetadata {
            size: entry.content.as_ref().map(|c| c.len() as u64).unwrap_or(0),
            file_type: entry.file_type,
            modified: entry.modified,
        })
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let path = self.normalize_path(path);
        self.check(&path, MockFailure::Read)?;
        let files = self.files.read().unwrap();
        let entry = files
            .get(&path)
            .ok_or_else(|| anyhow!("File not found: {:?}", path))?;

        entry
            .content
            .clone()
            .ok_or_else(|| anyhow!("Not a file: {:?}", path))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        let normalized = self.normalize_path(path);
        self.check(&normalized, MockFailure::Write)?;
        let parent_is_dir = normalized
            .parent()
            .map(|p| self.is_dir(p))
            .unwrap_or(false);
        if !parent_is_dir {
            return Err(anyhow!("Parent directory missing for {:?}", normalized));
        }
        if self.is_dir(&normalized) {
            return Err(anyhow!("Is a directory: {:?}", normalized));
        }

        let now = self.now();
        self.files.write().unwrap().insert(
            normalized.clone(),
            MockEntry {
                content: Some(contents.to_string()),
                file_type: FileType::File,
                modified: now,
            },
        );
        self.writes.write().unwrap().push(normalized);
        Ok(())
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let path = self.normalize_path(path);
        self.check(&path, MockFailure::ReadDir)?;
        let files = self.files.read().unwrap();

        if !files.contains_key(&path) {
            return Err(anyhow!("Directory not found: {:?}", path));
        }

        let mut entries = Vec::new();
        for (file_path, entry) in files.iter() {
            if file_path.parent() == Some(path.as_path()) {
                let name = file_path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("")
                    .to_string();

                entries.push(DirEntry {
                    path: file_path.clone(),
                    name,
                    file_type: entry.file_type,
                });
            }
        }

        Ok(entries)
    }
}
