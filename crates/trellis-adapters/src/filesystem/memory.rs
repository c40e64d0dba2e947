//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, RwLock},
};

use trellis_core::ports::{EntryKind, FilesystemError, TemplateFilesystem};

/// In-memory virtual filesystem for testing.
///
/// Files carry content plus a modification time; directories are bare path
/// entries. Cloning shares the same store, so a test can keep a handle while
/// a loader holds another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<String, FileEntry>,
    directories: HashSet<String>,
}

#[derive(Debug)]
struct FileEntry {
    content: String,
    modified: i64,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file with content and a modification time.
    pub fn write_file(&self, path: &str, content: &str, modified: i64) {
        let mut inner = self.inner.write().expect("memory filesystem lock poisoned");
        inner.files.insert(
            path.to_string(),
            FileEntry {
                content: content.to_string(),
                modified,
            },
        );
    }

    /// Mark a path as a directory.
    pub fn create_dir(&self, path: &str) {
        let mut inner = self.inner.write().expect("memory filesystem lock poisoned");
        inner.directories.insert(path.to_string());
    }

    /// Remove an entry, whatever its kind (testing helper).
    pub fn remove(&self, path: &str) {
        let mut inner = self.inner.write().expect("memory filesystem lock poisoned");
        inner.files.remove(path);
        inner.directories.remove(path);
    }

    /// Update a file's modification time (testing helper).
    ///
    /// No-op if the path is not a file.
    pub fn touch(&self, path: &str, modified: i64) {
        let mut inner = self.inner.write().expect("memory filesystem lock poisoned");
        if let Some(entry) = inner.files.get_mut(path) {
            entry.modified = modified;
        }
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().expect("memory filesystem lock poisoned");
        inner.files.clear();
        inner.directories.clear();
    }

    fn read_guard(&self) -> std::sync::RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().expect("memory filesystem lock poisoned")
    }
}

impl TemplateFilesystem for MemoryFilesystem {
    fn has(&self, path: &str) -> bool {
        let inner = self.read_guard();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn read_to_string(&self, path: &str) -> Result<String, FilesystemError> {
        let inner = self.read_guard();
        if let Some(entry) = inner.files.get(path) {
            return Ok(entry.content.clone());
        }
        if inner.directories.contains(path) {
            return Err(FilesystemError::Backend {
                path: path.to_string(),
                reason: "is a directory".to_string(),
            });
        }
        Err(FilesystemError::NotFound {
            path: path.to_string(),
        })
    }

    fn entry_kind(&self, path: &str) -> Result<EntryKind, FilesystemError> {
        let inner = self.read_guard();
        if inner.files.contains_key(path) {
            Ok(EntryKind::File)
        } else if inner.directories.contains(path) {
            Ok(EntryKind::Directory)
        } else {
            Err(FilesystemError::NotFound {
                path: path.to_string(),
            })
        }
    }

    fn modification_time(&self, path: &str) -> Result<i64, FilesystemError> {
        let inner = self.read_guard();
        if let Some(entry) = inner.files.get(path) {
            return Ok(entry.modified);
        }
        if inner.directories.contains(path) {
            return Err(FilesystemError::Backend {
                path: path.to_string(),
                reason: "is a directory".to_string(),
            });
        }
        Err(FilesystemError::NotFound {
            path: path.to_string(),
        })
    }
}
