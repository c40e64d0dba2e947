//! Driven port: the filesystem collaborator consumed by loaders.

use serde::{Deserialize, Serialize};

use crate::domain::error::FilesystemError;

/// Entry type reported by a filesystem collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub const fn is_directory(self) -> bool {
        matches!(self, Self::Directory)
    }
}

/// Port for read-only access to template storage.
///
/// Implemented by:
/// - `trellis_adapters::filesystem::MemoryFilesystem` (testing)
/// - caller-supplied backends (local disk, object storage, archives, ...)
///
/// ## Design Notes
///
/// - Paths are virtual `/`-separated string keys, not OS paths. A resolved
///   path is exactly the loader's prefix-plus-name concatenation, on every
///   platform.
/// - All operations are synchronous and blocking; a slow backend blocks the
///   caller. Any async behavior lives inside the implementation.
/// - `Send + Sync` so one collaborator can serve concurrent lookups.
pub trait TemplateFilesystem: Send + Sync {
    /// Whether an entry exists at `path`.
    fn has(&self, path: &str) -> bool;

    /// Read the entry at `path` as UTF-8 text.
    ///
    /// # Errors
    ///
    /// [`FilesystemError::NotFound`] if no entry exists at `path`;
    /// [`FilesystemError::Backend`] for any other failure.
    fn read_to_string(&self, path: &str) -> Result<String, FilesystemError>;

    /// Report whether `path` denotes a file or a directory.
    ///
    /// # Errors
    ///
    /// [`FilesystemError::NotFound`] if no entry exists at `path`.
    fn entry_kind(&self, path: &str) -> Result<EntryKind, FilesystemError>;

    /// Last modification time of `path`, in seconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// [`FilesystemError::NotFound`] if no entry exists at `path`.
    fn modification_time(&self, path: &str) -> Result<i64, FilesystemError>;
}
