//! Virtual-filesystem template loader.
//!
//! [`FilesystemLoader`] satisfies the host engine's
//! [`TemplateLoader`] contract over any [`TemplateFilesystem`] collaborator,
//! resolving template names under an optional path prefix.
//!
//! # Resolution
//!
//! ```text
//! prefix   = "templates"          (trailing '/' trimmed, one re-appended)
//! name     = "mail/welcome.html"  (caller-supplied, kept verbatim)
//! resolved = "templates/mail/welcome.html"
//! ```
//!
//! The resolved path is what the collaborator sees; the name is what the host
//! engine sees. Neither side ever observes the other's form.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use trellis_adapters::{FilesystemLoader, MemoryFilesystem};
//! use trellis_core::ports::TemplateLoader;
//!
//! let fs = MemoryFilesystem::new();
//! fs.write_file("templates/page.html", "{{ body }}", 1_700_000_000);
//!
//! let loader = FilesystemLoader::with_prefix(Arc::new(fs), "templates");
//! let source = loader.get_source("page.html")?;
//! assert_eq!(source.name(), "page.html");
//! # Ok::<(), trellis_core::domain::LoaderError>(())
//! ```

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use trellis_core::{
    domain::{FilesystemError, LoaderError, LoaderResult, TemplateSource},
    ports::{EntryKind, TemplateFilesystem, TemplateLoader},
};

// ── Loader ────────────────────────────────────────────────────────────────────

/// Template loader backed by a virtual filesystem.
///
/// Holds exactly two fields, both immutable after construction: a shared
/// handle to the collaborator and a path prefix. Resolution is a pure
/// function of (prefix, name) - nothing is cached, so one loader instance can
/// serve concurrent lookups whenever the collaborator itself supports
/// concurrent reads.
pub struct FilesystemLoader {
    filesystem: Arc<dyn TemplateFilesystem>,
    prefix: String,
}

impl FilesystemLoader {
    /// Create a loader with no prefix: template names are used as
    /// collaborator paths unchanged.
    pub fn new(filesystem: Arc<dyn TemplateFilesystem>) -> Self {
        Self::with_prefix(filesystem, "")
    }

    /// Create a loader that resolves every template name under `prefix`.
    ///
    /// Trailing `/` characters on `prefix` are trimmed and exactly one
    /// separator is inserted before the name, so `"templates"`,
    /// `"templates/"`, and `"templates//"` behave identically.
    pub fn with_prefix(
        filesystem: Arc<dyn TemplateFilesystem>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            filesystem,
            prefix: prefix.into(),
        }
    }

    /// Resolve a template name to a collaborator path. Pure and total.
    fn resolve_path(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            return name.to_string();
        }
        format!("{}/{}", self.prefix.trim_end_matches('/'), name)
    }

    /// The sole gate in front of every operation: the resolved path must
    /// exist and must not be a directory.
    fn ensure_loadable(&self, name: &str) -> LoaderResult<()> {
        let path = self.resolve_path(name);
        if !self.filesystem.has(&path) {
            return Err(LoaderError::NotFound {
                name: name.to_string(),
            });
        }

        match self.filesystem.entry_kind(&path) {
            Ok(EntryKind::File) => Ok(()),
            Ok(EntryKind::Directory) => Err(LoaderError::InvalidTarget {
                name: name.to_string(),
            }),
            Err(e) => Err(self.normalize_absence(name, e)),
        }
    }

    /// Map a post-gate collaborator failure into the loader's vocabulary.
    ///
    /// A collaborator `NotFound` after `has` answered true means the entry
    /// vanished between check and use; it is re-signaled as the loader's own
    /// `NotFound`. Everything else passes through untouched.
    fn normalize_absence(&self, name: &str, error: FilesystemError) -> LoaderError {
        match error {
            FilesystemError::NotFound { path } => {
                warn!(name, path = %path, "entry vanished between check and use");
                LoaderError::NotFound {
                    name: name.to_string(),
                }
            }
            other => LoaderError::Filesystem(other),
        }
    }
}

impl TemplateLoader for FilesystemLoader {
    #[instrument(skip(self))]
    fn get_source(&self, name: &str) -> LoaderResult<TemplateSource> {
        self.ensure_loadable(name)?;

        let path = self.resolve_path(name);
        let code = self
            .filesystem
            .read_to_string(&path)
            .map_err(|e| self.normalize_absence(name, e))?;

        debug!(name, bytes = code.len(), "loaded template source");
        Ok(TemplateSource::new(code, name))
    }

    /// The key is the original name, untouched by the prefix. Two loaders
    /// with different prefixes over one collaborator therefore collide when
    /// sharing a compiled-template cache; callers that mix prefixes must use
    /// separate caches.
    #[instrument(skip(self))]
    fn cache_key(&self, name: &str) -> LoaderResult<String> {
        self.ensure_loadable(name)?;
        Ok(name.to_string())
    }

    #[instrument(skip(self))]
    fn is_fresh(&self, name: &str, reference_time: i64) -> LoaderResult<bool> {
        self.ensure_loadable(name)?;

        let path = self.resolve_path(name);
        let modified = self
            .filesystem
            .modification_time(&path)
            .map_err(|e| self.normalize_absence(name, e))?;

        Ok(reference_time >= modified)
    }

    #[instrument(skip(self))]
    fn exists(&self, name: &str) -> LoaderResult<bool> {
        match self.ensure_loadable(name) {
            Ok(()) => Ok(true),
            Err(LoaderError::NotFound { .. } | LoaderError::InvalidTarget { .. }) => Ok(false),
            Err(unexpected) => Err(unexpected),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
