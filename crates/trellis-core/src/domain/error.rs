//! Error vocabulary for template loading.
//!
//! Two layers of errors exist:
//!
//! - [`FilesystemError`]: what a storage collaborator reports.
//! - [`LoaderError`]: what a loader surfaces to the host templating engine.
//!
//! The loader is the single translation point between the two. Callers of a
//! [`crate::ports::TemplateLoader`] never need to know the collaborator's
//! vocabulary: a collaborator "not found" is always re-signaled as
//! [`LoaderError::NotFound`], and only genuinely unexpected backend failures
//! pass through as [`LoaderError::Filesystem`].

use thiserror::Error;

/// Error vocabulary of a filesystem collaborator.
///
/// Collaborators report against the **resolved** path (prefix + name); the
/// loader owns the mapping back to template names.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilesystemError {
    /// No entry exists at the given path.
    #[error("no entry at '{path}'")]
    NotFound { path: String },

    /// Any other backend failure: I/O, transport, encoding, permissions.
    #[error("filesystem backend error at '{path}': {reason}")]
    Backend { path: String, reason: String },
}

/// Errors surfaced by a template loader.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoaderError {
    /// The resolved path does not exist, or vanished between the existence
    /// check and a later read.
    #[error("template could not be found on the given filesystem: '{name}'")]
    NotFound { name: String },

    /// The resolved path exists but denotes a directory, not a leaf template.
    #[error("cannot use directory as template: '{name}'")]
    InvalidTarget { name: String },

    /// Unexpected collaborator failure, passed through unchanged.
    ///
    /// Never carries a collaborator [`FilesystemError::NotFound`]: those are
    /// normalized to [`LoaderError::NotFound`] at the loadability gate.
    #[error(transparent)]
    Filesystem(FilesystemError),
}

// No `From<FilesystemError>` on purpose: a bare `?` would smuggle collaborator
// "not found" past the normalization step. Loaders map explicitly.

/// Convenient result type alias.
pub type LoaderResult<T> = Result<T, LoaderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_the_template() {
        let err = LoaderError::NotFound {
            name: "mail/welcome.html".into(),
        };
        assert_eq!(
            err.to_string(),
            "template could not be found on the given filesystem: 'mail/welcome.html'"
        );
    }

    #[test]
    fn invalid_target_display_names_the_template() {
        let err = LoaderError::InvalidTarget {
            name: "partials".into(),
        };
        assert_eq!(err.to_string(), "cannot use directory as template: 'partials'");
    }

    #[test]
    fn filesystem_variant_is_transparent() {
        let inner = FilesystemError::Backend {
            path: "templates/a.html".into(),
            reason: "connection reset".into(),
        };
        let err = LoaderError::Filesystem(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
    }
}
