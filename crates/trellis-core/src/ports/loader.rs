//! Driving port: the loader contract host templating engines call into.

use crate::domain::{LoaderResult, TemplateSource};

/// The loader-plugin contract expected by a host templating engine.
///
/// Implemented by:
/// - `trellis_adapters::FilesystemLoader` (virtual-filesystem backed)
///
/// Engines hold loaders as `Arc<dyn TemplateLoader>` and drive their
/// compiled-template cache with [`cache_key`](Self::cache_key) and
/// [`is_fresh`](Self::is_fresh).
///
/// Every operation is a single synchronous pass: no retries, no partial
/// progress, no state between calls.
pub trait TemplateLoader: Send + Sync {
    /// Load the source text of the template `name`.
    ///
    /// The returned [`TemplateSource`] carries the original `name`, never a
    /// resolved storage path.
    ///
    /// # Errors
    ///
    /// `NotFound` when the template is absent, `InvalidTarget` when the name
    /// resolves to a directory.
    fn get_source(&self, name: &str) -> LoaderResult<TemplateSource>;

    /// The cache key identifying `name` in a compiled-template cache.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`get_source`](Self::get_source): the key is
    /// only produced for loadable templates.
    fn cache_key(&self, name: &str) -> LoaderResult<String>;

    /// Whether a compilation cached at `reference_time` is still valid.
    ///
    /// `true` iff `reference_time` is at or after the template's current
    /// modification time.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`get_source`](Self::get_source).
    fn is_fresh(&self, name: &str, reference_time: i64) -> LoaderResult<bool>;

    /// Whether this loader can load the template `name`.
    ///
    /// Absence and directory targets both answer `false` rather than failing.
    ///
    /// # Errors
    ///
    /// Only unexpected collaborator failures; "not present" is never an
    /// error here.
    fn exists(&self, name: &str) -> LoaderResult<bool>;
}
