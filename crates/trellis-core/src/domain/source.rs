//! Template source value object.

use serde::{Deserialize, Serialize};

/// Source text of a template, paired with the name it was requested under.
///
/// The name is always the caller's *original, unresolved* name - any path
/// prefix a loader applied during resolution is an implementation detail that
/// must not leak into the host engine's cache keys or diagnostics.
///
/// A pure value: equality by fields, no identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSource {
    code: String,
    name: String,
}

impl TemplateSource {
    /// Create a source object from template text and the requested name.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// The template source text.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The template name as the caller requested it.
    pub fn name(&self) -> &str {
        &self.name
    }
}
