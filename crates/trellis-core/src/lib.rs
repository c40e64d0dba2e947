//! Trellis Core - types and ports for virtual-filesystem template loading.
//!
//! This crate defines the vocabulary shared between host templating engines
//! and loader adapters, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        Host templating engine           │
//! │   (compiles and renders templates)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      TemplateLoader (driving port)      │
//! │  get_source / cache_key / is_fresh /    │
//! │                exists                   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    trellis-adapters::FilesystemLoader   │
//! │  (prefix resolution + loadability gate) │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    TemplateFilesystem (driven port)     │
//! │  has / read_to_string / entry_kind /    │
//! │           modification_time             │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   Storage backends (caller-supplied)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use trellis_core::prelude::*;
//!
//! fn render(loader: Arc<dyn TemplateLoader>) -> LoaderResult<()> {
//!     let source = loader.get_source("mail/welcome.html")?;
//!     assert_eq!(source.name(), "mail/welcome.html");
//!
//!     // A compiled-template cache would key on this and revalidate with
//!     // `is_fresh` before reuse.
//!     let _key = loader.cache_key("mail/welcome.html")?;
//!     Ok(())
//! }
//! ```

// Domain layer: value types and the loader error vocabulary
pub mod domain;

// Ports: traits implemented by adapters and consumed by host engines
pub mod ports;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::domain::{LoaderError, LoaderResult, TemplateSource};
    pub use crate::ports::{EntryKind, FilesystemError, TemplateFilesystem, TemplateLoader};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
