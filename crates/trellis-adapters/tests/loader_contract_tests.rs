//! Contract tests for the filesystem-backed template loader.
//!
//! The loader is exercised through `Arc<dyn TemplateLoader>`, the same shape
//! a host engine holds it in, over a shared `MemoryFilesystem`.

use std::sync::Arc;

use trellis_adapters::{FilesystemLoader, MemoryFilesystem};
use trellis_core::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

fn prefixed_loader() -> (Arc<dyn TemplateLoader>, MemoryFilesystem) {
    init_tracing();
    let fs = MemoryFilesystem::new();
    fs.write_file("templates/test/Object.twig", "{{ template }}", 1233);
    let loader = FilesystemLoader::with_prefix(Arc::new(fs.clone()), "templates");
    (Arc::new(loader), fs)
}

#[test]
fn loads_source_under_the_prefix() {
    let (loader, _fs) = prefixed_loader();

    let source = loader.get_source("test/Object.twig").unwrap();
    assert_eq!(source.code(), "{{ template }}");
    assert_eq!(source.name(), "test/Object.twig");
}

#[test]
fn cache_key_never_carries_the_prefix() {
    let (loader, _fs) = prefixed_loader();

    assert_eq!(loader.cache_key("test/Object.twig").unwrap(), "test/Object.twig");
}

#[test]
fn freshness_follows_the_stored_modification_time() {
    let (loader, fs) = prefixed_loader();

    assert!(loader.is_fresh("test/Object.twig", 1234).unwrap());
    assert!(loader.is_fresh("test/Object.twig", 1233).unwrap());
    assert!(!loader.is_fresh("test/Object.twig", 1232).unwrap());

    fs.touch("templates/test/Object.twig", 2000);
    assert!(!loader.is_fresh("test/Object.twig", 1234).unwrap());
}

#[test]
fn existence_probe_answers_instead_of_failing() {
    let (loader, _fs) = prefixed_loader();

    assert_eq!(loader.exists("test/Object.twig").unwrap(), true);
    assert_eq!(loader.exists("x.tpl").unwrap(), false);
}

#[test]
fn deleted_template_stops_resolving() {
    let (loader, fs) = prefixed_loader();
    assert!(loader.exists("test/Object.twig").unwrap());

    fs.remove("templates/test/Object.twig");

    assert!(!loader.exists("test/Object.twig").unwrap());
    assert!(matches!(
        loader.get_source("test/Object.twig"),
        Err(LoaderError::NotFound { name }) if name == "test/Object.twig"
    ));
}

#[test]
fn two_loaders_can_share_one_filesystem() {
    init_tracing();
    let fs = MemoryFilesystem::new();
    fs.write_file("mail/welcome.html", "Hello {{ user }}", 10);
    fs.write_file("web/welcome.html", "<h1>Hello</h1>", 20);

    let shared: Arc<dyn TemplateFilesystem> = Arc::new(fs);
    let mail: Arc<dyn TemplateLoader> =
        Arc::new(FilesystemLoader::with_prefix(Arc::clone(&shared), "mail"));
    let web: Arc<dyn TemplateLoader> =
        Arc::new(FilesystemLoader::with_prefix(Arc::clone(&shared), "web"));

    assert_eq!(mail.get_source("welcome.html").unwrap().code(), "Hello {{ user }}");
    assert_eq!(web.get_source("welcome.html").unwrap().code(), "<h1>Hello</h1>");

    // Both loaders hand out the same key for the same name. A shared
    // compiled-template cache would conflate them.
    assert_eq!(
        mail.cache_key("welcome.html").unwrap(),
        web.cache_key("welcome.html").unwrap()
    );
}
