//! Sitemap generator.
//!
//! `SitemapGenerator` ties the pieces together: entries are validated, batched
//! and flushed to numbered files; `finalize` settles file names and writes the
//! index; afterwards the entry point can be added to robots.txt and submitted
//! to search engines.
//!
//! # Lifecycle
//!
//! ```text
//! new ─▶ add_url* / flush* ─▶ finalize ─▶ update_robots / submit_sitemap / generated_files
//! ```
//!
//! Adding URLs after `finalize` fails with `AlreadyFinalized`; the operations
//! on the right fail with `NotFinalized` before it.

mod types;

use log::{debug, info};

use crate::batch::BatchWriter;
use crate::config::GeneratorConfig;
use crate::error_handling::SitemapError;
use crate::index::assemble_index;
use crate::models::UrlEntry;
use crate::render::SitemapRenderer;
use crate::robots;
use crate::runtime::{Runtime, SystemRuntime};
use crate::storage::ProducedFile;
use crate::submit::{build_ping_requests, submit, PingOutcome};
use crate::validate::validate_entry;

pub use types::GenerationResult;

/// Builds sitemap files for one site.
///
/// # Examples
///
/// ```no_run
/// use sitemap_generator::{GeneratorConfig, SitemapGenerator, UrlEntry};
///
/// # fn main() -> Result<(), sitemap_generator::SitemapError> {
/// let config = GeneratorConfig::new("https://example.com", "public");
/// let mut generator = SitemapGenerator::new(config)?;
/// generator.add_url(UrlEntry::new("/about").change_frequency("monthly").priority(0.8))?;
/// let result = generator.finalize()?;
/// println!("{}", result.sitemaps_index_url);
/// # Ok(())
/// # }
/// ```
pub struct SitemapGenerator<R: Runtime = SystemRuntime> {
    config: GeneratorConfig,
    runtime: R,
    writer: Option<BatchWriter>,
    result: Option<GenerationResult>,
    urls_added: usize,
}

impl SitemapGenerator<SystemRuntime> {
    /// Creates a generator backed by the local filesystem and network.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid, the HTTP client cannot be
    /// built, or the save directory is not writable.
    pub fn new(config: GeneratorConfig) -> Result<Self, SitemapError> {
        let runtime = SystemRuntime::new()?;
        Self::with_runtime(config, runtime)
    }
}

impl<R: Runtime> SitemapGenerator<R> {
    /// Creates a generator using `runtime` for filesystem and HTTP checks.
    pub fn with_runtime(config: GeneratorConfig, runtime: R) -> Result<Self, SitemapError> {
        config.validate()?;
        if !runtime.is_writable(&config.save_directory) {
            return Err(SitemapError::NotWritable(config.save_directory.clone()));
        }
        let writer = BatchWriter::new(config.clone())?;
        debug!(
            "Sitemap generator ready for {} in {}",
            config.base_url,
            config.save_directory.display()
        );
        Ok(Self {
            config,
            runtime,
            writer: Some(writer),
            result: None,
            urls_added: 0,
        })
    }

    /// Validates `entry` and appends it to the current batch, writing out the
    /// batch first when it is full.
    ///
    /// A rejected entry leaves the generator unchanged.
    pub fn add_url(&mut self, entry: impl Into<UrlEntry>) -> Result<(), SitemapError> {
        let writer = self.writer.as_mut().ok_or(SitemapError::AlreadyFinalized)?;
        let record = validate_entry(entry.into(), &self.config)?;
        writer.add_record(record)?;
        self.urls_added += 1;
        Ok(())
    }

    /// Writes the current batch now, starting a new file for later URLs.
    pub fn flush(&mut self) -> Result<Option<ProducedFile>, SitemapError> {
        let writer = self.writer.as_mut().ok_or(SitemapError::AlreadyFinalized)?;
        writer.flush()
    }

    /// Writes the remaining URLs, renames a lone file to the single-sitemap
    /// name and writes the index when several files were produced.
    ///
    /// The generator cannot accept URLs afterwards, even if this fails.
    pub fn finalize(&mut self) -> Result<&GenerationResult, SitemapError> {
        let writer = self.writer.take().ok_or(SitemapError::AlreadyFinalized)?;
        let sink = writer.finish()?;

        let renderer = SitemapRenderer::from_config(&self.config);
        let index = assemble_index(&self.config, &renderer, &sink)?;
        let result = GenerationResult::new(sink.into_produced(), index);

        info!(
            "Finalized {} URLs into {} sitemap file(s); entry point {}",
            self.urls_added,
            result.sitemaps.len(),
            result.sitemaps_index_url
        );
        Ok(self.result.insert(result))
    }

    /// Files produced by `finalize`.
    pub fn generated_files(&self) -> Result<&GenerationResult, SitemapError> {
        self.result.as_ref().ok_or(SitemapError::NotFinalized)
    }

    /// Adds the entry point to the configured robots file in the save
    /// directory.
    pub fn update_robots(&self) -> Result<bool, SitemapError> {
        let result = self.generated_files()?;
        let path = self.config.save_directory.join(&self.config.robots_filename);
        robots::update_robots(&path, &result.sitemaps_index_url)
    }

    /// Pings every configured search engine, plus `extra_template` if given,
    /// with the entry point URL.
    pub fn submit_sitemap(&self, extra_template: Option<&str>) -> Result<Vec<PingOutcome>, SitemapError> {
        let result = self.generated_files()?;
        let mut templates: Vec<&str> = self.config.ping_templates.iter().map(String::as_str).collect();
        if let Some(extra) = extra_template {
            templates.push(extra);
        }
        let requests = build_ping_requests(&templates, &result.sitemaps_index_url);
        submit(&self.runtime, &requests)
    }

    /// Whether `finalize` has been called.
    pub fn is_finalized(&self) -> bool {
        self.writer.is_none()
    }

    /// Number of URLs accepted so far.
    pub fn urls_added(&self) -> usize {
        self.urls_added
    }

    /// Configuration the generator was built with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Runtime used for writability checks and pings.
    pub fn runtime(&self) -> &R {
        &self.runtime
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use tempfile::TempDir;

    use super::*;
    use crate::error_handling::{RuntimeError, ValidationError};

    struct LocalRuntime {
        writable: bool,
    }

    impl Runtime for LocalRuntime {
        fn is_writable(&self, _dir: &Path) -> bool {
            self.writable
        }

        fn has_http_capability(&self) -> bool {
            false
        }

        fn http_get(&self, url: &str) -> Result<u16, RuntimeError> {
            Err(RuntimeError::Http {
                url: url.to_string(),
                reason: "offline".to_string(),
            })
        }
    }

    fn generator(dir: &TempDir) -> SitemapGenerator<LocalRuntime> {
        let config = GeneratorConfig::new("https://example.com", dir.path());
        SitemapGenerator::with_runtime(config, LocalRuntime { writable: true }).unwrap()
    }

    #[test]
    fn test_not_writable_is_reported_at_construction() {
        let dir = TempDir::new().unwrap();
        let config = GeneratorConfig::new("https://example.com", dir.path());
        let err = SitemapGenerator::with_runtime(config, LocalRuntime { writable: false })
            .err()
            .unwrap();
        assert!(matches!(err, SitemapError::NotWritable(_)));
    }

    #[test]
    fn test_invalid_config_is_reported_at_construction() {
        let dir = TempDir::new().unwrap();
        let config = GeneratorConfig::new("not a url", dir.path());
        let err = SitemapGenerator::with_runtime(config, LocalRuntime { writable: true })
            .err()
            .unwrap();
        assert!(matches!(err, SitemapError::Config(_)));
    }

    #[test]
    fn test_rejected_url_is_not_counted() {
        let dir = TempDir::new().unwrap();
        let mut generator = generator(&dir);
        let err = generator.add_url(UrlEntry::new("/a").priority(2.0)).unwrap_err();
        assert!(matches!(
            err,
            SitemapError::Validation(ValidationError::InvalidPriority(_))
        ));
        assert_eq!(generator.urls_added(), 0);
    }

    #[test]
    fn test_lifecycle_errors() {
        let dir = TempDir::new().unwrap();
        let mut generator = generator(&dir);
        assert!(matches!(
            generator.generated_files(),
            Err(SitemapError::NotFinalized)
        ));
        assert!(matches!(
            generator.update_robots(),
            Err(SitemapError::NotFinalized)
        ));

        generator.add_url("/a").unwrap();
        generator.finalize().unwrap();
        assert!(generator.is_finalized());

        assert!(matches!(
            generator.add_url("/b"),
            Err(SitemapError::AlreadyFinalized)
        ));
        assert!(matches!(generator.flush(), Err(SitemapError::AlreadyFinalized)));
        assert!(matches!(
            generator.finalize(),
            Err(SitemapError::AlreadyFinalized)
        ));
    }

    #[test]
    fn test_submit_without_http_fails() {
        let dir = TempDir::new().unwrap();
        let mut generator = generator(&dir);
        generator.finalize().unwrap();
        assert!(matches!(
            generator.submit_sitemap(None),
            Err(SitemapError::CapabilityUnavailable(_))
        ));
    }
}
