//! sitemap_generator library: sitemaps.org XML sitemaps for a stream of URLs
//!
//! This library validates URLs (with optional Google Video, Google Image and
//! hreflang alternate data), splits them across sitemap files within the
//! protocol's count and size limits, optionally gzips the output, writes a
//! sitemap index when more than one file is produced, and can register the
//! result in robots.txt and ping search engines.
//!
//! # Example
//!
//! ```no_run
//! use sitemap_generator::{GeneratorConfig, SitemapGenerator, UrlEntry, VideoExtension};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut config = GeneratorConfig::new("https://example.com", "public");
//! config.compression = true;
//!
//! let mut generator = SitemapGenerator::new(config)?;
//! generator.add_url("/")?;
//! generator.add_url(
//!     UrlEntry::new("/videos/grilling")
//!         .change_frequency("weekly")
//!         .alternate("de", "https://example.com/de/videos/grilling")
//!         .extension(VideoExtension::new(
//!             "https://example.com/thumbs/123.jpg",
//!             "Grilling steaks for summer",
//!             "How to get perfectly done steaks every time",
//!         )),
//! )?;
//!
//! let result = generator.finalize()?;
//! println!("Entry point: {}", result.sitemaps_index_url);
//! generator.update_robots()?;
//! # Ok(())
//! # }
//! ```
//!
//! All operations are synchronous; one generator owns its output directory
//! for the duration of a run.

mod batch;
pub mod config;
mod error_handling;
mod generator;
mod index;
pub mod initialization;
mod location;
mod models;
mod render;
mod robots;
pub mod runtime;
mod storage;
mod submit;
mod validate;

// Re-export public API
pub use batch::{AppendOutcome, BatchLimits, BatchWriter};
pub use config::{GeneratorConfig, LogFormat, LogLevel};
pub use error_handling::{
    ConfigValidationError, InitializationError, RuntimeError, SitemapError, ValidationError,
};
pub use generator::{GenerationResult, SitemapGenerator};
pub use index::assemble_index;
pub use location::{encode_escape_url, resolve_location};
pub use models::{
    Alternate, ChangeFrequency, Extension, ExtensionInput, ImageEntry, ImageExtension,
    Relationship, RelationshipList, Uploader, UrlEntry, UrlRecord, VideoExtension, VideoPrice,
    YesNo, GOOGLE_IMAGE, GOOGLE_VIDEO,
};
pub use render::SitemapRenderer;
pub use robots::update_robots;
pub use runtime::{Runtime, SystemRuntime};
pub use storage::{FileSink, ProducedFile};
pub use submit::{build_ping_requests, submit, PingOutcome};
pub use validate::{validate_entry, validate_images, validate_video};
