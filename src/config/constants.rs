//! Configuration constants.
//!
//! This module defines the protocol limits, default filenames and XML
//! namespaces used throughout the generator. The limits are only defaults:
//! every one of them can be overridden through `GeneratorConfig`.

// Protocol limits (sitemaps.org and Google extension schemas)
/// Maximum number of `<url>` entries in a single sitemap file.
pub const MAX_URLS_PER_SITEMAP: usize = 50_000;
/// Maximum uncompressed size of a single sitemap file in bytes (10 MiB).
pub const MAX_BYTES_PER_SITEMAP: usize = 10 * 1024 * 1024;
/// Maximum number of `<sitemap>` entries in a sitemap index.
pub const MAX_SITEMAPS_PER_INDEX: usize = 50_000;
/// Maximum number of `<image:image>` entries per URL.
pub const MAX_IMAGES_PER_URL: usize = 1000;
/// Maximum length of an encoded `<loc>` value in characters.
pub const MAX_URL_LENGTH: usize = 2048;
/// Maximum video rating accepted by the Google video schema.
pub const MAX_VIDEO_RATING: f64 = 5.0;

// Default filenames
pub const DEFAULT_SITEMAP_FILENAME: &str = "sitemap.xml";
pub const DEFAULT_SITEMAP_INDEX_FILENAME: &str = "sitemap-index.xml";
pub const DEFAULT_ROBOTS_FILENAME: &str = "robots.txt";
/// Suffix appended to every file written with compression enabled.
pub const GZIP_SUFFIX: &str = ".gz";

// Search engine pings
/// Placeholder replaced by the percent-encoded entry point URL in ping templates.
pub const PING_PLACEHOLDER: &str = "{sitemap}";
/// Ping endpoints used when the configuration does not list any.
///
/// Google and Bing retired their ping endpoints; Yandex still accepts them.
pub const DEFAULT_PING_TEMPLATES: &[&str] = &["https://webmaster.yandex.ru/ping?sitemap={sitemap}"];

/// Contents of a freshly created robots.txt, before the `Sitemap:` line.
pub const DEFAULT_ROBOTS_PREAMBLE: &str = "User-agent: *\nAllow: /\n";

// HTTP client settings for pings
/// Per-ping timeout in seconds.
pub const PING_TIMEOUT_SECS: u64 = 10;
/// User-Agent header sent with ping requests.
pub const DEFAULT_USER_AGENT: &str = concat!("sitemap_generator/", env!("CARGO_PKG_VERSION"));

// XML namespaces
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";
pub const IMAGE_NS: &str = "http://www.google.com/schemas/sitemap-image/1.1";
pub const VIDEO_NS: &str = "http://www.google.com/schemas/sitemap-video/1.1";
pub const SITEMAP_SCHEMA_LOCATION: &str = "http://www.sitemaps.org/schemas/sitemap/0.9 http://www.sitemaps.org/schemas/sitemap/0.9/sitemap.xsd";
pub const SITEMAP_INDEX_SCHEMA_LOCATION: &str = "http://www.sitemaps.org/schemas/sitemap/0.9 http://www.sitemaps.org/schemas/sitemap/0.9/siteindex.xsd";
/// Schema referenced in the "too many images" validation message.
pub const IMAGE_SCHEMA_URL: &str = "https://www.google.com/schemas/sitemap-image/1.1/sitemap-image.xsd";
