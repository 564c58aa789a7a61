//! Configuration types.
//!
//! This module defines the generator configuration and the logging enums used
//! by the CLI. `GeneratorConfig` is an immutable value handed to the generator
//! at construction; nothing in the crate reads hidden global defaults.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_PING_TEMPLATES, DEFAULT_ROBOTS_FILENAME, DEFAULT_SITEMAP_FILENAME,
    DEFAULT_SITEMAP_INDEX_FILENAME, MAX_BYTES_PER_SITEMAP, MAX_IMAGES_PER_URL, MAX_SITEMAPS_PER_INDEX,
    MAX_URLS_PER_SITEMAP, MAX_URL_LENGTH,
};
use crate::error_handling::ConfigValidationError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Generator configuration.
///
/// # Examples
///
/// ```no_run
/// use sitemap_generator::GeneratorConfig;
/// use std::path::PathBuf;
///
/// let config = GeneratorConfig {
///     base_url: "https://example.com".to_string(),
///     save_directory: PathBuf::from("public"),
///     compression: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Base URL that relative paths are resolved against
    pub base_url: String,

    /// Directory all sitemap files and robots.txt are written to
    pub save_directory: PathBuf,

    /// Name of the sitemap file when a single file is produced; numbered
    /// files are derived from it (`sitemap.xml` -> `sitemap1.xml`)
    pub sitemap_filename: String,

    /// Name of the sitemap index file
    pub sitemap_index_filename: String,

    /// Maximum number of URLs per sitemap file
    pub max_urls_per_sitemap: usize,

    /// Maximum estimated uncompressed size of a sitemap file in bytes
    pub max_bytes_per_sitemap: usize,

    /// Maximum number of images attached to a single URL
    pub max_images_per_url: usize,

    /// Maximum length of an encoded URL
    pub max_url_length: usize,

    /// Maximum number of sitemaps referenced by the index
    pub max_sitemaps_per_index: usize,

    /// Gzip every written file and add a `.gz` suffix
    pub compression: bool,

    /// Optional XSL stylesheet referenced from every sitemap
    pub stylesheet_url: Option<String>,

    /// Public base URL the sitemap files are served from, when it differs
    /// from `base_url`
    pub sitemap_index_url: Option<String>,

    /// Search engine ping URL templates containing `{sitemap}`
    pub ping_templates: Vec<String>,

    /// Name of the robots file updated by `update_robots`
    pub robots_filename: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            save_directory: PathBuf::from("."),
            sitemap_filename: DEFAULT_SITEMAP_FILENAME.to_string(),
            sitemap_index_filename: DEFAULT_SITEMAP_INDEX_FILENAME.to_string(),
            max_urls_per_sitemap: MAX_URLS_PER_SITEMAP,
            max_bytes_per_sitemap: MAX_BYTES_PER_SITEMAP,
            max_images_per_url: MAX_IMAGES_PER_URL,
            max_url_length: MAX_URL_LENGTH,
            max_sitemaps_per_index: MAX_SITEMAPS_PER_INDEX,
            compression: false,
            stylesheet_url: None,
            sitemap_index_url: None,
            ping_templates: DEFAULT_PING_TEMPLATES.iter().map(|t| t.to_string()).collect(),
            robots_filename: DEFAULT_ROBOTS_FILENAME.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration with defaults for everything except the base
    /// URL and the output directory.
    pub fn new(base_url: impl Into<String>, save_directory: impl Into<PathBuf>) -> Self {
        Self {
            base_url: base_url.into(),
            save_directory: save_directory.into(),
            ..Default::default()
        }
    }

    /// Checks every field and reports the first invalid one.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        validate_http_url("base_url", &self.base_url)?;
        if let Some(index_url) = &self.sitemap_index_url {
            validate_http_url("sitemap_index_url", index_url)?;
        }

        validate_limit("max_urls_per_sitemap", self.max_urls_per_sitemap, MAX_URLS_PER_SITEMAP)?;
        validate_limit("max_bytes_per_sitemap", self.max_bytes_per_sitemap, MAX_BYTES_PER_SITEMAP)?;
        validate_limit("max_images_per_url", self.max_images_per_url, MAX_IMAGES_PER_URL)?;
        validate_limit("max_url_length", self.max_url_length, MAX_URL_LENGTH)?;
        validate_limit(
            "max_sitemaps_per_index",
            self.max_sitemaps_per_index,
            MAX_SITEMAPS_PER_INDEX,
        )?;

        validate_filename("sitemap_filename", &self.sitemap_filename)?;
        validate_filename("sitemap_index_filename", &self.sitemap_index_filename)?;
        validate_filename("robots_filename", &self.robots_filename)?;
        if self.sitemap_filename == self.sitemap_index_filename {
            return Err(ConfigValidationError::new(
                "sitemap_index_filename",
                "must differ from sitemap_filename",
            ));
        }
        if self.is_numbered_sitemap_filename(&self.sitemap_index_filename) {
            return Err(ConfigValidationError::new(
                "sitemap_index_filename",
                format!(
                    "must not look like a numbered sitemap such as {}",
                    self.numbered_sitemap_filename(1)
                ),
            ));
        }

        if let Some(stylesheet) = &self.stylesheet_url {
            if stylesheet.is_empty() || stylesheet.contains('"') || stylesheet.contains("?>") {
                return Err(ConfigValidationError::new(
                    "stylesheet_url",
                    "must be non-empty and must not contain double quotes or '?>'",
                ));
            }
        }

        if self.ping_templates.iter().any(|t| t.trim().is_empty()) {
            return Err(ConfigValidationError::new(
                "ping_templates",
                "templates must not be empty",
            ));
        }

        Ok(())
    }

    /// Base URL the generated files are published under.
    pub fn public_base_url(&self) -> &str {
        self.sitemap_index_url.as_deref().unwrap_or(&self.base_url)
    }

    /// Public URL of a file written to the save directory.
    pub fn file_url(&self, filename: &str) -> String {
        format!("{}/{}", self.public_base_url().trim_end_matches('/'), filename)
    }

    /// Name of the `number`-th sitemap when the run is split across files.
    ///
    /// The number goes right before the extension: `sitemap.xml` becomes
    /// `sitemap3.xml`, and a name without extension just gets the suffix.
    pub fn numbered_sitemap_filename(&self, number: usize) -> String {
        match self.sitemap_filename.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => format!("{stem}{number}.{ext}"),
            _ => format!("{}{number}", self.sitemap_filename),
        }
    }

    /// Whether `name` is one of the names `numbered_sitemap_filename` can
    /// produce.
    pub fn is_numbered_sitemap_filename(&self, name: &str) -> bool {
        let (stem, suffix) = match self.sitemap_filename.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => (stem, &self.sitemap_filename[stem.len()..]),
            _ => (self.sitemap_filename.as_str(), ""),
        };
        name.strip_prefix(stem)
            .and_then(|rest| rest.strip_suffix(suffix))
            .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
    }
}

fn validate_http_url(field: &'static str, value: &str) -> Result<(), ConfigValidationError> {
    let parsed = url::Url::parse(value).map_err(|e| {
        ConfigValidationError::new(
            field,
            format!("must be an absolute URL such as https://example.com ({e})"),
        )
    })?;
    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(()),
        _ => Err(ConfigValidationError::new(
            field,
            "must use the http or https scheme and include a host",
        )),
    }
}

fn validate_limit(field: &'static str, value: usize, max: usize) -> Result<(), ConfigValidationError> {
    if value == 0 || value > max {
        return Err(ConfigValidationError::new(
            field,
            format!("must be greater than 0 and at most {max}, got {value}"),
        ));
    }
    Ok(())
}

fn validate_filename(field: &'static str, value: &str) -> Result<(), ConfigValidationError> {
    if value.is_empty() || value.contains('/') || value.contains('\\') {
        return Err(ConfigValidationError::new(
            field,
            "must be a plain file name without path separators",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> GeneratorConfig {
        GeneratorConfig::new("https://example.com", "/tmp")
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(log::LevelFilter::from(LogLevel::Warn), log::LevelFilter::Warn);
        assert_eq!(log::LevelFilter::from(LogLevel::Info), log::LevelFilter::Info);
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = GeneratorConfig::default();
        assert_eq!(config.sitemap_filename, "sitemap.xml");
        assert_eq!(config.sitemap_index_filename, "sitemap-index.xml");
        assert_eq!(config.max_urls_per_sitemap, 50_000);
        assert_eq!(config.max_bytes_per_sitemap, 10_485_760);
        assert_eq!(config.max_images_per_url, 1000);
        assert!(!config.compression);
        assert!(config.stylesheet_url.is_none());
        assert_eq!(config.ping_templates.len(), 1);
    }

    #[test]
    fn test_validate_accepts_defaults_with_base_url() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_base_url() {
        let err = GeneratorConfig::default().validate().unwrap_err();
        assert_eq!(err.field, "base_url");
    }

    #[test]
    fn test_validate_rejects_non_http_base_url() {
        let mut config = valid_config();
        config.base_url = "ftp://example.com".to_string();
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "base_url");
        assert!(err.message.contains("http"));
    }

    #[test]
    fn test_validate_limits() {
        let mut config = valid_config();
        config.max_urls_per_sitemap = 0;
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "max_urls_per_sitemap");
        assert!(err.message.contains("greater than 0"));

        let mut config = valid_config();
        config.max_urls_per_sitemap = 50_001;
        let err = config.validate().unwrap_err();
        assert!(err.message.contains("50000"));

        let mut config = valid_config();
        config.max_urls_per_sitemap = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_filenames() {
        let mut config = valid_config();
        config.sitemap_filename = "nested/sitemap.xml".to_string();
        assert_eq!(config.validate().unwrap_err().field, "sitemap_filename");

        let mut config = valid_config();
        config.sitemap_index_filename = config.sitemap_filename.clone();
        assert_eq!(config.validate().unwrap_err().field, "sitemap_index_filename");
    }

    #[test]
    fn test_validate_rejects_index_named_like_numbered_sitemap() {
        let mut config = valid_config();
        config.sitemap_index_filename = "sitemap2.xml".to_string();
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "sitemap_index_filename");
        assert!(err.message.contains("sitemap1.xml"));

        config.sitemap_index_filename = "sitemap-2.xml".to_string();
        assert!(config.validate().is_ok());
        config.sitemap_index_filename = "sitemaps.xml".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_numbered_sitemap_filename() {
        let mut config = valid_config();
        assert!(config.is_numbered_sitemap_filename("sitemap1.xml"));
        assert!(config.is_numbered_sitemap_filename("sitemap40.xml"));
        assert!(!config.is_numbered_sitemap_filename("sitemap.xml"));
        assert!(!config.is_numbered_sitemap_filename("sitemap1a.xml"));
        assert!(!config.is_numbered_sitemap_filename("sitemap-index.xml"));

        config.sitemap_filename = "sitemap".to_string();
        assert!(config.is_numbered_sitemap_filename("sitemap7"));
        assert!(!config.is_numbered_sitemap_filename("sitemap"));
    }

    #[test]
    fn test_validate_stylesheet_quotes() {
        let mut config = valid_config();
        config.stylesheet_url = Some("style\".xsl".to_string());
        assert_eq!(config.validate().unwrap_err().field, "stylesheet_url");
    }

    #[test]
    fn test_validate_stylesheet_rejects_pi_terminator() {
        let mut config = valid_config();
        config.stylesheet_url = Some("https://example.com/a?>b.xsl".to_string());
        assert_eq!(config.validate().unwrap_err().field, "stylesheet_url");

        config.stylesheet_url = Some("https://example.com/style.xsl?v=2".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_numbered_sitemap_filename() {
        let mut config = valid_config();
        assert_eq!(config.numbered_sitemap_filename(1), "sitemap1.xml");
        assert_eq!(config.numbered_sitemap_filename(12), "sitemap12.xml");

        config.sitemap_filename = "custom.xml".to_string();
        assert_eq!(config.numbered_sitemap_filename(2), "custom2.xml");

        config.sitemap_filename = "sitemap".to_string();
        assert_eq!(config.numbered_sitemap_filename(3), "sitemap3");
    }

    #[test]
    fn test_file_url_uses_index_override() {
        let mut config = GeneratorConfig::new("https://example.com/submodule/", "/tmp");
        assert_eq!(
            config.file_url("sitemap.xml"),
            "https://example.com/submodule/sitemap.xml"
        );

        config.sitemap_index_url = Some("https://example.com/sitemaps/".to_string());
        assert_eq!(
            config.file_url("sitemap1.xml"),
            "https://example.com/sitemaps/sitemap1.xml"
        );
    }
}
