//! Command-line options.

use std::path::PathBuf;

use clap::Parser;

use crate::config::constants::{MAX_BYTES_PER_SITEMAP, MAX_URLS_PER_SITEMAP};
use crate::config::types::{GeneratorConfig, LogFormat, LogLevel};

/// Command-line options for the `sitemap_generator` binary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sitemap_generator",
    about = "Builds XML sitemaps (and a sitemap index) from a list of URLs"
)]
pub struct Opt {
    /// File with one path or URL per line (`-` reads stdin)
    pub file: PathBuf,

    /// Base URL that relative paths are resolved against
    #[arg(long)]
    pub base_url: String,

    /// Directory the sitemap files are written to
    #[arg(long, default_value = ".")]
    pub save_dir: PathBuf,

    /// Sitemap filename used when a single file is produced
    #[arg(long, default_value = "sitemap.xml")]
    pub sitemap_filename: String,

    /// Sitemap index filename
    #[arg(long, default_value = "sitemap-index.xml")]
    pub index_filename: String,

    /// Public URL the sitemap files are served from (defaults to --base-url)
    #[arg(long)]
    pub index_url: Option<String>,

    /// Maximum URLs per sitemap file
    #[arg(long, default_value_t = MAX_URLS_PER_SITEMAP)]
    pub max_urls: usize,

    /// Maximum estimated bytes per sitemap file
    #[arg(long, default_value_t = MAX_BYTES_PER_SITEMAP)]
    pub max_bytes: usize,

    /// Gzip the produced files
    #[arg(long)]
    pub compress: bool,

    /// XSL stylesheet referenced from every sitemap
    #[arg(long)]
    pub stylesheet: Option<String>,

    /// Append a `Sitemap:` line to robots.txt in the save directory
    #[arg(long)]
    pub update_robots: bool,

    /// Ping the configured search engines once the sitemap is written
    #[arg(long)]
    pub ping: bool,

    /// Extra ping URL template (may contain `{sitemap}`)
    #[arg(long)]
    pub ping_url: Option<String>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl From<&Opt> for GeneratorConfig {
    fn from(opt: &Opt) -> Self {
        GeneratorConfig {
            base_url: opt.base_url.clone(),
            save_directory: opt.save_dir.clone(),
            sitemap_filename: opt.sitemap_filename.clone(),
            sitemap_index_filename: opt.index_filename.clone(),
            max_urls_per_sitemap: opt.max_urls,
            max_bytes_per_sitemap: opt.max_bytes,
            compression: opt.compress,
            stylesheet_url: opt.stylesheet.clone(),
            sitemap_index_url: opt.index_url.clone(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opt_into_config() {
        let opt = Opt::parse_from([
            "sitemap_generator",
            "urls.txt",
            "--base-url",
            "https://example.com",
            "--save-dir",
            "out",
            "--max-urls",
            "10",
            "--compress",
        ]);
        let config = GeneratorConfig::from(&opt);
        assert_eq!(config.base_url, "https://example.com");
        assert_eq!(config.save_directory, PathBuf::from("out"));
        assert_eq!(config.max_urls_per_sitemap, 10);
        assert!(config.compression);
        assert_eq!(config.sitemap_filename, "sitemap.xml");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_opt_requires_base_url() {
        let result = Opt::try_parse_from(["sitemap_generator", "urls.txt"]);
        assert!(result.is_err());
    }
}
