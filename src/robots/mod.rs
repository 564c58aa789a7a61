//! robots.txt maintenance.

use std::fs;
use std::io::Write;
use std::path::Path;

use log::{debug, info};

use crate::config::DEFAULT_ROBOTS_PREAMBLE;
use crate::error_handling::SitemapError;

/// Adds a `Sitemap: <entry_url>` line to the robots file at `path`.
///
/// A missing file is created with a permissive preamble. The line is not
/// added twice. Returns whether the file was changed.
pub fn update_robots(path: &Path, entry_url: &str) -> Result<bool, SitemapError> {
    let line = format!("Sitemap: {entry_url}");

    let existing = match fs::read_to_string(path) {
        Ok(contents) => Some(contents),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(e.into()),
    };

    let mut addition = String::new();
    match &existing {
        Some(contents) => {
            if contents.lines().any(|l| l.trim_end() == line) {
                debug!("{} already references {entry_url}", path.display());
                return Ok(false);
            }
            if !contents.is_empty() && !contents.ends_with('\n') {
                addition.push('\n');
            }
        }
        None => addition.push_str(DEFAULT_ROBOTS_PREAMBLE),
    }
    addition.push_str(&line);
    addition.push('\n');

    let mut file = fs::OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(addition.as_bytes())?;
    info!("Added '{line}' to {}", path.display());
    Ok(true)
}
