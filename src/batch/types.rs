//! Batch limits and append outcomes.

use crate::config::GeneratorConfig;
use crate::storage::ProducedFile;

/// Per-file limits a batch must stay within.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchLimits {
    /// Maximum number of `<url>` entries per file
    pub max_records: usize,
    /// Maximum estimated uncompressed size of a file in bytes
    pub max_bytes: usize,
}

impl From<&GeneratorConfig> for BatchLimits {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            max_records: config.max_urls_per_sitemap,
            max_bytes: config.max_bytes_per_sitemap,
        }
    }
}

/// What happened to a record passed to `BatchWriter::add_record`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The record went into the current batch.
    Appended,
    /// The current batch was written out first; the record starts a new one.
    FlushedAndAppended(ProducedFile),
}
