//! Generation result.

use std::path::PathBuf;

use crate::storage::ProducedFile;

/// Files produced by a finalized run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    /// Paths of every sitemap file, in production order
    pub sitemaps_location: Vec<PathBuf>,
    /// Path of the index file, when one was written
    pub sitemaps_index_location: Option<PathBuf>,
    /// Public URL of the entry point: the index if there is one, otherwise
    /// the single sitemap
    pub sitemaps_index_url: String,
    /// Full descriptors of the sitemap files
    pub sitemaps: Vec<ProducedFile>,
}

impl GenerationResult {
    pub(crate) fn new(sitemaps: Vec<ProducedFile>, index: Option<ProducedFile>) -> Self {
        let entry_url = match (&index, sitemaps.first()) {
            (Some(index), _) => index.public_url.clone(),
            (None, Some(single)) => single.public_url.clone(),
            (None, None) => String::new(),
        };
        Self {
            sitemaps_location: sitemaps.iter().map(|f| f.storage_path.clone()).collect(),
            sitemaps_index_location: index.map(|f| f.storage_path),
            sitemaps_index_url: entry_url,
            sitemaps,
        }
    }

    /// Whether the run was split across several files.
    pub fn has_index(&self) -> bool {
        self.sitemaps_index_location.is_some()
    }
}
