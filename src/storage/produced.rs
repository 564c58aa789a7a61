//! Produced file descriptor.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// A file written by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducedFile {
    /// URL the file is published under
    pub public_url: String,
    /// Where the file was written
    pub storage_path: PathBuf,
    /// When the file was written; used as `lastmod` in the index
    pub last_modified_at: DateTime<Utc>,
}

impl ProducedFile {
    pub fn new(
        public_url: impl Into<String>,
        storage_path: impl Into<PathBuf>,
        last_modified_at: DateTime<Utc>,
    ) -> Self {
        Self {
            public_url: public_url.into(),
            storage_path: storage_path.into(),
            last_modified_at,
        }
    }

    /// File name component of `storage_path`.
    pub fn filename(&self) -> Option<&str> {
        self.storage_path.file_name().and_then(|name| name.to_str())
    }
}
