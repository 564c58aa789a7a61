//! Batch writer implementation.
//!
//! This module provides the BatchWriter struct and its methods for collecting
//! records and deciding when the current file is full.

mod flush;

use log::trace;

use crate::config::GeneratorConfig;
use crate::error_handling::SitemapError;
use crate::models::UrlRecord;
use crate::render::SitemapRenderer;
use crate::storage::FileSink;

use super::types::{AppendOutcome, BatchLimits};

/// Batch writer that collects records and writes one sitemap file per batch
pub struct BatchWriter {
    config: GeneratorConfig,
    limits: BatchLimits,
    renderer: SitemapRenderer,
    pub(crate) sink: FileSink,
    pub(crate) buffer: Vec<UrlRecord>,
    /// Estimated size of the current batch, document framing included
    pub(crate) estimated_bytes: usize,
    /// Size of an empty `urlset` document
    overhead: usize,
    /// Number of files flushed so far
    pub(crate) files_written: usize,
}

impl BatchWriter {
    pub fn new(config: GeneratorConfig) -> Result<Self, SitemapError> {
        let renderer = SitemapRenderer::from_config(&config);
        let overhead = renderer.document_overhead()?;
        Ok(BatchWriter {
            limits: BatchLimits::from(&config),
            sink: FileSink::new(config.clone()),
            config,
            renderer,
            buffer: Vec::new(),
            estimated_bytes: overhead,
            overhead,
            files_written: 0,
        })
    }

    /// Adds a record, writing out the current batch first if the record
    /// would push it past either limit.
    ///
    /// A record that alone exceeds the byte limit still goes into an empty
    /// batch; it is never split or dropped.
    pub fn add_record(&mut self, record: UrlRecord) -> Result<AppendOutcome, SitemapError> {
        let size = self.renderer.estimate_url_size(&record)?;

        let over_count = self.buffer.len() + 1 > self.limits.max_records;
        let over_bytes = self.estimated_bytes + size > self.limits.max_bytes;

        let outcome = if !self.buffer.is_empty() && (over_count || over_bytes) {
            trace!(
                "Batch full ({} records, ~{} bytes), starting a new file",
                self.buffer.len(),
                self.estimated_bytes
            );
            match self.flush()? {
                Some(file) => AppendOutcome::FlushedAndAppended(file),
                None => AppendOutcome::Appended,
            }
        } else {
            AppendOutcome::Appended
        };

        self.buffer.push(record);
        self.estimated_bytes += size;
        Ok(outcome)
    }

    /// Whether the current batch holds no records.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of records in the current batch.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Estimated uncompressed size of the current batch in bytes.
    pub fn estimated_bytes(&self) -> usize {
        self.estimated_bytes
    }

    /// Sink holding the files written so far.
    pub fn sink(&self) -> &FileSink {
        &self.sink
    }
}
