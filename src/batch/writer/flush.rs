//! Batch flushing logic.

use log::{debug, info};

use crate::error_handling::SitemapError;
use crate::storage::{FileSink, ProducedFile};

use super::BatchWriter;

impl BatchWriter {
    /// Renders the current batch and writes it as the next numbered file.
    ///
    /// Returns `None` without touching the filesystem when the batch is
    /// empty. Callers may flush at any time to force a file boundary.
    pub fn flush(&mut self) -> Result<Option<ProducedFile>, SitemapError> {
        if self.buffer.is_empty() {
            return Ok(None);
        }

        let count = self.buffer.len();
        let name = self.config.numbered_sitemap_filename(self.files_written + 1);
        debug!("Flushing batch of {count} records to {name}");

        let document = self.renderer.render_urlset(&self.buffer)?;
        let file = self.sink.write(&name, &document)?;

        self.buffer.clear();
        self.estimated_bytes = self.overhead;
        self.files_written += 1;
        Ok(Some(file))
    }

    /// Writes the remaining records and settles the final file names.
    ///
    /// With no records at all an empty `urlset` is written so the entry point
    /// always exists. When exactly one file was produced it is renamed to the
    /// configured single-sitemap name.
    pub fn finish(mut self) -> Result<FileSink, SitemapError> {
        self.flush()?;

        if self.files_written == 0 {
            let document = self.renderer.render_urlset(&[])?;
            self.sink.write(&self.config.sitemap_filename, &document)?;
        } else {
            self.sink.rename_single(&self.config.sitemap_filename)?;
        }

        info!("Wrote {} sitemap file(s)", self.sink.produced().len());
        Ok(self.sink)
    }
}
