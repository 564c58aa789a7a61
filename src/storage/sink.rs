//! File sink.
//!
//! Writes each rendered document in a single call, optionally through a gzip
//! encoder, and remembers every sitemap file it produced in write order.

use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::Utc;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::{debug, info};

use crate::config::{GeneratorConfig, GZIP_SUFFIX};
use crate::error_handling::SitemapError;

use super::ProducedFile;

/// Writes documents into the save directory.
///
/// Writability of the directory is checked once by the generator; the sink
/// only surfaces the I/O errors of individual writes.
#[derive(Debug)]
pub struct FileSink {
    config: GeneratorConfig,
    produced: Vec<ProducedFile>,
}

impl FileSink {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            produced: Vec::new(),
        }
    }

    /// Name a logical file is stored under (`name` plus `.gz` when compressing).
    pub fn stored_name(&self, name: &str) -> String {
        if self.config.compression {
            format!("{name}{GZIP_SUFFIX}")
        } else {
            name.to_string()
        }
    }

    /// Writes a sitemap file and adds it to the produced list.
    pub fn write(&mut self, name: &str, bytes: &[u8]) -> Result<ProducedFile, SitemapError> {
        let file = self.store(name, bytes)?;
        self.produced.push(file.clone());
        Ok(file)
    }

    /// Writes a file that is not part of the produced sitemap list (the index).
    pub fn write_untracked(&self, name: &str, bytes: &[u8]) -> Result<ProducedFile, SitemapError> {
        self.store(name, bytes)
    }

    /// Sitemap files written so far, in write order.
    pub fn produced(&self) -> &[ProducedFile] {
        &self.produced
    }

    pub fn into_produced(self) -> Vec<ProducedFile> {
        self.produced
    }

    /// Renames the only produced file to `name`.
    ///
    /// Does nothing unless exactly one file was produced.
    pub fn rename_single(&mut self, name: &str) -> Result<(), SitemapError> {
        let filename = self.stored_name(name);
        let target = self.config.save_directory.join(&filename);
        let [only] = self.produced.as_mut_slice() else {
            return Ok(());
        };
        if only.storage_path != target {
            fs::rename(&only.storage_path, &target)?;
            debug!(
                "Renamed {} to {}",
                only.storage_path.display(),
                target.display()
            );
            only.storage_path = target;
            only.public_url = self.config.file_url(&filename);
        }
        Ok(())
    }

    fn store(&self, name: &str, bytes: &[u8]) -> Result<ProducedFile, SitemapError> {
        let filename = self.stored_name(name);
        let path = self.config.save_directory.join(&filename);

        if self.config.compression {
            let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(bytes)?;
            let compressed = encoder.finish()?;
            write_file(&path, &compressed)?;
        } else {
            write_file(&path, bytes)?;
        }

        info!("Wrote {} ({} bytes uncompressed)", path.display(), bytes.len());
        Ok(ProducedFile::new(
            self.config.file_url(&filename),
            path,
            Utc::now(),
        ))
    }
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), SitemapError> {
    fs::write(path, contents).map_err(|e| {
        SitemapError::Io(std::io::Error::new(
            e.kind(),
            format!("failed to write {}: {e}", path.display()),
        ))
    })
}
