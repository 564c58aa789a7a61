//! Sitemap index assembly.

use log::info;

use crate::config::GeneratorConfig;
use crate::error_handling::SitemapError;
use crate::render::SitemapRenderer;
use crate::storage::{FileSink, ProducedFile};

/// Writes the sitemap index when more than one sitemap file was produced.
///
/// Returns `None` for a single file, which then serves as the entry point on
/// its own. The index references every file in production order.
pub fn assemble_index(
    config: &GeneratorConfig,
    renderer: &SitemapRenderer,
    sink: &FileSink,
) -> Result<Option<ProducedFile>, SitemapError> {
    let files = sink.produced();
    if files.len() <= 1 {
        return Ok(None);
    }
    if files.len() > config.max_sitemaps_per_index {
        return Err(SitemapError::IndexLimitExceeded {
            count: files.len(),
            max: config.max_sitemaps_per_index,
        });
    }

    let document = renderer.render_index(files)?;
    let index = sink.write_untracked(&config.sitemap_index_filename, &document)?;
    info!(
        "Wrote sitemap index {} referencing {} files",
        index.storage_path.display(),
        files.len()
    );
    Ok(Some(index))
}
