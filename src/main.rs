//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `sitemap_generator` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Reading the URL list and printing a summary
//!
//! All core functionality is implemented in the library crate.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use sitemap_generator::config::Opt;
use sitemap_generator::initialization::init_logger_with;
use sitemap_generator::{GeneratorConfig, SitemapError, SitemapGenerator};

fn main() -> Result<()> {
    // Lets RUST_LOG live in a .env file next to the URL list
    let _ = dotenvy::dotenv();

    let opt = Opt::parse();
    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    match run(&opt) {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("sitemap_generator error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(opt: &Opt) -> Result<()> {
    let config = GeneratorConfig::from(opt);
    if opt.ping_url.is_some() && !opt.ping {
        warn!("--ping-url has no effect without --ping");
    }

    let mut generator = SitemapGenerator::new(config).context("Failed to set up the generator")?;

    let reader = open_input(&opt.file)?;
    let mut rejected = 0usize;
    for (number, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", number + 1))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match generator.add_url(line) {
            Ok(()) => {}
            Err(SitemapError::Validation(e)) => {
                warn!("Skipping line {}: {e}", number + 1);
                rejected += 1;
            }
            Err(e) => return Err(e).context("Failed to write sitemap"),
        }
    }

    let result = generator.finalize().context("Failed to finalize sitemap")?.clone();

    if opt.update_robots {
        generator
            .update_robots()
            .context("Failed to update robots.txt")?;
    }

    if opt.ping {
        let outcomes = generator
            .submit_sitemap(opt.ping_url.as_deref())
            .context("Failed to submit sitemap")?;
        let ok = outcomes.iter().filter(|o| o.is_success()).count();
        info!("{ok} of {} pings succeeded", outcomes.len());
    }

    println!(
        "Wrote {} URL{} into {} sitemap file{} ({} rejected)",
        generator.urls_added(),
        if generator.urls_added() == 1 { "" } else { "s" },
        result.sitemaps.len(),
        if result.sitemaps.len() == 1 { "" } else { "s" },
        rejected
    );
    println!("Entry point: {}", result.sitemaps_index_url);
    Ok(())
}

fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}
