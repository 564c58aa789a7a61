// Shared test helpers for generator setup and output inspection.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::cell::RefCell;
use std::fs;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use quick_xml::events::Event;
use quick_xml::Reader;
use tempfile::TempDir;

use sitemap_generator::{GeneratorConfig, Runtime, RuntimeError, SitemapGenerator};

/// Runtime double: always writable, optional HTTP, records every request.
#[allow(dead_code)] // Used by other test files
pub struct MockRuntime {
    pub http: bool,
    pub status: u16,
    pub requests: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl MockRuntime {
    pub fn online(status: u16) -> Self {
        Self {
            http: true,
            status,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn offline() -> Self {
        Self {
            http: false,
            status: 0,
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl Runtime for MockRuntime {
    fn is_writable(&self, dir: &Path) -> bool {
        dir.is_dir()
    }

    fn has_http_capability(&self) -> bool {
        self.http
    }

    fn http_get(&self, url: &str) -> Result<u16, RuntimeError> {
        self.requests.borrow_mut().push(url.to_string());
        Ok(self.status)
    }
}

/// Default configuration writing into `dir`.
#[allow(dead_code)]
pub fn test_config(dir: &TempDir) -> GeneratorConfig {
    GeneratorConfig::new("https://example.com", dir.path())
}

/// Generator over `config` with an offline mock runtime.
#[allow(dead_code)]
pub fn generator(config: GeneratorConfig) -> SitemapGenerator<MockRuntime> {
    SitemapGenerator::with_runtime(config, MockRuntime::offline())
        .expect("Failed to create generator")
}

/// Reads a produced file, transparently gunzipping `.gz` files.
#[allow(dead_code)]
pub fn read_output(path: &Path) -> String {
    let bytes = fs::read(path).unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    if path.extension().is_some_and(|ext| ext == "gz") {
        let mut xml = String::new();
        GzDecoder::new(bytes.as_slice())
            .read_to_string(&mut xml)
            .expect("Failed to decompress");
        xml
    } else {
        String::from_utf8(bytes).expect("Output is not UTF-8")
    }
}

/// Unescaped text of every element named `name`, in document order.
#[allow(dead_code)]
pub fn element_texts(xml: &str, name: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut texts = Vec::new();
    let mut inside = false;
    loop {
        match reader.read_event().expect("Malformed XML") {
            Event::Start(e) if e.name().as_ref() == name.as_bytes() => inside = true,
            Event::End(e) if e.name().as_ref() == name.as_bytes() => inside = false,
            Event::Text(t) if inside => {
                texts.push(t.unescape().expect("Bad escape").into_owned());
            }
            Event::Eof => break,
            _ => {}
        }
    }
    texts
}

/// Names of the files in `dir`, sorted.
#[allow(dead_code)]
pub fn file_names(dir: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir.path())
        .expect("Failed to list output directory")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
