//! Host capabilities the generator depends on.
//!
//! The generator never inspects the environment directly: it asks a `Runtime`
//! whether the save directory is writable and whether HTTP is available, and
//! sends pings through it. `SystemRuntime` talks to the real filesystem and
//! network; tests substitute their own implementation.

use std::path::Path;

use log::{debug, warn};
use reqwest::blocking::Client;

use crate::error_handling::{InitializationError, RuntimeError};
use crate::initialization::init_client;

/// Filesystem and HTTP capabilities queried by the generator.
pub trait Runtime {
    /// Whether files can be created inside `dir`.
    fn is_writable(&self, dir: &Path) -> bool;

    /// Whether outbound HTTP requests can be made at all.
    fn has_http_capability(&self) -> bool;

    /// Performs a GET request and returns the response status code.
    fn http_get(&self, url: &str) -> Result<u16, RuntimeError>;
}

/// `Runtime` backed by the local filesystem and a blocking reqwest client.
pub struct SystemRuntime {
    client: Option<Client>,
}

impl SystemRuntime {
    /// Builds the runtime with an HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be
    /// built (for example when no TLS backend is usable).
    pub fn new() -> Result<Self, InitializationError> {
        Ok(Self {
            client: Some(init_client()?),
        })
    }

    /// A runtime without HTTP. Submission fails with a capability error.
    pub fn offline() -> Self {
        Self { client: None }
    }
}

impl Runtime for SystemRuntime {
    fn is_writable(&self, dir: &Path) -> bool {
        if !dir.is_dir() {
            debug!("{} is not a directory", dir.display());
            return false;
        }
        // Check with a real file; permission bits alone miss read-only mounts
        match tempfile::NamedTempFile::new_in(dir) {
            Ok(_) => true,
            Err(e) => {
                warn!("Cannot create files in {}: {e}", dir.display());
                false
            }
        }
    }

    fn has_http_capability(&self) -> bool {
        self.client.is_some()
    }

    fn http_get(&self, url: &str) -> Result<u16, RuntimeError> {
        let client = self.client.as_ref().ok_or_else(|| RuntimeError::Http {
            url: url.to_string(),
            reason: "no HTTP client configured".to_string(),
        })?;
        let response = client.get(url).send().map_err(|e| RuntimeError::Http {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(response.status().as_u16())
    }
}
