//! HTTP client initialization.

use std::time::Duration;

use reqwest::blocking::{Client, ClientBuilder};

use crate::config::{DEFAULT_USER_AGENT, PING_TIMEOUT_SECS};

/// Initializes the blocking HTTP client used to ping search engines.
///
/// Creates a `reqwest::blocking::Client` configured with:
/// - the crate User-Agent
/// - a per-request timeout of `PING_TIMEOUT_SECS`
/// - default redirect following
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client() -> Result<Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(PING_TIMEOUT_SECS))
        .user_agent(DEFAULT_USER_AGENT)
        .build()
}
