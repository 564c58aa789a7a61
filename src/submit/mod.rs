//! Search engine pings.
//!
//! Builds one request URL per ping template and issues them in order through
//! the runtime. Failures are reported per ping and never stop the remaining
//! ones; a missing HTTP capability fails before any request is sent.

use log::{info, warn};

use crate::config::PING_PLACEHOLDER;
use crate::error_handling::{RuntimeError, SitemapError};
use crate::location::encode_query_value;
use crate::runtime::Runtime;

/// Result of a single ping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PingOutcome {
    /// The full request URL
    pub request_url: String,
    /// HTTP status, or the transport failure
    pub result: Result<u16, RuntimeError>,
}

impl PingOutcome {
    /// Whether the endpoint answered `200 OK`.
    pub fn is_success(&self) -> bool {
        matches!(self.result, Ok(200))
    }
}

/// Builds the ping request URLs for `entry_url`, one per template, in order.
///
/// The entry URL is percent-encoded and substituted for `{sitemap}`; a
/// template without the placeholder gets it appended. Blank templates are
/// skipped.
pub fn build_ping_requests<S: AsRef<str>>(templates: &[S], entry_url: &str) -> Vec<String> {
    let encoded = encode_query_value(entry_url);
    templates
        .iter()
        .map(|template| template.as_ref().trim())
        .filter(|template| !template.is_empty())
        .map(|template| {
            if template.contains(PING_PLACEHOLDER) {
                template.replace(PING_PLACEHOLDER, &encoded)
            } else {
                format!("{template}{encoded}")
            }
        })
        .collect()
}

/// Issues every request sequentially and reports each outcome.
///
/// # Errors
///
/// Returns `SitemapError::CapabilityUnavailable` if the runtime cannot make
/// HTTP requests; nothing is sent in that case.
pub fn submit<R: Runtime + ?Sized>(
    runtime: &R,
    requests: &[String],
) -> Result<Vec<PingOutcome>, SitemapError> {
    if !runtime.has_http_capability() {
        return Err(SitemapError::CapabilityUnavailable(
            "HTTP client is required to submit sitemaps to search engines".to_string(),
        ));
    }

    let outcomes = requests
        .iter()
        .map(|request_url| {
            let result = runtime.http_get(request_url);
            match &result {
                Ok(200) => info!("Pinged {request_url}"),
                Ok(status) => warn!("Ping {request_url} returned HTTP {status}"),
                Err(e) => warn!("Ping failed: {e}"),
            }
            PingOutcome {
                request_url: request_url.clone(),
                result,
            }
        })
        .collect();
    Ok(outcomes)
}
