//! Resolution of caller paths against the configured base URL.

use log::debug;

use crate::error_handling::ValidationError;

/// Resolves `raw` into an absolute http(s) URL.
///
/// Absolute http(s) inputs pass through untouched. Anything without a scheme
/// is treated as a path and appended to `base_url` (scheme, host and path
/// prefix), with exactly one `/` between the two. Other schemes are rejected.
pub fn resolve_location(base_url: &str, raw: &str) -> Result<String, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(invalid(raw, "URL must not be empty"));
    }

    let resolved = match url::Url::parse(raw) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" => raw.to_string(),
            other => {
                return Err(invalid(
                    raw,
                    &format!("unsupported scheme '{other}', expected http or https"),
                ))
            }
        },
        Err(url::ParseError::RelativeUrlWithoutBase) => format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            raw.trim_start_matches('/')
        ),
        Err(e) => return Err(invalid(raw, &e.to_string())),
    };

    // The resolved form must itself be a usable absolute URL
    match url::Url::parse(&resolved) {
        Ok(parsed) if parsed.host_str().is_some_and(|h| !h.is_empty()) => {
            debug!("Resolved '{raw}' to '{resolved}'");
            Ok(resolved)
        }
        Ok(_) => Err(invalid(raw, "resolved URL has no host")),
        Err(e) => Err(invalid(raw, &e.to_string())),
    }
}

fn invalid(url: &str, reason: &str) -> ValidationError {
    ValidationError::InvalidUrl {
        url: url.to_string(),
        reason: reason.to_string(),
    }
}
