//! Process-level setup: logging and the HTTP client used for pings.
//!
//! Both are only needed by the binary and by `SystemRuntime`; the generator
//! itself never touches global state.

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
