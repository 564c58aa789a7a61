//! Error handling.
//!
//! Error types are grouped by where they surface:
//! - **Validation**: `add_url` rejected a record (never retried, never dropped)
//! - **Configuration / writability**: fatal at generator construction
//! - **Capability**: fatal when submission is attempted
//! - **I/O and XML**: surfaced from flush and finalize without cleanup

mod types;

// Re-export public API
pub use types::{
    ConfigValidationError, InitializationError, RuntimeError, SitemapError, ValidationError,
};
