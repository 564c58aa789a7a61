//! Generator configuration and constants.
//!
//! This module provides:
//! - Protocol limits, default filenames and XML namespaces
//! - The immutable `GeneratorConfig` value and its validation
//! - CLI option types and parsing

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::Opt;
pub use constants::*;
pub use types::{GeneratorConfig, LogFormat, LogLevel};
