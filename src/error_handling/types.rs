//! Error type definitions.
//!
//! This module defines all error types surfaced by the generator. Every failure
//! names the offending field or limit; nothing is swallowed.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// A configuration field failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid configuration for `{field}`: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending `GeneratorConfig` field
    pub field: &'static str,
    /// What is wrong and what is expected
    pub message: String,
}

impl ConfigValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// A URL record (or one of its extensions) was rejected by `add_url`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The path could not be resolved into an absolute http(s) URL.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The encoded location exceeds the protocol limit.
    #[error("URL is too long: {length} characters after encoding, maximum is {max}")]
    UrlTooLong { length: usize, max: usize },

    /// Priority outside [0.0, 1.0].
    #[error("Invalid priority {0}: must be between 0.0 and 1.0")]
    InvalidPriority(f64),

    /// Change frequency not in the fixed set.
    #[error(
        "Invalid change frequency '{0}': expected one of always, hourly, daily, weekly, monthly, yearly, never"
    )]
    InvalidChangeFrequency(String),

    /// One or more required extension fields are absent or empty.
    #[error("Missing required fields: {}", .fields.join(", "))]
    MissingRequiredFields {
        extension: &'static str,
        fields: Vec<&'static str>,
    },

    /// More images than the configured per-URL maximum.
    #[error(
        "Too many images for a single URL. Maximum number of images allowed per page is {max}, got {count}. For more information, see {schema}",
        schema = crate::config::IMAGE_SCHEMA_URL
    )]
    TooManyImages { max: usize, count: usize },

    /// A present extension field holds an out-of-range value.
    #[error("Invalid value for {extension}.{field}: {reason}")]
    InvalidExtensionField {
        extension: &'static str,
        field: &'static str,
        reason: String,
    },

    /// A raw extension payload does not have the expected shape.
    #[error("Malformed {extension} extension: {reason}")]
    MalformedExtension { extension: String, reason: String },

    /// The same extension was attached twice to one URL.
    #[error("Extension {0} was supplied more than once for the same URL")]
    DuplicateExtension(&'static str),
}

/// Failure reported by the runtime's HTTP collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// The request could not be sent or no response was received.
    #[error("HTTP request to {url} failed: {reason}")]
    Http { url: String, reason: String },
}

/// Top-level error returned by the generator API.
#[derive(Error, Debug)]
pub enum SitemapError {
    /// A URL record failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The configuration failed validation at construction.
    #[error(transparent)]
    Config(#[from] ConfigValidationError),

    /// The default runtime could not be set up.
    #[error(transparent)]
    Initialization(#[from] InitializationError),

    /// The save directory cannot be written to.
    #[error("Save directory is not writable: {}", .0.display())]
    NotWritable(PathBuf),

    /// A runtime capability required by the operation is missing.
    #[error("Required capability is unavailable: {0}")]
    CapabilityUnavailable(String),

    /// Writing, compressing or renaming a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The XML writer failed.
    #[error("XML serialization error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// More sitemap files were produced than one index may reference.
    #[error("Too many sitemap files for one index: {count} (maximum {max})")]
    IndexLimitExceeded { count: usize, max: usize },

    /// The operation needs `finalize` to have run first.
    #[error("The sitemap has not been finalized yet")]
    NotFinalized,

    /// The generator was already finalized.
    #[error("The sitemap has already been finalized")]
    AlreadyFinalized,
}
