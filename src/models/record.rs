//! Validated URL record.

use chrono::{DateTime, FixedOffset};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use super::image::ImageExtension;
use super::video::VideoExtension;

/// How often a page is expected to change (`<changefreq>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

/// An hreflang-tagged translation of the page, rendered as
/// `<xhtml:link rel="alternate" hreflang="..." href="..."/>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternate {
    pub hreflang: String,
    pub href: String,
}

impl Alternate {
    pub fn new(hreflang: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            hreflang: hreflang.into(),
            href: href.into(),
        }
    }
}

/// A URL accepted by the validator and ready to be batched.
///
/// `location` is the resolved absolute URL, not yet encoded; encoding happens
/// when the record is rendered. Records are never mutated once created.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlRecord {
    pub location: String,
    pub last_modified: Option<DateTime<FixedOffset>>,
    pub change_frequency: Option<ChangeFrequency>,
    pub priority: Option<f64>,
    pub alternates: Vec<Alternate>,
    pub video: Option<VideoExtension>,
    pub images: Option<ImageExtension>,
}

impl UrlRecord {
    /// A record with only a location.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            last_modified: None,
            change_frequency: None,
            priority: None,
            alternates: Vec::new(),
            video: None,
            images: None,
        }
    }
}
