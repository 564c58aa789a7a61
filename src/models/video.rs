//! Google Video sitemap extension payload.
//!
//! Field names follow the `video:` schema so that raw JSON payloads
//! deserialize straight into these types.

use serde::Deserialize;
use strum_macros::{AsRefStr, Display};

use super::one_or_many;

/// `yes` / `no` flags used by several video fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

/// `relationship` attribute of `<video:restriction>` and `<video:platform>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Relationship {
    Allow,
    Deny,
}

/// A space-separated list (countries or platforms) with an allow/deny
/// relationship.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RelationshipList {
    pub relationship: Relationship,
    pub value: String,
}

/// One `<video:price>` element.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VideoPrice {
    pub currency: String,
    pub value: f64,
    #[serde(default, rename = "type")]
    pub price_type: Option<String>,
    #[serde(default)]
    pub resolution: Option<String>,
}

/// `<video:uploader>`; `info` becomes an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Uploader {
    #[serde(default)]
    pub info: Option<String>,
    pub value: String,
}

/// The video attached to a URL.
///
/// `thumbnail_loc`, `title` and `description` are required; the validator
/// rejects the record when any of them is empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VideoExtension {
    pub thumbnail_loc: String,
    pub title: String,
    pub description: String,
    #[serde(deserialize_with = "one_or_many")]
    pub content_loc: Vec<String>,
    pub player_loc: Option<String>,
    /// Length in seconds.
    pub duration: Option<u32>,
    pub expiration_date: Option<String>,
    pub rating: Option<f64>,
    pub view_count: Option<u64>,
    pub publication_date: Option<String>,
    pub family_friendly: Option<YesNo>,
    pub restriction: Option<RelationshipList>,
    pub platform: Option<RelationshipList>,
    #[serde(deserialize_with = "one_or_many")]
    pub price: Vec<VideoPrice>,
    pub requires_subscription: Option<YesNo>,
    pub uploader: Option<Uploader>,
    pub live: Option<YesNo>,
    #[serde(deserialize_with = "one_or_many")]
    pub tag: Vec<String>,
    pub category: Option<String>,
}

impl VideoExtension {
    /// A video with only the required fields set.
    pub fn new(
        thumbnail_loc: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            thumbnail_loc: thumbnail_loc.into(),
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }
}
