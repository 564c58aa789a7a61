//! Google Image sitemap extension payload.

use serde::Deserialize;

/// One `<image:image>` entry. Only `loc` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImageEntry {
    pub loc: String,
    pub title: Option<String>,
    pub caption: Option<String>,
    pub geo_location: Option<String>,
    pub license: Option<String>,
}

impl ImageEntry {
    pub fn new(loc: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            ..Default::default()
        }
    }
}

/// All images attached to a URL, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageExtension {
    pub images: Vec<ImageEntry>,
}

impl From<ImageEntry> for ImageExtension {
    fn from(image: ImageEntry) -> Self {
        Self {
            images: vec![image],
        }
    }
}

impl From<Vec<ImageEntry>> for ImageExtension {
    fn from(images: Vec<ImageEntry>) -> Self {
        Self { images }
    }
}

impl<'de> Deserialize<'de> for ImageExtension {
    /// Accepts either a single image object or an array of them.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        super::one_or_many(deserializer).map(|images| Self { images })
    }
}
