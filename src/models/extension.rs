//! Closed set of sitemap extensions.

use serde_json::Value;

use crate::error_handling::ValidationError;

use super::image::ImageExtension;
use super::video::VideoExtension;

/// Key of the Google Video extension in raw payload maps.
pub const GOOGLE_VIDEO: &str = "google_video";
/// Key of the Google Image extension in raw payload maps.
pub const GOOGLE_IMAGE: &str = "google_image";

/// An extension block attached to a URL.
#[derive(Debug, Clone, PartialEq)]
pub enum Extension {
    GoogleVideo(VideoExtension),
    GoogleImage(ImageExtension),
}

impl Extension {
    /// The raw payload key this extension is known by.
    pub fn key(&self) -> &'static str {
        match self {
            Extension::GoogleVideo(_) => GOOGLE_VIDEO,
            Extension::GoogleImage(_) => GOOGLE_IMAGE,
        }
    }

    /// Converts a raw `key => payload` pair into a typed extension.
    ///
    /// Unknown keys yield `Ok(None)` so callers can pass through payloads for
    /// extensions this crate does not render yet.
    pub fn from_raw(key: &str, payload: Value) -> Result<Option<Self>, ValidationError> {
        let malformed = |e: serde_json::Error| ValidationError::MalformedExtension {
            extension: key.to_string(),
            reason: e.to_string(),
        };
        match key {
            GOOGLE_VIDEO => serde_json::from_value(payload)
                .map(|video| Some(Extension::GoogleVideo(video)))
                .map_err(malformed),
            GOOGLE_IMAGE => serde_json::from_value(payload)
                .map(|images| Some(Extension::GoogleImage(images)))
                .map_err(malformed),
            _ => Ok(None),
        }
    }
}

impl From<VideoExtension> for Extension {
    fn from(video: VideoExtension) -> Self {
        Extension::GoogleVideo(video)
    }
}

impl From<ImageExtension> for Extension {
    fn from(images: ImageExtension) -> Self {
        Extension::GoogleImage(images)
    }
}
