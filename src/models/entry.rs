//! Unvalidated input accepted by `add_url`.

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use super::extension::Extension;
use super::image::ImageExtension;
use super::record::Alternate;
use super::video::VideoExtension;

/// An extension as handed in by the caller: already typed, or a raw payload
/// keyed by extension name (`google_video`, `google_image`).
#[derive(Debug, Clone, PartialEq)]
pub enum ExtensionInput {
    Typed(Extension),
    Raw { key: String, payload: Value },
}

impl From<Extension> for ExtensionInput {
    fn from(ext: Extension) -> Self {
        ExtensionInput::Typed(ext)
    }
}

impl From<VideoExtension> for ExtensionInput {
    fn from(video: VideoExtension) -> Self {
        ExtensionInput::Typed(Extension::GoogleVideo(video))
    }
}

impl From<ImageExtension> for ExtensionInput {
    fn from(images: ImageExtension) -> Self {
        ExtensionInput::Typed(Extension::GoogleImage(images))
    }
}

/// A URL as submitted by the caller, before validation.
///
/// # Examples
///
/// ```
/// use sitemap_generator::UrlEntry;
///
/// let entry = UrlEntry::new("/path/to/page/")
///     .change_frequency("weekly")
///     .priority(0.5)
///     .alternate("de", "https://example.com/de/path/to/page/");
/// assert_eq!(entry.alternates.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrlEntry {
    /// Absolute URL, or a path resolved against the configured base URL
    pub path: String,
    pub last_modified: Option<DateTime<FixedOffset>>,
    /// Free text, checked against the fixed change frequency set
    pub change_frequency: Option<String>,
    pub priority: Option<f64>,
    pub alternates: Vec<Alternate>,
    pub extensions: Vec<ExtensionInput>,
}

impl UrlEntry {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn last_modified(mut self, last_modified: DateTime<FixedOffset>) -> Self {
        self.last_modified = Some(last_modified);
        self
    }

    pub fn change_frequency(mut self, change_frequency: impl AsRef<str>) -> Self {
        self.change_frequency = Some(change_frequency.as_ref().to_string());
        self
    }

    pub fn priority(mut self, priority: f64) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn alternate(mut self, hreflang: impl Into<String>, href: impl Into<String>) -> Self {
        self.alternates.push(Alternate::new(hreflang, href));
        self
    }

    pub fn alternates(mut self, alternates: impl IntoIterator<Item = Alternate>) -> Self {
        self.alternates.extend(alternates);
        self
    }

    pub fn extension(mut self, extension: impl Into<ExtensionInput>) -> Self {
        self.extensions.push(extension.into());
        self
    }

    /// Attaches an untyped payload, converted into a typed extension when the
    /// entry is validated.
    pub fn raw_extension(mut self, key: impl Into<String>, payload: Value) -> Self {
        self.extensions.push(ExtensionInput::Raw {
            key: key.into(),
            payload,
        });
        self
    }
}

impl From<&str> for UrlEntry {
    fn from(path: &str) -> Self {
        UrlEntry::new(path)
    }
}

impl From<String> for UrlEntry {
    fn from(path: String) -> Self {
        UrlEntry::new(path)
    }
}
