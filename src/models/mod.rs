//! Data model: caller input, validated records and extension payloads.

mod entry;
mod extension;
mod image;
mod record;
mod video;

use serde::{Deserialize, Deserializer};

pub use entry::{ExtensionInput, UrlEntry};
pub use extension::{Extension, GOOGLE_IMAGE, GOOGLE_VIDEO};
pub use image::{ImageEntry, ImageExtension};
pub use record::{Alternate, ChangeFrequency, UrlRecord};
pub use video::{RelationshipList, Relationship, Uploader, VideoExtension, VideoPrice, YesNo};

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

/// Deserializes either a single value or an array of values into a `Vec`.
pub(crate) fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(values) => values,
        OneOrMany::One(value) => vec![value],
    })
}
