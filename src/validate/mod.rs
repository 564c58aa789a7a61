//! URL record validation.
//!
//! Turns a caller-supplied `UrlEntry` into a `UrlRecord`, or rejects it with a
//! `ValidationError` naming the offending field. Pure: no I/O, no state.

mod image;
mod video;

use std::str::FromStr;

use log::debug;

use crate::config::GeneratorConfig;
use crate::error_handling::ValidationError;
use crate::location::{encode_escape_url, resolve_location};
use crate::models::{ChangeFrequency, Extension, ExtensionInput, UrlEntry, UrlRecord};

pub use image::validate_images;
pub use video::validate_video;

/// Validates and normalizes one entry.
///
/// Raw extension payloads are converted into typed extensions here. Unknown
/// extension keys are ignored (logged at debug level) so that callers can send
/// payloads for extensions this crate does not render.
pub fn validate_entry(entry: UrlEntry, config: &GeneratorConfig) -> Result<UrlRecord, ValidationError> {
    let location = resolve_location(&config.base_url, &entry.path)?;

    let encoded_length = encode_escape_url(&location).chars().count();
    if encoded_length > config.max_url_length {
        return Err(ValidationError::UrlTooLong {
            length: encoded_length,
            max: config.max_url_length,
        });
    }

    if let Some(priority) = entry.priority {
        if !(0.0..=1.0).contains(&priority) {
            return Err(ValidationError::InvalidPriority(priority));
        }
    }

    let change_frequency = entry
        .change_frequency
        .as_deref()
        .map(|text| {
            ChangeFrequency::from_str(text.trim())
                .map_err(|_| ValidationError::InvalidChangeFrequency(text.to_string()))
        })
        .transpose()?;

    for alternate in &entry.alternates {
        if alternate.hreflang.trim().is_empty() || alternate.href.trim().is_empty() {
            return Err(ValidationError::InvalidUrl {
                url: alternate.href.clone(),
                reason: format!(
                    "alternate link needs both hreflang and href (hreflang '{}')",
                    alternate.hreflang
                ),
            });
        }
    }

    let mut record = UrlRecord {
        location,
        last_modified: entry.last_modified,
        change_frequency,
        priority: entry.priority,
        alternates: entry.alternates,
        video: None,
        images: None,
    };

    for input in entry.extensions {
        let extension = match input {
            ExtensionInput::Typed(extension) => extension,
            ExtensionInput::Raw { key, payload } => match Extension::from_raw(&key, payload)? {
                Some(extension) => extension,
                None => {
                    debug!("Ignoring unknown extension '{key}' for {}", record.location);
                    continue;
                }
            },
        };

        match extension {
            Extension::GoogleVideo(video) => {
                if record.video.is_some() {
                    return Err(ValidationError::DuplicateExtension(crate::models::GOOGLE_VIDEO));
                }
                validate_video(&video)?;
                record.video = Some(video);
            }
            Extension::GoogleImage(images) => {
                if record.images.is_some() {
                    return Err(ValidationError::DuplicateExtension(crate::models::GOOGLE_IMAGE));
                }
                validate_images(&images, config.max_images_per_url)?;
                record.images = Some(images);
            }
        }
    }

    Ok(record)
}

/// Rejects text containing characters XML 1.0 does not allow: C0 controls
/// other than tab, newline and carriage return, and U+FFFE / U+FFFF.
pub(crate) fn check_xml_text(
    extension: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    match value.chars().find(|&ch| !is_xml_char(ch)) {
        Some(ch) => Err(ValidationError::InvalidExtensionField {
            extension,
            field,
            reason: format!("contains a character not allowed in XML (U+{:04X})", ch as u32),
        }),
        None => Ok(()),
    }
}

fn is_xml_char(ch: char) -> bool {
    !matches!(ch, '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}')
}
