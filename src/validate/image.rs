//! Google Image payload validation.

use crate::error_handling::ValidationError;
use crate::models::{ImageExtension, GOOGLE_IMAGE};

use super::check_xml_text;

/// Checks the image count against `max_images` and that every entry has a
/// `loc`.
pub fn validate_images(images: &ImageExtension, max_images: usize) -> Result<(), ValidationError> {
    let count = images.images.len();
    if count > max_images {
        return Err(ValidationError::TooManyImages {
            max: max_images,
            count,
        });
    }

    if images.images.iter().any(|image| image.loc.trim().is_empty()) {
        return Err(ValidationError::MissingRequiredFields {
            extension: GOOGLE_IMAGE,
            fields: vec!["loc"],
        });
    }

    for image in &images.images {
        check_xml_text(GOOGLE_IMAGE, "loc", &image.loc)?;
        for (field, value) in [
            ("title", &image.title),
            ("caption", &image.caption),
            ("geo_location", &image.geo_location),
            ("license", &image.license),
        ] {
            if let Some(value) = value {
                check_xml_text(GOOGLE_IMAGE, field, value)?;
            }
        }
    }

    Ok(())
}
