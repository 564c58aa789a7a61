//! Google Video payload validation.

use crate::config::MAX_VIDEO_RATING;
use crate::error_handling::ValidationError;
use crate::models::{VideoExtension, GOOGLE_VIDEO};

use super::check_xml_text;

/// Checks required fields and value ranges of a video payload.
///
/// Every missing required field is reported, in schema order, not just the
/// first one found.
pub fn validate_video(video: &VideoExtension) -> Result<(), ValidationError> {
    let missing: Vec<&'static str> = [
        ("thumbnail_loc", &video.thumbnail_loc),
        ("title", &video.title),
        ("description", &video.description),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(name, _)| name)
    .collect();

    if !missing.is_empty() {
        return Err(ValidationError::MissingRequiredFields {
            extension: GOOGLE_VIDEO,
            fields: missing,
        });
    }

    if let Some(rating) = video.rating {
        if !(0.0..=MAX_VIDEO_RATING).contains(&rating) {
            return Err(invalid_field(
                "rating",
                format!("must be between 0.0 and {MAX_VIDEO_RATING:.1}, got {rating}"),
            ));
        }
    }

    for price in &video.price {
        if price.currency.trim().is_empty() {
            return Err(invalid_field("price", "currency must not be empty".to_string()));
        }
        if !price.value.is_finite() || price.value < 0.0 {
            return Err(invalid_field(
                "price",
                format!("value must be a non-negative number, got {}", price.value),
            ));
        }
    }

    if video.content_loc.iter().any(|loc| loc.trim().is_empty()) {
        return Err(invalid_field(
            "content_loc",
            "entries must not be empty".to_string(),
        ));
    }

    check_text_fields(video)
}

fn check_text_fields(video: &VideoExtension) -> Result<(), ValidationError> {
    let check = |field, value: &str| check_xml_text(GOOGLE_VIDEO, field, value);

    check("thumbnail_loc", &video.thumbnail_loc)?;
    check("title", &video.title)?;
    check("description", &video.description)?;
    for loc in &video.content_loc {
        check("content_loc", loc)?;
    }
    for (field, value) in [
        ("player_loc", &video.player_loc),
        ("expiration_date", &video.expiration_date),
        ("publication_date", &video.publication_date),
        ("category", &video.category),
    ] {
        if let Some(value) = value {
            check(field, value)?;
        }
    }
    if let Some(restriction) = &video.restriction {
        check("restriction", &restriction.value)?;
    }
    if let Some(platform) = &video.platform {
        check("platform", &platform.value)?;
    }
    for price in &video.price {
        check("price", &price.currency)?;
        for value in [&price.price_type, &price.resolution].into_iter().flatten() {
            check("price", value)?;
        }
    }
    if let Some(uploader) = &video.uploader {
        check("uploader", &uploader.value)?;
        if let Some(info) = &uploader.info {
            check("uploader", info)?;
        }
    }
    for tag in &video.tag {
        check("tag", tag)?;
    }
    Ok(())
}

fn invalid_field(field: &'static str, reason: String) -> ValidationError {
    ValidationError::InvalidExtensionField {
        extension: GOOGLE_VIDEO,
        field,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VideoPrice;

    #[test]
    fn test_all_required_fields_missing() {
        let err = validate_video(&VideoExtension::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required fields: thumbnail_loc, title, description"
        );
    }

    #[test]
    fn test_some_required_fields_missing() {
        let video = VideoExtension {
            title: "Title".to_string(),
            description: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            validate_video(&video).unwrap_err().to_string(),
            "Missing required fields: thumbnail_loc, description"
        );
    }

    #[test]
    fn test_complete_video_is_valid() {
        let video = VideoExtension::new("http://t/1.jpg", "Title", "Description");
        assert!(validate_video(&video).is_ok());
    }

    #[test]
    fn test_rating_out_of_range() {
        let mut video = VideoExtension::new("http://t/1.jpg", "Title", "Description");
        video.rating = Some(5.1);
        let err = validate_video(&video).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidExtensionField { field: "rating", .. }
        ));

        video.rating = Some(5.0);
        assert!(validate_video(&video).is_ok());
    }

    #[test]
    fn test_price_requires_currency() {
        let mut video = VideoExtension::new("http://t/1.jpg", "Title", "Description");
        video.price.push(VideoPrice {
            currency: String::new(),
            value: 1.99,
            price_type: None,
            resolution: None,
        });
        assert!(validate_video(&video).is_err());
    }

    #[test]
    fn test_price_must_be_finite() {
        for value in [f64::NAN, f64::INFINITY, -1.0] {
            let mut video = VideoExtension::new("http://t/1.jpg", "Title", "Description");
            video.price.push(VideoPrice {
                currency: "EUR".to_string(),
                value,
                price_type: None,
                resolution: None,
            });
            assert!(matches!(
                validate_video(&video).unwrap_err(),
                ValidationError::InvalidExtensionField { field: "price", .. }
            ));
        }
    }

    #[test]
    fn test_control_characters_in_text_are_rejected() {
        let video = VideoExtension::new("http://t/1.jpg", "bad\u{1}title", "d");
        assert!(matches!(
            validate_video(&video).unwrap_err(),
            ValidationError::InvalidExtensionField { field: "title", .. }
        ));

        let mut video = VideoExtension::new("http://t/1.jpg", "Title", "Description");
        video.tag = vec!["ok".to_string(), "bad\u{FFFF}".to_string()];
        assert!(matches!(
            validate_video(&video).unwrap_err(),
            ValidationError::InvalidExtensionField { field: "tag", .. }
        ));
    }
}
