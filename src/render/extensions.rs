//! `video:` and `image:` extension blocks.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use super::{write_escaped_element, write_text_element, XmlWriter};
use crate::error_handling::SitemapError;
use crate::location::{encode_escape_url, percent_encode_non_ascii};
use crate::models::{ImageExtension, RelationshipList, VideoExtension};

/// Writes one `<video:video>` element. Children follow the schema order and
/// absent optional fields are skipped.
pub(super) fn write_video(writer: &mut XmlWriter, video: &VideoExtension) -> Result<(), SitemapError> {
    writer.write_event(Event::Start(BytesStart::new("video:video")))?;

    write_url_element(writer, "video:thumbnail_loc", &video.thumbnail_loc)?;
    write_text_element(writer, "video:title", &video.title)?;
    write_text_element(writer, "video:description", &video.description)?;
    for content_loc in &video.content_loc {
        write_url_element(writer, "video:content_loc", content_loc)?;
    }
    if let Some(player_loc) = &video.player_loc {
        write_url_element(writer, "video:player_loc", player_loc)?;
    }
    if let Some(duration) = video.duration {
        write_text_element(writer, "video:duration", &duration.to_string())?;
    }
    if let Some(expiration_date) = &video.expiration_date {
        write_text_element(writer, "video:expiration_date", expiration_date)?;
    }
    if let Some(rating) = video.rating {
        write_text_element(writer, "video:rating", &rating.to_string())?;
    }
    if let Some(view_count) = video.view_count {
        write_text_element(writer, "video:view_count", &view_count.to_string())?;
    }
    if let Some(publication_date) = &video.publication_date {
        write_text_element(writer, "video:publication_date", publication_date)?;
    }
    if let Some(family_friendly) = video.family_friendly {
        write_text_element(writer, "video:family_friendly", family_friendly.as_ref())?;
    }
    if let Some(restriction) = &video.restriction {
        write_relationship(writer, "video:restriction", restriction)?;
    }
    if let Some(platform) = &video.platform {
        write_relationship(writer, "video:platform", platform)?;
    }
    for price in &video.price {
        let mut start = BytesStart::new("video:price");
        start.push_attribute(("currency", price.currency.as_str()));
        if let Some(price_type) = &price.price_type {
            start.push_attribute(("type", price_type.as_str()));
        }
        if let Some(resolution) = &price.resolution {
            start.push_attribute(("resolution", resolution.as_str()));
        }
        write_with_start(writer, start, "video:price", &price.value.to_string())?;
    }
    if let Some(requires_subscription) = video.requires_subscription {
        write_text_element(
            writer,
            "video:requires_subscription",
            requires_subscription.as_ref(),
        )?;
    }
    if let Some(uploader) = &video.uploader {
        let mut start = BytesStart::new("video:uploader");
        let info = uploader.info.as_deref().map(percent_encode_non_ascii);
        if let Some(info) = &info {
            start.push_attribute(("info", info.as_str()));
        }
        write_with_start(writer, start, "video:uploader", &uploader.value)?;
    }
    if let Some(live) = video.live {
        write_text_element(writer, "video:live", live.as_ref())?;
    }
    for tag in &video.tag {
        write_text_element(writer, "video:tag", tag)?;
    }
    if let Some(category) = &video.category {
        write_text_element(writer, "video:category", category)?;
    }

    writer.write_event(Event::End(BytesEnd::new("video:video")))?;
    Ok(())
}

/// Writes one `<image:image>` element per entry, in input order.
pub(super) fn write_images(writer: &mut XmlWriter, images: &ImageExtension) -> Result<(), SitemapError> {
    for image in &images.images {
        writer.write_event(Event::Start(BytesStart::new("image:image")))?;
        write_url_element(writer, "image:loc", &image.loc)?;
        if let Some(title) = &image.title {
            write_text_element(writer, "image:title", title)?;
        }
        if let Some(caption) = &image.caption {
            write_text_element(writer, "image:caption", caption)?;
        }
        if let Some(geo_location) = &image.geo_location {
            write_text_element(writer, "image:geo_location", geo_location)?;
        }
        if let Some(license) = &image.license {
            write_url_element(writer, "image:license", license)?;
        }
        writer.write_event(Event::End(BytesEnd::new("image:image")))?;
    }
    Ok(())
}

fn write_url_element(writer: &mut XmlWriter, name: &str, url: &str) -> Result<(), SitemapError> {
    write_escaped_element(writer, name, &encode_escape_url(url))
}

fn write_relationship(
    writer: &mut XmlWriter,
    name: &str,
    list: &RelationshipList,
) -> Result<(), SitemapError> {
    let relationship: &str = list.relationship.as_ref();
    let start = BytesStart::new(name).with_attributes([("relationship", relationship)]);
    write_with_start(writer, start, name, &list.value)
}

fn write_with_start(
    writer: &mut XmlWriter,
    start: BytesStart<'_>,
    name: &str,
    text: &str,
) -> Result<(), SitemapError> {
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
