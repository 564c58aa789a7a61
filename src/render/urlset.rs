//! `<url>` element rendering.

use quick_xml::events::{BytesEnd, BytesStart, Event};

use super::extensions::{write_images, write_video};
use super::{format_lastmod, write_escaped_element, write_text_element, XmlWriter};
use crate::error_handling::SitemapError;
use crate::location::{encode_escape_url, percent_encode_non_ascii};
use crate::models::UrlRecord;

/// Writes one `<url>` block: `loc`, `lastmod`, `changefreq`, `priority`,
/// alternates in input order, then the video and image blocks.
pub(super) fn write_url(writer: &mut XmlWriter, record: &UrlRecord) -> Result<(), SitemapError> {
    writer.write_event(Event::Start(BytesStart::new("url")))?;

    write_escaped_element(writer, "loc", &encode_escape_url(&record.location))?;
    if let Some(last_modified) = &record.last_modified {
        write_text_element(writer, "lastmod", &format_lastmod(last_modified))?;
    }
    if let Some(change_frequency) = record.change_frequency {
        write_text_element(writer, "changefreq", change_frequency.as_ref())?;
    }
    if let Some(priority) = record.priority {
        write_text_element(writer, "priority", &format!("{priority:.1}"))?;
    }

    for alternate in &record.alternates {
        // Attribute values are escaped by quick-xml, so only percent-encode here
        let href = percent_encode_non_ascii(&alternate.href);
        let link = BytesStart::new("xhtml:link").with_attributes([
            ("rel", "alternate"),
            ("hreflang", alternate.hreflang.as_str()),
            ("href", href.as_str()),
        ]);
        writer.write_event(Event::Empty(link))?;
    }

    if let Some(video) = &record.video {
        write_video(writer, video)?;
    }
    if let Some(images) = &record.images {
        write_images(writer, images)?;
    }

    writer.write_event(Event::End(BytesEnd::new("url")))?;
    Ok(())
}
