//! XML rendering of sitemaps and sitemap indexes.
//!
//! Documents are built in memory with `quick_xml::Writer` (4-space indent) and
//! handed to the file sink as one byte buffer. `<loc>`-like values are encoded
//! with `encode_escape_url` and written pre-escaped; free text goes through
//! quick-xml's own escaping.

mod extensions;
mod urlset;

use chrono::{DateTime, TimeZone};
use quick_xml::events::{BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::config::{
    GeneratorConfig, IMAGE_NS, SITEMAP_INDEX_SCHEMA_LOCATION, SITEMAP_NS, SITEMAP_SCHEMA_LOCATION,
    VIDEO_NS, XHTML_NS, XSI_NS,
};
use crate::error_handling::SitemapError;
use crate::location::encode_escape_url;
use crate::models::UrlRecord;
use crate::storage::ProducedFile;

const INDENT_SIZE: usize = 4;

type XmlWriter = Writer<Vec<u8>>;

/// Renders batches of records into `urlset` documents and produced files into
/// a `sitemapindex` document.
#[derive(Debug, Clone, Default)]
pub struct SitemapRenderer {
    stylesheet_url: Option<String>,
}

impl SitemapRenderer {
    pub fn new(stylesheet_url: Option<String>) -> Self {
        Self { stylesheet_url }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.stylesheet_url.clone())
    }

    /// Renders a complete `urlset` document.
    pub fn render_urlset(&self, records: &[UrlRecord]) -> Result<Vec<u8>, SitemapError> {
        let mut writer = self.start_document()?;
        writer.write_event(Event::Start(urlset_start()))?;
        for record in records {
            urlset::write_url(&mut writer, record)?;
        }
        writer.write_event(Event::End(BytesEnd::new("urlset")))?;
        Ok(writer.into_inner())
    }

    /// Renders a `sitemapindex` document with one `<sitemap>` per file, in
    /// the order given.
    pub fn render_index(&self, files: &[ProducedFile]) -> Result<Vec<u8>, SitemapError> {
        let mut writer = self.start_document()?;
        let root = BytesStart::new("sitemapindex").with_attributes([
            ("xmlns", SITEMAP_NS),
            ("xmlns:xsi", XSI_NS),
            ("xsi:schemaLocation", SITEMAP_INDEX_SCHEMA_LOCATION),
        ]);
        writer.write_event(Event::Start(root))?;
        for file in files {
            writer.write_event(Event::Start(BytesStart::new("sitemap")))?;
            write_escaped_element(&mut writer, "loc", &encode_escape_url(&file.public_url))?;
            write_text_element(&mut writer, "lastmod", &format_lastmod(&file.last_modified_at))?;
            writer.write_event(Event::End(BytesEnd::new("sitemap")))?;
        }
        writer.write_event(Event::End(BytesEnd::new("sitemapindex")))?;
        Ok(writer.into_inner())
    }

    /// Bytes a `urlset` document takes without any `<url>` in it.
    pub fn document_overhead(&self) -> Result<usize, SitemapError> {
        Ok(self.render_urlset(&[])?.len())
    }

    /// Bytes `record` adds to a `urlset` document.
    ///
    /// The record is rendered on its own and then corrected for the leading
    /// line break and the extra level of indentation every line gets inside
    /// `<urlset>`.
    pub fn estimate_url_size(&self, record: &UrlRecord) -> Result<usize, SitemapError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE);
        urlset::write_url(&mut writer, record)?;
        let rendered = writer.into_inner();
        let lines = rendered.iter().filter(|&&b| b == b'\n').count() + 1;
        Ok(rendered.len() + 1 + lines * INDENT_SIZE)
    }

    fn start_document(&self) -> Result<XmlWriter, SitemapError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        if let Some(stylesheet) = &self.stylesheet_url {
            let content = format!(r#"xml-stylesheet type="text/xsl" href="{stylesheet}""#);
            writer.write_event(Event::PI(BytesPI::new(content)))?;
        }
        Ok(writer)
    }
}

fn urlset_start() -> BytesStart<'static> {
    BytesStart::new("urlset").with_attributes([
        ("xmlns", SITEMAP_NS),
        ("xmlns:xsi", XSI_NS),
        ("xsi:schemaLocation", SITEMAP_SCHEMA_LOCATION),
        ("xmlns:xhtml", XHTML_NS),
        ("xmlns:image", IMAGE_NS),
        ("xmlns:video", VIDEO_NS),
    ])
}

/// `YYYY-MM-DDTHH:MM:SS+HH:MM`
pub(crate) fn format_lastmod<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    timestamp.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

/// `<name>text</name>`, with `text` escaped by the writer.
fn write_text_element(writer: &mut XmlWriter, name: &str, text: &str) -> Result<(), SitemapError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// `<name>escaped</name>`, where `escaped` is already valid element content.
fn write_escaped_element(
    writer: &mut XmlWriter,
    name: &str,
    escaped: &str,
) -> Result<(), SitemapError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::from_escaped(escaped)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};

    use super::*;
    use crate::models::{Alternate, ChangeFrequency, ImageEntry, VideoExtension};

    fn render(records: &[UrlRecord]) -> String {
        String::from_utf8(SitemapRenderer::default().render_urlset(records).unwrap()).unwrap()
    }

    fn lastmod() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2020-12-29T08:46:55+00:00").unwrap()
    }

    #[test]
    fn test_empty_urlset_is_well_formed() {
        let xml = render(&[]);
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"xmlns="http://www.sitemaps.org/schemas/sitemap/0.9""#));
        assert!(xml.contains(r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn test_url_fields_in_order() {
        let mut record = UrlRecord::new("https://example.com/path/to/page-0/");
        record.last_modified = Some(lastmod());
        record.change_frequency = Some(ChangeFrequency::Always);
        record.priority = Some(0.5);
        let xml = render(&[record]);

        let expected = "    <url>\n        <loc>https://example.com/path/to/page-0/</loc>\n        \
                        <lastmod>2020-12-29T08:46:55+00:00</lastmod>\n        \
                        <changefreq>always</changefreq>\n        \
                        <priority>0.5</priority>\n    </url>";
        assert!(xml.contains(expected), "{xml}");
    }

    #[test]
    fn test_loc_is_encoded_once() {
        let xml = render(&[UrlRecord::new("https://example.com/ümlat.php&q=name")]);
        assert!(xml.contains("<loc>https://example.com/%C3%BCmlat.php&amp;q=name</loc>"));
        assert!(!xml.contains("&amp;amp;"));
    }

    #[test]
    fn test_alternates_render_as_self_closing_links() {
        let mut record = UrlRecord::new("https://example.com/en");
        record.alternates = vec![
            Alternate::new("de", "https://example.com/de"),
            Alternate::new("fr", "https://example.com/fr"),
        ];
        let xml = render(&[record]);
        let de = xml
            .find(r#"<xhtml:link rel="alternate" hreflang="de" href="https://example.com/de"/>"#)
            .unwrap();
        let fr = xml
            .find(r#"<xhtml:link rel="alternate" hreflang="fr" href="https://example.com/fr"/>"#)
            .unwrap();
        assert!(de < fr);
    }

    #[test]
    fn test_stylesheet_processing_instruction() {
        let renderer = SitemapRenderer::new(Some("https://example.com/sitemap.xsl".to_string()));
        let xml = String::from_utf8(renderer.render_urlset(&[]).unwrap()).unwrap();
        assert!(xml.contains(
            r#"<?xml-stylesheet type="text/xsl" href="https://example.com/sitemap.xsl"?>"#
        ));
        let index = String::from_utf8(renderer.render_index(&[]).unwrap()).unwrap();
        assert!(index.contains("<?xml-stylesheet"));
    }

    #[test]
    fn test_index_lists_files_in_order() {
        let now = Utc::now();
        let files = vec![
            ProducedFile::new("https://example.com/sitemap1.xml", "/tmp/sitemap1.xml", now),
            ProducedFile::new("https://example.com/sitemap2.xml", "/tmp/sitemap2.xml", now),
        ];
        let xml =
            String::from_utf8(SitemapRenderer::default().render_index(&files).unwrap()).unwrap();
        assert!(xml.contains("<sitemapindex"));
        assert!(xml.contains("siteindex.xsd"));
        let first = xml.find("<loc>https://example.com/sitemap1.xml</loc>").unwrap();
        let second = xml.find("<loc>https://example.com/sitemap2.xml</loc>").unwrap();
        assert!(first < second);
        assert_eq!(xml.matches("<lastmod>").count(), 2);
        assert!(xml.contains(&format!("<lastmod>{}</lastmod>", format_lastmod(&now))));
    }

    #[test]
    fn test_estimate_matches_rendered_growth() {
        let renderer = SitemapRenderer::default();
        let mut record = UrlRecord::new("https://example.com/a");
        record.priority = Some(0.8);
        record.alternates = vec![Alternate::new("de", "https://example.com/de/a")];
        record.video = Some(VideoExtension::new("https://example.com/t.jpg", "T", "D"));
        record.images = Some(ImageEntry::new("https://example.com/i.jpg").into());

        let one = renderer.render_urlset(std::slice::from_ref(&record)).unwrap().len();
        let two = renderer.render_urlset(&[record.clone(), record.clone()]).unwrap().len();
        let estimate = renderer.estimate_url_size(&record).unwrap();

        assert_eq!(renderer.document_overhead().unwrap() + estimate, one);
        assert_eq!(two - one, estimate);
    }

    #[test]
    fn test_lastmod_keeps_offset() {
        let ts = DateTime::parse_from_rfc3339("2007-11-05T19:20:30+08:00").unwrap();
        assert_eq!(format_lastmod(&ts), "2007-11-05T19:20:30+08:00");
    }
}
