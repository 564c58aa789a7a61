//! `<loc>` encoding.
//!
//! Browsers send non-ASCII path and query characters percent-encoded but
//! leave printable ASCII alone, so structural characters (`:/?&=#`) and
//! already-encoded `%XX` sequences keep their meaning. The encoded string is
//! then XML-escaped; percent-encoding never emits `&`, so the only `&amp;` in
//! the output comes from a literal `&` in the input.

use std::fmt::Write;

/// Percent-encodes and XML-escapes a URL for use as element text.
///
/// # Examples
///
/// ```
/// use sitemap_generator::encode_escape_url;
///
/// assert_eq!(
///     encode_escape_url("https://example.com/ümlat.php&q=name"),
///     "https://example.com/%C3%BCmlat.php&amp;q=name"
/// );
/// ```
pub fn encode_escape_url(url: &str) -> String {
    escape_xml(&percent_encode_non_ascii(url))
}

/// Percent-encodes, byte by byte, every character outside printable ASCII
/// (0x20..=0x7E). Uppercase hex digits, as RFC 3986 recommends.
pub fn percent_encode_non_ascii(url: &str) -> String {
    let mut encoded = String::with_capacity(url.len());
    for ch in url.chars() {
        if (' '..='~').contains(&ch) {
            encoded.push(ch);
        } else {
            let mut buf = [0u8; 4];
            for byte in ch.encode_utf8(&mut buf).bytes() {
                // Writing to a String cannot fail
                let _ = write!(encoded, "%{byte:02X}");
            }
        }
    }
    encoded
}

/// Escapes the five XML special characters. `'` becomes `&#039;`.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Percent-encodes a complete URL so it can travel as a query parameter value.
pub fn encode_query_value(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
