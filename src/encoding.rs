//! Character encoding detection and transcoding for fetched pages.
//!
//! The charset declared in the HTTP `Content-Type` header wins; otherwise the
//! document's own `<meta>` declarations are consulted, and UTF-8 is assumed
//! when neither says anything.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Number of leading bytes scanned for a `<meta>` charset declaration.
const SNIFF_LEN: usize = 1024;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Match `charset=...` inside a `Content-Type` value
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i);\s*charset\s*=\s*["']?([^"'\s;]+)"#).expect("valid regex")
});

/// Encoding named by a `Content-Type` header value, if any.
#[must_use]
pub fn charset_from_content_type(content_type: &str) -> Option<&'static Encoding> {
    CONTENT_TYPE_CHARSET_RE
        .captures(content_type)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
}

/// Detect character encoding from the head of an HTML document.
///
/// Covers both `<meta charset="...">` and the `http-equiv` form, since the
/// latter also carries a `charset=` token. Defaults to UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(SNIFF_LEN)];
    let head_str = String::from_utf8_lossy(head);

    CHARSET_META_RE
        .captures(&head_str)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode a response body to a UTF-8 string.
///
/// Invalid sequences become U+FFFD; decoding never fails.
///
/// # Examples
///
/// ```
/// use ui_layouts_docs::encoding::decode_body;
///
/// let body = b"<p>Caf\xE9</p>";
/// assert_eq!(decode_body(body, Some("text/html; charset=ISO-8859-1")), "<p>Café</p>");
/// ```
#[must_use]
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset_from_content_type)
        .unwrap_or_else(|| detect_encoding(body));

    if encoding == UTF_8 {
        return String::from_utf8_lossy(body).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(body);
    decoded.into_owned()
}
