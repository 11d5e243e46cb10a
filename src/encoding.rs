//! Character encoding detection and transcoding.
//!
//! Career pages are fetched as raw bytes. The charset comes from the
//! `Content-Type` response header when present, then from HTML meta tags,
//! and falls back to UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Match `charset=...` in a `Content-Type` header value
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).expect("valid regex")
});

/// Detect the encoding of a response body.
///
/// Looks for charset declarations in the following order:
/// 1. `charset=` in the `Content-Type` header
/// 2. `<meta charset="...">` or `<meta http-equiv="Content-Type" ...>` in the first 1024 bytes
/// 3. Defaults to UTF-8
#[must_use]
pub fn detect_encoding(content_type: Option<&str>, body: &[u8]) -> &'static Encoding {
    let from_header = content_type.and_then(|ct| label_encoding(&HEADER_CHARSET_RE, ct));
    if let Some(encoding) = from_header {
        return encoding;
    }

    let head = String::from_utf8_lossy(&body[..body.len().min(1024)]);
    label_encoding(&CHARSET_META_RE, &head).unwrap_or(UTF_8)
}

fn label_encoding(re: &Regex, haystack: &str) -> Option<&'static Encoding> {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
}

/// Transcode a response body to a UTF-8 string.
///
/// Invalid sequences are replaced with � rather than failing the fetch.
///
/// # Examples
///
/// ```
/// use job_scout::encoding::decode_body;
///
/// let body = b"<html><body>Caf\xE9</body></html>";
/// let text = decode_body(Some("text/html; charset=ISO-8859-1"), body);
/// assert!(text.contains("Café"));
/// ```
#[must_use]
pub fn decode_body(content_type: Option<&str>, body: &[u8]) -> String {
    let encoding = detect_encoding(content_type, body);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(body).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(body);
    decoded.into_owned()
}
