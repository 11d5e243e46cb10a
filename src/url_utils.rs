//! URL Utility Functions
//!
//! Resolution of listing links against the career page they were found on.

use url::{Position, Url};

use crate::error::Result;

/// Check whether a link already carries an http(s) scheme.
#[must_use]
pub fn has_http_scheme(href: &str) -> bool {
    href.get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("http"))
}

/// Origin (`scheme://host[:port]`) of a page URL.
#[must_use]
pub fn origin(page: &Url) -> &str {
    &page[..Position::BeforePath]
}

/// Parse a page URL, reporting failures as `Error::InvalidUrl`.
pub fn parse_page_url(url_str: &str) -> Result<Url> {
    Ok(Url::parse(url_str.trim())?)
}

/// Convert a listing href to absolute form.
///
/// Links that already start with `http` are returned unchanged. Everything
/// else is joined against the page's origin, so `/jobs/42` and `jobs/42`
/// both resolve to `https://host/jobs/42`.
///
/// # Returns
/// * The absolute URL string, or `None` for an empty href or a failed join
///
/// # Example
///
/// ```rust
/// use job_scout::url_utils::resolve_listing_url;
/// use url::Url;
///
/// let page = Url::parse("https://acme.example/en/careers?team=eng").unwrap();
/// assert_eq!(
///     resolve_listing_url("/jobs/42", &page).as_deref(),
///     Some("https://acme.example/jobs/42"),
/// );
/// ```
#[must_use]
pub fn resolve_listing_url(href: &str, page: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    if has_http_scheme(href) {
        return Some(href.to_string());
    }

    let base = Url::parse(origin(page)).ok()?;
    base.join(href).ok().map(String::from)
}
