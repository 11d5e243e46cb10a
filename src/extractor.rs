//! Listing extraction.
//!
//! Extraction runs in two layers with a serialization boundary between them:
//!
//! - [`extract`] works inside a parsed document. It resolves the listing
//!   containers and each field through the fallback selector chains and reads
//!   out plain strings as [`RawListing`] values. Nothing it returns refers
//!   back to the document.
//! - [`enrich`] works on that plain data only. It applies defaults, classifies
//!   the description and drops it, producing a [`JobPosting`].

use chrono::{DateTime, Utc};
use dom_query::{Document, Selection};
use tracing::{debug, warn};
use url::Url;

use crate::classify::classify;
use crate::dom;
use crate::result::{JobPosting, RawListing, NOT_SPECIFIED};
use crate::selector::{resolve_all, resolve_one};
use crate::source::SelectorProfile;
use crate::url_utils::resolve_listing_url;

/// Tags whose `href` is a navigable link.
const LINK_TAGS: &[&str] = &["a", "area"];

/// Extract raw listings from an HTML snapshot.
///
/// Convenience wrapper that parses `html` and calls [`extract`].
#[must_use]
pub fn extract_html(html: &str, page_url: &Url, selectors: &SelectorProfile) -> Vec<RawListing> {
    let doc = dom::parse(html);
    extract(&doc, page_url, selectors)
}

/// Extract raw listings from a parsed document.
///
/// Listings without a non-empty title are dropped. Read-only: the document is
/// never modified.
#[must_use]
pub fn extract(doc: &Document, page_url: &Url, selectors: &SelectorProfile) -> Vec<RawListing> {
    let listings = resolve_all(&dom::root(doc), &selectors.job_list);

    if listings.is_empty() {
        warn!(
            url = page_url.as_str(),
            selectors = selectors.job_list.as_str(),
            "No job listings found with the provided selectors"
        );
        return Vec::new();
    }

    let total = listings.len();
    let records: Vec<RawListing> = listings
        .iter()
        .filter_map(|listing| read_listing(listing, page_url, selectors))
        .collect();

    debug!(
        url = page_url.as_str(),
        listings = total,
        kept = records.len(),
        "Extracted listings"
    );
    records
}

fn read_listing(listing: &Selection, page_url: &Url, selectors: &SelectorProfile) -> Option<RawListing> {
    let title = resolve_one(listing, &selectors.job_title).and_then(|el| dom::trimmed_text(&el))?;

    let location = resolve_one(listing, &selectors.job_location).and_then(|el| dom::trimmed_text(&el));

    let url = resolve_one(listing, &selectors.job_link)
        .and_then(|el| link_href(&el))
        .and_then(|href| resolve_listing_url(&href, page_url));

    let description =
        resolve_one(listing, &selectors.job_description).and_then(|el| dom::trimmed_text(&el));

    Some(RawListing {
        title,
        location,
        url,
        description,
    })
}

/// `href` of a link element. Other elements carry no navigable link.
fn link_href(el: &Selection) -> Option<String> {
    let tag = dom::tag_name(el)?;
    if !LINK_TAGS.contains(&tag.as_str()) {
        return None;
    }
    dom::get_attribute(el, "href")
}

/// Turn a raw listing into a final posting.
///
/// Missing locations become `"Not specified"`, missing links fall back to the
/// career page URL, and the description is consumed by classification.
#[must_use]
pub fn enrich(
    raw: RawListing,
    company: &str,
    page_url: &str,
    extracted_at: DateTime<Utc>,
) -> JobPosting {
    let RawListing {
        title,
        location,
        url,
        description,
    } = raw;

    JobPosting {
        company: company.to_string(),
        title,
        location: location.unwrap_or_else(|| NOT_SPECIFIED.to_string()),
        url: url.unwrap_or_else(|| page_url.to_string()),
        experience_years: classify(description.as_deref()),
        extracted_at,
    }
}
