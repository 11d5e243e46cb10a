//! Fallback Selector Resolution
//!
//! Career pages change markup often, so each semantic field is configured as a
//! comma-separated chain of CSS selectors. Candidates are tried in declaration
//! order and the first one that parses and matches at least one element wins;
//! later candidates are never consulted once one succeeds.
//!
//! A candidate that fails to parse is skipped like one that matches nothing.
//! An exhausted chain means the field is absent, not that something failed.

use dom_query::Selection;
use tracing::trace;

use crate::dom;

/// Ordered list of candidate selectors for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorChain<'s> {
    candidates: Vec<&'s str>,
}

impl<'s> SelectorChain<'s> {
    /// Split a chain on `,`, trimming candidates and dropping empty ones.
    ///
    /// # Example
    ///
    /// ```rust
    /// use job_scout::selector::SelectorChain;
    ///
    /// let chain = SelectorChain::parse(".job-title , h3,  ");
    /// assert_eq!(chain.candidates(), &[".job-title", "h3"]);
    /// ```
    #[must_use]
    pub fn parse(list: &'s str) -> Self {
        let candidates = list
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect();
        Self { candidates }
    }

    #[must_use]
    pub fn candidates(&self) -> &[&'s str] {
        &self.candidates
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// First candidate that yields a match, with its full match set.
    fn first_match<'a>(&self, scope: &Selection<'a>) -> Option<Selection<'a>> {
        self.candidates.iter().find_map(|candidate| {
            let found = dom::try_query_all(scope, candidate);
            if found.is_none() {
                trace!(selector = *candidate, "Selector candidate missed, trying next");
            }
            found
        })
    }
}

/// Resolve a chain to the first matching element within `scope`.
///
/// # Example
///
/// ```rust
/// use job_scout::{dom, selector};
///
/// let doc = dom::parse(r#"<div><span class="loc">Berlin</span></div>"#);
/// let found = selector::resolve_one(&dom::root(&doc), ".location, span.loc");
/// assert_eq!(dom::trimmed_text(&found.unwrap()).as_deref(), Some("Berlin"));
/// ```
#[must_use]
pub fn resolve_one<'a>(scope: &Selection<'a>, selector_list: &str) -> Option<Selection<'a>> {
    SelectorChain::parse(selector_list)
        .first_match(scope)
        .map(|sel| sel.first())
}

/// Resolve a chain to every element matched by the first matching candidate.
///
/// Results are in document order. An empty vector means no candidate matched.
#[must_use]
pub fn resolve_all<'a>(scope: &Selection<'a>, selector_list: &str) -> Vec<Selection<'a>> {
    SelectorChain::parse(selector_list)
        .first_match(scope)
        .map(|sel| dom::each(&sel))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <div id="jobs">
            <article class="posting"><h2>First</h2></article>
            <article class="posting"><h2>Second</h2></article>
            <li class="legacy">Legacy</li>
        </div>
    "#;

    #[test]
    fn test_parse_trims_and_skips_empty_candidates() {
        let chain = SelectorChain::parse(" a , , b.c ,");
        assert_eq!(chain.candidates(), &["a", "b.c"]);
        assert!(SelectorChain::parse("").is_empty());
        assert!(SelectorChain::parse(" , ").is_empty());
    }

    #[test]
    fn test_first_matching_candidate_wins() {
        let doc = dom::parse(PAGE);
        let root = dom::root(&doc);

        // Both candidates match; only the first one is used.
        let found = resolve_all(&root, "article.posting, li.legacy");
        assert_eq!(found.len(), 2);
        assert_eq!(dom::trimmed_text(&found[0]).as_deref(), Some("First"));

        let reversed = resolve_all(&root, "li.legacy, article.posting");
        assert_eq!(reversed.len(), 1);
        assert_eq!(dom::trimmed_text(&reversed[0]).as_deref(), Some("Legacy"));
    }

    #[test]
    fn test_non_matching_candidates_fall_through() {
        let doc = dom::parse(PAGE);
        let found = resolve_one(&dom::root(&doc), ".job-card, .opening, li.legacy");
        assert_eq!(dom::trimmed_text(&found.unwrap()).as_deref(), Some("Legacy"));
    }

    #[test]
    fn test_invalid_candidate_is_skipped_not_fatal() {
        let doc = dom::parse(PAGE);
        let found = resolve_all(&dom::root(&doc), "article[, ::nonsense((, article.posting");
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_resolve_one_returns_first_in_document_order() {
        let doc = dom::parse(PAGE);
        let found = resolve_one(&dom::root(&doc), "h2").unwrap();
        assert_eq!(dom::trimmed_text(&found).as_deref(), Some("First"));
    }

    #[test]
    fn test_exhausted_chain_is_absent() {
        let doc = dom::parse(PAGE);
        let root = dom::root(&doc);
        assert!(resolve_one(&root, ".missing, #nope").is_none());
        assert!(resolve_all(&root, ".missing").is_empty());
        assert!(resolve_all(&root, "").is_empty());
    }

    #[test]
    fn test_resolution_is_scoped() {
        let doc = dom::parse(PAGE);
        let postings = resolve_all(&dom::root(&doc), "article.posting");
        let second_title = resolve_one(&postings[1], "h2").unwrap();
        assert_eq!(dom::trimmed_text(&second_title).as_deref(), Some("Second"));
        assert!(resolve_one(&postings[0], "li.legacy").is_none());
    }
}
