//! DOM Operations Adapter
//!
//! Thin read-only layer over the `dom_query` crate. The extractor only needs
//! parsing, scoped selector queries and text/attribute reads; keeping them here
//! means the rest of the crate never touches `dom_query` node internals.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

// === Parsing ===

/// Parse an HTML snapshot into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Selection wrapping the document node, used as the outermost query scope.
#[inline]
#[must_use]
pub fn root(doc: &Document) -> Selection<'_> {
    Selection::from(doc.root())
}

// === Querying ===

/// Query all descendants of `scope` matching a single CSS selector.
///
/// Returns `None` if the selector fails to parse or matches nothing.
#[inline]
#[must_use]
pub fn try_query_all<'a>(scope: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    scope.try_select(selector)
}

/// Split a multi-node selection into one selection per element, in document order.
#[must_use]
pub fn each<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.nodes().iter().map(|node| Selection::from(*node)).collect()
}

// === Text and Attributes ===

/// All text content of the node and its descendants.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Trimmed text content, or `None` when it is empty or whitespace-only.
#[must_use]
pub fn trimmed_text(sel: &Selection) -> Option<String> {
    let text = text_content(sel);
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Get any attribute value of the first node.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}
