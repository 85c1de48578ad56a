//! Substring search over the component catalog.
//!
//! Hits come back in catalog order and collection stops at the limit, so a
//! later, closer match can be cut off by earlier ones. There is no ranking.

use crate::catalog::{Catalog, ComponentDescriptor};

/// Lower-case and trim, the normalization applied to queries and haystacks.
#[must_use]
pub fn normalize(s: &str) -> String {
    s.to_lowercase().trim().to_string()
}

/// Normalized, non-empty fields of `item` that a query is matched against:
/// name, key, group, href, then every tag.
#[must_use]
pub fn haystacks(item: &ComponentDescriptor) -> Vec<String> {
    [&item.name, &item.key, &item.group, &item.href]
        .into_iter()
        .chain(item.tags.iter())
        .map(|field| normalize(field))
        .filter(|field| !field.is_empty())
        .collect()
}

/// Whether any haystack of `item` contains the already-normalized `query`.
#[must_use]
pub fn matches(item: &ComponentDescriptor, query: &str) -> bool {
    haystacks(item).iter().any(|h| h.contains(query))
}

/// Return up to `limit` descriptors whose fields contain `query`.
///
/// # Example
///
/// ```rust
/// use ui_layouts_docs::{search_components, Catalog};
///
/// let hits = search_components(Catalog::builtin(), "  ACCORDION ", 20);
/// assert_eq!(hits.first().map(|d| d.key.as_str()), Some("accordion"));
/// ```
#[must_use]
pub fn search_components<'c>(
    catalog: &'c Catalog,
    query: &str,
    limit: usize,
) -> Vec<&'c ComponentDescriptor> {
    let query = normalize(query);
    catalog
        .iter()
        .filter(|item| matches(item, &query))
        .take(limit)
        .collect()
}
