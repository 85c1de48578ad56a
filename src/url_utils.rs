//! URL Utility Functions
//!
//! Composition of remote documentation URLs from catalog hrefs, and
//! resolution of relative references found in fetched pages.

use url::Url;

/// Compose `base + /prefix + /href`.
///
/// Trailing slashes on `base` and surrounding slashes on `prefix` are
/// stripped; `href` always ends up with exactly one leading slash. A prefix
/// that is empty once trimmed is skipped. No percent-encoding is applied, so
/// both `href` and `prefix` must already be URL-safe.
///
/// # Examples
/// ```
/// use ui_layouts_docs::url_utils::build_remote_url;
///
/// assert_eq!(
///     build_remote_url("https://x.com/", "components/a", Some("pre/")),
///     "https://x.com/pre/components/a"
/// );
/// assert_eq!(
///     build_remote_url("https://x.com", "/components/a", None),
///     "https://x.com/components/a"
/// );
/// ```
#[must_use]
pub fn build_remote_url(base: &str, href: &str, prefix: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    let prefix = prefix
        .map(|p| p.trim_matches('/'))
        .filter(|p| !p.is_empty())
        .map(|p| format!("/{p}"))
        .unwrap_or_default();
    let href = href.trim_start_matches('/');

    format!("{base}{prefix}/{href}")
}

/// Resolve `maybe_url` against `base`.
///
/// Absolute inputs come back normalised, relative ones are joined onto
/// `base` (so `/img.png` lands at the origin root, `img.png` next to the
/// page). If `base` is not a valid URL or the join fails, the input is
/// returned unchanged.
#[must_use]
pub fn to_absolute_url(maybe_url: &str, base: &str) -> String {
    match Url::parse(maybe_url) {
        Ok(absolute) => absolute.to_string(),
        Err(_) => Url::parse(base)
            .and_then(|b| b.join(maybe_url))
            .map_or_else(|_| maybe_url.to_string(), |u| u.to_string()),
    }
}
