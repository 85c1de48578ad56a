//! HTML Meta Tag Extraction
//!
//! Pattern-based readers for `<title>`, standard `<meta name=...>` tags,
//! Open Graph, Twitter cards and the site's own `ui-layouts:` vendor tags.
//!
//! Every `<meta>` tag is scanned once into a [`MetaTags`] list of attribute
//! pairs, so lookups do not care about attribute order or letter case. Each
//! field group then has its own small function; a broken tag only affects
//! the group that reads it.

use std::collections::BTreeMap;

use crate::patterns::{META_TAG, TAG_ATTRIBUTE, TITLE_ELEMENT};

/// Name prefix identifying vendor metadata.
pub const VENDOR_META_PREFIX: &str = "ui-layouts:";

/// One `<meta>` tag as lowercase attribute names mapped to raw values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaTag {
    attrs: Vec<(String, String)>,
}

impl MetaTag {
    fn parse(attr_run: &str) -> Self {
        let attrs = TAG_ATTRIBUTE
            .captures_iter(attr_run)
            .filter_map(|caps| {
                let name = caps.get(1)?.as_str().to_ascii_lowercase();
                let value = caps.get(2).or_else(|| caps.get(3)).or_else(|| caps.get(4))?;
                Some((name, value.as_str().to_string()))
            })
            .collect();
        Self { attrs }
    }

    /// Raw value of the first attribute called `name` (case-insensitive).
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Whether the `name` or the `property` attribute equals `key`
    /// (case-insensitive). A tag carrying both answers to either.
    #[must_use]
    pub fn has_key(&self, key: &str) -> bool {
        ["name", "property"]
            .into_iter()
            .filter_map(|attr| self.attr(attr))
            .any(|k| k.trim().eq_ignore_ascii_case(key))
    }

    /// Trimmed `content`, `None` when missing or blank.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.attr("content").map(str::trim).filter(|c| !c.is_empty())
    }
}

/// All `<meta>` tags of a document, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaTags(Vec<MetaTag>);

impl MetaTags {
    /// Scan `html` for `<meta>` tags.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self(
            META_TAG
                .captures_iter(html)
                .filter_map(|caps| caps.get(1))
                .map(|run| MetaTag::parse(run.as_str()))
                .collect(),
        )
    }

    /// Content of the first tag whose key equals `key` (case-insensitive).
    #[must_use]
    pub fn content_of(&self, key: &str) -> Option<String> {
        self.0
            .iter()
            .filter(|tag| tag.has_key(key))
            .find_map(MetaTag::content)
            .map(ToString::to_string)
    }

    /// Iterate over the parsed tags.
    pub fn iter(&self) -> impl Iterator<Item = &MetaTag> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Text of the first `<title>` element, trimmed; `None` when absent or blank.
#[must_use]
pub fn extract_title_element(html: &str) -> Option<String> {
    TITLE_ELEMENT
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .filter(|t| !t.is_empty())
        .map(ToString::to_string)
}

/// Open Graph fields: `(og:title, og:description, og:image)`.
///
/// The image is returned raw; resolution happens in the caller.
#[must_use]
pub fn extract_open_graph(tags: &MetaTags) -> (Option<String>, Option<String>, Option<String>) {
    (
        tags.content_of("og:title"),
        tags.content_of("og:description"),
        tags.content_of("og:image"),
    )
}

/// Twitter card fields: `(twitter:title, twitter:description, twitter:image)`.
#[must_use]
pub fn extract_twitter_card(tags: &MetaTags) -> (Option<String>, Option<String>, Option<String>) {
    (
        tags.content_of("twitter:title"),
        tags.content_of("twitter:description"),
        tags.content_of("twitter:image"),
    )
}

/// `name="keywords"` split on commas, trimmed, empties dropped.
///
/// `None` when the tag is missing or lists nothing.
#[must_use]
pub fn extract_keywords(tags: &MetaTags) -> Option<Vec<String>> {
    let raw = tags.content_of("keywords")?;
    let keywords: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(ToString::to_string)
        .collect();
    (!keywords.is_empty()).then_some(keywords)
}

/// Vendor tags keyed by their name minus [`VENDOR_META_PREFIX`].
///
/// The first occurrence of a key wins. `None` when no vendor tag exists.
#[must_use]
pub fn extract_vendor_meta(tags: &MetaTags) -> Option<BTreeMap<String, String>> {
    let mut other = BTreeMap::new();

    for tag in tags.iter() {
        let Some(name) = tag.attr("name").map(str::trim) else {
            continue;
        };
        let Some(prefix) = name.get(..VENDOR_META_PREFIX.len()) else {
            continue;
        };
        if !prefix.eq_ignore_ascii_case(VENDOR_META_PREFIX) {
            continue;
        }
        let key = &name[VENDOR_META_PREFIX.len()..];
        if key.is_empty() {
            continue;
        }
        let content = tag.attr("content").map(str::trim).unwrap_or_default();
        other
            .entry(key.to_string())
            .or_insert_with(|| content.to_string());
    }

    (!other.is_empty()).then_some(other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_order_does_not_matter() {
        let tags = MetaTags::parse(
            r#"<meta content="Second first" name="description">
               <meta name="author" content="Jane">"#,
        );
        assert_eq!(tags.content_of("description").as_deref(), Some("Second first"));
        assert_eq!(tags.content_of("author").as_deref(), Some("Jane"));
    }

    #[test]
    fn test_names_and_values_are_case_insensitive() {
        let tags = MetaTags::parse(r#"<META PROPERTY="OG:Title" CONTENT="Loud">"#);
        assert_eq!(tags.content_of("og:title").as_deref(), Some("Loud"));
    }

    #[test]
    fn test_tag_with_name_and_property_answers_to_both() {
        let tags = MetaTags::parse(
            r#"<meta name="description" property="og:description" content="Shared">
               <meta name="twitter:title" property="og:title" content="Both">"#,
        );
        assert_eq!(tags.content_of("description").as_deref(), Some("Shared"));
        assert_eq!(tags.content_of("og:description").as_deref(), Some("Shared"));
        assert_eq!(tags.content_of("og:title").as_deref(), Some("Both"));
        assert_eq!(tags.content_of("twitter:title").as_deref(), Some("Both"));
    }

    #[test]
    fn test_single_quotes_and_self_closing() {
        let tags = MetaTags::parse("<meta name='creator' content=' @ui ' />");
        assert_eq!(tags.content_of("creator").as_deref(), Some("@ui"));
    }

    #[test]
    fn test_entities_are_kept() {
        let tags = MetaTags::parse(r#"<meta name="description" content="Tom &amp; Jerry">"#);
        assert_eq!(tags.content_of("description").as_deref(), Some("Tom &amp; Jerry"));
    }

    #[test]
    fn test_blank_content_is_skipped() {
        let tags = MetaTags::parse(
            r#"<meta name="author" content="  "><meta name="author" content="Real">"#,
        );
        assert_eq!(tags.content_of("author").as_deref(), Some("Real"));
    }

    #[test]
    fn test_title_element() {
        assert_eq!(
            extract_title_element("<head><TITLE lang=\"en\">\n  Tabs  \n</TITLE></head>").as_deref(),
            Some("Tabs")
        );
        assert_eq!(extract_title_element("<title>   </title>"), None);
        assert_eq!(extract_title_element("<head></head>"), None);
    }

    #[test]
    fn test_keywords_split_and_trimmed() {
        let tags = MetaTags::parse(r#"<meta name="keywords" content="react, ,tabs , ui">"#);
        assert_eq!(
            extract_keywords(&tags),
            Some(vec!["react".to_string(), "tabs".to_string(), "ui".to_string()])
        );
        assert_eq!(extract_keywords(&MetaTags::parse("<meta name=\"x\" content=\"y\">")), None);
    }

    #[test]
    fn test_open_graph_and_twitter_are_independent() {
        let tags = MetaTags::parse(
            r#"<meta property="og:title" content="OG">
               <meta name="twitter:description" content="TW">"#,
        );
        let (og_title, og_description, og_image) = extract_open_graph(&tags);
        let (tw_title, tw_description, tw_image) = extract_twitter_card(&tags);
        assert_eq!(og_title.as_deref(), Some("OG"));
        assert_eq!(og_description, None);
        assert_eq!(og_image, None);
        assert_eq!(tw_title, None);
        assert_eq!(tw_description.as_deref(), Some("TW"));
        assert_eq!(tw_image, None);
    }

    #[test]
    fn test_vendor_meta_strips_prefix() {
        let tags = MetaTags::parse(
            r#"<meta name="ui-layouts:component-names" content="tabs,tabs-v2">
               <meta name="UI-LAYOUTS:version" content=" 2 ">
               <meta name="description" content="not vendor">"#,
        );
        let other = extract_vendor_meta(&tags).unwrap_or_default();
        assert_eq!(other.len(), 2);
        assert_eq!(other.get("component-names").map(String::as_str), Some("tabs,tabs-v2"));
        assert_eq!(other.get("version").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_vendor_meta_absent_not_empty() {
        let tags = MetaTags::parse(r#"<meta name="description" content="x">"#);
        assert_eq!(extract_vendor_meta(&tags), None);
    }

    #[test]
    fn test_unterminated_tag_does_not_break_others() {
        let tags = MetaTags::parse(
            r#"<meta name="author" content="A"><meta name="description" content="unterminated"#,
        );
        assert_eq!(tags.content_of("author").as_deref(), Some("A"));
        assert_eq!(tags.content_of("description"), None);
    }
}
