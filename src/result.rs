//! Result types for metadata extraction.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Metadata extracted from one fetched HTML page.
///
/// Built fresh by every extraction call; never cached. All string values
/// are trimmed and keep HTML entities exactly as they appeared in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteMeta {
    /// Absolute URL the page was fetched from.
    pub url: String,

    /// `<title>` text, else `og:title`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// `name="description"`, else `og:description`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Resolved `og:image`, else resolved `twitter:image`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Comma-separated `name="keywords"` content, split and trimmed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,

    /// `og:image` resolved against [`RemoteMeta::url`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_description: Option<String>,

    /// `twitter:image` resolved against [`RemoteMeta::url`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_image: Option<String>,

    /// Vendor meta tags with the `ui-layouts:` prefix stripped from the name.
    ///
    /// `None` when the page has no such tag; never an empty map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other: Option<BTreeMap<String, String>>,
}

impl RemoteMeta {
    /// Raw value of a vendor tag, looked up by its unprefixed name.
    #[must_use]
    pub fn vendor(&self, key: &str) -> Option<&str> {
        self.other.as_ref()?.get(key).map(String::as_str)
    }

    /// Names listed in the `component-names` vendor tag (comma separated).
    #[must_use]
    pub fn component_names(&self) -> Vec<String> {
        split_list(self.vendor("component-names"), ',')
    }

    /// Entries of the `available-components` vendor tag (pipe separated).
    #[must_use]
    pub fn available_components(&self) -> Vec<String> {
        split_list(self.vendor("available-components"), '|')
    }
}

fn split_list(raw: Option<&str>, separator: char) -> Vec<String> {
    raw.map(|s| {
        s.split(separator)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect()
    })
    .unwrap_or_default()
}
