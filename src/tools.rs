//! Tool operations exposed to a protocol front-end.
//!
//! Each operation takes a deserialized argument struct, checks its bounds,
//! runs one lookup/fetch/transform pipeline and returns Markdown text. Once
//! the arguments are valid, every outcome (including "not found" and failed
//! fetches) is a plain string; `Err` is reserved for bad arguments.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::catalog::{Catalog, ComponentDescriptor};
use crate::error::{Error, Result, ToolFailure};
use crate::fetch::{FetchOutcome, Fetcher};
use crate::html_processing::{extract_main_section, html_to_text, truncate_chars};
use crate::options::{check_range, Options, MAX_CHARS_RANGE, SEARCH_LIMIT_RANGE, TIMEOUT_MS_RANGE};
use crate::result::RemoteMeta;
use crate::search::search_components;
use crate::url_utils::build_remote_url;

/// Output shape for `get_docs`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocsFormat {
    /// The page HTML, truncated and fenced.
    RawHtml,
    /// The whole page as plain text.
    #[default]
    Text,
    /// Only the main content region as plain text.
    Snippet,
}

impl DocsFormat {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RawHtml => "raw_html",
            Self::Text => "text",
            Self::Snippet => "snippet",
        }
    }
}

impl fmt::Display for DocsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocsFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "raw_html" => Ok(Self::RawHtml),
            "text" => Ok(Self::Text),
            "snippet" => Ok(Self::Snippet),
            other => Err(Error::InvalidArgument {
                field: "format",
                reason: format!("unknown format `{other}` (expected raw_html, text or snippet)"),
            }),
        }
    }
}

/// Arguments of `search_components`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchArgs {
    /// Query matched against name, key, group, href and tags.
    pub q: String,
    /// Result cap; the service default applies when absent.
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Arguments of `get_docs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDocsArgs {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub path_prefix: Option<String>,
    #[serde(default)]
    pub format: DocsFormat,
    #[serde(default)]
    pub max_chars: Option<usize>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

/// Arguments of `get_component_meta`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaArgs {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub path_prefix: Option<String>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

/// Arguments of `get_source_code`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceArgs {
    /// Registry bundle name, e.g. `liquid-glass-weather`.
    #[serde(default)]
    pub component_name: Option<String>,
    #[serde(default)]
    pub max_chars: Option<usize>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

/// The four documentation tools over one catalog.
#[derive(Debug, Clone)]
pub struct DocsService<'c> {
    catalog: &'c Catalog,
    fetcher: Fetcher,
    options: Options,
}

impl<'c> DocsService<'c> {
    /// Creates a service over `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the option defaults are out of
    /// bounds, or [`Error::HttpClient`] if the client cannot be built.
    pub fn new(catalog: &'c Catalog, options: Options) -> Result<Self> {
        options.validate()?;
        let fetcher = Fetcher::from_options(&options)?;
        Ok(Self {
            catalog,
            fetcher,
            options,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Search the catalog and list the hits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an empty query or a limit
    /// outside `1..=100`.
    pub fn search_components(&self, args: &SearchArgs) -> Result<String> {
        if args.q.is_empty() {
            return Err(Error::InvalidArgument {
                field: "q",
                reason: "must not be empty".to_string(),
            });
        }
        let limit = args.limit.unwrap_or(self.options.search_limit);
        check_range("limit", limit, &SEARCH_LIMIT_RANGE)?;

        let hits = search_components(self.catalog, &args.q, limit);
        info!(query = %args.q, limit, hits = hits.len(), "search_components");
        Ok(render_search_results(&args.q, &hits))
    }

    /// Fetch a component's documentation page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for out-of-range `maxChars` or
    /// `timeoutMs`.
    pub async fn get_docs(&self, args: &GetDocsArgs) -> Result<String> {
        let max_chars = args.max_chars.unwrap_or(self.options.docs_max_chars);
        let timeout_ms = self.timeout(args.timeout_ms)?;
        check_range("maxChars", max_chars, &MAX_CHARS_RANGE)?;

        let Some(item) = self.catalog.lookup(args.key.as_deref(), args.href.as_deref()) else {
            return Ok(not_found(args.key.as_deref(), args.href.as_deref()));
        };

        let url = self.remote_url(item, args.path_prefix.as_deref());
        info!(key = %item.key, %url, format = %args.format, "get_docs");

        let FetchOutcome::Fetched(html) = self.fetcher.fetch_text(&url, timeout_ms).await else {
            return Ok(ToolFailure::FetchFailed { what: Some("docs"), url }.to_string());
        };

        let output = match args.format {
            DocsFormat::RawHtml => truncate_chars(&html, max_chars).to_string(),
            DocsFormat::Snippet => {
                truncate_chars(&html_to_text(extract_main_section(&html)), max_chars).to_string()
            }
            DocsFormat::Text => truncate_chars(&html_to_text(&html), max_chars).to_string(),
        };

        Ok(render_docs(item, &url, args.format, max_chars, &output))
    }

    /// Fetch a component page and summarise its metadata.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an out-of-range `timeoutMs`.
    pub async fn get_component_meta(&self, args: &MetaArgs) -> Result<String> {
        let timeout_ms = self.timeout(args.timeout_ms)?;

        let Some(item) = self.catalog.lookup(args.key.as_deref(), args.href.as_deref()) else {
            return Ok(not_found(args.key.as_deref(), args.href.as_deref()));
        };

        let url = self.remote_url(item, args.path_prefix.as_deref());
        info!(key = %item.key, %url, "get_component_meta");

        match self.fetcher.fetch_meta(&url, timeout_ms).await {
            FetchOutcome::Fetched(meta) => Ok(render_meta(item, &meta)),
            FetchOutcome::Failed(_) => Ok(ToolFailure::FetchFailed {
                what: Some("metadata"),
                url,
            }
            .to_string()),
        }
    }

    /// Fetch a component's source bundle and return its first file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for out-of-range `maxChars` or
    /// `timeoutMs`.
    pub async fn get_source_code(&self, args: &SourceArgs) -> Result<String> {
        let max_chars = args.max_chars.unwrap_or(self.options.source_max_chars);
        let timeout_ms = self.timeout(args.timeout_ms)?;
        check_range("maxChars", max_chars, &MAX_CHARS_RANGE)?;

        let Some(name) = args.component_name.as_deref().filter(|n| !n.is_empty()) else {
            return Ok(ToolFailure::MissingComponentName.to_string());
        };

        let url = build_remote_url(&self.options.base_url, &format!("{name}.json"), Some("r"));
        info!(component = name, %url, "get_source_code");

        let json = match self.fetcher.fetch_json(&url, timeout_ms).await {
            FetchOutcome::Fetched(json) if !is_empty_payload(&json) => json,
            _ => return Ok(ToolFailure::FetchFailed { what: None, url }.to_string()),
        };

        match first_file_content(&json) {
            Some(content) => Ok(render_source(name, &url, max_chars, content)),
            None => Ok(ToolFailure::EmptyContent { url }.to_string()),
        }
    }

    fn timeout(&self, requested: Option<u64>) -> Result<u64> {
        let timeout_ms = requested.unwrap_or(self.options.timeout_ms);
        check_range("timeoutMs", timeout_ms, &TIMEOUT_MS_RANGE)?;
        Ok(timeout_ms)
    }

    fn remote_url(&self, item: &ComponentDescriptor, path_prefix: Option<&str>) -> String {
        let prefix = path_prefix.or(self.options.path_prefix.as_deref());
        build_remote_url(&self.options.base_url, &item.href, prefix)
    }
}

/// A body that parsed but carries nothing: `null`, `false`, `0` or `""`.
#[must_use]
pub fn is_empty_payload(json: &Value) -> bool {
    match json {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// `files[0].content` of a registry bundle, if present and non-empty.
#[must_use]
pub fn first_file_content(json: &Value) -> Option<&str> {
    json.get("files")?
        .get(0)?
        .get("content")?
        .as_str()
        .filter(|c| !c.is_empty())
}

fn not_found(key: Option<&str>, href: Option<&str>) -> String {
    ToolFailure::NotFound {
        key: key.map(ToString::to_string),
        href: href.map(ToString::to_string),
    }
    .to_string()
}

/// Markdown listing for a search.
#[must_use]
pub fn render_search_results(query: &str, hits: &[&ComponentDescriptor]) -> String {
    let lines: Vec<String> = if hits.is_empty() {
        vec!["- No matching components.".to_string()]
    } else {
        hits.iter()
            .map(|c| {
                let tags = if c.tags.is_empty() {
                    String::new()
                } else {
                    format!("  \n  - tags: {}", c.tags.join(", "))
                };
                format!(
                    "- **{}**  \n  - key: `{}`  \n  - group: {}  \n  - href: `{}`{tags}",
                    c.name, c.key, c.group, c.href
                )
            })
            .collect()
    };

    format!(
        "# Search Results ({}) for \"{query}\"\n\n{}",
        hits.len(),
        lines.join("\n")
    )
}

/// Markdown page for `get_docs`.
#[must_use]
pub fn render_docs(
    item: &ComponentDescriptor,
    url: &str,
    format: DocsFormat,
    max_chars: usize,
    output: &str,
) -> String {
    let header = [
        "# Docs".to_string(),
        format!("- **name**: {}", item.name),
        format!("- **key**: `{}`", item.key),
        format!("- **href**: `{}`", item.href),
        format!("- **url**: {url}"),
        format!("- **format**: {format}"),
        format!("- **maxChars**: {max_chars}"),
        String::new(),
    ]
    .join("\n");

    let body = match format {
        DocsFormat::RawHtml => format!("```html\n{output}\n```"),
        DocsFormat::Text | DocsFormat::Snippet => output.to_string(),
    };

    header + &body
}

/// Markdown summary for `get_component_meta`; absent fields are omitted.
#[must_use]
pub fn render_meta(item: &ComponentDescriptor, meta: &RemoteMeta) -> String {
    let optional =
        |label: &str, value: Option<&str>| value.map(|v| format!("- **{label}**: {v}"));

    let keywords = meta
        .keywords
        .as_ref()
        .filter(|k| !k.is_empty())
        .map(|k| format!("- **keywords**: {}", k.join(", ")));

    let component_names = meta.component_names();
    let available = meta.available_components();

    let lines: Vec<String> = [
        Some("# Remote Metadata".to_string()),
        Some(format!("- **name**: {}", item.name)),
        Some(format!("- **key**: `{}`", item.key)),
        Some(format!("- **href**: `{}`", item.href)),
        Some(format!("- **url**: {}", meta.url)),
        optional("title", meta.title.as_deref()),
        optional("description", meta.description.as_deref()),
        optional("image", meta.image.as_deref()),
        keywords,
        optional("author", meta.author.as_deref()),
        optional("creator", meta.creator.as_deref()),
        optional("og:title", meta.og_title.as_deref()),
        optional("og:description", meta.og_description.as_deref()),
        optional("og:image", meta.og_image.as_deref()),
        optional("twitter:title", meta.twitter_title.as_deref()),
        optional("twitter:description", meta.twitter_description.as_deref()),
        optional("twitter:image", meta.twitter_image.as_deref()),
        (!component_names.is_empty()).then(|| {
            format!("- **ui-layouts:component-names**: {}", component_names.join(", "))
        }),
        (!available.is_empty()).then(|| {
            format!("- **ui-layouts:available-components**: {}", available.join(", "))
        }),
    ]
    .into_iter()
    .flatten()
    .collect();

    lines.join("\n")
}

/// Markdown page for `get_source_code`.
#[must_use]
pub fn render_source(name: &str, url: &str, max_chars: usize, content: &str) -> String {
    let header = [
        "# Source Code".to_string(),
        format!("- **componentName**: `{name}`"),
        format!("- **url**: {url}"),
        format!("- **maxChars**: {max_chars}"),
        String::new(),
    ]
    .join("\n");

    format!("{header}```tsx\n{}\n```", truncate_chars(content, max_chars))
}
