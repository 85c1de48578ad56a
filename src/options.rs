//! Configuration options for retrieval.
//!
//! The `Options` struct carries the service-wide defaults (remote origin,
//! client identity, budgets). Per-call arguments override these and are
//! checked against the bounds constants defined here.

use std::ops::RangeInclusive;

use crate::error::{Error, Result};

/// Documentation site every descriptor href is resolved against.
pub const DEFAULT_BASE_URL: &str = "https://ui-layouts.com";

/// Inclusive bounds for the search result limit.
pub const SEARCH_LIMIT_RANGE: RangeInclusive<usize> = 1..=100;

/// Inclusive bounds for character truncation of rendered output.
pub const MAX_CHARS_RANGE: RangeInclusive<usize> = 200..=200_000;

/// Inclusive bounds for a single fetch timeout, in milliseconds.
pub const TIMEOUT_MS_RANGE: RangeInclusive<u64> = 1000..=20_000;

/// Configuration options for the docs service.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use ui_layouts_docs::Options;
///
/// let options = Options {
///     base_url: "http://127.0.0.1:8080".to_string(),
///     ..Options::default()
/// };
/// assert_eq!(options.timeout_ms, 7000);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Origin that descriptor hrefs are appended to.
    ///
    /// Default: `https://ui-layouts.com`
    pub base_url: String,

    /// Path segment inserted between the origin and the href when a call
    /// does not supply its own.
    ///
    /// Default: `None`
    pub path_prefix: Option<String>,

    /// Value sent in the `User-Agent` header.
    ///
    /// Default: `ui-layouts-docs/<version> (+mcp)`
    pub user_agent: String,

    /// Fetch timeout used when a call does not specify one.
    ///
    /// Default: `7000`
    pub timeout_ms: u64,

    /// Search result cap used when a call does not specify one.
    ///
    /// Default: `20`
    pub search_limit: usize,

    /// Character cap for `get_docs` output.
    ///
    /// Default: `8000`
    pub docs_max_chars: usize,

    /// Character cap for `get_source_code` output.
    ///
    /// Default: `20000`
    pub source_max_chars: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            path_prefix: None,
            user_agent: default_user_agent(),
            timeout_ms: 7000,
            search_limit: 20,
            docs_max_chars: 8000,
            source_max_chars: 20_000,
        }
    }
}

impl Options {
    /// Check the numeric defaults against the per-call bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] naming the first out-of-range field.
    pub fn validate(&self) -> Result<()> {
        check_range("timeoutMs", self.timeout_ms, &TIMEOUT_MS_RANGE)?;
        check_range("limit", self.search_limit, &SEARCH_LIMIT_RANGE)?;
        check_range("maxChars", self.docs_max_chars, &MAX_CHARS_RANGE)?;
        check_range("maxChars", self.source_max_chars, &MAX_CHARS_RANGE)?;
        Ok(())
    }
}

/// Client identity advertised on every request.
#[must_use]
pub fn default_user_agent() -> String {
    format!("ui-layouts-docs/{} (+mcp)", env!("CARGO_PKG_VERSION"))
}

/// Reject `value` unless it lies within `range`.
pub(crate) fn check_range<T>(field: &'static str, value: T, range: &RangeInclusive<T>) -> Result<()>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidArgument {
            field,
            reason: format!(
                "{value} is outside {}..={}",
                range.start(),
                range.end()
            ),
        })
    }
}
