//! Error types for ui-layouts-docs.
//!
//! Two families live here. [`Error`] covers failures that are the caller's
//! fault or happen at startup (bad arguments, a broken catalog file). The
//! retrieval path itself never returns `Err`: remote problems are reported as
//! a [`FetchFailure`] inside a [`crate::fetch::FetchOutcome`], and the tool
//! layer renders them through [`ToolFailure`] as plain sentinel text.

/// Error type for argument validation and catalog construction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A tool or prompt argument is outside its documented bounds.
    #[error("invalid argument `{field}`: {reason}")]
    InvalidArgument {
        /// Argument name as it appears on the wire.
        field: &'static str,
        /// Human-readable description of the violated bound.
        reason: String,
    },

    /// Two catalog descriptors share the same key.
    #[error("duplicate catalog key: {0}")]
    DuplicateKey(String),

    /// Catalog JSON could not be parsed.
    #[error("catalog parse failed: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// Reading a catalog file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    HttpClient(String),
}

/// Result type alias for fallible setup and validation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a single remote fetch produced no data.
///
/// Every variant collapses to the same "no data available" outcome for the
/// caller; the detail is kept for logging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchFailure {
    /// The request did not complete within its budget.
    #[error("timed out after {timeout_ms} ms")]
    Timeout {
        /// Budget that was exceeded.
        timeout_ms: u64,
    },

    /// The server answered with a non-2xx status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// Connection, DNS, TLS or protocol failure.
    #[error("request failed: {0}")]
    Request(String),

    /// The response body could not be read.
    #[error("reading body failed: {0}")]
    Body(String),

    /// The body was not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(String),
}

/// Non-fatal outcomes of a tool call, rendered as sentinel text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolFailure {
    /// No descriptor matched the supplied key or href.
    #[error("Not found (key={}, href={})", or_dash(.key.as_deref()), or_dash(.href.as_deref()))]
    NotFound {
        /// Key supplied by the caller, if any.
        key: Option<String>,
        /// Href supplied by the caller, if any.
        href: Option<String>,
    },

    /// The remote fetch failed; `what` names the payload ("docs", "metadata").
    #[error("⚠️ Failed to fetch{} from: {url}", payload_label(.what.as_deref()))]
    FetchFailed {
        /// Payload label, or `None` for a generic fetch.
        what: Option<&'static str>,
        /// URL that was attempted.
        url: String,
    },

    /// The remote JSON parsed but lacked `files[0].content`.
    #[error("⚠️ No content found in {url}")]
    EmptyContent {
        /// URL of the JSON bundle.
        url: String,
    },

    /// `get_source_code` was called without a component name.
    #[error("⚠️ Component name is required")]
    MissingComponentName,
}

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

fn payload_label(what: Option<&str>) -> String {
    what.map(|w| format!(" {w}")).unwrap_or_default()
}
