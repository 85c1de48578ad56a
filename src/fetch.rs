//! Time-bounded HTTP retrieval.
//!
//! Every call issues exactly one GET, bounded by its own timer, with no
//! retries. Failures of any kind come back as [`FetchOutcome::Failed`];
//! nothing here returns `Err` or panics on remote input.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::encoding;
use crate::error::{Error, FetchFailure, Result};
use crate::metadata::extract_meta_from_html;
use crate::options::Options;
use crate::result::RemoteMeta;

/// `Accept` header for HTML pages.
pub const ACCEPT_HTML: &str = "text/html,application/xhtml+xml";

/// `Accept` header for JSON resources.
pub const ACCEPT_JSON: &str = "application/json,text/plain;q=0.9,*/*;q=0.8";

/// Result of a single fetch: data, or the reason there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    /// The request succeeded and the body was decoded.
    Fetched(T),
    /// No data is available for this call.
    Failed(FetchFailure),
}

impl<T> FetchOutcome<T> {
    /// The fetched value, discarding the failure detail.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Fetched(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    /// The failure reason, if the fetch failed.
    #[must_use]
    pub fn failure(&self) -> Option<&FetchFailure> {
        match self {
            Self::Fetched(_) => None,
            Self::Failed(failure) => Some(failure),
        }
    }

    /// Transform the fetched value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchOutcome<U> {
        match self {
            Self::Fetched(value) => FetchOutcome::Fetched(f(value)),
            Self::Failed(failure) => FetchOutcome::Failed(failure),
        }
    }

    /// Transform the fetched value with a step that can itself fail.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> FetchOutcome<U>) -> FetchOutcome<U> {
        match self {
            Self::Fetched(value) => f(value),
            Self::Failed(failure) => FetchOutcome::Failed(failure),
        }
    }
}

/// Raw response body plus the declared content type.
#[derive(Debug)]
struct RawBody {
    bytes: Vec<u8>,
    content_type: Option<String>,
}

/// HTTP client that identifies itself with a fixed `User-Agent`.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a fetcher that sends `user_agent` on every request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HttpClient`] if the TLS backend cannot be initialised.
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;
        Ok(Self { client })
    }

    /// Creates a fetcher from the service options.
    ///
    /// # Errors
    ///
    /// See [`Fetcher::new`].
    pub fn from_options(options: &Options) -> Result<Self> {
        Self::new(&options.user_agent)
    }

    /// Fetch an HTML (or other text) document.
    #[instrument(skip(self))]
    pub async fn fetch_text(&self, url: &str, timeout_ms: u64) -> FetchOutcome<String> {
        self.get(url, ACCEPT_HTML, timeout_ms)
            .await
            .map(|body| encoding::decode_body(&body.bytes, body.content_type.as_deref()))
    }

    /// Fetch and parse a JSON document.
    #[instrument(skip(self))]
    pub async fn fetch_json(&self, url: &str, timeout_ms: u64) -> FetchOutcome<Value> {
        self.get(url, ACCEPT_JSON, timeout_ms)
            .await
            .and_then(|body| match serde_json::from_slice(&body.bytes) {
                Ok(value) => FetchOutcome::Fetched(value),
                Err(e) => {
                    warn!(url, error = %e, "Response is not valid JSON");
                    FetchOutcome::Failed(FetchFailure::Json(e.to_string()))
                }
            })
    }

    /// Fetch an HTML page and extract its metadata.
    pub async fn fetch_meta(&self, url: &str, timeout_ms: u64) -> FetchOutcome<RemoteMeta> {
        self.fetch_text(url, timeout_ms)
            .await
            .map(|html| extract_meta_from_html(&html, url))
    }

    async fn get(&self, url: &str, accept: &str, timeout_ms: u64) -> FetchOutcome<RawBody> {
        debug!(url, timeout_ms, "Fetching");

        let request = async {
            let response = self
                .client
                .get(url)
                .header(ACCEPT, accept)
                .send()
                .await
                .map_err(|e| FetchFailure::Request(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchFailure::Status(status.as_u16()));
            }

            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(ToString::to_string);
            let bytes = response
                .bytes()
                .await
                .map_err(|e| FetchFailure::Body(e.to_string()))?;

            Ok::<_, FetchFailure>(RawBody {
                bytes: bytes.to_vec(),
                content_type,
            })
        };

        match tokio::time::timeout(Duration::from_millis(timeout_ms), request).await {
            Ok(Ok(body)) => {
                debug!(url, bytes = body.bytes.len(), "Fetched");
                FetchOutcome::Fetched(body)
            }
            Ok(Err(failure)) => {
                warn!(url, %failure, "Fetch failed");
                FetchOutcome::Failed(failure)
            }
            Err(_) => {
                warn!(url, timeout_ms, "Fetch timed out");
                FetchOutcome::Failed(FetchFailure::Timeout { timeout_ms })
            }
        }
    }
}
