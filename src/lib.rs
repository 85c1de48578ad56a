//! # ui-layouts-docs
//!
//! Documentation retrieval for the ui-layouts.com component library.
//!
//! The crate holds a static catalog of component descriptors and answers
//! four kinds of request on top of it: substring search, documentation page
//! text, remote page metadata and component source bundles. Remote content is
//! fetched with a per-call timeout and reduced to plain text or structured
//! metadata with pattern-based readers.
//!
//! ## Quick Start
//!
//! ```rust
//! use ui_layouts_docs::{extract_meta_from_html, html_to_text, search_components, Catalog};
//!
//! let hits = search_components(Catalog::builtin(), "accordion", 20);
//! assert_eq!(hits[0].href, "/components/accordion");
//!
//! let html = r#"<html><head><title>Accordion</title></head>
//! <body><p>Collapsible sections.</p></body></html>"#;
//! let meta = extract_meta_from_html(html, "https://ui-layouts.com/components/accordion");
//! assert_eq!(meta.title.as_deref(), Some("Accordion"));
//! assert_eq!(html_to_text(html), "Accordion\nCollapsible sections.");
//! ```
//!
//! ## Features
//!
//! - **Catalog**: builtin descriptor list with key and href lookup
//! - **Search**: case-insensitive substring match in catalog order
//! - **Metadata**: title, description, image, Open Graph, Twitter Card and
//!   `ui-layouts:*` vendor tags
//! - **Text**: script/style stripping, block-aware tag removal, main-section
//!   selection
//! - **Tools and prompts**: Markdown renderers for a protocol front-end

mod error;
mod options;
mod patterns;
mod result;

/// Component catalog and lookup.
pub mod catalog;

/// Substring search over the catalog.
pub mod search;

/// URL construction and resolution.
pub mod url_utils;

/// Response body charset handling.
pub mod encoding;

/// Time-bounded HTTP retrieval.
pub mod fetch;

/// Metadata extraction from HTML meta tags.
pub mod metadata;

/// HTML to plain-text normalization.
pub mod html_processing;

/// Tool operations rendered as Markdown.
pub mod tools;

/// Guided workflow instructions.
pub mod prompts;

pub use catalog::{Catalog, ComponentDescriptor};
pub use error::{Error, FetchFailure, Result, ToolFailure};
pub use fetch::{FetchOutcome, Fetcher};
pub use html_processing::{extract_main_section, html_to_text, truncate_chars};
pub use metadata::extract_meta_from_html;
pub use options::{Options, DEFAULT_BASE_URL, MAX_CHARS_RANGE, SEARCH_LIMIT_RANGE, TIMEOUT_MS_RANGE};
pub use result::RemoteMeta;
pub use search::search_components;
pub use tools::{DocsFormat, DocsService, GetDocsArgs, MetaArgs, SearchArgs, SourceArgs};
pub use url_utils::{build_remote_url, to_absolute_url};
