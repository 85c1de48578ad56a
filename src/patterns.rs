//! Compiled regex patterns for HTML extraction.
//!
//! All patterns are compiled once at first use via `LazyLock`. They are
//! deliberately shallow: each one recognises a single tag shape in loosely
//! well-formed markup, nothing more.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Metadata Patterns
// =============================================================================

/// First `<title>` element; captures its inner text.
pub static TITLE_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<title(?:\s[^>]*)?>(.*?)</title\s*>").expect("TITLE_ELEMENT regex")
});

/// A whole `<meta ...>` tag; captures the attribute run.
///
/// Quoted attribute values may contain `>` without ending the tag.
pub static META_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<meta\b((?:[^>"']|"[^"]*"|'[^']*')*)>"#).expect("META_TAG regex")
});

/// One `name=value` pair inside a tag's attribute run.
///
/// Group 1 is the attribute name; the value is in group 2 (double quoted),
/// 3 (single quoted) or 4 (unquoted).
pub static TAG_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)([a-z_][a-z0-9_:.-]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
        .expect("TAG_ATTRIBUTE regex")
});

// =============================================================================
// Main Section Patterns
// =============================================================================

/// First `<article>` element; captures its inner HTML.
pub static ARTICLE_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<article(?:\s[^>]*)?>(.*?)</article\s*>").expect("ARTICLE_SECTION regex")
});

/// First `<main>` element; captures its inner HTML.
pub static MAIN_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<main(?:\s[^>]*)?>(.*?)</main\s*>").expect("MAIN_SECTION regex")
});

/// The `<body>` element; captures its inner HTML.
pub static BODY_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<body(?:\s[^>]*)?>(.*?)</body\s*>").expect("BODY_SECTION regex")
});

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// `<script>` regions including their content.
pub static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b.*?</script\s*>").expect("SCRIPT_BLOCK regex")
});

/// `<style>` regions including their content.
pub static STYLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<style\b.*?</style\s*>").expect("STYLE_BLOCK regex")
});

/// Closing tags of block-level elements that end a visual line.
pub static BLOCK_CLOSE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</(?:p|div|section|article|h[1-6]|li|br|main|header|footer)\s*>")
        .expect("BLOCK_CLOSE_TAG regex")
});

/// Any remaining tag.
pub static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<[^>]+>").expect("ANY_TAG regex")
});

/// Three or more newlines, possibly separated by other whitespace.
pub static BLANK_LINE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r?\n\s*\n\s*\n+").expect("BLANK_LINE_RUN regex")
});
