//! HTML Text Normalization
//!
//! Reduces an HTML document, or its main content region, to readable plain
//! text. Both operations are pure and work on patterns rather than a DOM.

use crate::patterns::{
    ANY_TAG, ARTICLE_SECTION, BLANK_LINE_RUN, BLOCK_CLOSE_TAG, BODY_SECTION, MAIN_SECTION,
    SCRIPT_BLOCK, STYLE_BLOCK,
};

/// Return the inner HTML of the main content region.
///
/// Tries the first `<article>`, then the first `<main>`, then `<body>`;
/// the first one found is returned trimmed, even if it is empty. When none
/// is present the whole input is returned unchanged.
///
/// # Examples
/// ```
/// use ui_layouts_docs::html_processing::extract_main_section;
///
/// assert_eq!(extract_main_section("<main>X</main><main>Y</main>"), "X");
/// assert_eq!(extract_main_section("no sections"), "no sections");
/// ```
#[must_use]
pub fn extract_main_section(html: &str) -> &str {
    [&*ARTICLE_SECTION, &*MAIN_SECTION, &*BODY_SECTION]
        .into_iter()
        .find_map(|re| re.captures(html).and_then(|c| c.get(1)))
        .map_or(html, |m| m.as_str().trim())
}

/// Convert an HTML fragment to plain text.
///
/// Steps, in order:
/// 1. drop `<script>` and `<style>` regions with their content
/// 2. append `\n` after closing block tags (`p`, `div`, `section`,
///    `article`, `h1`-`h6`, `li`, `br`, `main`, `header`, `footer`)
/// 3. strip every remaining tag
/// 4. collapse runs of three or more newlines into exactly two
/// 5. trim
///
/// Entities are not decoded.
///
/// # Examples
/// ```
/// use ui_layouts_docs::html_processing::html_to_text;
///
/// assert_eq!(html_to_text("<p>Hello</p><p>World</p>"), "Hello\nWorld");
/// ```
#[must_use]
pub fn html_to_text(html: &str) -> String {
    let out = SCRIPT_BLOCK.replace_all(html, "");
    let out = STYLE_BLOCK.replace_all(&out, "");
    let out = BLOCK_CLOSE_TAG.replace_all(&out, "${0}\n");
    let out = ANY_TAG.replace_all(&out, "");
    let out = BLANK_LINE_RUN.replace_all(&out, "\n\n");
    out.trim().to_string()
}

/// Truncate `text` to at most `max_chars` characters.
///
/// Counts `char`s, not bytes, so the cut never splits a code point. Callers
/// apply this after normalization.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
