//! Metadata extraction module.
//!
//! Turns a raw HTML document into a [`RemoteMeta`] record using the
//! pattern readers in [`meta_tags`].

pub mod meta_tags;

use crate::result::RemoteMeta;
use crate::url_utils;

pub use meta_tags::{
    extract_keywords, extract_open_graph, extract_title_element, extract_twitter_card,
    extract_vendor_meta, MetaTag, MetaTags, VENDOR_META_PREFIX,
};

/// Extract all metadata from a document fetched from `url`.
///
/// Fallback chains:
/// - `title`: `<title>` element, then `og:title`
/// - `description`: `name="description"`, then `og:description`
/// - `image`: `og:image`, then `twitter:image`, both resolved against `url`
///   first (unresolvable values are kept verbatim)
///
/// The remaining fields are read independently and never fall back to
/// each other.
///
/// # Example
///
/// ```rust
/// use ui_layouts_docs::metadata::extract_meta_from_html;
///
/// let html = r#"<meta property="og:title" content="Foo">
///               <meta property="og:image" content="/img.png">"#;
/// let meta = extract_meta_from_html(html, "https://example.com/docs/x");
/// assert_eq!(meta.title.as_deref(), Some("Foo"));
/// assert_eq!(meta.image.as_deref(), Some("https://example.com/img.png"));
/// ```
#[must_use]
pub fn extract_meta_from_html(html: &str, url: &str) -> RemoteMeta {
    let tags = MetaTags::parse(html);

    let (og_title, og_description, og_image_raw) = extract_open_graph(&tags);
    let (twitter_title, twitter_description, twitter_image_raw) = extract_twitter_card(&tags);

    let og_image = og_image_raw.map(|raw| url_utils::to_absolute_url(&raw, url));
    let twitter_image = twitter_image_raw.map(|raw| url_utils::to_absolute_url(&raw, url));

    RemoteMeta {
        url: url.to_string(),
        title: extract_title_element(html).or_else(|| og_title.clone()),
        description: tags
            .content_of("description")
            .or_else(|| og_description.clone()),
        image: og_image.clone().or_else(|| twitter_image.clone()),
        keywords: extract_keywords(&tags),
        author: tags.content_of("author"),
        creator: tags.content_of("creator"),
        og_title,
        og_description,
        og_image,
        twitter_title,
        twitter_description,
        twitter_image,
        other: extract_vendor_meta(&tags),
    }
}
