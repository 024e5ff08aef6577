//! Page metadata: `<meta>` tags and titles.
//!
//! Product pages describe themselves with their own meta description, or a
//! truncated plain-text copy of the product description. Anything missing
//! falls back to the store-wide values from configuration.

use std::sync::LazyLock;

use askama::Template;
use regex::Regex;
use shopfront_core::Product;

use crate::error::Result;

/// Search engines cut descriptions off around this length.
pub const DEFAULT_META_DESCRIPTION_LIMIT: usize = 160;

const OMISSION: &str = "...";

/// Regex for HTML tags in product descriptions.
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid regex"));

/// Regex for runs of whitespace.
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex"));

/// Store-wide metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreMeta {
    pub name: String,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
}

#[derive(Template)]
#[template(source = r#"<meta name="{{ name }}" content="{{ content }}">"#, ext = "html")]
struct MetaTagTemplate<'a> {
    name: &'a str,
    content: &'a str,
}

/// Shorten `text` to at most `limit` characters.
///
/// Text that fits is returned unchanged. Longer text is cut at the last space
/// that leaves room for a trailing `...`, or mid-word when there is no space.
#[must_use]
pub fn meta_description(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let omission_len = OMISSION.chars().count();
    if limit < omission_len {
        return text.chars().take(limit).collect();
    }

    let room = limit - omission_len;
    // One extra character so a space right after the cut point still counts.
    let window: String = text.chars().take(room + 1).collect();
    let cut = match window.rfind(' ') {
        Some(idx) => window[..idx].trim_end(),
        None => "",
    };

    let mut truncated = if cut.is_empty() {
        text.chars().take(room).collect::<String>()
    } else {
        cut.to_string()
    };
    truncated.push_str(OMISSION);
    truncated
}

/// Remove HTML tags and collapse whitespace.
#[must_use]
pub fn strip_tags(html: &str) -> String {
    let text = TAG_RE.replace_all(html, " ");
    WHITESPACE_RE.replace_all(&text, " ").trim().to_string()
}

/// Render the `keywords` and `description` meta tags for a page.
///
/// Tags with no content anywhere are left out; present tags are joined by a
/// newline.
///
/// # Errors
///
/// Returns `HelperError::Render` if template rendering fails.
pub fn meta_data_tags(product: Option<&Product>, store: &StoreMeta, limit: usize) -> Result<String> {
    let keywords = product
        .and_then(|p| non_blank(p.meta_keywords.as_deref()))
        .map(str::to_string)
        .or_else(|| non_blank(store.meta_keywords.as_deref()).map(str::to_string));

    let description = product
        .and_then(|p| product_description(p, limit))
        .or_else(|| non_blank(store.meta_description.as_deref()).map(|d| meta_description(d, limit)));

    let mut tags = Vec::with_capacity(2);
    for (name, content) in [("keywords", keywords), ("description", description)] {
        if let Some(content) = content {
            tags.push(
                MetaTagTemplate {
                    name,
                    content: &content,
                }
                .render()?,
            );
        }
    }
    Ok(tags.join("\n"))
}

/// `"Title - Store"` when the page has a title, otherwise the store name.
#[must_use]
pub fn page_title(title: Option<&str>, store: &StoreMeta) -> String {
    match non_blank(title) {
        Some(title) => format!("{title} - {}", store.name),
        None => store.name.clone(),
    }
}

fn product_description(product: &Product, limit: usize) -> Option<String> {
    if let Some(explicit) = non_blank(product.meta_description.as_deref()) {
        return Some(meta_description(explicit, limit));
    }
    let plain = strip_tags(product.description.as_deref()?);
    (!plain.is_empty()).then(|| meta_description(&plain, limit))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
