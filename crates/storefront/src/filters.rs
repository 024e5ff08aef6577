//! Custom Askama template filters.
//!
//! Page templates bring these into scope with `use shopfront_storefront::filters;`.

use std::fmt::Display;

use crate::helpers::meta::{self, DEFAULT_META_DESCRIPTION_LIMIT};
use crate::helpers::time;

/// Formats a timestamp string as `May 06, 2012  1:33 PM`.
///
/// Accepts RFC 3339 (`2012-05-06T13:33:00Z`) or naive ISO
/// (`2012-05-06T13:33`, `2012-05-06 13:33`) input.
///
/// Usage in templates: `{{ order.completed_at|pretty_time }}`
#[askama::filter_fn]
pub fn pretty_time(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let parsed = time::parse_timestamp(&value.to_string()).map_err(askama::Error::custom)?;
    Ok(time::pretty_naive_time(&parsed))
}

/// Shortens text to the default meta description length.
///
/// Usage in templates: `{{ product.description|meta_description }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn meta_description(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(meta::meta_description(
        &value.to_string(),
        DEFAULT_META_DESCRIPTION_LIMIT,
    ))
}

/// Strips HTML tags and collapses whitespace.
///
/// Usage in templates: `{{ product.description|plain_text }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn plain_text(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(meta::strip_tags(&value.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use askama::Template;

    use crate::filters;

    #[derive(Template)]
    #[template(source = "{{ value|pretty_time }}", ext = "txt")]
    struct PrettyTimeProbe<'a> {
        value: &'a str,
    }

    #[derive(Template)]
    #[template(source = "{{ value|plain_text|meta_description }}", ext = "txt")]
    struct DescriptionProbe<'a> {
        value: &'a str,
    }

    #[test]
    fn test_pretty_time_filter() {
        let html = PrettyTimeProbe {
            value: "2012-05-06T13:33",
        }
        .render()
        .unwrap();
        assert_eq!(html, "May 06, 2012  1:33 PM");
    }

    #[test]
    fn test_pretty_time_filter_rejects_garbage() {
        assert!(PrettyTimeProbe { value: "soon" }.render().is_err());
    }

    #[test]
    fn test_description_filters() {
        let long = format!("<p>{}</p>", "a".repeat(200));
        let text = DescriptionProbe { value: &long }.render().unwrap();
        assert!(text.chars().count() <= 160);
        assert!(!text.contains("<p>"));
    }
}
