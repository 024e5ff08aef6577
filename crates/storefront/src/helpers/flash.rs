//! Flash message banners.

use askama::Template;
use shopfront_core::FlashMessages;

use crate::error::Result;

/// Categories that are never rendered as banners.
///
/// `order_completed` is read by the order confirmation page instead.
pub const ALWAYS_IGNORED: &[&str] = &["order_completed"];

/// A single flash banner.
#[derive(Template)]
#[template(source = r#"<div class="flash {{ category }}">{{ text }}</div>"#, ext = "html")]
struct FlashTemplate<'a> {
    category: &'a str,
    text: &'a str,
}

/// Render every flash message whose category is not in `ignore`.
///
/// Each message becomes `<div class="flash CATEGORY">TEXT</div>`; blocks are
/// concatenated in insertion order with nothing in between.
///
/// # Errors
///
/// Returns `HelperError::Render` if template rendering fails.
pub fn flash_messages(messages: &FlashMessages, ignore: &[&str]) -> Result<String> {
    let mut html = String::new();
    for (category, text) in messages.iter() {
        let ignored = |list: &[&str]| list.iter().any(|c| *c == category);
        if ignored(ALWAYS_IGNORED) || ignored(ignore) {
            continue;
        }
        html.push_str(&FlashTemplate { category, text }.render()?);
    }
    Ok(html)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn flash() -> FlashMessages {
        [("notice", "ok"), ("foo", "foo"), ("bar", "bar")]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_renders_all_messages() {
        let html = flash_messages(&flash(), &[]).unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<div class="flash notice">ok</div>"#,
                r#"<div class="flash foo">foo</div>"#,
                r#"<div class="flash bar">bar</div>"#,
            )
        );
    }

    #[test]
    fn test_ignores_one_category() {
        let html = flash_messages(&flash(), &["bar"]).unwrap();
        assert!(html.contains(r#"<div class="flash notice">ok</div>"#));
        assert!(html.contains(r#"<div class="flash foo">foo</div>"#));
        assert!(!html.contains("flash bar"));
    }

    #[test]
    fn test_ignores_several_categories() {
        let html = flash_messages(&flash(), &["foo", "bar"]).unwrap();
        assert_eq!(html, r#"<div class="flash notice">ok</div>"#);
    }

    #[test]
    fn test_order_completed_never_rendered() {
        let mut messages = flash();
        messages.insert("order_completed", "true");
        let html = flash_messages(&messages, &["foo", "bar"]).unwrap();
        assert_eq!(html, r#"<div class="flash notice">ok</div>"#);
    }

    #[test]
    fn test_message_text_is_escaped() {
        let messages: FlashMessages = [("error", "<script>alert(1)</script>")]
            .into_iter()
            .collect();
        let html = flash_messages(&messages, &[]).unwrap();
        assert_eq!(
            html,
            r#"<div class="flash error">&#60;script&#62;alert(1)&#60;/script&#62;</div>"#
        );
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_empty_messages_render_nothing() {
        assert_eq!(flash_messages(&FlashMessages::new(), &[]).unwrap(), "");
    }
}
