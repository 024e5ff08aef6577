//! Shipment tracking links.

use askama::Template;
use shopfront_core::ShipmentTracking;

use super::html_attributes;
use crate::error::Result;

#[derive(Template)]
#[template(
    source = r#"<a href="{{ url }}"{% for (name, value) in attrs %} {{ name }}="{{ value }}"{% endfor %}>{{ number }}</a>"#,
    ext = "html"
)]
struct TrackingLinkTemplate<'a> {
    number: &'a str,
    url: &'a str,
    attrs: &'a [(&'a str, &'a str)],
}

#[derive(Template)]
#[template(source = "<span>{{ number }}</span>", ext = "html")]
struct TrackingTextTemplate<'a> {
    number: &'a str,
}

/// Render a shipment's tracking number.
///
/// - no shipping method, or no tracking number: empty string
/// - tracking URL present: `<a href="URL">NUMBER</a>`, with `html_options`
///   added as extra attributes on the anchor (`href` cannot be overridden)
/// - otherwise: `<span>NUMBER</span>`
///
/// # Errors
///
/// Returns `HelperError::Render` if template rendering fails.
pub fn link_to_tracking(
    shipment: &ShipmentTracking,
    html_options: &[(&str, &str)],
) -> Result<String> {
    if !shipment.has_shipping_method {
        return Ok(String::new());
    }
    let Some(number) = shipment.tracking_number() else {
        return Ok(String::new());
    };

    let html = match shipment.tracking_url.as_deref().filter(|u| !u.is_empty()) {
        Some(url) => TrackingLinkTemplate {
            number,
            url,
            attrs: &html_attributes(html_options, &["href"]),
        }
        .render()?,
        None => TrackingTextTemplate { number }.render()?,
    };
    Ok(html)
}
