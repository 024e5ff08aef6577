//! Commands that render a single helper to stdout.

use std::path::Path;

use shopfront_core::{FlashMessages, Product, ShipmentTracking};
use shopfront_storefront::ViewContext;
use shopfront_storefront::helpers::{
    flash_messages, link_to_tracking, meta_description, parse_timestamp, pretty_naive_time,
};
use tracing::debug;

use super::catalog::load_yaml;
use super::{InputError, emit};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Render flash banners from `CATEGORY=TEXT` pairs.
///
/// # Errors
///
/// Returns an error if a pair is malformed or rendering fails.
pub fn flash(messages: &[String], ignore: &[String]) -> CommandResult {
    let messages = messages
        .iter()
        .map(|pair| {
            pair.split_once('=')
                .filter(|(category, _)| !category.is_empty())
                .ok_or_else(|| InputError::FlashMessage(pair.clone()))
        })
        .collect::<Result<FlashMessages, _>>()?;
    let ignore: Vec<&str> = ignore.iter().map(String::as_str).collect();

    emit(&flash_messages(&messages, &ignore)?);
    Ok(())
}

/// Render a tracking link or text.
///
/// # Errors
///
/// Returns an error if an attribute is malformed or rendering fails.
pub fn tracking(
    number: Option<String>,
    url: Option<String>,
    no_shipping_method: bool,
    attrs: &[String],
) -> CommandResult {
    let shipment = ShipmentTracking {
        has_shipping_method: !no_shipping_method,
        tracking: number,
        tracking_url: url,
    };
    let attrs = parse_attrs(attrs)?;

    let html = link_to_tracking(&shipment, &attrs)?;
    if html.is_empty() {
        debug!("Shipment has no tracking to show");
    }
    emit(&html);
    Ok(())
}

/// Print a meta description, using the configured limit unless `limit` is given.
pub fn description(context: &ViewContext, text: &str, limit: Option<usize>) {
    let limit = limit.unwrap_or(context.config().meta_description_limit);
    emit(&meta_description(text, limit));
}

/// Render `<meta>` tags, optionally for a product loaded from YAML.
///
/// # Errors
///
/// Returns an error if the product file cannot be loaded or rendering fails.
pub fn meta_tags(context: &ViewContext, product_path: Option<&Path>) -> CommandResult {
    let product: Option<Product> = product_path.map(load_yaml).transpose()?;
    emit(&context.meta_data_tags(product.as_ref())?);
    Ok(())
}

/// Print a timestamp in storefront format.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be parsed.
pub fn pretty_time(timestamp: &str) -> CommandResult {
    let parsed = parse_timestamp(timestamp)?;
    emit(&pretty_naive_time(&parsed));
    Ok(())
}

/// Render an image helper such as `product_image` for a product loaded from YAML.
///
/// # Errors
///
/// Returns an error if the product cannot be loaded, the helper name does not
/// resolve to a registered style, or rendering fails.
pub fn image(
    context: &ViewContext,
    helper: &str,
    product_path: &Path,
    attrs: &[String],
) -> CommandResult {
    let product: Product = load_yaml(product_path)?;
    let attrs = parse_attrs(attrs)?;
    emit(&context.image_helper(helper, &product, &attrs)?);
    Ok(())
}

/// Print the registered image styles with their geometry.
pub fn image_styles(context: &ViewContext) {
    let registry = context.image_styles();
    for style in registry.styles() {
        emit(&format!(
            "{style}_image\t{}",
            registry.geometry(style).unwrap_or_default()
        ));
    }
}

fn parse_attrs(attrs: &[String]) -> Result<Vec<(&str, &str)>, InputError> {
    attrs
        .iter()
        .map(|attr| {
            attr.split_once('=')
                .filter(|(name, _)| !name.is_empty())
                .ok_or_else(|| InputError::Attribute(attr.clone()))
        })
        .collect()
}
