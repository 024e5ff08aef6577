//! Integration tests for the storefront base helpers.
//!
//! These tests drive the public helper API the way page handlers do:
//! configuration in, catalog in, markup or text out.

use chrono::{NaiveDate, TimeZone, Utc};

use shopfront_core::{
    CheckoutZoneConfig, CountryId, FlashMessages, Product, ProductId, ShipmentTracking, StateId,
    ZoneKind, ZoneMember,
};
use shopfront_integration_tests::{add_state_per_country, add_zone, catalog_with_countries};
use shopfront_storefront::helpers::{
    available_countries, flash_messages, link_to_tracking, meta_description, pretty_time,
};
use shopfront_storefront::{HelperError, StorefrontConfig, ViewContext};

// =============================================================================
// Available Countries
// =============================================================================

#[test]
fn test_no_checkout_zone_returns_every_country() {
    for size in [0, 1, 4] {
        let catalog = catalog_with_countries(size);
        let countries = available_countries(&CheckoutZoneConfig::unset(), &catalog);
        assert_eq!(countries.len(), catalog.countries.len());
    }
}

#[test]
fn test_country_zone_returns_only_its_country() {
    let mut catalog = catalog_with_countries(4);
    add_zone(
        &mut catalog,
        "CountryZone",
        ZoneKind::Country,
        &[ZoneMember::Country(CountryId::new(2))],
    );

    let countries = available_countries(&CheckoutZoneConfig::named("CountryZone"), &catalog);
    let expected = catalog.country(CountryId::new(2)).expect("country 2 exists");
    assert_eq!(countries, vec![expected]);
}

#[test]
fn test_state_zone_covering_every_country_returns_full_list() {
    let mut catalog = catalog_with_countries(4);
    add_state_per_country(&mut catalog);
    let members: Vec<ZoneMember> = catalog.states.iter().map(|s| ZoneMember::State(s.id)).collect();
    add_zone(&mut catalog, "StateZone", ZoneKind::State, &members);

    let countries = available_countries(&CheckoutZoneConfig::named("StateZone"), &catalog);
    assert_eq!(countries.len(), 4);
}

#[test]
fn test_state_zone_with_one_state_returns_its_country() {
    let mut catalog = catalog_with_countries(4);
    add_state_per_country(&mut catalog);
    add_zone(
        &mut catalog,
        "StateZone",
        ZoneKind::State,
        &[ZoneMember::State(StateId::new(103))],
    );

    let countries = available_countries(&CheckoutZoneConfig::named("StateZone"), &catalog);
    assert_eq!(countries.len(), 1);
    assert_eq!(countries.first().map(|c| c.id), Some(CountryId::new(3)));
}

#[test]
fn test_unresolvable_zone_name_returns_every_country() {
    let catalog = catalog_with_countries(4);
    let countries = available_countries(&CheckoutZoneConfig::named("Gone"), &catalog);
    assert_eq!(countries.len(), 4);
}

// =============================================================================
// Custom Image Helpers
// =============================================================================

fn product() -> Product {
    Product::new(ProductId::new(1), "Ceramic Mug")
}

fn context_with_styles(styles: &[(&str, &str)]) -> ViewContext {
    ViewContext::new(StorefrontConfig {
        image_styles: styles
            .iter()
            .map(|(n, g)| ((*n).to_string(), (*g).to_string()))
            .collect(),
        ..StorefrontConfig::default()
    })
}

#[test]
fn test_registered_style_helper_succeeds() {
    let context = context_with_styles(&[("very_strange", "1x1")]);
    let html = context
        .image_helper("very_strange_image", &product(), &[])
        .expect("registered style renders");
    assert!(html.contains("noimage/very_strange.png"));
}

#[test]
fn test_unregistered_style_helper_fails() {
    let context = context_with_styles(&[("very_strange", "1x1")]);
    let err = context
        .image_helper("another_strange_image", &product(), &[])
        .expect_err("unregistered style must fail");
    assert!(err.is_not_found());
}

#[test]
fn test_style_name_without_suffix_is_not_a_helper() {
    let context = context_with_styles(&[("foobar", "1x1")]);
    assert!(context.image_helper("foobar_image", &product(), &[]).is_ok());
    assert!(matches!(
        context.image_helper("foobar", &product(), &[]),
        Err(HelperError::NoMethod(_))
    ));
}

// =============================================================================
// Flash Messages
// =============================================================================

fn flash() -> FlashMessages {
    [("notice", "ok"), ("foo", "foo"), ("bar", "bar")]
        .into_iter()
        .collect()
}

#[test]
fn test_flash_outputs_all_content() {
    let html = flash_messages(&flash(), &[]).expect("render");
    assert!(html.contains(r#"<div class="flash notice">ok</div>"#));
    assert!(html.contains(r#"<div class="flash foo">foo</div>"#));
    assert!(html.contains(r#"<div class="flash bar">bar</div>"#));
}

#[test]
fn test_flash_outputs_all_except_one_key() {
    let html = flash_messages(&flash(), &["bar"]).expect("render");
    assert!(html.contains(r#"<div class="flash notice">ok</div>"#));
    assert!(html.contains(r#"<div class="flash foo">foo</div>"#));
    assert!(!html.contains("bar"));
}

#[test]
fn test_flash_outputs_all_except_some_keys() {
    let html = flash_messages(&flash(), &["foo", "bar"]).expect("render");
    assert_eq!(html, r#"<div class="flash notice">ok</div>"#);
}

// =============================================================================
// Tracking Links
// =============================================================================

#[test]
fn test_tracking_link_when_available() {
    let shipment = ShipmentTracking::shipped("123").with_url("http://g.c/?t=123");
    let html = link_to_tracking(&shipment, &[]).expect("render");
    assert_eq!(html, r#"<a href="http://g.c/?t=123">123</a>"#);
}

#[test]
fn test_tracking_without_link_when_url_unavailable() {
    let html = link_to_tracking(&ShipmentTracking::shipped("123"), &[]).expect("render");
    assert_eq!(html, "<span>123</span>");
}

#[test]
fn test_tracking_nothing_without_shipping_method() {
    let shipment = ShipmentTracking {
        has_shipping_method: false,
        tracking: Some("123".to_string()),
        tracking_url: None,
    };
    assert_eq!(link_to_tracking(&shipment, &[]).expect("render"), "");
}

#[test]
fn test_tracking_nothing_without_tracking() {
    let shipment = ShipmentTracking {
        has_shipping_method: true,
        tracking: None,
        tracking_url: None,
    };
    assert_eq!(link_to_tracking(&shipment, &[]).expect("render"), "");
}

// =============================================================================
// Meta Data Tags
// =============================================================================

#[test]
fn test_meta_description_truncated_to_160_characters() {
    assert!(meta_description(&"a".repeat(200), 160).chars().count() <= 160);

    let mut product = product();
    product.description = Some("a".repeat(200));
    let context = ViewContext::new(StorefrontConfig::default());
    let tags = context.meta_data_tags(Some(&product)).expect("render");

    let content = tags
        .split(r#"<meta name="description" content=""#)
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .expect("description tag present");
    assert!(content.chars().count() <= 160);
}

// =============================================================================
// Pretty Time
// =============================================================================

#[test]
fn test_pretty_time_prints_in_a_format() {
    let time = NaiveDate::from_ymd_opt(2012, 5, 6)
        .and_then(|d| d.and_hms_opt(13, 33, 0))
        .expect("valid date");
    assert_eq!(
        pretty_time(&Utc.from_utc_datetime(&time)),
        "May 06, 2012  1:33 PM"
    );
}
