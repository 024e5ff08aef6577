//! Countries available at checkout.
//!
//! The configured checkout zone narrows the address dropdown:
//!
//! - no zone configured, or the name does not resolve: every country
//! - `country` zone: the member countries
//! - `state` zone: the parent country of every member state, de-duplicated

use std::collections::HashSet;

use shopfront_core::{CheckoutZoneConfig, Country, CountryId, GeoCatalog, Zone, ZoneKind, ZoneMember};

/// Returns the countries customers may check out to, sorted by name.
#[must_use]
pub fn available_countries<'a>(
    config: &CheckoutZoneConfig,
    catalog: &'a GeoCatalog,
) -> Vec<&'a Country> {
    let zone = config.zone_name().and_then(|name| {
        let zone = catalog.zone_named(name);
        if zone.is_none() {
            tracing::debug!(zone = %name, "Checkout zone not found, offering all countries");
        }
        zone
    });

    let mut countries = match zone {
        Some(zone) => countries_in_zone(zone, catalog),
        None => catalog.countries.iter().collect(),
    };
    sort_by_name(&mut countries);
    countries
}

/// Returns the catalog countries covered by `zone`, in catalog order.
///
/// Members whose kind does not match the zone's kind, and members missing
/// from the catalog, are skipped.
#[must_use]
pub fn countries_in_zone<'a>(zone: &Zone, catalog: &'a GeoCatalog) -> Vec<&'a Country> {
    let ids: HashSet<CountryId> = zone
        .members
        .iter()
        .filter_map(|member| match (zone.kind, member) {
            (ZoneKind::Country, ZoneMember::Country(id)) => Some(*id),
            (ZoneKind::State, ZoneMember::State(id)) => {
                catalog.state(*id).map(|state| state.country_id)
            }
            _ => {
                tracing::debug!(zone = %zone.name, ?member, "Skipping zone member of other kind");
                None
            }
        })
        .collect();

    catalog
        .countries
        .iter()
        .filter(|country| ids.contains(&country.id))
        .collect()
}

fn sort_by_name(countries: &mut [&Country]) {
    countries.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then(a.id.cmp(&b.id))
    });
}
