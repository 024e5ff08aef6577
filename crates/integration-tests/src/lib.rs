//! Integration tests for Shopfront view helpers.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopfront-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `base_helpers` - Regression scenarios for every storefront helper
//!
//! This library holds the shared fixtures.

use shopfront_core::{Country, CountryId, GeoCatalog, State, StateId, Zone, ZoneId, ZoneKind, ZoneMember};

/// A catalog with `count` countries named `Country 1`..`Country N`.
#[must_use]
pub fn catalog_with_countries(count: i32) -> GeoCatalog {
    GeoCatalog {
        countries: (1..=count)
            .map(|i| Country::new(CountryId::new(i), format!("C{i}"), format!("Country {i}")))
            .collect(),
        states: Vec::new(),
        zones: Vec::new(),
    }
}

/// Add one state per country, with state IDs `100 + country id`.
pub fn add_state_per_country(catalog: &mut GeoCatalog) {
    let states: Vec<State> = catalog
        .countries
        .iter()
        .map(|c| {
            State::new(
                StateId::new(100 + c.id.as_i32()),
                c.id,
                format!("S{}", c.id),
                format!("State of {}", c.name),
            )
        })
        .collect();
    catalog.states.extend(states);
}

/// Add a zone called `name` holding `members`.
pub fn add_zone(catalog: &mut GeoCatalog, name: &str, kind: ZoneKind, members: &[ZoneMember]) {
    let id = i32::try_from(catalog.zones.len()).map_or(0, |n| n + 1);
    let mut zone = Zone::new(ZoneId::new(id), name, kind);
    zone.members.extend_from_slice(members);
    catalog.zones.push(zone);
}
