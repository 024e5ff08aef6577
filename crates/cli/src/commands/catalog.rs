//! Commands that read YAML catalog files.
//!
//! A catalog file looks like:
//!
//! ```yaml
//! countries:
//!   - { id: 1, iso: US, name: United States }
//!   - { id: 2, iso: CA, name: Canada }
//! states:
//!   - { id: 10, country_id: 1, abbr: NY, name: New York }
//! zones:
//!   - name: Domestic
//!     id: 1
//!     kind: state
//!     members:
//!       - state: 10
//! ```

use std::path::Path;

use serde::de::DeserializeOwned;
use shopfront_core::{CheckoutZoneConfig, GeoCatalog};
use shopfront_storefront::ViewContext;
use shopfront_storefront::helpers::available_countries;
use tracing::info;

use super::{InputError, emit};

/// Load a YAML file into `T`.
///
/// # Errors
///
/// Returns `InputError` if the file cannot be read or parsed.
pub fn load_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    let content = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// List checkout countries, one `ISO<TAB>Name` line each.
///
/// `zone` overrides the configured checkout zone.
///
/// # Errors
///
/// Returns `InputError` if the catalog cannot be loaded.
pub fn countries(
    context: &ViewContext,
    catalog_path: &Path,
    zone: Option<String>,
) -> Result<(), InputError> {
    let catalog: GeoCatalog = load_yaml(catalog_path)?;
    info!(
        countries = catalog.countries.len(),
        states = catalog.states.len(),
        zones = catalog.zones.len(),
        "Loaded catalog"
    );

    let countries = match zone {
        Some(name) => available_countries(&CheckoutZoneConfig::named(name), &catalog),
        None => context.available_countries(&catalog),
    };
    for country in countries {
        emit(&format!("{}\t{}", country.iso, country.name));
    }
    Ok(())
}
