//! Core types for Shopfront.
//!
//! This module provides type-safe wrappers for the storefront's domain concepts.

pub mod flash;
pub mod geo;
pub mod id;
pub mod product;
pub mod shipment;

pub use flash::FlashMessages;
pub use geo::{CheckoutZoneConfig, Country, GeoCatalog, State, Zone, ZoneKind, ZoneMember};
pub use id::*;
pub use product::{Image, Product};
pub use shipment::ShipmentTracking;
