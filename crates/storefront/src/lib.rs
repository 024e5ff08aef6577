//! Shopfront Storefront view helpers.
//!
//! Presentation helpers shared by storefront pages: checkout country lists,
//! flash banners, shipment tracking links, meta tags, timestamps and product
//! image tags. Everything here is synchronous and side-effect free; the
//! caller supplies catalogs and configuration.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod helpers;

pub use config::{ConfigError, StorefrontConfig};
pub use error::{HelperError, Result};
pub use helpers::ViewContext;
