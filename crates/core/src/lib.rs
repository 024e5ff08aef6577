//! Shopfront Core - Shared domain types.
//!
//! This crate provides the plain values consumed by the Shopfront view helpers:
//! - `storefront` - Presentation helpers (countries, flash, tracking, meta tags)
//! - `cli` - Command-line front end that renders helpers from a catalog file
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no rendering, no configuration
//! loading. Catalogs are snapshots handed in by whatever layer owns persistence.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, geography, flash messages, shipments and products

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
