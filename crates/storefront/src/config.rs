//! Storefront helper configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `SHOPFRONT_CHECKOUT_ZONE` - Name of the zone customers may check out to
//!   (unset or blank: every country is available)
//! - `SHOPFRONT_STORE_NAME` - Store name (default: Shopfront)
//! - `SHOPFRONT_META_DESCRIPTION` - Fallback `<meta name="description">` content
//! - `SHOPFRONT_META_KEYWORDS` - Fallback `<meta name="keywords">` content
//! - `SHOPFRONT_META_DESCRIPTION_LIMIT` - Max description length (default: 160)
//! - `SHOPFRONT_IMAGE_STYLES` - Extra image styles, e.g. `zoom:1200x1200>,thumb:1x1`

use shopfront_core::CheckoutZoneConfig;
use thiserror::Error;

use crate::helpers::images::ImageStyleRegistry;
use crate::helpers::meta::{DEFAULT_META_DESCRIPTION_LIMIT, StoreMeta};

const DEFAULT_STORE_NAME: &str = "Shopfront";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront helper configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Zone restricting checkout countries
    pub checkout_zone: CheckoutZoneConfig,
    /// Store-wide metadata used when a page has none of its own
    pub store: StoreMeta,
    /// Maximum length of generated meta descriptions
    pub meta_description_limit: usize,
    /// Image styles registered on top of the defaults, as `(name, geometry)`
    pub image_styles: Vec<(String, String)>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            checkout_zone: CheckoutZoneConfig::unset(),
            store: StoreMeta {
                name: DEFAULT_STORE_NAME.to_string(),
                meta_description: None,
                meta_keywords: None,
            },
            meta_description_limit: DEFAULT_META_DESCRIPTION_LIMIT,
            image_styles: Vec::new(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let checkout_zone = CheckoutZoneConfig::from(non_blank(lookup("SHOPFRONT_CHECKOUT_ZONE")));

        let store = StoreMeta {
            name: non_blank(lookup("SHOPFRONT_STORE_NAME"))
                .unwrap_or_else(|| DEFAULT_STORE_NAME.to_string()),
            meta_description: non_blank(lookup("SHOPFRONT_META_DESCRIPTION")),
            meta_keywords: non_blank(lookup("SHOPFRONT_META_KEYWORDS")),
        };

        let meta_description_limit = match lookup("SHOPFRONT_META_DESCRIPTION_LIMIT") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|e| {
                ConfigError::InvalidEnvVar(
                    "SHOPFRONT_META_DESCRIPTION_LIMIT".to_string(),
                    e.to_string(),
                )
            })?,
            None => DEFAULT_META_DESCRIPTION_LIMIT,
        };

        let image_styles = match lookup("SHOPFRONT_IMAGE_STYLES") {
            Some(raw) => parse_image_styles(&raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            checkout_zone,
            store,
            meta_description_limit,
            image_styles,
        })
    }

    /// Returns the default image styles merged with the configured ones.
    #[must_use]
    pub fn image_style_registry(&self) -> ImageStyleRegistry {
        let mut registry = ImageStyleRegistry::default();
        for (name, geometry) in &self.image_styles {
            registry.register(name.clone(), geometry.clone());
        }
        registry
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Treat blank values the same as unset ones.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse `name:geometry` pairs separated by commas.
fn parse_image_styles(raw: &str) -> Result<Vec<(String, String)>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (name, geometry) = entry
                .split_once(':')
                .map(|(n, g)| (n.trim(), g.trim()))
                .filter(|(n, g)| !n.is_empty() && !g.is_empty())
                .ok_or_else(|| {
                    ConfigError::InvalidEnvVar(
                        "SHOPFRONT_IMAGE_STYLES".to_string(),
                        format!("expected name:geometry, got '{entry}'"),
                    )
                })?;
            Ok((name.to_string(), geometry.to_string()))
        })
        .collect()
}
