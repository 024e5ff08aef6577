//! View helpers.
//!
//! Each submodule is a set of free functions. [`ViewContext`] binds the ones
//! that depend on configuration (checkout zone, store metadata, image styles).

pub mod countries;
pub mod flash;
pub mod images;
pub mod meta;
pub mod time;
pub mod tracking;

use std::sync::Arc;

use shopfront_core::{Country, GeoCatalog, Product};

use crate::config::StorefrontConfig;
use crate::error::Result;
use images::ImageStyleRegistry;

pub use countries::{available_countries, countries_in_zone};
pub use flash::flash_messages;
pub use meta::{meta_data_tags, meta_description, page_title};
pub use time::{parse_timestamp, pretty_naive_time, pretty_time};
pub use tracking::link_to_tracking;

/// Extra tag attributes from `html_options`, minus the ones a helper owns.
///
/// Names must be plain attribute tokens; anything else is dropped, since
/// escaping alone leaves spaces and `=` in a name intact.
pub(crate) fn html_attributes<'a>(
    options: &[(&'a str, &'a str)],
    reserved: &[&str],
) -> Vec<(&'a str, &'a str)> {
    options
        .iter()
        .filter(|(name, _)| {
            let plain = !name.is_empty()
                && name
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b':' | b'.'));
            let owned = reserved.iter().any(|r| r.eq_ignore_ascii_case(name));
            if !plain || owned {
                tracing::debug!(attribute = *name, "Dropping HTML option");
            }
            plain && !owned
        })
        .copied()
        .collect()
}

/// Configuration-bound helpers, cheap to clone into every request.
#[derive(Debug, Clone)]
pub struct ViewContext {
    config: Arc<StorefrontConfig>,
    image_styles: Arc<ImageStyleRegistry>,
}

impl ViewContext {
    /// Build the helper context from loaded configuration.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let image_styles = config.image_style_registry();
        Self {
            config: Arc::new(config),
            image_styles: Arc::new(image_styles),
        }
    }

    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    #[must_use]
    pub fn image_styles(&self) -> &ImageStyleRegistry {
        &self.image_styles
    }

    /// Countries offered in the checkout address form.
    #[must_use]
    pub fn available_countries<'a>(&self, catalog: &'a GeoCatalog) -> Vec<&'a Country> {
        available_countries(&self.config.checkout_zone, catalog)
    }

    /// Meta description capped at the configured limit.
    #[must_use]
    pub fn meta_description(&self, text: &str) -> String {
        meta_description(text, self.config.meta_description_limit)
    }

    /// `<meta>` tags for a page, optionally about a product.
    ///
    /// # Errors
    ///
    /// Returns `HelperError::Render` if template rendering fails.
    pub fn meta_data_tags(&self, product: Option<&Product>) -> Result<String> {
        meta_data_tags(
            product,
            &self.config.store,
            self.config.meta_description_limit,
        )
    }

    /// Browser title for a page.
    #[must_use]
    pub fn title(&self, page_title: Option<&str>) -> String {
        meta::page_title(page_title, &self.config.store)
    }

    /// Call an image helper by name, e.g. `"product_image"`.
    ///
    /// # Errors
    ///
    /// Returns `HelperError::NoMethod` or `HelperError::UnknownImageStyle`
    /// when the name does not resolve to a registered style.
    pub fn image_helper(
        &self,
        helper: &str,
        product: &Product,
        html_options: &[(&str, &str)],
    ) -> Result<String> {
        self.image_styles.call(helper, product, html_options)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shopfront_core::{CheckoutZoneConfig, CountryId, ProductId, Zone, ZoneId, ZoneKind, ZoneMember};

    use super::*;

    #[test]
    fn test_context_uses_configured_zone() {
        let config = StorefrontConfig {
            checkout_zone: CheckoutZoneConfig::named("Domestic"),
            ..StorefrontConfig::default()
        };
        let context = ViewContext::new(config);

        let catalog = GeoCatalog {
            countries: vec![
                Country::new(CountryId::new(1), "US", "United States"),
                Country::new(CountryId::new(2), "CA", "Canada"),
            ],
            states: Vec::new(),
            zones: vec![
                Zone::new(ZoneId::new(1), "Domestic", ZoneKind::Country)
                    .with_member(ZoneMember::Country(CountryId::new(1))),
            ],
        };

        let countries = context.available_countries(&catalog);
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].iso, "US");
    }

    #[test]
    fn test_context_uses_configured_limit_and_styles() {
        let config = StorefrontConfig {
            meta_description_limit: 10,
            image_styles: vec![("foobar".to_string(), "1x1".to_string())],
            ..StorefrontConfig::default()
        };
        let context = ViewContext::new(config);

        assert!(context.meta_description(&"b".repeat(50)).chars().count() <= 10);

        let product = Product::new(ProductId::new(1), "Mug");
        assert!(context.image_helper("foobar_image", &product, &[]).is_ok());
        assert!(context.image_helper("foobar", &product, &[]).is_err());
        assert_eq!(context.title(None), "Shopfront");
    }

    #[test]
    fn test_html_attributes_drop_reserved_and_malformed_names() {
        let options = [
            ("class", "thumb"),
            ("HREF", "javascript:alert(1)"),
            ("x onclick", "y"),
            ("data-id=1", "z"),
            ("", "empty"),
            ("data-sku", "MUG-1"),
        ];
        assert_eq!(
            html_attributes(&options, &["href"]),
            vec![("class", "thumb"), ("data-sku", "MUG-1")]
        );
    }
}
