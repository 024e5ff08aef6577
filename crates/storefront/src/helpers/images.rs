//! Product image tags by named style.
//!
//! Image styles (`mini`, `small`, `product`, `large`, plus anything registered
//! at runtime) each get a helper named `<style>_image`. Helper names are
//! resolved through [`ImageStyleRegistry::call`]; a name that does not end in
//! `_image`, or whose style is not registered, is an error.

use std::collections::BTreeMap;

use askama::Template;
use shopfront_core::Product;

use super::html_attributes;
use crate::error::{HelperError, Result};

/// Suffix every image helper name carries.
pub const IMAGE_HELPER_SUFFIX: &str = "_image";

/// Styles available out of the box, as `(name, geometry)`.
pub const DEFAULT_STYLES: &[(&str, &str)] = &[
    ("mini", "48x48>"),
    ("small", "100x100>"),
    ("product", "240x240>"),
    ("large", "600x600>"),
];

#[derive(Template)]
#[template(
    source = r#"<img src="{{ src }}" alt="{{ alt }}"{% for (name, value) in attrs %} {{ name }}="{{ value }}"{% endfor %}>"#,
    ext = "html"
)]
struct ImageTagTemplate<'a> {
    src: &'a str,
    alt: &'a str,
    attrs: &'a [(&'a str, &'a str)],
}

/// Registered image styles, keyed by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageStyleRegistry {
    styles: BTreeMap<String, String>,
}

impl Default for ImageStyleRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        for (name, geometry) in DEFAULT_STYLES {
            registry.register(*name, *geometry);
        }
        registry
    }
}

impl ImageStyleRegistry {
    /// A registry with no styles at all.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            styles: BTreeMap::new(),
        }
    }

    /// Register (or replace) a style.
    pub fn register(&mut self, name: impl Into<String>, geometry: impl Into<String>) {
        self.styles.insert(name.into(), geometry.into());
    }

    #[must_use]
    pub fn contains(&self, style: &str) -> bool {
        self.styles.contains_key(style)
    }

    /// Returns the geometry string for `style`, e.g. `"240x240>"`.
    #[must_use]
    pub fn geometry(&self, style: &str) -> Option<&str> {
        self.styles.get(style).map(String::as_str)
    }

    /// Registered style names in alphabetical order.
    pub fn styles(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    /// Render the product's primary image at `style`.
    ///
    /// Products without images get the `noimage/<style>.png` placeholder. The
    /// `alt` text is the image's own alt text, else the product name; an
    /// `alt` entry in `html_options` overrides both. `src` cannot be overridden.
    ///
    /// # Errors
    ///
    /// Returns `HelperError::UnknownImageStyle` if `style` is not registered,
    /// or `HelperError::Render` if template rendering fails.
    pub fn image(
        &self,
        style: &str,
        product: &Product,
        html_options: &[(&str, &str)],
    ) -> Result<String> {
        if !self.contains(style) {
            tracing::debug!(style, "Image style not registered");
            return Err(HelperError::UnknownImageStyle(style.to_string()));
        }

        let (src, default_alt) = match product.primary_image() {
            Some(image) => (
                image.url(style),
                image
                    .alt
                    .as_deref()
                    .filter(|alt| !alt.trim().is_empty())
                    .unwrap_or(&product.name),
            ),
            None => (format!("noimage/{style}.png"), product.name.as_str()),
        };

        let alt = html_options
            .iter()
            .find(|(name, _)| *name == "alt")
            .map_or(default_alt, |(_, value)| *value);
        let attrs = html_attributes(html_options, &["src", "alt"]);

        Ok(ImageTagTemplate {
            src: &src,
            alt,
            attrs: &attrs,
        }
        .render()?)
    }

    /// Call an image helper by name, e.g. `"mini_image"`.
    ///
    /// # Errors
    ///
    /// Returns `HelperError::NoMethod` if `helper` is not of the form
    /// `<style>_image`, and `HelperError::UnknownImageStyle` if the style is
    /// not registered.
    pub fn call(
        &self,
        helper: &str,
        product: &Product,
        html_options: &[(&str, &str)],
    ) -> Result<String> {
        let style = helper
            .strip_suffix(IMAGE_HELPER_SUFFIX)
            .filter(|style| !style.is_empty())
            .ok_or_else(|| HelperError::NoMethod(helper.to_string()))?;
        self.image(style, product, html_options)
    }
}
