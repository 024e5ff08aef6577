//! Products and their images, as far as page metadata and image tags need them.

use serde::{Deserialize, Serialize};

use super::id::{ImageId, ProductId};

/// Placeholder segment replaced by the style name in image URLs.
pub const STYLE_PLACEHOLDER: &str = ":style";

/// A product image stored once per style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: ImageId,
    /// URL with a `:style` segment, e.g. `/products/1/:style/shirt.png`.
    pub url_template: String,
    #[serde(default)]
    pub alt: Option<String>,
}

impl Image {
    /// Returns the URL of this image rendered at `style`.
    #[must_use]
    pub fn url(&self, style: &str) -> String {
        self.url_template.replace(STYLE_PLACEHOLDER, style)
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub meta_keywords: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
}

impl Product {
    /// Create a product with only a name.
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            meta_description: None,
            meta_keywords: None,
            images: Vec::new(),
        }
    }

    /// The image shown in listings, if any.
    #[must_use]
    pub fn primary_image(&self) -> Option<&Image> {
        self.images.first()
    }
}
