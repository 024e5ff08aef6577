//! Shipment tracking data as exposed to storefront views.

use serde::{Deserialize, Serialize};

/// Carrier tracking information for a shipment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentTracking {
    /// Whether a shipping method has been selected for the shipment.
    #[serde(default)]
    pub has_shipping_method: bool,
    /// Carrier tracking number.
    #[serde(default)]
    pub tracking: Option<String>,
    /// Carrier-hosted tracking page.
    #[serde(default)]
    pub tracking_url: Option<String>,
}

impl ShipmentTracking {
    /// A shipment with a shipping method and the given tracking number.
    #[must_use]
    pub fn shipped(tracking: impl Into<String>) -> Self {
        Self {
            has_shipping_method: true,
            tracking: Some(tracking.into()),
            tracking_url: None,
        }
    }

    /// Attach a tracking URL (builder style).
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.tracking_url = Some(url.into());
        self
    }

    /// Returns the tracking number, treating blank values as absent.
    #[must_use]
    pub fn tracking_number(&self) -> Option<&str> {
        self.tracking.as_deref().filter(|t| !t.trim().is_empty())
    }
}
