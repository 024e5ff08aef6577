//! Unified error handling for view helpers.
//!
//! Most helpers degrade instead of failing (an unknown checkout zone means "all
//! countries", a missing tracking number renders nothing). The variants below
//! are the cases a caller has to handle.

use thiserror::Error;

/// Error type for storefront helpers.
#[derive(Debug, Error)]
pub enum HelperError {
    /// An image helper was asked for a style that is not registered.
    #[error("Unknown image style: {0}")]
    UnknownImageStyle(String),

    /// A helper name that resolves to nothing, e.g. a bare style name.
    #[error("Undefined helper method: {0}")]
    NoMethod(String),

    /// A timestamp string could not be parsed.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Template rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

impl HelperError {
    /// Returns true for lookup failures (unknown style or helper name).
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::UnknownImageStyle(_) | Self::NoMethod(_))
    }
}

/// Result type alias for `HelperError`.
pub type Result<T> = std::result::Result<T, HelperError>;
