//! Error types for colony configuration.
//!
//! The daily update itself never fails; every error a caller can see is raised
//! while building a validated [`Settings`](crate::config::Settings).

use thiserror::Error;

/// A configuration parameter failed validation or could not be parsed.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{field} must be non-negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be in [{min}, {max}] (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("queen_laying_rate must be at least 1 day")]
    ZeroLayingRate,

    #[error("min_food_multiplier ({min}) must not exceed max_food_multiplier ({max})")]
    InvertedFoodMultipliers { min: f64, max: f64 },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    /// Name of the offending parameter, when the error concerns a single field.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Negative { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::NotFinite { field } => Some(field),
            Self::ZeroLayingRate => Some("queen_laying_rate"),
            Self::InvertedFoodMultipliers { .. } => Some("min_food_multiplier"),
            Self::Toml(_) | Self::Json(_) => None,
        }
    }
}
