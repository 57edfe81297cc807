//! Validation type definitions

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reason a city name or coordinate pair was rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Missing, or nothing left after trimming
    #[error("city name is empty")]
    Empty,

    /// Fewer characters than required after trimming
    #[error("city name too short: {length} characters, need at least {min}")]
    TooShort { length: usize, min: usize },

    /// Character outside letters, whitespace, hyphen and apostrophe
    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    /// Latitude outside [-90, 90] or not finite
    #[error("latitude {0} out of range")]
    LatitudeOutOfRange(f64),

    /// Longitude outside [-180, 180] or not finite
    #[error("longitude {0} out of range")]
    LongitudeOutOfRange(f64),

    /// (0.0, 0.0), reported by geocoders when no location was resolved
    #[error("coordinates (0, 0) do not identify a location")]
    NullIsland,
}

/// A validated latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
