//! Weather reading and client error types

use crate::formatting::{self, TemperatureUnit};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single weather reading, as shown on the current conditions card or in
/// one forecast slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherData {
    pub city_name: String,
    /// Degrees Fahrenheit
    pub temperature: f64,
    pub description: String,
    /// Relative humidity, percent
    pub humidity: i32,
    /// Miles per hour
    pub wind_speed: f64,
    pub icon_code: String,
    /// Epoch milliseconds
    pub last_updated: i64,
    pub latitude: f64,
    pub longitude: f64,
}

impl WeatherData {
    /// Temperature rounded and suffixed in `unit`
    pub fn display_temperature(&self, unit: TemperatureUnit) -> String {
        formatting::format_temperature_in(self.temperature, unit)
    }

    pub fn display_humidity(&self) -> String {
        formatting::format_humidity(self.humidity)
    }

    pub fn display_wind_speed(&self) -> String {
        formatting::format_wind_speed(self.wind_speed)
    }
}

/// Failure categories surfaced by a weather client
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error("API key error: {0}")]
    ApiKey(String),

    #[error("Location error: {0}")]
    Location(String),

    #[error("{0}")]
    Unknown(String),
}

impl WeatherError {
    /// The message without the category prefix
    pub fn message(&self) -> &str {
        match self {
            WeatherError::Network(msg)
            | WeatherError::CityNotFound(msg)
            | WeatherError::ApiKey(msg)
            | WeatherError::Location(msg)
            | WeatherError::Unknown(msg) => msg,
        }
    }
}
