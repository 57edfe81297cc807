//! Temperature formatting
//!
//! Readings arrive in degrees Fahrenheit. They are rounded half-up to a whole
//! number and suffixed with the unit symbol, so `72.4` becomes `"72°F"`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display unit for temperatures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Fahrenheit,
    Celsius,
    Kelvin,
}

impl TemperatureUnit {
    /// Symbol appended to the rounded value
    pub fn suffix(&self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Kelvin => "K",
        }
    }

    /// Convert a Fahrenheit reading into this unit
    pub fn from_fahrenheit(&self, fahrenheit: f64) -> f64 {
        match self {
            TemperatureUnit::Fahrenheit => fahrenheit,
            TemperatureUnit::Celsius => (fahrenheit - 32.0) * 5.0 / 9.0,
            TemperatureUnit::Kelvin => (fahrenheit - 32.0) * 5.0 / 9.0 + 273.15,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Kelvin => "kelvin",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemperatureUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fahrenheit" | "f" => Ok(TemperatureUnit::Fahrenheit),
            "celsius" | "c" => Ok(TemperatureUnit::Celsius),
            "kelvin" | "k" => Ok(TemperatureUnit::Kelvin),
            other => Err(format!("Unknown temperature unit: {}", other)),
        }
    }
}

/// Round to the nearest integer, ties toward positive infinity
///
/// `-0.5` rounds to `0` and `-1.5` to `-1`, unlike `f64::round`. NaN maps to
/// zero and infinities saturate.
pub fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}

/// Formats a Fahrenheit temperature for display, e.g. `72.6` -> `"73°F"`
pub fn format_temperature(temperature: f64) -> String {
    format_temperature_in(temperature, TemperatureUnit::Fahrenheit)
}

/// Converts a Fahrenheit temperature to `unit`, rounds it and appends the
/// unit suffix
pub fn format_temperature_in(fahrenheit: f64, unit: TemperatureUnit) -> String {
    format!("{}{}", round_half_up(unit.from_fahrenheit(fahrenheit)), unit.suffix())
}

/// Compact form used in tiles and the hourly strip: truncated, degree sign
/// only, e.g. `72.9` -> `"72°"`
pub fn format_short_temperature(temperature: f64) -> String {
    format!("{}°", temperature as i64)
}
