//! Formatters for the secondary readings shown next to the temperature

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn/";

/// Resolution of the condition icon image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IconResolution {
    #[serde(rename = "1x")]
    Standard,
    #[default]
    #[serde(rename = "2x")]
    Double,
    #[serde(rename = "4x")]
    Quadruple,
}

impl IconResolution {
    /// Size tag inserted before the file extension
    fn tag(&self) -> &'static str {
        match self {
            IconResolution::Standard => "",
            IconResolution::Double => "@2x",
            IconResolution::Quadruple => "@4x",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IconResolution::Standard => "1x",
            IconResolution::Double => "2x",
            IconResolution::Quadruple => "4x",
        }
    }
}

impl fmt::Display for IconResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconResolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1x" => Ok(IconResolution::Standard),
            "2x" => Ok(IconResolution::Double),
            "4x" => Ok(IconResolution::Quadruple),
            other => Err(format!("Unknown icon resolution: {}", other)),
        }
    }
}

/// Builds the condition icon URL for an OpenWeatherMap icon code
///
/// `"01d"` at `2x` becomes `https://openweathermap.org/img/wn/01d@2x.png`.
pub fn icon_url(icon_code: &str, resolution: IconResolution) -> String {
    format!("{}{}{}.png", ICON_BASE_URL, icon_code.trim(), resolution.tag())
}

/// Relative humidity, e.g. `65` -> `"65%"`
pub fn format_humidity(percent: i32) -> String {
    format!("{}%", percent)
}

/// Wind speed truncated to whole miles per hour, e.g. `12.8` -> `"12 mph"`
pub fn format_wind_speed(mph: f64) -> String {
    format!("{} mph", mph as i64)
}
