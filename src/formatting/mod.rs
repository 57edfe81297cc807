//! Presentation helpers
//!
//! Pure functions that turn raw readings into display strings, plus a
//! [`ReadingFormatter`] that applies the user's display preferences.

pub mod readings;
pub mod temperature;
pub mod time;

pub use readings::{format_humidity, format_wind_speed, icon_url, IconResolution};
pub use temperature::{
    format_short_temperature, format_temperature, format_temperature_in, round_half_up,
    TemperatureUnit,
};
pub use time::{format_day_heading, format_day_tile, format_hour_label};

use crate::config::DisplayConfig;
use chrono::TimeZone;
use std::fmt::Display;

/// Formats readings according to a [`DisplayConfig`]
#[derive(Debug, Clone, Default)]
pub struct ReadingFormatter {
    display: DisplayConfig,
}

impl ReadingFormatter {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }

    /// Temperature in the configured unit
    pub fn temperature(&self, fahrenheit: f64) -> String {
        format_temperature_in(fahrenheit, self.display.temperature_unit)
    }

    /// Icon URL at the configured resolution
    pub fn icon(&self, icon_code: &str) -> String {
        icon_url(icon_code, self.display.icon_resolution)
    }

    /// Hourly label using the configured clock style
    pub fn hour_label<Tz>(&self, millis: i64, tz: &Tz) -> Option<String>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        format_hour_label(millis, tz, self.display.use_24_hour_clock)
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }
}
