//! Type definitions module
//!
//! Weather readings and the error categories a client reports.

pub mod weather;

pub use weather::{WeatherData, WeatherError};
