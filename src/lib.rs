//! weatherkit - helpers for weather clients
//!
//! - **validation**: city name and coordinate checks
//! - **formatting**: temperature, humidity, wind, icon and time labels
//! - **logging**: tagged debug/error forwarding through `tracing`

pub mod errors;
pub mod types;
pub mod validation;
pub mod formatting;
pub mod logging;

// Re-export commonly used types
pub use errors::{Result, WeatherKitError};

// Configuration and command line
pub mod config;
pub mod cli;

pub use formatting::{format_temperature, TemperatureUnit};
pub use logging::{log_debug, log_error, TAG};
pub use validation::is_valid_city_name;
