//! Integration tests for weatherkit
//!
//! Exercises the public helpers the way a weather client calls them.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use clap::Parser;
use weatherkit::{
    cli::Args,
    config::{Config, DisplayConfig},
    format_temperature,
    formatting::{IconResolution, ReadingFormatter, TemperatureUnit},
    is_valid_city_name, log_debug, log_error, logging,
    types::{WeatherData, WeatherError},
    validation::{normalize_city_name, validate_city_name, ValidationError},
    TAG,
};

#[test]
fn test_validator_rejects_missing_and_blank() {
    let blank_inputs = vec!["", " ", "   ", "\t", "\n\r", " \t \n "];
    assert!(!is_valid_city_name(None));
    for input in blank_inputs {
        assert!(!is_valid_city_name(input), "Should reject blank input {:?}", input);
        assert!(!is_valid_city_name(Some(input)));
    }
}

#[test]
fn test_validator_rejects_single_character() {
    for input in ["A", " z ", "-", "'"] {
        assert!(!is_valid_city_name(input), "Should reject short input {:?}", input);
    }
}

#[test]
fn test_validator_accepts_letters_spaces_hyphens_apostrophes() {
    let valid_inputs = vec![
        "New York",
        "  Chicago  ",
        "Wilkes-Barre",
        "O'Fallon",
        "ab",
        "--",
        "Martha's Vineyard",
    ];

    for input in valid_inputs {
        assert!(is_valid_city_name(input), "Should accept {:?}", input);
    }
}

#[test]
fn test_validator_rejects_other_characters() {
    let invalid_inputs = vec!["St. Louis", "Phoenix, AZ", "Route 66", "São Paulo", "NYC!"];

    for input in invalid_inputs {
        assert!(!is_valid_city_name(input), "Should reject {:?}", input);
        assert!(matches!(
            validate_city_name(input),
            Err(ValidationError::InvalidCharacter { .. })
        ));
    }
}

#[test]
fn test_normalize_for_search() {
    assert_eq!(
        normalize_city_name(" Salt  Lake   City "),
        Some("Salt Lake City".to_string())
    );
}

#[test]
fn test_temperature_formatting_examples() {
    assert_eq!(format_temperature(72.4), "72°F");
    assert_eq!(format_temperature(72.6), "73°F");
    assert_eq!(format_temperature(-0.4), "0°F");
    assert_eq!(format_temperature(-10.5), "-10°F");
    assert_eq!(format_temperature(0.0), "0°F");
}

#[test]
fn test_formatter_from_config_file() {
    let config: Config = toml::from_str(
        r#"
        [display]
        temperature_unit = "celsius"
        icon_resolution = "4x"

        [logging]
        level = "debug"
        "#,
    )
    .unwrap();
    assert!(config.validate().is_ok());

    let formatter = ReadingFormatter::new(config.display);
    assert_eq!(formatter.temperature(212.0), "100°C");
    assert_eq!(
        formatter.icon("13n"),
        "https://openweathermap.org/img/wn/13n@4x.png"
    );
}

#[test]
fn test_weather_data_round_trip_display() {
    let data: WeatherData = serde_json::from_str(
        r#"{
            "cityName": "Seattle",
            "temperature": 55.5,
            "description": "light rain",
            "humidity": 88,
            "windSpeed": 11.2,
            "iconCode": "10d",
            "lastUpdated": 1767627000000,
            "latitude": 47.6062,
            "longitude": -122.3321
        }"#,
    )
    .unwrap();

    assert_eq!(data.display_temperature(TemperatureUnit::Fahrenheit), "56°F");
    assert_eq!(data.display_humidity(), "88%");
    assert_eq!(data.display_wind_speed(), "11 mph");

    let formatter = ReadingFormatter::new(DisplayConfig {
        icon_resolution: IconResolution::Standard,
        ..DisplayConfig::default()
    });
    assert!(formatter.icon(&data.icon_code).ends_with("/10d.png"));
}

#[derive(Clone, Default)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Buffer {
    type Writer = Buffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture_logs(f: impl FnOnce()) -> String {
    let buffer = Buffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_logging_forwards_under_tag() {
    let err = WeatherError::CityNotFound("Gotham".to_string());
    let output = capture_logs(|| {
        log_debug("searching Gotham");
        log_error("search failed", Some(&err));
    });

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2, "Expected two records, got: {}", output);
    assert!(lines[0].contains("DEBUG") && lines[0].contains(TAG));
    assert!(lines[1].contains("ERROR") && lines[1].contains("City not found: Gotham"));
}

#[test]
fn test_logging_never_panics_on_missing_values() {
    let output = capture_logs(|| {
        log_debug(None);
        log_error(None, None);
        log_error(Some(""), None);
    });
    assert_eq!(output.lines().count(), 3);
}

fn capture_filtered(args: &[&str], f: impl FnOnce()) -> String {
    let args = Args::try_parse_from(args).unwrap();
    let logging_config = args.effective_logging(&Config::default().logging);

    let buffer = Buffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_env_filter(logging::env_filter(&logging_config))
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_log_command_shows_debug_at_default_level() {
    let output = capture_filtered(&["weatherkit", "log", "hello"], || log_debug("hello"));
    assert!(output.contains("DEBUG"), "Expected a debug record, got: {:?}", output);
    assert!(output.contains("hello"));
}

#[test]
fn test_other_commands_keep_configured_level() {
    let output = capture_filtered(&["weatherkit", "config"], || log_debug("hidden"));
    assert!(output.is_empty(), "Debug should be filtered at info, got: {:?}", output);
}

#[test]
fn test_quiet_log_command_only_shows_errors() {
    let output = capture_filtered(&["weatherkit", "-q", "log", "hello"], || {
        log_debug("hidden");
        log_error("shown", None);
    });
    assert!(!output.contains("hidden"));
    assert!(output.contains("shown"));
}
