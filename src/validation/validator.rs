//! City name and coordinate validation
//!
//! A plausible place name is at least two characters long after trimming and
//! consists only of ASCII letters, whitespace, hyphens and apostrophes.
//! Invalid or missing input is never an error for the boolean check; it is
//! simply `false`.

use crate::validation::types::{Coordinates, ValidationError};

/// Minimum number of characters in a trimmed city name
pub const MIN_CITY_NAME_LENGTH: usize = 2;

/// Leading/trailing characters removed before validation: whitespace and
/// control characters (everything up to and including U+0020).
fn is_trimmable(c: char) -> bool {
    c <= ' '
}

/// Whitespace allowed inside a name: space, \t, \n, \x0B, \x0C, \r
fn is_name_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || is_name_whitespace(c) || c == '-' || c == '\''
}

/// Validates a city name, returning the trimmed name on success
///
/// # Arguments
/// - `name` - The raw user input; `None` stands for a missing value
///
/// # Returns
/// The trimmed name, or the first rule it breaks
pub fn validate_city_name<'a>(
    name: impl Into<Option<&'a str>>,
) -> Result<&'a str, ValidationError> {
    let trimmed = name
        .into()
        .map(|n| n.trim_matches(is_trimmable))
        .unwrap_or_default();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    let length = trimmed.chars().count();
    if length < MIN_CITY_NAME_LENGTH {
        return Err(ValidationError::TooShort {
            length,
            min: MIN_CITY_NAME_LENGTH,
        });
    }

    if let Some((position, ch)) = trimmed.chars().enumerate().find(|(_, c)| !is_name_char(*c)) {
        return Err(ValidationError::InvalidCharacter { ch, position });
    }

    Ok(trimmed)
}

/// Returns whether `name` is a plausible city name
///
/// Accepts either a `&str` or an `Option<&str>`:
///
/// ```
/// use weatherkit::validation::is_valid_city_name;
///
/// assert!(is_valid_city_name("New York"));
/// assert!(!is_valid_city_name("St. Louis"));
/// assert!(!is_valid_city_name(None));
/// ```
pub fn is_valid_city_name<'a>(name: impl Into<Option<&'a str>>) -> bool {
    validate_city_name(name).is_ok()
}

/// Trims a valid city name and collapses internal whitespace runs to a
/// single space. Returns `None` for invalid names.
pub fn normalize_city_name<'a>(name: impl Into<Option<&'a str>>) -> Option<String> {
    let trimmed = validate_city_name(name).ok()?;
    Some(
        trimmed
            .split(is_name_whitespace)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// Validates a latitude/longitude pair
///
/// Both values must be finite and within range. The exact pair (0, 0) is
/// rejected since geocoders use it for "no result".
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<Coordinates, ValidationError> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(ValidationError::LatitudeOutOfRange(latitude));
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(ValidationError::LongitudeOutOfRange(longitude));
    }
    if latitude == 0.0 && longitude == 0.0 {
        return Err(ValidationError::NullIsland);
    }

    Ok(Coordinates {
        latitude,
        longitude,
    })
}
