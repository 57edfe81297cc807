//! User input validation
//! City names typed into search and coordinates reported by a location fix

pub mod types;
pub mod validator;

pub use types::{Coordinates, ValidationError};
pub use validator::{
    is_valid_city_name, normalize_city_name, validate_city_name, validate_coordinates,
    MIN_CITY_NAME_LENGTH,
};
