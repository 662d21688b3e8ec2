// Caller-side parsing and validation of raw text input

pub mod detector;
pub mod parser;

pub use detector::looks_like_quantity;
pub use parser::{
    invalid_message, parse_datetime_local, parse_magnitude, parse_number, parse_quantity,
    validate_magnitude, MISSING_DATETIME_MESSAGE,
};
