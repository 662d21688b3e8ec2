use crate::convert::{Dimension, Quantity, Unit};
use crate::error::ConvertError;
use crate::input::detector::{DATETIME_LOCAL_PATTERN, QUANTITY_PATTERN};
use crate::timezone::LocalDateTime;

pub const MISSING_DATETIME_MESSAGE: &str = "Please choose a date and time.";

/// Message shown when a magnitude is rejected for `dimension`
pub fn invalid_message(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Distance | Dimension::Temperature => "Enter valid number",
        Dimension::Weight => "Enter valid weight",
        Dimension::Length => "Enter valid length",
        Dimension::Speed => "Enter valid speed",
    }
}

/// Finite, and not negative unless the dimension is temperature
pub fn validate_magnitude(dimension: Dimension, value: f64) -> Result<f64, ConvertError> {
    if !value.is_finite() || (value < 0.0 && !dimension.allows_negative()) {
        return Err(ConvertError::invalid(invalid_message(dimension)));
    }
    Ok(value)
}

/// Parse and validate a bare number typed into a `dimension` field
pub fn parse_magnitude(dimension: Dimension, input: &str) -> Result<f64, ConvertError> {
    let value = input
        .trim()
        .parse::<f64>()
        .map_err(|_| ConvertError::invalid(invalid_message(dimension)))?;
    validate_magnitude(dimension, value)
}

/// Parse a bare number. Range checks are left to the caller.
pub fn parse_number(input: &str) -> Result<f64, ConvertError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| ConvertError::invalid(format!("Not a number: '{}'", input.trim())))
}

/// Parse "<number> <unit>" such as "12.5 km" or "-40 °C"
pub fn parse_quantity(input: &str) -> Result<Quantity, ConvertError> {
    let trimmed = input.trim();
    let caps = QUANTITY_PATTERN.captures(trimmed).ok_or_else(|| {
        ConvertError::invalid(format!(
            "Expected a number followed by a unit, got '{}'",
            trimmed
        ))
    })?;

    let unit: Unit = caps["unit"].parse().map_err(ConvertError::InvalidInput)?;
    let value = caps["value"]
        .parse::<f64>()
        .map_err(|_| ConvertError::invalid(invalid_message(unit.dimension())))?;
    let value = validate_magnitude(unit.dimension(), value)?;

    Ok(Quantity::new(value, unit))
}

/// Parse an HTML `datetime-local` value. Calendar ranges are not checked here;
/// an impossible date fails later, during the zone conversion.
pub fn parse_datetime_local(input: &str) -> Result<LocalDateTime, ConvertError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ConvertError::invalid(MISSING_DATETIME_MESSAGE));
    }

    let caps = DATETIME_LOCAL_PATTERN.captures(trimmed).ok_or_else(|| {
        ConvertError::invalid(format!(
            "Invalid date and time '{}', expected YYYY-MM-DDTHH:MM",
            trimmed
        ))
    })?;

    // all groups are fixed-width digit runs, so these parses cannot overflow
    let field = |name: &str| -> Result<u32, ConvertError> {
        caps[name]
            .parse::<u32>()
            .map_err(|e| ConvertError::invalid(format!("Invalid {}: {}", name, e)))
    };

    Ok(LocalDateTime {
        year: field("year")? as i32,
        month: field("month")?,
        day: field("day")?,
        hour: field("hour")?,
        minute: field("minute")?,
    })
}
