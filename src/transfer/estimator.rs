use crate::error::ConvertError;
use crate::input;
use crate::transfer::types::{RateUnit, SizeUnit, TransferEstimate};

pub const INVALID_TRANSFER_MESSAGE: &str = "Please enter positive numbers for size and speed.";

/// Read a size or speed field. Anything that is not a number gets the same
/// message as a non-positive one.
pub fn parse_amount(text: &str) -> Result<f64, ConvertError> {
    input::parse_number(text).map_err(|_| ConvertError::invalid(INVALID_TRANSFER_MESSAGE))
}

/// Estimate how long moving `size` takes at `speed`
pub fn estimate(
    size: f64,
    size_unit: SizeUnit,
    speed: f64,
    speed_unit: RateUnit,
) -> Result<TransferEstimate, ConvertError> {
    if !size.is_finite() || size <= 0.0 || !speed.is_finite() || speed <= 0.0 {
        return Err(ConvertError::invalid(INVALID_TRANSFER_MESSAGE));
    }

    let size_mb = size_unit.to_megabytes(size);
    let speed_mbps = speed_unit.to_megabytes_per_second(speed);
    let seconds = size_mb / speed_mbps;
    // normalization can still overflow (huge sizes, subnormal speeds)
    if !seconds.is_finite() {
        return Err(ConvertError::invalid(INVALID_TRANSFER_MESSAGE));
    }
    let estimate = TransferEstimate::from_seconds(seconds);

    log::debug!(
        "{} {} at {} {} -> {}s",
        size,
        size_unit,
        speed,
        speed_unit,
        estimate.total_seconds
    );
    Ok(estimate)
}

/// Second line of the result panel, echoing the inputs
pub fn summary(size: f64, size_unit: SizeUnit, speed: f64, speed_unit: RateUnit) -> String {
    format!(
        "File: {} {} · Speed: {} {}",
        size, size_unit, speed, speed_unit
    )
}
