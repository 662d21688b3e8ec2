use crate::convert::types::Unit;

const KELVIN_OFFSET: f64 = 273.15;

/// C, F and K in every direction. Any other pair returns `value` unchanged.
pub fn temperature(value: f64, from: Unit, to: Unit) -> f64 {
    match (from, to) {
        (Unit::Celsius, Unit::Fahrenheit) => (value * 9.0) / 5.0 + 32.0,
        (Unit::Fahrenheit, Unit::Celsius) => ((value - 32.0) * 5.0) / 9.0,
        (Unit::Celsius, Unit::Kelvin) => value + KELVIN_OFFSET,
        (Unit::Kelvin, Unit::Celsius) => value - KELVIN_OFFSET,
        (Unit::Fahrenheit, Unit::Kelvin) => ((value - 32.0) * 5.0) / 9.0 + KELVIN_OFFSET,
        (Unit::Kelvin, Unit::Fahrenheit) => ((value - KELVIN_OFFSET) * 9.0) / 5.0 + 32.0,
        _ => value,
    }
}
