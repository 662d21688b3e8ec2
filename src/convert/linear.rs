// Scale-factor conversions. Every rule multiplies one way and divides the other,
// so both directions share a single constant.

use crate::convert::types::Unit;

pub const MILES_PER_KILOMETER: f64 = 0.621371;
pub const FEET_PER_METER: f64 = 3.28084;
pub const POUNDS_PER_KILOGRAM: f64 = 2.20462;
pub const MPH_PER_KMH: f64 = 0.621371;

fn scale(value: f64, from: Unit, to: Unit, base: Unit, scaled: Unit, factor: f64) -> f64 {
    if from == base && to == scaled {
        value * factor
    } else if from == scaled && to == base {
        value / factor
    } else {
        value
    }
}

/// km <-> mi
pub fn distance(value: f64, from: Unit, to: Unit) -> f64 {
    scale(value, from, to, Unit::Kilometer, Unit::Mile, MILES_PER_KILOMETER)
}

/// m <-> ft
pub fn length(value: f64, from: Unit, to: Unit) -> f64 {
    scale(value, from, to, Unit::Meter, Unit::Foot, FEET_PER_METER)
}

/// kg <-> lb
pub fn weight(value: f64, from: Unit, to: Unit) -> f64 {
    scale(value, from, to, Unit::Kilogram, Unit::Pound, POUNDS_PER_KILOGRAM)
}

/// kmh <-> mph
pub fn speed(value: f64, from: Unit, to: Unit) -> f64 {
    scale(value, from, to, Unit::KilometerPerHour, Unit::MilePerHour, MPH_PER_KMH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-6 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_factors() {
        assert_eq!(distance(10.0, Unit::Kilometer, Unit::Mile), 10.0 * 0.621371);
        assert_eq!(distance(10.0, Unit::Mile, Unit::Kilometer), 10.0 / 0.621371);
        assert_eq!(length(2.0, Unit::Meter, Unit::Foot), 2.0 * 3.28084);
        assert_eq!(length(2.0, Unit::Foot, Unit::Meter), 2.0 / 3.28084);
        assert_eq!(weight(5.0, Unit::Kilogram, Unit::Pound), 5.0 * 2.20462);
        assert_eq!(weight(5.0, Unit::Pound, Unit::Kilogram), 5.0 / 2.20462);
        assert_eq!(speed(100.0, Unit::KilometerPerHour, Unit::MilePerHour), 100.0 * 0.621371);
        assert_eq!(speed(60.0, Unit::MilePerHour, Unit::KilometerPerHour), 60.0 / 0.621371);
    }

    #[test]
    fn test_same_unit_is_exact_identity() {
        for v in [0.0, 1.0, 0.1, 12345.678, f64::MAX] {
            assert_eq!(distance(v, Unit::Kilometer, Unit::Kilometer), v);
            assert_eq!(distance(v, Unit::Mile, Unit::Mile), v);
            assert_eq!(length(v, Unit::Meter, Unit::Meter), v);
            assert_eq!(length(v, Unit::Foot, Unit::Foot), v);
            assert_eq!(weight(v, Unit::Kilogram, Unit::Kilogram), v);
            assert_eq!(weight(v, Unit::Pound, Unit::Pound), v);
            assert_eq!(speed(v, Unit::KilometerPerHour, Unit::KilometerPerHour), v);
            assert_eq!(speed(v, Unit::MilePerHour, Unit::MilePerHour), v);
        }
    }

    #[test]
    fn test_round_trips() {
        let pairs: [(fn(f64, Unit, Unit) -> f64, Unit, Unit); 4] = [
            (distance, Unit::Kilometer, Unit::Mile),
            (length, Unit::Meter, Unit::Foot),
            (weight, Unit::Kilogram, Unit::Pound),
            (speed, Unit::KilometerPerHour, Unit::MilePerHour),
        ];
        for (convert, a, b) in pairs {
            for v in [0.0, 0.5, 1.0, 42.0, 1e6] {
                assert_close(convert(convert(v, a, b), b, a), v);
                assert_close(convert(convert(v, b, a), a, b), v);
            }
        }
    }

    #[test]
    fn test_unmatched_pair_returns_input() {
        assert_eq!(distance(7.5, Unit::Kilometer, Unit::Foot), 7.5);
        assert_eq!(length(7.5, Unit::Kilogram, Unit::Meter), 7.5);
        assert_eq!(weight(7.5, Unit::Celsius, Unit::Pound), 7.5);
        assert_eq!(speed(7.5, Unit::Mile, Unit::MilePerHour), 7.5);
    }

    #[test]
    fn test_converter_does_not_check_sign() {
        assert_eq!(distance(-1.0, Unit::Kilometer, Unit::Mile), -0.621371);
    }
}
