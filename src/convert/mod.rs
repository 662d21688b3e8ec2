// Unit conversions for distance, length, temperature, weight and speed.
// Every converter is total: a pair without a rule returns its input unchanged.

pub mod formatter;
pub mod linear;
pub mod temperature;
pub mod types;

pub use formatter::{format_conversion, format_quantities, Precision};
pub use linear::{distance, length, speed, weight};
pub use temperature::temperature;
pub use types::{Dimension, Quantity, Unit};

impl Dimension {
    /// Dispatch to this dimension's converter
    pub fn convert(&self, value: f64, from: Unit, to: Unit) -> f64 {
        let result = match self {
            Dimension::Distance => distance(value, from, to),
            Dimension::Length => length(value, from, to),
            Dimension::Temperature => temperature(value, from, to),
            Dimension::Weight => weight(value, from, to),
            Dimension::Speed => speed(value, from, to),
        };
        if from != to && (from.dimension() != *self || to.dimension() != *self) {
            log::debug!(
                "no {} rule for {} -> {}, keeping {}",
                self,
                from,
                to,
                value
            );
        }
        result
    }
}

/// Convert using raw unit tags. Tags outside the known set fall back to the
/// input value, the same as any other pair without a rule.
pub fn convert_tags(dimension: Dimension, value: f64, from: &str, to: &str) -> f64 {
    match (from.parse::<Unit>(), to.parse::<Unit>()) {
        (Ok(from), Ok(to)) => dimension.convert(value, from, to),
        _ => {
            log::debug!("unknown unit tag in {} -> {}, keeping {}", from, to, value);
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_matches_dimension_functions() {
        assert_eq!(
            Dimension::Distance.convert(3.0, Unit::Mile, Unit::Kilometer),
            distance(3.0, Unit::Mile, Unit::Kilometer)
        );
        assert_eq!(
            Dimension::Temperature.convert(0.0, Unit::Celsius, Unit::Fahrenheit),
            32.0
        );
        assert_eq!(
            Dimension::Weight.convert(1.0, Unit::Kilogram, Unit::Pound),
            2.20462
        );
    }

    #[test]
    fn test_identity_for_every_dimension() {
        for dimension in Dimension::ALL {
            for unit in dimension.units() {
                for v in [0.0, 1.0, 98.6, 1e9] {
                    assert_eq!(dimension.convert(v, *unit, *unit), v);
                }
            }
        }
    }

    #[test]
    fn test_rule_from_other_dimension_is_not_applied() {
        // km -> mi is a distance rule; asking the speed converter leaves it alone
        assert_eq!(Dimension::Speed.convert(10.0, Unit::Kilometer, Unit::Mile), 10.0);
        assert_eq!(Dimension::Length.convert(10.0, Unit::Meter, Unit::Kilometer), 10.0);
    }

    #[test]
    fn test_convert_tags() {
        assert_eq!(convert_tags(Dimension::Temperature, 100.0, "C", "F"), 212.0);
        assert_eq!(convert_tags(Dimension::Length, 1.0, "m", "ft"), 3.28084);
        assert_eq!(convert_tags(Dimension::Distance, 5.0, "km", "ft"), 5.0);
        assert_eq!(convert_tags(Dimension::Distance, 5.0, "km", "furlong"), 5.0);
        assert_eq!(convert_tags(Dimension::Weight, 5.0, "", "lb"), 5.0);
    }
}
