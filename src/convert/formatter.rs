use crate::convert::types::{Dimension, Quantity, Unit};
use serde::{Deserialize, Serialize};

/// Decimal places used when displaying a converted value
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Precision {
    #[serde(default = "four")]
    pub distance: usize,
    #[serde(default = "four")]
    pub length: usize,
    #[serde(default = "two")]
    pub temperature: usize,
    #[serde(default = "four")]
    pub weight: usize,
    #[serde(default = "three")]
    pub speed: usize,
}

fn two() -> usize {
    2
}

fn three() -> usize {
    3
}

fn four() -> usize {
    4
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            distance: four(),
            length: four(),
            temperature: two(),
            weight: four(),
            speed: three(),
        }
    }
}

impl Precision {
    pub fn for_dimension(&self, dimension: Dimension) -> usize {
        match dimension {
            Dimension::Distance => self.distance,
            Dimension::Length => self.length,
            Dimension::Temperature => self.temperature,
            Dimension::Weight => self.weight,
            Dimension::Speed => self.speed,
        }
    }
}

/// Render a conversion the way the result panel shows it:
/// `12 km = 7.4565 mi`, or `100°C = 212.00°F` for temperatures.
/// The input value keeps its shortest representation; only the result is rounded.
pub fn format_conversion(
    dimension: Dimension,
    input: f64,
    from: Unit,
    result: f64,
    to: Unit,
    precision: &Precision,
) -> String {
    let places = precision.for_dimension(dimension);
    match dimension {
        Dimension::Temperature => {
            format!("{}°{} = {:.*}°{}", input, from, places, result, to)
        }
        _ => format!("{} {} = {:.*} {}", input, from, places, result, to),
    }
}

/// Same as [`format_conversion`] for a quantity and its converted counterpart
pub fn format_quantities(input: &Quantity, output: &Quantity, precision: &Precision) -> String {
    format_conversion(
        input.unit.dimension(),
        input.value,
        input.unit,
        output.value,
        output.unit,
        precision,
    )
}
