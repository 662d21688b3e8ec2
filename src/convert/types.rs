use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Physical dimension a unit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Distance,
    Length,
    Temperature,
    Weight,
    Speed,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Distance,
        Dimension::Length,
        Dimension::Temperature,
        Dimension::Weight,
        Dimension::Speed,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Distance => "distance",
            Dimension::Length => "length",
            Dimension::Temperature => "temperature",
            Dimension::Weight => "weight",
            Dimension::Speed => "speed",
        }
    }

    /// Units accepted for this dimension
    pub fn units(&self) -> &'static [Unit] {
        match self {
            Dimension::Distance => &[Unit::Kilometer, Unit::Mile],
            Dimension::Length => &[Unit::Meter, Unit::Foot],
            Dimension::Temperature => &[Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin],
            Dimension::Weight => &[Unit::Kilogram, Unit::Pound],
            Dimension::Speed => &[Unit::KilometerPerHour, Unit::MilePerHour],
        }
    }

    /// Temperatures are the only magnitudes allowed below zero
    pub fn allows_negative(&self) -> bool {
        matches!(self, Dimension::Temperature)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| format!("Unknown dimension: {}", s))
    }
}

/// Unit tags, spelled exactly as they are accepted and displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Unit {
    #[serde(rename = "km")]
    Kilometer,
    #[serde(rename = "mi")]
    Mile,
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "ft")]
    Foot,
    #[serde(rename = "C")]
    Celsius,
    #[serde(rename = "F")]
    Fahrenheit,
    #[serde(rename = "K")]
    Kelvin,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "lb")]
    Pound,
    #[serde(rename = "kmh")]
    KilometerPerHour,
    #[serde(rename = "mph")]
    MilePerHour,
}

impl Unit {
    pub const ALL: [Unit; 11] = [
        Unit::Kilometer,
        Unit::Mile,
        Unit::Meter,
        Unit::Foot,
        Unit::Celsius,
        Unit::Fahrenheit,
        Unit::Kelvin,
        Unit::Kilogram,
        Unit::Pound,
        Unit::KilometerPerHour,
        Unit::MilePerHour,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Unit::Kilometer => "km",
            Unit::Mile => "mi",
            Unit::Meter => "m",
            Unit::Foot => "ft",
            Unit::Celsius => "C",
            Unit::Fahrenheit => "F",
            Unit::Kelvin => "K",
            Unit::Kilogram => "kg",
            Unit::Pound => "lb",
            Unit::KilometerPerHour => "kmh",
            Unit::MilePerHour => "mph",
        }
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            Unit::Kilometer | Unit::Mile => Dimension::Distance,
            Unit::Meter | Unit::Foot => Dimension::Length,
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => Dimension::Temperature,
            Unit::Kilogram | Unit::Pound => Dimension::Weight,
            Unit::KilometerPerHour | Unit::MilePerHour => Dimension::Speed,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .into_iter()
            .find(|u| u.tag() == s)
            .ok_or_else(|| format!("Unknown unit: {}", s))
    }
}

/// A magnitude paired with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Convert into `to` using the rules of this quantity's dimension.
    /// A target from another dimension keeps the value unchanged.
    pub fn convert_to(&self, to: Unit) -> Quantity {
        let value = self.unit.dimension().convert(self.value, self.unit, to);
        Quantity { value, unit: to }
    }
}
