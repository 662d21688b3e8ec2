use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// File size units. Binary steps: 1 GB = 1024 MB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum SizeUnit {
    MB,
    GB,
    TB,
}

impl SizeUnit {
    pub fn to_megabytes(&self, size: f64) -> f64 {
        match self {
            SizeUnit::MB => size,
            SizeUnit::GB => size * 1024.0,
            SizeUnit::TB => size * 1024.0 * 1024.0,
        }
    }
}

/// Link speed units: megabits or megabytes per second
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum RateUnit {
    Mbps,
    MBps,
}

impl RateUnit {
    /// Bits to bytes is a plain divide by 8; the MB here is whatever the size used.
    pub fn to_megabytes_per_second(&self, speed: f64) -> f64 {
        match self {
            RateUnit::Mbps => speed / 8.0,
            RateUnit::MBps => speed,
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SizeUnit::MB => "MB",
            SizeUnit::GB => "GB",
            SizeUnit::TB => "TB",
        };
        f.write_str(s)
    }
}

impl FromStr for SizeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MB" => Ok(SizeUnit::MB),
            "GB" => Ok(SizeUnit::GB),
            "TB" => Ok(SizeUnit::TB),
            _ => Err(format!("Unknown size unit: {}", s)),
        }
    }
}

impl fmt::Display for RateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RateUnit::Mbps => "Mbps",
            RateUnit::MBps => "MBps",
        };
        f.write_str(s)
    }
}

impl FromStr for RateUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Mbps" => Ok(RateUnit::Mbps),
            "MBps" => Ok(RateUnit::MBps),
            _ => Err(format!("Unknown speed unit: {}", s)),
        }
    }
}

/// Estimated transfer time, split into whole hours, minutes and seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransferEstimate {
    /// Unrounded estimate
    pub total_seconds: f64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TransferEstimate {
    pub fn from_seconds(total_seconds: f64) -> Self {
        Self {
            total_seconds,
            hours: (total_seconds / 3600.0).floor() as u64,
            minutes: ((total_seconds % 3600.0) / 60.0).floor() as u64,
            seconds: (total_seconds % 60.0).floor() as u64,
        }
    }
}

/// `1 hr 2 min 3 sec`. Zero hours or minutes are left out; seconds always show.
impl fmt::Display for TransferEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours != 0 {
            write!(f, "{} hr ", self.hours)?;
        }
        if self.minutes != 0 {
            write!(f, "{} min ", self.minutes)?;
        }
        write!(f, "{} sec", self.seconds)
    }
}
