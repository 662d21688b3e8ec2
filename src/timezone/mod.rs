// Time-zone conversion backed by the IANA database bundled in chrono-tz

pub mod converter;
pub mod types;

pub use converter::{convert, convert_local, parse_zone};
pub use types::{LocalDateTime, ZonedDateTime};
