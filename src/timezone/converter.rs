use crate::error::ConvertError;
use crate::timezone::types::{LocalDateTime, ZonedDateTime};
use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

/// Parse an IANA zone identifier such as `America/New_York`
pub fn parse_zone(name: &str) -> Result<Tz, ConvertError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|e| ConvertError::failure(format!("unknown time zone '{}': {}", name, e)))
}

/// Read the wall-clock numbers as local time in `from_zone` and return the
/// same instant as wall-clock time in `to_zone`.
///
/// The cause of a failure is logged here; callers only show "Conversion error".
pub fn convert(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    from_zone: &str,
    to_zone: &str,
) -> Result<ZonedDateTime, ConvertError> {
    let result = reinterpret(year, month, day, hour, minute, from_zone, to_zone);
    if let Err(ref e) = result {
        log::error!(
            "{:04}-{:02}-{:02} {:02}:{:02} {} -> {}: {}",
            year,
            month,
            day,
            hour,
            minute,
            from_zone,
            to_zone,
            e
        );
    }
    result
}

/// [`convert`] for an already parsed local date/time
pub fn convert_local(
    local: &LocalDateTime,
    from_zone: &str,
    to_zone: &str,
) -> Result<ZonedDateTime, ConvertError> {
    convert(
        local.year,
        local.month,
        local.day,
        local.hour,
        local.minute,
        from_zone,
        to_zone,
    )
}

fn reinterpret(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    from_zone: &str,
    to_zone: &str,
) -> Result<ZonedDateTime, ConvertError> {
    let from = parse_zone(from_zone)?;
    let to = parse_zone(to_zone)?;

    let naive = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| {
            ConvertError::failure(format!(
                "invalid calendar date {:04}-{:02}-{:02}",
                year, month, day
            ))
        })?
        .and_hms_opt(hour, minute, 0)
        .ok_or_else(|| ConvertError::failure(format!("invalid time {:02}:{:02}", hour, minute)))?;

    let instant = local_to_utc(naive, from)?;
    Ok(ZonedDateTime::from(instant.with_timezone(&to)))
}

/// Resolve a wall-clock time in `zone` to an instant.
/// In a fall-back overlap the earlier instant wins. In a spring-forward gap the
/// offset from before the gap applies, which moves the time past the gap.
fn local_to_utc(naive: NaiveDateTime, zone: Tz) -> Result<DateTime<Utc>, ConvertError> {
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => {
            let out_of_range = || ConvertError::failure(format!("{} is out of range", naive));
            let day_before = naive
                .checked_sub_signed(Duration::days(1))
                .ok_or_else(out_of_range)?;
            let offset = zone.offset_from_utc_datetime(&day_before).fix();
            let utc = naive
                .checked_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())))
                .ok_or_else(out_of_range)?;
            Ok(Utc.from_utc_datetime(&utc))
        }
    }
}
