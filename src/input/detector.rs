use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Number (optional sign, decimals, exponent), optional whitespace, unit tag.
    /// Examples: "100 km", "-40 C", "2.5e3 m", "60mph"
    pub(crate) static ref QUANTITY_PATTERN: Regex = Regex::new(
        r"^(?P<value>[-+]?(\d+(\.\d*)?|\.\d+)([eE][-+]?\d+)?)\s*°?(?P<unit>[a-zA-Z]+)$"
    ).unwrap();

    /// HTML datetime-local value: "2024-03-10T14:30", seconds optional
    pub(crate) static ref DATETIME_LOCAL_PATTERN: Regex = Regex::new(
        r"^(?P<year>\d{4})-(?P<month>\d{2})-(?P<day>\d{2})[T ](?P<hour>\d{2}):(?P<minute>\d{2})(:\d{2}(\.\d+)?)?$"
    ).unwrap();
}

/// Check if a string looks like a quantity expression
pub fn looks_like_quantity(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    QUANTITY_PATTERN.is_match(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_detection() {
        assert!(looks_like_quantity("100 km"));
        assert!(looks_like_quantity("10.5 m"));
        assert!(looks_like_quantity("-40 C"));
        assert!(looks_like_quantity("-40 °F"));
        assert!(looks_like_quantity("1e3 kg"));
        assert!(looks_like_quantity("60mph"));
        assert!(looks_like_quantity("  .5 mi  "));

        assert!(!looks_like_quantity("100"));
        assert!(!looks_like_quantity("km"));
        assert!(!looks_like_quantity("hello world"));
        assert!(!looks_like_quantity("5 km/h"));
        assert!(!looks_like_quantity(""));
    }

    #[test]
    fn test_datetime_local_pattern() {
        assert!(DATETIME_LOCAL_PATTERN.is_match("2024-03-10T14:30"));
        assert!(DATETIME_LOCAL_PATTERN.is_match("2024-03-10T14:30:59"));
        assert!(DATETIME_LOCAL_PATTERN.is_match("2024-03-10 14:30"));
        assert!(!DATETIME_LOCAL_PATTERN.is_match("2024-3-10T14:30"));
        assert!(!DATETIME_LOCAL_PATTERN.is_match("2024-03-10"));
        assert!(!DATETIME_LOCAL_PATTERN.is_match("14:30"));
    }
}
