use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::AvailabilityError;

/// Parse a stored `HH:MM` or `HH:MM:SS` value.
pub fn parse_clock_time(field: &'static str, value: &str) -> Result<NaiveTime, AvailabilityError> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| AvailabilityError::MalformedTime {
            field,
            value: value.to_string(),
        })
}

/// Parse a stored time and pin it to `date`.
pub fn anchor(
    date: NaiveDate,
    field: &'static str,
    value: &str,
) -> Result<NaiveDateTime, AvailabilityError> {
    Ok(date.and_time(parse_clock_time(field, value)?))
}

/// `a <= b` at minute resolution. Seconds are ignored, so 10:00:30 is
/// at-or-before 10:00.
pub fn is_at_or_before(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a < b || same_minute(a, b)
}

/// `a >= b` at minute resolution.
pub fn is_at_or_after(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a > b || same_minute(a, b)
}

fn same_minute(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.format("%Y-%m-%d %H:%M").to_string() == b.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_parses_both_stored_formats() {
        assert_eq!(
            parse_clock_time("start_time", "09:30:00").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
        assert_eq!(
            parse_clock_time("start_time", "09:30").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_rejects_malformed_time() {
        assert_matches!(
            parse_clock_time("end_time", "9h30"),
            Err(AvailabilityError::MalformedTime { field: "end_time", .. })
        );
        assert_matches!(
            parse_clock_time("end_time", "25:00"),
            Err(AvailabilityError::MalformedTime { .. })
        );
    }

    #[test]
    fn test_boundary_is_inclusive() {
        assert!(is_at_or_before(at(10, 0, 0), at(10, 0, 0)));
        assert!(is_at_or_before(at(9, 30, 0), at(10, 0, 0)));
        assert!(!is_at_or_before(at(10, 30, 0), at(10, 0, 0)));
        assert!(is_at_or_after(at(10, 0, 0), at(10, 0, 0)));
        assert!(!is_at_or_after(at(9, 59, 0), at(10, 0, 0)));
    }

    #[test]
    fn test_seconds_do_not_break_equality() {
        assert!(is_at_or_before(at(10, 0, 45), at(10, 0, 0)));
        assert!(is_at_or_after(at(10, 0, 0), at(10, 0, 45)));
    }
}
