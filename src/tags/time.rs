//! Timestamp parsing for theme tags.
//!
//! Naive timestamps are interpreted in the site's configured time zone;
//! RFC 3339 inputs carry their own offset. Output is always RFC 3339 so
//! client-side scripts can localize reliably.

use chrono::{
    DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone,
};
use chrono_tz::Tz;

/// Date-time layouts accepted for naive timestamps.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Time-of-day layouts accepted for the second half of an interval.
const TIME_FORMATS: [&str; 4] = ["%H:%M:%S", "%H:%M", "%I:%M %p", "%I %p"];

/// Parse a timestamp string in the given zone.
///
/// Returns `None` for unparseable input and for local times that are
/// ambiguous or nonexistent in the zone (DST transitions).
pub fn parse_timestamp(s: &str, tz: Tz) -> Option<DateTime<Tz>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&tz));
    }

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return from_local(naive, tz);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return from_local(date.and_hms_opt(0, 0, 0)?, tz);
    }

    None
}

/// Parse the second timestamp of an interval.
///
/// A full timestamp stands on its own; a bare time of day borrows the date
/// from `base`.
pub fn parse_interval_end(s: &str, base: &DateTime<Tz>, tz: Tz) -> Option<DateTime<Tz>> {
    if let Some(dt) = parse_timestamp(s, tz) {
        return Some(dt);
    }

    let time = parse_time_of_day(s.trim())?;
    from_local(base.date_naive().and_time(time), tz)
}

/// RFC 3339 rendering with second precision (Z for UTC).
pub fn iso8601(dt: &DateTime<Tz>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn parse_time_of_day(s: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(s, format).ok())
}

fn from_local(naive: NaiveDateTime, tz: Tz) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&naive).single()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Tz;

    const NY: Tz = chrono_tz::America::New_York;

    #[test]
    fn test_rfc3339_keeps_instant() {
        let dt = parse_timestamp("2026-02-03T13:30:00Z", Tz::UTC).unwrap();
        assert_eq!(iso8601(&dt), "2026-02-03T13:30:00Z");
    }

    #[test]
    fn test_rfc3339_converted_to_site_zone() {
        let dt = parse_timestamp("2026-02-03T13:30:00Z", NY).unwrap();
        assert_eq!(iso8601(&dt), "2026-02-03T08:30:00-05:00");
    }

    #[test]
    fn test_naive_datetime_in_site_zone() {
        let dt = parse_timestamp("2026-02-03 13:30", NY).unwrap();
        assert_eq!(iso8601(&dt), "2026-02-03T13:30:00-05:00");
    }

    #[test]
    fn test_naive_datetime_with_seconds() {
        let dt = parse_timestamp("2026-02-03 13:30:45", Tz::UTC).unwrap();
        assert_eq!(iso8601(&dt), "2026-02-03T13:30:45Z");
    }

    #[test]
    fn test_t_separator() {
        let dt = parse_timestamp("2026-02-03T13:30", Tz::UTC).unwrap();
        assert_eq!(iso8601(&dt), "2026-02-03T13:30:00Z");
    }

    #[test]
    fn test_date_only_is_midnight() {
        let dt = parse_timestamp("2026-02-03", NY).unwrap();
        assert_eq!(iso8601(&dt), "2026-02-03T00:00:00-05:00");
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(parse_timestamp("soon", Tz::UTC).is_none());
        assert!(parse_timestamp("", Tz::UTC).is_none());
        assert!(parse_timestamp("2026-13-40", Tz::UTC).is_none());
    }

    #[test]
    fn test_interval_end_time_only() {
        let base = parse_timestamp("2026-02-03 09:00", NY).unwrap();
        let end = parse_interval_end("10:30", &base, NY).unwrap();
        assert_eq!(iso8601(&end), "2026-02-03T10:30:00-05:00");
    }

    #[test]
    fn test_interval_end_meridiem() {
        let base = parse_timestamp("2026-02-03 09:00", NY).unwrap();
        let end = parse_interval_end("1:30 PM", &base, NY).unwrap();
        assert_eq!(iso8601(&end), "2026-02-03T13:30:00-05:00");
    }

    #[test]
    fn test_interval_end_full_timestamp() {
        let base = parse_timestamp("2026-02-03 09:00", Tz::UTC).unwrap();
        let end = parse_interval_end("2026-02-04 09:00", &base, Tz::UTC).unwrap();
        assert_eq!(iso8601(&end), "2026-02-04T09:00:00Z");
    }

    #[test]
    fn test_nonexistent_local_time_rejected() {
        // 2:30 AM does not exist on the US spring-forward date
        assert!(parse_timestamp("2026-03-08 02:30", NY).is_none());
    }
}
