//! Datetime formatting for destination columns.
//!
//! Movable Type stores naive local datetimes. WordPress wants both the
//! local value and a GMT twin, so the configured source timezone is
//! used to derive the latter. Missing source datetimes become the
//! WordPress zero date rather than NULL, since the destination columns
//! are NOT NULL.

use chrono::{LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// WordPress sentinel for "no datetime".
pub const ZERO_DATE: &str = "0000-00-00 00:00:00";

/// Format a source datetime as-is, in the source's local timezone.
pub fn format_local(dt: Option<NaiveDateTime>, format: &str) -> String {
    match dt {
        Some(dt) => dt.format(format).to_string(),
        None => ZERO_DATE.to_string(),
    }
}

/// Convert a source-local datetime to GMT and format it.
///
/// DST makes some local datetimes ambiguous and others nonexistent. The
/// earlier reading wins for ambiguous ones; a nonexistent datetime is
/// formatted unshifted, which is as close to the source's intent as we
/// can get.
pub fn format_gmt(dt: Option<NaiveDateTime>, tz: Tz, format: &str) -> String {
    let naive = match dt {
        Some(naive) => naive,
        None => return ZERO_DATE.to_string(),
    };

    match tz.from_local_datetime(&naive) {
        LocalResult::Single(local) | LocalResult::Ambiguous(local, _) => {
            local.with_timezone(&Utc).format(format).to_string()
        }
        LocalResult::None => naive.format(format).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_missing_datetime_becomes_zero_date() {
        assert_eq!(format_local(None, FORMAT), ZERO_DATE);
        assert_eq!(format_gmt(None, chrono_tz::UTC, FORMAT), ZERO_DATE);
    }

    #[test]
    fn test_local_is_formatted_unshifted() {
        let local = format_local(Some(dt(2010, 6, 15, 12, 0, 0)), FORMAT);
        assert_eq!(local, "2010-06-15 12:00:00");
    }

    #[test]
    fn test_gmt_shifts_by_source_offset() {
        // US/Central is CDT (UTC-5) in June.
        let gmt = format_gmt(
            Some(dt(2010, 6, 15, 12, 0, 0)),
            chrono_tz::US::Central,
            FORMAT,
        );
        assert_eq!(gmt, "2010-06-15 17:00:00");
    }

    #[test]
    fn test_ambiguous_datetime_takes_earlier_offset() {
        // 2010-11-07 01:30 happened twice in US/Central; the first pass
        // was still CDT (UTC-5).
        let gmt = format_gmt(
            Some(dt(2010, 11, 7, 1, 30, 0)),
            chrono_tz::US::Central,
            FORMAT,
        );
        assert_eq!(gmt, "2010-11-07 06:30:00");
    }

    #[test]
    fn test_nonexistent_datetime_falls_back_to_unshifted() {
        // 2010-03-14 02:30 was skipped by the spring-forward transition.
        let gmt = format_gmt(
            Some(dt(2010, 3, 14, 2, 30, 0)),
            chrono_tz::US::Central,
            FORMAT,
        );
        assert_eq!(gmt, "2010-03-14 02:30:00");
    }
}
