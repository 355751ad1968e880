//! Date utilities anchored in the business time zone.
//!
//! The shop operates on Canada/Eastern wall-clock time: every day-of-week,
//! cutoff-hour and calendar-day computation in the engine goes through the
//! helpers here, regardless of the server locale. Instants are stored and
//! exchanged as UTC; they are converted on the way into a comparison.

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc, Weekday};
use chrono_tz::Tz;

/// The fixed time zone all scheduling decisions are made in.
pub const BUSINESS_TZ: Tz = chrono_tz::Canada::Eastern;

/// Converts a UTC instant to business wall-clock time.
pub fn in_business_tz(instant: DateTime<Utc>) -> DateTime<Tz> {
    instant.with_timezone(&BUSINESS_TZ)
}

/// Returns the calendar day of an instant in the business time zone.
pub fn business_date(instant: DateTime<Utc>) -> NaiveDate {
    in_business_tz(instant).date_naive()
}

/// Returns the weekday of an instant in the business time zone.
pub fn business_weekday(instant: DateTime<Utc>) -> Weekday {
    business_date(instant).weekday()
}

/// Returns the hour (0-23) of an instant on the business wall clock.
pub fn business_hour(instant: DateTime<Utc>) -> u32 {
    in_business_tz(instant).hour()
}

/// Returns true if the instant falls on a strictly earlier calendar day
/// than `now`, ignoring the time-of-day component. "Today" is never past.
pub fn is_past_day(instant: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    business_date(instant) < business_date(now)
}

/// The shop is open Tuesday through Saturday.
pub fn is_open_day(weekday: Weekday) -> bool {
    !matches!(weekday, Weekday::Sun | Weekday::Mon)
}

/// Number of days from `from` until the next calendar occurrence of
/// `target`, always in `1..=7` (the same weekday maps to a full week out).
pub fn days_until_weekday(from: Weekday, target: Weekday) -> i64 {
    let gap = (i64::from(target.num_days_from_monday())
        - i64::from(from.num_days_from_monday()))
    .rem_euclid(7);
    if gap == 0 { 7 } else { gap }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn eastern(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        BUSINESS_TZ
            .with_ymd_and_hms(y, m, d, h, 0, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn business_date_uses_eastern_wall_clock() {
        // 2026-06-02 01:30 UTC is still 2026-06-01 21:30 in Toronto (EDT).
        let instant = Utc.with_ymd_and_hms(2026, 6, 2, 1, 30, 0).unwrap();
        assert_eq!(
            business_date(instant),
            NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
        );
        assert_eq!(business_weekday(instant), Weekday::Mon);
        assert_eq!(business_hour(instant), 21);
    }

    #[test]
    fn business_date_handles_standard_time() {
        // 2026-01-06 02:00 UTC is 2026-01-05 21:00 in Toronto (EST).
        let instant = Utc.with_ymd_and_hms(2026, 1, 6, 2, 0, 0).unwrap();
        assert_eq!(
            business_date(instant),
            NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
        );
    }

    #[test]
    fn is_past_day_ignores_time_of_day() {
        let now = eastern(2026, 6, 2, 15);
        assert!(is_past_day(eastern(2026, 6, 1, 23), now));
        // Earlier hour, same day: not past.
        assert!(!is_past_day(eastern(2026, 6, 2, 1), now));
        assert!(!is_past_day(eastern(2026, 6, 3, 0), now));
    }

    #[test]
    fn open_days_are_tuesday_through_saturday() {
        assert!(!is_open_day(Weekday::Sun));
        assert!(!is_open_day(Weekday::Mon));
        assert!(is_open_day(Weekday::Tue));
        assert!(is_open_day(Weekday::Wed));
        assert!(is_open_day(Weekday::Thu));
        assert!(is_open_day(Weekday::Fri));
        assert!(is_open_day(Weekday::Sat));
    }

    #[test]
    fn days_until_weekday_projects_forward() {
        assert_eq!(days_until_weekday(Weekday::Tue, Weekday::Sat), 4);
        assert_eq!(days_until_weekday(Weekday::Wed, Weekday::Sat), 3);
        assert_eq!(days_until_weekday(Weekday::Thu, Weekday::Tue), 5);
        assert_eq!(days_until_weekday(Weekday::Fri, Weekday::Tue), 4);
        assert_eq!(days_until_weekday(Weekday::Sat, Weekday::Tue), 3);
        assert_eq!(days_until_weekday(Weekday::Mon, Weekday::Thu), 3);
    }

    #[test]
    fn days_until_same_weekday_is_a_full_week() {
        assert_eq!(days_until_weekday(Weekday::Tue, Weekday::Tue), 7);
    }
}
