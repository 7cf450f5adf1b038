//! Christmas Countdown
//!
//! Days, hours, minutes and seconds until midnight on the next December 25.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

/// Remaining time, split into display units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Split a whole number of seconds into units
    pub fn from_seconds(total: i64) -> Self {
        let total = total.max(0);
        Self {
            days: total / SECS_PER_DAY,
            hours: (total % SECS_PER_DAY) / SECS_PER_HOUR,
            minutes: (total % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: total % SECS_PER_MINUTE,
        }
    }

    pub fn is_christmas(&self) -> bool {
        *self == Self::default()
    }
}

fn christmas_midnight(year: i32) -> NaiveDateTime {
    // Dec 25 exists in every year chrono can represent
    NaiveDate::from_ymd_opt(year, 12, 25)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or(NaiveDateTime::MAX)
}

/// Midnight of Dec 25 in `tz`. A midnight skipped by a DST jump resolves
/// to the first valid instant after it.
fn christmas_of<Tz: TimeZone>(tz: &Tz, year: i32) -> DateTime<Tz> {
    let local = christmas_midnight(year);
    tz.from_local_datetime(&local)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(local + TimeDelta::hours(1))).earliest())
        .unwrap_or_else(|| tz.from_utc_datetime(&local))
}

/// Midnight of the upcoming Christmas Day, in the time zone of `now`.
///
/// Once `now` is past midnight on Dec 25 the target rolls over to next year.
pub fn next_christmas<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let tz = now.timezone();
    let this_year = christmas_of(&tz, now.year());
    if *now > this_year {
        christmas_of(&tz, now.year() + 1)
    } else {
        this_year
    }
}

/// Real elapsed time between two instants, split into units
pub fn countdown_until<Tz: TimeZone, Tz2: TimeZone>(now: &DateTime<Tz>, target: &DateTime<Tz2>) -> Countdown {
    let remaining = target.clone().signed_duration_since(now.clone());
    Countdown::from_seconds(remaining.num_seconds())
}

/// Time left from `now` until the next Christmas in `now`'s time zone
pub fn countdown_until_christmas<Tz: TimeZone>(now: &DateTime<Tz>) -> Countdown {
    countdown_until(now, &next_christmas(now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn offset_hours(h: i32) -> FixedOffset {
        FixedOffset::east_opt(h * 3600).unwrap()
    }

    #[test]
    fn test_countdown_mid_december() {
        let c = countdown_until_christmas(&at(2026, 12, 24, 22, 30, 15));
        assert_eq!(c, Countdown { days: 0, hours: 1, minutes: 29, seconds: 45 });
    }

    #[test]
    fn test_countdown_from_october() {
        // Oct 16 00:00 -> Dec 25 00:00 is 70 days
        let c = countdown_until_christmas(&at(2026, 10, 16, 0, 0, 0));
        assert_eq!(c, Countdown { days: 70, hours: 0, minutes: 0, seconds: 0 });
    }

    #[test]
    fn test_target_in_local_zone() {
        let tz = offset_hours(5);
        let now = tz.with_ymd_and_hms(2026, 12, 24, 12, 0, 0).unwrap();
        let target = next_christmas(&now);
        assert_eq!(target, tz.with_ymd_and_hms(2026, 12, 25, 0, 0, 0).unwrap());
        assert_eq!(countdown_until_christmas(&now).hours, 12);
    }

    #[test]
    fn test_dst_change_counts_real_time() {
        // Berlin: Oct 16 is summer time (+02:00), Dec 25 is winter time (+01:00)
        let now = offset_hours(2).with_ymd_and_hms(2026, 10, 16, 0, 0, 0).unwrap();
        let christmas = offset_hours(1).with_ymd_and_hms(2026, 12, 25, 0, 0, 0).unwrap();
        let c = countdown_until(&now, &christmas);
        assert_eq!(c, Countdown { days: 70, hours: 1, minutes: 0, seconds: 0 });
    }

    #[test]
    fn test_exactly_christmas_midnight() {
        let c = countdown_until_christmas(&at(2026, 12, 25, 0, 0, 0));
        assert!(c.is_christmas());
    }

    #[test]
    fn test_rolls_over_after_christmas_starts() {
        let now = at(2026, 12, 25, 0, 0, 1);
        assert_eq!(next_christmas(&now), at(2027, 12, 25, 0, 0, 0));

        let c = countdown_until_christmas(&at(2026, 12, 26, 0, 0, 0));
        assert_eq!(c.days, 364);
    }

    #[test]
    fn test_subsecond_truncated() {
        let now = at(2026, 12, 24, 23, 59, 58) + TimeDelta::milliseconds(500);
        let c = countdown_until_christmas(&now);
        assert_eq!(c, Countdown { days: 0, hours: 0, minutes: 0, seconds: 1 });
    }

    #[test]
    fn test_leap_year_span() {
        // 2027-12-26 -> 2028-12-25 crosses Feb 29
        let c = countdown_until_christmas(&at(2027, 12, 26, 0, 0, 0));
        assert_eq!(c.days, 365);
    }

    #[test]
    fn test_from_seconds_negative_clamped() {
        assert!(Countdown::from_seconds(-5).is_christmas());
    }
}
