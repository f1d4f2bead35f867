use crate::Error;
use time::{macros::time, Duration, OffsetDateTime, Time, UtcOffset, Weekday};

const DAYS_IN_WEEK: i64 = 7;

const MONTHS_IN_YEAR: i64 = 12;

// Leap years occur every 4 years, except for centuries not divisible by 400
const LEAP_YEAR_CYCLE: i64 = 4;
const CENTURY_CYCLE: i64 = 100;
const GREGORIAN_CYCLE: i64 = 400;

// Far enough to cross the whole supported calendar; anything beyond is
// rejected before it can overflow a `Duration`
const MAX_DAY_SHIFT: u64 = 8_000_000;

// Index 0 is January; February holds its common-year length
const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

const END_OF_DAY: Time = time!(23:59:59.999);

pub(crate) trait WeekdayExt {
    /// Days from Sunday (Sunday = 0)
    fn index0(&self) -> usize;

    /// ISO day number (Monday = 1, Sunday = 7)
    fn iso_number(&self) -> u16;
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> usize {
        self.number_days_from_sunday().into()
    }

    fn iso_number(&self) -> u16 {
        self.number_from_monday().into()
    }
}

/// Returns whether `year` is a leap year in the proleptic Gregorian calendar.
///
/// The rule is applied as-is to every integer, so year 0 (1 BC) and
/// negative years follow the same 4/100/400 cycle.
pub fn is_leap_year(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || year % GREGORIAN_CYCLE == 0
}

/// Returns the number of days in month `month` (1 = January) of `year`.
///
/// This is the day number of the last day of the month, i.e., of "day zero"
/// of the following month.  Months outside `1..=12` are normalized into
/// adjacent years the way a rolling calendar does it: month 13 is January of
/// the next year, month 0 is December of the previous year, and so on.
pub fn days_in_month(year: i64, month: i64) -> u8 {
    let (year, month0) = normalize_month(year, month);
    if month0 == 1 && is_leap_year(year) {
        29
    } else {
        DAYS_IN_MONTH[month0]
    }
}

/// Splits a possibly out-of-range 1-based month into a year and a 0-based
/// month index
fn normalize_month(year: i64, month: i64) -> (i64, usize) {
    let carry = month.div_euclid(MONTHS_IN_YEAR);
    match usize::try_from(month.rem_euclid(MONTHS_IN_YEAR)) {
        Ok(0) | Err(_) => (year.saturating_add(carry).saturating_sub(1), 11),
        Ok(m) => (year.saturating_add(carry), m - 1),
    }
}

fn days_in_year(year: i64) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Returns the number of whole days from `start` to `end`, rounded toward
/// negative infinity.
///
/// The result is negative when `end` precedes `start`; a span of minus twelve
/// hours counts as -1 day, not 0.
pub fn days_between(start: OffsetDateTime, end: OffsetDateTime) -> i64 {
    let span = end - start;
    let days = span.whole_days();
    if span < Duration::days(days) {
        days - 1
    } else {
        days
    }
}

/// Shifts `instant` by `days` calendar days in its own offset.
///
/// The time of day and UTC offset are kept as-is; only the date moves, rolling
/// over month and year boundaries as needed.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if the resulting date cannot be represented.
pub fn add_days(instant: OffsetDateTime, days: i64) -> Result<OffsetDateTime, Error> {
    if days.unsigned_abs() > MAX_DAY_SHIFT {
        return Err(Error::OutOfRange);
    }
    let shifted = instant
        .date()
        .checked_add(Duration::days(days))
        .ok_or(Error::OutOfRange)?;
    Ok(instant.replace_date(shifted))
}

/// Returns midnight at the start of `instant`'s local calendar date
pub fn start_of_day(instant: OffsetDateTime) -> OffsetDateTime {
    instant.replace_time(Time::MIDNIGHT)
}

/// Returns the last millisecond (23:59:59.999) of `instant`'s local calendar
/// date
pub fn end_of_day(instant: OffsetDateTime) -> OffsetDateTime {
    instant.replace_time(END_OF_DAY)
}

/// Returns the ISO 8601 week number (1 through 53) of `instant`'s date in UTC.
///
/// The date is moved to the Thursday of its ISO week; the week number is then
/// the count of seven-day blocks needed to reach that Thursday from January 1
/// of the Thursday's year.  Days at the very start of January may therefore
/// report the last week of the previous year, and days at the end of December
/// may report week 1.
pub fn iso_week_number(instant: OffsetDateTime) -> u8 {
    let date = instant.to_offset(UtcOffset::UTC).date();
    let year = i64::from(date.year());
    let ordinal = i64::from(date.ordinal());
    let thursday = ordinal + 4 - i64::from(date.weekday().iso_number());
    let thursday = if thursday < 1 {
        thursday + i64::from(days_in_year(year - 1))
    } else if thursday > i64::from(days_in_year(year)) {
        thursday - i64::from(days_in_year(year))
    } else {
        thursday
    };
    // `thursday` is now a 1-based ordinal, so ceil((ordinal - 1 + 1) / 7):
    let week = (thursday + DAYS_IN_WEEK - 1) / DAYS_IN_WEEK;
    u8::try_from(week).unwrap_or(53)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime, offset};
    use time::Date;

    #[test]
    fn test_is_leap_year() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-1));
        assert!(!is_leap_year(-100));
        assert!(is_leap_year(-400));
    }

    #[test]
    fn test_is_leap_year_agrees_with_time() {
        for year in -9999..=9999 {
            assert_eq!(
                is_leap_year(i64::from(year)),
                time::util::is_leap_year(year),
                "leap year mismatch for {year}"
            );
        }
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 1), 31);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
    }

    #[test]
    fn test_days_in_month_rolls_over() {
        // January 2025
        assert_eq!(days_in_month(2024, 13), 31);
        // February 2025
        assert_eq!(days_in_month(2024, 14), 28);
        // December 2023
        assert_eq!(days_in_month(2024, 0), 31);
        // February 2023
        assert_eq!(days_in_month(2024, -10), 28);
        // February 2024
        assert_eq!(days_in_month(2023, 14), 29);
    }

    #[test]
    fn test_days_in_month_matches_next_month_day_zero() {
        for year in [1900, 1999, 2000, 2023, 2024] {
            for month in 1..=12u8 {
                let m = time::Month::try_from(month).expect("month should be valid");
                let (next_year, next_month) = if month == 12 {
                    (year + 1, time::Month::January)
                } else {
                    (year, m.next())
                };
                let last_day = Date::from_calendar_date(next_year, next_month, 1)
                    .ok()
                    .and_then(Date::previous_day)
                    .expect("previous day should exist");
                assert_eq!(
                    days_in_month(i64::from(year), i64::from(month)),
                    last_day.day(),
                    "mismatch for {year}-{month:02}"
                );
            }
        }
    }

    #[test]
    fn test_days_between() {
        let a = datetime!(2024-01-01 12:00 UTC);
        assert_eq!(days_between(a, datetime!(2024-01-02 12:00 UTC)), 1);
        assert_eq!(days_between(a, datetime!(2024-01-02 11:59 UTC)), 0);
        assert_eq!(days_between(a, datetime!(2024-03-01 12:00 UTC)), 60);
        assert_eq!(days_between(a, a), 0);
    }

    #[test]
    fn test_days_between_floors_negative_spans() {
        let a = datetime!(2024-01-02 12:00 UTC);
        assert_eq!(days_between(a, datetime!(2024-01-02 0:00 UTC)), -1);
        assert_eq!(days_between(a, datetime!(2024-01-01 12:00 UTC)), -1);
        assert_eq!(days_between(a, datetime!(2024-01-01 11:59 UTC)), -2);
        assert_eq!(
            days_between(a, a - Duration::nanoseconds(1)),
            -1,
            "any negative span should floor to at least -1"
        );
    }

    #[test]
    fn test_days_between_ignores_offsets() {
        let a = datetime!(2024-06-01 0:00 +9);
        let b = datetime!(2024-05-31 15:00 UTC);
        assert_eq!(days_between(a, b), 0);
    }

    #[test]
    fn test_add_days() {
        let instant = datetime!(2024-01-31 08:15:30 -5);
        assert_eq!(add_days(instant, 1), Ok(datetime!(2024-02-01 08:15:30 -5)));
        assert_eq!(add_days(instant, 30), Ok(datetime!(2024-03-01 08:15:30 -5)));
        assert_eq!(add_days(instant, -31), Ok(datetime!(2023-12-31 08:15:30 -5)));
        assert_eq!(add_days(instant, 0), Ok(instant));
        assert_eq!(add_days(instant, 366), Ok(datetime!(2025-01-31 08:15:30 -5)));
    }

    #[test]
    fn test_add_days_out_of_range() {
        let instant = datetime!(9999-12-31 0:00 UTC);
        assert_eq!(add_days(instant, 1), Err(Error::OutOfRange));
        assert_eq!(add_days(instant, i64::MAX), Err(Error::OutOfRange));
        assert_eq!(add_days(instant, i64::MIN), Err(Error::OutOfRange));
    }

    #[test]
    fn test_add_days_round_trip() {
        let start = datetime!(2023-11-16 21:45:00.250 +1);
        for n in -800..=800 {
            let shifted = add_days(start, n).expect("shift should be in range");
            assert_eq!(days_between(start, shifted), n, "round trip for {n}");
        }
    }

    #[test]
    fn test_add_days_leaves_input_alone() {
        let instant = datetime!(2024-02-28 10:00 UTC);
        let shifted = add_days(instant, 1).expect("shift should be in range");
        assert_eq!(instant, datetime!(2024-02-28 10:00 UTC));
        assert_eq!(shifted, datetime!(2024-02-29 10:00 UTC));
    }

    #[test]
    fn test_start_and_end_of_day() {
        let instant = datetime!(2024-10-23 19:30:15.123 +2);
        let start = start_of_day(instant);
        let end = end_of_day(instant);
        assert_eq!(start, datetime!(2024-10-23 0:00 +2));
        assert_eq!(end, datetime!(2024-10-23 23:59:59.999 +2));
        assert_eq!(start.date(), instant.date());
        assert_eq!(end.date(), instant.date());
        assert_eq!(end.millisecond(), 999);
        assert_eq!(start.offset(), offset!(+2));
    }

    #[test]
    fn test_start_of_day_uses_local_date() {
        // 2024-10-23 in UTC, but already the 24th in UTC+9
        let instant = datetime!(2024-10-23 20:00 UTC).to_offset(offset!(+9));
        assert_eq!(start_of_day(instant), datetime!(2024-10-24 0:00 +9));
        assert_eq!(end_of_day(instant), datetime!(2024-10-24 23:59:59.999 +9));
    }

    #[test]
    fn test_iso_week_number() {
        // Friday, belongs to the last ISO week of 2020
        assert_eq!(iso_week_number(datetime!(2021-01-01 0:00 UTC)), 53);
        assert_eq!(iso_week_number(datetime!(2021-01-03 23:59 UTC)), 53);
        assert_eq!(iso_week_number(datetime!(2021-01-04 0:00 UTC)), 1);
        // Monday, already week 1 of 2025
        assert_eq!(iso_week_number(datetime!(2024-12-30 12:00 UTC)), 1);
        assert_eq!(iso_week_number(datetime!(2024-12-28 12:00 UTC)), 52);
        assert_eq!(iso_week_number(datetime!(2026-01-01 0:00 UTC)), 1);
        assert_eq!(iso_week_number(datetime!(2020-12-31 0:00 UTC)), 53);
    }

    #[test]
    fn test_iso_week_number_uses_utc() {
        // Monday 2021-01-04 locally, but still Sunday the 3rd in UTC
        let instant = datetime!(2021-01-04 02:00 +5);
        assert_eq!(iso_week_number(instant), 53);
    }

    #[test]
    fn test_iso_week_number_agrees_with_time() {
        let mut date = date!(1999 - 12 - 01);
        let end = date!(2030 - 02 - 01);
        while date < end {
            let instant = date.midnight().assume_utc();
            assert_eq!(
                iso_week_number(instant),
                date.iso_week(),
                "ISO week mismatch for {date}"
            );
            date = date.next_day().expect("date should not overflow");
        }
    }

    #[test]
    fn test_weekday_ext() {
        assert_eq!(Weekday::Sunday.index0(), 0);
        assert_eq!(Weekday::Saturday.index0(), 6);
        assert_eq!(Weekday::Monday.iso_number(), 1);
        assert_eq!(Weekday::Sunday.iso_number(), 7);
    }
}
