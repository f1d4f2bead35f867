use std::fmt;
use time::OffsetDateTime;

const JUST_NOW: &str = "just now";

/// A unit used when phrasing a relative time.
///
/// Months and years have fixed lengths of 30 and 365 days, so a delta of 400
/// days is "1 year", not "1 year 1 month".
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RelativeTimeUnit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl RelativeTimeUnit {
    /// All units, largest first
    pub const ALL: [RelativeTimeUnit; 6] = [
        RelativeTimeUnit::Year,
        RelativeTimeUnit::Month,
        RelativeTimeUnit::Day,
        RelativeTimeUnit::Hour,
        RelativeTimeUnit::Minute,
        RelativeTimeUnit::Second,
    ];

    pub fn seconds(self) -> u32 {
        match self {
            RelativeTimeUnit::Year => 60 * 60 * 24 * 365,
            RelativeTimeUnit::Month => 60 * 60 * 24 * 30,
            RelativeTimeUnit::Day => 60 * 60 * 24,
            RelativeTimeUnit::Hour => 60 * 60,
            RelativeTimeUnit::Minute => 60,
            RelativeTimeUnit::Second => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RelativeTimeUnit::Year => "year",
            RelativeTimeUnit::Month => "month",
            RelativeTimeUnit::Day => "day",
            RelativeTimeUnit::Hour => "hour",
            RelativeTimeUnit::Minute => "minute",
            RelativeTimeUnit::Second => "second",
        }
    }
}

impl fmt::Display for RelativeTimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether to always phrase values numerically, or to use words like
/// "yesterday" where English has them
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Numeric {
    /// "1 day ago", "in 1 year"
    #[default]
    Always,
    /// "yesterday", "next year"
    Auto,
}

/// English relative-time phrasing
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct RelativeTimeFormat {
    numeric: Numeric,
}

impl RelativeTimeFormat {
    pub fn new(numeric: Numeric) -> RelativeTimeFormat {
        RelativeTimeFormat { numeric }
    }

    pub fn numeric(&self) -> Numeric {
        self.numeric
    }

    /// Phrase `value` units in the future (positive) or past (negative)
    pub fn format(&self, value: i64, unit: RelativeTimeUnit) -> String {
        if self.numeric == Numeric::Auto {
            if let Some(s) = auto_phrase(value, unit) {
                return s.to_owned();
            }
        }
        let magnitude = value.unsigned_abs();
        let plural = if magnitude == 1 { "" } else { "s" };
        if value < 0 {
            format!("{magnitude} {unit}{plural} ago")
        } else {
            format!("in {magnitude} {unit}{plural}")
        }
    }

    /// Describe `instant` relative to `now` using the largest unit that fits
    /// at least once.
    ///
    /// The chosen quotient is rounded half toward positive infinity, so 1.5
    /// days ahead is "in 2 days" while 1.5 days ago is "1 day ago".  Deltas
    /// under one second in either direction are "just now".
    pub fn relative_to(&self, instant: OffsetDateTime, now: OffsetDateTime) -> String {
        let delta = (instant - now).as_seconds_f64();
        for unit in RelativeTimeUnit::ALL {
            let quotient = delta / f64::from(unit.seconds());
            if quotient.abs() >= 1.0 {
                log::trace!("Phrasing delta of {delta}s in units of {unit}");
                return self.format(round_half_up(quotient), unit);
            }
        }
        JUST_NOW.to_owned()
    }
}

fn auto_phrase(value: i64, unit: RelativeTimeUnit) -> Option<&'static str> {
    match (unit, value) {
        (RelativeTimeUnit::Day, -1) => Some("yesterday"),
        (RelativeTimeUnit::Day, 1) => Some("tomorrow"),
        (RelativeTimeUnit::Month, -1) => Some("last month"),
        (RelativeTimeUnit::Month, 1) => Some("next month"),
        (RelativeTimeUnit::Year, -1) => Some("last year"),
        (RelativeTimeUnit::Year, 1) => Some("next year"),
        _ => None,
    }
}

// The quotient is bounded by the span of representable dates (well under
// 2^53 seconds), so the conversion is exact.
#[allow(clippy::cast_possible_truncation)]
fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

/// Describe `instant` relative to `now`, e.g. "in 3 hours" or "2 days ago"
pub fn relative_time(instant: OffsetDateTime, now: OffsetDateTime) -> String {
    RelativeTimeFormat::default().relative_to(instant, now)
}
