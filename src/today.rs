use crate::calendar::WeekdayExt;
use crate::clock::{Clock, SystemClock};
use crate::format::{format_date, FormattingOptions, MonthStyle};
use crate::locale::Locale;
use crate::relative::RelativeTimeFormat;
use time::{OffsetDateTime, UtcOffset};

// Indexed by days from Sunday
static WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Queries about the current date and time, as reported by a [`Clock`].
///
/// Every method reads the clock afresh.  Names and phrases are English
/// (`en-US`); use [`format_date`] for other locales.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DateUtils<C = SystemClock> {
    clock: C,
    relative: RelativeTimeFormat,
}

impl<C: Clock> DateUtils<C> {
    pub fn new(clock: C) -> DateUtils<C> {
        DateUtils {
            clock,
            relative: RelativeTimeFormat::default(),
        }
    }

    /// Use `relative` for [`DateUtils::relative_time()`]
    pub fn relative_format(mut self, relative: RelativeTimeFormat) -> DateUtils<C> {
        self.relative = relative;
        self
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn now(&self) -> OffsetDateTime {
        self.clock.now()
    }

    /// E.g., "Wednesday, October 23, 2024 at 07:30:15 PM"
    pub fn full_date(&self) -> String {
        format_date(
            self.now(),
            Locale::EnUs,
            &FormattingOptions::full_date_time(),
        )
    }

    /// Today's date as `YYYY-MM-DD`.
    ///
    /// The date is taken after converting the current instant to UTC, so
    /// close to midnight it can be a day ahead of or behind the local date.
    pub fn today_date_key(&self) -> String {
        self.now().to_offset(UtcOffset::UTC).date().to_string()
    }

    pub fn current_month_name(&self) -> String {
        format_date(
            self.now(),
            Locale::EnUs,
            &FormattingOptions::new().month(MonthStyle::Long),
        )
    }

    pub fn today_weekday(&self) -> &'static str {
        WEEKDAYS[self.now().weekday().index0()]
    }

    pub fn current_year(&self) -> i32 {
        self.now().year()
    }

    /// The current month, from 1 (January) to 12
    pub fn current_month(&self) -> u8 {
        u8::from(self.now().month())
    }

    pub fn current_day(&self) -> u8 {
        self.now().day()
    }

    /// A one-line description of today, e.g., "Wednesday, 23 October"
    pub fn today_summary(&self) -> String {
        format!(
            "{}, {} {}",
            self.today_weekday(),
            self.current_day(),
            self.current_month_name()
        )
    }

    /// Describe `instant` relative to now, e.g., "in 3 hours" or "2 days ago"
    pub fn relative_time(&self, instant: OffsetDateTime) -> String {
        self.relative.relative_to(instant, self.now())
    }
}
