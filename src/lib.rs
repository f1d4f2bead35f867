//! Small, stateless date and time helpers.
//!
//! Instants are [`time::OffsetDateTime`] values; "local" calendar fields are
//! those of the instant's own UTC offset.  Pure calendar arithmetic lives in
//! free functions, while queries about "now" go through [`DateUtils`], which
//! reads the current instant from an injectable [`Clock`].
//!
//! ```
//! use datewise::{days_in_month, is_leap_year, DateUtils, FixedClock};
//! use time::macros::datetime;
//!
//! assert!(is_leap_year(2024));
//! assert_eq!(days_in_month(2024, 2), 29);
//!
//! let utils = DateUtils::new(FixedClock::new(datetime!(2024-10-23 19:30 +2)));
//! assert_eq!(utils.today_summary(), "Wednesday, 23 October");
//! ```
mod calendar;
mod clock;
mod error;
mod format;
mod locale;
mod relative;
mod today;
pub use crate::calendar::{
    add_days, days_between, days_in_month, end_of_day, is_leap_year, iso_week_number,
    start_of_day,
};
pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::error::Error;
pub use crate::format::{
    format_date, DateFormatter, FormattingOptions, IntlFormatter, MonthStyle, NumberStyle,
    TextStyle,
};
pub use crate::locale::Locale;
pub use crate::relative::{relative_time, Numeric, RelativeTimeFormat, RelativeTimeUnit};
pub use crate::today::DateUtils;
