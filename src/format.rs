use crate::locale::{DateOrder, Locale};
use time::OffsetDateTime;

/// How to render a textual component such as a weekday name
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TextStyle {
    Long,
    Short,
}

/// How to render a numeric component
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NumberStyle {
    /// As few digits as needed
    Numeric,
    /// At least two digits (years: exactly the last two)
    TwoDigit,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MonthStyle {
    Numeric,
    TwoDigit,
    Long,
    Short,
}

impl MonthStyle {
    fn is_textual(self) -> bool {
        matches!(self, MonthStyle::Long | MonthStyle::Short)
    }
}

/// Which components of an instant to render, and how.
///
/// Components left as `None` are omitted.  If no date component (weekday,
/// year, month, or day) is requested, a numeric year, month, and day are
/// rendered anyway, so the all-`None` default renders a short numeric date.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct FormattingOptions {
    pub weekday: Option<TextStyle>,
    pub year: Option<NumberStyle>,
    pub month: Option<MonthStyle>,
    pub day: Option<NumberStyle>,
    pub hour: Option<NumberStyle>,
    pub minute: Option<NumberStyle>,
    pub second: Option<NumberStyle>,
    /// Use a 12-hour clock; `None` uses the locale's preference
    pub hour12: Option<bool>,
}

impl FormattingOptions {
    pub fn new() -> FormattingOptions {
        FormattingOptions::default()
    }

    /// Long weekday and month, numeric day and year, and a two-digit 12-hour
    /// time with seconds
    pub fn full_date_time() -> FormattingOptions {
        FormattingOptions {
            weekday: Some(TextStyle::Long),
            year: Some(NumberStyle::Numeric),
            month: Some(MonthStyle::Long),
            day: Some(NumberStyle::Numeric),
            hour: Some(NumberStyle::TwoDigit),
            minute: Some(NumberStyle::TwoDigit),
            second: Some(NumberStyle::TwoDigit),
            hour12: Some(true),
        }
    }

    pub fn weekday(mut self, style: TextStyle) -> FormattingOptions {
        self.weekday = Some(style);
        self
    }

    pub fn year(mut self, style: NumberStyle) -> FormattingOptions {
        self.year = Some(style);
        self
    }

    pub fn month(mut self, style: MonthStyle) -> FormattingOptions {
        self.month = Some(style);
        self
    }

    pub fn day(mut self, style: NumberStyle) -> FormattingOptions {
        self.day = Some(style);
        self
    }

    pub fn hour(mut self, style: NumberStyle) -> FormattingOptions {
        self.hour = Some(style);
        self
    }

    pub fn minute(mut self, style: NumberStyle) -> FormattingOptions {
        self.minute = Some(style);
        self
    }

    pub fn second(mut self, style: NumberStyle) -> FormattingOptions {
        self.second = Some(style);
        self
    }

    pub fn hour12(mut self, hour12: bool) -> FormattingOptions {
        self.hour12 = Some(hour12);
        self
    }

    fn has_date(&self) -> bool {
        self.weekday.is_some() || self.year.is_some() || self.month.is_some() || self.day.is_some()
    }

    fn has_time(&self) -> bool {
        self.hour.is_some() || self.minute.is_some() || self.second.is_some()
    }

    fn with_date_defaults(mut self) -> FormattingOptions {
        if !self.has_date() {
            self.year = Some(NumberStyle::Numeric);
            self.month = Some(MonthStyle::Numeric);
            self.day = Some(NumberStyle::Numeric);
        }
        self
    }
}

/// Something that can render an instant as locale-specific text
pub trait DateFormatter {
    fn format(&self, instant: OffsetDateTime, locale: Locale, options: &FormattingOptions)
        -> String;
}

impl<F: DateFormatter + ?Sized> DateFormatter for &F {
    fn format(
        &self,
        instant: OffsetDateTime,
        locale: Locale,
        options: &FormattingOptions,
    ) -> String {
        (**self).format(instant, locale, options)
    }
}

/// The built-in formatter, modelled on the output of common
/// internationalization libraries for the locales in [`Locale`]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct IntlFormatter;

impl DateFormatter for IntlFormatter {
    fn format(
        &self,
        instant: OffsetDateTime,
        locale: Locale,
        options: &FormattingOptions,
    ) -> String {
        let options = options.with_date_defaults();
        let date = render_date(instant, locale, &options);
        if !options.has_time() {
            return date;
        }
        let time = render_time(instant, locale, &options);
        let joiner = if options.month.is_some_and(MonthStyle::is_textual) {
            locale.date_time_joiner()
        } else {
            locale.numeric_date_time_joiner()
        };
        format!("{date}{joiner}{time}")
    }
}

/// Render `instant` (in its own offset) with [`IntlFormatter`]
pub fn format_date(instant: OffsetDateTime, locale: Locale, options: &FormattingOptions) -> String {
    IntlFormatter.format(instant, locale, options)
}

fn render_date(instant: OffsetDateTime, locale: Locale, options: &FormattingOptions) -> String {
    let weekday = options.weekday.map(|style| match style {
        TextStyle::Long => locale.weekday_name(instant.weekday()),
        TextStyle::Short => locale.short_weekday_name(instant.weekday()),
    });
    let year = options.year.map(|style| render_year(instant.year(), style));
    let core = match options.month {
        Some(style @ (MonthStyle::Long | MonthStyle::Short)) => {
            let month = if style == MonthStyle::Long {
                locale.month_name(instant.month())
            } else {
                locale.short_month_name(instant.month())
            };
            let day = options
                .day
                .map(|style| render_number(instant.day(), style, false));
            textual_date(locale, day, month, year)
        }
        numeric => {
            let pad = locale.pads_numeric_dates();
            let month = numeric.map(|style| {
                let style = if style == MonthStyle::TwoDigit {
                    NumberStyle::TwoDigit
                } else {
                    NumberStyle::Numeric
                };
                render_number(u8::from(instant.month()), style, pad)
            });
            let day = options
                .day
                .map(|style| render_number(instant.day(), style, pad));
            let fields = match locale.date_order() {
                DateOrder::MonthDayYear => [month, day, year],
                DateOrder::DayMonthYear => [day, month, year],
            };
            fields
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(locale.date_separator())
        }
    };
    match weekday {
        Some(wd) if core.is_empty() => wd.to_owned(),
        Some(wd) => format!("{wd}{}{core}", weekday_joiner(locale)),
        None => core,
    }
}

fn textual_date(locale: Locale, day: Option<String>, month: &str, year: Option<String>) -> String {
    match locale {
        Locale::EnUs => match (day, year) {
            (Some(d), Some(y)) => format!("{month} {d}, {y}"),
            (Some(d), None) => format!("{month} {d}"),
            (None, Some(y)) => format!("{month} {y}"),
            (None, None) => month.to_owned(),
        },
        Locale::DeDe => {
            let day = day.map(|d| format!("{d}."));
            [day, Some(month.to_owned()), year]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" ")
        }
        Locale::EsEs => [day, Some(month.to_owned()), year]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" de "),
        Locale::EnGb | Locale::FrFr => [day, Some(month.to_owned()), year]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" "),
    }
}

fn weekday_joiner(locale: Locale) -> &'static str {
    match locale {
        Locale::EnGb | Locale::FrFr => " ",
        Locale::EnUs | Locale::DeDe | Locale::EsEs => ", ",
    }
}

fn render_time(instant: OffsetDateTime, locale: Locale, options: &FormattingOptions) -> String {
    let hour12 = options
        .hour12
        .unwrap_or_else(|| locale.uses_12_hour_clock());
    let several = [options.hour, options.minute, options.second]
        .iter()
        .flatten()
        .count()
        > 1;
    let hour = options.hour.map(|style| {
        if hour12 {
            let h = match instant.hour() % 12 {
                0 => 12,
                h => h,
            };
            render_number(h, style, false)
        } else {
            render_number(instant.hour(), style, true)
        }
    });
    let minute = options
        .minute
        .map(|style| render_number(instant.minute(), style, several));
    let second = options
        .second
        .map(|style| render_number(instant.second(), style, several));
    let clock = [hour, minute, second]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(":");
    if hour12 && options.hour.is_some() {
        let period = if instant.hour() < 12 { "AM" } else { "PM" };
        format!("{clock} {period}")
    } else {
        clock
    }
}

fn render_number(n: u8, style: NumberStyle, pad: bool) -> String {
    if pad || style == NumberStyle::TwoDigit {
        format!("{n:02}")
    } else {
        n.to_string()
    }
}

fn render_year(year: i32, style: NumberStyle) -> String {
    match style {
        NumberStyle::Numeric => year.to_string(),
        NumberStyle::TwoDigit => format!("{:02}", year.rem_euclid(100)),
    }
}
