use anyhow::Context;
use datewise::{
    add_days, days_between, days_in_month, format_date, is_leap_year, iso_week_number, Clock,
    DateUtils, FormattingOptions, Locale, Numeric, RelativeTimeFormat, SystemClock,
};
use lexopt::{Arg, Parser, ValueExt};
use log::LevelFilter;
use std::ffi::OsString;
use time::{
    format_description::{well_known::Rfc3339, FormatItem},
    macros::format_description,
    Date, OffsetDateTime, UtcOffset,
};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// A date given on the command line: either a bare calendar date, which is
/// taken as local midnight, or a full RFC 3339 timestamp
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum When {
    Date(Date),
    Instant(OffsetDateTime),
}

impl When {
    fn parse(value: OsString) -> Result<When, lexopt::Error> {
        let value = value.string()?;
        if let Ok(d) = Date::parse(&value, &YMD_FMT) {
            return Ok(When::Date(d));
        }
        match OffsetDateTime::parse(&value, &Rfc3339) {
            Ok(dt) => Ok(When::Instant(dt)),
            Err(e) => Err(lexopt::Error::ParsingFailed {
                value,
                error: Box::new(e),
            }),
        }
    }

    fn resolve(self, offset: UtcOffset) -> OffsetDateTime {
        match self {
            When::Date(d) => d.midnight().assume_offset(offset),
            When::Instant(dt) => dt,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Action {
    Today,
    Full,
    Key,
    Month,
    Week(Option<When>),
    Leap(i64),
    DaysInMonth { year: i64, month: i64 },
    Between(When, When),
    Add { when: When, days: i64 },
    Relative(When),
    Format(When),
}

impl Action {
    fn from_parser(name: &str, parser: &mut Parser) -> Result<Action, lexopt::Error> {
        match name {
            "today" => Ok(Action::Today),
            "full" => Ok(Action::Full),
            "key" => Ok(Action::Key),
            "month" => Ok(Action::Month),
            "week" => match parser.next()? {
                Some(Arg::Value(value)) => Ok(Action::Week(Some(When::parse(value)?))),
                Some(arg) => Err(arg.unexpected()),
                None => Ok(Action::Week(None)),
            },
            "leap" => Ok(Action::Leap(parser.value()?.parse()?)),
            "days-in-month" => {
                let year = parser.value()?.parse()?;
                let month = parser.value()?.parse()?;
                Ok(Action::DaysInMonth { year, month })
            }
            "between" => {
                let start = When::parse(parser.value()?)?;
                let end = When::parse(parser.value()?)?;
                Ok(Action::Between(start, end))
            }
            "add" => {
                let when = When::parse(parser.value()?)?;
                // Taken with `value()` so that negative counts are not
                // mistaken for options
                let days = parser.value()?.parse()?;
                Ok(Action::Add { when, days })
            }
            "relative" => Ok(Action::Relative(When::parse(parser.value()?)?)),
            "format" => Ok(Action::Format(When::parse(parser.value()?)?)),
            other => Err(lexopt::Error::UnexpectedArgument(other.into())),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Options {
    locale: Locale,
    numeric: Numeric,
    verbosity: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Command {
    Run { action: Action, options: Options },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut action = None;
        let mut options = Options {
            locale: Locale::default(),
            numeric: Numeric::Always,
            verbosity: 0,
        };
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('v') | Arg::Long("verbose") => {
                    options.verbosity = options.verbosity.saturating_add(1);
                }
                Arg::Short('l') | Arg::Long("locale") => {
                    let value = parser.value()?.string()?;
                    match value.parse::<Locale>() {
                        Ok(locale) => options.locale = locale,
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                Arg::Long("auto") => options.numeric = Numeric::Auto,
                Arg::Value(value) if action.is_none() => {
                    let name = value.string()?;
                    action = Some(Action::from_parser(&name, &mut parser)?);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run {
            action: action.unwrap_or(Action::Today),
            options,
        })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run { action, options } => {
                init_logging(options.verbosity)?;
                let clock = SystemClock::local().context("failed to determine local offset")?;
                let utils = DateUtils::new(clock)
                    .relative_format(RelativeTimeFormat::new(options.numeric));
                println!("{}", perform(action, &utils, options.locale)?);
                Ok(())
            }
            Command::Help => {
                println!("Usage: datewise [options] [<command> [<args>]]");
                println!();
                println!("Small date/time helpers");
                println!();
                println!("Commands:");
                println!("  today                      Describe today, e.g. \"Wednesday, 23 October\" (default)");
                println!("  full                       Show the full current date and time");
                println!("  key                        Show today's YYYY-MM-DD key (UTC)");
                println!("  month                      Show the current month's name");
                println!("  week [DATE]                Show the ISO week number");
                println!("  leap YEAR                  Tell whether YEAR is a leap year");
                println!("  days-in-month YEAR MONTH   Show the number of days in a month");
                println!("  between DATE DATE          Show the whole days between two dates");
                println!("  add DATE DAYS              Shift a date by a number of days");
                println!("  relative DATE              Describe a date relative to now");
                println!("  format DATE                Format a date for --locale");
                println!();
                println!("DATE is YYYY-MM-DD (local midnight) or an RFC 3339 timestamp.");
                println!();
                println!("Options:");
                println!("  -l, --locale TAG  Locale for `format` (en-US, en-GB, de-DE, fr-FR, es-ES)");
                println!("      --auto        Say \"yesterday\", \"next year\", etc. in `relative`");
                println!("  -v, --verbose     Log more details to stderr (repeatable)");
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn perform<C: Clock>(action: Action, utils: &DateUtils<C>, locale: Locale) -> anyhow::Result<String> {
    let offset = utils.now().offset();
    log::debug!("Performing {action:?} in offset {offset}");
    let output = match action {
        Action::Today => utils.today_summary(),
        Action::Full => utils.full_date(),
        Action::Key => utils.today_date_key(),
        Action::Month => utils.current_month_name(),
        Action::Week(when) => {
            let instant = when.map_or_else(|| utils.now(), |w| w.resolve(offset));
            iso_week_number(instant).to_string()
        }
        Action::Leap(year) => is_leap_year(year).to_string(),
        Action::DaysInMonth { year, month } => days_in_month(year, month).to_string(),
        Action::Between(start, end) => {
            days_between(start.resolve(offset), end.resolve(offset)).to_string()
        }
        Action::Add { when, days } => {
            let shifted = add_days(when.resolve(offset), days)
                .with_context(|| format!("failed to add {days} days"))?;
            match when {
                When::Date(_) => shifted.date().to_string(),
                When::Instant(_) => shifted
                    .format(&Rfc3339)
                    .context("failed to format shifted timestamp")?,
            }
        }
        Action::Relative(when) => utils.relative_time(when.resolve(offset)),
        Action::Format(when) => {
            let mut options = FormattingOptions::full_date_time();
            options.hour12 = None;
            format_date(when.resolve(offset), locale, &options)
        }
    };
    Ok(output)
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{:<5} {}] {}",
                record.level(),
                record.target(),
                message
            ));
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .context("failed to initialize logging")
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}
