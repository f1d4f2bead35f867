use crate::Error;
use std::fmt;
use std::str::FromStr;
use time::{Month, Weekday};

/// The locales that [`IntlFormatter`](crate::IntlFormatter) knows how to
/// render
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Locale {
    #[default]
    EnUs,
    EnGb,
    DeDe,
    FrFr,
    EsEs,
}

/// Order of the day, month, and year in an all-numeric date
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum DateOrder {
    MonthDayYear,
    DayMonthYear,
}

impl Locale {
    pub const ALL: [Locale; 5] = [
        Locale::EnUs,
        Locale::EnGb,
        Locale::DeDe,
        Locale::FrFr,
        Locale::EsEs,
    ];

    /// Returns the canonical BCP 47 tag for this locale
    pub fn tag(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::DeDe => "de-DE",
            Locale::FrFr => "fr-FR",
            Locale::EsEs => "es-ES",
        }
    }

    pub fn month_name(self, month: Month) -> &'static str {
        self.names().months[month_index(month)]
    }

    pub fn short_month_name(self, month: Month) -> &'static str {
        self.names().short_months[month_index(month)]
    }

    pub fn weekday_name(self, weekday: Weekday) -> &'static str {
        self.names().weekdays[usize::from(weekday.number_days_from_sunday())]
    }

    pub fn short_weekday_name(self, weekday: Weekday) -> &'static str {
        self.names().short_weekdays[usize::from(weekday.number_days_from_sunday())]
    }

    pub(crate) fn date_order(self) -> DateOrder {
        match self {
            Locale::EnUs => DateOrder::MonthDayYear,
            _ => DateOrder::DayMonthYear,
        }
    }

    pub(crate) fn date_separator(self) -> &'static str {
        match self {
            Locale::DeDe => ".",
            _ => "/",
        }
    }

    /// Whether numeric days and months are zero-padded by default
    pub(crate) fn pads_numeric_dates(self) -> bool {
        matches!(self, Locale::EnGb | Locale::FrFr)
    }

    pub(crate) fn uses_12_hour_clock(self) -> bool {
        self == Locale::EnUs
    }

    /// Separator placed between a textual date and the time
    pub(crate) fn date_time_joiner(self) -> &'static str {
        match self {
            Locale::EnUs | Locale::EnGb => " at ",
            Locale::DeDe => " um ",
            Locale::FrFr => " à ",
            Locale::EsEs => ", ",
        }
    }

    /// Separator placed between an all-numeric date and the time
    pub(crate) fn numeric_date_time_joiner(self) -> &'static str {
        match self {
            Locale::FrFr => " ",
            _ => ", ",
        }
    }

    fn names(self) -> &'static Names {
        match self {
            Locale::EnUs | Locale::EnGb => &ENGLISH,
            Locale::DeDe => &GERMAN,
            Locale::FrFr => &FRENCH,
            Locale::EsEs => &SPANISH,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = Error;

    /// Parses a language tag such as `en-US`, `de_DE`, or a bare language
    /// (`fr`), case-insensitively.  Bare `en` maps to `en-US`.
    fn from_str(s: &str) -> Result<Locale, Error> {
        let tag = s.trim().replace('_', "-").to_ascii_lowercase();
        match tag.as_str() {
            "en" | "en-us" => Ok(Locale::EnUs),
            "en-gb" => Ok(Locale::EnGb),
            "de" | "de-de" => Ok(Locale::DeDe),
            "fr" | "fr-fr" => Ok(Locale::FrFr),
            "es" | "es-es" => Ok(Locale::EsEs),
            _ => Err(Error::UnknownLocale(s.to_owned())),
        }
    }
}

fn month_index(month: Month) -> usize {
    usize::from(u8::from(month)) - 1
}

struct Names {
    months: [&'static str; 12],
    short_months: [&'static str; 12],
    // Sunday first
    weekdays: [&'static str; 7],
    short_weekdays: [&'static str; 7],
}

static ENGLISH: Names = Names {
    months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    short_months: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    weekdays: [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ],
    short_weekdays: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
};

static GERMAN: Names = Names {
    months: [
        "Januar",
        "Februar",
        "März",
        "April",
        "Mai",
        "Juni",
        "Juli",
        "August",
        "September",
        "Oktober",
        "November",
        "Dezember",
    ],
    short_months: [
        "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.",
        "Dez.",
    ],
    weekdays: [
        "Sonntag",
        "Montag",
        "Dienstag",
        "Mittwoch",
        "Donnerstag",
        "Freitag",
        "Samstag",
    ],
    short_weekdays: ["So.", "Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa."],
};

static FRENCH: Names = Names {
    months: [
        "janvier",
        "février",
        "mars",
        "avril",
        "mai",
        "juin",
        "juillet",
        "août",
        "septembre",
        "octobre",
        "novembre",
        "décembre",
    ],
    short_months: [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
        "déc.",
    ],
    weekdays: [
        "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
    ],
    short_weekdays: ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
};

static SPANISH: Names = Names {
    months: [
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ],
    short_months: [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
    ],
    weekdays: [
        "domingo",
        "lunes",
        "martes",
        "miércoles",
        "jueves",
        "viernes",
        "sábado",
    ],
    short_weekdays: ["dom", "lun", "mar", "mié", "jue", "vie", "sáb"],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!("en-US".parse::<Locale>(), Ok(Locale::EnUs));
        assert_eq!("en".parse::<Locale>(), Ok(Locale::EnUs));
        assert_eq!("en_gb".parse::<Locale>(), Ok(Locale::EnGb));
        assert_eq!(" DE-de ".parse::<Locale>(), Ok(Locale::DeDe));
        assert_eq!("fr".parse::<Locale>(), Ok(Locale::FrFr));
        assert_eq!("es-ES".parse::<Locale>(), Ok(Locale::EsEs));
        assert_eq!(
            "tlh".parse::<Locale>(),
            Err(Error::UnknownLocale("tlh".into()))
        );
    }

    #[test]
    fn test_tag_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(locale.to_string().parse::<Locale>(), Ok(locale));
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(Locale::EnUs.month_name(Month::October), "October");
        assert_eq!(Locale::DeDe.month_name(Month::March), "März");
        assert_eq!(Locale::FrFr.short_month_name(Month::February), "févr.");
        assert_eq!(Locale::EsEs.weekday_name(Weekday::Wednesday), "miércoles");
        assert_eq!(Locale::EnGb.short_weekday_name(Weekday::Sunday), "Sun");
    }
}
