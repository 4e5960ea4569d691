use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use strum_macros::{Display, EnumString};

/// Display language for dates and month labels.
///
/// Matches the two-letter codes the site persists client-side. Dutch is the
/// default, as on the site itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Locale {
    En,
    #[default]
    Nl,
}

const MONTHS_EN: [&str; 12] = [
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
];

// Dutch month and day names are not capitalised.
const MONTHS_NL: [&str; 12] = [
    "januari",
    "februari",
    "maart",
    "april",
    "mei",
    "juni",
    "juli",
    "augustus",
    "september",
    "oktober",
    "november",
    "december",
];

const WEEKDAYS_EN: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const WEEKDAYS_NL: [&str; 7] = [
    "maandag",
    "dinsdag",
    "woensdag",
    "donderdag",
    "vrijdag",
    "zaterdag",
    "zondag",
];

impl Locale {
    /// Name of a 1-based calendar month.
    pub fn month_name(self, month: u32) -> &'static str {
        let months = match self {
            Locale::En => &MONTHS_EN,
            Locale::Nl => &MONTHS_NL,
        };
        months[(month - 1) as usize]
    }

    pub fn weekday_name(self, weekday: Weekday) -> &'static str {
        let weekdays = match self {
            Locale::En => &WEEKDAYS_EN,
            Locale::Nl => &WEEKDAYS_NL,
        };
        weekdays[weekday.num_days_from_monday() as usize]
    }

    /// Full date line for a fixture, e.g. `"Saturday 6 September 2025"`.
    pub fn format_date(self, date: NaiveDate) -> String {
        format!(
            "{} {} {} {}",
            self.weekday_name(date.weekday()),
            date.day(),
            self.month_name(date.month()),
            date.year()
        )
    }

    /// Kick-off time as 24-hour `HH:MM`.
    pub fn format_time(self, time: NaiveTime) -> String {
        format!("{:02}:{:02}", time.hour(), time.minute())
    }

    /// The month bucket label used to group the calendar, e.g. `"September 2025"`.
    pub fn month_key(self, year: i32, month: u32) -> String {
        format!("{} {year}", self.month_name(month))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_date_english() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 6).unwrap();
        assert_eq!(Locale::En.format_date(date), "Saturday 6 September 2025");
    }

    #[test]
    fn test_format_date_dutch() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 6).unwrap();
        assert_eq!(Locale::Nl.format_date(date), "zaterdag 6 september 2025");
    }

    #[test]
    fn test_format_time_is_24_hour() {
        let time = NaiveTime::from_hms_opt(15, 15, 0).unwrap();
        assert_eq!(Locale::En.format_time(time), "15:15");
        let early = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
        assert_eq!(Locale::Nl.format_time(early), "09:05");
    }

    #[test]
    fn test_month_key() {
        assert_eq!(Locale::En.month_key(2026, 1), "January 2026");
        assert_eq!(Locale::Nl.month_key(2026, 1), "januari 2026");
    }

    #[test]
    fn test_parses_language_code() {
        assert_eq!(Locale::from_str("nl").unwrap(), Locale::Nl);
        assert_eq!(Locale::from_str("en").unwrap(), Locale::En);
        assert!(Locale::from_str("de").is_err());
    }
}
