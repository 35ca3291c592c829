//! Civil date handling for pricing requests.
//!
//! Requested dates are plain calendar dates. Only the date component written
//! in the request text is used; any time-of-day or offset suffix is dropped
//! without converting through an instant, so the day never shifts.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::services::PricingError;

/// Format of the calendar date component (`YYYY-MM-DD`).
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date independent of time-of-day or timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CivilDate(NaiveDate);

impl CivilDate {
    /// Build a date from its parts, `None` if the day does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// ISO day of week: 1 = Monday .. 7 = Sunday.
    pub fn day_of_week(&self) -> u32 {
        self.0.weekday().number_from_monday()
    }

    pub fn is_monday(&self) -> bool {
        self.day_of_week() == 1
    }

    /// Same year, month and day as `other`.
    pub fn matches(&self, other: &CivilDate) -> bool {
        self.year() == other.year() && self.month() == other.month() && self.day() == other.day()
    }
}

impl From<NaiveDate> for CivilDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CivilDate> for NaiveDate {
    fn from(date: CivilDate) -> Self {
        date.0
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// Parse the optional `date` request parameter.
///
/// Absent or blank input yields `Ok(None)`. Accepts `YYYY-MM-DD` optionally
/// followed by a time part (`T...` or a space), e.g. `2019-02-18T23:00:00-05:00`
/// resolves to 2019-02-18.
pub fn parse_date(raw: Option<&str>) -> Result<Option<CivilDate>, PricingError> {
    let raw = match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return Ok(None),
    };

    let date_part = raw
        .split(|c: char| c == 'T' || c == 't' || c == ' ')
        .next()
        .unwrap_or(raw);

    NaiveDate::parse_from_str(date_part, DATE_FORMAT)
        .map(|date| Some(CivilDate(date)))
        .map_err(|_| PricingError::InvalidDateFormat {
            input: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CivilDate {
        CivilDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_absent_is_none() {
        assert_eq!(parse_date(None).unwrap(), None);
        assert_eq!(parse_date(Some("")).unwrap(), None);
        assert_eq!(parse_date(Some("   ")).unwrap(), None);
    }

    #[test]
    fn test_parse_date_plain() {
        let parsed = parse_date(Some("2019-02-18")).unwrap().unwrap();
        assert_eq!((parsed.year(), parsed.month(), parsed.day()), (2019, 2, 18));
    }

    #[test]
    fn test_parse_date_keeps_written_day_regardless_of_suffix() {
        // Late evening with a negative offset would be the next day in UTC
        for input in [
            "2019-02-18T23:30:00-05:00",
            "2019-02-18T00:00:00+14:00",
            "2019-02-18T12:00:00Z",
            "2019-02-18 08:15:00",
            "2019-02-18t00:00",
        ] {
            let parsed = parse_date(Some(input)).unwrap().unwrap();
            assert_eq!(parsed, date(2019, 2, 18), "input {input}");
        }
    }

    #[test]
    fn test_parse_date_invalid() {
        for input in ["yesterday", "2019-13-01", "2019-02-30", "18/02/2019", "2019-2"] {
            let err = parse_date(Some(input)).unwrap_err();
            assert!(
                matches!(err, PricingError::InvalidDateFormat { .. }),
                "input {input}"
            );
        }
    }

    #[test]
    fn test_day_of_week_iso() {
        assert_eq!(date(2019, 2, 18).day_of_week(), 1);
        assert!(date(2019, 2, 18).is_monday());
        assert_eq!(date(2019, 2, 24).day_of_week(), 7);
        assert!(!date(2019, 2, 24).is_monday());
    }

    #[test]
    fn test_matches_compares_calendar_fields() {
        assert!(date(2019, 2, 18).matches(&date(2019, 2, 18)));
        assert!(!date(2019, 2, 18).matches(&date(2020, 2, 18)));
        assert!(!date(2019, 2, 18).matches(&date(2019, 3, 18)));
    }

    #[test]
    fn test_display_iso() {
        assert_eq!(date(2019, 3, 4).to_string(), "2019-03-04");
    }
}
