//! Pricing models.
//!
//! Row models use sqlx's FromRow derive for direct database deserialization.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use super::date::CivilDate;

/// Ticket kind used to pick the pricing rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketType {
    Day,
    Night,
}

impl TicketType {
    /// Classify a ticket type tag. Only the exact tag `night` is a night
    /// ticket; every other tag (including unknown ones) prices as a day ticket.
    pub fn from_tag(tag: &str) -> Self {
        if tag == "night" {
            TicketType::Night
        } else {
            TicketType::Day
        }
    }
}

/// Base price from base_price
#[derive(Debug, Clone, FromRow)]
pub struct BasePrice {
    #[sqlx(rename = "type")]
    pub ticket_type: String,
    pub cost: i64,
}

/// Holiday from holidays
#[derive(Debug, Clone, FromRow)]
pub struct Holiday {
    pub holiday: NaiveDate,
    pub description: Option<String>,
}

impl From<Holiday> for CivilDate {
    fn from(row: Holiday) -> Self {
        CivilDate::from(row.holiday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_exact_night_tag_is_night() {
        assert_eq!(TicketType::from_tag("night"), TicketType::Night);
        assert_eq!(TicketType::from_tag("Night"), TicketType::Day);
        assert_eq!(TicketType::from_tag(" night"), TicketType::Day);
        assert_eq!(TicketType::from_tag(""), TicketType::Day);
        assert_eq!(TicketType::from_tag("1jour"), TicketType::Day);
    }

    #[test]
    fn test_holiday_row_to_civil_date() {
        let row = Holiday {
            holiday: NaiveDate::from_ymd_opt(2019, 2, 18).unwrap(),
            description: None,
        };
        let date: CivilDate = row.into();
        assert_eq!(date, CivilDate::from_ymd(2019, 2, 18).unwrap());
    }
}
