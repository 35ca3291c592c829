//! Query parameter DTOs for the prices endpoints.
//!
//! Every parameter arrives as optional raw text so that missing or empty
//! values are reported through `AppError` instead of the extractor.

use serde::Deserialize;

use crate::error::AppError;

/// `GET /prices` query
#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    #[serde(rename = "type", default)]
    pub ticket_type: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl PriceQuery {
    pub fn ticket_type(&self) -> Result<&str, AppError> {
        required("type", self.ticket_type.as_deref())
    }

    /// Parsed age; blank or absent is `None`.
    pub fn age(&self) -> Result<Option<u32>, AppError> {
        parse_optional_u32("age", self.age.as_deref())
    }
}

/// `PUT /prices` query
#[derive(Debug, Deserialize)]
pub struct SetPriceQuery {
    #[serde(rename = "type", default)]
    pub ticket_type: Option<String>,
    #[serde(default)]
    pub cost: Option<String>,
}

impl SetPriceQuery {
    pub fn ticket_type(&self) -> Result<&str, AppError> {
        required("type", self.ticket_type.as_deref())
    }

    pub fn cost(&self) -> Result<u32, AppError> {
        parse_optional_u32("cost", self.cost.as_deref())?.ok_or_else(|| {
            AppError::InvalidParameter {
                name: "cost",
                value: self.cost.clone().unwrap_or_default(),
            }
        })
    }
}

/// A parameter that must be present; an empty value counts as given.
fn required<'a>(name: &'static str, raw: Option<&'a str>) -> Result<&'a str, AppError> {
    raw.ok_or(AppError::InvalidParameter {
        name,
        value: String::new(),
    })
}

fn parse_optional_u32(name: &'static str, raw: Option<&str>) -> Result<Option<u32>, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<u32>()
            .map(Some)
            .map_err(|_| AppError::InvalidParameter {
                name,
                value: s.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(age: Option<&str>) -> PriceQuery {
        PriceQuery {
            ticket_type: Some("1jour".to_string()),
            age: age.map(str::to_string),
            date: None,
        }
    }

    #[test]
    fn test_age_absent_or_blank() {
        assert_eq!(query(None).age().unwrap(), None);
        assert_eq!(query(Some("")).age().unwrap(), None);
    }

    #[test]
    fn test_age_parsed() {
        assert_eq!(query(Some("42")).age().unwrap(), Some(42));
        assert_eq!(query(Some(" 7 ")).age().unwrap(), Some(7));
    }

    #[test]
    fn test_age_rejects_garbage_and_negatives() {
        assert!(query(Some("abc")).age().is_err());
        assert!(query(Some("-1")).age().is_err());
        assert!(query(Some("4.5")).age().is_err());
    }

    #[test]
    fn test_cost_required() {
        let set = |cost: Option<&str>| SetPriceQuery {
            ticket_type: Some("night".to_string()),
            cost: cost.map(str::to_string),
        };
        assert_eq!(set(Some("19")).cost().unwrap(), 19);
        assert!(set(Some("")).cost().is_err());
        assert!(set(Some("cheap")).cost().is_err());
        assert!(set(None).cost().is_err());
    }

    #[test]
    fn test_missing_type_is_invalid_parameter() {
        let get = PriceQuery {
            ticket_type: None,
            age: Some("30".to_string()),
            date: None,
        };
        assert!(matches!(
            get.ticket_type(),
            Err(AppError::InvalidParameter { name: "type", .. })
        ));

        let set = SetPriceQuery {
            ticket_type: None,
            cost: Some("19".to_string()),
        };
        assert!(set.ticket_type().is_err());

        // An empty tag is a tag; it prices as a day ticket downstream
        let get = PriceQuery {
            ticket_type: Some(String::new()),
            age: None,
            date: None,
        };
        assert_eq!(get.ticket_type().unwrap(), "");
    }
}
