use chrono::NaiveDate;

use crate::server::error::request::RequestError;

/// Parses a `YYYY-MM-DD` request parameter, naming `field` in the error.
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, RequestError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| RequestError::InvalidDate {
        field,
        value: value.to_string(),
    })
}
