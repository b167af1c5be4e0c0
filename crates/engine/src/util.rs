//! Small shared helpers.

use chrono::NaiveDate;

use crate::{ResultEngine, error::EngineError};

/// Parses a `YYYY-MM-DD` date, naming the offending field on failure.
pub fn parse_date(field: &str, value: &str) -> ResultEngine<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        EngineError::Validation(format!("invalid date for '{field}': expected YYYY-MM-DD"))
    })
}

/// Parses an optional date field. `None` means "no constraint".
pub fn parse_opt_date(field: &str, value: Option<&str>) -> ResultEngine<Option<NaiveDate>> {
    value.map(|v| parse_date(field, v)).transpose()
}

/// Fails with a validation error when a required text field is blank.
pub fn require_non_empty(field: &str, value: &str) -> ResultEngine<()> {
    if value.trim().is_empty() {
        Err(EngineError::Validation(format!(
            "missing required field: {field}"
        )))
    } else {
        Ok(())
    }
}

/// Fails with a validation error when a required amount is not positive.
pub fn require_positive(field: &str, value: f64) -> ResultEngine<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(EngineError::Validation(format!("'{field}' must be > 0")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso() {
        let date = parse_date("start_date", "2024-03-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn parse_date_names_the_field() {
        let err = parse_date("end_date", "03/01/2024").unwrap_err();
        assert!(err.to_string().contains("end_date"));
    }

    #[test]
    fn require_positive_rejects_zero() {
        assert!(require_positive("amount", 0.0).is_err());
        assert_eq!(require_positive("amount", 12.5).unwrap(), 12.5);
    }
}
