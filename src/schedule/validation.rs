//! Field validators shared by agreement construction and rent-change
//! normalization. Each returns the typed value or a [`RentError`].

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{Frequency, PaymentMethod};
use crate::errors::{RentError, Result};

static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("static date pattern"));

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepts finite, strictly positive amounts and returns them unchanged.
pub fn validate_amount(value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(RentError::invalid_input("Amount must be a positive number"))
    }
}

pub fn validate_frequency(value: &str) -> Result<Frequency> {
    value.parse()
}

/// Surrounding whitespace is ignored; blank or missing values fall back to
/// [`PaymentMethod::Instant`].
pub fn validate_payment_method(value: Option<&str>) -> Result<PaymentMethod> {
    match value.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw.parse(),
        _ => Ok(PaymentMethod::default()),
    }
}

/// Parses a strict `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str, field_name: &str) -> Result<NaiveDate> {
    let invalid = || {
        RentError::invalid_date(format!(
            "Invalid {}: '{}'. Please use YYYY-MM-DD format",
            field_name, value
        ))
    };
    if !DATE_PATTERN.is_match(value) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Result<()> {
    if start > end {
        return Err(RentError::invalid_date(format!(
            "Start date ({}) cannot be after end date ({})",
            start, end
        )));
    }
    Ok(())
}
