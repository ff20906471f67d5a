use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::RentError;

/// How the tenant pays; each method carries a fixed processing lead time.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Instant,
    CreditCard,
    BankTransfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Instant,
        PaymentMethod::CreditCard,
        PaymentMethod::BankTransfer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Instant => "instant",
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::BankTransfer => "bank_transfer",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Instant => "Instant",
            PaymentMethod::CreditCard => "Credit card",
            PaymentMethod::BankTransfer => "Bank transfer",
        }
    }

    pub fn allowed_values() -> String {
        Self::ALL
            .iter()
            .map(|method| method.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Calendar days between initiating a payment and its settlement.
    pub fn processing_days(self) -> i64 {
        match self {
            PaymentMethod::Instant => 0,
            PaymentMethod::CreditCard => 2,
            PaymentMethod::BankTransfer => 3,
        }
    }

    /// Date funds must be initiated so they arrive by `occurrence`.
    pub fn payment_date_for(self, occurrence: NaiveDate) -> NaiveDate {
        occurrence - Duration::days(self.processing_days())
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = RentError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "instant" => Ok(PaymentMethod::Instant),
            "credit_card" => Ok(PaymentMethod::CreditCard),
            "bank_transfer" => Ok(PaymentMethod::BankTransfer),
            _ => Err(RentError::invalid_input(format!(
                "Invalid payment method: '{}'. Must be one of: {}",
                value,
                Self::allowed_values()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_times_match_method() {
        let due = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        assert_eq!(PaymentMethod::Instant.payment_date_for(due), due);
        assert_eq!(
            PaymentMethod::CreditCard.payment_date_for(due),
            NaiveDate::from_ymd_opt(2025, 7, 30).unwrap()
        );
        assert_eq!(
            PaymentMethod::BankTransfer.payment_date_for(due),
            NaiveDate::from_ymd_opt(2025, 7, 29).unwrap()
        );
    }

    #[test]
    fn parses_snake_case_names_in_any_case() {
        assert_eq!(
            "Credit_Card".parse::<PaymentMethod>(),
            Ok(PaymentMethod::CreditCard)
        );
        assert_eq!(
            "BANK_TRANSFER".parse::<PaymentMethod>(),
            Ok(PaymentMethod::BankTransfer)
        );
    }

    #[test]
    fn rejects_unknown_method() {
        let err = "cheque".parse::<PaymentMethod>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid payment method: 'cheque'. Must be one of: instant, credit_card, bank_transfer"
        );
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&PaymentMethod::BankTransfer).unwrap();
        assert_eq!(json, "\"bank_transfer\"");
    }
}
