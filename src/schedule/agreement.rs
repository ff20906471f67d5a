use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::changes::{normalize_rent_changes, RentChange, RentChangeDetails};
use super::generator::{self, Occurrences, PaymentRecord};
use super::validation::{
    parse_date, validate_amount, validate_date_range, validate_frequency,
    validate_payment_method,
};
use super::{Frequency, PaymentMethod};
use crate::errors::Result;

/// Raw rent terms as collected by a caller, before validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RentDetails {
    pub rent_amount: f64,
    pub rent_frequency: String,
    pub rent_start_date: String,
    pub rent_end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

/// Rent terms plus their mid-lease changes, the layout of a request file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RentRequest {
    #[serde(flatten)]
    pub details: RentDetails,
    #[serde(default)]
    pub rent_changes: Vec<RentChangeDetails>,
}

/// Validated, immutable rent agreement.
///
/// All validation happens in [`RentAgreement::new`]; once built, schedule
/// generation cannot fail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentAgreement {
    amount: f64,
    frequency: Frequency,
    start_date: NaiveDate,
    end_date: NaiveDate,
    payment_method: PaymentMethod,
    rent_changes: Vec<RentChange>,
}

impl RentAgreement {
    pub fn new(details: &RentDetails, rent_changes: &[RentChangeDetails]) -> Result<Self> {
        Self::validate(details, rent_changes)
            .inspect(|agreement| {
                debug!(
                    amount = agreement.amount,
                    frequency = %agreement.frequency,
                    start = %agreement.start_date,
                    end = %agreement.end_date,
                    method = %agreement.payment_method,
                    changes = agreement.rent_changes.len(),
                    "rent agreement accepted"
                );
            })
            .inspect_err(|err| debug!(error = %err, "rent agreement rejected"))
    }

    pub fn from_request(request: &RentRequest) -> Result<Self> {
        Self::new(&request.details, &request.rent_changes)
    }

    fn validate(details: &RentDetails, rent_changes: &[RentChangeDetails]) -> Result<Self> {
        let amount = validate_amount(details.rent_amount)?;
        let frequency = validate_frequency(&details.rent_frequency)?;
        let payment_method = validate_payment_method(details.payment_method.as_deref())?;
        let start_date = parse_date(&details.rent_start_date, "rent_start_date")?;
        let end_date = parse_date(&details.rent_end_date, "rent_end_date")?;
        let rent_changes = normalize_rent_changes(rent_changes)?;
        validate_date_range(start_date, end_date)?;

        Ok(Self {
            amount,
            frequency,
            start_date,
            end_date,
            payment_method,
            rent_changes,
        })
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Rent changes in ascending effective-date order.
    pub fn rent_changes(&self) -> &[RentChange] {
        &self.rent_changes
    }

    /// Recomputes the full payment schedule.
    pub fn generate(&self) -> Vec<PaymentRecord> {
        generator::generate(self)
    }

    /// Occurrence dates only, without amounts or lead time.
    pub fn payment_dates(&self) -> Vec<NaiveDate> {
        Occurrences::new(self.frequency, self.start_date, self.end_date).collect()
    }

    pub fn total_amount(&self) -> f64 {
        self.generate().iter().map(|record| record.amount).sum()
    }
}
