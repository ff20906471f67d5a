use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::changes::RentChangeCursor;
use super::{Frequency, PaymentMethod, RentAgreement};

/// One scheduled rent payment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PaymentRecord {
    /// Date funds must be initiated: the occurrence date minus the method's lead time.
    pub payment_date: NaiveDate,
    /// Date the rent cycle falls due.
    pub occurrence_date: NaiveDate,
    /// Rent in effect on the occurrence date.
    pub amount: f64,
    pub method: PaymentMethod,
}

/// Occurrence dates from `start` through `end` inclusive at a fixed cadence.
#[derive(Debug, Clone)]
pub struct Occurrences {
    frequency: Frequency,
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Occurrences {
    pub fn new(frequency: Frequency, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            frequency,
            next: Some(start),
            end,
        }
    }
}

impl Iterator for Occurrences {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next.filter(|date| *date <= self.end)?;
        self.next = self.frequency.next_date(current);
        Some(current)
    }
}

/// Walks the agreement's occurrences, merging in rent changes and applying
/// the payment method's lead time.
pub fn generate(agreement: &RentAgreement) -> Vec<PaymentRecord> {
    let method = agreement.payment_method();
    let mut cursor = RentChangeCursor::new(agreement.amount(), agreement.rent_changes());

    let records: Vec<PaymentRecord> = Occurrences::new(
        agreement.frequency(),
        agreement.start_date(),
        agreement.end_date(),
    )
    .map(|occurrence_date| PaymentRecord {
        payment_date: method.payment_date_for(occurrence_date),
        occurrence_date,
        amount: cursor.amount_on(occurrence_date),
        method,
    })
    .collect();

    debug!(
        payments = records.len(),
        changes_applied = cursor.applied(),
        "generated rent schedule"
    );
    records
}
