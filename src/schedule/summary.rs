use chrono::NaiveDate;
use serde::Serialize;

use super::PaymentRecord;

/// Aggregate view of a generated schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScheduleSummary {
    pub payments: usize,
    pub total: f64,
    pub first_payment: Option<NaiveDate>,
    pub last_payment: Option<NaiveDate>,
}

impl ScheduleSummary {
    pub fn from_records(records: &[PaymentRecord]) -> Self {
        Self {
            payments: records.len(),
            total: records.iter().map(|record| record.amount).sum(),
            first_payment: records.first().map(|record| record.payment_date),
            last_payment: records.last().map(|record| record.payment_date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::PaymentMethod;

    #[test]
    fn empty_schedule_has_no_bounds() {
        assert_eq!(ScheduleSummary::from_records(&[]), ScheduleSummary::default());
    }

    #[test]
    fn summarizes_counts_totals_and_bounds() {
        let first = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let last = NaiveDate::from_ymd_opt(2025, 7, 8).unwrap();
        let records = [
            PaymentRecord {
                payment_date: first,
                occurrence_date: first,
                amount: 1000.0,
                method: PaymentMethod::Instant,
            },
            PaymentRecord {
                payment_date: last,
                occurrence_date: last,
                amount: 1250.5,
                method: PaymentMethod::Instant,
            },
        ];
        let summary = ScheduleSummary::from_records(&records);
        assert_eq!(summary.payments, 2);
        assert_eq!(summary.total, 2250.5);
        assert_eq!(summary.first_payment, Some(first));
        assert_eq!(summary.last_payment, Some(last));
    }
}
