use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::validation::{parse_date, validate_amount};
use crate::errors::Result;

/// Raw mid-lease adjustment as supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RentChangeDetails {
    pub rent_amount: f64,
    pub effective_date: String,
}

impl RentChangeDetails {
    pub fn new(rent_amount: f64, effective_date: impl Into<String>) -> Self {
        Self {
            rent_amount,
            effective_date: effective_date.into(),
        }
    }
}

/// Validated rent change: `amount` applies from `effective_date` onward.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RentChange {
    pub amount: f64,
    pub effective_date: NaiveDate,
}

impl RentChange {
    fn from_details(details: &RentChangeDetails) -> Result<Self> {
        Ok(Self {
            amount: validate_amount(details.rent_amount)?,
            effective_date: parse_date(&details.effective_date, "effective_date")?,
        })
    }
}

/// Validates every change and orders them by effective date.
///
/// The sort is stable, so changes sharing an effective date keep their input
/// order and the last one listed wins during generation.
pub fn normalize_rent_changes(changes: &[RentChangeDetails]) -> Result<Vec<RentChange>> {
    let mut normalized = changes
        .iter()
        .map(RentChange::from_details)
        .collect::<Result<Vec<_>>>()?;
    normalized.sort_by_key(|change| change.effective_date);
    Ok(normalized)
}

/// Forward-only merge cursor over an ascending slice of rent changes.
///
/// Queries must arrive in non-decreasing date order; the cursor never rewinds.
#[derive(Debug, Clone)]
pub struct RentChangeCursor<'a> {
    changes: &'a [RentChange],
    next: usize,
    current: f64,
}

impl<'a> RentChangeCursor<'a> {
    pub fn new(base_amount: f64, changes: &'a [RentChange]) -> Self {
        Self {
            changes,
            next: 0,
            current: base_amount,
        }
    }

    /// Applies every change effective on or before `date` and returns the
    /// amount then in force.
    pub fn amount_on(&mut self, date: NaiveDate) -> f64 {
        while let Some(change) = self.changes.get(self.next) {
            if change.effective_date > date {
                break;
            }
            self.current = change.amount;
            self.next += 1;
        }
        self.current
    }

    /// Number of changes consumed so far.
    pub fn applied(&self) -> usize {
        self.next
    }
}
