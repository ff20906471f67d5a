use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::RentError;

/// Cadence at which rent falls due.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Fortnightly,
    Monthly,
}

impl Frequency {
    pub const ALL: [Frequency; 3] = [
        Frequency::Weekly,
        Frequency::Fortnightly,
        Frequency::Monthly,
    ];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::Weekly => "weekly",
            Frequency::Fortnightly => "fortnightly",
            Frequency::Monthly => "monthly",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Frequency::Weekly => "Weekly",
            Frequency::Fortnightly => "Fortnightly",
            Frequency::Monthly => "Monthly",
        }
    }

    /// Comma-separated list of accepted values, in declaration order.
    pub fn allowed_values() -> String {
        Self::ALL
            .iter()
            .map(|frequency| frequency.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Calculates the occurrence following `from`.
    ///
    /// Monthly steps keep the day of month when the target month has it and
    /// clamp to the month's last day otherwise, so Jan 31 becomes Feb 28
    /// (or Feb 29 in a leap year). Returns `None` only when the result falls
    /// outside chrono's representable range.
    pub fn next_date(self, from: NaiveDate) -> Option<NaiveDate> {
        match self {
            Frequency::Weekly => from.checked_add_days(Days::new(7)),
            Frequency::Fortnightly => from.checked_add_days(Days::new(14)),
            Frequency::Monthly => shift_month(from, 1),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = RentError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "weekly" => Ok(Frequency::Weekly),
            "fortnightly" => Ok(Frequency::Fortnightly),
            "monthly" => Ok(Frequency::Monthly),
            _ => Err(RentError::invalid_input(format!(
                "Invalid frequency: '{}'. Must be one of: {}",
                value,
                Self::allowed_values()
            ))),
        }
    }
}

fn shift_month(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let index = date.year() * 12 + date.month0() as i32 + months;
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month)?);
    NaiveDate::from_ymd_opt(year, month, day)
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?
        .pred_opt()
        .map(|last| last.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekly_and_fortnightly_step_by_days() {
        assert_eq!(
            Frequency::Weekly.next_date(date(2025, 7, 29)),
            Some(date(2025, 8, 5))
        );
        assert_eq!(
            Frequency::Fortnightly.next_date(date(2025, 12, 25)),
            Some(date(2026, 1, 8))
        );
    }

    #[test]
    fn monthly_clamps_to_end_of_shorter_month() {
        assert_eq!(
            Frequency::Monthly.next_date(date(2025, 1, 31)),
            Some(date(2025, 2, 28))
        );
        assert_eq!(
            Frequency::Monthly.next_date(date(2024, 1, 31)),
            Some(date(2024, 2, 29))
        );
        assert_eq!(
            Frequency::Monthly.next_date(date(2025, 3, 31)),
            Some(date(2025, 4, 30))
        );
    }

    #[test]
    fn monthly_rolls_over_year_end() {
        assert_eq!(
            Frequency::Monthly.next_date(date(2025, 12, 15)),
            Some(date(2026, 1, 15))
        );
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("Weekly".parse::<Frequency>(), Ok(Frequency::Weekly));
        assert_eq!("FORTNIGHTLY".parse::<Frequency>(), Ok(Frequency::Fortnightly));
        assert_eq!("monthly".parse::<Frequency>(), Ok(Frequency::Monthly));
    }

    #[test]
    fn unknown_frequency_lists_allowed_values() {
        let err = "daily".parse::<Frequency>().unwrap_err();
        assert_eq!(
            err,
            RentError::InvalidInput(
                "Invalid frequency: 'daily'. Must be one of: weekly, fortnightly, monthly".into()
            )
        );
    }
}
