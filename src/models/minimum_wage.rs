//! Minimum wage table: hourly rate effective from a date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One minimum-wage row: the hourly rate effective from `effective_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimumWageRate {
    /// The date from which this rate applies.
    pub effective_date: NaiveDate,
    /// The minimum hourly rate, in shekels.
    pub hourly: Decimal,
}

/// A table of minimum-wage rates, resolved by "most recent effective date on
/// or before the target date".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MinimumWageTable {
    rates: Vec<MinimumWageRate>,
}

impl MinimumWageTable {
    /// Builds a table from a list of rate rows (order does not matter).
    pub fn new(mut rates: Vec<MinimumWageRate>) -> Self {
        rates.sort_by_key(|r| r.effective_date);
        Self { rates }
    }

    /// Returns the hourly minimum wage in effect on `date`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ReferenceDataMissing`] if no rate row is
    /// effective on or before `date`.
    pub fn hourly_rate_on(&self, date: NaiveDate) -> EngineResult<Decimal> {
        self.rates
            .iter()
            .rev()
            .find(|r| r.effective_date <= date)
            .map(|r| r.hourly)
            .ok_or_else(|| EngineError::ReferenceDataMissing {
                entity: "minimum_wage_rate".to_string(),
                id: date.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn table() -> MinimumWageTable {
        MinimumWageTable::new(vec![
            MinimumWageRate {
                effective_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
                hourly: dec("30.00"),
            },
            MinimumWageRate {
                effective_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
                hourly: dec("32.30"),
            },
        ])
    }

    #[test]
    fn test_rate_before_any_effective_date_is_missing() {
        let result = table().hourly_rate_on(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert!(matches!(
            result,
            Err(EngineError::ReferenceDataMissing { .. })
        ));
    }

    #[test]
    fn test_rate_picks_most_recent_effective_row() {
        let rate = table()
            .hourly_rate_on(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
            .unwrap();
        assert_eq!(rate, dec("32.30"));
    }

    #[test]
    fn test_rate_between_effective_dates_uses_older_row() {
        let rate = table()
            .hourly_rate_on(NaiveDate::from_ymd_opt(2024, 12, 1).unwrap())
            .unwrap();
        assert_eq!(rate, dec("30.00"));
    }

    #[test]
    fn test_rate_on_exact_effective_date() {
        let rate = table()
            .hourly_rate_on(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap())
            .unwrap();
        assert_eq!(rate, dec("32.30"));
    }
}
