//! Logged time reports, the engine's raw input.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ids::{ApartmentId, PersonId, ReportId, ShiftKindId};

/// One logged interval: a person's time at an apartment on a given date,
/// under a given shift kind, plus the vacation/sick/travel markers a report
/// may carry instead of (or alongside) ordinary work time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Unique identifier of this report row.
    pub id: ReportId,
    /// The person this report was logged for.
    pub person_id: PersonId,
    /// The apartment the shift was worked at.
    pub apartment_id: ApartmentId,
    /// The civil date this report was logged against.
    pub date: NaiveDate,
    /// Start time, in minutes from midnight of `date`.
    pub start_minute: i64,
    /// End time, in minutes from midnight of `date`. May be `<= start_minute`
    /// to denote an overnight report; callers normalize with
    /// [`crate::time_model::normalize_overnight`] before use.
    pub end_minute: i64,
    /// The shift-kind template this report is interpreted under.
    pub shift_kind_id: ShiftKindId,
    /// Whether this report is a vacation day rather than worked time.
    pub is_vacation: bool,
    /// Whether this report is a sick day rather than worked time.
    pub is_sick: bool,
    /// Travel reimbursement amount logged against this report, if any.
    pub travel_amount: Decimal,
}

impl Report {
    /// Returns the normalized `(start, end)` minute pair for this report,
    /// with `end` adjusted past midnight if necessary.
    pub fn normalized_span(&self) -> (i64, i64) {
        crate::time_model::normalize_overnight(self.start_minute, self.end_minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample() -> Report {
        Report {
            id: ReportId(1),
            person_id: PersonId(1),
            apartment_id: ApartmentId(1),
            date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            start_minute: 480,
            end_minute: 960,
            shift_kind_id: ShiftKindId(105),
            is_vacation: false,
            is_sick: false,
            travel_amount: Decimal::from_str("0").unwrap(),
        }
    }

    #[test]
    fn test_normalized_span_same_day() {
        let report = sample();
        assert_eq!(report.normalized_span(), (480, 960));
    }

    #[test]
    fn test_normalized_span_overnight() {
        let mut report = sample();
        report.start_minute = 1320;
        report.end_minute = 120;
        assert_eq!(report.normalized_span(), (1320, 1560));
    }
}
