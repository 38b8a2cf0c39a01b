//! The immutable, in-memory view of all reference data one computation
//! needs — the contract boundary between this crate and whatever loads the
//! underlying relational schema (a database, or [`crate::config::ConfigLoader`]
//! for tests and local tooling).

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::apartment::ApartmentTable;
use crate::models::housing::HousingRateTable;
use crate::models::ids::PersonId;
use crate::models::minimum_wage::MinimumWageTable;
use crate::models::month_lock::MonthLock;
use crate::models::person::PersonTable;
use crate::models::report::Report;
use crate::models::sabbath::SabbathCache;
use crate::models::shift_kind::ShiftKindTable;
use crate::models::standby::StandbyRateTable;

/// Every table a [`crate::engine::compute_monthly_totals`] call may need to
/// consult, bundled into one value so it can be threaded explicitly rather
/// than read from ambient/global state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceSnapshot {
    /// All known people.
    pub people: PersonTable,
    /// All known apartments.
    pub apartments: ApartmentTable,
    /// All logged reports, across all people and months.
    pub reports: Vec<Report>,
    /// All known shift kinds.
    pub shift_kinds: ShiftKindTable,
    /// Standby-rate rows.
    pub standby_rates: StandbyRateTable,
    /// Housing-rate override rows.
    pub housing_rates: HousingRateTable,
    /// Sabbath entry/exit times by week.
    pub sabbath: SabbathCache,
    /// Minimum-wage rate history.
    pub minimum_wage: MinimumWageTable,
    /// Month lock rows (schema completeness only; never consulted).
    pub month_locks: Vec<MonthLock>,
}

impl ReferenceSnapshot {
    /// Returns every report for `person_id` that could possibly contribute
    /// a work-day falling inside `(year, month)`.
    ///
    /// Because the work-day boundary is 08:00 rather than midnight, a report
    /// dated the first day of the next month can still belong to this
    /// month's last work-day, and a report dated the last day of this month
    /// can belong to the *next* month's first work-day. The window is
    /// therefore widened by one day on each side; [`crate::time_model`]
    /// resolves the exact work-day each report belongs to.
    pub fn reports_for_month(&self, person_id: PersonId, year: i32, month: u32) -> EngineResult<Vec<&Report>> {
        let (first, last) = month_bounds(year, month)?;
        let window_start = first
            .checked_sub_days(Days::new(1))
            .expect("NaiveDate underflow");
        let window_end = last.checked_add_days(Days::new(1)).expect("NaiveDate overflow");

        Ok(self
            .reports
            .iter()
            .filter(|r| r.person_id == person_id && r.date >= window_start && r.date <= window_end)
            .collect())
    }
}

/// Returns the first and last calendar day of `(year, month)`.
///
/// Reports whose civil date falls inside this range can still resolve their
/// work-day to a day just outside it (see [`ReferenceSnapshot::reports_for_month`]);
/// callers that place segments onto work-days must filter the *results* of
/// that placement back down to this range themselves.
pub fn month_bounds(year: i32, month: u32) -> EngineResult<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| crate::error::EngineError::CalculationError {
        message: format!("invalid year/month: {year}-{month}"),
    })?;
    let last = last_day_of_month(year, month)?;
    Ok((first, last))
}

fn last_day_of_month(year: i32, month: u32) -> EngineResult<NaiveDate> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or_else(|| {
        crate::error::EngineError::CalculationError {
            message: format!("invalid year/month: {year}-{month}"),
        }
    })?;
    Ok(first_of_next
        .checked_sub_days(Days::new(1))
        .expect("NaiveDate underflow"))
}
