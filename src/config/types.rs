//! Thin top-level wrapper shapes for the YAML fixture files
//! [`super::ConfigLoader`] reads — each file's key mirrors the relational
//! table it stands in for.

use serde::Deserialize;

use crate::models::apartment::ApartmentRecord;
use crate::models::housing::HousingRateOverride;
use crate::models::month_lock::MonthLock;
use crate::models::person::PersonRecord;
use crate::models::report::Report;
use crate::models::sabbath::SabbathWeek;
use crate::models::shift_kind::ShiftKind;
use crate::models::standby::StandbyRate;

/// `people.yaml`.
#[derive(Debug, Deserialize)]
pub struct PeopleFile {
    /// All person records.
    pub people: Vec<PersonRecord>,
}

/// `apartments.yaml`.
#[derive(Debug, Deserialize)]
pub struct ApartmentsFile {
    /// All apartment records.
    pub apartments: Vec<ApartmentRecord>,
}

/// `reports.yaml`.
#[derive(Debug, Deserialize)]
pub struct ReportsFile {
    /// All logged time reports.
    pub reports: Vec<Report>,
}

/// `shift_kinds.yaml`.
#[derive(Debug, Deserialize)]
pub struct ShiftKindsFile {
    /// All shift-kind templates.
    pub shift_kinds: Vec<ShiftKind>,
}

/// `standby_rates.yaml`.
#[derive(Debug, Deserialize)]
pub struct StandbyRatesFile {
    /// All standby-rate rows.
    pub standby_rates: Vec<StandbyRate>,
}

/// `housing_rates.yaml`.
#[derive(Debug, Deserialize)]
pub struct HousingRatesFile {
    /// All housing-rate override rows.
    pub housing_rates: Vec<HousingRateOverride>,
}

/// `sabbath_weeks.yaml`.
#[derive(Debug, Deserialize)]
pub struct SabbathWeeksFile {
    /// All weekly Sabbath entry/exit rows.
    pub sabbath_weeks: Vec<SabbathWeek>,
}

/// `month_locks.yaml`.
#[derive(Debug, Deserialize)]
pub struct MonthLocksFile {
    /// All month-lock rows.
    pub month_locks: Vec<MonthLock>,
}
