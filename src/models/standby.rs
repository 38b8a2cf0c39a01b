//! Standby payment rates, keyed by segment template, apartment type, and
//! marital status, with a generic/specific priority tie-break.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_STANDBY_RATE;
use crate::history::{self, HistoryRecord};
use crate::models::apartment::ApartmentType;
use crate::models::ids::SegmentTemplateId;

/// One standby-rate row. `apartment_type` and `is_married` of `None` act as
/// wildcards matching any value; `priority` breaks ties when more than one
/// row matches (10 = specific match, 0 = generic fallback).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandbyRate {
    /// Row identifier, used to key this row's own history.
    pub id: i64,
    /// The standby segment template this rate applies to.
    pub segment_id: SegmentTemplateId,
    /// The apartment type this rate requires, or `None` for any.
    pub apartment_type: Option<ApartmentType>,
    /// The marital status this rate requires, or `None` for any.
    pub is_married: Option<bool>,
    /// Specificity, used to break ties among simultaneously matching rows.
    pub priority: i32,
    /// The live standby rate amount, in shekels.
    pub live_rate: Decimal,
    /// History of prior rate amounts for this row.
    pub rate_history: Vec<HistoryRecord<Decimal>>,
}

impl StandbyRate {
    fn matches(&self, segment_id: SegmentTemplateId, apartment_type: ApartmentType, is_married: bool) -> bool {
        self.segment_id == segment_id
            && self.apartment_type.is_none_or(|t| t == apartment_type)
            && self.is_married.is_none_or(|m| m == is_married)
    }

    fn effective_rate(&self, year: i32, month: u32) -> Decimal {
        history::resolve(
            "standby_rate",
            &self.id.to_string(),
            &self.rate_history,
            year,
            month,
            &self.live_rate,
        )
        .unwrap_or(self.live_rate)
    }
}

/// The full set of standby-rate rows, resolved by best match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StandbyRateTable {
    rates: Vec<StandbyRate>,
}

impl StandbyRateTable {
    /// Builds a table from a list of standby-rate rows.
    pub fn new(rates: Vec<StandbyRate>) -> Self {
        Self { rates }
    }

    /// Resolves the standby rate for a segment worked at `apartment_type` by
    /// a person whose marital status is `is_married`, effective for
    /// `(year, month)`.
    ///
    /// Among all matching rows, the one with the highest `priority` wins.
    /// Falls back to [`DEFAULT_STANDBY_RATE`] if no row matches.
    pub fn lookup(
        &self,
        segment_id: SegmentTemplateId,
        apartment_type: ApartmentType,
        is_married: bool,
        year: i32,
        month: u32,
    ) -> Decimal {
        self.rates
            .iter()
            .filter(|r| r.matches(segment_id, apartment_type, is_married))
            .max_by_key(|r| r.priority)
            .map(|r| r.effective_rate(year, month))
            .unwrap_or(DEFAULT_STANDBY_RATE)
    }
}
