//! Per-shift, per-apartment housing-rate overrides, used to detect implicit
//! "tagbur" (reinforcement) shifts.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::history::{self, HistoryRecord};
use crate::models::ids::{ApartmentId, ShiftKindId};

/// The housing cluster a shift/apartment pair's override resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HousingCluster {
    /// The regular housing cluster.
    Regular,
    /// The therapeutic housing cluster.
    Therapeutic,
}

/// One override row: which cluster a given shift kind resolves to when
/// worked at a given apartment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HousingRateOverride {
    /// The shift kind this override applies to.
    pub shift_kind_id: ShiftKindId,
    /// The apartment this override applies to.
    pub apartment_id: ApartmentId,
    /// The cluster this pair currently resolves to.
    pub live_cluster: HousingCluster,
    /// History of prior cluster resolutions for this pair.
    pub cluster_history: Vec<HistoryRecord<HousingCluster>>,
}

/// The full set of housing-rate overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HousingRateTable {
    overrides: Vec<HousingRateOverride>,
}

impl HousingRateTable {
    /// Builds a table from a list of override rows.
    pub fn new(overrides: Vec<HousingRateOverride>) -> Self {
        Self { overrides }
    }

    /// Resolves the housing cluster a `(shift_kind_id, apartment_id)` pair
    /// maps to for `(year, month)`, or `None` if no override row exists for
    /// that pair (the apartment's own type governs in that case).
    pub fn resolved_cluster(
        &self,
        shift_kind_id: ShiftKindId,
        apartment_id: ApartmentId,
        year: i32,
        month: u32,
    ) -> EngineResult<Option<HousingCluster>> {
        let Some(row) = self
            .overrides
            .iter()
            .find(|o| o.shift_kind_id == shift_kind_id && o.apartment_id == apartment_id)
        else {
            return Ok(None);
        };

        let cluster = history::resolve(
            "housing_rate_override",
            &format!("{shift_kind_id}:{apartment_id}"),
            &row.cluster_history,
            year,
            month,
            &row.live_cluster,
        )?;
        Ok(Some(cluster))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_override_row_returns_none() {
        let table = HousingRateTable::new(vec![]);
        let result = table
            .resolved_cluster(ShiftKindId(105), ApartmentId(1), 2025, 6)
            .unwrap();
        assert_eq!(result, None);
    }

    /// Implicit-tagbur scenario: a therapeutic apartment's override for
    /// kind 105 resolves to the regular cluster.
    #[test]
    fn test_override_resolves_to_regular_cluster() {
        let table = HousingRateTable::new(vec![HousingRateOverride {
            shift_kind_id: ShiftKindId(105),
            apartment_id: ApartmentId(1),
            live_cluster: HousingCluster::Regular,
            cluster_history: vec![],
        }]);
        let result = table
            .resolved_cluster(ShiftKindId(105), ApartmentId(1), 2025, 6)
            .unwrap();
        assert_eq!(result, Some(HousingCluster::Regular));
    }

    #[test]
    fn test_override_history_resolution() {
        let table = HousingRateTable::new(vec![HousingRateOverride {
            shift_kind_id: ShiftKindId(105),
            apartment_id: ApartmentId(1),
            live_cluster: HousingCluster::Regular,
            cluster_history: vec![HistoryRecord {
                year: 2025,
                month: 3,
                value: HousingCluster::Therapeutic,
            }],
        }]);
        let before = table
            .resolved_cluster(ShiftKindId(105), ApartmentId(1), 2025, 2)
            .unwrap();
        let after = table
            .resolved_cluster(ShiftKindId(105), ApartmentId(1), 2025, 3)
            .unwrap();
        assert_eq!(before, Some(HousingCluster::Therapeutic));
        assert_eq!(after, Some(HousingCluster::Regular));
    }
}
