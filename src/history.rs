//! History resolution ("valid-until" lookup) for mutable reference attributes.
//!
//! Several reference attributes (apartment type, person marital status and
//! employer, standby rate amounts) can change over time. Rather than storing
//! only the current value, the schema keeps a history table alongside the
//! live table: a history row `(year, month, value)` records the value that
//! was in effect *through the month immediately before* `(year, month)` — the
//! row's own (year, month) names the first month in which a newer value
//! (either a later history row, or the live table) took over.
//!
//! To resolve the value that was effective for `(target_year, target_month)`:
//! find the history row with the smallest `(year, month)` that is still
//! strictly greater than `(target_year, target_month)`; its value is what
//! was in effect back then. If no such row exists, the target month is
//! already at or after every row's key, so the live table value governs.
//!
//! This module is pure: [`resolve`] takes its inputs by reference and returns
//! a value or an error, with no hidden state. A single computation resolves
//! each entity's attributes once (in [`crate::engine`], while building the
//! per-entity effective view for the target month) and reuses the result for
//! every report that touches that entity, which is all the memoization a
//! single-month computation needs.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One row of a history table: the value that was effective up to (but not
/// including) `(year, month)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord<T> {
    /// The first year from which this row's value no longer applies.
    pub year: i32,
    /// The first month (within `year`) from which this row's value no longer applies.
    pub month: u32,
    /// The value that was effective through the month before `(year, month)`.
    pub value: T,
}

/// Resolves the effective value of an attribute for `(target_year,
/// target_month)`, given its history rows and its current live value.
///
/// # Errors
///
/// Returns [`EngineError::HistoryLookupAmbiguity`] if more than one history
/// row shares the chosen `(year, month)` key — a violation of the schema's
/// `UNIQUE(entity_id, year, month)` constraint.
pub fn resolve<T: Clone>(
    entity: &str,
    id: &str,
    history: &[HistoryRecord<T>],
    target_year: i32,
    target_month: u32,
    live_value: &T,
) -> EngineResult<T> {
    let target = (target_year, target_month);

    let mut candidates: Vec<&HistoryRecord<T>> = history
        .iter()
        .filter(|r| (r.year, r.month) > target)
        .collect();
    candidates.sort_by_key(|r| (r.year, r.month));

    let Some(first) = candidates.first() else {
        return Ok(live_value.clone());
    };
    let chosen_key = (first.year, first.month);

    let ambiguous = candidates
        .iter()
        .skip(1)
        .any(|r| (r.year, r.month) == chosen_key);
    if ambiguous {
        return Err(EngineError::HistoryLookupAmbiguity {
            entity: entity.to_string(),
            id: id.to_string(),
            year: chosen_key.0,
            month: chosen_key.1,
        });
    }

    Ok(first.value.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(year: i32, month: u32, value: &str) -> HistoryRecord<String> {
        HistoryRecord {
            year,
            month,
            value: value.to_string(),
        }
    }

    /// HR-001: no history rows falls back to the live value.
    #[test]
    fn test_no_history_uses_live_value() {
        let result = resolve("person_status", "1", &[], 2025, 5, &"live".to_string());
        assert_eq!(result.unwrap(), "live");
    }

    /// HR-002: a history row in the future relative to target still applies
    /// if it is the earliest row strictly after target.
    #[test]
    fn test_earliest_future_row_applies() {
        let history = vec![rec(2025, 3, "old"), rec(2025, 6, "older_still")];
        let result = resolve("person_status", "1", &history, 2025, 2, &"live".to_string());
        assert_eq!(result.unwrap(), "old");
    }

    /// HR-003: target month on/after all history rows uses the live value.
    #[test]
    fn test_target_after_all_history_uses_live() {
        let history = vec![rec(2025, 3, "old")];
        let result = resolve("person_status", "1", &history, 2025, 4, &"live".to_string());
        assert_eq!(result.unwrap(), "live");
    }

    /// HR-004: target month exactly equal to a history row's key is already
    /// at/after the point where the row's value stopped applying, so the
    /// live value governs.
    #[test]
    fn test_target_equal_to_history_key_uses_live() {
        let history = vec![rec(2025, 3, "old")];
        let result = resolve("person_status", "1", &history, 2025, 3, &"live".to_string());
        assert_eq!(result.unwrap(), "live");
    }

    /// HR-005: marital status changes via history row (2025, 03,
    /// is_married=false); 2025-02 uses false, 2025-03+ uses the live value.
    #[test]
    fn test_marital_status_valid_until_scenario() {
        let history = vec![HistoryRecord {
            year: 2025,
            month: 3,
            value: false,
        }];

        let feb = resolve("person_status", "7", &history, 2025, 2, &true).unwrap();
        assert!(!feb);

        let mar = resolve("person_status", "7", &history, 2025, 3, &true).unwrap();
        assert!(mar);

        let apr = resolve("person_status", "7", &history, 2025, 4, &true).unwrap();
        assert!(apr);
    }

    /// HR-006: duplicate history rows at the same chosen key are ambiguous.
    #[test]
    fn test_duplicate_history_key_is_ambiguous() {
        let history = vec![rec(2025, 3, "a"), rec(2025, 3, "b")];
        let result = resolve("person_status", "1", &history, 2025, 1, &"live".to_string());
        match result {
            Err(EngineError::HistoryLookupAmbiguity { year, month, .. }) => {
                assert_eq!((year, month), (2025, 3));
            }
            other => panic!("expected HistoryLookupAmbiguity, got {other:?}"),
        }
    }

    /// HR-007: unordered input history rows are still resolved correctly.
    #[test]
    fn test_unordered_history_rows() {
        let history = vec![rec(2025, 8, "c"), rec(2025, 2, "a"), rec(2025, 5, "b")];
        let result = resolve("person_status", "1", &history, 2025, 3, &"live".to_string());
        assert_eq!(result.unwrap(), "b");
    }
}
