//! Apartments and their history-tracked housing type.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::history::{self, HistoryRecord};
use crate::models::ids::ApartmentId;

/// The two housing classifications an apartment can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApartmentType {
    /// A regular residential apartment.
    Regular,
    /// A therapeutic (higher-acuity) apartment.
    Therapeutic,
}

/// An apartment, with its current type and the history of type changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApartmentRecord {
    /// Unique identifier of this apartment.
    pub id: ApartmentId,
    /// The apartment's current (live) type.
    pub live_type: ApartmentType,
    /// History of prior types, resolved via "valid-until" semantics.
    pub type_history: Vec<HistoryRecord<ApartmentType>>,
}

impl ApartmentRecord {
    /// Resolves the apartment's effective type for `(year, month)`.
    pub fn effective_type(&self, year: i32, month: u32) -> EngineResult<ApartmentType> {
        history::resolve(
            "apartment_type",
            &self.id.to_string(),
            &self.type_history,
            year,
            month,
            &self.live_type,
        )
    }
}

/// A flat lookup table of apartments by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApartmentTable {
    apartments: Vec<ApartmentRecord>,
}

impl ApartmentTable {
    /// Builds a table from a list of apartment records.
    pub fn new(apartments: Vec<ApartmentRecord>) -> Self {
        Self { apartments }
    }

    /// Looks up an apartment by id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ReferenceDataMissing`] if no apartment with
    /// that id is present.
    pub fn get(&self, id: ApartmentId) -> EngineResult<&ApartmentRecord> {
        self.apartments
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| EngineError::ReferenceDataMissing {
                entity: "apartment".to_string(),
                id: id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ApartmentRecord {
        ApartmentRecord {
            id: ApartmentId(1),
            live_type: ApartmentType::Therapeutic,
            type_history: vec![HistoryRecord {
                year: 2025,
                month: 3,
                value: ApartmentType::Regular,
            }],
        }
    }

    #[test]
    fn test_effective_type_before_history_key() {
        let apt = record();
        assert_eq!(apt.effective_type(2025, 2).unwrap(), ApartmentType::Regular);
    }

    #[test]
    fn test_effective_type_after_history_key_uses_live() {
        let apt = record();
        assert_eq!(
            apt.effective_type(2025, 3).unwrap(),
            ApartmentType::Therapeutic
        );
    }

    #[test]
    fn test_table_lookup_missing_apartment_errors() {
        let table = ApartmentTable::new(vec![]);
        let result = table.get(ApartmentId(99));
        assert!(matches!(
            result,
            Err(EngineError::ReferenceDataMissing { .. })
        ));
    }

    #[test]
    fn test_table_lookup_found() {
        let table = ApartmentTable::new(vec![record()]);
        assert_eq!(table.get(ApartmentId(1)).unwrap().id, ApartmentId(1));
    }
}
