//! People (guides) and their history-tracked employment status.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::history::{self, HistoryRecord};
use crate::models::ids::PersonId;

/// The attributes of a person that can change over time and affect wage
/// computation (marital status feeds standby-rate lookup; employer and
/// employee type are carried through for payroll routing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonStatus {
    /// Whether the person is married, relevant to standby-rate lookup.
    pub is_married: bool,
    /// Identifier of the person's employer of record.
    pub employer_id: i64,
    /// Employment classification (e.g. "monthly", "hourly").
    pub employee_type: String,
}

/// A person, with their current status and the history of status changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonRecord {
    /// Unique identifier of this person.
    pub id: PersonId,
    /// The person's current (live) status.
    pub live_status: PersonStatus,
    /// History of prior statuses, resolved via "valid-until" semantics.
    pub status_history: Vec<HistoryRecord<PersonStatus>>,
}

impl PersonRecord {
    /// Resolves the person's effective status for `(year, month)`.
    pub fn effective_status(&self, year: i32, month: u32) -> EngineResult<PersonStatus> {
        history::resolve(
            "person_status",
            &self.id.to_string(),
            &self.status_history,
            year,
            month,
            &self.live_status,
        )
    }
}

/// A flat lookup table of people by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonTable {
    people: Vec<PersonRecord>,
}

impl PersonTable {
    /// Builds a table from a list of person records.
    pub fn new(people: Vec<PersonRecord>) -> Self {
        Self { people }
    }

    /// Looks up a person by id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ReferenceDataMissing`] if no person with that
    /// id is present.
    pub fn get(&self, id: PersonId) -> EngineResult<&PersonRecord> {
        self.people
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| EngineError::ReferenceDataMissing {
                entity: "person".to_string(),
                id: id.to_string(),
            })
    }
}
