//! Month locking, modeled for schema completeness.
//!
//! Locking a payroll month is a write-side concern owned by the ingestion
//! system; this engine never consults these rows (see
//! [`crate::error::EngineError::MonthLocked`]).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single month's lock state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthLock {
    /// The calendar year this lock applies to.
    pub year: i32,
    /// The calendar month this lock applies to.
    pub month: u32,
    /// Whether the month is currently locked for edits.
    pub locked: bool,
    /// When the month was last locked, if it ever has been.
    pub locked_at: Option<NaiveDateTime>,
}
