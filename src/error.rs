//! Error types for the wage computation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during wage computation.

use thiserror::Error;

/// The main error type for the wage engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the computation pipeline.
///
/// # Example
///
/// ```
/// use guide_wage_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A referenced shift-kind, apartment, or person was not found in the
    /// reference snapshot. Fails the computation for the whole person-month.
    #[error("reference data missing: {entity} '{id}'")]
    ReferenceDataMissing {
        /// The kind of entity that was missing (e.g. "shift_kind", "apartment").
        entity: String,
        /// The identifier that was looked up.
        id: String,
    },

    /// A report had a negative duration after overnight normalization, or a
    /// shift-template segment fell outside the valid 0..2880 minute range.
    /// The report is skipped, not fatal to the month.
    #[error("malformed report '{report_id}': {message}")]
    MalformedReport {
        /// The id of the offending report.
        report_id: String,
        /// A description of what made the report malformed.
        message: String,
    },

    /// Two history rows shared the same (entity, year, month) key, which the
    /// `UNIQUE(entity_id, year, month)` constraint should forbid. Treated as
    /// fatal, identically to `ReferenceDataMissing`.
    #[error("ambiguous history for {entity} '{id}' at {year}-{month:02}")]
    HistoryLookupAmbiguity {
        /// The kind of entity whose history was ambiguous.
        entity: String,
        /// The identifier of the entity.
        id: String,
        /// The year of the ambiguous history key.
        year: i32,
        /// The month of the ambiguous history key.
        month: u32,
    },

    /// A general calculation error, used for conditions that do not fit a
    /// more specific variant (e.g. an internal invariant violation).
    #[error("calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },

    /// Configuration / fixture file was not found at the specified path.
    /// Only raised by [`crate::config::ConfigLoader`], never by the engine.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration / fixture file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The (year, month) is administratively locked. Modeled for schema
    /// completeness; this crate's read-only engine never constructs it —
    /// month-lock enforcement belongs to write-side callers.
    #[error("month {year}-{month:02} is locked")]
    MonthLocked {
        /// The locked year.
        year: i32,
        /// The locked month.
        month: u32,
    },
}

/// A type alias for Results that return [`EngineError`].
pub type EngineResult<T> = Result<T, EngineError>;
