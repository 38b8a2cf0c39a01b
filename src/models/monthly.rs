//! Monthly aggregate results and the engine's output types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::segment::Segment;

/// The full set of tiered minute buckets and payment totals for one person,
/// one month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// Minutes paid at 100% (weekday, within the regular-hours limit).
    pub calc100: i64,
    /// Minutes paid at 125% (weekday, first overtime band).
    pub calc125: i64,
    /// Minutes paid at 150%: `calc150_overtime + calc150_shabbat`.
    pub calc150: i64,
    /// Minutes paid at 150% specifically from weekday overtime.
    pub calc150_overtime: i64,
    /// Minutes paid at 150% specifically from Sabbath work, before the
    /// pension split.
    pub calc150_shabbat: i64,
    /// Portion of `calc150_shabbat` attributed to the 100%-equivalent
    /// pension component.
    pub calc150_shabbat_100: i64,
    /// Portion of `calc150_shabbat` attributed to the 50%-equivalent
    /// pension component.
    pub calc150_shabbat_50: i64,
    /// Minutes paid at 175% (Sabbath, first overtime band).
    pub calc175: i64,
    /// Minutes paid at 200% (Sabbath, second overtime band).
    pub calc200: i64,
    /// Total minutes of kept (non-cancelled) standby.
    pub standby_minutes: i64,
    /// Total standby payment, in shekels.
    pub standby_payment: Decimal,
    /// Total vacation minutes.
    pub vacation_minutes: i64,
    /// Total vacation payment, in shekels.
    pub vacation_payment: Decimal,
    /// Total sick minutes.
    pub sick_minutes: i64,
    /// Total sick payment, in shekels (after sequence-percentage scaling).
    pub sick_payment: Decimal,
    /// Total travel reimbursement, in shekels.
    pub travel: Decimal,
    /// Total flat extras, in shekels.
    pub extras: Decimal,
}

/// The severity of a non-fatal condition the engine encountered while
/// computing a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    /// Informational; no action needed.
    Info,
    /// Worth a human's attention, but did not block computation.
    Warn,
}

/// A recoverable condition recorded during computation rather than raised
/// as an error: a malformed report that was skipped, or a standby segment
/// that fell back to the default rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineWarning {
    /// A short machine-readable code identifying the kind of warning.
    pub code: String,
    /// A human-readable description of what happened.
    pub message: String,
    /// How seriously this warning should be treated.
    pub severity: WarningSeverity,
}

impl EngineWarning {
    /// Builds an informational warning.
    pub fn info(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: WarningSeverity::Info,
        }
    }

    /// Builds a warn-level warning.
    pub fn warn(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: WarningSeverity::Warn,
        }
    }
}

/// The full result of [`crate::engine::compute_monthly_totals`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineOutcome {
    /// The computed monthly totals.
    pub totals: MonthlyTotals,
    /// Any recoverable conditions encountered along the way.
    pub warnings: Vec<EngineWarning>,
}

/// A single day's segment decomposition, for UI rendering via
/// [`crate::engine::get_daily_segments`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayView {
    /// The civil date this view covers.
    pub date: NaiveDate,
    /// All segments derived from reports on this date.
    pub segments: Vec<Segment>,
}
