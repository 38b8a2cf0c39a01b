//! Derived per-work-day results: chains, tiered contributions, and kept
//! standby entries.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A wage tier a chain-minute can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WageTier {
    /// Weekday, first 480 cumulative minutes: 100%.
    Calc100,
    /// Weekday, minutes 480-599 cumulative: 125%.
    Calc125,
    /// Weekday, minutes 600+ cumulative: 150% (overtime).
    Calc150Overtime,
    /// Sabbath, first 480 cumulative minutes: 150%.
    Calc150Shabbat,
    /// Sabbath, minutes 480-599 cumulative: 175%.
    Calc175,
    /// Sabbath, minutes 600+ cumulative: 200%.
    Calc200,
}

/// A single tier bucket's contribution from one chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainContribution {
    /// The wage tier this slice of minutes falls into.
    pub tier: WageTier,
    /// How many minutes of the chain fall into `tier`.
    pub minutes: i64,
}

/// A maximal run of work segments with no gap of 60 minutes or more between
/// consecutive members, decomposed into tiered contributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chain {
    /// The work-day this chain belongs to.
    pub work_day: NaiveDate,
    /// The tiered minute contributions making up this chain, in chain order.
    pub contributions: Vec<ChainContribution>,
}

impl Chain {
    /// Total minutes across all tiers in this chain.
    pub fn total_minutes(&self) -> i64 {
        self.contributions.iter().map(|c| c.minutes).sum()
    }
}

/// A standby segment that survived cancellation, with its resolved payment
/// rate (per hour) already attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeptStandby {
    /// Start minute (from the work-day's 08:00 anchor date) of the kept span.
    pub start_minute: i64,
    /// End minute of the kept span.
    pub end_minute: i64,
    /// The hourly rate resolved for this standby segment.
    pub hourly_rate: Decimal,
}

impl KeptStandby {
    /// Duration of the kept standby span, in minutes.
    pub fn duration_minutes(&self) -> i64 {
        self.end_minute - self.start_minute
    }
}

/// The full derived result for one person's one work-day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyResult {
    /// The work-day (08:00-anchored) this result covers.
    pub work_day: NaiveDate,
    /// Chains formed from this day's work segments.
    pub chains: Vec<Chain>,
    /// Standby segments that were not cancelled.
    pub kept_standby: Vec<KeptStandby>,
    /// Cumulative cancelled-standby deduction for this day, in shekels
    /// (informational; bounded per segment by
    /// [`crate::constants::MAX_CANCELLED_STANDBY_DEDUCTION`]).
    pub cancelled_standby_deduction: Decimal,
    /// Portion of cancelled-standby amounts still owed because the
    /// segment's full rate exceeded the deduction cap.
    pub cancelled_standby_residual: Decimal,
}
