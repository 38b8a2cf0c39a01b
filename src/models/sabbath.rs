//! Sabbath (Shabbat) entry/exit times, tracked per calendar week.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Entry (Friday) and exit (Saturday) times for one calendar week's Sabbath.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SabbathWeek {
    /// The Friday Sabbath entry falls on.
    pub entry_date: NaiveDate,
    /// Entry time, in minutes from midnight of `entry_date`.
    pub entry_minute: i64,
    /// The Saturday Sabbath exit falls on.
    pub exit_date: NaiveDate,
    /// Exit time, in minutes from midnight of `exit_date`.
    pub exit_minute: i64,
}

/// A read-only lookup of Sabbath weeks, keyed by their Friday/Saturday dates.
///
/// Falls back to [`crate::constants::SHABBAT_ENTER_DEFAULT`] /
/// [`crate::constants::SHABBAT_EXIT_DEFAULT`] for any week with no row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SabbathCache {
    weeks: Vec<SabbathWeek>,
}

impl SabbathCache {
    /// Builds a cache from a list of weekly Sabbath rows.
    pub fn new(weeks: Vec<SabbathWeek>) -> Self {
        Self { weeks }
    }

    /// Returns the entry minute for the Sabbath beginning on `friday`, or the
    /// default if no row covers that week.
    pub fn entry_minute(&self, friday: NaiveDate) -> i64 {
        self.weeks
            .iter()
            .find(|w| w.entry_date == friday)
            .map(|w| w.entry_minute)
            .unwrap_or(crate::constants::SHABBAT_ENTER_DEFAULT)
    }

    /// Returns the exit minute for the Sabbath ending on `saturday`, or the
    /// default if no row covers that week.
    pub fn exit_minute(&self, saturday: NaiveDate) -> i64 {
        self.weeks
            .iter()
            .find(|w| w.exit_date == saturday)
            .map(|w| w.exit_minute)
            .unwrap_or(crate::constants::SHABBAT_EXIT_DEFAULT)
    }
}
