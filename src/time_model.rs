//! Work-day boundaries, minute normalization, and Sabbath detection.
//!
//! The organization's work-day runs 08:00 → 08:00 the next civil day, not
//! midnight to midnight. Every other component (segment building, chain
//! formation, tier assignment) is expressed in terms of the primitives here.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::constants::{MINUTES_PER_DAY, WORK_DAY_START_MINUTES};
use crate::models::SabbathCache;

/// Adds 1440 to `end_minute` if the interval would otherwise be empty or
/// backwards, i.e. the report runs past midnight.
///
/// # Example
///
/// ```
/// use guide_wage_engine::time_model::normalize_overnight;
///
/// assert_eq!(normalize_overnight(480, 960), (480, 960));
/// assert_eq!(normalize_overnight(1320, 120), (1320, 1560));
/// ```
pub fn normalize_overnight(start_minute: i64, end_minute: i64) -> (i64, i64) {
    if end_minute <= start_minute {
        (start_minute, end_minute + MINUTES_PER_DAY)
    } else {
        (start_minute, end_minute)
    }
}

/// Returns the work-day (08:00 → 08:00) a report on civil date `date`
/// belongs to, given its normalized end minute.
///
/// A report whose normalized end is at or before 08:00 on `date` is
/// attributed to the *previous* civil day's work-day (an overnight report
/// that finishes in the early morning still belongs to the shift that
/// started the evening before). Every other report belongs to `date`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use guide_wage_engine::time_model::work_day_for;
///
/// let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
/// // Report spans 22:00 (prev day) .. 06:00 -> normalized end is 360, <= 480.
/// assert_eq!(work_day_for(date, 360), date.pred_opt().unwrap());
/// // Report spans 08:00..16:00 -> belongs to `date` itself.
/// assert_eq!(work_day_for(date, 960), date);
/// ```
pub fn work_day_for(date: NaiveDate, normalized_end_minute: i64) -> NaiveDate {
    if normalized_end_minute <= WORK_DAY_START_MINUTES {
        date.pred_opt().expect("NaiveDate underflow")
    } else {
        date
    }
}

/// Determines whether `minute_in_day` on civil date `date` falls within the
/// Sabbath, per the entry/exit times recorded in `sabbath_cache`.
///
/// `minute_in_day` may be `>= 1440`, representing minutes past midnight of
/// the *next* civil date (the normal output of [`normalize_overnight`]); this
/// function reinterprets such minutes against the correct date and its
/// weekday before testing Sabbath membership.
///
/// - Friday before the week's entry minute: not Sabbath.
/// - Friday at/after the entry minute: Sabbath.
/// - Saturday before the week's exit minute: Sabbath.
/// - Saturday at/after the exit minute: not Sabbath.
/// - Any other day: not Sabbath.
pub fn is_sabbath_minute(date: NaiveDate, minute_in_day: i64, sabbath_cache: &SabbathCache) -> bool {
    let (effective_date, minute) = reinterpret_minute(date, minute_in_day);

    match effective_date.weekday() {
        Weekday::Fri => minute >= sabbath_cache.entry_minute(effective_date),
        Weekday::Sat => minute < sabbath_cache.exit_minute(effective_date),
        _ => false,
    }
}

/// Finds the Friday-entry/Saturday-exit Sabbath window for the week nearest
/// `anchor`, expressed as absolute minutes anchored to `anchor`'s own
/// midnight — the same coordinate system [`normalize_overnight`] produces.
pub fn sabbath_window(anchor: NaiveDate, sabbath: &crate::models::SabbathCache) -> (i64, i64) {
    let days_since_sunday = anchor.weekday().num_days_from_sunday() as i64;
    let friday_offset = 5 - days_since_sunday;
    let friday = anchor
        .checked_add_signed(chrono::Duration::days(friday_offset))
        .expect("date overflow");
    let saturday = friday.succ_opt().expect("date overflow");
    debug_assert_eq!(friday.weekday(), Weekday::Fri);

    let entry_abs = friday_offset * MINUTES_PER_DAY + sabbath.entry_minute(friday);
    let exit_abs = (friday_offset + 1) * MINUTES_PER_DAY + sabbath.exit_minute(saturday);
    (entry_abs, exit_abs)
}

/// Splits `[start, end)` into up to three pieces at the Sabbath window
/// `[entry_abs, exit_abs)`, each piece tagged with whether it falls inside
/// the Sabbath.
pub fn split_by_sabbath(start: i64, end: i64, entry_abs: i64, exit_abs: i64) -> Vec<(i64, i64, bool)> {
    let lo = entry_abs.max(start);
    let hi = exit_abs.min(end);
    if lo >= hi {
        return vec![(start, end, false)];
    }
    let mut pieces = Vec::new();
    if start < lo {
        pieces.push((start, lo, false));
    }
    pieces.push((lo, hi, true));
    if hi < end {
        pieces.push((hi, end, false));
    }
    pieces
}

/// Rolls `minute_in_day` (which may be `>= 1440`) forward onto the civil
/// date it actually falls on, returning that date and the minute within it.
fn reinterpret_minute(date: NaiveDate, minute_in_day: i64) -> (NaiveDate, i64) {
    let mut date = date;
    let mut minute = minute_in_day;
    while minute >= MINUTES_PER_DAY {
        date = date
            .checked_add_days(Days::new(1))
            .expect("NaiveDate overflow");
        minute -= MINUTES_PER_DAY;
    }
    (date, minute)
}
