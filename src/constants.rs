//! Engine-wide constants.
//!
//! These values are fixed by award/policy and must match the reference
//! schema exactly.

use rust_decimal::Decimal;

/// Minutes in one hour.
pub const MINUTES_PER_HOUR: i64 = 60;

/// Minutes in one civil day.
pub const MINUTES_PER_DAY: i64 = 1440;

/// The work-day boundary, in minutes from midnight (08:00).
pub const WORK_DAY_START_MINUTES: i64 = 480;

/// Cumulative chain minutes up to which the 100% tier applies.
pub const REGULAR_HOURS_LIMIT: i64 = 480;

/// Cumulative chain minutes up to which the 125%/175% tier applies.
pub const OVERTIME_125_LIMIT: i64 = 600;

/// Maximum gap between two work segments that still belong to the same chain.
pub const BREAK_THRESHOLD_MINUTES: i64 = 60;

/// Overlap fraction of a standby segment with work above which it is cancelled.
pub const STANDBY_CANCEL_OVERLAP_THRESHOLD: f64 = 0.70;

/// Default standby rate (₪) used when no `StandbyRate` row matches.
pub const DEFAULT_STANDBY_RATE: Decimal = Decimal::from_parts(7000, 0, 0, false, 2);

/// Maximum amount (₪) deducted per cancelled standby segment.
pub const MAX_CANCELLED_STANDBY_DEDUCTION: Decimal = Decimal::from_parts(7000, 0, 0, false, 2);

/// Default Sabbath entry time (Friday) when no `SabbathWeek` row exists: 16:00.
pub const SHABBAT_ENTER_DEFAULT: i64 = 960;

/// Default Sabbath exit time (Saturday) when no `SabbathWeek` row exists: 22:00.
pub const SHABBAT_EXIT_DEFAULT: i64 = 1320;

/// Dynamic night-shift: minutes of work at the start of the report.
pub const NIGHT_SHIFT_INITIAL_WORK_MINUTES: i64 = 120;

/// Dynamic night-shift: the clock time (minutes from midnight) at which the
/// final work block resumes after standby (06:30).
pub const NIGHT_SHIFT_STANDBY_END_MINUTES: i64 = 390;

/// Shift-kind id: generic Friday shift using a fixed template.
pub const SHIFT_KIND_FRIDAY: i64 = 105;
/// Shift-kind id: generic Sabbath (Shabbat) shift using a fixed template.
pub const SHIFT_KIND_SHABBAT: i64 = 106;
/// Shift-kind id: dynamically decomposed night shift.
pub const SHIFT_KIND_NIGHT: i64 = 107;
/// Shift-kind id: tagbur (reinforcement) Friday shift.
pub const SHIFT_KIND_TAGBUR_FRIDAY: i64 = 108;
/// Shift-kind id: tagbur (reinforcement) Sabbath shift.
pub const SHIFT_KIND_TAGBUR_SHABBAT: i64 = 109;
/// Shift-kind id: hospital escort.
pub const SHIFT_KIND_HOSPITAL_ESCORT: i64 = 120;
/// Shift-kind id: medical escort.
pub const SHIFT_KIND_MEDICAL_ESCORT: i64 = 148;

/// Flat hourly rate (₪) paid for escort minutes outside Sabbath.
pub const ESCORT_FLAT_HOURLY_RATE: Decimal = Decimal::from_parts(3500, 0, 0, false, 2);

/// Sentinel segment-template id for the night shift's dynamically generated
/// standby block, which has no fixed-template row of its own to key a
/// standby-rate lookup by.
pub const NIGHT_STANDBY_SEGMENT_TEMPLATE_ID: i64 = 0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_standby_rate_value() {
        assert_eq!(DEFAULT_STANDBY_RATE, Decimal::new(7000, 2));
    }

    #[test]
    fn test_max_cancelled_standby_deduction_value() {
        assert_eq!(MAX_CANCELLED_STANDBY_DEDUCTION, Decimal::new(7000, 2));
    }

    #[test]
    fn test_work_day_start_matches_shabbat_defaults_ordering() {
        assert!(WORK_DAY_START_MINUTES < SHABBAT_ENTER_DEFAULT);
        assert!(SHABBAT_ENTER_DEFAULT < SHABBAT_EXIT_DEFAULT);
    }

    #[test]
    fn test_regular_hours_limit_before_overtime_limit() {
        assert!(REGULAR_HOURS_LIMIT < OVERTIME_125_LIMIT);
    }

    #[test]
    fn test_escort_flat_hourly_rate_value() {
        assert_eq!(ESCORT_FLAT_HOURLY_RATE, Decimal::new(3500, 2));
    }
}
