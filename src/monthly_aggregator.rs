//! Rolls tiered chain minutes, kept standby, and marker segments up into the
//! month's final totals.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::chain_wage::split_shabbat_pension;
use crate::models::day::{Chain, KeptStandby, WageTier};
use crate::models::monthly::{EngineWarning, MonthlyTotals};
use crate::models::segment::{Segment, SegmentKind};

/// A marker segment (vacation, sick, travel, or escort work) paired with
/// the civil date of the report it came from, used to compute sick-sequence
/// percentages across the month.
pub struct DatedSegment<'a> {
    /// The segment itself.
    pub segment: &'a Segment,
    /// The civil date of the report the segment belongs to.
    pub report_date: NaiveDate,
}

/// Aggregates one person's tiered chains, kept standby, and marker segments
/// into the month's [`MonthlyTotals`], returning any recoverable warnings
/// alongside it.
pub fn aggregate_month(
    chains: &[Chain],
    kept_standby: &[KeptStandby],
    cancelled_standby_deduction: Decimal,
    cancelled_standby_residual: Decimal,
    marker_segments: &[DatedSegment<'_>],
    minimum_wage_hourly: Decimal,
) -> (MonthlyTotals, Vec<EngineWarning>) {
    let mut totals = MonthlyTotals::default();
    let mut warnings = Vec::new();

    for chain in chains {
        for contribution in &chain.contributions {
            match contribution.tier {
                WageTier::Calc100 => totals.calc100 += contribution.minutes,
                WageTier::Calc125 => totals.calc125 += contribution.minutes,
                WageTier::Calc150Overtime => totals.calc150_overtime += contribution.minutes,
                WageTier::Calc150Shabbat => totals.calc150_shabbat += contribution.minutes,
                WageTier::Calc175 => totals.calc175 += contribution.minutes,
                WageTier::Calc200 => totals.calc200 += contribution.minutes,
            }
        }
    }
    totals.calc150 = totals.calc150_overtime + totals.calc150_shabbat;
    let (shabbat_100, shabbat_50) = split_shabbat_pension(totals.calc150_shabbat);
    totals.calc150_shabbat_100 = shabbat_100;
    totals.calc150_shabbat_50 = shabbat_50;

    for standby in kept_standby {
        let duration = standby.duration_minutes();
        totals.standby_minutes += duration;
        totals.standby_payment += hourly_to_amount(standby.hourly_rate, duration);
    }
    totals.standby_payment += cancelled_standby_residual;

    if !cancelled_standby_deduction.is_zero() {
        warnings.push(EngineWarning::info(
            "cancelled_standby_deduction",
            format!("{cancelled_standby_deduction} deducted from cancelled standby segments this month"),
        ));
    }

    let mut sick_dates: Vec<(NaiveDate, i64)> = Vec::new();

    for dated in marker_segments {
        let duration = dated.segment.duration_minutes();
        match dated.segment.kind {
            SegmentKind::Vacation => {
                totals.vacation_minutes += duration;
                totals.vacation_payment += hourly_to_amount(minimum_wage_hourly, duration);
            }
            SegmentKind::Sick => {
                totals.sick_minutes += duration;
                sick_dates.push((dated.report_date, duration));
            }
            SegmentKind::Travel => {
                totals.travel += dated.segment.priced_amount.unwrap_or(Decimal::ZERO);
            }
            SegmentKind::EscortWork => {
                totals.extras += dated.segment.priced_amount.unwrap_or(Decimal::ZERO);
            }
            SegmentKind::Work | SegmentKind::Standby => {}
        }
    }

    totals.sick_payment = sick_payment_total(sick_dates, minimum_wage_hourly);

    (totals, warnings)
}

fn hourly_to_amount(hourly_rate: Decimal, minutes: i64) -> Decimal {
    hourly_rate * Decimal::from(minutes) / Decimal::from(crate::constants::MINUTES_PER_HOUR)
}

/// Scales each sick day's pay by its position in a consecutive run of sick
/// calendar dates: day 1 is unpaid, days 2-3 pay 50%, day 4 onward pays
/// 100%. The run resets whenever a sick date isn't exactly one day after
/// the previous one.
fn sick_payment_total(mut sick_dates: Vec<(NaiveDate, i64)>, minimum_wage_hourly: Decimal) -> Decimal {
    sick_dates.sort_by_key(|(date, _)| *date);

    let mut total = Decimal::ZERO;
    let mut run_position = 0u32;
    let mut prev_date: Option<NaiveDate> = None;

    for (date, duration) in sick_dates {
        run_position = match prev_date {
            Some(p) if date == p.succ_opt().expect("date overflow") => run_position + 1,
            _ => 1,
        };
        prev_date = Some(date);

        let fraction = match run_position {
            1 => Decimal::ZERO,
            2 | 3 => Decimal::new(50, 2),
            _ => Decimal::ONE,
        };
        total += hourly_to_amount(minimum_wage_hourly, duration) * fraction;
    }

    total
}
