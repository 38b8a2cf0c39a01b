//! Decomposes a single report into its typed, timed segments.
//!
//! Every policy here is driven purely by the inputs it is given — the
//! resolved [`ShiftKindClass`], apartment type, and Sabbath cache are all
//! passed in by the caller (see [`crate::models::shift_kind`]'s implicit
//! tagbur remapping, performed by [`crate::engine`] before this module is
//! ever invoked). `SegmentBuilder` itself never queries reference data.

use rust_decimal::Decimal;

use crate::constants::{
    ESCORT_FLAT_HOURLY_RATE, MINUTES_PER_DAY, MINUTES_PER_HOUR, NIGHT_SHIFT_INITIAL_WORK_MINUTES,
    NIGHT_SHIFT_STANDBY_END_MINUTES,
};
use crate::error::{EngineError, EngineResult};
use crate::models::ids::SegmentTemplateId;
use crate::models::report::Report;
use crate::models::sabbath::SabbathCache;
use crate::models::segment::{Segment, SegmentKind};
use crate::models::shift_kind::{ShiftKind, ShiftKindClass, SegmentTemplateType};
use crate::time_model::normalize_overnight;

/// Builds the ordered segment decomposition for one report.
///
/// `class` is the dispatch classification already resolved for this
/// report's (possibly tagbur-remapped) shift kind; `shift_kind` is that same
/// kind's fixed template, used only when `class` is
/// [`ShiftKindClass::FixedTemplate`].
pub fn build_segments(
    report: &Report,
    shift_kind: &ShiftKind,
    class: ShiftKindClass,
    sabbath: &SabbathCache,
    minimum_wage_hourly: Decimal,
) -> EngineResult<Vec<Segment>> {
    let (start, end) = report.normalized_span();
    if end - start > 2 * MINUTES_PER_DAY {
        return Err(EngineError::MalformedReport {
            report_id: report.id.to_string(),
            message: format!("duration exceeds 2 days after normalization: {start}..{end}"),
        });
    }

    let mut segments = Vec::new();
    let mut order_index = 0;

    if report.is_vacation {
        segments.push(marker_segment(report.id, SegmentKind::Vacation, start, end, order_index));
        order_index += 1;
    } else if report.is_sick {
        segments.push(marker_segment(report.id, SegmentKind::Sick, start, end, order_index));
        order_index += 1;
    } else {
        match class {
            ShiftKindClass::FixedTemplate => {
                segments.extend(build_from_template(report, shift_kind, start, end, &mut order_index));
            }
            ShiftKindClass::NightDynamic => {
                segments.extend(build_night_dynamic(report, start, end, &mut order_index));
            }
            ShiftKindClass::HospitalEscort | ShiftKindClass::MedicalEscort => {
                segments.extend(build_escort(
                    report,
                    start,
                    end,
                    sabbath,
                    minimum_wage_hourly,
                    &mut order_index,
                ));
            }
        }
    }

    if !report.travel_amount.is_zero() {
        segments.push(Segment {
            report_id: report.id,
            kind: SegmentKind::Travel,
            start_minute: start,
            end_minute: start,
            segment_template_id: None,
            order_index,
            priced_amount: Some(report.travel_amount),
        });
    }

    Ok(segments)
}

fn marker_segment(
    report_id: crate::models::ids::ReportId,
    kind: SegmentKind,
    start: i64,
    end: i64,
    order_index: i32,
) -> Segment {
    Segment {
        report_id,
        kind,
        start_minute: start,
        end_minute: end,
        segment_template_id: None,
        order_index,
        priced_amount: None,
    }
}

fn build_from_template(
    report: &Report,
    shift_kind: &ShiftKind,
    start: i64,
    end: i64,
    order_index: &mut i32,
) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut template: Vec<_> = shift_kind.template.iter().collect();
    template.sort_by_key(|t| t.order_index);

    for t in template {
        let (t_start, t_end) = normalize_overnight(t.start_minute, t.end_minute);
        let lo = t_start.max(start);
        let hi = t_end.min(end);
        if lo >= hi {
            continue;
        }
        let kind = match t.segment_type {
            SegmentTemplateType::Work => SegmentKind::Work,
            SegmentTemplateType::Standby => SegmentKind::Standby,
        };
        out.push(Segment {
            report_id: report.id,
            kind,
            start_minute: lo,
            end_minute: hi,
            segment_template_id: Some(t.id),
            order_index: *order_index,
            priced_amount: None,
        });
        *order_index += 1;
    }
    out
}

fn build_night_dynamic(report: &Report, start: i64, end: i64, order_index: &mut i32) -> Vec<Segment> {
    let mut out = Vec::new();
    let work1_end = (start + NIGHT_SHIFT_INITIAL_WORK_MINUTES).min(end);

    out.push(work_segment(report, start, work1_end, order_index));

    if work1_end >= end {
        return out;
    }

    let mut standby_end = (work1_end / MINUTES_PER_DAY) * MINUTES_PER_DAY + NIGHT_SHIFT_STANDBY_END_MINUTES;
    if standby_end <= work1_end {
        standby_end += MINUTES_PER_DAY;
    }
    let standby_end = standby_end.min(end);

    if standby_end > work1_end {
        out.push(Segment {
            report_id: report.id,
            kind: SegmentKind::Standby,
            start_minute: work1_end,
            end_minute: standby_end,
            segment_template_id: None,
            order_index: *order_index,
            priced_amount: None,
        });
        *order_index += 1;
    }

    if end > standby_end {
        out.push(work_segment(report, standby_end, end, order_index));
    }

    out
}

fn work_segment(report: &Report, start: i64, end: i64, order_index: &mut i32) -> Segment {
    let segment = Segment {
        report_id: report.id,
        kind: SegmentKind::Work,
        start_minute: start,
        end_minute: end,
        segment_template_id: None,
        order_index: *order_index,
        priced_amount: None,
    };
    *order_index += 1;
    segment
}

fn build_escort(
    report: &Report,
    start: i64,
    end: i64,
    sabbath: &SabbathCache,
    minimum_wage_hourly: Decimal,
    order_index: &mut i32,
) -> Vec<Segment> {
    let (entry_abs, exit_abs) = crate::time_model::sabbath_window(report.date, sabbath);
    let pieces = crate::time_model::split_by_sabbath(start, end, entry_abs, exit_abs);

    pieces
        .into_iter()
        .map(|(piece_start, piece_end, in_sabbath)| {
            let minutes = piece_end - piece_start;
            let hourly = if in_sabbath {
                minimum_wage_hourly
            } else {
                ESCORT_FLAT_HOURLY_RATE
            };
            let amount = hourly * Decimal::from(minutes) / Decimal::from(MINUTES_PER_HOUR);
            let segment = Segment {
                report_id: report.id,
                kind: SegmentKind::EscortWork,
                start_minute: piece_start,
                end_minute: piece_end,
                segment_template_id: None,
                order_index: *order_index,
                priced_amount: Some(amount),
            };
            *order_index += 1;
            segment
        })
        .collect()
}
