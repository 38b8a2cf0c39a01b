//! Wires TimeModel, HistoryResolver, SegmentBuilder, DailyMap,
//! ChainWageEngine, and MonthlyAggregator into the two entry points the
//! rest of the system calls: one month's totals, and one month's per-day
//! segment view for UI rendering.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::chain_wage::compute_chains;
use crate::daily_map::{build_daily_map, place_segment};
use crate::error::{EngineError, EngineResult};
use crate::models::housing::HousingCluster;
use crate::models::ids::{PersonId, ShiftKindId};
use crate::models::monthly::{DayView, EngineOutcome, EngineWarning};
use crate::models::person::PersonRecord;
use crate::models::reference_snapshot::{month_bounds, ReferenceSnapshot};
use crate::models::report::Report;
use crate::models::segment::{Segment, SegmentKind};
use crate::models::shift_kind::{classify_shift_kind, tagbur_counterpart};
use crate::models::ApartmentType;
use crate::monthly_aggregator::{aggregate_month, DatedSegment};

/// Computes one person's wage totals for `(year, month)`.
///
/// # Errors
///
/// Returns an error if the person is unknown, or a report references a
/// shift kind, apartment, or minimum-wage date with no matching reference
/// row. A report with a malformed duration is skipped and recorded as a
/// warning instead of failing the whole month.
pub fn compute_monthly_totals(
    snapshot: &ReferenceSnapshot,
    person_id: PersonId,
    year: i32,
    month: u32,
) -> EngineResult<EngineOutcome> {
    let person = snapshot.people.get(person_id)?;
    let reports = snapshot.reports_for_month(person_id, year, month)?;
    let (month_start, month_end) = month_bounds(year, month)?;

    let mut warnings = Vec::new();
    let mut built: Vec<(Report, Vec<Segment>)> = Vec::new();

    for report in &reports {
        match build_report_segments(snapshot, report) {
            Ok(segments) => built.push(((*report).clone(), segments)),
            Err(EngineError::MalformedReport { report_id, message }) => {
                debug!(report_id = %report_id, message = %message, "skipped malformed report");
                warnings.push(EngineWarning::warn(
                    "malformed_report",
                    format!("report {report_id} skipped: {message}"),
                ));
            }
            Err(other) => return Err(other),
        }
    }

    let mut placed = Vec::new();
    let mut marker_owned: Vec<(Segment, NaiveDate)> = Vec::new();

    for (report, segments) in &built {
        let (apartment_type, is_married) = resolve_report_context(snapshot, person, report)?;
        for segment in segments {
            match segment.kind {
                // Work/standby segments are attributed to a work-day that
                // can land one day outside `report.date`, so they're placed
                // unconditionally here and filtered by resolved work-day
                // below, after `build_daily_map` runs.
                SegmentKind::Work | SegmentKind::Standby => {
                    placed.push(place_segment(report.date, segment, apartment_type, is_married));
                }
                // Vacation/sick/travel/escort markers carry no work-day
                // concept of their own; they're keyed by civil date, so a
                // report pulled in only by the widened window (the last day
                // of the previous month, or the first of the next) must be
                // filtered out here directly.
                SegmentKind::Vacation | SegmentKind::Sick | SegmentKind::Travel | SegmentKind::EscortWork => {
                    if report.date >= month_start && report.date <= month_end {
                        marker_owned.push((segment.clone(), report.date));
                    }
                }
            }
        }
    }

    let daily_results = build_daily_map(placed, |template_id, apartment_type, is_married| {
        snapshot
            .standby_rates
            .lookup(template_id, apartment_type, is_married, year, month)
    });
    let daily_results: Vec<_> = daily_results
        .into_iter()
        .filter(|day| day.work_day >= month_start && day.work_day <= month_end)
        .collect();
    debug!(days = daily_results.len(), "built daily map");

    let mut raw_chains = Vec::new();
    let mut kept_standby = Vec::new();
    let mut cancelled_standby_deduction = Decimal::ZERO;
    let mut cancelled_standby_residual = Decimal::ZERO;
    for day in &daily_results {
        raw_chains.extend(day.raw_chains.iter().cloned());
        kept_standby.extend(day.kept_standby.iter().cloned());
        cancelled_standby_deduction += day.cancelled_standby_deduction;
        cancelled_standby_residual += day.cancelled_standby_residual;
    }

    let chains = compute_chains(&raw_chains, &snapshot.sabbath);
    debug!(chains = chains.len(), "tiered work chains");

    let minimum_wage_hourly = snapshot.minimum_wage.hourly_rate_on(month_start)?;

    let marker_segments: Vec<DatedSegment> = marker_owned
        .iter()
        .map(|(segment, date)| DatedSegment {
            segment,
            report_date: *date,
        })
        .collect();

    let (totals, aggregator_warnings) = aggregate_month(
        &chains,
        &kept_standby,
        cancelled_standby_deduction,
        cancelled_standby_residual,
        &marker_segments,
        minimum_wage_hourly,
    );
    warnings.extend(aggregator_warnings);

    Ok(EngineOutcome { totals, warnings })
}

fn build_report_segments(snapshot: &ReferenceSnapshot, report: &Report) -> EngineResult<Vec<Segment>> {
    let year = report.date.year();
    let month = report.date.month();

    let apartment = snapshot.apartments.get(report.apartment_id)?;
    let apartment_type = apartment.effective_type(year, month)?;

    let effective_shift_kind_id = resolve_effective_shift_kind(snapshot, report, apartment_type, year, month)?;
    let shift_kind = snapshot.shift_kinds.get(effective_shift_kind_id)?;
    let class = classify_shift_kind(effective_shift_kind_id)?;
    let minimum_wage_hourly = snapshot.minimum_wage.hourly_rate_on(report.date)?;

    crate::segment_builder::build_segments(report, shift_kind, class, &snapshot.sabbath, minimum_wage_hourly)
}

/// Resolves a report's effective shift-kind id, remapping a Friday/Sabbath
/// kind worked at a therapeutic apartment to its tagbur counterpart when
/// that pair's housing-rate override resolves to the regular cluster.
fn resolve_effective_shift_kind(
    snapshot: &ReferenceSnapshot,
    report: &Report,
    apartment_type: ApartmentType,
    year: i32,
    month: u32,
) -> EngineResult<ShiftKindId> {
    if apartment_type != ApartmentType::Therapeutic {
        return Ok(report.shift_kind_id);
    }

    let resolved_cluster =
        snapshot
            .housing_rates
            .resolved_cluster(report.shift_kind_id, report.apartment_id, year, month)?;

    if resolved_cluster == Some(HousingCluster::Regular) {
        if let Some(tagbur_id) = tagbur_counterpart(report.shift_kind_id) {
            warn!(
                shift_kind_id = report.shift_kind_id.0,
                tagbur_id = tagbur_id.0,
                "remapped implicit tagbur shift"
            );
            return Ok(tagbur_id);
        }
    }

    Ok(report.shift_kind_id)
}

/// Returns the per-day segment decomposition for `(year, month)`, for UI
/// rendering rather than monthly aggregation.
///
/// # Errors
///
/// Same error conditions as [`compute_monthly_totals`]; a malformed report
/// is silently omitted from the returned view rather than surfaced as a
/// warning (no warnings channel exists for this call).
pub fn get_daily_segments(
    snapshot: &ReferenceSnapshot,
    person_id: PersonId,
    year: i32,
    month: u32,
) -> EngineResult<Vec<DayView>> {
    let person = snapshot.people.get(person_id)?;
    let reports = snapshot.reports_for_month(person_id, year, month)?;
    let (month_start, month_end) = month_bounds(year, month)?;

    let mut by_date: BTreeMap<NaiveDate, Vec<Segment>> = BTreeMap::new();

    for report in &reports {
        let segments = match build_report_segments(snapshot, report) {
            Ok(segments) => segments,
            Err(EngineError::MalformedReport { .. }) => continue,
            Err(other) => return Err(other),
        };
        let (apartment_type, is_married) = resolve_report_context(snapshot, person, report)?;

        for segment in segments {
            // Work/standby segments are grouped by their resolved work-day,
            // which can fall a day outside `report.date`; markers have no
            // work-day of their own and are grouped by civil date instead.
            let day_key = match segment.kind {
                SegmentKind::Work | SegmentKind::Standby => {
                    place_segment(report.date, &segment, apartment_type, is_married).work_day
                }
                SegmentKind::Vacation | SegmentKind::Sick | SegmentKind::Travel | SegmentKind::EscortWork => {
                    report.date
                }
            };
            if day_key < month_start || day_key > month_end {
                continue;
            }
            by_date.entry(day_key).or_default().push(segment);
        }
    }

    Ok(by_date
        .into_iter()
        .map(|(date, segments)| DayView { date, segments })
        .collect())
}

/// Resolves the apartment type and marital status in effect for a report's
/// own date, so a guide who changes apartment or marital status mid-month
/// is priced correctly for every occurrence rather than off one value
/// bound for the whole person-month.
fn resolve_report_context(
    snapshot: &ReferenceSnapshot,
    person: &PersonRecord,
    report: &Report,
) -> EngineResult<(ApartmentType, bool)> {
    let year = report.date.year();
    let month = report.date.month();
    let apartment = snapshot.apartments.get(report.apartment_id)?;
    let apartment_type = apartment.effective_type(year, month)?;
    let status = person.effective_status(year, month)?;
    Ok((apartment_type, status.is_married))
}
