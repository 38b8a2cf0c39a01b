//! Groups one person's segments by work-day, resolves standby cancellation,
//! and forms work chains.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::constants::{BREAK_THRESHOLD_MINUTES, MAX_CANCELLED_STANDBY_DEDUCTION, MINUTES_PER_DAY, MINUTES_PER_HOUR, NIGHT_STANDBY_SEGMENT_TEMPLATE_ID, STANDBY_CANCEL_OVERLAP_THRESHOLD, WORK_DAY_START_MINUTES};
use crate::models::apartment::ApartmentType;
use crate::models::day::KeptStandby;
use crate::models::ids::SegmentTemplateId;
use crate::models::segment::{Segment, SegmentKind};
use crate::time_model::work_day_for;

/// A segment relocated onto its work-day's own midnight-anchored timeline:
/// `local_start`/`local_end` are minutes from midnight of `work_day`, so a
/// segment attributed to the previous work-day (an early-morning tail)
/// carries values `>= 1440`.
#[derive(Debug, Clone, Copy)]
pub struct PlacedSegment {
    /// The work-day this segment was attributed to.
    pub work_day: NaiveDate,
    /// Start minute from midnight of `work_day`.
    pub local_start: i64,
    /// End minute from midnight of `work_day`.
    pub local_end: i64,
    /// Work, standby, vacation, sick, travel, or escort.
    pub kind: SegmentKind,
    /// The template this piece was derived from, if any.
    pub segment_template_id: Option<SegmentTemplateId>,
    /// Stable ordering key among segments of the same report.
    pub order_index: i32,
    /// The apartment type in effect for the owning report, used to resolve
    /// this segment's own standby rate rather than one shared across the
    /// whole person-month.
    pub apartment_type: ApartmentType,
    /// The marital status in effect for the owning report, same reasoning.
    pub is_married: bool,
}

/// Places a segment from `report_date` onto its work-day's midnight-anchored
/// timeline, carrying the apartment type and marital status in effect for
/// the owning report so standby-rate resolution can stay per-occurrence.
pub fn place_segment(
    report_date: NaiveDate,
    segment: &Segment,
    apartment_type: ApartmentType,
    is_married: bool,
) -> PlacedSegment {
    let work_day = work_day_for(report_date, segment.end_minute);
    let day_offset = (report_date - work_day).num_days();
    PlacedSegment {
        work_day,
        local_start: day_offset * MINUTES_PER_DAY + segment.start_minute,
        local_end: day_offset * MINUTES_PER_DAY + segment.end_minute,
        kind: segment.kind,
        segment_template_id: segment.segment_template_id,
        order_index: segment.order_index,
        apartment_type,
        is_married,
    }
}

/// A maximal run of work pieces (pre-tiering) belonging to one work-day,
/// plus whether it touches the 08:00 work-day boundary on either end — the
/// signal [`crate::chain_wage`] uses to carry the cumulative minute counter
/// across adjacent work-days.
#[derive(Debug, Clone, PartialEq)]
pub struct RawChain {
    /// The work-day this chain belongs to.
    pub work_day: NaiveDate,
    /// Ordered, non-overlapping work pieces, in local minute coordinates.
    pub pieces: Vec<(i64, i64)>,
    /// Whether the chain's first piece starts exactly at this work-day's
    /// own 08:00 boundary.
    pub starts_at_boundary: bool,
    /// Whether the chain's last piece ends exactly at the *next* work-day's
    /// 08:00 boundary.
    pub ends_at_boundary: bool,
}

impl RawChain {
    /// Total minutes across all pieces.
    pub fn total_minutes(&self) -> i64 {
        self.pieces.iter().map(|(s, e)| e - s).sum()
    }
}

/// The per-work-day output of [`build_daily_map`], before chain-wage tiering.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyMapResult {
    /// The work-day this result covers.
    pub work_day: NaiveDate,
    /// Chains of work formed on this day.
    pub raw_chains: Vec<RawChain>,
    /// Standby segments that survived cancellation.
    pub kept_standby: Vec<KeptStandby>,
    /// Summed deduction from cancelled standby segments, capped per segment.
    pub cancelled_standby_deduction: Decimal,
    /// Summed residual still owed from cancelled standby segments whose
    /// full rate exceeded the deduction cap.
    pub cancelled_standby_residual: Decimal,
}

fn overlap(a_start: i64, a_end: i64, b_start: i64, b_end: i64) -> i64 {
    (a_end.min(b_end) - a_start.max(b_start)).max(0)
}

/// Merges a sorted list of `(start, end)` ranges into their disjoint union.
fn merge_ranges(mut ranges: Vec<(i64, i64)>) -> Vec<(i64, i64)> {
    ranges.sort_by_key(|r| r.0);
    let mut merged: Vec<(i64, i64)> = Vec::new();
    for (start, end) in ranges {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }
    merged
}

/// Subtracts `(cut_start, cut_end)` from `(start, end)`, returning the 0, 1,
/// or 2 remaining pieces.
fn subtract_interval(start: i64, end: i64, cut_start: i64, cut_end: i64) -> Vec<(i64, i64)> {
    let lo = cut_start.max(start);
    let hi = cut_end.min(end);
    if lo >= hi {
        return vec![(start, end)];
    }
    let mut out = Vec::new();
    if start < lo {
        out.push((start, lo));
    }
    if hi < end {
        out.push((hi, end));
    }
    out
}

/// Groups placed segments by work-day, cancels or keeps each standby
/// segment, trims overlapping work, and forms chains from what remains.
///
/// `standby_rate_for` resolves the hourly standby rate for a template id
/// given the apartment type and marital status in effect for that specific
/// segment's owning report, so a guide who changes apartment or marital
/// status mid-month is priced correctly for every occurrence.
pub fn build_daily_map(
    placed: Vec<PlacedSegment>,
    standby_rate_for: impl Fn(SegmentTemplateId, ApartmentType, bool) -> Decimal,
) -> Vec<DailyMapResult> {
    let mut by_day: BTreeMap<NaiveDate, Vec<PlacedSegment>> = BTreeMap::new();
    for segment in placed {
        by_day.entry(segment.work_day).or_default().push(segment);
    }

    by_day
        .into_iter()
        .map(|(work_day, segments)| build_one_day(work_day, segments, &standby_rate_for))
        .collect()
}

fn build_one_day(
    work_day: NaiveDate,
    segments: Vec<PlacedSegment>,
    standby_rate_for: &impl Fn(SegmentTemplateId, ApartmentType, bool) -> Decimal,
) -> DailyMapResult {
    let mut work_pieces: Vec<(i64, i64)> = segments
        .iter()
        .filter(|s| s.kind == SegmentKind::Work)
        .map(|s| (s.local_start, s.local_end))
        .collect();
    work_pieces = merge_ranges(work_pieces);

    let mut standby_segs: Vec<&PlacedSegment> = segments
        .iter()
        .filter(|s| s.kind == SegmentKind::Standby)
        .collect();
    standby_segs.sort_by_key(|s| (s.order_index, s.local_start));

    let mut kept_standby = Vec::new();
    let mut cancelled_standby_deduction = Decimal::ZERO;
    let mut cancelled_standby_residual = Decimal::ZERO;

    for standby in standby_segs {
        let duration = standby.local_end - standby.local_start;
        if duration <= 0 {
            continue;
        }
        let overlapped: i64 = work_pieces
            .iter()
            .map(|(s, e)| overlap(standby.local_start, standby.local_end, *s, *e))
            .sum();
        let fraction = overlapped as f64 / duration as f64;

        let template_id = standby
            .segment_template_id
            .unwrap_or(SegmentTemplateId(NIGHT_STANDBY_SEGMENT_TEMPLATE_ID));
        let hourly_rate = standby_rate_for(template_id, standby.apartment_type, standby.is_married);
        let full_amount = hourly_rate * Decimal::from(duration) / Decimal::from(MINUTES_PER_HOUR);

        if fraction >= STANDBY_CANCEL_OVERLAP_THRESHOLD {
            let deduction = full_amount.min(MAX_CANCELLED_STANDBY_DEDUCTION);
            let residual = (full_amount - deduction).max(Decimal::ZERO);
            cancelled_standby_deduction += deduction;
            cancelled_standby_residual += residual;
        } else {
            kept_standby.push(KeptStandby {
                start_minute: standby.local_start,
                end_minute: standby.local_end,
                hourly_rate,
            });
            for (s, e) in std::mem::take(&mut work_pieces) {
                work_pieces.extend(subtract_interval(s, e, standby.local_start, standby.local_end));
            }
            work_pieces.sort_by_key(|r| r.0);
        }
    }

    let raw_chains = form_chains(work_day, work_pieces, &kept_standby);

    DailyMapResult {
        work_day,
        raw_chains,
        kept_standby,
        cancelled_standby_deduction,
        cancelled_standby_residual,
    }
}

#[derive(Debug, Clone, Copy)]
enum TimelineEvent {
    Work(i64, i64),
    Break,
}

fn form_chains(work_day: NaiveDate, work_pieces: Vec<(i64, i64)>, kept_standby: &[KeptStandby]) -> Vec<RawChain> {
    let mut events: Vec<(i64, TimelineEvent)> = work_pieces
        .iter()
        .map(|(s, e)| (*s, TimelineEvent::Work(*s, *e)))
        .collect();
    events.extend(kept_standby.iter().map(|s| (s.start_minute, TimelineEvent::Break)));
    events.sort_by_key(|(start, _)| *start);

    let mut chains = Vec::new();
    let mut current: Vec<(i64, i64)> = Vec::new();
    let mut last_end: Option<i64> = None;

    for (_, event) in events {
        match event {
            TimelineEvent::Break => {
                if !current.is_empty() {
                    chains.push(std::mem::take(&mut current));
                }
                last_end = None;
            }
            TimelineEvent::Work(start, end) => {
                if let Some(le) = last_end {
                    if start - le >= BREAK_THRESHOLD_MINUTES && !current.is_empty() {
                        chains.push(std::mem::take(&mut current));
                    }
                }
                current.push((start, end));
                last_end = Some(end);
            }
        }
    }
    if !current.is_empty() {
        chains.push(current);
    }

    chains
        .into_iter()
        .map(|pieces| {
            let starts_at_boundary = pieces.first().is_some_and(|p| p.0 == WORK_DAY_START_MINUTES);
            let ends_at_boundary = pieces
                .last()
                .is_some_and(|p| p.1 == WORK_DAY_START_MINUTES + MINUTES_PER_DAY);
            RawChain {
                work_day,
                pieces,
                starts_at_boundary,
                ends_at_boundary,
            }
        })
        .collect()
}
