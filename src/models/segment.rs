//! Segments: the decomposition of a report into typed, timed pieces.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ids::{ReportId, SegmentTemplateId};

/// The kind of time a segment represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// Active work time, eligible for chain formation and wage tiering.
    Work,
    /// Passive standby time, subject to cancellation against overlapping work.
    Standby,
    /// A vacation day, excluded from chains.
    Vacation,
    /// A sick day, excluded from chains.
    Sick,
    /// Travel reimbursement, excluded from chains.
    Travel,
    /// Escort work (hospital/medical), priced directly by the segment
    /// builder rather than through chain formation and tiering.
    EscortWork,
}

/// One piece of a report's decomposition: a typed interval, in minutes from
/// midnight of the owning report's civil date (may be `>= 1440` for the
/// early hours of the next day).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// The report this segment was derived from.
    pub report_id: ReportId,
    /// Work, standby, vacation, sick, or travel.
    pub kind: SegmentKind,
    /// Start minute, from midnight of the report's civil date.
    pub start_minute: i64,
    /// End minute, from midnight of the report's civil date.
    pub end_minute: i64,
    /// The template segment this piece was derived from, if any (absent for
    /// dynamically decomposed or marker segments).
    pub segment_template_id: Option<SegmentTemplateId>,
    /// Position among sibling segments of the same report, lowest first.
    pub order_index: i32,
    /// For [`SegmentKind::EscortWork`] only: the amount already computed for
    /// this segment by the segment builder, to be added directly to
    /// `extras` rather than priced through chain tiering.
    pub priced_amount: Option<Decimal>,
}

impl Segment {
    /// The segment's duration in minutes.
    pub fn duration_minutes(&self) -> i64 {
        self.end_minute - self.start_minute
    }

    /// Whether this segment carries work that can form chains.
    pub fn is_work(&self) -> bool {
        self.kind == SegmentKind::Work
    }

    /// Whether this segment is passive standby.
    pub fn is_standby(&self) -> bool {
        self.kind == SegmentKind::Standby
    }

    /// The overlap, in minutes, between this segment and `[start, end)`.
    pub fn overlap_minutes(&self, start: i64, end: i64) -> i64 {
        let lo = self.start_minute.max(start);
        let hi = self.end_minute.min(end);
        (hi - lo).max(0)
    }
}
