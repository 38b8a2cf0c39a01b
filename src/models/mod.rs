//! Domain types: reference data, reports, and the derived results the
//! engine produces.

pub mod apartment;
pub mod day;
pub mod housing;
pub mod ids;
pub mod minimum_wage;
pub mod month_lock;
pub mod monthly;
pub mod person;
pub mod reference_snapshot;
pub mod report;
pub mod sabbath;
pub mod segment;
pub mod shift_kind;
pub mod standby;

pub use apartment::{ApartmentRecord, ApartmentTable, ApartmentType};
pub use day::{Chain, ChainContribution, DailyResult, KeptStandby, WageTier};
pub use housing::{HousingCluster, HousingRateOverride, HousingRateTable};
pub use ids::{ApartmentId, PersonId, ReportId, SegmentTemplateId, ShiftKindId};
pub use minimum_wage::{MinimumWageRate, MinimumWageTable};
pub use month_lock::MonthLock;
pub use monthly::{DayView, EngineOutcome, EngineWarning, MonthlyTotals, WarningSeverity};
pub use person::{PersonRecord, PersonStatus, PersonTable};
pub use reference_snapshot::ReferenceSnapshot;
pub use report::Report;
pub use sabbath::{SabbathCache, SabbathWeek};
pub use segment::{Segment, SegmentKind};
pub use shift_kind::{
    classify_shift_kind, tagbur_counterpart, ShiftKind, ShiftKindClass, ShiftKindTable,
    ShiftTemplateSegment, SegmentTemplateType,
};
pub use standby::{StandbyRate, StandbyRateTable};
