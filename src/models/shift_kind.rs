//! Shift-kind templates and their dispatch classification.

use serde::{Deserialize, Serialize};

use crate::constants::{
    SHIFT_KIND_FRIDAY, SHIFT_KIND_HOSPITAL_ESCORT, SHIFT_KIND_MEDICAL_ESCORT, SHIFT_KIND_NIGHT,
    SHIFT_KIND_SHABBAT, SHIFT_KIND_TAGBUR_FRIDAY, SHIFT_KIND_TAGBUR_SHABBAT,
};
use crate::error::{EngineError, EngineResult};
use crate::models::ids::{SegmentTemplateId, ShiftKindId};

/// Whether a template segment represents active work or passive standby.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentTemplateType {
    /// Active work.
    Work,
    /// Passive standby.
    Standby,
}

/// One ordered segment within a shift-kind's fixed template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTemplateSegment {
    /// Identifier of this template segment (used for standby-rate lookup).
    pub id: SegmentTemplateId,
    /// Work or standby.
    pub segment_type: SegmentTemplateType,
    /// Start minute, relative to the shift kind's own anchor (usually 0).
    pub start_minute: i64,
    /// End minute, relative to the shift kind's own anchor.
    pub end_minute: i64,
    /// Position of this segment within the template, lowest first.
    pub order_index: i32,
}

/// A shift kind: an id plus its fixed-template segment list (used by
/// template-driven kinds; dynamically decomposed kinds ignore `template`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftKind {
    /// Identifier of this shift kind.
    pub id: ShiftKindId,
    /// The kind's fixed template, ordered by `order_index`.
    pub template: Vec<ShiftTemplateSegment>,
}

/// A lookup table of shift kinds by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShiftKindTable {
    kinds: Vec<ShiftKind>,
}

impl ShiftKindTable {
    /// Builds a table from a list of shift kinds.
    pub fn new(kinds: Vec<ShiftKind>) -> Self {
        Self { kinds }
    }

    /// Looks up a shift kind by id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ReferenceDataMissing`] if no shift kind with
    /// that id is present.
    pub fn get(&self, id: ShiftKindId) -> EngineResult<&ShiftKind> {
        self.kinds
            .iter()
            .find(|k| k.id == id)
            .ok_or_else(|| EngineError::ReferenceDataMissing {
                entity: "shift_kind".to_string(),
                id: id.to_string(),
            })
    }
}

/// The dispatch classification [`crate::segment_builder`] switches on, so
/// that segment construction never has to query reference data itself — the
/// caller resolves implicit tagbur remapping and picks the class once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftKindClass {
    /// A shift whose segments come directly from its fixed template
    /// (105, 106, 108, 109).
    FixedTemplate,
    /// The dynamically decomposed night shift (107).
    NightDynamic,
    /// Hospital escort (120): minimum wage inside Sabbath, flat rate outside.
    HospitalEscort,
    /// Medical escort (148): flat rate weekdays, minimum wage on Sabbath.
    MedicalEscort,
}

/// Classifies a shift-kind id into its dispatch class.
///
/// # Errors
///
/// Returns [`EngineError::ReferenceDataMissing`] for any id not in the known
/// set of shift kinds.
pub fn classify_shift_kind(id: ShiftKindId) -> EngineResult<ShiftKindClass> {
    match id.0 {
        v if v == SHIFT_KIND_FRIDAY
            || v == SHIFT_KIND_SHABBAT
            || v == SHIFT_KIND_TAGBUR_FRIDAY
            || v == SHIFT_KIND_TAGBUR_SHABBAT =>
        {
            Ok(ShiftKindClass::FixedTemplate)
        }
        v if v == SHIFT_KIND_NIGHT => Ok(ShiftKindClass::NightDynamic),
        v if v == SHIFT_KIND_HOSPITAL_ESCORT => Ok(ShiftKindClass::HospitalEscort),
        v if v == SHIFT_KIND_MEDICAL_ESCORT => Ok(ShiftKindClass::MedicalEscort),
        _ => Err(EngineError::ReferenceDataMissing {
            entity: "shift_kind_class".to_string(),
            id: id.to_string(),
        }),
    }
}

/// Remaps a Friday/Sabbath shift-kind id to its tagbur counterpart.
pub fn tagbur_counterpart(id: ShiftKindId) -> Option<ShiftKindId> {
    match id.0 {
        v if v == SHIFT_KIND_FRIDAY => Some(ShiftKindId(SHIFT_KIND_TAGBUR_FRIDAY)),
        v if v == SHIFT_KIND_SHABBAT => Some(ShiftKindId(SHIFT_KIND_TAGBUR_SHABBAT)),
        _ => None,
    }
}
