//! Strongly-typed identifiers for the entities the engine reasons about.
//!
//! Newtypes over `i64` rather than bare integers, so a person id can never be
//! passed where an apartment id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

id_newtype!(PersonId, "Identifies a person (guide) being paid.");
id_newtype!(ApartmentId, "Identifies an apartment / housing unit.");
id_newtype!(ReportId, "Identifies a single logged time report.");
id_newtype!(ShiftKindId, "Identifies a shift-kind template.");
id_newtype!(SegmentTemplateId, "Identifies one template segment within a shift kind.");
