use serde::{Deserialize, Serialize};

use crate::fields::RecordField;
use crate::records::CompleteRecord;

/// A mutation intent buffered by the manager until the next synchronize.
/// The log is append-only; insertion order is replay order. A later Update
/// may target a year only created by an earlier Insert still pending, so
/// replay must never reorder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PendingOperation {
    Insert {
        record: CompleteRecord,
    },
    Update {
        year: i32,
        field: RecordField,
        value: f64,
    },
    Delete {
        year: i32,
    },
    DeleteAll,
}

impl PendingOperation {
    /// The year this operation targets, if it targets one.
    pub fn year(&self) -> Option<i32> {
        match self {
            Self::Insert { record } => Some(record.year()),
            Self::Update { year, .. } | Self::Delete { year } => Some(*year),
            Self::DeleteAll => None,
        }
    }

    /// String name of the operation type for logging/diagnostics.
    pub fn op_type_name(&self) -> &'static str {
        match self {
            Self::Insert { .. } => "Insert",
            Self::Update { .. } => "Update",
            Self::Delete { .. } => "Delete",
            Self::DeleteAll => "DeleteAll",
        }
    }
}
