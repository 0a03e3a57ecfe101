use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::operations::PendingOperation;
use crate::records::CompleteRecord;

pub const SNAPSHOT_VERSION: u32 = 1;

/// Versioned export of the record mapping and pending log. Replaces opaque
/// whole-manager pickling; the version field gates decoding across schema
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub records: Vec<CompleteRecord>,
    pub pending: Vec<PendingOperation>,
}

impl Snapshot {
    pub fn new(records: Vec<CompleteRecord>, pending: Vec<PendingOperation>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            records,
            pending,
        }
    }

    pub fn to_msgpack(&self) -> Result<Vec<u8>, CoreError> {
        rmp_serde::to_vec(self).map_err(|e| CoreError::Serialization(e.to_string()))
    }

    pub fn from_msgpack(bytes: &[u8]) -> Result<Self, CoreError> {
        let snapshot: Self =
            rmp_serde::from_slice(bytes).map_err(|e| CoreError::Serialization(e.to_string()))?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(CoreError::UnsupportedSnapshotVersion(snapshot.version));
        }
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::RecordField;

    #[test]
    fn msgpack_round_trip() {
        let record = CompleteRecord::from_values(2024, 1700.0, 26.0, 1180.0, 0.87, 6.5, 0.77);
        let snapshot = Snapshot::new(
            vec![record.clone()],
            vec![
                PendingOperation::Insert { record },
                PendingOperation::Update {
                    year: 2024,
                    field: RecordField::QuantityHarvested,
                    value: 1800.0,
                },
            ],
        );

        let bytes = snapshot.to_msgpack().unwrap();
        let decoded = Snapshot::from_msgpack(&bytes).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn unknown_version_rejected() {
        let mut snapshot = Snapshot::new(Vec::new(), Vec::new());
        snapshot.version = 99;
        let bytes = rmp_serde::to_vec(&snapshot).unwrap();
        assert!(matches!(
            Snapshot::from_msgpack(&bytes),
            Err(CoreError::UnsupportedSnapshotVersion(99))
        ));
    }
}
