pub mod error;
pub mod import;
pub mod irrigation;

pub use error::EngineError;
pub use import::RawRecord;
pub use irrigation::{pump_command, IrrigationThresholds, MoistureReading, PumpCommand};

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use tracing::{error, info, warn};

use agrosync_core::{
    CompleteRecord, FeatureVector, HarvestSchedule, PendingOperation, Predictor, RecordField,
    ScheduledHarvest, Snapshot, YearBounds,
};
use agrosync_storage::Store;

/// Single authoritative in-memory view of year-keyed agricultural records,
/// plus the intent log of mutations not yet pushed to the external store.
///
/// The pending log is the only source of truth for what has *not* reached
/// the store; the record map may be ahead of the store at any time. No
/// internal locking: callers serialize access, in particular around
/// [`DataManager::synchronize`].
pub struct DataManager {
    records: BTreeMap<i32, CompleteRecord>,
    pending: Vec<PendingOperation>,
    schedule: HarvestSchedule,
    resources: BTreeSet<String>,
    bounds: YearBounds,
}

impl Default for DataManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DataManager {
    pub fn new() -> Self {
        Self::with_bounds(YearBounds::default())
    }

    pub fn with_bounds(bounds: YearBounds) -> Self {
        Self {
            records: BTreeMap::new(),
            pending: Vec::new(),
            schedule: HarvestSchedule::new(),
            resources: BTreeSet::new(),
            bounds,
        }
    }

    pub fn bounds(&self) -> YearBounds {
        self.bounds
    }

    // ========================================================================
    // Record CRUD
    // ========================================================================

    /// Insert or overwrite the record for its year. Last write wins in the
    /// map; the log still records every insert as a distinct intent.
    pub fn add_record(&mut self, record: CompleteRecord) {
        let year = record.year();
        self.records.insert(year, record.clone());
        self.pending.push(PendingOperation::Insert { record });
        info!(year, "record added");
    }

    /// Set one field of one year's record. A missing year is a logged
    /// warning and a no-op, never an error to the caller.
    pub fn update_field(&mut self, year: i32, field: RecordField, value: f64) {
        match self.records.get_mut(&year) {
            Some(record) => {
                field.apply(record, value);
                self.pending.push(PendingOperation::Update { year, field, value });
                info!(year, %field, value, "field updated");
            }
            None => {
                warn!(year, %field, "update on missing year ignored");
            }
        }
    }

    /// Remove one year's record. The Delete intent is appended even when
    /// the year is absent: at the store it is a harmless no-op.
    pub fn delete_record(&mut self, year: i32) {
        if self.records.remove(&year).is_some() {
            info!(year, "record deleted");
        } else {
            warn!(year, "delete on missing year");
        }
        self.pending.push(PendingOperation::Delete { year });
    }

    /// Clear the whole map with a single DeleteAll intent. Per-year intents
    /// already in the log stay where they are and replay before it.
    pub fn delete_all(&mut self) {
        self.records.clear();
        self.pending.push(PendingOperation::DeleteAll);
        info!("all records deleted");
    }

    pub fn record(&self, year: i32) -> Option<&CompleteRecord> {
        self.records.get(&year)
    }

    pub fn records(&self) -> impl Iterator<Item = &CompleteRecord> {
        self.records.values()
    }

    pub fn contains_year(&self, year: i32) -> bool {
        self.records.contains_key(&year)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // ========================================================================
    // Scheduling and resources
    // ========================================================================

    pub fn schedule_harvest(&mut self, plantation_id: i64, harvest_date: NaiveDate) {
        self.schedule.push(plantation_id, harvest_date);
        info!(plantation_id, %harvest_date, "harvest scheduled");
    }

    /// All scheduled harvests, ascending by date. Non-mutating and
    /// repeatable.
    pub fn list_scheduled(&self) -> Vec<ScheduledHarvest> {
        self.schedule.to_sorted_vec()
    }

    /// Remove and return the next due harvest.
    pub fn pop_next_harvest(&mut self) -> Option<ScheduledHarvest> {
        self.schedule.pop_next()
    }

    /// Mark a resource as allocated. Set semantics: allocating the same
    /// label twice has no further effect.
    pub fn allocate_resource(&mut self, label: impl Into<String>) {
        let label = label.into();
        if self.resources.insert(label.clone()) {
            info!(%label, "resource allocated");
        }
    }

    pub fn resources(&self) -> &BTreeSet<String> {
        &self.resources
    }

    // ========================================================================
    // Pending log and synchronize
    // ========================================================================

    /// Read-only view of the pending log, in insertion (= replay) order.
    pub fn pending(&self) -> &[PendingOperation] {
        &self.pending
    }

    /// Replay the pending log against the store as one failure-atomic unit.
    /// On success the log is cleared and the number of applied operations
    /// returned. On failure the store transaction has been rolled back, the
    /// log is untouched, and the error is surfaced so the caller can retry
    /// the same sequence.
    pub fn synchronize<S: Store>(&mut self, store: &mut S) -> Result<usize, EngineError> {
        if self.pending.is_empty() {
            info!("synchronize: nothing pending");
            return Ok(0);
        }
        match store.replay(&self.pending) {
            Ok(()) => {
                let applied = self.pending.len();
                self.pending.clear();
                info!(applied, "synchronized with store");
                Ok(applied)
            }
            Err(e) => {
                error!(pending = self.pending.len(), %e, "synchronize failed, log preserved");
                Err(e.into())
            }
        }
    }

    /// Bulk-load every record the store has into the map, overwriting
    /// in-memory entries. No pending intents are appended: the store
    /// already holds these rows.
    pub fn load_from_store<S: Store>(&mut self, store: &S) -> Result<usize, EngineError> {
        let records = store.load_all()?;
        let loaded = records.len();
        for record in records {
            self.records.insert(record.year(), record);
        }
        info!(loaded, "records loaded from store");
        Ok(loaded)
    }

    // ========================================================================
    // Bulk import and snapshots
    // ========================================================================

    /// Load records from a JSON array in the bulk interchange shape. The
    /// whole document is parsed and validated first; a malformed entry
    /// fails the load without mutating anything. Each parsed record is then
    /// added in input order, appending its Insert intent.
    pub fn load_from_json(&mut self, json: &str) -> Result<usize, EngineError> {
        let records = import::parse_records(json, &self.bounds)?;
        let loaded = records.len();
        for record in records {
            self.add_record(record);
        }
        info!(loaded, "records loaded from JSON");
        Ok(loaded)
    }

    /// Versioned export of the record mapping and pending log.
    pub fn export_snapshot(&self) -> Result<Vec<u8>, EngineError> {
        let snapshot = Snapshot::new(
            self.records.values().cloned().collect(),
            self.pending.clone(),
        );
        Ok(snapshot.to_msgpack()?)
    }

    /// Rebuild a manager from an exported snapshot. The schedule and
    /// resource set are runtime state and start empty.
    pub fn import_snapshot(bytes: &[u8]) -> Result<Self, EngineError> {
        let snapshot = Snapshot::from_msgpack(bytes)?;
        let mut manager = Self::new();
        for record in snapshot.records {
            manager.records.insert(record.year(), record);
        }
        manager.pending = snapshot.pending;
        Ok(manager)
    }

    // ========================================================================
    // Prediction
    // ========================================================================

    /// The predictor's five-feature input for a stored year.
    pub fn features_for(&self, year: i32) -> Option<FeatureVector> {
        self.records.get(&year).map(FeatureVector::from)
    }

    /// Predict the harvest yield for a stored year. A missing year or a
    /// predictor failure is an explicit error, never a default value.
    pub fn predict_yield<P: Predictor + ?Sized>(
        &self,
        year: i32,
        predictor: &P,
    ) -> Result<f64, EngineError> {
        let features = self
            .features_for(year)
            .ok_or(EngineError::YearNotFound(year))?;
        let prediction = predictor.predict(&features)?;
        info!(year, prediction, "yield predicted");
        Ok(prediction)
    }
}
