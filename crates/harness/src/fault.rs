use agrosync_core::{CompleteRecord, CoreError, FeatureVector, PendingOperation, Predictor};
use agrosync_storage::{SqliteStore, Store, StorageError};

/// Store wrapper that refuses a configurable number of replays before
/// delegating to the real adapter. Lets tests observe that a failed
/// synchronize preserves the pending log and that a retry re-attempts the
/// same sequence.
pub struct FaultStore {
    inner: SqliteStore,
    fail_replays: usize,
}

impl FaultStore {
    pub fn new(inner: SqliteStore) -> Self {
        Self {
            inner,
            fail_replays: 0,
        }
    }

    pub fn fail_next_replays(&mut self, n: usize) {
        self.fail_replays = n;
    }

    pub fn inner(&self) -> &SqliteStore {
        &self.inner
    }
}

impl Store for FaultStore {
    fn replay(&mut self, ops: &[PendingOperation]) -> Result<(), StorageError> {
        if self.fail_replays > 0 {
            self.fail_replays -= 1;
            return Err(StorageError::ReplayRejected(format!(
                "injected fault: {} operations refused",
                ops.len()
            )));
        }
        self.inner.replay(ops)
    }

    fn load_all(&self) -> Result<Vec<CompleteRecord>, StorageError> {
        self.inner.load_all()
    }

    fn get_record(&self, year: i32) -> Result<Option<CompleteRecord>, StorageError> {
        self.inner.get_record(year)
    }

    fn year_count(&self) -> Result<u64, StorageError> {
        self.inner.year_count()
    }
}

/// Predictor that always fails, for error-surfacing tests.
pub struct FailingPredictor;

impl Predictor for FailingPredictor {
    fn predict(&self, _features: &FeatureVector) -> Result<f64, CoreError> {
        Err(CoreError::Prediction("model backend unavailable".into()))
    }
}
