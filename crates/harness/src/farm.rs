use agrosync_core::{CompleteRecord, CoreError, FeatureVector, Predictor};
use agrosync_engine::{DataManager, EngineError};
use agrosync_storage::{SqliteStore, StorageError};

/// A manager wired to an in-memory SQLite store: the composition the
/// application root builds, sized for tests.
pub struct TestFarm {
    pub manager: DataManager,
    pub store: SqliteStore,
}

impl TestFarm {
    pub fn new() -> Result<Self, StorageError> {
        Ok(Self {
            manager: DataManager::new(),
            store: SqliteStore::open_in_memory()?,
        })
    }

    pub fn synchronize(&mut self) -> Result<usize, EngineError> {
        self.manager.synchronize(&mut self.store)
    }

    /// Add the three-year simulated data set and return how many records
    /// went in.
    pub fn seed_simulated(&mut self) -> usize {
        let records = simulated_records();
        let count = records.len();
        for record in records {
            self.manager.add_record(record);
        }
        count
    }
}

/// One plausible record for a year, for tests that only care about the key.
pub fn sample_record(year: i32) -> CompleteRecord {
    CompleteRecord::from_values(year, 1500.0, 25.3, 1200.0, 0.85, 6.5, 0.75)
}

/// The simulated 2021-2023 data set used across the test suites.
pub fn simulated_records() -> Vec<CompleteRecord> {
    vec![
        CompleteRecord::from_values(2021, 1500.0, 25.3, 1200.0, 0.85, 6.5, 0.75),
        CompleteRecord::from_values(2022, 1600.0, 26.1, 1100.0, 0.88, 6.4, 0.78),
        CompleteRecord::from_values(2023, 1550.0, 25.8, 1150.0, 0.86, 6.6, 0.76),
    ]
}

/// Fixed-coefficient stand-in for the trained regressor: a linear model
/// over the five features.
pub struct LinearYieldModel {
    pub intercept: f64,
    pub temperature_weight: f64,
    pub precipitation_weight: f64,
    pub maturity_weight: f64,
    pub ph_weight: f64,
    pub nutrients_weight: f64,
}

impl Default for LinearYieldModel {
    fn default() -> Self {
        Self {
            intercept: 100.0,
            temperature_weight: 10.0,
            precipitation_weight: 1.0,
            maturity_weight: 50.0,
            ph_weight: 5.0,
            nutrients_weight: 20.0,
        }
    }
}

impl Predictor for LinearYieldModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, CoreError> {
        Ok(self.intercept
            + self.temperature_weight * features.mean_temperature
            + self.precipitation_weight * features.precipitation
            + self.maturity_weight * features.maturity_index
            + self.ph_weight * features.ph
            + self.nutrients_weight * features.nutrients)
    }
}
