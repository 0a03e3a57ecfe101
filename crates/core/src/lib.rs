pub mod error;
pub mod features;
pub mod fields;
pub mod operations;
pub mod records;
pub mod schedule;
pub mod snapshot;

pub use error::CoreError;
pub use features::{FeatureVector, Predictor};
pub use fields::RecordField;
pub use operations::PendingOperation;
pub use records::{Climate, CompleteRecord, Harvest, MaturityIndex, SoilCondition, YearBounds};
pub use schedule::{HarvestSchedule, ScheduledHarvest};
pub use snapshot::{Snapshot, SNAPSHOT_VERSION};
