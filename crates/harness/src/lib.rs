pub mod farm;
pub mod fault;
pub mod logging;

pub use farm::{sample_record, simulated_records, LinearYieldModel, TestFarm};
pub use fault::{FailingPredictor, FaultStore};
