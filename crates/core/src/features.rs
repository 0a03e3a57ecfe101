use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::records::CompleteRecord;

/// The five-feature input of the yield predictor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub mean_temperature: f64,
    pub precipitation: f64,
    pub maturity_index: f64,
    pub ph: f64,
    pub nutrients: f64,
}

impl From<&CompleteRecord> for FeatureVector {
    fn from(record: &CompleteRecord) -> Self {
        Self {
            mean_temperature: record.climate.mean_temperature,
            precipitation: record.climate.precipitation,
            maturity_index: record.maturity.maturity_index,
            ph: record.soil.ph,
            nutrients: record.soil.nutrients,
        }
    }
}

/// Black-box regressor seam. The model library behind it is out of scope;
/// a failure is surfaced as an error, never as a default prediction.
pub trait Predictor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, CoreError>;
}
