use serde::Deserialize;

use agrosync_core::{CompleteRecord, CoreError, YearBounds};

use crate::error::EngineError;

/// Bulk-load interchange shape: one flat year/quantity pair plus the three
/// nested sub-maps.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub year: i32,
    pub quantity_harvested: f64,
    pub climate: RawClimate,
    pub maturity: RawMaturity,
    pub soil: RawSoil,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawClimate {
    pub mean_temperature: f64,
    pub precipitation: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMaturity {
    pub maturity_index: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSoil {
    pub ph: f64,
    pub nutrients: f64,
}

impl RawRecord {
    pub fn into_record(self, bounds: &YearBounds) -> Result<CompleteRecord, CoreError> {
        bounds.check(self.year)?;
        Ok(CompleteRecord::from_values(
            self.year,
            self.quantity_harvested,
            self.climate.mean_temperature,
            self.climate.precipitation,
            self.maturity.maturity_index,
            self.soil.ph,
            self.soil.nutrients,
        ))
    }
}

/// Parse a JSON array of raw records. The whole document is parsed and
/// validated before anything is handed to the manager: malformed input
/// fails the entire load.
pub fn parse_records(json: &str, bounds: &YearBounds) -> Result<Vec<CompleteRecord>, EngineError> {
    let raw: Vec<RawRecord> =
        serde_json::from_str(json).map_err(|e| EngineError::Parse(e.to_string()))?;
    raw.into_iter()
        .map(|r| r.into_record(bounds).map_err(EngineError::from))
        .collect()
}
