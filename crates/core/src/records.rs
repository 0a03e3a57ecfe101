use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Accepted year range for incoming records. Years are natural keys, so a
/// typo here corrupts every table at once; bounds are checked at the input
/// boundary before any state is mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearBounds {
    pub min: i32,
    pub max: i32,
}

impl Default for YearBounds {
    fn default() -> Self {
        Self { min: 1900, max: 2100 }
    }
}

impl YearBounds {
    pub fn check(&self, year: i32) -> Result<(), CoreError> {
        if year < self.min || year > self.max {
            return Err(CoreError::YearOutOfRange {
                year,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Harvest {
    pub year: i32,
    pub quantity_harvested: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Climate {
    pub year: i32,
    pub mean_temperature: f64,
    pub precipitation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaturityIndex {
    pub year: i32,
    pub maturity_index: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilCondition {
    pub year: i32,
    pub ph: f64,
    pub nutrients: f64,
}

/// One year's complete agricultural record: the four sub-records must agree
/// on the year. That is the aggregate's only cross-field invariant, enforced
/// at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompleteRecord {
    pub harvest: Harvest,
    pub climate: Climate,
    pub maturity: MaturityIndex,
    pub soil: SoilCondition,
}

impl CompleteRecord {
    pub fn new(
        harvest: Harvest,
        climate: Climate,
        maturity: MaturityIndex,
        soil: SoilCondition,
    ) -> Result<Self, CoreError> {
        let year = harvest.year;
        if climate.year != year || maturity.year != year || soil.year != year {
            return Err(CoreError::YearMismatch(format!(
                "harvest={} climate={} maturity={} soil={}",
                harvest.year, climate.year, maturity.year, soil.year
            )));
        }
        Ok(Self {
            harvest,
            climate,
            maturity,
            soil,
        })
    }

    /// Build an aggregate from flat values. A single year feeds all four
    /// sub-records, so the cross-field invariant holds by construction.
    pub fn from_values(
        year: i32,
        quantity_harvested: f64,
        mean_temperature: f64,
        precipitation: f64,
        maturity_index: f64,
        ph: f64,
        nutrients: f64,
    ) -> Self {
        Self {
            harvest: Harvest {
                year,
                quantity_harvested,
            },
            climate: Climate {
                year,
                mean_temperature,
                precipitation,
            },
            maturity: MaturityIndex {
                year,
                maturity_index,
            },
            soil: SoilCondition { year, ph, nutrients },
        }
    }

    pub fn year(&self) -> i32 {
        self.harvest.year
    }
}
