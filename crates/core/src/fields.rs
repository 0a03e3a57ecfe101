use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::records::CompleteRecord;

/// Closed enumeration of the updatable record fields. Each variant maps to
/// exactly one attribute of one sub-record, and to one column of one store
/// table. Unknown names exist only at the parse boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordField {
    QuantityHarvested,
    MeanTemperature,
    Precipitation,
    MaturityIndex,
    Ph,
    Nutrients,
}

impl RecordField {
    pub const ALL: [RecordField; 6] = [
        Self::QuantityHarvested,
        Self::MeanTemperature,
        Self::Precipitation,
        Self::MaturityIndex,
        Self::Ph,
        Self::Nutrients,
    ];

    /// Wire name, as used in the bulk-load interchange format and store
    /// columns.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::QuantityHarvested => "quantity_harvested",
            Self::MeanTemperature => "mean_temperature",
            Self::Precipitation => "precipitation",
            Self::MaturityIndex => "maturity_index",
            Self::Ph => "ph",
            Self::Nutrients => "nutrients",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "quantity_harvested" => Ok(Self::QuantityHarvested),
            "mean_temperature" => Ok(Self::MeanTemperature),
            "precipitation" => Ok(Self::Precipitation),
            "maturity_index" => Ok(Self::MaturityIndex),
            "ph" => Ok(Self::Ph),
            "nutrients" => Ok(Self::Nutrients),
            _ => Err(CoreError::UnknownField(s.to_string())),
        }
    }

    /// Store table implied by this field.
    pub fn table(&self) -> &'static str {
        match self {
            Self::QuantityHarvested => "harvest",
            Self::MeanTemperature | Self::Precipitation => "climate",
            Self::MaturityIndex => "maturity_index",
            Self::Ph | Self::Nutrients => "soil_condition",
        }
    }

    /// Column within [`RecordField::table`].
    pub fn column(&self) -> &'static str {
        self.as_str()
    }

    /// Apply the typed setter: changes exactly the one attribute of the one
    /// sub-record this variant names.
    pub fn apply(&self, record: &mut CompleteRecord, value: f64) {
        match self {
            Self::QuantityHarvested => record.harvest.quantity_harvested = value,
            Self::MeanTemperature => record.climate.mean_temperature = value,
            Self::Precipitation => record.climate.precipitation = value,
            Self::MaturityIndex => record.maturity.maturity_index = value,
            Self::Ph => record.soil.ph = value,
            Self::Nutrients => record.soil.nutrients = value,
        }
    }

    /// Read the attribute this variant names.
    pub fn get(&self, record: &CompleteRecord) -> f64 {
        match self {
            Self::QuantityHarvested => record.harvest.quantity_harvested,
            Self::MeanTemperature => record.climate.mean_temperature,
            Self::Precipitation => record.climate.precipitation,
            Self::MaturityIndex => record.maturity.maturity_index,
            Self::Ph => record.soil.ph,
            Self::Nutrients => record.soil.nutrients,
        }
    }
}

impl std::fmt::Display for RecordField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
