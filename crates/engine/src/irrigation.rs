use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A soil moisture reading reported by a field sensor. The transport that
/// delivered it (broker, serial, file) is outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoistureReading {
    pub plantation_id: i64,
    pub read_at: NaiveDate,
    pub moisture: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrrigationThresholds {
    /// Pump switches on at readings at or below this moisture percentage.
    pub moisture_floor: f64,
}

impl Default for IrrigationThresholds {
    fn default() -> Self {
        Self { moisture_floor: 50.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PumpCommand {
    On,
    Off,
}

impl PumpCommand {
    /// Payload string published to the pump control topic.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
        }
    }
}

/// Decide the pump command for a reading: on iff moisture is at or below
/// the configured floor.
pub fn pump_command(reading: &MoistureReading, thresholds: &IrrigationThresholds) -> PumpCommand {
    if reading.moisture <= thresholds.moisture_floor {
        PumpCommand::On
    } else {
        PumpCommand::Off
    }
}
