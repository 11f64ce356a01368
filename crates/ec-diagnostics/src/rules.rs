//! Threshold rules, used when no reference row matches.
//!
//! Rules are checked in order and the first hit wins. RPM, coolant pressure
//! and oil temperature are accepted but no current rule reads them.

use crate::label::ConditionLabel;

/// Coolant temperature above which the engine is overheating (°C).
pub const OVERHEAT_COOLANT_TEMP: f64 = 90.0;
/// Oil pressure below which lubrication is insufficient (bar).
pub const MIN_OIL_PRESSURE: f64 = 2.5;
/// Fuel pressure below which delivery is insufficient (bar).
pub const MIN_FUEL_PRESSURE: f64 = 10.0;

/// Full sensor snapshot fed to the rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReadings {
    pub rpm: f64,
    pub oil_pressure: f64,
    pub fuel_pressure: f64,
    pub coolant_pressure: f64,
    pub oil_temp: f64,
    pub coolant_temp: f64,
}

/// Diagnose a sensor snapshot.
pub fn diagnose(readings: &SensorReadings) -> ConditionLabel {
    if readings.coolant_temp > OVERHEAT_COOLANT_TEMP {
        ConditionLabel::name("Overheating")
    } else if readings.oil_pressure < MIN_OIL_PRESSURE {
        ConditionLabel::name("Low Oil Pressure")
    } else if readings.fuel_pressure < MIN_FUEL_PRESSURE {
        ConditionLabel::name("Low Fuel Pressure")
    } else {
        ConditionLabel::NORMAL
    }
}
