//! Message → diagnosis pipeline and reply formatting.
//!
//! parse → reference table → threshold rules (on miss) → catalog → text.

use std::fmt;

use crate::catalog::{self, ConditionEntry};
use crate::error::DiagnosisError;
use crate::label::ConditionLabel;
use crate::parser::{ParsedInput, parse_input};
use crate::rules::{self, SensorReadings};
use crate::table::ReferenceTable;

pub const PROMPT_MISSING_RPM: &str = "Please include the RPM value (e.g., '700 81').";
pub const PROMPT_MISSING_COOLANT_TEMP: &str =
    "Please include the coolant temperature (e.g., '700 81').";
pub const FALLBACK_INSTRUCTIONS: &str =
    "Please provide two numbers like: '700 81' (RPM and Coolant Temp)";

/// Where a diagnosis label came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosisSource {
    /// Matched a reference row (index in load order).
    ReferenceTable { row: usize },
    /// No row matched; threshold rules decided.
    Rules,
}

impl DiagnosisSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosisSource::ReferenceTable { .. } => "reference_table",
            DiagnosisSource::Rules => "rules",
        }
    }
}

/// A resolved diagnosis for one message.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnosis {
    pub readings: SensorReadings,
    pub label: ConditionLabel,
    pub entry: ConditionEntry,
    pub source: DiagnosisSource,
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Condition: {}\nPossible Causes: {}\nRefer to: {}",
            self.entry.problem, self.entry.cause, self.entry.manual_reference
        )
    }
}

/// Diagnose a raw chat message against the reference table.
pub fn diagnose_message(table: &ReferenceTable, text: &str) -> Result<Diagnosis, DiagnosisError> {
    let parsed = parse_input(text.trim())?;
    let readings = require_readings(&parsed)?;

    let (label, source) = match table.find(readings.rpm, readings.coolant_temp) {
        Some((row, matched)) => (
            matched.condition.clone(),
            DiagnosisSource::ReferenceTable { row },
        ),
        None => (rules::diagnose(&readings), DiagnosisSource::Rules),
    };
    let entry = catalog::lookup(&label);

    tracing::debug!(
        rpm = readings.rpm,
        coolant_temp = readings.coolant_temp,
        label = %label,
        source = source.as_str(),
        "diagnosis resolved"
    );

    Ok(Diagnosis {
        readings,
        label,
        entry,
        source,
    })
}

fn require_readings(parsed: &ParsedInput) -> Result<SensorReadings, DiagnosisError> {
    let rpm = parsed.rpm.ok_or(DiagnosisError::MissingRpm)?;
    let coolant_temp = parsed
        .coolant_temp
        .ok_or(DiagnosisError::MissingCoolantTemp)?;
    // An infinite coolant temperature misses every row and the rules call it
    // overheating; an infinite RPM has no meaningful rounding.
    if !rpm.is_finite() {
        return Err(DiagnosisError::OutOfRange(format!("rpm {rpm}")));
    }
    Ok(SensorReadings {
        rpm,
        oil_pressure: parsed.oil_pressure,
        fuel_pressure: parsed.fuel_pressure,
        coolant_pressure: parsed.coolant_pressure,
        oil_temp: parsed.oil_temp,
        coolant_temp,
    })
}
