//! In-memory reference table of recorded engine samples.
//!
//! Loaded once from CSV at startup and never mutated. A query matches a row
//! when the rounded RPM values are equal and the row's coolant temperature
//! falls inside a closed ±2 °C window around the query.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{DiagnosticsError, DiagnosticsResult};
use crate::label::ConditionLabel;

/// Half-width of the coolant temperature match window (°C).
pub const COOLANT_TOLERANCE: f64 = 2.0;

pub const COL_RPM: &str = "Engine rpm";
pub const COL_COOLANT_TEMP: &str = "Coolant temp";
pub const COL_CONDITION: &str = "Engine Condition";

/// One recorded engine sample.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceRow {
    pub rpm: f64,
    pub coolant_temp: f64,
    pub condition: ConditionLabel,
}

#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(rename = "Engine rpm")]
    rpm: f64,
    #[serde(rename = "Coolant temp")]
    coolant_temp: f64,
    #[serde(rename = "Engine Condition")]
    condition: String,
}

/// Immutable, ordered set of reference rows.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    rows: Vec<ReferenceRow>,
}

impl ReferenceTable {
    pub fn new(rows: Vec<ReferenceRow>) -> Self {
        Self { rows }
    }

    /// Load a CSV dataset from disk.
    pub fn from_path(path: impl AsRef<Path>) -> DiagnosticsResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DiagnosticsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let table = Self::from_reader(file)?;
        tracing::info!(
            path = %path.display(),
            rows = table.len(),
            "reference table loaded"
        );
        Ok(table)
    }

    /// Load a CSV dataset from any reader. The header row must name the RPM,
    /// coolant temperature and condition columns; other columns are ignored.
    pub fn from_reader<R: Read>(reader: R) -> DiagnosticsResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?;
        for column in [COL_RPM, COL_COOLANT_TEMP, COL_CONDITION] {
            if !headers.iter().any(|h| h == column) {
                return Err(DiagnosticsError::MissingColumn(column));
            }
        }

        let mut rows = Vec::new();
        for (index, record) in rdr.deserialize::<CsvRecord>().enumerate() {
            let record = record?;
            let condition = ConditionLabel::parse(&record.condition).ok_or_else(|| {
                DiagnosticsError::InvalidLabel {
                    row: index + 1,
                    value: record.condition.clone(),
                }
            })?;
            rows.push(ReferenceRow {
                rpm: record.rpm,
                coolant_temp: record.coolant_temp,
                condition,
            });
        }

        if rows.is_empty() {
            tracing::warn!("reference table is empty, every query will use threshold rules");
        }

        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[ReferenceRow] {
        &self.rows
    }

    /// First row, in load order, matching the query.
    pub fn find(&self, rpm: f64, coolant_temp: f64) -> Option<(usize, &ReferenceRow)> {
        let target_rpm = round_rpm(rpm);
        let low = coolant_temp - COOLANT_TOLERANCE;
        let high = coolant_temp + COOLANT_TOLERANCE;

        self.rows.iter().enumerate().find(|(_, row)| {
            round_rpm(row.rpm) == target_rpm && row.coolant_temp >= low && row.coolant_temp <= high
        })
    }

    /// Condition label of the first matching row.
    #[cfg(test)]
    fn lookup(&self, rpm: f64, coolant_temp: f64) -> Option<&ConditionLabel> {
        self.find(rpm, coolant_temp).map(|(_, row)| &row.condition)
    }
}

/// Round to the nearest integer, ties to even (700.5 → 700, 701.5 → 702).
fn round_rpm(rpm: f64) -> f64 {
    rpm.round_ties_even()
}
