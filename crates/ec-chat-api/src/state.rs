//! Shared application state for the Axum server.
//!
//! The reference table is loaded once before the listener starts and shared
//! read-only across requests, so no locking is involved.

use std::path::Path;
use std::sync::Arc;

use ec_diagnostics::{DiagnosticsResult, ReferenceTable};

/// Shared application state, cheap to clone into each handler.
#[derive(Clone, Default)]
pub struct AppState {
    /// Recorded engine samples used for direct lookup.
    pub table: Arc<ReferenceTable>,
}

impl AppState {
    pub fn new(table: ReferenceTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// Load the reference table from a CSV file.
    pub fn from_dataset(path: impl AsRef<Path>) -> DiagnosticsResult<Self> {
        Ok(Self::new(ReferenceTable::from_path(path)?))
    }

    /// Create state with a handful of recorded samples.
    #[cfg(test)]
    pub fn with_sample_data() -> Self {
        use ec_diagnostics::{ConditionLabel, ReferenceRow};

        let rows = [
            (700.0, 81.63, ConditionLabel::NORMAL),
            (876.0, 77.75, ConditionLabel::UNSPECIFIED),
            (520.0, 79.65, ConditionLabel::UNSPECIFIED),
            (1221.0, 96.10, ConditionLabel::name("Overheating")),
            (640.0, 74.20, ConditionLabel::name("Low Oil Pressure")),
        ]
        .into_iter()
        .map(|(rpm, coolant_temp, condition)| ReferenceRow {
            rpm,
            coolant_temp,
            condition,
        })
        .collect();

        Self::new(ReferenceTable::new(rows))
    }
}
