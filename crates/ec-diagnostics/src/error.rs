//! Diagnostics error types.

use thiserror::Error;

/// Errors raised while loading the reference dataset.
#[derive(Debug, Error)]
pub enum DiagnosticsError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: invalid condition label '{value}'")]
    InvalidLabel { row: usize, value: String },
}

/// Convenience alias for dataset loading results.
pub type DiagnosticsResult<T> = Result<T, DiagnosticsError>;

/// Reasons a single message could not be turned into a diagnosis.
///
/// None of these are faults of the server: each maps to a user-facing
/// prompt at the request boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosisError {
    #[error("message contains no RPM value")]
    MissingRpm,

    #[error("message contains no coolant temperature")]
    MissingCoolantTemp,

    #[error("reading out of range: {0}")]
    OutOfRange(String),
}

impl DiagnosisError {
    /// Text shown to the user for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            DiagnosisError::MissingRpm => crate::reply::PROMPT_MISSING_RPM,
            DiagnosisError::MissingCoolantTemp => crate::reply::PROMPT_MISSING_COOLANT_TEMP,
            DiagnosisError::OutOfRange(_) => crate::reply::FALLBACK_INSTRUCTIONS,
        }
    }
}
