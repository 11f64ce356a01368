//! Engine diagnosis from two sensor readings.
//!
//! A chat message carrying engine RPM and coolant temperature is resolved
//! against a table of recorded samples, falling back to threshold rules, and
//! the resulting condition label is described from a static catalog.

pub mod catalog;
pub mod error;
pub mod label;
pub mod parser;
pub mod reply;
pub mod rules;
pub mod table;

pub use catalog::ConditionEntry;
pub use error::{DiagnosisError, DiagnosticsError, DiagnosticsResult};
pub use label::ConditionLabel;
pub use parser::{ParsedInput, parse_input};
pub use reply::{Diagnosis, DiagnosisSource, diagnose_message};
pub use rules::SensorReadings;
pub use table::{ReferenceRow, ReferenceTable};
