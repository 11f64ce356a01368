//! Free-text message parser.
//!
//! Pulls unsigned decimal numbers out of the message in order of
//! appearance. The first is engine RPM, the second coolant temperature;
//! anything after that is ignored. The remaining sensor channels cannot be
//! given in text and always carry their nominal defaults.
//!
//! Only ASCII digits form numbers; other scripts' digits are treated as
//! ordinary text.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::DiagnosisError;

static RE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.?[0-9]*").unwrap());

/// Nominal lubricating oil pressure (bar).
pub const DEFAULT_OIL_PRESSURE: f64 = 3.0;
/// Nominal fuel pressure (bar).
pub const DEFAULT_FUEL_PRESSURE: f64 = 15.0;
/// Nominal coolant pressure (bar).
pub const DEFAULT_COOLANT_PRESSURE: f64 = 2.0;
/// Nominal lubricating oil temperature (°C).
pub const DEFAULT_OIL_TEMP: f64 = 80.0;

/// Sensor readings extracted from one chat message.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedInput {
    pub rpm: Option<f64>,
    pub coolant_temp: Option<f64>,
    pub oil_pressure: f64,
    pub fuel_pressure: f64,
    pub coolant_pressure: f64,
    pub oil_temp: f64,
}

impl Default for ParsedInput {
    fn default() -> Self {
        Self {
            rpm: None,
            coolant_temp: None,
            oil_pressure: DEFAULT_OIL_PRESSURE,
            fuel_pressure: DEFAULT_FUEL_PRESSURE,
            coolant_pressure: DEFAULT_COOLANT_PRESSURE,
            oil_temp: DEFAULT_OIL_TEMP,
        }
    }
}

/// Parse a chat message into sensor readings.
///
/// Missing numbers leave the field unset. A matched number that cannot be
/// converted is an error, never skipped, so positions stay aligned.
pub fn parse_input(text: &str) -> Result<ParsedInput, DiagnosisError> {
    let mut numbers = RE_NUMBER.find_iter(text).map(|m| parse_number(m.as_str()));
    Ok(ParsedInput {
        rpm: numbers.next().transpose()?,
        coolant_temp: numbers.next().transpose()?,
        ..ParsedInput::default()
    })
}

/// Very long digit runs parse to infinity rather than failing.
fn parse_number(raw: &str) -> Result<f64, DiagnosisError> {
    raw.parse::<f64>()
        .map_err(|err| DiagnosisError::OutOfRange(format!("number '{raw}': {err}")))
}
