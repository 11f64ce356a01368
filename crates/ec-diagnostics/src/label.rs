//! Condition labels: either a small integer code or a symbolic fault name.

use std::fmt;

/// Identifier for a diagnosed engine state.
///
/// Dataset rows carry integer codes (`1` normal, `0` unspecified issue);
/// the threshold rules produce symbolic names such as `"Overheating"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConditionLabel {
    Code(i64),
    Name(String),
}

impl ConditionLabel {
    /// Code for a healthy engine.
    pub const NORMAL: ConditionLabel = ConditionLabel::Code(1);
    /// Code for a generic, unspecified issue. Also the catalog fallback.
    pub const UNSPECIFIED: ConditionLabel = ConditionLabel::Code(0);

    /// Parse a dataset cell. Integers become codes, anything else a name.
    /// Returns `None` for a blank cell.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        Some(match raw.parse::<i64>() {
            Ok(code) => ConditionLabel::Code(code),
            Err(_) => ConditionLabel::Name(raw.to_string()),
        })
    }

    pub fn name(name: &str) -> Self {
        ConditionLabel::Name(name.to_string())
    }
}

impl fmt::Display for ConditionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionLabel::Code(code) => write!(f, "{code}"),
            ConditionLabel::Name(name) => f.write_str(name),
        }
    }
}
