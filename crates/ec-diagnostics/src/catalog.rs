//! Static condition catalog: label → problem, probable cause, manual section.
//!
//! Match-based, like a lookup table compiled into the binary. Lookup never
//! fails: unknown labels resolve to the generic "Potential Issue" entry.

use crate::label::ConditionLabel;

/// Human-readable description of a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionEntry {
    pub problem: &'static str,
    pub cause: &'static str,
    pub manual_reference: &'static str,
}

const NORMAL: ConditionEntry = ConditionEntry {
    problem: "Normal",
    cause: "No issues detected.",
    manual_reference: "Section 1.1 - General Operation",
};

const POTENTIAL_ISSUE: ConditionEntry = ConditionEntry {
    problem: "Potential Issue",
    cause: "Possible low pressure or temperature anomaly.",
    manual_reference: "Section 2.1 - Diagnostics",
};

const OVERHEATING: ConditionEntry = ConditionEntry {
    problem: "Overheating",
    cause: "Low coolant, radiator blockage, or thermostat failure.",
    manual_reference: "Section 3.2 - Cooling System",
};

const LOW_OIL_PRESSURE: ConditionEntry = ConditionEntry {
    problem: "Low Oil Pressure",
    cause: "Oil pump failure, low oil level, or worn bearings.",
    manual_reference: "Section 5.1 - Lubrication System",
};

const LOW_FUEL_PRESSURE: ConditionEntry = ConditionEntry {
    problem: "Low Fuel Pressure",
    cause: "Clogged fuel filter, failing fuel pump, or fuel line leak.",
    manual_reference: "Section 4.1 - Fuel System",
};

/// Look up a label, returning `None` when the catalog has no entry for it.
pub fn get(label: &ConditionLabel) -> Option<ConditionEntry> {
    match label {
        ConditionLabel::Code(1) => Some(NORMAL),
        ConditionLabel::Code(0) => Some(POTENTIAL_ISSUE),
        ConditionLabel::Code(_) => None,
        // Names are case-sensitive.
        ConditionLabel::Name(name) => match name.as_str() {
            "Overheating" => Some(OVERHEATING),
            "Low Oil Pressure" => Some(LOW_OIL_PRESSURE),
            "Low Fuel Pressure" => Some(LOW_FUEL_PRESSURE),
            _ => None,
        },
    }
}

/// Resolve a label to its entry, substituting the code-`0` entry for
/// anything the catalog does not know.
pub fn lookup(label: &ConditionLabel) -> ConditionEntry {
    get(label).unwrap_or_else(|| {
        tracing::debug!(label = %label, "unknown condition label, using generic entry");
        POTENTIAL_ISSUE
    })
}
