use serde::{Deserialize, Serialize};

/// Immediate-action guidance for an emergency situation.
///
/// One instance per guidance request; immutable once received and
/// superseded wholesale by the next request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyGuidance {
    pub situation_summary: String,
    /// Ordered steps to take right now.
    pub immediate_actions: Vec<String>,
    /// Ordered list of things to avoid doing.
    pub do_not_do: Vec<String>,
}
