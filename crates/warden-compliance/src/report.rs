//! Compliance reports and their JSON rendering.

use serde::{Deserialize, Serialize, Serializer, ser::SerializeStruct};

// ============================================================================
// ComplianceReport
// ============================================================================

/// The outcome of checking one resource against a rule set.
///
/// Compliance is a derived property, not stored state: a report is compliant
/// iff its violation list is empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ComplianceReport {
    /// Identifier of the checked resource.
    pub resource_id: String,
    /// One `"[<rule name>] <description>"` entry per failed rule, in rule
    /// registration order.
    pub violations: Vec<String>,
}

impl ComplianceReport {
    pub fn new(resource_id: impl Into<String>) -> Self {
        Self {
            resource_id: resource_id.into(),
            violations: Vec::new(),
        }
    }

    /// True iff no rule was violated.
    pub fn compliant(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violated rules.
    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }
}

/// Serializes with the derived `compliant` flag as an explicit field, the
/// shape consumed at the system boundary:
/// `{"resource_id", "compliant", "violations"}`.
impl Serialize for ComplianceReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ComplianceReport", 3)?;
        state.serialize_field("resource_id", &self.resource_id)?;
        state.serialize_field("compliant", &self.compliant())?;
        state.serialize_field("violations", &self.violations)?;
        state.end()
    }
}

/// Renders a report as a pretty-printed JSON object.
pub fn report_to_json(report: &ComplianceReport) -> String {
    serde_json::to_string_pretty(report).expect("report serialization is infallible")
}

// ============================================================================
// Tests
// ============================================================================
