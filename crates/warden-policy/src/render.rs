//! JSON rendering of decisions and evaluation results.
//!
//! This is the system-boundary encoding consumed by hosts for logging and
//! display. The trace is rendered flat: the principal id, resource id,
//! action verb and environment are lifted out of the embedded context so a
//! log line carries only the strings an auditor needs.

use serde::Serialize;
use warden_types::Decision;

use crate::trace::{EvaluationResult, EvaluationStep};

// ============================================================================
// Render views
// ============================================================================

/// Borrowing view of an [`EvaluationResult`] in the external JSON shape.
#[derive(Debug, Serialize)]
struct ResultView<'a> {
    decision: &'a Decision,
    trace: TraceView<'a>,
}

/// Flattened trace: context strings plus the ordered step list.
#[derive(Debug, Serialize)]
struct TraceView<'a> {
    principal: &'a str,
    resource: &'a str,
    action: &'a str,
    environment: &'a str,
    steps: &'a [EvaluationStep],
}

// ============================================================================
// Encoders
// ============================================================================

/// Renders a decision as a pretty-printed JSON object with `effect`,
/// `policy_name` and `reason` fields.
pub fn decision_to_json(decision: &Decision) -> String {
    serde_json::to_string_pretty(decision).expect("decision serialization is infallible")
}

/// Renders a full evaluation result: the decision plus the flattened trace.
pub fn result_to_json(result: &EvaluationResult) -> String {
    let ctx = &result.trace.context;
    let view = ResultView {
        decision: &result.decision,
        trace: TraceView {
            principal: &ctx.principal.id,
            resource: &ctx.resource.id,
            action: &ctx.action.verb,
            environment: &ctx.environment,
            steps: &result.trace.steps,
        },
    };
    serde_json::to_string_pretty(&view).expect("result serialization is infallible")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_policy_engine;
    use serde_json::Value;
    use warden_types::{Action, Effect, Principal, RequestContext, Resource};

    fn sample_result() -> EvaluationResult {
        let ctx = RequestContext::new(
            Principal::new("carol@corp.io", "analyst", "DataSci"),
            Resource::new("storage-public-docs", "storage", "public").with_tag("owner", "mktg"),
            Action::new("read"),
            "dev",
            false,
        );
        default_policy_engine().evaluate(&ctx)
    }

    #[test]
    fn test_decision_json_shape() {
        let decision = Decision::new(Effect::Allow, "AnalystReadOnly", "read ok");
        let parsed: Value =
            serde_json::from_str(&decision_to_json(&decision)).expect("valid JSON");

        assert_eq!(parsed["effect"], "Allow");
        assert_eq!(parsed["policy_name"], "AnalystReadOnly");
        assert_eq!(parsed["reason"], "read ok");
    }

    #[test]
    fn test_result_json_shape() {
        let result = sample_result();
        let parsed: Value = serde_json::from_str(&result_to_json(&result)).expect("valid JSON");

        assert_eq!(parsed["decision"]["effect"], "Allow");
        assert_eq!(parsed["decision"]["policy_name"], "AnalystReadOnly");
        assert_eq!(parsed["trace"]["principal"], "carol@corp.io");
        assert_eq!(parsed["trace"]["resource"], "storage-public-docs");
        assert_eq!(parsed["trace"]["action"], "read");
        assert_eq!(parsed["trace"]["environment"], "dev");

        let steps = parsed["trace"]["steps"].as_array().expect("steps array");
        assert_eq!(steps.len(), result.trace.steps.len());
        for (rendered, step) in steps.iter().zip(&result.trace.steps) {
            assert_eq!(rendered["policy"], step.policy.as_str());
            assert_eq!(rendered["outcome"], step.outcome.to_string().as_str());
            assert_eq!(rendered["reason"], step.reason.as_str());
        }
    }

    #[test]
    fn test_outcome_strings_are_tri_state() {
        let result = sample_result();
        let parsed: Value = serde_json::from_str(&result_to_json(&result)).expect("valid JSON");
        for step in parsed["trace"]["steps"].as_array().expect("steps array") {
            let outcome = step["outcome"].as_str().expect("outcome string");
            assert!(matches!(outcome, "Allow" | "Deny" | "Abstain"));
        }
    }

    #[test]
    fn test_reason_strings_roundtrip_unescaped() {
        // Quotes, backslashes, newlines and tabs must survive the encoding.
        let hostile = "said \"no\"\\ twice\nline two\tend\r";
        let decision = Decision::new(Effect::Deny, "p", hostile);
        let json = decision_to_json(&decision);

        let parsed: Value = serde_json::from_str(&json).expect("valid JSON");
        assert_eq!(parsed["reason"].as_str(), Some(hostile));
        // The raw encoding itself contains the escape sequences.
        assert!(json.contains("\\\""));
        assert!(json.contains("\\\\"));
        assert!(json.contains("\\n"));
        assert!(json.contains("\\t"));
        assert!(json.contains("\\r"));
    }
}
