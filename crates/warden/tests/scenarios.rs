//! End-to-end scenarios against the default policy engine and compliance
//! checker, mirroring the governance rule set's reference behavior.

use serde_json::Value;
use warden::{
    Action, Effect, Principal, RequestContext, Resource, StepOutcome, default_compliance_checker,
    default_policy_engine, report_to_json, result_to_json,
};

fn patient_db() -> Resource {
    Resource::new("db-patient-records", "database", "restricted")
        .with_tag("owner", "health-team")
        .with_tag("region", "us-west-2")
}

fn public_docs() -> Resource {
    Resource::new("storage-public-docs", "storage", "public").with_tag("owner", "marketing")
}

fn prod_api() -> Resource {
    Resource::new("compute-prod-api", "compute", "confidential").with_tag("owner", "platform-team")
}

#[test]
fn admin_deletes_restricted_database_in_production() {
    let engine = default_policy_engine();
    let ctx = RequestContext::new(
        Principal::new("alice@corp.io", "admin", "IT"),
        patient_db(),
        Action::new("delete"),
        "production",
        true,
    );

    let result = engine.evaluate(&ctx);
    assert_eq!(result.decision.effect, Effect::Allow);
    assert_eq!(result.decision.policy_name, "AdminFullAccess");
}

#[test]
fn engineer_without_mfa_is_denied_restricted_reads() {
    let engine = default_policy_engine();
    let ctx = RequestContext::new(
        Principal::new("bob@corp.io", "engineer", "Backend"),
        patient_db(),
        Action::new("read"),
        "staging",
        false,
    );

    let result = engine.evaluate(&ctx);
    assert_eq!(result.decision.effect, Effect::Deny);
    assert_eq!(result.decision.policy_name, "MFARequiredForRestricted");
}

#[test]
fn production_writes_are_immutable_for_engineers() {
    let engine = default_policy_engine();
    let engineer = Principal::new("bob@corp.io", "engineer", "Backend");

    let write = RequestContext::new(
        engineer.clone(),
        prod_api(),
        Action::new("write"),
        "production",
        false,
    );
    let result = engine.evaluate(&write);
    assert_eq!(result.decision.effect, Effect::Deny);
    assert_eq!(result.decision.policy_name, "ProductionImmutability");

    // The same context with a read falls through to EngineerAccess.
    let read = RequestContext::new(engineer, prod_api(), Action::new("read"), "production", false);
    let result = engine.evaluate(&read);
    assert_eq!(result.decision.effect, Effect::Allow);
    assert_eq!(result.decision.policy_name, "EngineerAccess");
}

#[test]
fn engineer_writes_freely_in_staging() {
    let engine = default_policy_engine();
    let ctx = RequestContext::new(
        Principal::new("bob@corp.io", "engineer", "Backend"),
        prod_api(),
        Action::new("write"),
        "staging",
        false,
    );

    let result = engine.evaluate(&ctx);
    assert_eq!(result.decision.effect, Effect::Allow);
    assert_eq!(result.decision.policy_name, "EngineerAccess");
}

#[test]
fn analyst_reads_public_but_cannot_write() {
    let engine = default_policy_engine();
    let analyst = Principal::new("carol@corp.io", "analyst", "DataSci");

    let read = RequestContext::new(
        analyst.clone(),
        public_docs(),
        Action::new("read"),
        "dev",
        false,
    );
    let result = engine.evaluate(&read);
    assert_eq!(result.decision.effect, Effect::Allow);
    assert_eq!(result.decision.policy_name, "AnalystReadOnly");

    let write = RequestContext::new(analyst, public_docs(), Action::new("write"), "dev", false);
    let result = engine.evaluate(&write);
    assert_eq!(result.decision.effect, Effect::Deny);
    assert_eq!(result.decision.policy_name, "AnalystReadOnly");
}

#[test]
fn guest_falls_through_to_default_deny() {
    let engine = default_policy_engine();
    let ctx = RequestContext::new(
        Principal::new("dave@corp.io", "guest", "Consulting"),
        public_docs(),
        Action::new("read"),
        "dev",
        false,
    );

    let result = engine.evaluate(&ctx);
    assert_eq!(result.decision.effect, Effect::Deny);
    assert_eq!(result.decision.policy_name, "default");
    assert_eq!(result.decision.reason, "No policy explicitly granted access.");

    // All five policies were consulted and all abstained.
    assert_eq!(result.trace.steps.len(), 5);
    assert_eq!(result.trace.abstain_count(), 5);
    assert_eq!(result.trace.evaluated_count(), 0);
}

#[test]
fn deny_trace_stops_at_the_vetoing_policy() {
    let engine = default_policy_engine();
    let ctx = RequestContext::new(
        Principal::new("carol@corp.io", "analyst", "DataSci"),
        patient_db(),
        Action::new("read"),
        "production",
        true,
    );

    // AdminFullAccess abstains, MFA is satisfied, ProductionImmutability
    // ignores reads; AnalystReadOnly vetoes restricted data.
    let result = engine.evaluate(&ctx);
    assert_eq!(result.decision.effect, Effect::Deny);
    assert_eq!(result.decision.policy_name, "AnalystReadOnly");

    let last = result.trace.steps.last().expect("non-empty trace");
    assert_eq!(last.policy, "AnalystReadOnly");
    assert_eq!(last.outcome, StepOutcome::Deny);
    // EngineerAccess was never consulted.
    assert_eq!(result.trace.steps.len(), 4);
}

#[test]
fn rogue_database_yields_exactly_two_violations() {
    let checker = default_compliance_checker();
    let rogue = Resource::new("db-legacy-public", "database", "public");

    let report = checker.evaluate(&rogue);
    assert!(!report.compliant());
    assert_eq!(report.violation_count(), 2);
    assert!(report.violations[0].contains("RequiresOwnerTag"));
    assert!(report.violations[1].contains("DatabasesMustBeRestricted"));
}

#[test]
fn governed_resources_pass_the_default_checker() {
    let checker = default_compliance_checker();
    assert!(checker.evaluate(&patient_db()).compliant());
    assert!(checker.evaluate(&public_docs()).compliant());
}

#[test]
fn rendered_result_roundtrips_through_json() {
    let engine = default_policy_engine();
    let ctx = RequestContext::new(
        Principal::new("bob@corp.io", "engineer", "Backend"),
        patient_db(),
        Action::new("read"),
        "staging",
        false,
    );
    let result = engine.evaluate(&ctx);

    let parsed: Value = serde_json::from_str(&result_to_json(&result)).expect("valid JSON");
    assert_eq!(parsed["decision"]["effect"], "Deny");
    assert_eq!(parsed["decision"]["policy_name"], "MFARequiredForRestricted");
    assert_eq!(parsed["trace"]["principal"], "bob@corp.io");
    assert_eq!(parsed["trace"]["resource"], "db-patient-records");
    assert_eq!(parsed["trace"]["action"], "read");
    assert_eq!(parsed["trace"]["environment"], "staging");
    assert_eq!(
        parsed["trace"]["steps"].as_array().map(Vec::len),
        Some(result.trace.steps.len())
    );
}

#[test]
fn rendered_report_roundtrips_through_json() {
    let checker = default_compliance_checker();
    let report = checker.evaluate(&Resource::new("db-legacy-public", "database", "public"));

    let parsed: Value = serde_json::from_str(&report_to_json(&report)).expect("valid JSON");
    assert_eq!(parsed["resource_id"], "db-legacy-public");
    assert_eq!(parsed["compliant"], false);
    assert_eq!(parsed["violations"].as_array().map(Vec::len), Some(2));
}
