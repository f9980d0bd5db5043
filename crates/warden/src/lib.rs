//! # Warden: embeddable access-control decision engine
//!
//! Given a request (who, on what, doing what, under which environment
//! conditions), Warden produces a binary Allow/Deny decision plus an
//! auditable trace of how each registered policy voted. A companion
//! compliance checker evaluates a resource's static attributes against named
//! invariants and reports every violation.
//!
//! Both evaluators are pure and synchronous: a host builds an engine or
//! checker once (append-only registration), then evaluates requests and
//! resources repeatedly, from as many threads as it likes.
//!
//! This crate is a facade re-exporting the public API of the `warden-types`,
//! `warden-policy` and `warden-compliance` crates.
//!
//! ## Examples
//!
//! ```
//! use warden::{
//!     default_compliance_checker, default_policy_engine, Action, Effect, Principal,
//!     RequestContext, Resource,
//! };
//!
//! let engine = default_policy_engine();
//! let checker = default_compliance_checker();
//!
//! let patient_db = Resource::new("db-patient-records", "database", "restricted")
//!     .with_tag("owner", "health-team");
//!
//! // Policy decision: engineer reading a restricted database without MFA.
//! let ctx = RequestContext::new(
//!     Principal::new("bob@corp.io", "engineer", "Backend"),
//!     patient_db.clone(),
//!     Action::new("read"),
//!     "staging",
//!     false,
//! );
//! let result = engine.evaluate(&ctx);
//! assert_eq!(result.decision.effect, Effect::Deny);
//! assert_eq!(result.decision.policy_name, "MFARequiredForRestricted");
//!
//! // Compliance: the same database is well-governed.
//! assert!(checker.evaluate(&patient_db).compliant());
//! ```

pub use warden_compliance::{
    CheckFn, ComplianceChecker, ComplianceReport, ComplianceRule, default_compliance_checker,
    report_to_json,
};
pub use warden_policy::{
    DEFAULT_DENY_REASON, DEFAULT_POLICY_NAME, EvaluationResult, EvaluationStep, EvaluationTrace,
    Policy, PolicyEngine, PolicyFn, StepOutcome, Vote, decision_to_json, default_policy_engine,
    result_to_json,
};
pub use warden_types::{Action, Decision, Effect, Principal, RequestContext, Resource};

/// Built-in policy factories, re-exported for hosts assembling custom
/// evaluation orders.
pub mod policies {
    pub use warden_policy::catalog::{
        admin_full_access, analyst_read_only, engineer_access, mfa_required_for_restricted,
        production_immutability,
    };
}

/// Built-in compliance rule factories.
pub mod compliance_rules {
    pub use warden_compliance::catalog::{
        databases_must_be_restricted, no_unclassified_resources, requires_owner_tag,
        secrets_not_public,
    };
}
