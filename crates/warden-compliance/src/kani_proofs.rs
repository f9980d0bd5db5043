//! Kani proofs for compliance checking.
//!
//! Run with: `cargo kani --tests --harness verify_*`

#[cfg(kani)]
use crate::catalog::default_compliance_checker;
#[cfg(kani)]
use crate::checker::ComplianceChecker;
#[cfg(kani)]
use crate::rule::ComplianceRule;
#[cfg(kani)]
use warden_types::Resource;

/// **Property**: an empty checker finds every resource compliant.
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(4)]
fn verify_empty_checker_is_compliant() {
    let checker = ComplianceChecker::new();
    let report = checker.evaluate(&Resource::new("r", "storage", "public"));
    assert!(report.compliant());
}

/// **Property**: checking is deterministic — the same resource yields the
/// same report twice.
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_checking_determinism() {
    let checker = default_compliance_checker();
    let resource = Resource::new("db", "database", "public");

    let first = checker.evaluate(&resource);
    let second = checker.evaluate(&resource);
    assert_eq!(first, second);
}

/// **Property**: a failing rule always contributes exactly one violation,
/// independent of other rules' verdicts.
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_each_failure_reported_once() {
    let other_passes: bool = kani::any();

    let mut checker = ComplianceChecker::new();
    checker.add_rule(ComplianceRule::new("fails", "1.0", "proof", "always fails.", |_| false));
    checker.add_rule(ComplianceRule::new(
        "scripted",
        "1.0",
        "proof",
        "scripted verdict.",
        move |_| other_passes,
    ));

    let report = checker.evaluate(&Resource::new("r", "storage", "public"));
    let expected = if other_passes { 1 } else { 2 };
    assert_eq!(report.violation_count(), expected);
}
