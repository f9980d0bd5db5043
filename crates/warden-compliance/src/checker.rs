//! Compliance checker.
//!
//! Evaluates a resource against an ordered list of rules. Unlike the
//! deny-overrides policy engine, the checker never short-circuits: compliance
//! rules are independent structural checks, and a caller needs the complete
//! defect list in one pass rather than the first failure found.

use tracing::debug;
use warden_types::Resource;

use crate::report::ComplianceReport;
use crate::rule::ComplianceRule;

// ============================================================================
// ComplianceChecker
// ============================================================================

/// An ordered, append-only collection of compliance rules.
///
/// Like the policy engine, the checker has a build phase (`add_rule`)
/// followed by a read-only serving phase; concurrent `evaluate` calls are
/// safe once registration is done.
#[derive(Debug, Default)]
pub struct ComplianceChecker {
    rules: Vec<ComplianceRule>,
}

impl ComplianceChecker {
    /// Creates a checker with no rules. Every resource is trivially
    /// compliant against it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule. Registration order determines violation ordering in
    /// reports, nothing else.
    pub fn add_rule(&mut self, rule: ComplianceRule) {
        self.rules.push(rule);
    }

    /// Number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Checks the resource against every registered rule and reports all
    /// violations.
    ///
    /// Every rule's predicate is invoked exactly once, regardless of earlier
    /// failures. A panicking predicate is not caught and propagates.
    pub fn evaluate(&self, resource: &Resource) -> ComplianceReport {
        let mut report = ComplianceReport::new(&resource.id);

        for rule in &self.rules {
            if !rule.is_satisfied_by(resource) {
                report.violations.push(rule.violation());
            }
        }

        debug!(
            resource = %resource.id,
            rules = self.rules.len(),
            violations = report.violation_count(),
            "resource checked"
        );
        report
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str, satisfied: bool) -> ComplianceRule {
        ComplianceRule::new(name, "1.0", "tests", format!("{name} requirement."), move |_| {
            satisfied
        })
    }

    #[test]
    fn test_empty_checker_is_trivially_compliant() {
        let checker = ComplianceChecker::new();
        let report = checker.evaluate(&Resource::new("r1", "storage", "public"));
        assert!(report.compliant());
        assert_eq!(report.resource_id, "r1");
    }

    #[test]
    fn test_no_short_circuit() {
        let mut checker = ComplianceChecker::new();
        checker.add_rule(rule("A", false));
        checker.add_rule(rule("B", true));
        checker.add_rule(rule("C", false));

        let report = checker.evaluate(&Resource::new("r1", "storage", "public"));
        assert_eq!(report.violation_count(), 2);
        // Violations preserve registration order.
        assert_eq!(report.violations[0], "[A] A requirement.");
        assert_eq!(report.violations[1], "[C] C requirement.");
    }

    #[test]
    fn test_every_rule_is_invoked() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let calls = Arc::new(AtomicUsize::new(0));
        let mut checker = ComplianceChecker::new();
        for i in 0..4 {
            let calls = Arc::clone(&calls);
            checker.add_rule(ComplianceRule::new(
                format!("R{i}"),
                "1.0",
                "tests",
                "counts invocations",
                move |_| {
                    calls.fetch_add(1, Ordering::Relaxed);
                    i % 2 == 0
                },
            ));
        }

        let _ = checker.evaluate(&Resource::new("r1", "storage", "public"));
        assert_eq!(calls.load(Ordering::Relaxed), 4);
    }

    #[test]
    fn test_custom_rule() {
        let mut checker = ComplianceChecker::new();
        checker.add_rule(ComplianceRule::new(
            "MustHaveRegionTag",
            "1.0",
            "governance-team",
            "Resource must specify a 'region' tag.",
            |r| r.has_tag("region"),
        ));

        let with_region =
            Resource::new("svc", "compute", "internal").with_tag("region", "us-east-1");
        let without_region = Resource::new("svc", "compute", "internal");

        assert!(checker.evaluate(&with_region).compliant());
        assert!(!checker.evaluate(&without_region).compliant());
    }

    #[test]
    fn test_checker_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ComplianceChecker>();
    }
}
