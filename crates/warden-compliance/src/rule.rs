//! Compliance rule definitions.
//!
//! A compliance rule is a named structural invariant over a [`Resource`]'s
//! static attributes, independent of any request context. Rules are
//! independent of each other; order only affects violation ordering in the
//! report.

use warden_types::Resource;

// ============================================================================
// ComplianceRule
// ============================================================================

/// The check predicate of a compliance rule.
///
/// Returns `true` when the resource satisfies the rule. Predicates must be
/// total and side-effect-free; a panicking predicate propagates to the
/// caller.
pub type CheckFn = Box<dyn Fn(&Resource) -> bool + Send + Sync>;

/// A named structural invariant on resources.
pub struct ComplianceRule {
    /// Name quoted in violation strings.
    pub name: String,
    /// Revision of the rule, e.g. "1.0".
    pub version: String,
    /// Owning team or author.
    pub author: String,
    /// Human-readable requirement; appended to violation strings.
    pub description: String,
    /// The check predicate (true = satisfied).
    pub check: CheckFn,
}

impl ComplianceRule {
    /// Creates a rule from its metadata and predicate.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        author: impl Into<String>,
        description: impl Into<String>,
        check: impl Fn(&Resource) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            author: author.into(),
            description: description.into(),
            check: Box::new(check),
        }
    }

    /// Checks the resource against this rule.
    pub fn is_satisfied_by(&self, resource: &Resource) -> bool {
        (self.check)(resource)
    }

    /// The violation string reported when this rule fails:
    /// `"[<name>] <description>"`.
    pub fn violation(&self) -> String {
        format!("[{}] {}", self.name, self.description)
    }
}

impl std::fmt::Debug for ComplianceRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComplianceRule")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("author", &self.author)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_predicate_dispatch() {
        let rule = ComplianceRule::new("HasId", "1.0", "tests", "Resource must have an id.", |r| {
            !r.id.is_empty()
        });

        assert!(rule.is_satisfied_by(&Resource::new("r1", "storage", "public")));
        assert!(!rule.is_satisfied_by(&Resource::new("", "storage", "public")));
    }

    #[test]
    fn test_violation_format() {
        let rule = ComplianceRule::new(
            "RequiresOwnerTag",
            "1.0",
            "governance-team",
            "Resource must have an 'owner' tag.",
            |r| r.has_tag("owner"),
        );
        assert_eq!(
            rule.violation(),
            "[RequiresOwnerTag] Resource must have an 'owner' tag."
        );
    }
}
