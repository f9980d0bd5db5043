//! Policy definitions.
//!
//! A policy is a named, versioned predicate over a [`RequestContext`]. Each
//! consulted policy casts a [`Vote`]: an explicit allow, an explicit deny, or
//! an abstention. Abstention is a first-class outcome, distinguishable in the
//! audit trace from an allow with an empty reason.

use warden_types::RequestContext;

// ============================================================================
// Vote
// ============================================================================

/// A single policy's opinion on one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Vote {
    /// Grant access, with a human-readable reason.
    Allow(String),
    /// Veto access, with a human-readable reason.
    Deny(String),
    /// No opinion; evaluation moves on to the next policy.
    Abstain,
}

impl Vote {
    /// Shorthand for `Vote::Allow` with an owned reason.
    pub fn allow(reason: impl Into<String>) -> Self {
        Self::Allow(reason.into())
    }

    /// Shorthand for `Vote::Deny` with an owned reason.
    pub fn deny(reason: impl Into<String>) -> Self {
        Self::Deny(reason.into())
    }
}

// ============================================================================
// Policy
// ============================================================================

/// The evaluation predicate of a policy.
///
/// Predicates must be total and side-effect-free. The engine does not catch
/// panics: a faulting predicate propagates to the caller rather than being
/// silently converted into a security decision.
pub type PolicyFn = Box<dyn Fn(&RequestContext) -> Vote + Send + Sync>;

/// A named access-control rule.
///
/// Policies are opaque, independently testable units; the engine imposes no
/// relationship between them beyond evaluation order. Built-in policies are
/// constructed by the factory functions in [`crate::catalog`].
pub struct Policy {
    /// Name reported in decisions and trace steps.
    pub name: String,
    /// Revision of the rule, e.g. "1.0".
    pub version: String,
    /// Owning team or author.
    pub author: String,
    /// Human-readable summary of what the policy enforces.
    pub description: String,
    /// The evaluation predicate.
    pub check: PolicyFn,
}

impl Policy {
    /// Creates a policy from its metadata and predicate.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        author: impl Into<String>,
        description: impl Into<String>,
        check: impl Fn(&RequestContext) -> Vote + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            author: author.into(),
            description: description.into(),
            check: Box::new(check),
        }
    }

    /// Casts this policy's vote on the given context.
    pub fn evaluate(&self, ctx: &RequestContext) -> Vote {
        (self.check)(ctx)
    }
}

impl std::fmt::Debug for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Policy")
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
    use warden_types::{Action, Principal, Resource};

    fn any_context() -> RequestContext {
        RequestContext::new(
            Principal::new("alice", "admin", "IT"),
            Resource::new("r1", "storage", "public"),
            Action::new("read"),
            "dev",
            false,
        )
    }

    #[test]
    fn test_vote_shorthands() {
        assert_eq!(Vote::allow("ok"), Vote::Allow("ok".to_string()));
        assert_eq!(Vote::deny("no"), Vote::Deny("no".to_string()));
    }

    #[test]
    fn test_policy_evaluate_invokes_predicate() {
        let policy = Policy::new("AlwaysDeny", "1.0", "tests", "denies everything", |_| {
            Vote::deny("computer says no")
        });

        assert_eq!(
            policy.evaluate(&any_context()),
            Vote::Deny("computer says no".to_string())
        );
    }

    #[test]
    fn test_policy_debug_omits_predicate() {
        let policy = Policy::new("P", "1.0", "tests", "d", |_| Vote::Abstain);
        let repr = format!("{policy:?}");
        assert!(repr.contains("\"P\""));
        assert!(repr.contains(".."));
    }
}
