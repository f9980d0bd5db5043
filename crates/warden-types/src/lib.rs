//! # warden-types: Core types for Warden
//!
//! This crate contains the shared value types used across the Warden system:
//! - Request actors and targets ([`Principal`], [`Resource`], [`Action`])
//! - The evaluation input ([`RequestContext`])
//! - Decision outcomes ([`Effect`], [`Decision`])
//!
//! These are plain immutable values with no evaluation logic; the policy
//! engine (`warden-policy`) and the compliance checker (`warden-compliance`)
//! consume them by shared reference and never mutate them.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

// ============================================================================
// Principal
// ============================================================================

/// The actor requesting access.
///
/// Roles and departments are free-form strings ("admin", "engineer",
/// "analyst", "guest", ...). No uniqueness is enforced here; identity
/// management is a host concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Stable identifier, e.g. `"alice@corp.io"`.
    pub id: String,
    /// Free-form role name.
    pub role: String,
    /// Organizational department.
    pub department: String,
}

impl Principal {
    pub fn new(
        id: impl Into<String>,
        role: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            role: role.into(),
            department: department.into(),
        }
    }
}

// ============================================================================
// Resource
// ============================================================================

/// The target of a request (and the subject of compliance checks).
///
/// `kind` and `classification` are free-form strings ("database", "storage",
/// "compute", "secret" / "public", "internal", "confidential", "restricted").
/// Tags are a key-value map with unique keys; insertion order carries no
/// meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Stable identifier, e.g. `"db-patient-records"`.
    pub id: String,
    /// Resource kind.
    pub kind: String,
    /// Sensitivity classification. Empty means unclassified.
    pub classification: String,
    /// Arbitrary key-value metadata.
    pub tags: BTreeMap<String, String>,
}

impl Resource {
    /// Creates a resource with no tags.
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        classification: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            classification: classification.into(),
            tags: BTreeMap::new(),
        }
    }

    /// Adds a tag (builder pattern). Re-using a key overwrites its value.
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Returns true if the resource carries the given tag key.
    pub fn has_tag(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }
}

// ============================================================================
// Action
// ============================================================================

/// The operation being requested, e.g. "read", "write", "delete", "execute".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The action verb.
    pub verb: String,
}

impl Action {
    pub fn new(verb: impl Into<String>) -> Self {
        Self { verb: verb.into() }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.verb)
    }
}

// ============================================================================
// RequestContext
// ============================================================================

/// The complete input to a policy evaluation: who, on what, doing what,
/// under which environment conditions.
///
/// Immutable once constructed. The engine receives it by shared reference
/// and retains only its own clone inside the produced trace, so mutating a
/// caller-side copy after evaluation cannot affect an earlier trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    pub principal: Principal,
    pub resource: Resource,
    pub action: Action,
    /// Deployment environment, e.g. "production", "staging", "dev".
    pub environment: String,
    /// Whether the principal completed multi-factor authentication.
    pub mfa_verified: bool,
}

impl RequestContext {
    pub fn new(
        principal: Principal,
        resource: Resource,
        action: Action,
        environment: impl Into<String>,
        mfa_verified: bool,
    ) -> Self {
        Self {
            principal,
            resource,
            action,
            environment: environment.into(),
            mfa_verified,
        }
    }
}

// ============================================================================
// Effect
// ============================================================================

/// The binary outcome of a policy decision: allow or deny access.
///
/// Abstention never appears at this level; a decision is always definite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// Grant access.
    Allow,
    /// Deny access.
    Deny,
}

impl Default for Effect {
    /// Defaults to `Deny` (safe default: deny unless explicitly allowed).
    fn default() -> Self {
        Self::Deny
    }
}

impl Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allow => write!(f, "Allow"),
            Self::Deny => write!(f, "Deny"),
        }
    }
}

// ============================================================================
// Decision
// ============================================================================

/// The final, auditable outcome of one policy evaluation.
///
/// `policy_name` names the policy whose vote became the decision, or
/// `"default"` for the fail-closed deny produced when no policy opined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Whether access is allowed or denied.
    pub effect: Effect,
    /// The policy that produced this decision.
    pub policy_name: String,
    /// Human-readable explanation of why this decision was made.
    pub reason: String,
}

impl Decision {
    pub fn new(effect: Effect, policy_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            effect,
            policy_name: policy_name.into(),
            reason: reason.into(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
