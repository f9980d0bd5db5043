//! Built-in policy catalog.
//!
//! Reference policies used as the default rule set and as the primary test
//! fixtures. [`default_policy_engine`] registers them in the recommended
//! evaluation order; that order is load-bearing (the MFA policy must run
//! before `engineer_access`, which deliberately abstains on restricted
//! resources and defers to it).

use crate::engine::PolicyEngine;
use crate::policy::{Policy, Vote};

const CATALOG_VERSION: &str = "1.0";
const CATALOG_AUTHOR: &str = "governance-team";

// ============================================================================
// Policies
// ============================================================================

/// Admins bypass all restrictions.
pub fn admin_full_access() -> Policy {
    Policy::new(
        "AdminFullAccess",
        CATALOG_VERSION,
        CATALOG_AUTHOR,
        "Grants unrestricted access to all principals with the admin role.",
        |ctx| {
            if ctx.principal.role == "admin" {
                Vote::allow("Admin role has unrestricted access.")
            } else {
                Vote::Abstain
            }
        },
    )
}

/// Deny access to "restricted" resources when MFA has not been verified.
pub fn mfa_required_for_restricted() -> Policy {
    Policy::new(
        "MFARequiredForRestricted",
        CATALOG_VERSION,
        CATALOG_AUTHOR,
        "Denies access to restricted resources when MFA has not been verified.",
        |ctx| {
            if ctx.resource.classification == "restricted" && !ctx.mfa_verified {
                Vote::deny("MFA required to access restricted resources.")
            } else {
                Vote::Abstain
            }
        },
    )
}

/// Non-admins cannot write or delete in production.
pub fn production_immutability() -> Policy {
    Policy::new(
        "ProductionImmutability",
        CATALOG_VERSION,
        CATALOG_AUTHOR,
        "Prevents non-admin principals from writing or deleting in production.",
        |ctx| {
            if ctx.environment == "production"
                && ctx.principal.role != "admin"
                && (ctx.action.verb == "write" || ctx.action.verb == "delete")
            {
                Vote::deny("Write/delete operations require admin role in production.")
            } else {
                Vote::Abstain
            }
        },
    )
}

/// Analysts are limited to read-only access on non-sensitive resources.
pub fn analyst_read_only() -> Policy {
    Policy::new(
        "AnalystReadOnly",
        CATALOG_VERSION,
        CATALOG_AUTHOR,
        "Restricts analysts to read-only access on non-sensitive resources.",
        |ctx| {
            if ctx.principal.role != "analyst" {
                return Vote::Abstain;
            }
            if ctx.action.verb != "read" {
                return Vote::deny("Analysts are limited to read-only access.");
            }
            if ctx.resource.classification == "restricted"
                || ctx.resource.classification == "confidential"
            {
                return Vote::deny("Analysts cannot access confidential or restricted data.");
            }
            Vote::allow("Analyst read access on non-sensitive resource allowed.")
        },
    )
}

/// Engineers have full access in dev/staging, read-only in production.
pub fn engineer_access() -> Policy {
    Policy::new(
        "EngineerAccess",
        CATALOG_VERSION,
        CATALOG_AUTHOR,
        "Grants engineers full access in dev/staging and read-only in production.",
        |ctx| {
            if ctx.principal.role != "engineer" {
                return Vote::Abstain;
            }
            // Defer restricted resources to other policies (e.g. MFA check).
            if ctx.resource.classification == "restricted" {
                return Vote::Abstain;
            }
            if ctx.environment == "dev" || ctx.environment == "staging" {
                return Vote::allow("Engineers have full access in non-production environments.");
            }
            if ctx.environment == "production" && ctx.action.verb == "read" {
                return Vote::allow("Engineers can read production resources.");
            }
            Vote::Abstain
        },
    )
}

// ============================================================================
// Default engine
// ============================================================================

/// Returns a [`PolicyEngine`] pre-loaded with all built-in policies in the
/// recommended evaluation order.
pub fn default_policy_engine() -> PolicyEngine {
    let mut engine = PolicyEngine::new();
    engine.register(admin_full_access());
    engine.register(mfa_required_for_restricted());
    engine.register(production_immutability());
    engine.register(analyst_read_only());
    engine.register(engineer_access());
    engine
}

// ============================================================================
// Tests
// ============================================================================
