//! Built-in compliance rule catalog.
//!
//! Standard governance rules used as the default rule set and as test
//! fixtures. [`default_compliance_checker`] registers them in the reported
//! violation order.

use crate::checker::ComplianceChecker;
use crate::rule::ComplianceRule;

const CATALOG_VERSION: &str = "1.0";
const CATALOG_AUTHOR: &str = "governance-team";

// ============================================================================
// Rules
// ============================================================================

/// Every resource must carry an "owner" tag.
pub fn requires_owner_tag() -> ComplianceRule {
    ComplianceRule::new(
        "RequiresOwnerTag",
        CATALOG_VERSION,
        CATALOG_AUTHOR,
        "Resource must have an 'owner' tag.",
        |r| r.has_tag("owner"),
    )
}

/// Secrets must never be classified public.
pub fn secrets_not_public() -> ComplianceRule {
    ComplianceRule::new(
        "SecretsNotPublic",
        CATALOG_VERSION,
        CATALOG_AUTHOR,
        "Resources of type 'secret' must not be classified as 'public'.",
        |r| !(r.kind == "secret" && r.classification == "public"),
    )
}

/// Databases must be classified restricted or confidential; other kinds pass
/// trivially.
pub fn databases_must_be_restricted() -> ComplianceRule {
    ComplianceRule::new(
        "DatabasesMustBeRestricted",
        CATALOG_VERSION,
        CATALOG_AUTHOR,
        "Database resources must be classified as 'restricted' or 'confidential'.",
        |r| {
            if r.kind != "database" {
                return true;
            }
            r.classification == "restricted" || r.classification == "confidential"
        },
    )
}

/// Every resource must have a non-empty classification.
pub fn no_unclassified_resources() -> ComplianceRule {
    ComplianceRule::new(
        "NoUnclassifiedResources",
        CATALOG_VERSION,
        CATALOG_AUTHOR,
        "Every resource must have a non-empty classification.",
        |r| !r.classification.is_empty(),
    )
}

// ============================================================================
// Default checker
// ============================================================================

/// Returns a [`ComplianceChecker`] pre-loaded with the standard governance
/// rules.
pub fn default_compliance_checker() -> ComplianceChecker {
    let mut checker = ComplianceChecker::new();
    checker.add_rule(requires_owner_tag());
    checker.add_rule(secrets_not_public());
    checker.add_rule(databases_must_be_restricted());
    checker.add_rule(no_unclassified_resources());
    checker
}

// ============================================================================
// Tests
// ============================================================================
