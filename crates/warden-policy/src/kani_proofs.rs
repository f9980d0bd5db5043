//! Kani proofs for policy evaluation.
//!
//! These proofs verify correctness properties of the deny-overrides engine
//! using bounded model checking.
//!
//! Run with: `cargo kani --tests --harness verify_*`

#[cfg(kani)]
use crate::engine::{DEFAULT_POLICY_NAME, PolicyEngine};
#[cfg(kani)]
use crate::policy::{Policy, Vote};
#[cfg(kani)]
use warden_types::{Action, Effect, Principal, RequestContext, Resource};

#[cfg(kani)]
fn fixed_context(mfa_verified: bool) -> RequestContext {
    RequestContext::new(
        Principal::new("u", "engineer", "d"),
        Resource::new("r", "database", "restricted"),
        Action::new("read"),
        "staging",
        mfa_verified,
    )
}

/// **Property**: an empty engine denies every request with the synthetic
/// default decision.
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(4)]
fn verify_empty_engine_default_denies() {
    let mfa: bool = kani::any();
    let result = PolicyEngine::new().evaluate(&fixed_context(mfa));

    assert_eq!(result.decision.effect, Effect::Deny);
    assert_eq!(result.decision.policy_name, DEFAULT_POLICY_NAME);
    assert!(result.trace.steps.is_empty());
}

/// **Property**: same engine and same context always produce the same
/// decision (evaluation is deterministic and side-effect-free).
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_evaluation_determinism() {
    let mut engine = PolicyEngine::new();
    engine.register(Policy::new("deny-no-mfa", "1.0", "proof", "fixture", |ctx| {
        if ctx.mfa_verified {
            Vote::Abstain
        } else {
            Vote::deny("MFA missing")
        }
    }));

    let ctx = fixed_context(kani::any());
    let first = engine.evaluate(&ctx);
    let second = engine.evaluate(&ctx);

    assert_eq!(first.decision, second.decision);
    assert_eq!(first.trace.steps.len(), second.trace.steps.len());
}

/// **Property**: a deny vote always overrides an earlier allow.
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_deny_overrides_allow() {
    let mut engine = PolicyEngine::new();
    engine.register(Policy::new("grant", "1.0", "proof", "fixture", |_| {
        Vote::allow("granted")
    }));
    engine.register(Policy::new("veto", "1.0", "proof", "fixture", |_| {
        Vote::deny("vetoed")
    }));

    let result = engine.evaluate(&fixed_context(kani::any()));
    assert_eq!(result.decision.effect, Effect::Deny);
    assert_eq!(result.decision.policy_name, "veto");
}
