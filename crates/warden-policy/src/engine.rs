//! Policy decision engine.
//!
//! Evaluates a request context against an ordered list of policies using
//! deny-overrides resolution:
//!
//! 1. The first explicit deny wins immediately (a veto is authoritative, so
//!    it short-circuits; later policies are never consulted).
//! 2. An allow is only a candidate: evaluation continues so a later policy
//!    can still veto. If no deny appears, the *first* allow wins.
//! 3. If no policy opines, the result is a fail-closed default deny.

use tracing::debug;
use warden_types::{Decision, Effect, RequestContext};

use crate::policy::{Policy, Vote};
use crate::trace::{EvaluationResult, EvaluationStep, EvaluationTrace, StepOutcome};

/// Policy name reported by the fail-closed default decision.
pub const DEFAULT_POLICY_NAME: &str = "default";

/// Reason reported by the fail-closed default decision.
pub const DEFAULT_DENY_REASON: &str = "No policy explicitly granted access.";

// ============================================================================
// PolicyEngine
// ============================================================================

/// An ordered collection of policies with deny-overrides evaluation.
///
/// The engine has two lifecycle phases: a build phase ([`Self::register`],
/// single writer) and a serving phase ([`Self::evaluate`], pure reads).
/// Once registration has finished, concurrent evaluation from multiple
/// threads against the same engine is safe; interleaving registration with
/// evaluation is the caller's responsibility to avoid.
#[derive(Debug, Default)]
pub struct PolicyEngine {
    policies: Vec<Policy>,
}

impl PolicyEngine {
    /// Creates an engine with no policies. Evaluating it always yields the
    /// default deny.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a policy to the evaluation order.
    ///
    /// No validation is performed: duplicate names are permitted, and
    /// registration order is significant — it becomes evaluation order.
    pub fn register(&mut self, policy: Policy) {
        self.policies.push(policy);
    }

    /// Number of registered policies.
    pub fn policy_count(&self) -> usize {
        self.policies.len()
    }

    /// Evaluates a request against every registered policy in order.
    ///
    /// This is a pure function of the engine's policy list and the given
    /// context; it never mutates engine state and always produces exactly
    /// one [`Decision`] (evaluation is total). Policy predicates are assumed
    /// total and side-effect-free; a panicking predicate is not caught and
    /// propagates to the caller.
    pub fn evaluate(&self, ctx: &RequestContext) -> EvaluationResult {
        let mut trace = EvaluationTrace::new(ctx.clone());
        let mut first_allow: Option<Decision> = None;

        for policy in &self.policies {
            match policy.evaluate(ctx) {
                Vote::Abstain => {
                    trace.steps.push(EvaluationStep::abstain(&policy.name));
                }
                Vote::Deny(reason) => {
                    trace.steps.push(EvaluationStep::new(
                        &policy.name,
                        StepOutcome::Deny,
                        reason.clone(),
                    ));
                    let decision = Decision::new(Effect::Deny, &policy.name, reason);
                    debug!(
                        principal = %ctx.principal.id,
                        resource = %ctx.resource.id,
                        action = %ctx.action,
                        policy = %decision.policy_name,
                        "request vetoed"
                    );
                    // Deny is authoritative: stop here. Policies after this
                    // one are never consulted and never appear in the trace.
                    return EvaluationResult { decision, trace };
                }
                Vote::Allow(reason) => {
                    trace.steps.push(EvaluationStep::new(
                        &policy.name,
                        StepOutcome::Allow,
                        reason.clone(),
                    ));
                    if first_allow.is_none() {
                        first_allow = Some(Decision::new(Effect::Allow, &policy.name, reason));
                    }
                }
            }
        }

        let decision = first_allow.unwrap_or_else(|| {
            Decision::new(Effect::Deny, DEFAULT_POLICY_NAME, DEFAULT_DENY_REASON)
        });
        debug!(
            principal = %ctx.principal.id,
            resource = %ctx.resource.id,
            action = %ctx.action,
            effect = %decision.effect,
            policy = %decision.policy_name,
            steps = trace.steps.len(),
            "request evaluated"
        );
        EvaluationResult { decision, trace }
    }
}

// ============================================================================
// Tests
// ============================================================================
