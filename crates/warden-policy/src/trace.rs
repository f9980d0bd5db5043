//! Evaluation traces.
//!
//! Every evaluation produces, alongside the decision, an ordered audit record
//! of each policy actually consulted and how it voted. Policies skipped by a
//! deny short-circuit never appear in the trace.

use serde::{Deserialize, Serialize};
use warden_types::{Decision, RequestContext};

// ============================================================================
// StepOutcome
// ============================================================================

/// How one consulted policy voted.
///
/// Unlike [`warden_types::Effect`], this is a tri-state: abstention is
/// recorded in the trace even though it can never become the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepOutcome {
    /// The policy voted to allow.
    Allow,
    /// The policy vetoed the request.
    Deny,
    /// The policy expressed no opinion.
    Abstain,
}

impl std::fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Allow => write!(f, "Allow"),
            Self::Deny => write!(f, "Deny"),
            Self::Abstain => write!(f, "Abstain"),
        }
    }
}

// ============================================================================
// EvaluationStep
// ============================================================================

/// One entry in the audit trace: a policy and its vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationStep {
    /// Name of the consulted policy.
    pub policy: String,
    /// How it voted.
    pub outcome: StepOutcome,
    /// The policy's stated reason; empty when it abstained.
    pub reason: String,
}

impl EvaluationStep {
    pub fn new(policy: impl Into<String>, outcome: StepOutcome, reason: impl Into<String>) -> Self {
        Self {
            policy: policy.into(),
            outcome,
            reason: reason.into(),
        }
    }

    /// An abstain step carries no reason.
    pub fn abstain(policy: impl Into<String>) -> Self {
        Self::new(policy, StepOutcome::Abstain, "")
    }
}

// ============================================================================
// EvaluationTrace
// ============================================================================

/// The ordered audit record of one evaluation.
///
/// Owns its own copy of the request context, independent of the caller's
/// value; later caller-side mutation cannot affect a returned trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationTrace {
    /// The context that was evaluated.
    pub context: RequestContext,
    /// One step per policy consulted, in evaluation order.
    pub steps: Vec<EvaluationStep>,
}

impl EvaluationTrace {
    pub fn new(context: RequestContext) -> Self {
        Self {
            context,
            steps: Vec::new(),
        }
    }

    /// Number of steps in which the policy expressed an opinion
    /// (allow or deny).
    pub fn evaluated_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.outcome != StepOutcome::Abstain)
            .count()
    }

    /// Number of abstentions. Always equals
    /// `steps.len() - evaluated_count()`.
    pub fn abstain_count(&self) -> usize {
        self.steps.len() - self.evaluated_count()
    }
}

// ============================================================================
// EvaluationResult
// ============================================================================

/// A decision together with the trace that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub decision: Decision,
    pub trace: EvaluationTrace,
}

// ============================================================================
// Tests
// ============================================================================
