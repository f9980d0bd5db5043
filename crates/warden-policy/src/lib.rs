//! # warden-policy: Policy decision engine
//!
//! Evaluates access requests against an ordered list of named policies and
//! produces a binary Allow/Deny decision plus an auditable trace of how each
//! consulted policy voted.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  RequestContext                              │
//! │  (Principal + Resource + Action + env + MFA) │
//! └─────────────────┬───────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────────┐
//! │  PolicyEngine (deny-overrides)               │
//! │  ├─ Consult policies in registration order   │
//! │  ├─ First Deny vetoes and stops              │
//! │  ├─ First Allow wins if no Deny appears      │
//! │  └─ No opinion → fail-closed default Deny    │
//! └─────────────────┬───────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────────┐
//! │  EvaluationResult                            │
//! │  - Decision (Effect + policy + reason)       │
//! │  - EvaluationTrace (one step per policy      │
//! │    consulted: Allow / Deny / Abstain)        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Examples
//!
//! ```
//! use warden_policy::catalog::default_policy_engine;
//! use warden_types::{Action, Effect, Principal, RequestContext, Resource};
//!
//! let engine = default_policy_engine();
//! let ctx = RequestContext::new(
//!     Principal::new("alice@corp.io", "admin", "IT"),
//!     Resource::new("db-patient-records", "database", "restricted")
//!         .with_tag("owner", "health-team"),
//!     Action::new("delete"),
//!     "production",
//!     true,
//! );
//!
//! let result = engine.evaluate(&ctx);
//! assert_eq!(result.decision.effect, Effect::Allow);
//! assert_eq!(result.decision.policy_name, "AdminFullAccess");
//! ```

pub mod catalog;
pub mod engine;
pub mod policy;
pub mod render;
pub mod trace;

// Kani proofs for bounded model checking
#[cfg(any(test, kani))]
mod kani_proofs;


pub use catalog::default_policy_engine;
pub use engine::{DEFAULT_DENY_REASON, DEFAULT_POLICY_NAME, PolicyEngine};
pub use policy::{Policy, PolicyFn, Vote};
pub use render::{decision_to_json, result_to_json};
pub use trace::{EvaluationResult, EvaluationStep, EvaluationTrace, StepOutcome};
