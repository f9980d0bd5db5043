//! # warden-compliance: Resource compliance checker
//!
//! Evaluates a resource's static attributes against a set of named
//! invariants and reports every violation in one pass.
//!
//! Unlike the deny-overrides policy engine in `warden-policy`, the checker
//! never short-circuits: compliance rules are independent structural checks,
//! not competing authorization votes, so a caller gets the complete defect
//! list rather than the first failure found.
//!
//! ## Examples
//!
//! ```
//! use warden_compliance::catalog::default_compliance_checker;
//! use warden_types::Resource;
//!
//! let checker = default_compliance_checker();
//! let rogue = Resource::new("db-legacy", "database", "public");
//!
//! let report = checker.evaluate(&rogue);
//! assert!(!report.compliant());
//! assert_eq!(report.violation_count(), 2); // no owner tag, public database
//! ```

pub mod catalog;
pub mod checker;
pub mod report;
pub mod rule;

// Kani proofs for bounded model checking
#[cfg(any(test, kani))]
mod kani_proofs;


pub use catalog::default_compliance_checker;
pub use checker::ComplianceChecker;
pub use report::{ComplianceReport, report_to_json};
pub use rule::{CheckFn, ComplianceRule};
