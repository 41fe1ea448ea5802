//! Scholarship application intake, scoring, and eligibility evaluation.
//!
//! Data flows one way: a raw [`CandidateSubmission`] passes the [`IntakeGuard`] to become an
//! immutable [`Candidate`] carrying its derived per-capita income and final score, and the
//! [`EligibilityEvaluator`] turns that candidate into an [`EligibilityDecision`].

pub mod domain;
pub mod evaluation;
pub mod intake;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Candidate, CandidateSubmission, ScholarshipTier};
pub use evaluation::{
    EligibilityDecision, EligibilityEvaluator, EligibilityPolicy, RejectionReason, TierThresholds,
};
pub use intake::{IntakeGuard, IntakeViolation, ScoreField};
pub use service::{Assessment, ScholarshipApplicationService};
