mod config;
mod policy;
mod rules;

pub use config::{EligibilityPolicy, TierThresholds};
pub use policy::{EligibilityDecision, RejectionReason};

use super::domain::Candidate;

/// Stateless evaluator that applies the tier rule table to a candidate.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEvaluator {
    policy: EligibilityPolicy,
}

impl EligibilityEvaluator {
    pub fn new(policy: EligibilityPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &EligibilityPolicy {
        &self.policy
    }

    pub fn evaluate(&self, candidate: &Candidate) -> EligibilityDecision {
        let tier = candidate.desired_scholarship_type();
        let reasons = rules::collect_reasons(candidate, self.policy.thresholds(tier));
        EligibilityDecision::from_reasons(tier, reasons)
    }
}
