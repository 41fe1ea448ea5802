use serde::Serialize;
use tracing::{debug, info, warn};

use super::domain::{Candidate, CandidateSubmission};
use super::evaluation::{EligibilityDecision, EligibilityEvaluator, EligibilityPolicy};
use super::intake::{IntakeGuard, IntakeViolation};

/// Validated candidate paired with the decision reached for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub candidate: Candidate,
    pub decision: EligibilityDecision,
}

/// Service composing the intake guard and the eligibility evaluator.
#[derive(Debug, Clone, Default)]
pub struct ScholarshipApplicationService {
    guard: IntakeGuard,
    evaluator: EligibilityEvaluator,
}

impl ScholarshipApplicationService {
    pub fn new(policy: EligibilityPolicy) -> Self {
        Self {
            guard: IntakeGuard,
            evaluator: EligibilityEvaluator::new(policy),
        }
    }

    pub fn evaluator(&self) -> &EligibilityEvaluator {
        &self.evaluator
    }

    /// Validate a submission and evaluate it against the requested tier.
    pub fn assess(&self, submission: CandidateSubmission) -> Result<Assessment, IntakeViolation> {
        let tier = submission.desired_scholarship_type;
        let candidate = match self.guard.candidate_from_submission(submission) {
            Ok(candidate) => candidate,
            Err(violation) => {
                warn!(tier = tier.label(), %violation, "submission rejected at intake");
                return Err(violation);
            }
        };

        debug!(
            per_capita_income = candidate.per_capita_income(),
            final_score = candidate.final_score(),
            "derived candidate scores"
        );

        let decision = self.evaluator.evaluate(&candidate);
        info!(
            tier = tier.label(),
            approved = decision.is_approved(),
            reasons = decision.reasons().len(),
            "scholarship application evaluated"
        );

        Ok(Assessment {
            candidate,
            decision,
        })
    }
}
