use crate::workflows::scholarship::domain::{Candidate, CandidateSubmission, ScholarshipTier};
use crate::workflows::scholarship::evaluation::EligibilityEvaluator;
use crate::workflows::scholarship::intake::IntakeGuard;

/// Strong applicant on the priority track: per-capita 350, final score 9.0.
pub(super) fn applicant(tier: ScholarshipTier) -> CandidateSubmission {
    CandidateSubmission {
        monthly_household_income: 700.0,
        internal_selection_score: 9.0,
        enem_score: 9.0,
        high_school_average: 9.0,
        has_disability: true,
        is_public_school_student: false,
        family_size: 2,
        family_scholarship_recipients: 0,
        desired_scholarship_type: tier,
        desired_course: Some("Engenharia de Software".to_string()),
    }
}

/// Submission whose three academic inputs all equal `score`, so the final score equals it too.
pub(super) fn submission_with_score(tier: ScholarshipTier, score: f64) -> CandidateSubmission {
    CandidateSubmission {
        internal_selection_score: score,
        enem_score: score,
        high_school_average: score,
        ..applicant(tier)
    }
}

pub(super) fn guard() -> IntakeGuard {
    IntakeGuard
}

pub(super) fn candidate(submission: CandidateSubmission) -> Candidate {
    guard()
        .candidate_from_submission(submission)
        .expect("fixture submission is valid")
}

pub(super) fn evaluator() -> EligibilityEvaluator {
    EligibilityEvaluator::default()
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
