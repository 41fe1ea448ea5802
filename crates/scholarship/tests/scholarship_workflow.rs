//! End-to-end scholarship scenarios driven through the public service facade.

use scholarship::workflows::scholarship::{
    CandidateSubmission, RejectionReason, ScholarshipApplicationService, ScholarshipTier,
};

fn submission(
    tier: ScholarshipTier,
    monthly_household_income: f64,
    family_size: u16,
    score: f64,
) -> CandidateSubmission {
    CandidateSubmission {
        monthly_household_income,
        internal_selection_score: score,
        enem_score: score,
        high_school_average: score,
        has_disability: false,
        is_public_school_student: false,
        family_size,
        family_scholarship_recipients: 0,
        desired_scholarship_type: tier,
        desired_course: None,
    }
}

fn service() -> ScholarshipApplicationService {
    ScholarshipApplicationService::default()
}

#[test]
fn full_scholarship_granted_to_candidate_with_disability() {
    let mut submission = submission(ScholarshipTier::Full, 700.0, 2, 9.0);
    submission.has_disability = true;

    let assessment = service().assess(submission).expect("valid submission");

    assert!((assessment.candidate.per_capita_income() - 350.0).abs() < 1e-9);
    assert!((assessment.candidate.final_score() - 9.0).abs() < 1e-9);
    assert!(assessment.decision.is_approved());
    assert!(assessment.decision.reasons().is_empty());
}

#[test]
fn full_scholarship_denied_for_income_and_missing_priority_status() {
    let submission = submission(ScholarshipTier::Full, 2000.0, 1, 9.0);

    let assessment = service().assess(submission).expect("valid submission");

    assert!(!assessment.decision.is_approved());
    assert_eq!(
        assessment.decision.reason_messages(),
        vec![
            "per-capita income exceeds R$800.00",
            "neither public-school student nor has a disability",
        ]
    );
}

#[test]
fn partial_scholarship_denied_under_raised_threshold() {
    let submission = submission(ScholarshipTier::Partial, 1000.0, 1, 6.5);

    let assessment = service().assess(submission).expect("valid submission");

    assert!(!assessment.decision.is_approved());
    assert_eq!(assessment.decision.reasons().len(), 1);
    assert!(matches!(
        assessment.decision.reasons()[0],
        RejectionReason::ScoreBelowMinimum {
            raised_for_missing_priority: true,
            ..
        }
    ));
    let message = &assessment.decision.reason_messages()[0];
    assert!(message.contains("7.5"), "message names threshold: {message}");
    assert!(message.contains("neither a public-school student nor has a disability"));
}

#[test]
fn partial_scholarship_granted_to_public_school_student_with_one_family_recipient() {
    let mut submission = submission(ScholarshipTier::Partial, 1000.0, 1, 6.5);
    submission.is_public_school_student = true;
    submission.family_scholarship_recipients = 1;

    let assessment = service().assess(submission).expect("valid submission");

    assert!(assessment.decision.is_approved());
}

#[test]
fn partial_scholarship_denied_for_income_only() {
    let mut submission = submission(ScholarshipTier::Partial, 2000.0, 1, 9.0);
    submission.is_public_school_student = true;

    let assessment = service().assess(submission).expect("valid submission");

    assert_eq!(
        assessment.decision.reasons(),
        &[RejectionReason::IncomeAboveLimit {
            limit: 1600.0,
            per_capita_income: 2000.0,
        }]
    );
    assert_eq!(
        assessment.decision.reason_messages(),
        vec!["per-capita income exceeds R$1600.00"]
    );
}

#[test]
fn submission_parses_from_json() {
    let raw = r#"{
        "monthly_household_income": 1200.0,
        "internal_selection_score": 8.5,
        "enem_score": 7.0,
        "high_school_average": 9.0,
        "is_public_school_student": true,
        "family_size": 3,
        "desired_scholarship_type": "partial",
        "desired_course": "Direito"
    }"#;

    let submission: CandidateSubmission = serde_json::from_str(raw).expect("json parses");
    assert!(!submission.has_disability);
    assert_eq!(submission.family_scholarship_recipients, 0);

    let assessment = service().assess(submission).expect("valid submission");
    assert!(assessment.decision.is_approved());
    assert_eq!(assessment.candidate.desired_course(), Some("Direito"));
}

#[test]
fn unknown_tier_is_rejected_before_evaluation() {
    let raw = r#"{
        "monthly_household_income": 1200.0,
        "internal_selection_score": 8.5,
        "enem_score": 7.0,
        "high_school_average": 9.0,
        "family_size": 3,
        "desired_scholarship_type": "honorary"
    }"#;

    assert!(serde_json::from_str::<CandidateSubmission>(raw).is_err());
}
