use super::common::*;
use crate::workflows::scholarship::domain::ScholarshipTier;
use crate::workflows::scholarship::intake::{IntakeViolation, ScoreField, MAX_COURSE_NAME_CHARS};

#[test]
fn guard_rejects_non_positive_income() {
    for income in [0.0, -10.0, f64::NAN] {
        let mut submission = applicant(ScholarshipTier::Full);
        submission.monthly_household_income = income;

        match guard().candidate_from_submission(submission) {
            Err(IntakeViolation::NonPositiveIncome { .. }) => {}
            other => panic!("expected non-positive income violation, got {other:?}"),
        }
    }
}

#[test]
fn guard_rejects_scores_outside_zero_to_ten() {
    let mut submission = applicant(ScholarshipTier::Partial);
    submission.enem_score = 10.5;

    match guard().candidate_from_submission(submission) {
        Err(IntakeViolation::ScoreOutOfRange { field, found }) => {
            assert_eq!(field, ScoreField::Enem);
            assert_eq!(found, 10.5);
        }
        other => panic!("expected score range violation, got {other:?}"),
    }

    let mut submission = applicant(ScholarshipTier::Partial);
    submission.high_school_average = -0.1;
    let err = guard()
        .candidate_from_submission(submission)
        .expect_err("negative average rejected");
    assert_eq!(
        err.to_string(),
        "high school average must be between 0 and 10 (found -0.1)"
    );
}

#[test]
fn guard_accepts_score_bounds() {
    let mut submission = applicant(ScholarshipTier::Partial);
    submission.internal_selection_score = 0.0;
    submission.enem_score = 10.0;
    submission.high_school_average = 10.0;

    assert!(guard().candidate_from_submission(submission).is_ok());
}

#[test]
fn guard_rejects_empty_household() {
    let mut submission = applicant(ScholarshipTier::Full);
    submission.family_size = 0;

    match guard().candidate_from_submission(submission) {
        Err(IntakeViolation::EmptyHousehold) => {}
        other => panic!("expected empty household violation, got {other:?}"),
    }
}

#[test]
fn guard_normalizes_course_names() {
    let mut submission = applicant(ScholarshipTier::Full);
    submission.desired_course = Some("  Medicina  ".to_string());
    assert_eq!(candidate(submission).desired_course(), Some("Medicina"));

    let mut submission = applicant(ScholarshipTier::Full);
    submission.desired_course = Some("   ".to_string());
    assert_eq!(candidate(submission).desired_course(), None);
}

#[test]
fn guard_rejects_overlong_course_names() {
    let mut submission = applicant(ScholarshipTier::Full);
    submission.desired_course = Some("á".repeat(MAX_COURSE_NAME_CHARS));
    assert!(guard().candidate_from_submission(submission).is_ok());

    let mut submission = applicant(ScholarshipTier::Full);
    submission.desired_course = Some("a".repeat(MAX_COURSE_NAME_CHARS + 1));
    match guard().candidate_from_submission(submission) {
        Err(IntakeViolation::CourseNameTooLong { max, found }) => {
            assert_eq!(max, MAX_COURSE_NAME_CHARS);
            assert_eq!(found, MAX_COURSE_NAME_CHARS + 1);
        }
        other => panic!("expected course name violation, got {other:?}"),
    }
}
