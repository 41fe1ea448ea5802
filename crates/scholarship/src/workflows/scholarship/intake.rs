use super::domain::{Candidate, CandidateSubmission};

/// Longest desired-course name accepted at intake, in characters.
pub const MAX_COURSE_NAME_CHARS: usize = 99;

const MIN_SCORE: f64 = 0.0;
const MAX_SCORE: f64 = 10.0;

/// Validation errors raised by the intake guard.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("monthly household income must be greater than zero (found {found})")]
    NonPositiveIncome { found: f64 },
    #[error("{field} must be between 0 and 10 (found {found})")]
    ScoreOutOfRange { field: ScoreField, found: f64 },
    #[error("family size must be at least 1")]
    EmptyHousehold,
    #[error("desired course name exceeds {max} characters (found {found})")]
    CourseNameTooLong { max: usize, found: usize },
}

/// Academic inputs subject to the 0-10 range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreField {
    InternalSelection,
    Enem,
    HighSchoolAverage,
}

impl std::fmt::Display for ScoreField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ScoreField::InternalSelection => "internal selection score",
            ScoreField::Enem => "ENEM score",
            ScoreField::HighSchoolAverage => "high school average",
        };
        f.write_str(label)
    }
}

/// Guard responsible for producing `Candidate` instances.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    /// Range-check a raw submission and build the immutable candidate record.
    pub fn candidate_from_submission(
        &self,
        mut submission: CandidateSubmission,
    ) -> Result<Candidate, IntakeViolation> {
        let income = submission.monthly_household_income;
        if !income.is_finite() || income <= 0.0 {
            return Err(IntakeViolation::NonPositiveIncome { found: income });
        }

        check_score(
            ScoreField::InternalSelection,
            submission.internal_selection_score,
        )?;
        check_score(ScoreField::Enem, submission.enem_score)?;
        check_score(
            ScoreField::HighSchoolAverage,
            submission.high_school_average,
        )?;

        if submission.family_size == 0 {
            return Err(IntakeViolation::EmptyHousehold);
        }

        submission.desired_course = match submission.desired_course.take() {
            Some(course) => normalize_course(&course)?,
            None => None,
        };

        Ok(Candidate::from_validated(submission))
    }
}

fn check_score(field: ScoreField, value: f64) -> Result<(), IntakeViolation> {
    if value.is_finite() && (MIN_SCORE..=MAX_SCORE).contains(&value) {
        Ok(())
    } else {
        Err(IntakeViolation::ScoreOutOfRange {
            field,
            found: value,
        })
    }
}

fn normalize_course(raw: &str) -> Result<Option<String>, IntakeViolation> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let length = trimmed.chars().count();
    if length > MAX_COURSE_NAME_CHARS {
        return Err(IntakeViolation::CourseNameTooLong {
            max: MAX_COURSE_NAME_CHARS,
            found: length,
        });
    }

    Ok(Some(trimmed.to_string()))
}
