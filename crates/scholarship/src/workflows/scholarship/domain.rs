use serde::{Deserialize, Serialize};

use super::scoring;

/// Scholarship categories a candidate may apply for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScholarshipTier {
    Full,
    Partial,
}

impl ScholarshipTier {
    pub const fn label(self) -> &'static str {
        match self {
            ScholarshipTier::Full => "full",
            ScholarshipTier::Partial => "partial",
        }
    }
}

/// Raw applicant answers as collected by the intake front end, before range validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSubmission {
    pub monthly_household_income: f64,
    pub internal_selection_score: f64,
    pub enem_score: f64,
    pub high_school_average: f64,
    #[serde(default)]
    pub has_disability: bool,
    #[serde(default)]
    pub is_public_school_student: bool,
    pub family_size: u16,
    #[serde(default)]
    pub family_scholarship_recipients: u16,
    pub desired_scholarship_type: ScholarshipTier,
    #[serde(default)]
    pub desired_course: Option<String>,
}

/// Validated candidate record consumed by the evaluator.
///
/// Derived scores are computed once in the constructor and the record exposes no setters, so
/// the evaluator never sees a per-capita income or final score that disagrees with the raw
/// fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    monthly_household_income: f64,
    internal_selection_score: f64,
    enem_score: f64,
    high_school_average: f64,
    has_disability: bool,
    is_public_school_student: bool,
    family_size: u16,
    family_scholarship_recipients: u16,
    desired_scholarship_type: ScholarshipTier,
    desired_course: Option<String>,
    per_capita_income: f64,
    final_score: f64,
}

impl Candidate {
    /// Build a candidate from an already range-checked submission.
    pub(crate) fn from_validated(submission: CandidateSubmission) -> Self {
        let per_capita_income = scoring::per_capita_income(
            submission.monthly_household_income,
            submission.family_size,
        );
        let final_score = scoring::final_score(
            submission.internal_selection_score,
            submission.enem_score,
            submission.high_school_average,
        );

        Self {
            monthly_household_income: submission.monthly_household_income,
            internal_selection_score: submission.internal_selection_score,
            enem_score: submission.enem_score,
            high_school_average: submission.high_school_average,
            has_disability: submission.has_disability,
            is_public_school_student: submission.is_public_school_student,
            family_size: submission.family_size,
            family_scholarship_recipients: submission.family_scholarship_recipients,
            desired_scholarship_type: submission.desired_scholarship_type,
            desired_course: submission.desired_course,
            per_capita_income,
            final_score,
        }
    }

    pub fn monthly_household_income(&self) -> f64 {
        self.monthly_household_income
    }

    pub fn internal_selection_score(&self) -> f64 {
        self.internal_selection_score
    }

    pub fn enem_score(&self) -> f64 {
        self.enem_score
    }

    pub fn high_school_average(&self) -> f64 {
        self.high_school_average
    }

    pub fn has_disability(&self) -> bool {
        self.has_disability
    }

    pub fn is_public_school_student(&self) -> bool {
        self.is_public_school_student
    }

    /// True when the candidate qualifies for the priority track (public school or disability).
    pub fn has_priority_status(&self) -> bool {
        self.is_public_school_student || self.has_disability
    }

    pub fn family_size(&self) -> u16 {
        self.family_size
    }

    pub fn family_scholarship_recipients(&self) -> u16 {
        self.family_scholarship_recipients
    }

    pub fn desired_scholarship_type(&self) -> ScholarshipTier {
        self.desired_scholarship_type
    }

    pub fn desired_course(&self) -> Option<&str> {
        self.desired_course.as_deref()
    }

    pub fn per_capita_income(&self) -> f64 {
        self.per_capita_income
    }

    pub fn final_score(&self) -> f64 {
        self.final_score
    }
}
