//! Income normalization and academic score weighting.

pub const INTERNAL_SELECTION_WEIGHT: f64 = 0.4;
pub const ENEM_WEIGHT: f64 = 0.3;
pub const HIGH_SCHOOL_WEIGHT: f64 = 0.3;

/// Household income divided across its members.
///
/// Non-positive income normalizes to zero, and a household of zero or one member keeps the full
/// income so the division is never by zero.
pub fn per_capita_income(monthly_income: f64, family_size: u16) -> f64 {
    if monthly_income <= 0.0 {
        return 0.0;
    }

    if family_size <= 1 {
        return monthly_income;
    }

    monthly_income / f64::from(family_size)
}

/// Weighted academic score. Inputs are expected in [0, 10]; no clamping is applied.
pub fn final_score(internal_selection_score: f64, enem_score: f64, high_school_average: f64) -> f64 {
    internal_selection_score * INTERNAL_SELECTION_WEIGHT
        + enem_score * ENEM_WEIGHT
        + high_school_average * HIGH_SCHOOL_WEIGHT
}
