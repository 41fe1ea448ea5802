use serde::{Deserialize, Serialize};

use super::super::domain::ScholarshipTier;

/// Thresholds applied to a single scholarship tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub max_per_capita_income: f64,
    pub minimum_final_score: f64,
    /// Stricter minimum applied to candidates without public-school or disability status.
    pub minimum_final_score_without_priority: Option<f64>,
    /// Whether public-school enrollment or a disability is mandatory for the tier.
    pub requires_priority_status: bool,
    pub max_family_recipients: u16,
}

/// Rule table covering both scholarship tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityPolicy {
    pub full: TierThresholds,
    pub partial: TierThresholds,
}

impl EligibilityPolicy {
    /// The published program rules.
    pub fn standard() -> Self {
        Self {
            full: TierThresholds {
                max_per_capita_income: 800.0,
                minimum_final_score: 8.0,
                minimum_final_score_without_priority: None,
                requires_priority_status: true,
                max_family_recipients: 0,
            },
            partial: TierThresholds {
                max_per_capita_income: 1600.0,
                minimum_final_score: 6.0,
                minimum_final_score_without_priority: Some(7.5),
                requires_priority_status: false,
                max_family_recipients: 1,
            },
        }
    }

    pub fn thresholds(&self, tier: ScholarshipTier) -> &TierThresholds {
        match tier {
            ScholarshipTier::Full => &self.full,
            ScholarshipTier::Partial => &self.partial,
        }
    }
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
