use serde::{Deserialize, Serialize};

use super::super::domain::ScholarshipTier;

/// Single rule violation surfaced to the applicant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectionReason {
    IncomeAboveLimit {
        limit: f64,
        per_capita_income: f64,
    },
    ScoreBelowMinimum {
        tier: ScholarshipTier,
        minimum: f64,
        final_score: f64,
        raised_for_missing_priority: bool,
    },
    MissingPriorityStatus,
    FamilyRecipientsAboveLimit {
        limit: u16,
        found: u16,
    },
}

impl RejectionReason {
    pub fn summary(&self) -> String {
        match self {
            RejectionReason::IncomeAboveLimit { limit, .. } => {
                format!("per-capita income exceeds R${limit:.2}")
            }
            RejectionReason::ScoreBelowMinimum {
                tier,
                minimum,
                raised_for_missing_priority,
                ..
            } => {
                if *raised_for_missing_priority {
                    format!(
                        "final score below {minimum:.1} required for the {} scholarship; \
                         candidate is neither a public-school student nor has a disability",
                        tier.label()
                    )
                } else {
                    format!("final score below {minimum:.1}")
                }
            }
            RejectionReason::MissingPriorityStatus => {
                "neither public-school student nor has a disability".to_string()
            }
            RejectionReason::FamilyRecipientsAboveLimit { limit, .. } => match limit {
                0 => "family already has a scholarship recipient".to_string(),
                1 => "more than 1 existing family recipient".to_string(),
                n => format!("more than {n} existing family recipients"),
            },
        }
    }
}

/// Outcome of a single evaluation: approved exactly when no rule was violated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityDecision {
    tier: ScholarshipTier,
    approved: bool,
    reasons: Vec<RejectionReason>,
}

impl EligibilityDecision {
    pub(crate) fn from_reasons(tier: ScholarshipTier, reasons: Vec<RejectionReason>) -> Self {
        Self {
            tier,
            approved: reasons.is_empty(),
            reasons,
        }
    }

    pub fn tier(&self) -> ScholarshipTier {
        self.tier
    }

    pub fn is_approved(&self) -> bool {
        self.approved
    }

    /// Violations in rule order.
    pub fn reasons(&self) -> &[RejectionReason] {
        &self.reasons
    }

    pub fn reason_messages(&self) -> Vec<String> {
        self.reasons.iter().map(RejectionReason::summary).collect()
    }

    pub fn summary(&self) -> String {
        if self.approved {
            format!("{} scholarship approved", self.tier.label())
        } else {
            format!(
                "{} scholarship denied: {}",
                self.tier.label(),
                self.reason_messages().join("; ")
            )
        }
    }
}
