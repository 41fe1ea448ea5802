use super::super::domain::Candidate;
use super::config::TierThresholds;
use super::policy::RejectionReason;

/// Slack absorbing floating-point error in the weighted sum, so a score whose decimal value sits
/// exactly on a threshold meets it.
const SCORE_TOLERANCE: f64 = 1e-9;

/// Run every rule for the candidate's tier. Rules are independent and never short-circuit.
pub(crate) fn collect_reasons(
    candidate: &Candidate,
    thresholds: &TierThresholds,
) -> Vec<RejectionReason> {
    [
        income_rule(candidate, thresholds),
        score_rule(candidate, thresholds),
        priority_rule(candidate, thresholds),
        family_recipients_rule(candidate, thresholds),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn income_rule(candidate: &Candidate, thresholds: &TierThresholds) -> Option<RejectionReason> {
    let per_capita_income = candidate.per_capita_income();
    (per_capita_income > thresholds.max_per_capita_income).then(|| {
        RejectionReason::IncomeAboveLimit {
            limit: thresholds.max_per_capita_income,
            per_capita_income,
        }
    })
}

fn score_rule(candidate: &Candidate, thresholds: &TierThresholds) -> Option<RejectionReason> {
    let (minimum, raised_for_missing_priority) =
        match thresholds.minimum_final_score_without_priority {
            Some(raised) if !candidate.has_priority_status() => (raised, true),
            _ => (thresholds.minimum_final_score, false),
        };

    let final_score = candidate.final_score();
    (final_score + SCORE_TOLERANCE < minimum).then(|| RejectionReason::ScoreBelowMinimum {
        tier: candidate.desired_scholarship_type(),
        minimum,
        final_score,
        raised_for_missing_priority,
    })
}

fn priority_rule(candidate: &Candidate, thresholds: &TierThresholds) -> Option<RejectionReason> {
    (thresholds.requires_priority_status && !candidate.has_priority_status())
        .then_some(RejectionReason::MissingPriorityStatus)
}

fn family_recipients_rule(
    candidate: &Candidate,
    thresholds: &TierThresholds,
) -> Option<RejectionReason> {
    let found = candidate.family_scholarship_recipients();
    (found > thresholds.max_family_recipients).then(|| {
        RejectionReason::FamilyRecipientsAboveLimit {
            limit: thresholds.max_family_recipients,
            found,
        }
    })
}
