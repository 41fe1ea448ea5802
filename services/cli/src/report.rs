use chrono::NaiveDate;
use scholarship::config::ReportLanguage;
use scholarship::workflows::scholarship::{Assessment, RejectionReason, ScholarshipTier};
use serde::Serialize;
use std::fmt::Write;

/// Serializable report payload for `--format json`.
#[derive(Debug, Serialize)]
pub(crate) struct AssessmentView {
    pub(crate) evaluated_on: NaiveDate,
    pub(crate) language: &'static str,
    pub(crate) tier: ScholarshipTier,
    pub(crate) desired_course: Option<String>,
    pub(crate) per_capita_income: f64,
    pub(crate) final_score: f64,
    pub(crate) approved: bool,
    pub(crate) reasons: Vec<String>,
}

impl AssessmentView {
    pub(crate) fn new(
        assessment: &Assessment,
        language: ReportLanguage,
        evaluated_on: NaiveDate,
    ) -> Self {
        let candidate = &assessment.candidate;
        let decision = &assessment.decision;

        Self {
            evaluated_on,
            language: language.code(),
            tier: decision.tier(),
            desired_course: candidate.desired_course().map(str::to_string),
            per_capita_income: candidate.per_capita_income(),
            final_score: candidate.final_score(),
            approved: decision.is_approved(),
            reasons: decision
                .reasons()
                .iter()
                .map(|reason| reason_text(reason, language))
                .collect(),
        }
    }
}

struct Labels {
    header: &'static str,
    evaluated_on: &'static str,
    course: &'static str,
    course_missing: &'static str,
    final_score: &'static str,
    per_capita_income: &'static str,
    denied: &'static str,
    reasons: &'static str,
}

const ENGLISH: Labels = Labels {
    header: "===== UNIVERSITY SCHOLARSHIP ASSESSMENT RESULT =====",
    evaluated_on: "Evaluated on",
    course: "Desired course",
    course_missing: "Not provided",
    final_score: "Final score",
    per_capita_income: "Per-capita income",
    denied: "Result: application DENIED!",
    reasons: "Reason(s):",
};

const PORTUGUESE: Labels = Labels {
    header: "===== RESULTADO DA AVALIAÇÃO DE BOLSA UNIVERSITÁRIA =====",
    evaluated_on: "Data da avaliação",
    course: "Curso pretendido",
    course_missing: "Não informado",
    final_score: "Nota Final",
    per_capita_income: "Renda per capita",
    denied: "Resultado: Candidatura INDEFERIDA!",
    reasons: "Motivo(s):",
};

fn labels(language: ReportLanguage) -> &'static Labels {
    match language {
        ReportLanguage::English => &ENGLISH,
        ReportLanguage::Portuguese => &PORTUGUESE,
    }
}

fn granted_line(tier: ScholarshipTier, language: ReportLanguage) -> &'static str {
    match (language, tier) {
        (ReportLanguage::English, ScholarshipTier::Full) => "Result: FULL scholarship GRANTED!",
        (ReportLanguage::English, ScholarshipTier::Partial) => {
            "Result: PARTIAL scholarship GRANTED!"
        }
        (ReportLanguage::Portuguese, ScholarshipTier::Full) => "Resultado: Bolsa Integral CONCEDIDA!",
        (ReportLanguage::Portuguese, ScholarshipTier::Partial) => {
            "Resultado: Bolsa Parcial CONCEDIDA!"
        }
    }
}

/// Localized wording for a single rejection reason.
pub(crate) fn reason_text(reason: &RejectionReason, language: ReportLanguage) -> String {
    match language {
        ReportLanguage::English => reason.summary(),
        ReportLanguage::Portuguese => reason_text_pt(reason),
    }
}

fn reason_text_pt(reason: &RejectionReason) -> String {
    match reason {
        RejectionReason::IncomeAboveLimit { limit, .. } => {
            format!("Renda per capita superior a R$ {limit:.2}.")
        }
        RejectionReason::ScoreBelowMinimum {
            tier,
            minimum,
            raised_for_missing_priority,
            ..
        } => {
            if *raised_for_missing_priority {
                let bolsa = match tier {
                    ScholarshipTier::Full => "Integral",
                    ScholarshipTier::Partial => "Parcial",
                };
                format!(
                    "Nota final inferior a {minimum:.1}, exigido para a Bolsa {bolsa}. \
                     Candidato não é da rede pública e não possui deficiência."
                )
            } else {
                format!("Nota final inferior a {minimum:.1}.")
            }
        }
        RejectionReason::MissingPriorityStatus => {
            "Não possui deficiência e não é da rede pública.".to_string()
        }
        RejectionReason::FamilyRecipientsAboveLimit { limit, .. } => match limit {
            0 => "Já possui familiar bolsista.".to_string(),
            1 => "Número de familiares bolsistas superior ao permitido (máximo de 1 familiar)."
                .to_string(),
            n => format!(
                "Número de familiares bolsistas superior ao permitido (máximo de {n} familiares)."
            ),
        },
    }
}

/// Human-readable report in the layout applicants see at the end of the questionnaire.
pub(crate) fn render_text(
    assessment: &Assessment,
    language: ReportLanguage,
    evaluated_on: NaiveDate,
) -> String {
    let labels = labels(language);
    let candidate = &assessment.candidate;
    let decision = &assessment.decision;
    let mut out = String::new();

    writeln!(&mut out, "{}", labels.header).expect("write header");
    writeln!(&mut out, "{}: {}", labels.evaluated_on, evaluated_on).expect("write date");
    writeln!(
        &mut out,
        "{}: {}",
        labels.course,
        candidate.desired_course().unwrap_or(labels.course_missing)
    )
    .expect("write course");
    writeln!(
        &mut out,
        "{}: {:.2}",
        labels.final_score,
        candidate.final_score()
    )
    .expect("write final score");
    writeln!(
        &mut out,
        "{}: R$ {:.2}",
        labels.per_capita_income,
        candidate.per_capita_income()
    )
    .expect("write per-capita income");

    if decision.is_approved() {
        writeln!(&mut out, "{}", granted_line(decision.tier(), language)).expect("write result");
    } else {
        writeln!(&mut out, "{}", labels.denied).expect("write result");
        writeln!(&mut out, "{}", labels.reasons).expect("write reasons heading");
        for reason in decision.reasons() {
            writeln!(&mut out, "- {}", reason_text(reason, language)).expect("write reason");
        }
    }

    writeln!(&mut out, "{}", "=".repeat(labels.header.chars().count())).expect("write footer");
    out
}
