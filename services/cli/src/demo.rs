use crate::evaluate::print_assessment;
use crate::infra::{application_service, OutputArgs};
use clap::Args;
use scholarship::config::ReportLanguage;
use scholarship::error::AppError;
use scholarship::workflows::scholarship::{CandidateSubmission, ScholarshipTier};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

/// Walk the reference applicants through the evaluator and print each report.
pub(crate) fn run_demo(args: DemoArgs, default_language: ReportLanguage) -> Result<(), AppError> {
    let language = args.output.language.unwrap_or(default_language);
    let evaluated_on = args.output.evaluated_on();
    let service = application_service();

    println!("Scholarship eligibility demo");
    for (title, submission) in reference_applicants() {
        println!("\n{title}");
        let assessment = service.assess(submission)?;
        print_assessment(&assessment, args.output.format, language, evaluated_on)?;
    }

    Ok(())
}

fn applicant(
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

pub(crate) fn reference_applicants() -> Vec<(&'static str, CandidateSubmission)> {
    let mut disability_full = applicant(ScholarshipTier::Full, 700.0, 2, 9.0);
    disability_full.has_disability = true;
    disability_full.desired_course = Some("Medicina".to_string());

    let high_income_full = applicant(ScholarshipTier::Full, 2000.0, 1, 9.0);

    let private_school_partial = applicant(ScholarshipTier::Partial, 1000.0, 1, 6.5);

    let mut public_school_partial = applicant(ScholarshipTier::Partial, 1000.0, 1, 6.5);
    public_school_partial.is_public_school_student = true;
    public_school_partial.family_scholarship_recipients = 1;
    public_school_partial.desired_course = Some("Pedagogia".to_string());

    let mut high_income_partial = applicant(ScholarshipTier::Partial, 2000.0, 1, 9.0);
    high_income_partial.is_public_school_student = true;

    vec![
        ("1) Full scholarship, candidate with a disability", disability_full),
        ("2) Full scholarship, high income and no priority status", high_income_full),
        ("3) Partial scholarship, private school below raised minimum", private_school_partial),
        ("4) Partial scholarship, public school with one family recipient", public_school_partial),
        ("5) Partial scholarship, income above ceiling", high_income_partial),
    ]
}
