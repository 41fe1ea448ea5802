use crate::infra::{
    application_service, parse_income, parse_score, parse_tier, OutputArgs, OutputFormat,
};
use crate::report::{render_text, AssessmentView};
use clap::Args;
use scholarship::config::ReportLanguage;
use scholarship::error::AppError;
use scholarship::workflows::scholarship::{Assessment, CandidateSubmission, ScholarshipTier};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// JSON file holding a single candidate submission (replaces the field flags)
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Monthly household income in R$
    #[arg(long, value_parser = parse_income, required_unless_present = "input")]
    pub(crate) income: Option<f64>,
    /// Internal selection process score (0 to 10)
    #[arg(long, value_parser = parse_score, required_unless_present = "input")]
    pub(crate) internal_score: Option<f64>,
    /// ENEM score (0 to 10)
    #[arg(long, value_parser = parse_score, required_unless_present = "input")]
    pub(crate) enem_score: Option<f64>,
    /// High school overall average (0 to 10)
    #[arg(long, value_parser = parse_score, required_unless_present = "input")]
    pub(crate) high_school_average: Option<f64>,
    /// Candidate has a disability
    #[arg(long)]
    pub(crate) disability: bool,
    /// Candidate studied in the public school system
    #[arg(long)]
    pub(crate) public_school: bool,
    /// Number of people in the household
    #[arg(
        long,
        value_parser = clap::value_parser!(u16).range(1..),
        required_unless_present = "input"
    )]
    pub(crate) family_size: Option<u16>,
    /// Family members already holding a scholarship at the university
    #[arg(long, default_value_t = 0)]
    pub(crate) family_recipients: u16,
    /// Requested scholarship: full (1) or partial (2)
    #[arg(long, value_parser = parse_tier, required_unless_present = "input")]
    pub(crate) tier: Option<ScholarshipTier>,
    /// Desired course (optional)
    #[arg(long)]
    pub(crate) course: Option<String>,
    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

pub(crate) fn run_evaluate(
    args: EvaluateArgs,
    default_language: ReportLanguage,
) -> Result<(), AppError> {
    let language = args.output.language.unwrap_or(default_language);
    let evaluated_on = args.output.evaluated_on();
    let format = args.output.format;

    let submission = match &args.input {
        Some(path) => {
            info!(path = %path.display(), "reading candidate submission");
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str::<CandidateSubmission>(&raw)?
        }
        None => submission_from_flags(&args)?,
    };

    let assessment = application_service().assess(submission)?;
    print_assessment(&assessment, format, language, evaluated_on)
}

pub(crate) fn print_assessment(
    assessment: &Assessment,
    format: OutputFormat,
    language: ReportLanguage,
    evaluated_on: chrono::NaiveDate,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => print!("{}", render_text(assessment, language, evaluated_on)),
        OutputFormat::Json => {
            let view = AssessmentView::new(assessment, language, evaluated_on);
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }
    Ok(())
}

fn submission_from_flags(args: &EvaluateArgs) -> Result<CandidateSubmission, AppError> {
    Ok(CandidateSubmission {
        monthly_household_income: required(args.income, "--income")?,
        internal_selection_score: required(args.internal_score, "--internal-score")?,
        enem_score: required(args.enem_score, "--enem-score")?,
        high_school_average: required(args.high_school_average, "--high-school-average")?,
        has_disability: args.disability,
        is_public_school_student: args.public_school,
        family_size: required(args.family_size, "--family-size")?,
        family_scholarship_recipients: args.family_recipients,
        desired_scholarship_type: required(args.tier, "--tier")?,
        desired_course: args.course.clone(),
    })
}

fn required<T>(value: Option<T>, flag: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::Usage(format!("{flag} is required without --input")))
}
