use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};
use scholarship::config::ReportLanguage;
use scholarship::workflows::scholarship::{
    EligibilityPolicy, ScholarshipApplicationService, ScholarshipTier,
};

/// Presentation flags shared by every command that prints a report.
#[derive(Args, Debug, Default)]
pub(crate) struct OutputArgs {
    /// Output format for the decision report
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
    /// Report language, `en` or `pt` (overrides APP_REPORT_LANGUAGE)
    #[arg(long, value_parser = parse_language)]
    pub(crate) language: Option<ReportLanguage>,
    /// Evaluation date printed on the report (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

impl OutputArgs {
    pub(crate) fn evaluated_on(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub(crate) fn application_service() -> ScholarshipApplicationService {
    ScholarshipApplicationService::new(EligibilityPolicy::standard())
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_language(raw: &str) -> Result<ReportLanguage, String> {
    ReportLanguage::parse(raw).ok_or_else(|| format!("unsupported language '{raw}' (use en or pt)"))
}

pub(crate) fn parse_tier(raw: &str) -> Result<ScholarshipTier, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "full" | "integral" => Ok(ScholarshipTier::Full),
        "2" | "partial" | "parcial" => Ok(ScholarshipTier::Partial),
        _ => Err(format!(
            "scholarship type must be full (1) or partial (2), found '{raw}'"
        )),
    }
}

pub(crate) fn parse_income(raw: &str) -> Result<f64, String> {
    let value = parse_number(raw)?;
    if value <= 0.0 {
        return Err(format!("income must be greater than 0, found {value}"));
    }
    Ok(value)
}

pub(crate) fn parse_score(raw: &str) -> Result<f64, String> {
    let value = parse_number(raw)?;
    if !(0.0..=10.0).contains(&value) {
        return Err(format!("score must be between 0 and 10, found {value}"));
    }
    Ok(value)
}

/// Accepts both `1234.5` and the Brazilian `1234,5` decimal separator.
fn parse_number(raw: &str) -> Result<f64, String> {
    let normalized = raw.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(format!("'{raw}' is not a valid number")),
    }
}
