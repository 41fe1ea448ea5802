use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub report: ReportConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        let language = match env::var("APP_REPORT_LANGUAGE") {
            Ok(raw) => ReportLanguage::parse(&raw)
                .ok_or(ConfigError::InvalidLanguage { value: raw })?,
            Err(_) => ReportLanguage::English,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            report: ReportConfig { language },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Presentation settings for the printed decision report.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub language: ReportLanguage,
}

/// Languages the report renderer knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportLanguage {
    English,
    Portuguese,
}

impl ReportLanguage {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "english" => Some(Self::English),
            "pt" | "pt-br" | "portuguese" => Some(Self::Portuguese),
            _ => None,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            ReportLanguage::English => "en",
            ReportLanguage::Portuguese => "pt-br",
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidLanguage { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidLanguage { value } => write!(
                f,
                "APP_REPORT_LANGUAGE must be 'en' or 'pt' (found '{}')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_REPORT_LANGUAGE");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "warn");
        assert_eq!(config.report.language, ReportLanguage::English);
    }

    #[test]
    fn reads_portuguese_report_language() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "ci");
        env::set_var("APP_REPORT_LANGUAGE", "pt-BR");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(config.report.language, ReportLanguage::Portuguese);
        reset_env();
    }

    #[test]
    fn rejects_unknown_report_language() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_REPORT_LANGUAGE", "klingon");
        match AppConfig::load() {
            Err(ConfigError::InvalidLanguage { value }) => assert_eq!(value, "klingon"),
            other => panic!("expected invalid language, got {other:?}"),
        }
        reset_env();
    }
}
