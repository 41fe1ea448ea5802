use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::scholarship::IntakeViolation;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Input(serde_json::Error),
    Intake(IntakeViolation),
    Usage(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Input(err) => write!(f, "malformed candidate input: {}", err),
            AppError::Intake(err) => write!(f, "invalid application: {}", err),
            AppError::Usage(message) => write!(f, "usage error: {}", message),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Input(err) => Some(err),
            AppError::Intake(err) => Some(err),
            AppError::Usage(_) => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Input(value)
    }
}

impl From<IntakeViolation> for AppError {
    fn from(value: IntakeViolation) -> Self {
        Self::Intake(value)
    }
}
