use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    EnvFilter { value: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::EnvFilter { value, .. } => {
                write!(
                    f,
                    "invalid log level/filter '{}': unable to build EnvFilter",
                    value
                )
            }
            TelemetryError::Subscriber(err) => write!(f, "telemetry error: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::EnvFilter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// Crates whose events the configured level applies to; everything else stays at `warn`.
const SCHOLARSHIP_TARGETS: [&str; 2] = ["scholarship", "scholarship_cli"];

/// Expand a bare level such as `debug` into per-crate directives. Explicit filter strings pass
/// through untouched.
pub fn filter_directives(log_level: &str) -> String {
    let level = log_level.trim();
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }

    let mut directives = vec!["warn".to_string()];
    directives.extend(
        SCHOLARSHIP_TARGETS
            .iter()
            .map(|target| format!("{target}={level}")),
    );
    directives.join(",")
}

/// Install the global subscriber. Logs go to stderr so stdout stays reserved for the report.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let directives = filter_directives(&config.log_level);
            EnvFilter::try_new(&directives).map_err(|source| TelemetryError::EnvFilter {
                value: directives,
                source,
            })?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
