use crate::demo::{run_demo, DemoArgs};
use crate::evaluate::{run_evaluate, EvaluateArgs};
use clap::{Parser, Subcommand};
use scholarship::config::AppConfig;
use scholarship::error::AppError;
use scholarship::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "scholarship",
    about = "Decide university scholarship applications from income and academic scores",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a single candidate given as flags or a JSON file
    Evaluate(EvaluateArgs),
    /// Print reports for the reference applicants (default command)
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(?config.environment, language = config.report.language.code(), "configuration loaded");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Evaluate(args) => run_evaluate(args, config.report.language),
        Command::Demo(args) => run_demo(args, config.report.language),
    }
}
