mod cli;
mod demo;
mod evaluate;
mod infra;
mod report;

use scholarship::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
