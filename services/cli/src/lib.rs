mod cli;
mod demo;
mod infra;

use crewbase::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
