use clap::{Parser, Subcommand};

use crate::demo::{run_access_check, run_demo, run_score_report, AccessCheckArgs, DemoArgs, ReportArgs};
use crewbase::config::AppConfig;
use crewbase::error::AppError;
use crewbase::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "crewbase",
    about = "Inspect and demonstrate the crewbase people-operations core from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk through access checks, evaluation intake, and scoring on a seeded company
    Demo(DemoArgs),
    /// Produce a company score report from an exported evaluation history
    Report(ReportArgs),
    /// Ask the standing policy whether a subject may act on a resource
    Check(AccessCheckArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let cli = Cli::parse();
    let command = cli.command.unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Demo(args) => run_demo(args, config.directory.company_id),
        Command::Report(args) => run_score_report(args, config.directory.company_id),
        Command::Check(args) => run_access_check(args, config.directory.company_id),
    }
}
