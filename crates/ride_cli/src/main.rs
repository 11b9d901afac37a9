mod commands;
mod logging;

use std::process::ExitCode;

use anyhow::Context;
use commands::{CommandLine, Commands, OutputFormat};
use ride_core::export::to_json_pretty;
use ride_core::pricing::FareSchedule;
use ride_core::ride::Ride;
use ride_core::scenario::run_demo;
use tracing::debug;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    logging::init_logging(commands.verbose);

    match run(commands) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Unexpected error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(commands: CommandLine) -> anyhow::Result<()> {
    let schedule = match &commands.config {
        Some(path) => {
            let schedule = FareSchedule::load(path)
                .with_context(|| format!("loading fare schedule from {}", path.display()))?;
            debug!(path = %path.display(), ?schedule, "fare schedule loaded");
            schedule
        }
        None => FareSchedule::default(),
    };

    match commands.command {
        Commands::Demo { format } => {
            let demo = run_demo(&schedule)?;
            match format {
                OutputFormat::Text => print!("{}", demo.transcript()),
                OutputFormat::Json => println!("{}", to_json_pretty(&demo.export())?),
            }
        }
        Commands::Quote {
            kind,
            distance,
            id,
            pickup,
            dropoff,
        } => {
            let ride = Ride::with_schedule(&schedule, kind.into(), id, pickup, dropoff, distance)?;
            ride.calculate_fare();
            println!("{}", ride.describe());
        }
    }
    Ok(())
}
