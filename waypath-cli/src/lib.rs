//! Command-line interface for the waypath trip planner.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use waypath_core::CityName;

mod error;
mod plan;
mod render;

pub use error::CliError;
pub use render::{GeoJsonRenderer, RenderError};

const ARG_PLAN_CITIES: &str = "cities";
const ARG_PLAN_SITES: &str = "sites";
const ARG_PLAN_DATA_DIR: &str = "data-dir";
const ARG_PLAN_CATEGORIES: &str = "categories";
const ARG_PLAN_START: &str = "start";
const ARG_PLAN_END: &str = "end";
const ARG_PLAN_DAYS: &str = "days";
const ARG_PLAN_SITES_PER_DAY: &str = "sites-per-day";
const ARG_PLAN_REST_STOP: &str = "rest-stop";
const ARG_PLAN_ORDER: &str = "order";
const ARG_PLAN_OUTPUT: &str = "output";
const ENV_PLAN_START: &str = "WAYPATH_CMDS_PLAN_START";
const ENV_PLAN_END: &str = "WAYPATH_CMDS_PLAN_END";

/// Run the waypath CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments, configuration, planning or output
/// fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Plan(args) => plan::run_plan(args, &mut stdout),
        Command::Cities => write_city_names(&mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "waypath",
    about = "Plan multi-day tourism trips along a corridor between two cities",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan a trip and emit it as a map layer.
    Plan(plan::PlanArgs),
    /// List the city names accepted by --start and --end.
    Cities,
}

fn write_city_names(writer: &mut dyn Write) -> Result<(), CliError> {
    for name in CityName::ALL {
        writeln!(writer, "{name}").map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
