//! Command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{info, warn};

use crate::domain::{AirportCode, ClockTime, InvalidAirportCode, TimeError};
use crate::planner::{DEFAULT_MIN_LAYOVER_MINS, Planner, RouteGraph, SearchConfig, SearchRequest, compare};
use crate::report::{render_json, render_table};
use crate::schedule::{LoadError, load_flights};

/// Compare the fastest and cheapest itineraries between two airports.
#[derive(Debug, Parser)]
#[command(name = "flight-planner", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the earliest-arrival itinerary and the cheapest itinerary per cabin
    Compare(CompareArgs),
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Schedule file (`.csv` with a header row, otherwise whitespace separated)
    pub flight_file: PathBuf,

    /// Airport to leave from
    pub origin: String,

    /// Airport to reach
    pub dest: String,

    /// Earliest departure time, HH:MM
    pub departure_time: String,

    /// Minimum minutes between landing and the next takeoff
    #[arg(long, default_value_t = DEFAULT_MIN_LAYOVER_MINS, value_parser = clap::value_parser!(i64).range(0..))]
    pub min_layover: i64,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Errors surfaced to the user by [`run`].
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("departure time: {0}")]
    Time(#[from] TimeError),

    #[error("{field}: {source}")]
    Airport {
        field: &'static str,
        source: InvalidAirportCode,
    },

    #[error("rendering table: {0}")]
    Render(#[from] askama::Error),

    #[error("rendering JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Execute a parsed command line, returning the report to print.
pub fn run(cli: Cli) -> Result<String, CliError> {
    match cli.command {
        Command::Compare(args) => run_compare(&args),
    }
}

fn run_compare(args: &CompareArgs) -> Result<String, CliError> {
    let origin = airport("origin", &args.origin)?;
    let destination = airport("destination", &args.dest)?;
    let earliest = ClockTime::parse_hhmm(&args.departure_time)?;

    let flights = load_flights(&args.flight_file)?;
    let graph = RouteGraph::build(flights);
    info!(
        flights = graph.flight_count(),
        airports = graph.origin_count(),
        "Built route graph"
    );
    if !graph.serves(&origin) {
        warn!(%origin, "No flights depart the origin airport");
    }

    let config = SearchConfig::new(args.min_layover);
    let planner = Planner::new(&graph, &config);
    let comparison = compare(&planner, &SearchRequest::new(origin, destination, earliest));

    let report = match args.format {
        OutputFormat::Table => render_table(&comparison)?,
        OutputFormat::Json => render_json(&comparison)?,
    };
    Ok(report)
}

fn airport(field: &'static str, value: &str) -> Result<AirportCode, CliError> {
    AirportCode::parse(value).map_err(|source| CliError::Airport { field, source })
}
