use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tripdb_core::config::{DEFAULT_PLAN_ID, DEFAULT_TRIP_ID};
use tripdb_core::{DEFAULT_MOCK_DIR, DEFAULT_OUTPUT};

/// CLI arguments for tripdb
#[derive(Debug, Parser)]
#[command(
    name = "tripdb",
    version,
    about = "Normalize the travel-planning mock files into a flat db.json"
)]
pub struct CliArgs {
    /// Directory holding countries.json, places.json, visits2.json, ...
    #[arg(short = 'i', long = "input", global = true, default_value = DEFAULT_MOCK_DIR)]
    pub input: PathBuf,

    /// Output file, overwritten if it exists
    #[arg(short = 'o', long = "output", global = true, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Trip id stamped on places, activities and notes
    #[arg(long = "trip-id", global = true, default_value_t = DEFAULT_TRIP_ID)]
    pub trip_id: i64,

    /// Plan id stamped on visits and traverses
    #[arg(long = "plan-id", global = true, default_value_t = DEFAULT_PLAN_ID)]
    pub plan_id: i64,

    /// Log at debug level (TRIPDB_LOG takes precedence)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Normalize the mocks and write the output file (default)
    Build,

    /// Normalize the mocks and print per-category counts without writing
    Stats,
}
