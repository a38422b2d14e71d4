//! tripdb — turns the travel-planning mocks into `db.json`
//!
//! Reads `countries.json`, `seasons.json`, `places.json`, `routes.json`,
//! `visits2.json`, `activities.json`, `place_notes.json`,
//! `country_notes.json` and `route_notes.json` from the mock directory,
//! flattens every record and writes a single relational document.
//!
//! Usage examples
//! --------------
//!
//! - Build `db.json` from `public/mocks`
//!   $ tripdb
//!
//! - Build from another directory into another file
//!   $ tripdb build -i fixtures/mocks -o /tmp/db.json
//!
//! - Only print the counts
//!   $ tripdb stats
//!
//! Logging goes to stderr and is controlled by `TRIPDB_LOG`
//! (e.g. `TRIPDB_LOG=tripdb_core=debug`).
mod args;
mod logging;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tripdb_core::{build_database, Database, MockSource, NormalizeConfig};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logging::init_tracing(args.verbose);

    let source = MockSource::new(&args.input);
    let config = NormalizeConfig::with_ids(args.trip_id, args.plan_id);
    debug!(input = %source.dir().display(), trip_id = config.trip_id, plan_id = config.plan_id, "normalizing");

    match args.command.unwrap_or(Commands::Build) {
        Commands::Build => {
            let stats = build_database(&source, &args.output, &config).with_context(|| {
                format!(
                    "failed to build {} from {}",
                    args.output.display(),
                    args.input.display()
                )
            })?;
            // Printed only once the file is on disk, so a failed write never reports success.
            println!("{}", stats.summary(&args.output));
        }

        Commands::Stats => {
            let db = Database::load_from_source(&source, &config)
                .with_context(|| format!("failed to load mocks from {}", args.input.display()))?;
            let stats = db.stats();
            println!("Database statistics:");
            println!("  Trips: {}", stats.trips);
            println!("  Plans: {}", stats.plans);
            println!("  Countries: {}", stats.countries);
            println!("  Seasons: {}", stats.seasons);
            println!("  Places: {}", stats.places);
            println!("  Routes: {}", stats.routes);
            println!("  Visits: {}", stats.visits);
            println!("  Traverses: {}", stats.traverses);
            println!("  Activities: {}", stats.activities);
            println!("  Place notes: {}", stats.place_notes);
            println!("  Country notes: {}", stats.country_notes);
            println!("  Route notes: {}", stats.route_notes);
        }
    }

    Ok(())
}
