// crates/tripdb-core/src/lib.rs

//! # tripdb-core
//!
//! Flattens the travel-planning mock files (`countries.json`, `places.json`,
//! `visits2.json`, ...) into one relational document, `db.json`, with an `id`
//! on every record and plain foreign-key columns (`country_id`, `place_id`,
//! `trip_id`, `plan_id`). Referential integrity is not checked.
//!
//! ```no_run
//! use tripdb_core::{build_database, MockSource, NormalizeConfig};
//! use std::path::Path;
//!
//! let stats = build_database(
//!     &MockSource::default(),
//!     Path::new("db.json"),
//!     &NormalizeConfig::default(),
//! )?;
//! println!("{}", stats.summary(Path::new("db.json")));
//! # Ok::<(), tripdb_core::TripDbError>(())
//! ```

pub mod common;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
// Shared raw input shapes
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::common::DbStats;
pub use crate::config::NormalizeConfig;
pub use crate::error::{Result, TripDbError};
pub use crate::loader::builder::build_database;
pub use crate::loader::{MockFile, MockSource, DEFAULT_MOCK_DIR, DEFAULT_OUTPUT};
pub use model::{
    Activity, CostFields, Country, CountryNote, Database, Place, PlaceNote, Plan, Route,
    RouteNote, Season, Traverse, Trip, Visit,
};
