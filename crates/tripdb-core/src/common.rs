// crates/tripdb-core/src/common.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Per-category record counts of a normalized [`Database`](crate::Database).
///
/// Returned by [`Database::stats`](crate::Database::stats). The `Display`
/// form is the summary line printed after a build, minus the destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub trips: usize,
    pub plans: usize,
    pub countries: usize,
    pub seasons: usize,
    pub places: usize,
    pub routes: usize,
    pub visits: usize,
    pub traverses: usize,
    pub activities: usize,
    pub place_notes: usize,
    pub country_notes: usize,
    pub route_notes: usize,
}

impl DbStats {
    /// The line printed after a build: `Wrote ... to {out}.`
    pub fn summary(&self, out: &Path) -> String {
        format!("Wrote {self} to {}.", out.display())
    }
}

impl fmt::Display for DbStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Traverses are reported as "edges", the name used by visits2.json.
        write!(
            f,
            "{} trips, {} plans, {} countries, {} seasons, {} places, {} routes, {} visits, \
             {} edges, {} activities, {} place_notes, {} country_notes, {} route_notes",
            self.trips,
            self.plans,
            self.countries,
            self.seasons,
            self.places,
            self.routes,
            self.visits,
            self.traverses,
            self.activities,
            self.place_notes,
            self.country_notes,
            self.route_notes,
        )
    }
}
