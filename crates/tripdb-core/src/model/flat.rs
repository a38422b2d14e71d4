// crates/tripdb-core/src/model/flat.rs
use crate::common::DbStats;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The normalized document written to `db.json`.
///
/// One flat collection per entity category. Field declaration order is the
/// key order of the serialized document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Database {
    pub trips: Vec<Trip>,
    pub plans: Vec<Plan>,
    pub countries: Vec<Country>,
    pub seasons: Vec<Season>,
    pub places: Vec<Place>,
    pub routes: Vec<Route>,
    pub visits: Vec<Visit>,
    pub traverses: Vec<Traverse>,
    pub activities: Vec<Activity>,
    pub place_notes: Vec<PlaceNote>,
    pub country_notes: Vec<CountryNote>,
    pub route_notes: Vec<RouteNote>,
}

impl Database {
    pub fn stats(&self) -> DbStats {
        DbStats {
            trips: self.trips.len(),
            plans: self.plans.len(),
            countries: self.countries.len(),
            seasons: self.seasons.len(),
            places: self.places.len(),
            routes: self.routes.len(),
            visits: self.visits.len(),
            traverses: self.traverses.len(),
            activities: self.activities.len(),
            place_notes: self.place_notes.len(),
            country_notes: self.country_notes.len(),
            route_notes: self.route_notes.len(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: i64,
    pub name: String,
    pub start_date: String,
    pub note: Option<String>,
    pub priority: f64,
    pub lat: f64,
    pub lng: f64,
    pub zoom: f64,
    pub trip_id: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: String,
    pub name: Value,
}

/// A season row: `id`, the raw month columns, then `country_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Season(pub Map<String, Value>);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: Value,
    pub lat: Value,
    pub lng: Value,
    pub country_id: Value,
    pub season_id: Value,
    pub trip_id: i64,
    pub accommodation_cost: Value,
    pub food_cost: Value,
    pub miscellaneous_cost: Value,
}

/// A route row: the raw fields with `route` stringified and space-free.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route(pub Map<String, Value>);

impl Route {
    /// The normalized `route` column.
    pub fn route(&self) -> Option<&str> {
        self.0.get("route").and_then(Value::as_str)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    pub id: String,
    pub place_id: Value,
    pub plan_id: i64,
    pub nights: Value,
    pub included: Value,
}

/// Directed edge between two visits of the active plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Traverse {
    /// `"{source_visit_id}-{target_visit_id}-{route_id}"`
    pub id: String,
    pub source_visit_id: String,
    pub target_visit_id: Value,
    pub route_id: Value,
    pub priority: Value,
    pub rent_until: Value,
    pub includes_accommodation: Value,
    pub plan_id: i64,
}

/// Cost columns shared by activities, place notes and country notes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostFields {
    pub category: Value,
    pub estimated_cost: Value,
    pub actual_cost: Value,
    pub included: Value,
    pub paid: Value,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: Value,
    pub place_id: Value,
    /// Always blank; descriptions are fetched lazily by the client.
    pub description: String,
    #[serde(flatten)]
    pub costs: CostFields,
    pub trip_id: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceNote {
    pub id: Value,
    pub place_id: Value,
    pub description: String,
    #[serde(flatten)]
    pub costs: CostFields,
    pub trip_id: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryNote {
    pub id: Value,
    pub country_id: Value,
    pub description: String,
    #[serde(flatten)]
    pub costs: CostFields,
    pub trip_id: i64,
}

/// Route notes carry no cost columns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteNote {
    pub id: Value,
    pub route_id: Value,
    pub description: String,
    pub trip_id: i64,
}
