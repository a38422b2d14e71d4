// crates/tripdb-core/src/raw.rs

//! Raw input shapes, as they appear in the mock files.
//!
//! Every mock file is an object keyed by id. The key itself is never part of
//! these structs: the loader hands it to the converters separately. Values the
//! normalizer only passes through are kept as [`serde_json::Value`], so a
//! number stays a number and a `null` stays `null`. A `Value` field is still
//! required: serde reports a missing key as an error.

use serde::Deserialize;
use serde_json::{Map, Value};

/// `countries.json` entry. Everything except the name is dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryRaw {
    pub name: Value,
}

/// `seasons.json` entry: a `country` reference plus arbitrary month columns.
#[derive(Debug, Clone, Deserialize)]
pub struct SeasonRaw {
    pub country: Value,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoordinatesRaw {
    pub lat: Value,
    pub lng: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EstimatedCostsRaw {
    pub accommodation: Value,
    pub food: Value,
    pub miscellaneous: Value,
}

/// `places.json` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceRaw {
    pub name: Value,
    pub coordinates: CoordinatesRaw,
    pub country_id: Value,
    pub season_id: Value,
    pub estimated_costs: EstimatedCostsRaw,
}

/// `routes.json` entry.
///
/// Kept as a whole object because every field is carried to the output in
/// its original position. Only the presence of `route` is checked.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct RouteRaw(pub Map<String, Value>);

impl TryFrom<Map<String, Value>> for RouteRaw {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        if fields.contains_key("route") {
            Ok(Self(fields))
        } else {
            Err("missing field `route`".to_string())
        }
    }
}

/// One element of a visit's `outgoing_edges` list.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeRaw {
    pub destination_id: Value,
    pub route_id: Value,
    pub priority: Value,
    pub rent_until: Value,
    pub includes_accommodation: Value,
}

/// `visits2.json` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct VisitRaw {
    pub place: Value,
    pub nights: Value,
    pub included: Value,
    #[serde(default)]
    pub outgoing_edges: Vec<EdgeRaw>,
}

/// Cost and bookkeeping columns shared by activities, place notes and
/// country notes.
#[derive(Debug, Clone, Deserialize)]
pub struct CostFieldsRaw {
    pub category: Value,
    pub estimated_cost: Value,
    pub actual_cost: Value,
    pub included: Value,
    pub paid: Value,
}

/// Item of `activities.json` or `place_notes.json` (grouped by place id).
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceItemRaw {
    pub id: Value,
    pub place_id: Value,
    #[serde(flatten)]
    pub costs: CostFieldsRaw,
}

/// Item of `country_notes.json` (grouped by country id).
#[derive(Debug, Clone, Deserialize)]
pub struct CountryNoteRaw {
    pub id: Value,
    pub country_id: Value,
    #[serde(flatten)]
    pub costs: CostFieldsRaw,
}

/// Item of `route_notes.json` (grouped by route id).
#[derive(Debug, Clone, Deserialize)]
pub struct RouteNoteRaw {
    pub id: Value,
    pub route_id: Value,
}

/// Entries of a keyed mock file, in file order.
pub type Keyed<T> = Vec<(String, T)>;

/// All mock files, parsed but not yet normalized.
#[derive(Debug, Clone, Default)]
pub struct RawMocks {
    pub countries: Keyed<CountryRaw>,
    pub seasons: Keyed<SeasonRaw>,
    pub places: Keyed<PlaceRaw>,
    pub routes: Keyed<RouteRaw>,
    pub visits: Keyed<VisitRaw>,
    pub activities: Keyed<Vec<PlaceItemRaw>>,
    pub place_notes: Keyed<Vec<PlaceItemRaw>>,
    pub country_notes: Keyed<Vec<CountryNoteRaw>>,
    pub route_notes: Keyed<Vec<RouteNoteRaw>>,
}
