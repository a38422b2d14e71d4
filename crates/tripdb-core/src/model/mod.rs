// crates/tripdb-core/src/model/mod.rs
pub mod convert;
pub mod flat;

pub use flat::{
    Activity, CostFields, Country, CountryNote, Database, Place, PlaceNote, Plan, Route,
    RouteNote, Season, Traverse, Trip, Visit,
};
