// crates/tripdb-core/src/config.rs

//! Normalization parameters.
//!
//! The mock data describes exactly one trip and one active plan. Their ids
//! are stamped onto every place, note and visit, so they live here instead of
//! being repeated as literals in the converters.

use crate::model::{Plan, Trip};

pub const DEFAULT_TRIP_ID: i64 = 1;
pub const DEFAULT_PLAN_ID: i64 = 27;

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeConfig {
    /// Written as `trip_id` on places, activities and notes.
    pub trip_id: i64,
    /// Written as `plan_id` on visits and traverses.
    pub plan_id: i64,
    /// Literal `trips` collection.
    pub trips: Vec<Trip>,
    /// Literal `plans` collection.
    pub plans: Vec<Plan>,
}

impl NormalizeConfig {
    /// The hand-authored trip and plan, re-keyed to the given ids.
    pub fn with_ids(trip_id: i64, plan_id: i64) -> Self {
        let trip = Trip {
            id: trip_id,
            name: "Wereldreis".to_string(),
        };
        let plan = Plan {
            id: plan_id,
            name: "v1.3 Borneo met Marit".to_string(),
            start_date: "2026-04-23".to_string(),
            note: None,
            priority: -3.5,
            lat: 111.53775498472487,
            lng: 1.1009214790479405,
            zoom: 5.464522016500074,
            trip_id,
        };
        Self {
            trip_id,
            plan_id,
            trips: vec![trip],
            plans: vec![plan],
        }
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self::with_ids(DEFAULT_TRIP_ID, DEFAULT_PLAN_ID)
    }
}
