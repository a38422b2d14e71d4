// crates/tripdb-core/src/model/convert.rs
use crate::config::NormalizeConfig;
use crate::model::flat::{
    Activity, CostFields, Country, CountryNote, Database, Place, PlaceNote, Route, RouteNote,
    Season, Traverse, Visit,
};
use crate::raw::{
    CostFieldsRaw, CountryNoteRaw, CountryRaw, EdgeRaw, PlaceItemRaw, PlaceRaw, RawMocks,
    RouteNoteRaw, RouteRaw, SeasonRaw, VisitRaw,
};
use serde_json::{Map, Value};

/// **Normalizer:** Raw mocks -> flat database.
///
/// Each category is converted on its own, in file order. Traverses come from
/// the raw visits' `outgoing_edges`, not from the converted visits.
pub fn from_raw(raw: RawMocks, config: &NormalizeConfig) -> Database {
    let mut db = Database {
        trips: config.trips.clone(),
        plans: config.plans.clone(),
        ..Database::default()
    };

    db.countries = raw
        .countries
        .into_iter()
        .map(|(id, c)| country_from_raw(id, c))
        .collect();

    db.seasons = raw
        .seasons
        .into_iter()
        .map(|(id, s)| season_from_raw(id, s))
        .collect();

    db.places = raw
        .places
        .into_iter()
        .map(|(id, p)| place_from_raw(id, p, config.trip_id))
        .collect();

    db.routes = raw.routes.into_iter().map(|(_, r)| route_from_raw(r)).collect();

    for (id, v_raw) in raw.visits {
        db.traverses
            .extend(traverses_from_raw(&id, &v_raw.outgoing_edges, config.plan_id));
        db.visits.push(visit_from_raw(id, v_raw, config.plan_id));
    }

    // The grouping key is ignored: every item carries its own owner id.
    db.activities = raw
        .activities
        .into_iter()
        .flat_map(|(_, items)| items)
        .map(|a| activity_from_raw(a, config.trip_id))
        .collect();

    db.place_notes = raw
        .place_notes
        .into_iter()
        .flat_map(|(_, items)| items)
        .map(|n| place_note_from_raw(n, config.trip_id))
        .collect();

    db.country_notes = raw
        .country_notes
        .into_iter()
        .flat_map(|(_, items)| items)
        .map(|n| country_note_from_raw(n, config.trip_id))
        .collect();

    db.route_notes = raw
        .route_notes
        .into_iter()
        .flat_map(|(_, items)| items)
        .map(|n| route_note_from_raw(n, config.trip_id))
        .collect();

    db
}

pub fn country_from_raw(id: String, raw: CountryRaw) -> Country {
    Country { id, name: raw.name }
}

/// `id` first, then the raw columns, then `country` renamed to `country_id`.
///
/// A raw `id` or `country_id` column overrides the value but keeps its slot.
pub fn season_from_raw(id: String, raw: SeasonRaw) -> Season {
    let mut fields = Map::with_capacity(raw.fields.len() + 2);
    fields.insert("id".to_string(), Value::String(id));
    fields.extend(raw.fields);
    fields.insert("country_id".to_string(), raw.country);
    Season(fields)
}

pub fn place_from_raw(id: String, raw: PlaceRaw, trip_id: i64) -> Place {
    Place {
        id,
        name: raw.name,
        lat: raw.coordinates.lat,
        lng: raw.coordinates.lng,
        country_id: raw.country_id,
        season_id: raw.season_id,
        trip_id,
        accommodation_cost: raw.estimated_costs.accommodation,
        food_cost: raw.estimated_costs.food,
        miscellaneous_cost: raw.estimated_costs.miscellaneous,
    }
}

pub fn route_from_raw(raw: RouteRaw) -> Route {
    let mut fields = raw.0;
    let route = fields
        .get("route")
        .map(|v| strip_spaces(&id_fragment(v)))
        .unwrap_or_default();
    fields.insert("route".to_string(), Value::String(route));
    Route(fields)
}

pub fn visit_from_raw(id: String, raw: VisitRaw, plan_id: i64) -> Visit {
    Visit {
        id,
        place_id: raw.place,
        plan_id,
        nights: raw.nights,
        included: raw.included,
    }
}

pub fn traverses_from_raw(visit_id: &str, edges: &[EdgeRaw], plan_id: i64) -> Vec<Traverse> {
    edges
        .iter()
        .map(|edge| Traverse {
            id: traverse_id(visit_id, &edge.destination_id, &edge.route_id),
            source_visit_id: visit_id.to_string(),
            target_visit_id: edge.destination_id.clone(),
            route_id: edge.route_id.clone(),
            priority: edge.priority.clone(),
            rent_until: edge.rent_until.clone(),
            includes_accommodation: edge.includes_accommodation.clone(),
            plan_id,
        })
        .collect()
}

pub fn activity_from_raw(raw: PlaceItemRaw, trip_id: i64) -> Activity {
    Activity {
        id: raw.id,
        place_id: raw.place_id,
        description: String::new(),
        costs: costs_from_raw(raw.costs),
        trip_id,
    }
}

pub fn place_note_from_raw(raw: PlaceItemRaw, trip_id: i64) -> PlaceNote {
    PlaceNote {
        id: raw.id,
        place_id: raw.place_id,
        description: String::new(),
        costs: costs_from_raw(raw.costs),
        trip_id,
    }
}

pub fn country_note_from_raw(raw: CountryNoteRaw, trip_id: i64) -> CountryNote {
    CountryNote {
        id: raw.id,
        country_id: raw.country_id,
        description: String::new(),
        costs: costs_from_raw(raw.costs),
        trip_id,
    }
}

pub fn route_note_from_raw(raw: RouteNoteRaw, trip_id: i64) -> RouteNote {
    RouteNote {
        id: raw.id,
        route_id: raw.route_id,
        description: String::new(),
        trip_id,
    }
}

fn costs_from_raw(raw: CostFieldsRaw) -> CostFields {
    CostFields {
        category: raw.category,
        estimated_cost: raw.estimated_cost,
        actual_cost: raw.actual_cost,
        included: raw.included,
        paid: raw.paid,
    }
}

/// Composite traverse id: `"{visit}-{destination}-{route}"`.
pub fn traverse_id(visit_id: &str, destination_id: &Value, route_id: &Value) -> String {
    format!(
        "{visit_id}-{}-{}",
        id_fragment(destination_id),
        id_fragment(route_id)
    )
}

/// Text form of a JSON value: strings unquoted, anything else as compact JSON.
fn id_fragment(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn strip_spaces(s: &str) -> String {
    s.chars().filter(|c| *c != ' ').collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse<T: serde::de::DeserializeOwned>(v: Value) -> T {
        serde_json::from_value(v).expect("fixture should match the raw shape")
    }

    #[test]
    fn place_flattens_coordinates_and_costs() {
        let raw: PlaceRaw = parse(json!({
            "name": "Kuching",
            "coordinates": { "lat": 1.5535, "lng": 110.3593 },
            "country_id": "my",
            "season_id": "s1",
            "estimated_costs": { "accommodation": 25, "food": 12.5, "miscellaneous": null },
            "unused": true
        }));

        let place = place_from_raw("p1".into(), raw, 1);
        assert_eq!(place.id, "p1");
        assert_eq!(place.lat, json!(1.5535));
        assert_eq!(place.lng, json!(110.3593));
        assert_eq!(place.trip_id, 1);
        assert_eq!(place.accommodation_cost, json!(25));
        assert_eq!(place.food_cost, json!(12.5));
        assert_eq!(place.miscellaneous_cost, Value::Null);
    }

    #[test]
    fn place_without_coordinates_is_rejected() {
        let res: Result<PlaceRaw, _> = serde_json::from_value(json!({
            "name": "Nowhere",
            "country_id": "my",
            "season_id": "s1",
            "estimated_costs": { "accommodation": 0, "food": 0, "miscellaneous": 0 }
        }));
        assert!(res.is_err());
    }

    #[test]
    fn season_renames_country_and_keeps_column_order() {
        let raw: SeasonRaw = parse(json!({
            "country": "my",
            "jan": 1,
            "feb": 2,
            "jan_reason": null
        }));

        let season = season_from_raw("s1".into(), raw);
        let keys: Vec<&str> = season.0.keys().map(String::as_str).collect();
        assert_eq!(keys, ["id", "jan", "feb", "jan_reason", "country_id"]);
        assert_eq!(season.0["id"], json!("s1"));
        assert_eq!(season.0["country_id"], json!("my"));
        assert!(!season.0.contains_key("country"));
    }

    #[test]
    fn route_is_stringified_without_spaces() {
        let raw: RouteRaw = parse(json!({
            "id": "r1",
            "route": "[[110.1, 1.5], [110.2, 1.6]]",
            "type": "bus"
        }));
        let route = route_from_raw(raw);
        assert_eq!(route.route(), Some("[[110.1,1.5],[110.2,1.6]]"));

        let keys: Vec<&str> = route.0.keys().map(String::as_str).collect();
        assert_eq!(keys, ["id", "route", "type"]);
    }

    #[test]
    fn non_string_route_is_encoded_first() {
        let raw: RouteRaw = parse(json!({ "route": [[1, 2], [3, 4]] }));
        assert_eq!(route_from_raw(raw).route(), Some("[[1,2],[3,4]]"));
    }

    #[test]
    fn route_without_route_field_is_rejected() {
        let res: Result<RouteRaw, _> = serde_json::from_value(json!({ "id": "r1" }));
        assert!(res.is_err());
    }

    #[test]
    fn visit_with_edges_yields_traverses() {
        let raw: VisitRaw = parse(json!({
            "place": "p1",
            "nights": 2,
            "included": true,
            "outgoing_edges": [{
                "destination_id": "6",
                "route_id": "r1",
                "priority": 1,
                "rent_until": null,
                "includes_accommodation": false
            }]
        }));

        let traverses = traverses_from_raw("5", &raw.outgoing_edges, 27);
        let visit = visit_from_raw("5".into(), raw, 27);

        assert_eq!(visit.id, "5");
        assert_eq!(visit.place_id, json!("p1"));
        assert_eq!(visit.plan_id, 27);

        assert_eq!(traverses.len(), 1);
        let t = &traverses[0];
        assert_eq!(t.id, "5-6-r1");
        assert_eq!(t.source_visit_id, "5");
        assert_eq!(t.target_visit_id, json!("6"));
        assert_eq!(t.rent_until, Value::Null);
        assert_eq!(t.plan_id, 27);
    }

    #[test]
    fn visit_without_edges_yields_no_traverses() {
        let raw: VisitRaw = parse(json!({ "place": "p1", "nights": 0, "included": false }));
        assert!(raw.outgoing_edges.is_empty());
        assert!(traverses_from_raw("7", &raw.outgoing_edges, 27).is_empty());
    }

    #[test]
    fn season_raw_id_and_country_id_keep_their_slots() {
        let raw: SeasonRaw = parse(json!({
            "jan": 1,
            "country_id": "old",
            "id": "raw",
            "country": "my"
        }));

        let season = season_from_raw("k".into(), raw);
        assert_eq!(
            serde_json::to_string(&season).unwrap(),
            r#"{"id":"raw","jan":1,"country_id":"my"}"#
        );
    }

    #[test]
    fn numeric_ids_render_without_quotes() {
        assert_eq!(traverse_id("5", &json!(6), &json!(12)), "5-6-12");
    }

    #[test]
    fn null_and_bool_ids_render_as_json() {
        assert_eq!(traverse_id("5", &Value::Null, &json!(true)), "5-null-true");

        let raw: RouteRaw = parse(json!({ "route": [["a", true, null]] }));
        assert_eq!(route_from_raw(raw).route(), Some(r#"[["a",true,null]]"#));
    }

    #[test]
    fn notes_blank_description_and_stamp_trip() {
        let item: PlaceItemRaw = parse(json!({
            "id": "a1",
            "place_id": "p1",
            "description": "Climb Mount Kinabalu",
            "category": "hike",
            "estimated_cost": 300,
            "actual_cost": null,
            "included": true,
            "paid": false
        }));
        let activity = activity_from_raw(item, 1);
        assert_eq!(activity.description, "");
        assert_eq!(activity.costs.category, json!("hike"));
        assert_eq!(activity.trip_id, 1);

        let route_note: RouteNoteRaw = parse(json!({
            "id": "n1",
            "route_id": "r1",
            "description": "overnight ferry",
            "category": "transport"
        }));
        let note = route_note_from_raw(route_note, 1);
        let out = serde_json::to_value(&note).unwrap();
        assert_eq!(
            out,
            json!({ "id": "n1", "route_id": "r1", "description": "", "trip_id": 1 })
        );
    }

    #[test]
    fn from_raw_keeps_file_order_and_literal_collections() {
        let raw = RawMocks {
            countries: vec![
                ("my".into(), parse(json!({ "name": "Malaysia" }))),
                ("id".into(), parse(json!({ "name": "Indonesia" }))),
            ],
            visits: vec![
                ("5".into(), parse(json!({
                    "place": "p1", "nights": 2, "included": true,
                    "outgoing_edges": [
                        { "destination_id": "6", "route_id": "r1", "priority": 1,
                          "rent_until": null, "includes_accommodation": false },
                        { "destination_id": "7", "route_id": "r2", "priority": 2,
                          "rent_until": "7", "includes_accommodation": true }
                    ]
                }))),
                ("6".into(), parse(json!({ "place": "p2", "nights": 1, "included": true }))),
            ],
            ..RawMocks::default()
        };

        let db = from_raw(raw, &NormalizeConfig::default());
        assert_eq!(db.trips.len(), 1);
        assert_eq!(db.plans.len(), 1);
        assert_eq!(db.countries[0].id, "my");
        assert_eq!(db.countries[1].id, "id");
        assert_eq!(db.visits.len(), 2);
        let ids: Vec<&str> = db.traverses.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["5-6-r1", "5-7-r2"]);
    }
}
