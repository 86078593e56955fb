//! Canned optimizer payloads.

use trip_planner::route::Waypoint;

/// A well-formed answer for a round trip from `origin` through `stops`.
pub fn route_payload(origin: &str, stops: &[&str]) -> String {
    let mut waypoints = vec![waypoint(origin, "Start", "9:00 AM")];
    for (i, stop) in stops.iter().enumerate() {
        let arrive = format!("{}:15 AM", 9 + i);
        let leave = format!("{}:45 AM", 9 + i);
        waypoints.push(waypoint(stop, &arrive, &leave));
    }
    waypoints.push(waypoint(origin, &format!("{}:10 AM", 9 + stops.len()), "Finish"));

    serde_json::json!({
        "optimized_route": waypoints,
        "total_distance": "42 km",
        "total_time": format!("{} hours 10 minutes", stops.len()),
        "summary": format!("Visit {} stops and return home.", stops.len()),
    })
    .to_string()
}

fn waypoint(address: &str, arrival: &str, departure: &str) -> Waypoint {
    Waypoint {
        address: address.to_string(),
        estimated_arrival_time: arrival.to_string(),
        estimated_departure_time: departure.to_string(),
    }
}

/// Model output wrapped the way chat models often wrap JSON.
pub fn fenced(payload: &str) -> String {
    format!("  \n```json\n{}\n```\n", payload)
}

pub const EMPTY_ROUTE: &str =
    r#"{"optimized_route":[], "total_distance":"10 km","total_time":"1h","summary":"ok"}"#;

pub const MISSING_SUMMARY: &str = r#"{"optimized_route":[{"address":"A","estimated_arrival_time":"Start","estimated_departure_time":"9:00"}],
    "total_distance":"10 km","total_time":"1h"}"#;

pub const BLANK_ADDRESS: &str = r#"{"optimized_route":[{"address":"","estimated_arrival_time":"Start","estimated_departure_time":"9:00"}],
    "total_distance":"10 km","total_time":"1h","summary":"ok"}"#;

pub const PROSE: &str = "I'm sorry, I can't plan that route right now.";
