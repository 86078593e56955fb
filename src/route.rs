//! Optimizer result contract.
//!
//! The optimizer's answer is untrusted text. [`parse_result`] accepts it only
//! when it is structurally complete; nothing partial is ever handed to the
//! caller. Times and distances are display strings and are not re-derived.

use serde::{Deserialize, Serialize};

use crate::error::TripError;
use crate::map_link;

/// One stop of the optimized itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Waypoint {
    pub address: String,
    /// May be the literal "Start" for the origin.
    pub estimated_arrival_time: String,
    /// May be the literal "Finish" for the final arrival.
    pub estimated_departure_time: String,
}

/// A validated itinerary, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizedRoute {
    pub optimized_route: Vec<Waypoint>,
    pub total_distance: String,
    pub total_time: String,
    pub summary: String,
}

impl OptimizedRoute {
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.optimized_route
    }

    /// The round-trip origin, the first waypoint.
    pub fn origin(&self) -> Option<&Waypoint> {
        self.optimized_route.first()
    }

    /// Map directions link through every waypoint in order.
    pub fn maps_url(&self) -> String {
        map_link::maps_url(self.optimized_route.iter().map(|w| w.address.as_str()))
    }
}

/// Parse and validate a raw optimizer payload.
pub fn parse_result(raw: &str) -> Result<OptimizedRoute, TripError> {
    let body = strip_code_fence(raw);
    let route: OptimizedRoute =
        serde_json::from_str(body).map_err(|err| TripError::MalformedResult(err.to_string()))?;
    validate(&route)?;
    Ok(route)
}

fn validate(route: &OptimizedRoute) -> Result<(), TripError> {
    if route.optimized_route.is_empty() {
        return Err(malformed("optimized_route is empty"));
    }

    for (i, waypoint) in route.optimized_route.iter().enumerate() {
        if is_blank(&waypoint.address) {
            return Err(TripError::MalformedResult(format!("waypoint {} has a blank address", i)));
        }
        if is_blank(&waypoint.estimated_arrival_time) {
            return Err(TripError::MalformedResult(format!("waypoint {} has no arrival time", i)));
        }
        if is_blank(&waypoint.estimated_departure_time) {
            return Err(TripError::MalformedResult(format!("waypoint {} has no departure time", i)));
        }
    }

    if is_blank(&route.total_distance) {
        return Err(malformed("total_distance is blank"));
    }
    if is_blank(&route.total_time) {
        return Err(malformed("total_time is blank"));
    }
    if is_blank(&route.summary) {
        return Err(malformed("summary is blank"));
    }

    Ok(())
}

fn malformed(reason: &str) -> TripError {
    TripError::MalformedResult(reason.to_string())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Trim surrounding whitespace and an enclosing Markdown code fence.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = body.strip_suffix("```").unwrap_or(body);

    // Opening fence may carry a language tag, e.g. ```json, on its own line
    // or directly before the payload.
    let body = body.trim_start();
    let tag_len = body
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(body.len());
    body[tag_len..].trim()
}
