//! Serialization of a trip request for the optimizer.
//!
//! The optimizer is a generative model, so the request is natural language
//! plus a JSON Schema describing the only answer shape we accept.

use std::fmt::Write as _;

use serde_json::{Value, json};

use crate::request::TripRequest;

/// Everything an optimizer backend needs to answer a trip request.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizerPrompt {
    pub text: String,
    pub response_schema: Value,
}

impl OptimizerPrompt {
    pub fn for_request(request: &TripRequest) -> Self {
        Self {
            text: prompt_text(request),
            response_schema: response_schema(),
        }
    }
}

/// Render the request as instructions for the optimizer.
///
/// Every stop is listed in entry order with its dwell time, including stops
/// that repeat the departure address. The departure address is both the
/// first and the last point of the trip.
pub fn prompt_text(request: &TripRequest) -> String {
    let mut text = String::new();

    text.push_str(
        "Act as a route planning expert. Solve the travelling salesperson problem for the stops below, \
         taking the time spent at each stop into account.\n",
    );
    let _ = writeln!(
        text,
        "The trip departs from \"{}\" at {} and must return to \"{}\" after visiting every stop (a round trip).",
        request.departure_address(),
        request.departure_time_label(),
        request.departure_address(),
    );
    text.push_str(
        "Include the dwell time at every stop in the arrival and departure estimates and in the total trip time.\n",
    );

    if let Some(stop) = request.timed_stop()
        && let Some(time) = stop.appointment_time.as_deref()
    {
        let _ = writeln!(
            text,
            "HARD CONSTRAINT: there is a scheduled appointment. The traveller must arrive at \"{}\" at or before {}. \
             Schedule every other stop around this appointment.",
            stop.address, time
        );
    }

    text.push_str("\nStops to visit, with the planned time at each:\n");
    for (i, stop) in request.stops().iter().enumerate() {
        let origin_note = if request.is_departure_echo(stop) {
            "; this is the departure address, so spend the time there before leaving"
        } else {
            ""
        };
        let _ = writeln!(
            text,
            "{}. {} (time to spend: {} minutes{})",
            i + 1,
            stop.address,
            stop.duration_minutes,
            origin_note
        );
    }

    text.push_str(
        "\nReturn:\n\
         1. The stops in optimal order, starting at the departure address, with estimated arrival and departure times.\n\
         2. The total driving distance.\n\
         3. The total trip duration including driving and all time spent at stops.\n\
         4. A short summary of the plan, confirming any appointment constraint.\n\
         Answer ONLY with a JSON object that follows the provided schema and nothing else.\n",
    );

    text
}

/// JSON Schema of the only answer shape accepted from the optimizer.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "optimized_route": {
                "type": "ARRAY",
                "description": "Stops in optimal order. The route is a round trip that starts and ends at the departure address.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "address": {
                            "type": "STRING",
                            "description": "Address of the stop."
                        },
                        "estimated_arrival_time": {
                            "type": "STRING",
                            "description": "Estimated arrival time, e.g. '10:15 AM'. 'Start' for the departure point."
                        },
                        "estimated_departure_time": {
                            "type": "STRING",
                            "description": "Estimated departure time, e.g. '10:45 AM'. 'Finish' for the final arrival."
                        }
                    },
                    "required": ["address", "estimated_arrival_time", "estimated_departure_time"]
                }
            },
            "total_distance": {
                "type": "STRING",
                "description": "Total driving distance with units, e.g. '125 km'."
            },
            "total_time": {
                "type": "STRING",
                "description": "Total trip duration including driving and time at stops, e.g. '4 hours 15 minutes'."
            },
            "summary": {
                "type": "STRING",
                "description": "Short natural language summary: number of stops, total duration, distance, and any appointment."
            }
        },
        "required": ["optimized_route", "total_distance", "total_time", "summary"]
    })
}
