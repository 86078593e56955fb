//! Trip request validation tests
//!
//! Rule ordering, blank handling, timed stops, and the canonical scenarios.

mod fixtures;

use trip_planner::error::TripError;
use trip_planner::request::{Stop, StopId, TripRequest, build_request};

use fixtures::addresses::{HOME, errands};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Builder for form input with sensible defaults.
#[derive(Clone, Debug)]
struct TestTrip {
    departure: String,
    departure_time: String,
    stops: Vec<Stop>,
    timed: Option<StopId>,
}

impl TestTrip {
    fn new(departure: &str) -> Self {
        Self {
            departure: departure.to_string(),
            departure_time: "09:00".to_string(),
            stops: Vec::new(),
            timed: None,
        }
    }

    fn at(mut self, time: &str) -> Self {
        self.departure_time = time.to_string();
        self
    }

    fn stop(mut self, address: &str, minutes: u32) -> Self {
        let id = StopId(self.stops.len() as u64 + 1);
        self.stops.push(Stop::new(id, address).with_duration(minutes));
        self
    }

    fn appointment(mut self, address: &str, time: &str) -> Self {
        let id = StopId(self.stops.len() as u64 + 1);
        self.stops.push(Stop::new(id, address).with_appointment(time));
        self
    }

    fn timed(mut self, address: &str) -> Self {
        self.timed = self
            .stops
            .iter()
            .find(|stop| stop.address == address)
            .map(|stop| stop.id);
        self
    }

    fn build(&self) -> Result<TripRequest, TripError> {
        build_request(&self.departure, &self.departure_time, &self.stops, self.timed)
    }
}

fn destination_names(request: &TripRequest) -> Vec<&str> {
    request.destinations().map(|stop| stop.address.as_str()).collect()
}

// ============================================================================
// Scenario Tests
// ============================================================================

#[test]
fn test_round_trip_scenario() {
    let request = TestTrip::new("10 Main St")
        .stop("10 Main St", 0)
        .stop("Library", 20)
        .stop("Cafe", 15)
        .build()
        .expect("valid trip");

    assert_eq!(destination_names(&request), vec!["Library", "Cafe"]);
    let durations: Vec<u32> = request.destinations().map(|s| s.duration_minutes).collect();
    assert_eq!(durations, vec![20, 15]);
    assert!(request.timed_stop().is_none());
}

#[test]
fn test_timed_stop_without_time_scenario() {
    let result = TestTrip::new("10 Main St")
        .stop("10 Main St", 0)
        .stop("Library", 20)
        .stop("Cafe", 15)
        .timed("Cafe")
        .build();

    assert_eq!(result, Err(TripError::MissingAppointmentTime));
}

#[test]
fn test_timed_stop_with_time() {
    let request = TestTrip::new(HOME.address)
        .stop(errands(1)[0].address, 20)
        .appointment("Dentist", "14:15")
        .timed("Dentist")
        .build()
        .unwrap();

    let timed = request.timed_stop().expect("timed stop kept");
    assert_eq!(timed.address, "Dentist");
    assert_eq!(timed.appointment_time.as_deref(), Some("14:15"));
}

// ============================================================================
// Stop Count Tests
// ============================================================================

#[test]
fn test_fewer_than_two_non_blank_stops() {
    let cases: Vec<Vec<&str>> = vec![
        vec![],
        vec!["Library"],
        vec!["", ""],
        vec!["   ", "Library", "\t"],
        vec!["", "", "", "", "", "", "", "", "", "Cafe"],
    ];

    for addresses in cases {
        let mut trip = TestTrip::new("Home");
        for address in &addresses {
            trip = trip.stop(address, 30);
        }
        assert_eq!(
            trip.build(),
            Err(TripError::InsufficientStops),
            "stops {:?} should be insufficient",
            addresses
        );
    }
}

#[test]
fn test_full_list_accepted_in_order() {
    let mut trip = TestTrip::new(HOME.address);
    for place in errands(10) {
        trip = trip.stop(place.address, 30);
    }

    let request = trip.build().unwrap();
    let expected: Vec<&str> = errands(10).iter().map(|p| p.address).collect();
    assert_eq!(destination_names(&request), expected);
}

#[test]
fn test_blank_stops_between_valid_ones_are_dropped() {
    let request = TestTrip::new("Home")
        .stop("Library", 10)
        .stop("  ", 10)
        .stop("Cafe", 10)
        .build()
        .unwrap();

    let ids: Vec<StopId> = request.stops().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![StopId(1), StopId(3)]);
}

// ============================================================================
// Rule Ordering Tests
// ============================================================================

#[test]
fn test_missing_departure_wins() {
    let result = TestTrip::new("  ").at("garbage").timed("x").build();
    assert_eq!(result, Err(TripError::MissingDeparture));
}

#[test]
fn test_stop_count_checked_before_timed_stop() {
    let result = TestTrip::new("Home").stop("Cafe", 5).timed("Cafe").build();
    assert_eq!(result, Err(TripError::InsufficientStops));
}

#[test]
fn test_timed_stop_checked_before_clock_format() {
    let result = TestTrip::new("Home")
        .at("not a time")
        .stop("Library", 5)
        .stop("Cafe", 5)
        .timed("Cafe")
        .build();
    assert_eq!(result, Err(TripError::MissingAppointmentTime));
}

#[test]
fn test_invalid_departure_time() {
    let result = TestTrip::new("Home").at("24:30").stop("A", 5).stop("B", 5).build();
    assert_eq!(result, Err(TripError::InvalidTime("24:30".to_string())));
}

// ============================================================================
// Purity Tests
// ============================================================================

#[test]
fn test_build_is_idempotent() {
    let trip = TestTrip::new(" Home ")
        .stop("Library ", 20)
        .stop("", 5)
        .appointment("Cafe", "11:00")
        .timed("Cafe");

    let first = trip.build().unwrap();
    let second = trip.build().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_input_is_not_modified() {
    let trip = TestTrip::new("Home").stop("  Library  ", 20).stop("Cafe", 15);
    let before = trip.stops.clone();
    trip.build().unwrap();
    assert_eq!(trip.stops, before);
}
