//! Trip request construction and validation.
//!
//! A [`TripRequest`] is built fresh from the current form state for every
//! optimization attempt. Building is pure: the same inputs always produce
//! the same request or the same error.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::TripError;

/// Fewest non-blank stops an optimization needs.
pub const MIN_STOPS: usize = 2;

/// Upper bound on the stop list, enforced when adding stops.
pub const MAX_STOPS: usize = 10;

/// Dwell time given to a freshly added stop.
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

const CLOCK_FORMAT: &str = "%H:%M";

/// Stable identity of a stop within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StopId(pub u64);

/// A destination the trip must visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    pub id: StopId,
    pub address: String,
    /// Appointment time as entered (HH:MM, 24h). Only meaningful for the timed stop.
    pub appointment_time: Option<String>,
    /// Planned dwell time in minutes.
    pub duration_minutes: u32,
}

impl Stop {
    pub fn new(id: StopId, address: impl Into<String>) -> Self {
        Self {
            id,
            address: address.into(),
            appointment_time: None,
            duration_minutes: DEFAULT_DURATION_MINUTES,
        }
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = minutes;
        self
    }

    pub fn with_appointment(mut self, time: impl Into<String>) -> Self {
        self.appointment_time = Some(time.into());
        self
    }

    /// A stop counts toward optimization only with a non-blank address.
    pub fn is_valid(&self) -> bool {
        !self.address.trim().is_empty()
    }

    fn has_appointment_time(&self) -> bool {
        self.appointment_time
            .as_deref()
            .is_some_and(|time| !time.trim().is_empty())
    }
}

/// A validated, normalized trip ready to be sent to an optimizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    departure_address: String,
    departure_time: NaiveTime,
    stops: Vec<Stop>,
    timed_stop: Option<StopId>,
}

impl TripRequest {
    pub fn departure_address(&self) -> &str {
        &self.departure_address
    }

    pub fn departure_time(&self) -> NaiveTime {
        self.departure_time
    }

    /// Departure time rendered as HH:MM.
    pub fn departure_time_label(&self) -> String {
        self.departure_time.format(CLOCK_FORMAT).to_string()
    }

    /// Non-blank stops in the order they were entered.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn timed_stop_id(&self) -> Option<StopId> {
        self.timed_stop
    }

    /// The designated timed stop, which always carries an appointment time.
    pub fn timed_stop(&self) -> Option<&Stop> {
        let id = self.timed_stop?;
        self.stops.iter().find(|stop| stop.id == id)
    }

    /// Stops other than the departure address itself, which is the implicit
    /// origin and final destination of the round trip.
    pub fn destinations(&self) -> impl Iterator<Item = &Stop> {
        self.stops.iter().filter(|stop| !self.is_departure_echo(stop))
    }

    /// True when `stop` repeats the departure address (case-insensitive).
    pub fn is_departure_echo(&self, stop: &Stop) -> bool {
        stop.address.eq_ignore_ascii_case(&self.departure_address)
    }
}

/// Validate form input and build a [`TripRequest`].
///
/// Rules are checked in order and the first failure is returned:
/// missing departure, fewer than [`MIN_STOPS`] non-blank stops, a timed stop
/// without an appointment time, then malformed clock values.
pub fn build_request(
    departure_address: &str,
    departure_time: &str,
    stops: &[Stop],
    timed_stop: Option<StopId>,
) -> Result<TripRequest, TripError> {
    let departure_address = departure_address.trim();
    if departure_address.is_empty() {
        return Err(TripError::MissingDeparture);
    }

    let valid: Vec<&Stop> = stops.iter().filter(|stop| stop.is_valid()).collect();
    if valid.len() < MIN_STOPS {
        return Err(TripError::InsufficientStops);
    }

    let appointment = match timed_stop {
        Some(id) => {
            let stop = valid
                .iter()
                .find(|stop| stop.id == id)
                .filter(|stop| stop.has_appointment_time())
                .ok_or(TripError::MissingAppointmentTime)?;
            Some((id, stop.appointment_time.as_deref().unwrap_or_default()))
        }
        None => None,
    };

    let departure_time = parse_clock(departure_time)?;
    let appointment = match appointment {
        Some((id, raw)) => Some((id, parse_clock(raw)?)),
        None => None,
    };

    let stops = valid
        .into_iter()
        .map(|stop| Stop {
            id: stop.id,
            address: stop.address.trim().to_string(),
            appointment_time: appointment
                .filter(|(id, _)| *id == stop.id)
                .map(|(_, time)| time.format(CLOCK_FORMAT).to_string()),
            duration_minutes: stop.duration_minutes,
        })
        .collect();

    Ok(TripRequest {
        departure_address: departure_address.to_string(),
        departure_time,
        stops,
        timed_stop,
    })
}

/// Parse a 24h clock value. Seconds are accepted and dropped.
pub fn parse_clock(value: &str) -> Result<NaiveTime, TripError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, CLOCK_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map(|time| time.with_second(0).unwrap_or(time))
        .map_err(|_| TripError::InvalidTime(value.to_string()))
}
