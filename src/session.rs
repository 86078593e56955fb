//! Form state for one planning session.
//!
//! The session owns the editable trip (departure fields, ordered stops, the
//! optional timed stop), the latest result, and a single message slot. At
//! most one optimization attempt is outstanding at a time; attempts are
//! numbered so that a completion arriving after a reset, or for an older
//! attempt, is dropped instead of overwriting newer state. A completion for
//! a form that was edited while the attempt ran is dropped as well.

use tracing::debug;

use crate::error::TripError;
use crate::planner::Planner;
use crate::request::{MAX_STOPS, MIN_STOPS, Stop, StopId, TripRequest, build_request};
use crate::route::OptimizedRoute;
use crate::traits::RouteOptimizer;

pub const DEFAULT_DEPARTURE_TIME: &str = "09:00";

/// A started optimization attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub generation: u64,
    pub request: TripRequest,
}

#[derive(Debug, Clone)]
pub struct PlannerSession {
    departure_address: String,
    departure_time: String,
    stops: Vec<Stop>,
    timed_stop: Option<StopId>,
    next_id: u64,
    generation: u64,
    /// Bumped on every form edit.
    revision: u64,
    in_flight: Option<InFlight>,
    result: Option<OptimizedRoute>,
    message: Option<String>,
}

/// The outstanding attempt and the form revision it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InFlight {
    generation: u64,
    revision: u64,
}

impl Default for PlannerSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PlannerSession {
    /// A fresh session with [`MIN_STOPS`] blank stops.
    pub fn new() -> Self {
        let mut session = Self {
            departure_address: String::new(),
            departure_time: DEFAULT_DEPARTURE_TIME.to_string(),
            stops: Vec::with_capacity(MAX_STOPS),
            timed_stop: None,
            next_id: 1,
            generation: 0,
            revision: 0,
            in_flight: None,
            result: None,
            message: None,
        };
        for _ in 0..MIN_STOPS {
            session.push_blank_stop();
        }
        session
    }

    pub fn departure_address(&self) -> &str {
        &self.departure_address
    }

    pub fn departure_time(&self) -> &str {
        &self.departure_time
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn stop(&self, id: StopId) -> Option<&Stop> {
        self.stops.iter().find(|stop| stop.id == id)
    }

    pub fn timed_stop(&self) -> Option<StopId> {
        self.timed_stop
    }

    pub fn result(&self) -> Option<&OptimizedRoute> {
        self.result.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True while an attempt is outstanding; the UI disables submission.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn can_add_stop(&self) -> bool {
        self.stops.len() < MAX_STOPS
    }

    pub fn can_remove_stop(&self) -> bool {
        self.stops.len() > MIN_STOPS
    }

    pub fn set_departure_address(&mut self, address: impl Into<String>) {
        self.departure_address = address.into();
        self.form_changed();
    }

    pub fn set_departure_time(&mut self, time: impl Into<String>) {
        self.departure_time = time.into();
        self.form_changed();
    }

    /// Append a blank stop. Does nothing once the list is full.
    pub fn add_stop(&mut self) -> Option<StopId> {
        if !self.can_add_stop() {
            return None;
        }
        self.form_changed();
        Some(self.push_blank_stop())
    }

    /// Remove a stop by id. Does nothing at the minimum list size.
    pub fn remove_stop(&mut self, id: StopId) -> bool {
        if !self.can_remove_stop() {
            return false;
        }
        let Some(index) = self.stops.iter().position(|stop| stop.id == id) else {
            return false;
        };

        self.stops.remove(index);
        if self.timed_stop == Some(id) {
            self.timed_stop = None;
        }
        self.form_changed();
        true
    }

    pub fn set_stop_address(&mut self, id: StopId, address: impl Into<String>) -> bool {
        let address = address.into();
        self.edit_stop(id, |stop| stop.address = address)
    }

    /// Set or clear (with a blank value) a stop's appointment time.
    pub fn set_appointment_time(&mut self, id: StopId, time: impl Into<String>) -> bool {
        let time = time.into();
        self.edit_stop(id, |stop| {
            stop.appointment_time = if time.trim().is_empty() { None } else { Some(time) };
        })
    }

    pub fn set_duration(&mut self, id: StopId, minutes: u32) -> bool {
        self.edit_stop(id, |stop| stop.duration_minutes = minutes)
    }

    /// Designate `id` as the timed stop, or clear it if it already is.
    pub fn toggle_timed_stop(&mut self, id: StopId) -> bool {
        if self.stop(id).is_none() {
            return false;
        }
        self.timed_stop = if self.timed_stop == Some(id) { None } else { Some(id) };
        self.form_changed();
        true
    }

    /// Validate the form and start an attempt.
    ///
    /// Validation failures are written to the message slot and returned; no
    /// attempt is started for them.
    pub fn begin_attempt(&mut self) -> Result<Attempt, TripError> {
        if self.is_busy() {
            return Err(TripError::AttemptInProgress);
        }

        let request = build_request(
            &self.departure_address,
            &self.departure_time,
            &self.stops,
            self.timed_stop,
        )
        .inspect_err(|err| self.message = Some(err.user_message()))?;

        self.generation += 1;
        self.in_flight = Some(InFlight {
            generation: self.generation,
            revision: self.revision,
        });
        self.message = None;
        self.result = None;

        debug!(generation = self.generation, "optimization attempt started");
        Ok(Attempt {
            generation: self.generation,
            request,
        })
    }

    /// Record the outcome of an attempt.
    ///
    /// Returns false, leaving the session untouched, when `generation` is
    /// not the outstanding attempt. When the form was edited after the
    /// attempt started, the outcome is dropped and the session is no longer
    /// busy; this also returns false.
    pub fn complete(&mut self, generation: u64, outcome: Result<OptimizedRoute, TripError>) -> bool {
        let Some(in_flight) = self.in_flight.filter(|f| f.generation == generation) else {
            debug!(
                generation,
                current = ?self.in_flight.map(|f| f.generation),
                "dropping stale optimization result"
            );
            return false;
        };

        self.in_flight = None;
        if in_flight.revision != self.revision {
            debug!(
                generation,
                started_at = in_flight.revision,
                revision = self.revision,
                "form edited during optimization, dropping result"
            );
            return false;
        }

        match outcome {
            Ok(route) => {
                self.result = Some(route);
                self.message = None;
            }
            Err(err) => {
                self.result = None;
                self.message = Some(err.user_message());
            }
        }
        true
    }

    /// Abandon any outstanding attempt and clear the result and message.
    pub fn reset(&mut self) {
        self.in_flight = None;
        self.result = None;
        self.message = None;
    }

    /// Validate, optimize and record the outcome in one call.
    pub fn submit<O: RouteOptimizer>(&mut self, planner: &Planner<O>) -> Result<&OptimizedRoute, TripError> {
        let attempt = self.begin_attempt()?;
        let outcome = planner.optimize(&attempt.request);
        let failure = outcome.as_ref().err().cloned();
        self.complete(attempt.generation, outcome);

        match failure {
            Some(err) => Err(err),
            None => self
                .result
                .as_ref()
                .ok_or_else(|| TripError::OptimizationFailed("result was discarded".to_string())),
        }
    }

    fn push_blank_stop(&mut self) -> StopId {
        let id = StopId(self.next_id);
        self.next_id += 1;
        self.stops.push(Stop::new(id, String::new()));
        id
    }

    fn edit_stop<F>(&mut self, id: StopId, edit: F) -> bool
    where
        F: FnOnce(&mut Stop),
    {
        match self.stops.iter_mut().find(|stop| stop.id == id) {
            Some(stop) => {
                edit(stop);
                self.form_changed();
                true
            }
            None => false,
        }
    }

    fn form_changed(&mut self) {
        self.revision += 1;
        self.result = None;
    }
}
