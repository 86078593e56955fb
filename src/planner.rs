//! Request → optimizer → result pipeline.

use tracing::{debug, error, info, warn};

use crate::error::TripError;
use crate::prompt::OptimizerPrompt;
use crate::request::TripRequest;
use crate::route::{OptimizedRoute, parse_result};
use crate::traits::RouteOptimizer;

/// Runs a validated trip request through an injected optimizer.
#[derive(Debug, Clone)]
pub struct Planner<O> {
    optimizer: O,
}

impl<O: RouteOptimizer> Planner<O> {
    pub fn new(optimizer: O) -> Self {
        Self { optimizer }
    }

    pub fn optimizer(&self) -> &O {
        &self.optimizer
    }

    /// Ask the optimizer for a route and validate its answer.
    ///
    /// Makes exactly one optimizer call and never retries.
    pub fn optimize(&self, request: &TripRequest) -> Result<OptimizedRoute, TripError> {
        let prompt = OptimizerPrompt::for_request(request);
        let backend = self.optimizer.name();

        debug!(
            backend,
            stops = request.stops().len(),
            timed = request.timed_stop_id().is_some(),
            "requesting optimized route"
        );

        let raw = self.optimizer.request_route(&prompt).inspect_err(|err| match err {
            TripError::RateLimited => warn!(backend, "optimizer is rate limited"),
            other => error!(backend, error = %other, "optimizer call failed"),
        })?;

        match parse_result(&raw) {
            Ok(route) => {
                info!(
                    backend,
                    waypoints = route.waypoints().len(),
                    total_distance = %route.total_distance,
                    total_time = %route.total_time,
                    "route optimized"
                );
                Ok(route)
            }
            Err(err) => {
                error!(
                    backend,
                    payload_len = raw.len(),
                    reason = %err,
                    "optimizer returned a malformed result"
                );
                Err(err)
            }
        }
    }
}
