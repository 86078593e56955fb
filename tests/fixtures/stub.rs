//! Scripted optimizer stub.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use trip_planner::error::TripError;
use trip_planner::prompt::OptimizerPrompt;
use trip_planner::traits::RouteOptimizer;

/// Returns a fixed response and records every prompt it receives.
pub struct StubOptimizer {
    response: Result<String, TripError>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl StubOptimizer {
    pub fn returning(payload: impl Into<String>) -> Self {
        Self::with_response(Ok(payload.into()))
    }

    pub fn failing(err: TripError) -> Self {
        Self::with_response(Err(err))
    }

    fn with_response(response: Result<String, TripError>) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

impl RouteOptimizer for StubOptimizer {
    fn request_route(&self, prompt: &OptimizerPrompt) -> Result<String, TripError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.text.clone());
        self.response.clone()
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}
