//! Seams between the planner core and the outside world.
//!
//! The optimizer is deliberately opaque: the core hands it a serialized
//! request and receives raw text back. Concrete backends implement
//! [`RouteOptimizer`]; tests substitute deterministic stubs.

use crate::error::TripError;
use crate::prompt::OptimizerPrompt;

/// Computes an optimized round trip for a serialized trip request.
///
/// Implementations return the raw response payload, which is expected to
/// hold JSON matching [`OptimizerPrompt::response_schema`]. Throttling must be
/// reported as [`TripError::RateLimited`]; every other failure as
/// [`TripError::OptimizationFailed`]. Implementations must not retry on
/// their own.
pub trait RouteOptimizer: Send + Sync {
    fn request_route(&self, prompt: &OptimizerPrompt) -> Result<String, TripError>;

    /// Short name used in log output.
    fn name(&self) -> &'static str;
}

impl<T: RouteOptimizer + ?Sized> RouteOptimizer for &T {
    fn request_route(&self, prompt: &OptimizerPrompt) -> Result<String, TripError> {
        (**self).request_route(prompt)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<T: RouteOptimizer + ?Sized> RouteOptimizer for Box<T> {
    fn request_route(&self, prompt: &OptimizerPrompt) -> Result<String, TripError> {
        (**self).request_route(prompt)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
