//! trip-planner core
//!
//! Builds round-trip requests, hands them to an external optimizer, and
//! validates the itinerary it returns.

pub mod error;
pub mod traits;
pub mod request;
pub mod prompt;
pub mod route;
pub mod map_link;
pub mod planner;
pub mod session;
pub mod gemini;
