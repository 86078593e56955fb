//! Error taxonomy for trip planning.

use thiserror::Error;

/// Message shown for any failure that is not the user's to fix directly.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Failed to optimize the route. The addresses may be invalid or the service could be temporarily unavailable.";

pub const RATE_LIMITED_MESSAGE: &str = "The service is currently busy. Please try again in a moment.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TripError {
    #[error("departure location is missing")]
    MissingDeparture,

    #[error("at least {min} destinations are required", min = crate::request::MIN_STOPS)]
    InsufficientStops,

    #[error("the scheduled stop has no appointment time")]
    MissingAppointmentTime,

    #[error("invalid time {0:?}, expected HH:MM")]
    InvalidTime(String),

    #[error("optimizer is rate limited")]
    RateLimited,

    #[error("optimization failed: {0}")]
    OptimizationFailed(String),

    #[error("malformed optimizer result: {0}")]
    MalformedResult(String),

    #[error("an optimization is already in progress")]
    AttemptInProgress,
}

impl TripError {
    /// True for failures detected locally, before any optimizer call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TripError::MissingDeparture
                | TripError::InsufficientStops
                | TripError::MissingAppointmentTime
                | TripError::InvalidTime(_)
        )
    }

    /// The text for the session's single message slot.
    pub fn user_message(&self) -> String {
        match self {
            TripError::MissingDeparture => "Please enter a departure location.".to_string(),
            TripError::InsufficientStops => format!(
                "Please enter at least {} destinations to optimize.",
                crate::request::MIN_STOPS
            ),
            TripError::MissingAppointmentTime => {
                "Please enter a time for the scheduled stop.".to_string()
            }
            TripError::InvalidTime(value) => {
                format!("\"{}\" is not a valid time. Use HH:MM.", value)
            }
            TripError::RateLimited => RATE_LIMITED_MESSAGE.to_string(),
            TripError::OptimizationFailed(_) | TripError::MalformedResult(_) => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
            TripError::AttemptInProgress => {
                "An optimization is already running. Please wait for it to finish.".to_string()
            }
        }
    }
}

/// Fatal configuration problems, raised once at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API_KEY environment variable not set")]
    MissingApiKey,

    #[error("invalid GEMINI_TIMEOUT_SECS value: {0}")]
    InvalidTimeout(String),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
