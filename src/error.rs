//! Portal error types
//!
//! Defines the errors that can surface from the remote API, the session
//! store and the view state machines.

use thiserror::Error;

/// Errors that can occur while talking to the customer API or the session store
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortalError {
    /// The remote service answered with a not-found status
    #[error("Customer not found")]
    NotFound,

    /// Any other non-success status from the remote service
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The request never produced a response (connection refused, DNS, ...)
    #[error("Request failed: {0}")]
    Transport(String),

    /// The request timed out
    #[error("Request timeout")]
    Timeout,

    /// The response body could not be decoded
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Reading or writing the session store failed
    #[error("Session error: {0}")]
    Session(String),

    /// A request for this view is already in flight
    #[error("A request is already in progress")]
    Busy,
}

impl PortalError {
    /// True for the targeted not-found case
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortalError::NotFound)
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        PortalError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for PortalError {
    fn from(err: std::io::Error) -> Self {
        PortalError::Session(err.to_string())
    }
}

/// Result type alias for portal operations
pub type PortalResult<T> = Result<T, PortalError>;
