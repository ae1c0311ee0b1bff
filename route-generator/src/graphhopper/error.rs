//! Route client error types.

/// Errors from a single route request.
///
/// Every variant is recoverable at the run level: the generator logs the
/// failure and moves on to the next pair.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// Connection, timeout or body read failure
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The routing service answered with a non-success status
    #[error("graphhopper: {status} {reason}")]
    Status { status: u16, reason: String },

    /// The configured endpoint is not a valid URL
    #[error("invalid endpoint {url:?}: {message}")]
    InvalidEndpoint { url: String, message: String },
}

impl RouteError {
    /// Whether the failure happened below the HTTP layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, RouteError::Transport(_))
    }

    /// The HTTP status code, for status failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            RouteError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
