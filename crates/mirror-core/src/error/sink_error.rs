//! Sink errors - failures delivering a mirror event downstream

use thiserror::Error;

/// Errors raised by a `MirrorSink`
#[derive(Debug, Error)]
pub enum SinkError {
    /// Endpoint answered with a non-success status
    #[error("Mirror endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Connection, DNS, TLS, timeout or malformed URL
    #[error("Mirror transport error: {0}")]
    Transport(String),

    /// Event could not be encoded
    #[error("Mirror payload encoding error: {0}")]
    Encoding(String),
}

impl SinkError {
    /// Get error code for logs
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Status { .. } => "MIRROR_STATUS",
            Self::Transport(_) => "MIRROR_TRANSPORT",
            Self::Encoding(_) => "MIRROR_ENCODING",
        }
    }

    /// HTTP status returned by the endpoint, if it answered at all
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the request never got a response
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
