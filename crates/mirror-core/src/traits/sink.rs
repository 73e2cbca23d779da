//! Mirror sink trait (port) - where normalized presence events are delivered
//!
//! The domain decides what to send; the infrastructure layer decides how.

use async_trait::async_trait;

use crate::entities::PresenceEvent;
use crate::error::SinkError;

/// Result type for sink operations
pub type SinkResult<T> = Result<T, SinkError>;

/// Successful reply from the mirror endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorResponse {
    /// HTTP status code (2xx)
    pub status: u16,
    /// Raw response body
    pub body: String,
}

#[async_trait]
pub trait MirrorSink: Send + Sync {
    /// Deliver one event to `url`. Called at most once per invocation, never retried.
    async fn deliver(&self, url: &str, event: &PresenceEvent) -> SinkResult<MirrorResponse>;
}
