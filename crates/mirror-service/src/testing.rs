//! In-memory sink for tests
//!
//! Enabled for this crate's tests and, through the `test-util` feature, for
//! downstream crates that want to observe deliveries without a network.

use async_trait::async_trait;
use mirror_core::{MirrorResponse, MirrorSink, PresenceEvent, SinkError, SinkResult};
use parking_lot::Mutex;

/// A delivery the sink received
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedDelivery {
    pub url: String,
    pub event: PresenceEvent,
}

#[derive(Debug, Clone, Copy)]
enum Reply {
    Ok,
    Status(u16),
    Unreachable,
}

/// `MirrorSink` that records every delivery and answers with a fixed reply
#[derive(Debug)]
pub struct RecordingSink {
    deliveries: Mutex<Vec<RecordedDelivery>>,
    reply: Reply,
}

impl RecordingSink {
    /// Sink that accepts every delivery with `200 OK`
    #[must_use]
    pub fn new() -> Self {
        Self::with_reply(Reply::Ok)
    }

    /// Sink that answers every delivery with the given status
    #[must_use]
    pub fn failing_status(status: u16) -> Self {
        Self::with_reply(Reply::Status(status))
    }

    /// Sink that fails every delivery at the transport level
    #[must_use]
    pub fn unreachable() -> Self {
        Self::with_reply(Reply::Unreachable)
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            deliveries: Mutex::new(Vec::new()),
            reply,
        }
    }

    /// Snapshot of deliveries so far
    pub fn deliveries(&self) -> Vec<RecordedDelivery> {
        self.deliveries.lock().clone()
    }

    /// Number of deliveries so far
    pub fn count(&self) -> usize {
        self.deliveries.lock().len()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MirrorSink for RecordingSink {
    async fn deliver(&self, url: &str, event: &PresenceEvent) -> SinkResult<MirrorResponse> {
        self.deliveries.lock().push(RecordedDelivery {
            url: url.to_string(),
            event: event.clone(),
        });

        match self.reply {
            Reply::Ok => Ok(MirrorResponse {
                status: 200,
                body: "ok".to_string(),
            }),
            Reply::Status(status) => Err(SinkError::Status {
                status,
                body: "recorded failure".to_string(),
            }),
            Reply::Unreachable => Err(SinkError::Transport("connection refused".to_string())),
        }
    }
}
