//! Presence mirror handler
//!
//! Invoked once per write to `/presence/{uId}`. Shapes the post-write record
//! into a `PresenceEvent` and hands it to the sink on a detached task, so the
//! invocation completes without waiting on the downstream endpoint.
//!
//! Delivery is best-effort: at most one POST per invocation, no retry, no
//! ordering or deduplication across invocations. The outcome of the POST is
//! only ever logged.

use std::sync::Arc;

use mirror_common::{MirrorTargetConfig, MIRROR_URL_VAR};
use mirror_core::{
    MirrorResponse, MirrorSink, PresenceChange, PresenceEvent, PresenceSnapshot, SinkResult,
    UserId,
};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn, Instrument, Span};

/// What an invocation did before returning to the trigger platform
#[derive(Debug)]
pub enum MirrorOutcome {
    /// No recognizable post-write record (deleted, never existed, malformed)
    NoData,
    /// Mirror URL not configured; nothing sent
    Unconfigured,
    /// POST issued on a detached task
    Dispatched(DeliveryHandle),
}

impl MirrorOutcome {
    /// Stable name for responses and logs
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoData => "no_data",
            Self::Unconfigured => "unconfigured",
            Self::Dispatched(_) => "dispatched",
        }
    }

    #[must_use]
    pub fn is_dispatched(&self) -> bool {
        matches!(self, Self::Dispatched(_))
    }
}

/// Handle to a detached delivery
///
/// Dropping it does not cancel the delivery.
#[derive(Debug)]
pub struct DeliveryHandle {
    task: JoinHandle<SinkResult<MirrorResponse>>,
}

impl DeliveryHandle {
    /// Wait for the delivery to finish
    ///
    /// Returns `None` if the task panicked or the runtime shut it down.
    pub async fn wait(self) -> Option<SinkResult<MirrorResponse>> {
        self.task.await.ok()
    }
}

/// Presence mirror handler
#[derive(Clone)]
pub struct PresenceMirrorHandler {
    sink: Arc<dyn MirrorSink>,
    target: Arc<MirrorTargetConfig>,
}

impl PresenceMirrorHandler {
    /// Create a new handler over a sink and the mirror target settings
    pub fn new(sink: Arc<dyn MirrorSink>, target: MirrorTargetConfig) -> Self {
        Self {
            sink,
            target: Arc::new(target),
        }
    }

    /// Handle a change delivered by the trigger platform
    pub fn handle_change(&self, user_id: UserId, change: &PresenceChange) -> MirrorOutcome {
        self.handle(user_id, change.after_snapshot())
    }

    /// Handle one post-write snapshot
    ///
    /// Must be called from within a tokio runtime. Never fails: every path
    /// ends in a normal completion.
    #[instrument(skip_all, fields(uid = %user_id))]
    pub fn handle(&self, user_id: UserId, snapshot: Option<PresenceSnapshot>) -> MirrorOutcome {
        let Some(snapshot) = snapshot else {
            debug!("No presence data after write, nothing to mirror");
            return MirrorOutcome::NoData;
        };

        let Some(url) = self.target.destination() else {
            error!(var = MIRROR_URL_VAR, "Mirror URL is not set, skipping presence mirror");
            return MirrorOutcome::Unconfigured;
        };

        if snapshot.has_malformed_online() {
            warn!("Presence record has a non-boolean online flag, mirroring as offline");
        }

        let event = PresenceEvent::from_snapshot(user_id, &snapshot);
        info!(online = event.online, "Dispatching presence mirror");

        MirrorOutcome::Dispatched(self.dispatch(url.to_string(), event))
    }

    /// Spawn the POST and its outcome logging as a detached continuation
    fn dispatch(&self, url: String, event: PresenceEvent) -> DeliveryHandle {
        let sink = Arc::clone(&self.sink);

        let task = tokio::spawn(
            async move {
                let result = sink.deliver(&url, &event).await;
                match &result {
                    Ok(response) => info!(
                        status = response.status,
                        body = %response.body,
                        "Presence mirrored successfully"
                    ),
                    Err(e) => error!(code = e.code(), error = %e, "Error mirroring presence"),
                }
                result
            }
            .instrument(Span::current()),
        );

        DeliveryHandle { task }
    }
}

impl std::fmt::Debug for PresenceMirrorHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PresenceMirrorHandler")
            .field("sink", &"MirrorSink")
            .field("target", &self.target)
            .finish()
    }
}
