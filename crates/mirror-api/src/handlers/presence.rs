//! Presence trigger handler
//!
//! Receives the platform's write event for `/presence/{uId}`. Always
//! acknowledges with 200 once the mirror handler returns; the outbound POST
//! keeps running in the background.

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use mirror_core::{PresenceChange, UserId};
use mirror_service::MirrorOutcome;
use tracing::warn;

use crate::response::TriggerAck;
use crate::state::AppState;

/// Presence write trigger
///
/// POST /presence/:u_id
pub async fn on_presence_write(
    State(state): State<AppState>,
    Path(u_id): Path<String>,
    body: Bytes,
) -> Json<TriggerAck> {
    let user_id = match UserId::parse(&u_id) {
        Ok(id) => id,
        Err(e) => {
            warn!(error = %e, "Unusable user id in trigger path, ignoring delivery");
            return Json(TriggerAck::from(&MirrorOutcome::NoData));
        }
    };

    // Unreadable payloads are treated like a deleted record
    let change = serde_json::from_slice::<PresenceChange>(&body).unwrap_or_else(|e| {
        warn!(uid = %user_id, error = %e, "Unrecognized trigger payload, treating as no data");
        PresenceChange::default()
    });

    let outcome = state.handler().handle_change(user_id, &change);

    Json(TriggerAck::from(&outcome))
}
